//! Scene console example
//!
//! Builds a small in-memory scene, attaches a stream device and runs a Rhai
//! script against the `livelink` module. A stand-in frame loop prints the
//! registry changes it observes.
//!
//! Run with: cargo run --example scene_console [SCRIPT_FILE]
//!
//! Without a script file, a built-in script is used. Set `RUST_LOG=debug`
//! to see registry activity.

use std::rc::Rc;

use livelink_bridge::registry::ChangeKind;
use livelink_bridge::{
    ControlSurface, DeviceConfig, InMemoryScene, ModelKind, ScriptHost, StreamDevice,
};

const DEFAULT_SCRIPT: &str = r#"
let models = ["Camera001", "Light001", "Character_Root", "Rig_IK_Null", "Missing"];

for name in models {
    try {
        livelink::add_stream_object(name);
        print("Added: " + name);
    } catch (err) {
        print("Failed to add " + name + ": " + err);
    }
}

print("Currently streaming:");
for subject in livelink::get_stream_objects() {
    print("  - " + subject);
}

livelink::remove_stream_object("Light001");

try {
    livelink::remove_stream_object("Light001");
} catch (err) {
    print("Second remove rejected: " + err);
}
"#;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("livelink_bridge=info".parse()?),
        )
        .init();

    let script = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_SCRIPT.to_string(),
    };

    let scene = Rc::new(InMemoryScene::new());
    scene.add_model("Camera001", ModelKind::Camera);
    scene.add_model("Light001", ModelKind::Light);
    scene.add_model_with_bones(
        "Character_Root",
        ModelKind::Character,
        ["Reference", "Hips", "Spine", "Head"],
    );
    scene.add_model("Rig_IK_Null", ModelKind::Null);

    let device = StreamDevice::shared(DeviceConfig::default().name("Console"));

    // Stand-in for the device's frame loop
    let mut events = device.borrow().subscribe();
    let frame_loop = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            let verb = match event.kind {
                ChangeKind::Added => "picked up",
                ChangeKind::Removed => "dropped",
            };
            println!("[frame loop] {} subject '{}' (id {})", verb, event.subject, event.id);
        }
    });

    let surface = Rc::new(ControlSurface::new(scene));
    surface.attach(&device);

    let host = ScriptHost::with_output(Rc::clone(&surface), |line| println!("{}", line));
    if let Err(e) = host.run(&script) {
        eprintln!("Script error: {}", e);
    }

    // Tearing the device down closes the event channel and ends the loop
    drop(device);
    frame_loop.await?;

    Ok(())
}
