//! Script host
//!
//! A Rhai engine preloaded with the control surface module. Script output
//! and control surface notices share a single output channel.

use std::rc::Rc;

use rhai::{Dynamic, Engine, EvalAltResult};

use crate::control::ControlSurface;

use super::module::register_livelink_module;

/// Rhai engine bound to a control surface
pub struct ScriptHost {
    engine: Engine,
    surface: Rc<ControlSurface>,
}

impl ScriptHost {
    /// Create a host whose output goes to `tracing`
    pub fn new(surface: Rc<ControlSurface>) -> Self {
        Self::with_output(surface, |line| {
            tracing::info!(target: "livelink::script", "{}", line);
        })
    }

    /// Create a host sending `print` output and notices to `output`
    pub fn with_output<F>(surface: Rc<ControlSurface>, output: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        let output: Rc<dyn Fn(&str)> = Rc::new(output);
        let mut engine = Engine::new();

        let print = Rc::clone(&output);
        engine.on_print(move |line| print(line));
        engine.on_debug(|line, source, pos| {
            tracing::debug!(
                target: "livelink::script",
                source = source.unwrap_or("<script>"),
                position = %pos,
                "{}",
                line
            );
        });

        surface.set_notice_sink(output);
        register_livelink_module(&mut engine, &surface);

        Self { engine, surface }
    }

    /// Evaluate a script
    pub fn run(&self, script: &str) -> Result<Dynamic, Box<EvalAltResult>> {
        self.engine.eval::<Dynamic>(script)
    }

    /// The underlying engine
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Mutable access to the underlying engine, e.g. to register more APIs
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// The bound control surface
    pub fn surface(&self) -> &Rc<ControlSurface> {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::control::BridgeConfig;
    use crate::device::{DeviceConfig, StreamDevice};
    use crate::scene::{InMemoryScene, ModelKind};
    use crate::stream::KindClassifier;

    struct Fixture {
        scene: Rc<InMemoryScene>,
        device: Rc<RefCell<StreamDevice>>,
        host: ScriptHost,
        output: Rc<RefCell<Vec<String>>>,
    }

    fn fixture_with(config: BridgeConfig) -> Fixture {
        let scene = Rc::new(InMemoryScene::new());
        scene.add_model("Camera001", ModelKind::Camera);
        scene.add_model("Rig_IK_Null", ModelKind::Null);
        scene.add_model_with_bones("Hero", ModelKind::Character, ["Reference", "Hips"]);

        let device = StreamDevice::shared(DeviceConfig::default());
        let surface = Rc::new(ControlSurface::with_config(
            scene.clone(),
            Rc::new(KindClassifier::new()),
            config,
        ));
        surface.attach(&device);

        let output = Rc::new(RefCell::new(Vec::new()));
        let sink = output.clone();
        let host = ScriptHost::with_output(surface, move |line| {
            sink.borrow_mut().push(line.to_owned());
        });

        Fixture {
            scene,
            device,
            host,
            output,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(BridgeConfig::default())
    }

    impl Fixture {
        fn registry_len(&self) -> usize {
            self.device.borrow().registry().len()
        }

        /// Run `call` and return the caught error message, or "ok"
        fn caught(&self, call: &str) -> String {
            let script = format!(
                r#"
                let outcome = "ok";
                try {{ {call}; }} catch (err) {{ outcome = err; }}
                outcome
                "#
            );
            self.host.engine().eval::<String>(&script).unwrap()
        }
    }

    fn runtime_message(err: &EvalAltResult) -> String {
        match err {
            EvalAltResult::ErrorRuntime(value, _) => value.to_string(),
            EvalAltResult::ErrorInFunctionCall(_, _, inner, _) => runtime_message(inner),
            other => panic!("unexpected script error: {other}"),
        }
    }

    #[test]
    fn test_add_returns_true() {
        let fx = fixture();

        let added = fx
            .host
            .engine()
            .eval::<bool>(r#"livelink::add_stream_object("Camera001")"#)
            .unwrap();
        assert!(added);
        assert_eq!(fx.registry_len(), 1);
    }

    #[test]
    fn test_scenario_through_script() {
        let fx = fixture();

        assert_eq!(fx.caught(r#"livelink::add_stream_object("Camera001")"#), "ok");
        assert_eq!(fx.registry_len(), 1);

        assert_eq!(
            fx.caught(r#"livelink::add_stream_object("Rig_IK_Null")"#),
            "Failed to create stream object for model: Rig_IK_Null"
        );
        assert_eq!(fx.registry_len(), 1);

        assert_eq!(fx.caught(r#"livelink::remove_stream_object("Camera001")"#), "ok");
        assert_eq!(fx.registry_len(), 0);

        assert_eq!(
            fx.caught(r#"livelink::remove_stream_object("Camera001")"#),
            "Model 'Camera001' is not in the LiveLink stream"
        );
    }

    #[test]
    fn test_not_found_propagates_as_runtime_error() {
        let fx = fixture();

        let err = fx
            .host
            .run(r#"livelink::add_stream_object("Ghost")"#)
            .unwrap_err();
        assert_eq!(runtime_message(&err), "Model not found: Ghost");

        let err = fx
            .host
            .run(r#"livelink::remove_stream_object("Ghost")"#)
            .unwrap_err();
        assert_eq!(runtime_message(&err), "Model not found: Ghost");
    }

    #[test]
    fn test_bad_argument() {
        let fx = fixture();
        let expected = "Argument must be a model name (string)";

        assert_eq!(fx.caught("livelink::add_stream_object(42)"), expected);
        assert_eq!(fx.caught("livelink::remove_stream_object(())"), expected);
        assert_eq!(fx.caught(r#"livelink::add_stream_object("")"#), expected);
        assert_eq!(fx.registry_len(), 0);
    }

    #[test]
    fn test_device_not_initialized() {
        let fx = fixture();
        fx.host.surface().detach();
        let expected = "LiveLink device is not initialized";

        assert_eq!(fx.caught(r#"livelink::add_stream_object("Camera001")"#), expected);
        // Device state is reported before argument errors
        assert_eq!(fx.caught("livelink::remove_stream_object(42)"), expected);
        assert_eq!(fx.caught("livelink::get_stream_objects()"), expected);
    }

    #[test]
    fn test_device_busy() {
        let fx = fixture();

        let guard = fx.device.borrow_mut();
        let expected = "LiveLink device is busy";
        assert_eq!(fx.caught(r#"livelink::add_stream_object("Camera001")"#), expected);
        assert_eq!(fx.caught(r#"livelink::remove_stream_object("Camera001")"#), expected);
        assert_eq!(fx.caught("livelink::get_stream_objects()"), expected);
        drop(guard);

        assert_eq!(fx.caught(r#"livelink::add_stream_object("Camera001")"#), "ok");
        assert_eq!(fx.registry_len(), 1);
    }

    #[test]
    fn test_idempotent_add_from_script() {
        let fx = fixture();

        let script = r#"
            let a = livelink::add_stream_object("Hero");
            let b = livelink::add_stream_object("Hero");
            a && b
        "#;
        assert!(fx.host.engine().eval::<bool>(script).unwrap());
        assert_eq!(fx.registry_len(), 1);
    }

    #[test]
    fn test_get_stream_objects() {
        let fx = fixture();

        let script = r#"
            livelink::add_stream_object("Hero");
            livelink::add_stream_object("Camera001");
            livelink::get_stream_objects()
        "#;
        let names: Vec<String> = fx
            .host
            .engine()
            .eval::<rhai::Array>(script)
            .unwrap()
            .into_iter()
            .map(|v| v.into_string().unwrap())
            .collect();

        assert_eq!(names, ["Hero", "Camera001"]);
    }

    #[test]
    fn test_import_by_name() {
        let fx = fixture();

        let script = r#"
            import "livelink" as ll;
            ll::add_stream_object("Camera001")
        "#;
        assert!(fx.host.engine().eval::<bool>(script).unwrap());
        assert_eq!(fx.registry_len(), 1);
    }

    #[test]
    fn test_custom_module_name() {
        let fx = fixture_with(BridgeConfig::default().module_name("stream"));

        assert!(fx
            .host
            .engine()
            .eval::<bool>(r#"stream::add_stream_object("Camera001")"#)
            .unwrap());
        assert!(fx
            .host
            .run(r#"livelink::add_stream_object("Camera001")"#)
            .is_err());
    }

    #[test]
    fn test_print_and_notices_share_output() {
        let fx = fixture();

        fx.host
            .run(
                r#"
                livelink::add_stream_object("Camera001");
                print("streaming " + livelink::get_stream_objects().len());
                "#,
            )
            .unwrap();

        assert_eq!(
            *fx.output.borrow(),
            vec![
                "Successfully added model 'Camera001' to LiveLink stream".to_string(),
                "streaming 1".to_string(),
            ]
        );
    }

    #[test]
    fn test_scene_edits_are_visible_to_scripts() {
        let fx = fixture();

        assert_eq!(
            fx.caught(r#"livelink::add_stream_object("Light001")"#),
            "Model not found: Light001"
        );

        fx.scene.add_model("Light001", ModelKind::Light);
        assert_eq!(fx.caught(r#"livelink::add_stream_object("Light001")"#), "ok");
    }
}
