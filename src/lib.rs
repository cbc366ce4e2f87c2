//! # livelink-bridge
//!
//! Lets an embedded Rhai interpreter add scene objects to, and remove them
//! from, a live stream registry without restarting the stream.
//!
//! ```text
//!   script ──► livelink::add_stream_object("Camera001")
//!                │
//!                ▼
//!         ControlSurface ──► SceneLookup (host)   name → handle
//!                │      └──► Classify             handle → wrapper
//!                ▼
//!         StreamDevice { StreamRegistry } ──► frame loop (iter + events)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use std::rc::Rc;
//!
//! use livelink_bridge::{ControlSurface, DeviceConfig, InMemoryScene, ModelKind, ScriptHost, StreamDevice};
//!
//! let scene = Rc::new(InMemoryScene::new());
//! scene.add_model("Camera001", ModelKind::Camera);
//!
//! let device = StreamDevice::shared(DeviceConfig::default());
//! let surface = Rc::new(ControlSurface::new(scene));
//! surface.attach(&device);
//!
//! let host = ScriptHost::new(surface);
//! host.run(r#"livelink::add_stream_object("Camera001")"#).unwrap();
//! assert_eq!(device.borrow().registry().len(), 1);
//! ```

pub mod control;
pub mod device;
pub mod error;
pub mod registry;
pub mod scene;
pub mod script;
pub mod stream;

pub use control::{BridgeConfig, ControlSurface};
pub use device::{DeviceConfig, DeviceSlot, StreamDevice};
pub use error::{BridgeError, Result};
pub use registry::{ObjectId, RegistryConfig, RegistryEvent, StreamRegistry};
pub use scene::{InMemoryScene, ModelHandle, ModelKind, NameResolution, SceneLookup, SceneModel};
pub use script::ScriptHost;
pub use stream::{Classify, KindClassifier, StreamObject, SubjectRole};
