//! Scripting control surface
//!
//! Exposes name-based mutation of the stream registry. The surface holds the
//! host collaborators (scene lookup, classification) and a non-owning slot
//! for the device; the script bindings in [`crate::script`] are a thin layer
//! on top of it.

pub mod config;
pub mod surface;

pub use config::BridgeConfig;
pub use surface::{ControlSurface, NoticeSink};
