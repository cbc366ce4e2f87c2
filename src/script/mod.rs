//! Rhai bindings for the control surface
//!
//! Registers `add_stream_object`, `remove_stream_object` and
//! `get_stream_objects` under one module. Failures are raised with Rhai's
//! runtime error, carrying the message of the underlying
//! [`BridgeError`](crate::BridgeError).

pub mod error;
pub mod host;
pub mod module;

pub use error::into_script_error;
pub use host::ScriptHost;
pub use module::{build_module, register_livelink_module};
