//! Stream device
//!
//! The device is owned by the host. It owns the registry and hands it to the
//! per-frame streaming loop. The control surface only ever reaches it through
//! a [`DeviceSlot`], so a torn-down device is observed as absent instead of
//! dangling.

pub mod config;
pub mod stream_device;

pub use config::DeviceConfig;
pub use stream_device::{DeviceSlot, StreamDevice};
