//! Host-owned stream device

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Instant;

use tokio::sync::broadcast;

use crate::registry::{RegistryEvent, StreamRegistry};

use super::config::DeviceConfig;

/// Streaming device owning the registry of streamed objects
///
/// Created by the host when the device is instantiated. The registry lives
/// and dies with it; tearing the device down drops every entry.
pub struct StreamDevice {
    name: String,
    registry: StreamRegistry,
    created_at: Instant,
}

impl StreamDevice {
    /// Create a device with its registry
    pub fn new(config: DeviceConfig) -> Self {
        tracing::info!(device = %config.name, "Stream device created");

        Self {
            registry: StreamRegistry::with_config(config.registry),
            name: config.name,
            created_at: Instant::now(),
        }
    }

    /// Create a device ready to be shared with a [`DeviceSlot`]
    pub fn shared(config: DeviceConfig) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(config)))
    }

    /// Device name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the device was created
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Read access for the frame loop
    pub fn registry(&self) -> &StreamRegistry {
        &self.registry
    }

    /// Mutable access for the control surface
    pub fn registry_mut(&mut self) -> &mut StreamRegistry {
        &mut self.registry
    }

    /// Subscribe to registry changes
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.registry.subscribe()
    }
}

impl Drop for StreamDevice {
    fn drop(&mut self) {
        let dropped = self.registry.clear();
        tracing::info!(
            device = %self.name,
            dropped_objects = dropped,
            uptime_secs = self.created_at.elapsed().as_secs(),
            "Stream device torn down"
        );
    }
}

impl std::fmt::Debug for StreamDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamDevice")
            .field("name", &self.name)
            .field("registry", &self.registry)
            .finish()
    }
}

/// Non-owning reference to the active device
///
/// Empty until the host attaches a device. A device that has since been
/// dropped reads back as absent.
#[derive(Debug, Default)]
pub struct DeviceSlot {
    device: RefCell<Option<Weak<RefCell<StreamDevice>>>>,
}

impl DeviceSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the slot at a device, replacing any previous one
    pub fn attach(&self, device: &Rc<RefCell<StreamDevice>>) {
        *self.device.borrow_mut() = Some(Rc::downgrade(device));
    }

    /// Clear the slot
    pub fn detach(&self) {
        *self.device.borrow_mut() = None;
    }

    /// The device, if one is attached and still alive
    pub fn get(&self) -> Option<Rc<RefCell<StreamDevice>>> {
        self.device.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Check if a live device is attached
    pub fn is_attached(&self) -> bool {
        self.get().is_some()
    }
}
