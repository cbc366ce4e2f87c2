//! Device configuration

use crate::registry::RegistryConfig;

/// Stream device configuration
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Device name shown in logs
    pub name: String,

    /// Configuration of the owned registry
    pub registry: RegistryConfig,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: "LiveLink".to_string(),
            registry: RegistryConfig::default(),
        }
    }
}

impl DeviceConfig {
    /// Set the device name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the registry configuration
    pub fn registry(mut self, registry: RegistryConfig) -> Self {
        self.registry = registry;
        self
    }
}
