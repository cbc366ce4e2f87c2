//! Control surface configuration

use crate::scene::NameResolution;

/// Control surface configuration options
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Name the script module is registered under
    pub module_name: String,

    /// How a label shared by several scene objects is resolved
    pub name_resolution: NameResolution,

    /// Forward confirmations to the notice sink
    pub console_notices: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            module_name: "livelink".to_string(),
            name_resolution: NameResolution::FirstMatch,
            console_notices: true,
        }
    }
}

impl BridgeConfig {
    /// Set the script module name
    pub fn module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    /// Set the name resolution policy
    pub fn name_resolution(mut self, policy: NameResolution) -> Self {
        self.name_resolution = policy;
        self
    }

    /// Reject labels matching more than one scene object
    pub fn reject_ambiguous_names(self) -> Self {
        self.name_resolution(NameResolution::RejectAmbiguous)
    }

    /// Stop forwarding confirmations to the notice sink
    pub fn disable_console_notices(mut self) -> Self {
        self.console_notices = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();

        assert_eq!(config.module_name, "livelink");
        assert_eq!(config.name_resolution, NameResolution::FirstMatch);
        assert!(config.console_notices);
    }

    #[test]
    fn test_builder_chaining() {
        let config = BridgeConfig::default()
            .module_name("stream")
            .reject_ambiguous_names()
            .disable_console_notices();

        assert_eq!(config.module_name, "stream");
        assert_eq!(config.name_resolution, NameResolution::RejectAmbiguous);
        assert!(!config.console_notices);
    }
}
