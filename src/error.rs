//! Error types
//!
//! [`BridgeError`] is the taxonomy reported to script callers. Every variant
//! is terminal for the single request that produced it and leaves the
//! registry untouched.

use crate::registry::RegistryError;

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Error type for control surface operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// No live device is attached
    #[error("LiveLink device is not initialized")]
    DeviceNotInitialized,

    /// The device is being accessed by the host and cannot be borrowed
    #[error("LiveLink device is busy")]
    DeviceBusy,

    /// Argument is missing, empty or not a string
    #[error("Argument must be a model name (string)")]
    BadArgument,

    /// No scene object carries the name
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Several scene objects carry the name and the policy forbids guessing
    #[error("Model name is ambiguous: {name} ({matches} matches)")]
    AmbiguousModelName { name: String, matches: usize },

    /// The object exists but cannot be streamed
    #[error("Failed to create stream object for model: {0}")]
    UnsupportedModelType(String),

    /// The object exists but was never added
    #[error("Model '{0}' is not in the LiveLink stream")]
    ModelNotStreamed(String),

    /// Registry rejected the mutation
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl BridgeError {
    /// Model named by the error, if any
    pub fn model_name(&self) -> Option<&str> {
        match self {
            BridgeError::ModelNotFound(name)
            | BridgeError::UnsupportedModelType(name)
            | BridgeError::ModelNotStreamed(name)
            | BridgeError::AmbiguousModelName { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Check if the error comes from caller input rather than device state
    pub fn is_caller_error(&self) -> bool {
        !matches!(
            self,
            BridgeError::DeviceNotInitialized | BridgeError::DeviceBusy | BridgeError::Registry(_)
        )
    }
}
