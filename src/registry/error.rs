//! Registry error types
//!
//! Error types for stream registry operations.

use super::entry::ObjectId;

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Wrapper reported itself invalid
    #[error("Stream object '{subject}' is not valid")]
    InvalidStreamObject { subject: String },
    /// Id is already in use
    #[error("Stream object id already in use: {0}")]
    DuplicateId(ObjectId),
    /// Every id up to `u64::MAX` has been handed out
    #[error("Stream object ids exhausted")]
    IdsExhausted,
}
