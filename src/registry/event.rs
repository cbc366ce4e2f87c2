//! Registry change events
//!
//! The device's frame loop subscribes to these to pick up or drop subjects
//! without restarting the stream.

use crate::scene::ModelHandle;

use super::entry::{ObjectId, StreamedObjectEntry};

/// Kind of registry change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Object entered the registry
    Added,
    /// Object left the registry
    Removed,
}

/// A change broadcast to registry subscribers
///
/// Cheap to clone; carries no reference to the wrapper itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEvent {
    /// Type of change
    pub kind: ChangeKind,
    /// Id of the affected entry
    pub id: ObjectId,
    /// Scene object of the affected entry
    pub handle: ModelHandle,
    /// Subject name of the affected entry
    pub subject: String,
}

impl RegistryEvent {
    /// Event for an inserted entry
    pub fn added(entry: &StreamedObjectEntry) -> Self {
        Self::from_entry(ChangeKind::Added, entry)
    }

    /// Event for an erased entry
    pub fn removed(entry: &StreamedObjectEntry) -> Self {
        Self::from_entry(ChangeKind::Removed, entry)
    }

    fn from_entry(kind: ChangeKind, entry: &StreamedObjectEntry) -> Self {
        Self {
            kind,
            id: entry.id,
            handle: entry.model_handle(),
            subject: entry.subject_name().to_owned(),
        }
    }
}
