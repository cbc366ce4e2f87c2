//! Registry entry types
//!
//! This module defines the per-object state stored in the registry.

use std::sync::Arc;
use std::time::Instant;

use crate::scene::ModelHandle;
use crate::stream::StreamObject;

/// Process-local identifier of a streamed object
///
/// Allocated monotonically by the registry and never reused while the
/// registry is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Wrap a raw id value
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Entry for a single streamed object in the registry
#[derive(Debug, Clone)]
pub struct StreamedObjectEntry {
    /// Registry key
    pub id: ObjectId,

    /// Wrapper read by the device's frame loop
    pub wrapper: Arc<dyn StreamObject>,

    /// When the object was added
    pub added_at: Instant,
}

impl StreamedObjectEntry {
    pub(super) fn new(id: ObjectId, wrapper: Arc<dyn StreamObject>) -> Self {
        Self {
            id,
            wrapper,
            added_at: Instant::now(),
        }
    }

    /// Scene object the entry streams
    pub fn model_handle(&self) -> ModelHandle {
        self.wrapper.model_handle()
    }

    /// Subject name published for the entry
    pub fn subject_name(&self) -> &str {
        self.wrapper.subject_name()
    }

    /// Check if the entry holds exactly this wrapper instance
    pub fn holds(&self, wrapper: &Arc<dyn StreamObject>) -> bool {
        Arc::ptr_eq(&self.wrapper, wrapper)
    }
}

/// Statistics for the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Objects currently registered
    pub object_count: usize,
    /// Objects inserted since the registry was created
    pub total_added: u64,
    /// Objects removed since the registry was created
    pub total_removed: u64,
    /// Lowest id the next allocation may return, `None` once exhausted
    pub next_id: Option<ObjectId>,
}
