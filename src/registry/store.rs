//! Stream registry implementation
//!
//! The registry that records which scene objects are currently streamed,
//! keyed by process-local ids.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::broadcast;

use crate::scene::ModelHandle;
use crate::stream::StreamObject;

use super::config::RegistryConfig;
use super::entry::{ObjectId, RegistryStats, StreamedObjectEntry};
use super::error::RegistryError;
use super::event::RegistryEvent;

/// Registry of streamed objects
///
/// Not internally synchronized: the owning device serializes access.
/// Iteration follows id order.
pub struct StreamRegistry {
    /// Map of id to entry
    objects: BTreeMap<ObjectId, StreamedObjectEntry>,

    /// Next id to hand out, `None` once the id space is used up
    next_id: Option<u64>,

    total_added: u64,
    total_removed: u64,

    /// Change fan-out to the device loop
    events: broadcast::Sender<RegistryEvent>,

    /// Configuration
    config: RegistryConfig,
}

impl StreamRegistry {
    /// Create a new stream registry with default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a new stream registry with custom configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        // broadcast::channel panics on zero capacity
        let (events, _) = broadcast::channel(config.event_capacity.max(1));

        Self {
            objects: BTreeMap::new(),
            next_id: Some(config.first_id),
            total_added: 0,
            total_removed: 0,
            events,
            config,
        }
    }

    /// Get the registry configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Allocate an id
    ///
    /// Ids are monotonic: the result differs from every id this registry has
    /// handed out or stored before. Fails with [`RegistryError::IdsExhausted`]
    /// once `u64::MAX` has been used.
    pub fn next_id(&mut self) -> Result<ObjectId, RegistryError> {
        let mut candidate = self.next_id.ok_or(RegistryError::IdsExhausted)?;

        while self.objects.contains_key(&ObjectId::new(candidate)) {
            match candidate.checked_add(1) {
                Some(next) => candidate = next,
                None => {
                    self.next_id = None;
                    tracing::warn!("Stream object id space exhausted");
                    return Err(RegistryError::IdsExhausted);
                }
            }
        }

        self.next_id = candidate.checked_add(1);
        Ok(ObjectId::new(candidate))
    }

    /// Find the entry streaming the given scene object
    ///
    /// Compares handle identity, never names. Linear in registry size.
    pub fn contains(&self, handle: ModelHandle) -> Option<&StreamedObjectEntry> {
        self.objects
            .values()
            .find(|entry| entry.model_handle() == handle)
    }

    /// Insert a wrapper under `id`
    ///
    /// Fails without touching the registry if the wrapper is invalid or the
    /// id is taken.
    pub fn insert(
        &mut self,
        id: ObjectId,
        wrapper: Arc<dyn StreamObject>,
    ) -> Result<(), RegistryError> {
        if !wrapper.is_valid() {
            return Err(RegistryError::InvalidStreamObject {
                subject: wrapper.subject_name().to_owned(),
            });
        }

        if self.objects.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }

        // Keep the allocator ahead of ids chosen by callers
        if self.next_id.is_some_and(|next| id.get() >= next) {
            self.next_id = id.get().checked_add(1);
        }

        let entry = StreamedObjectEntry::new(id, wrapper);
        let _ = self.events.send(RegistryEvent::added(&entry));

        tracing::debug!(
            id = %id,
            subject = entry.subject_name(),
            handle = %entry.model_handle(),
            role = %entry.wrapper.role(),
            "Stream object inserted"
        );

        self.objects.insert(id, entry);
        self.total_added += 1;

        Ok(())
    }

    /// Erase the entry keyed by `id` if it holds this exact wrapper
    ///
    /// Returns `false` and leaves the registry untouched when nothing matches.
    pub fn remove(&mut self, id: ObjectId, wrapper: &Arc<dyn StreamObject>) -> bool {
        let matches = self
            .objects
            .get(&id)
            .is_some_and(|entry| entry.holds(wrapper));

        if !matches {
            tracing::trace!(id = %id, "Stream object remove ignored, no matching entry");
            return false;
        }

        if let Some(entry) = self.objects.remove(&id) {
            let _ = self.events.send(RegistryEvent::removed(&entry));
            self.total_removed += 1;

            tracing::debug!(
                id = %id,
                subject = entry.subject_name(),
                handle = %entry.model_handle(),
                "Stream object removed"
            );
        }

        true
    }

    /// Get an entry by id
    pub fn get(&self, id: ObjectId) -> Option<&StreamedObjectEntry> {
        self.objects.get(&id)
    }

    /// Iterate entries in id order
    pub fn iter(&self) -> impl Iterator<Item = &StreamedObjectEntry> {
        self.objects.values()
    }

    /// Number of registered objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Subscribe to registry changes
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.events.subscribe()
    }

    /// Get registry statistics
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            object_count: self.objects.len(),
            total_added: self.total_added,
            total_removed: self.total_removed,
            next_id: self.next_id.map(ObjectId::new),
        }
    }

    /// Remove every entry, emitting a removal event for each
    ///
    /// Does not rewind the id allocator.
    pub fn clear(&mut self) -> usize {
        let objects = std::mem::take(&mut self.objects);
        let count = objects.len();

        for entry in objects.into_values() {
            let _ = self.events.send(RegistryEvent::removed(&entry));
        }
        self.total_removed += count as u64;

        if count > 0 {
            tracing::debug!(count = count, "Stream registry cleared");
        }

        count
    }
}

impl Default for StreamRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StreamRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamRegistry")
            .field("objects", &self.objects.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
