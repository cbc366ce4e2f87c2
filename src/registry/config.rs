//! Registry configuration

/// Stream registry configuration
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// First id handed out by the registry
    pub first_id: u64,

    /// Capacity of the change event channel
    ///
    /// Slow subscribers lag and miss events once this many are pending. The
    /// registry raises zero to one.
    pub event_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            first_id: 1,
            event_capacity: 64,
        }
    }
}

impl RegistryConfig {
    /// Set the first id handed out
    pub fn first_id(mut self, id: u64) -> Self {
        self.first_id = id;
        self
    }

    /// Set the change event channel capacity
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }
}
