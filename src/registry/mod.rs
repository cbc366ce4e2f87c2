//! Stream object registry
//!
//! The registry records which scene objects are currently streamed. Each
//! entry pairs a process-local [`ObjectId`] with the typed wrapper the
//! device's frame loop reads every frame.
//!
//! # Architecture
//!
//! ```text
//!                 StreamDevice (host owned)
//!           ┌──────────────────────────────────┐
//!           │ StreamRegistry {                 │
//!           │   objects: BTreeMap<ObjectId,    │
//!           │     StreamedObjectEntry {        │
//!           │       wrapper: Arc<dyn ...>,     │
//!           │     }>,                          │
//!           │   events: broadcast::Tx,         │
//!           │ }                                │
//!           └───────┬──────────────────┬───────┘
//!                   │                  │
//!                   ▼                  ▼
//!          [ControlSurface]      [Frame loop]
//!          insert()/remove()     iter() + subscribe()
//! ```
//!
//! # Invariants
//!
//! - At most one entry references a given scene object.
//! - Only wrappers reporting themselves valid are inserted.
//! - Ids are never reused while the registry is alive.

pub mod config;
pub mod entry;
pub mod error;
pub mod event;
pub mod store;

pub use config::RegistryConfig;
pub use entry::{ObjectId, RegistryStats, StreamedObjectEntry};
pub use error::RegistryError;
pub use event::{ChangeKind, RegistryEvent};
pub use store::StreamRegistry;
