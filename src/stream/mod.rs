//! Streaming wrappers and classification
//!
//! A scene object becomes streamable once [`Classify`] turns it into a typed
//! wrapper implementing [`StreamObject`]. The registry stores wrappers as
//! `Arc<dyn StreamObject>`, so the same wrapper can be shared with the
//! device's frame loop.

pub mod classify;
pub mod object;

pub use classify::{Classify, KindClassifier};
pub use object::{RigObject, StreamObject, SubjectRole, TransformObject};
