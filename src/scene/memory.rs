//! In-memory host scene
//!
//! Stands in for the host application's scene graph when the bridge is
//! embedded in tools, demos and tests.

use std::cell::{Cell, RefCell};

use super::{ModelHandle, ModelKind, SceneLookup, SceneModel};

/// A flat, insertion-ordered list of scene models
///
/// Uses interior mutability so the host can keep editing the scene while
/// the control surface holds a shared reference to it.
#[derive(Debug)]
pub struct InMemoryScene {
    models: RefCell<Vec<SceneModel>>,
    next_handle: Cell<u64>,
}

impl InMemoryScene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self {
            models: RefCell::new(Vec::new()),
            next_handle: Cell::new(1),
        }
    }

    /// Add a model and return its handle
    pub fn add_model(&self, label: impl Into<String>, kind: ModelKind) -> ModelHandle {
        self.add_model_with_bones(label, kind, std::iter::empty::<String>())
    }

    /// Add a model with a bone hierarchy and return its handle
    pub fn add_model_with_bones<I, S>(
        &self,
        label: impl Into<String>,
        kind: ModelKind,
        bones: I,
    ) -> ModelHandle
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let handle = ModelHandle::from_raw(self.next_handle.get());
        self.next_handle.set(handle.as_raw() + 1);

        let model = SceneModel::new(handle, label, kind).with_bones(bones);
        self.models.borrow_mut().push(model);
        handle
    }

    /// Delete a model from the scene
    pub fn remove_model(&self, handle: ModelHandle) -> bool {
        let mut models = self.models.borrow_mut();
        let before = models.len();
        models.retain(|m| m.handle != handle);
        models.len() != before
    }

    /// Rename a model, keeping its identity
    pub fn rename_model(&self, handle: ModelHandle, label: impl Into<String>) -> bool {
        let mut models = self.models.borrow_mut();
        match models.iter_mut().find(|m| m.handle == handle) {
            Some(model) => {
                model.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Number of models in the scene
    pub fn len(&self) -> usize {
        self.models.borrow().len()
    }

    /// Check if the scene has no models
    pub fn is_empty(&self) -> bool {
        self.models.borrow().is_empty()
    }
}

impl Default for InMemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneLookup for InMemoryScene {
    fn find_models_by_label(&self, name: &str) -> Vec<SceneModel> {
        self.models
            .borrow()
            .iter()
            .filter(|m| m.label == name)
            .cloned()
            .collect()
    }
}
