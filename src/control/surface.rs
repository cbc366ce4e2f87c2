//! Control surface
//!
//! Name-based add/remove requests coming from the scripting side. Each
//! request resolves the name against the host scene, checks the registry by
//! handle identity and either mutates the registry or reports a
//! [`BridgeError`].

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::device::{DeviceSlot, StreamDevice};
use crate::error::{BridgeError, Result};
use crate::scene::{NameResolution, SceneLookup, SceneModel};
use crate::stream::{Classify, KindClassifier};

use super::config::BridgeConfig;

/// Callback receiving human-readable confirmations
pub type NoticeSink = Rc<dyn Fn(&str)>;

/// Add/remove/list operations over the active device's registry
pub struct ControlSurface {
    scene: Rc<dyn SceneLookup>,
    classifier: Rc<dyn Classify>,
    device: DeviceSlot,
    notices: RefCell<Option<NoticeSink>>,
    config: BridgeConfig,
}

impl ControlSurface {
    /// Create a surface with the default classifier and configuration
    pub fn new(scene: Rc<dyn SceneLookup>) -> Self {
        Self::with_config(scene, Rc::new(KindClassifier::new()), BridgeConfig::default())
    }

    /// Create a surface with explicit collaborators
    pub fn with_config(
        scene: Rc<dyn SceneLookup>,
        classifier: Rc<dyn Classify>,
        config: BridgeConfig,
    ) -> Self {
        Self {
            scene,
            classifier,
            device: DeviceSlot::new(),
            notices: RefCell::new(None),
            config,
        }
    }

    /// Get the surface configuration
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Point the surface at a device without taking ownership
    pub fn attach(&self, device: &Rc<RefCell<StreamDevice>>) {
        self.device.attach(device);
        tracing::debug!("Control surface attached");
    }

    /// Forget the device
    pub fn detach(&self) {
        self.device.detach();
        tracing::debug!("Control surface detached");
    }

    /// Check if a live device is attached
    pub fn is_attached(&self) -> bool {
        self.device.is_attached()
    }

    /// Fail with [`BridgeError::DeviceNotInitialized`] unless a live device is attached
    pub fn check_device(&self) -> Result<()> {
        self.device().map(|_| ())
    }

    /// Install the sink receiving confirmation notices
    pub fn set_notice_sink(&self, sink: NoticeSink) {
        *self.notices.borrow_mut() = Some(sink);
    }

    /// Start streaming the scene object labelled `model_name`
    ///
    /// Adding an object that is already streamed succeeds without creating a
    /// second entry.
    pub fn add_stream_object(&self, model_name: &str) -> Result<bool> {
        self.add(model_name).inspect_err(|e| {
            tracing::warn!(model = model_name, error = %e, "add_stream_object rejected");
        })
    }

    /// Stop streaming the scene object labelled `model_name`
    pub fn remove_stream_object(&self, model_name: &str) -> Result<bool> {
        self.remove(model_name).inspect_err(|e| {
            tracing::warn!(model = model_name, error = %e, "remove_stream_object rejected");
        })
    }

    /// Subject names of all streamed objects, in id order
    pub fn stream_objects(&self) -> Result<Vec<String>> {
        let device = self.device()?;
        let device = device.try_borrow().map_err(|_| BridgeError::DeviceBusy)?;

        Ok(device
            .registry()
            .iter()
            .map(|entry| entry.subject_name().to_owned())
            .collect())
    }

    fn add(&self, model_name: &str) -> Result<bool> {
        let device = self.device()?;
        let model = self.resolve(model_name)?;

        // The device borrow ends before notices run, so sinks may read it
        let id = {
            let mut device = device.try_borrow_mut().map_err(|_| BridgeError::DeviceBusy)?;
            let registry = device.registry_mut();

            if let Some(entry) = registry.contains(model.handle) {
                tracing::debug!(
                    model = model_name,
                    id = %entry.id,
                    "Model is already in LiveLink stream, skipping"
                );
                return Ok(true);
            }

            let wrapper = self
                .classifier
                .classify(&model)
                .filter(|wrapper| wrapper.is_valid())
                .ok_or_else(|| BridgeError::UnsupportedModelType(model_name.to_owned()))?;

            let id = registry.next_id()?;
            registry.insert(id, wrapper)?;
            id
        };

        tracing::info!(
            model = model_name,
            id = %id,
            kind = %model.kind,
            "Added model to LiveLink stream"
        );
        self.notify(&format!(
            "Successfully added model '{model_name}' to LiveLink stream"
        ));

        Ok(true)
    }

    fn remove(&self, model_name: &str) -> Result<bool> {
        let device = self.device()?;
        let model = self.resolve(model_name)?;

        let id = {
            let mut device = device.try_borrow_mut().map_err(|_| BridgeError::DeviceBusy)?;
            let registry = device.registry_mut();

            let (id, wrapper) = registry
                .contains(model.handle)
                .map(|entry| (entry.id, Arc::clone(&entry.wrapper)))
                .ok_or_else(|| BridgeError::ModelNotStreamed(model_name.to_owned()))?;

            if !registry.remove(id, &wrapper) {
                return Err(BridgeError::ModelNotStreamed(model_name.to_owned()));
            }
            id
        };

        tracing::info!(model = model_name, id = %id, "Removed model from LiveLink stream");
        self.notify(&format!(
            "Successfully removed model '{model_name}' from LiveLink stream"
        ));

        Ok(true)
    }

    fn device(&self) -> Result<Rc<RefCell<StreamDevice>>> {
        self.device.get().ok_or(BridgeError::DeviceNotInitialized)
    }

    /// Validate the name and resolve it to a single scene object
    fn resolve(&self, model_name: &str) -> Result<SceneModel> {
        if model_name.is_empty() {
            return Err(BridgeError::BadArgument);
        }

        let matches = self.scene.find_models_by_label(model_name);

        if matches.len() > 1 && self.config.name_resolution == NameResolution::RejectAmbiguous {
            return Err(BridgeError::AmbiguousModelName {
                name: model_name.to_owned(),
                matches: matches.len(),
            });
        }

        matches
            .into_iter()
            .next()
            .ok_or_else(|| BridgeError::ModelNotFound(model_name.to_owned()))
    }

    fn notify(&self, message: &str) {
        if !self.config.console_notices {
            return;
        }
        let sink = self.notices.borrow().clone();
        if let Some(sink) = sink {
            sink(message);
        }
    }
}

impl std::fmt::Debug for ControlSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlSurface")
            .field("attached", &self.is_attached())
            .field("config", &self.config)
            .finish()
    }
}
