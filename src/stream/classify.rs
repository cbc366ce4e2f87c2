//! Scene object classification
//!
//! Picks the streaming wrapper for a scene object based on the kind the
//! host reports for it.

use std::sync::Arc;

use crate::scene::{ModelKind, SceneModel};

use super::object::{RigObject, StreamObject, SubjectRole, TransformObject};

/// Builds the typed streaming wrapper for a scene object
///
/// `None` means the object's kind cannot be streamed.
pub trait Classify {
    fn classify(&self, model: &SceneModel) -> Option<Arc<dyn StreamObject>>;
}

/// Default classifier keyed on [`ModelKind`]
///
/// Nulls, markers and unknown kinds carry nothing worth streaming and are
/// rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct KindClassifier;

impl KindClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Classify for KindClassifier {
    fn classify(&self, model: &SceneModel) -> Option<Arc<dyn StreamObject>> {
        let object: Arc<dyn StreamObject> = match model.kind {
            ModelKind::Camera => Arc::new(TransformObject::new(model, SubjectRole::Camera)),
            ModelKind::Light => Arc::new(TransformObject::new(model, SubjectRole::Light)),
            ModelKind::Mesh => Arc::new(TransformObject::new(model, SubjectRole::Transform)),
            ModelKind::Character => Arc::new(RigObject::new(model, SubjectRole::Character)),
            ModelKind::Skeleton => Arc::new(RigObject::new(model, SubjectRole::Skeleton)),
            ModelKind::Null | ModelKind::Marker | ModelKind::Unknown => {
                tracing::trace!(model = %model.label, kind = %model.kind, "No stream object for kind");
                return None;
            }
        };

        Some(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ModelHandle;

    fn classify(kind: ModelKind) -> Option<Arc<dyn StreamObject>> {
        let model = SceneModel::new(ModelHandle::from_raw(3), "Subject", kind).with_bones(["Root"]);
        KindClassifier::new().classify(&model)
    }

    #[test]
    fn test_supported_kinds() {
        let cases = [
            (ModelKind::Camera, SubjectRole::Camera),
            (ModelKind::Light, SubjectRole::Light),
            (ModelKind::Character, SubjectRole::Character),
            (ModelKind::Skeleton, SubjectRole::Skeleton),
            (ModelKind::Mesh, SubjectRole::Transform),
        ];

        for (kind, role) in cases {
            let object = classify(kind).expect("supported kind");
            assert_eq!(object.role(), role);
            assert_eq!(object.model_handle(), ModelHandle::from_raw(3));
            assert!(object.is_valid());
        }
    }

    #[test]
    fn test_unsupported_kinds() {
        assert!(classify(ModelKind::Null).is_none());
        assert!(classify(ModelKind::Marker).is_none());
        assert!(classify(ModelKind::Unknown).is_none());
    }

    #[test]
    fn test_invalid_wrapper_is_still_returned() {
        // Validity is judged by the caller
        let model = SceneModel::new(ModelHandle::from_raw(9), "EmptyRig", ModelKind::Skeleton);
        let object = KindClassifier::new().classify(&model).unwrap();
        assert!(!object.is_valid());
    }
}
