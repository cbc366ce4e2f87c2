//! Streaming wrappers
//!
//! Each wrapper adapts one kind of scene object for the device's frame loop.
//! The registry only relies on the [`StreamObject`] capability set.

use crate::scene::{ModelHandle, SceneModel};

/// What a streamed subject represents on the receiving side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectRole {
    /// Single transform
    Transform,
    /// Camera transform plus lens data
    Camera,
    /// Light transform plus light data
    Light,
    /// Characterized rig
    Character,
    /// Bone hierarchy
    Skeleton,
}

impl std::fmt::Display for SubjectRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SubjectRole::Transform => "transform",
            SubjectRole::Camera => "camera",
            SubjectRole::Light => "light",
            SubjectRole::Character => "character",
            SubjectRole::Skeleton => "skeleton",
        };
        f.write_str(name)
    }
}

/// Capability set shared by all streaming wrappers
pub trait StreamObject: std::fmt::Debug + Send + Sync {
    /// Whether the wrapper can be streamed
    fn is_valid(&self) -> bool;

    /// Scene object this wrapper reads from
    fn model_handle(&self) -> ModelHandle;

    /// Subject name published to receivers
    fn subject_name(&self) -> &str;

    /// Role of the subject
    fn role(&self) -> SubjectRole;

    /// Bones streamed with the subject, root first
    fn bone_names(&self) -> &[String] {
        &[]
    }
}

/// Transform-driven subject: meshes, cameras and lights
#[derive(Debug, Clone)]
pub struct TransformObject {
    handle: ModelHandle,
    subject: String,
    role: SubjectRole,
}

impl TransformObject {
    pub fn new(model: &SceneModel, role: SubjectRole) -> Self {
        Self {
            handle: model.handle,
            subject: model.label.clone(),
            role,
        }
    }
}

impl StreamObject for TransformObject {
    fn is_valid(&self) -> bool {
        !self.subject.is_empty()
    }

    fn model_handle(&self) -> ModelHandle {
        self.handle
    }

    fn subject_name(&self) -> &str {
        &self.subject
    }

    fn role(&self) -> SubjectRole {
        self.role
    }
}

/// Bone-driven subject: characterized rigs and skeleton roots
///
/// Invalid until the host reports at least one bone.
#[derive(Debug, Clone)]
pub struct RigObject {
    handle: ModelHandle,
    subject: String,
    role: SubjectRole,
    bones: Vec<String>,
}

impl RigObject {
    pub fn new(model: &SceneModel, role: SubjectRole) -> Self {
        Self {
            handle: model.handle,
            subject: model.label.clone(),
            role,
            bones: model.bones.clone(),
        }
    }
}

impl StreamObject for RigObject {
    fn is_valid(&self) -> bool {
        !self.subject.is_empty() && !self.bones.is_empty()
    }

    fn model_handle(&self) -> ModelHandle {
        self.handle
    }

    fn subject_name(&self) -> &str {
        &self.subject
    }

    fn role(&self) -> SubjectRole {
        self.role
    }

    fn bone_names(&self) -> &[String] {
        &self.bones
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ModelKind;

    fn model(label: &str, kind: ModelKind) -> SceneModel {
        SceneModel::new(ModelHandle::from_raw(42), label, kind)
    }

    #[test]
    fn test_camera_object() {
        let obj =
            TransformObject::new(&model("Camera001", ModelKind::Camera), SubjectRole::Camera);

        assert!(obj.is_valid());
        assert_eq!(obj.model_handle(), ModelHandle::from_raw(42));
        assert_eq!(obj.subject_name(), "Camera001");
        assert_eq!(obj.role(), SubjectRole::Camera);
        assert!(obj.bone_names().is_empty());
    }

    #[test]
    fn test_empty_subject_is_invalid() {
        let obj = TransformObject::new(&model("", ModelKind::Mesh), SubjectRole::Transform);
        assert!(!obj.is_valid());
    }

    #[test]
    fn test_skeleton_requires_bones() {
        let bare = RigObject::new(&model("Hips", ModelKind::Skeleton), SubjectRole::Skeleton);
        assert!(!bare.is_valid());

        let rigged = RigObject::new(
            &model("Hips", ModelKind::Skeleton).with_bones(["Hips", "Spine"]),
            SubjectRole::Skeleton,
        );
        assert!(rigged.is_valid());
        assert_eq!(rigged.bone_names(), ["Hips", "Spine"]);
    }

    #[test]
    fn test_character_requires_bones() {
        let bare = RigObject::new(&model("Hero", ModelKind::Character), SubjectRole::Character);
        assert!(!bare.is_valid());

        let rigged = RigObject::new(
            &model("Hero", ModelKind::Character).with_bones(["Reference"]),
            SubjectRole::Character,
        );
        assert!(rigged.is_valid());
        assert_eq!(rigged.role(), SubjectRole::Character);
    }
}
