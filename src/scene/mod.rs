//! Host scene collaborator interfaces
//!
//! The bridge never owns scene objects. It only sees them through
//! [`SceneLookup`], which resolves a label name to the models carrying it,
//! and through the opaque [`ModelHandle`] used for identity comparisons.

pub mod memory;

pub use memory::InMemoryScene;

/// Opaque identity of a live scene object
///
/// Two handles are equal only if they refer to the same scene object.
/// Labels are not part of the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelHandle(u64);

impl ModelHandle {
    /// Wrap a raw host handle value
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw host handle value
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:x}", self.0)
    }
}

/// Kind of scene object as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Camera
    Camera,
    /// Light source
    Light,
    /// Characterized rig
    Character,
    /// Root of a bone hierarchy
    Skeleton,
    /// Geometry with a transform
    Mesh,
    /// Null / locator
    Null,
    /// Optical marker
    Marker,
    /// Anything the host cannot classify
    Unknown,
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModelKind::Camera => "camera",
            ModelKind::Light => "light",
            ModelKind::Character => "character",
            ModelKind::Skeleton => "skeleton",
            ModelKind::Mesh => "mesh",
            ModelKind::Null => "null",
            ModelKind::Marker => "marker",
            ModelKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A scene object as seen at lookup time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneModel {
    /// Identity of the object
    pub handle: ModelHandle,
    /// Label name shown in the host UI
    pub label: String,
    /// Kind reported by the host
    pub kind: ModelKind,
    /// Names of child bones (skeleton and character roots only)
    pub bones: Vec<String>,
}

impl SceneModel {
    /// Create a model record without bones
    pub fn new(handle: ModelHandle, label: impl Into<String>, kind: ModelKind) -> Self {
        Self {
            handle,
            label: label.into(),
            kind,
            bones: Vec::new(),
        }
    }

    /// Attach bone names
    pub fn with_bones<I, S>(mut self, bones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bones = bones.into_iter().map(Into::into).collect();
        self
    }
}

/// Name to handle resolution provided by the host
pub trait SceneLookup {
    /// All models whose label equals `name`, in the host's lookup order
    ///
    /// The first element is what the host's own "find by label" would return.
    fn find_models_by_label(&self, name: &str) -> Vec<SceneModel>;
}

/// Policy applied when several scene objects share a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameResolution {
    /// Take the host's first match
    #[default]
    FirstMatch,
    /// Fail when the label is not unique
    RejectAmbiguous,
}
