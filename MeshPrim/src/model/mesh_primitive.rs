//! Mesh primitive descriptor produced by
//! [`MeshPrimitiveBuilder`](crate::creation::MeshPrimitiveBuilder).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::accessor::AccessorModel;

/// Standard attribute names
pub const POSITION: &str = "POSITION";
pub const NORMAL: &str = "NORMAL";
pub const TANGENT: &str = "TANGENT";
pub const TEXCOORD_0: &str = "TEXCOORD_0";

/// Attribute name to accessor, in insertion order.
pub type AttributeMap = IndexMap<String, AccessorModel>;

/// Rendering mode of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveMode {
    Points,
    Lines,
    #[default]
    Triangles,
}

impl PrimitiveMode {
    /// The OpenGL constant used for this mode in glTF JSON.
    #[must_use]
    pub fn gl_constant(self) -> u32 {
        match self {
            Self::Points => 0,
            Self::Lines => 1,
            Self::Triangles => 4,
        }
    }
}

/// A finished mesh primitive (geometry without material).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshPrimitiveModel {
    pub mode: PrimitiveMode,
    pub indices: Option<AccessorModel>,
    pub attributes: AttributeMap,
    /// Morph targets, densely indexed from 0.
    pub targets: Vec<AttributeMap>,
}

impl MeshPrimitiveModel {
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AccessorModel> {
        self.attributes.get(name)
    }

    #[must_use]
    pub fn target(&self, index: usize) -> Option<&AttributeMap> {
        self.targets.get(index)
    }

    /// Number of vertices, taken from the `POSITION` attribute.
    #[must_use]
    pub fn vertex_count(&self) -> Option<usize> {
        self.attribute(POSITION).map(AccessorModel::count)
    }
}
