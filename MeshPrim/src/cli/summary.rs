//! JSON summary of a built mesh primitive, using glTF field names.

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{AccessorModel, AttributeMap, MeshPrimitiveModel};

/// Type information and size of one accessor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessorSummary {
    pub component_type: u32,
    #[serde(rename = "type")]
    pub element_type: String,
    pub count: usize,
    pub byte_length: usize,
    pub normalized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Vec<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Vec<f32>>,
}

impl From<&AccessorModel> for AccessorSummary {
    fn from(accessor: &AccessorModel) -> Self {
        let (min, max) = accessor.bounds().unzip();
        Self {
            component_type: accessor.component_type().gl_constant(),
            element_type: accessor.element_type().to_string(),
            count: accessor.count(),
            byte_length: accessor.byte_length(),
            normalized: accessor.is_normalized(),
            min,
            max,
        }
    }
}

/// Summary of a whole primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimitiveSummary {
    pub mode: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indices: Option<AccessorSummary>,
    pub attributes: IndexMap<String, AccessorSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<IndexMap<String, AccessorSummary>>,
}

fn summarize(attributes: &AttributeMap) -> IndexMap<String, AccessorSummary> {
    attributes
        .iter()
        .map(|(name, accessor)| (name.clone(), AccessorSummary::from(accessor)))
        .collect()
}

impl From<&MeshPrimitiveModel> for PrimitiveSummary {
    fn from(primitive: &MeshPrimitiveModel) -> Self {
        Self {
            mode: primitive.mode.gl_constant(),
            indices: primitive.indices.as_ref().map(AccessorSummary::from),
            attributes: summarize(&primitive.attributes),
            targets: primitive.targets.iter().map(summarize).collect(),
        }
    }
}
