//! JSON description of a mesh primitive, as read by the `build` command.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::creation::MeshPrimitiveBuilder;
use crate::error::Result;
use crate::model::{ComponentType, MeshPrimitiveModel, PrimitiveMode};

fn default_index_component_type() -> u32 {
    ComponentType::UnsignedInt.gl_constant()
}

/// Vertex data, indices and morph targets of one primitive.
///
/// ```json
/// {
///   "mode": "triangles",
///   "indices": [0, 1, 2],
///   "indexComponentType": 5123,
///   "positions": [[0, 0, 0], [1, 0, 0], [0, 1, 0]],
///   "targets": [{ "POSITION": [0, 0, 1, 0, 0, 1, 0, 0, 1] }]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PrimitiveDescription {
    #[serde(default)]
    pub mode: PrimitiveMode,
    #[serde(default)]
    pub indices: Option<Vec<u32>>,
    /// GL constant of the index storage type.
    #[serde(default = "default_index_component_type")]
    pub index_component_type: u32,
    #[serde(default)]
    pub positions: Option<Vec<[f32; 3]>>,
    #[serde(default)]
    pub normals: Option<Vec<[f32; 3]>>,
    #[serde(default)]
    pub tangents: Option<Vec<[f32; 4]>>,
    #[serde(default)]
    pub tex_coords: Option<Vec<[f32; 2]>>,
    /// Float deltas per attribute name, one map per morph target.
    #[serde(default)]
    pub targets: Vec<IndexMap<String, Vec<f32>>>,
}

impl PrimitiveDescription {
    /// Parse a description from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a description file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Feed the description into `builder` and build the primitive.
    pub fn apply(&self, builder: &mut MeshPrimitiveBuilder) -> Result<MeshPrimitiveModel> {
        builder.set_mode(self.mode);

        if let Some(indices) = &self.indices {
            let component_type = ComponentType::try_from(self.index_component_type)?;
            builder.set_indices_as(indices, component_type)?;
        }
        if let Some(positions) = &self.positions {
            builder.add_positions_3d(positions);
        }
        if let Some(normals) = &self.normals {
            builder.add_normals_3d(normals);
        }
        if let Some(tangents) = &self.tangents {
            builder.add_tangents_4d(tangents);
        }
        if let Some(uvs) = &self.tex_coords {
            builder.add_tex_coords0_2d(uvs);
        }

        for (index, target) in self.targets.iter().enumerate() {
            for (attribute, deltas) in target {
                builder.add_morph_target_f32(index, attribute, deltas)?;
            }
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::POSITION;

    #[test]
    fn test_defaults() {
        let description = PrimitiveDescription::from_json("{}").unwrap();
        assert_eq!(description.mode, PrimitiveMode::Triangles);
        assert_eq!(description.index_component_type, 5125);

        let primitive = description.apply(&mut MeshPrimitiveBuilder::new()).unwrap();
        assert!(primitive.indices.is_none());
        assert!(primitive.attributes.is_empty());
    }

    #[test]
    fn test_full_description() {
        let json = r#"{
            "mode": "lines",
            "indices": [0, 1, 1, 2],
            "indexComponentType": 5121,
            "positions": [[0, 0, 0], [1, 0, 0], [0, 1, 0]],
            "texCoords": [[0, 0], [1, 0], [0, 1]],
            "targets": [{ "POSITION": [0, 0, 1, 0, 0, 1, 0, 0, 1] }]
        }"#;
        let description = PrimitiveDescription::from_json(json).unwrap();
        let primitive = description.apply(&mut MeshPrimitiveBuilder::new()).unwrap();

        assert_eq!(primitive.mode, PrimitiveMode::Lines);
        assert_eq!(
            primitive.indices.as_ref().unwrap().component_type(),
            ComponentType::UnsignedByte
        );
        assert_eq!(primitive.attributes.len(), 2);
        assert_eq!(primitive.targets[0][POSITION].count(), 3);
    }

    #[test]
    fn test_invalid_index_type() {
        let json = r#"{ "indices": [0], "indexComponentType": 5126 }"#;
        let description = PrimitiveDescription::from_json(json).unwrap();
        let err = description.apply(&mut MeshPrimitiveBuilder::new()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedIndexComponentType { .. }));

        let json = r#"{ "indices": [0], "indexComponentType": 1 }"#;
        let description = PrimitiveDescription::from_json(json).unwrap();
        let err = description.apply(&mut MeshPrimitiveBuilder::new()).unwrap_err();
        assert!(matches!(err, Error::UnknownComponentType(1)));
    }

    #[test]
    fn test_target_without_base_attribute() {
        let json = r#"{ "targets": [{ "NORMAL": [0, 0, 1] }] }"#;
        let description = PrimitiveDescription::from_json(json).unwrap();
        let err = description.apply(&mut MeshPrimitiveBuilder::new()).unwrap_err();
        assert!(matches!(err, Error::MissingAttribute { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            PrimitiveDescription::from_json(r#"{ "colors": [] }"#),
            Err(Error::JsonError(_))
        ));
    }
}
