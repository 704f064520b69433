//! Vertex attribute methods for `MeshPrimitiveBuilder`

use crate::model::{AccessorModel, ComponentType, ElementType, NORMAL, POSITION, TANGENT, TEXCOORD_0};
use crate::utils::f32_to_bytes;

use super::MeshPrimitiveBuilder;

impl MeshPrimitiveBuilder {
    /// Add `POSITION` as a `VEC3` float attribute.
    pub fn add_positions_3d(&mut self, positions: &[[f32; 3]]) -> &mut Self {
        self.add_float_attribute(POSITION, ElementType::Vec3, positions.as_flattened())
    }

    /// Add `POSITION` as a `VEC4` float attribute.
    pub fn add_positions_4d(&mut self, positions: &[[f32; 4]]) -> &mut Self {
        self.add_float_attribute(POSITION, ElementType::Vec4, positions.as_flattened())
    }

    /// Add `NORMAL` as a `VEC3` float attribute.
    pub fn add_normals_3d(&mut self, normals: &[[f32; 3]]) -> &mut Self {
        self.add_float_attribute(NORMAL, ElementType::Vec3, normals.as_flattened())
    }

    /// Add `NORMAL` as a `VEC4` float attribute.
    pub fn add_normals_4d(&mut self, normals: &[[f32; 4]]) -> &mut Self {
        self.add_float_attribute(NORMAL, ElementType::Vec4, normals.as_flattened())
    }

    /// Add `TANGENT` as a `VEC3` float attribute.
    pub fn add_tangents_3d(&mut self, tangents: &[[f32; 3]]) -> &mut Self {
        self.add_float_attribute(TANGENT, ElementType::Vec3, tangents.as_flattened())
    }

    /// Add `TANGENT` as a `VEC4` float attribute (xyz plus handedness).
    pub fn add_tangents_4d(&mut self, tangents: &[[f32; 4]]) -> &mut Self {
        self.add_float_attribute(TANGENT, ElementType::Vec4, tangents.as_flattened())
    }

    /// Add `TEXCOORD_0` as a `VEC2` float attribute.
    pub fn add_tex_coords0_2d(&mut self, uvs: &[[f32; 2]]) -> &mut Self {
        self.add_float_attribute(TEXCOORD_0, ElementType::Vec2, uvs.as_flattened())
    }

    /// Add an attribute under `name`, replacing any attribute with the same
    /// name. The position of a replaced attribute is kept.
    pub fn add_attribute(&mut self, name: impl Into<String>, attribute: AccessorModel) -> &mut Self {
        let name = name.into();
        tracing::debug!(
            "Adding attribute {}: {} x {} {}",
            name,
            attribute.count(),
            attribute.element_type(),
            attribute.component_type()
        );
        if let Some(previous) = self.attributes.insert(name, attribute) {
            tracing::debug!("Replaced attribute with {} elements", previous.count());
        }
        self
    }

    fn add_float_attribute(&mut self, name: &str, element_type: ElementType, values: &[f32]) -> &mut Self {
        let accessor =
            AccessorModel::from_parts(ComponentType::Float, element_type, false, f32_to_bytes(values));
        self.add_attribute(name, accessor)
    }
}
