//! Index methods for `MeshPrimitiveBuilder`

use crate::error::{Error, Result};
use crate::model::{AccessorModel, ComponentType, ElementType};
use crate::utils::{cast_u32_to_u16_bytes, cast_u32_to_u8_bytes, u16_to_bytes, u32_to_bytes};

use super::MeshPrimitiveBuilder;

impl MeshPrimitiveBuilder {
    /// Set the indices, stored as `GL_UNSIGNED_INT`.
    pub fn set_int_indices(&mut self, indices: &[u32]) -> &mut Self {
        self.set_indices_internal(ComponentType::UnsignedInt, u32_to_bytes(indices))
    }

    /// Set the indices, stored as `GL_UNSIGNED_SHORT`. Values are truncated
    /// to 16 bits, not range-checked.
    pub fn set_int_indices_as_short(&mut self, indices: &[u32]) -> &mut Self {
        self.set_indices_internal(ComponentType::UnsignedShort, cast_u32_to_u16_bytes(indices))
    }

    /// Set the indices, stored as `GL_UNSIGNED_BYTE`. Values are truncated
    /// to 8 bits, not range-checked.
    pub fn set_int_indices_as_byte(&mut self, indices: &[u32]) -> &mut Self {
        self.set_indices_internal(ComponentType::UnsignedByte, cast_u32_to_u8_bytes(indices))
    }

    pub fn set_short_indices(&mut self, indices: &[u16]) -> &mut Self {
        self.set_indices_internal(ComponentType::UnsignedShort, u16_to_bytes(indices))
    }

    pub fn set_byte_indices(&mut self, indices: &[u8]) -> &mut Self {
        self.set_indices_internal(ComponentType::UnsignedByte, indices.to_vec())
    }

    /// Set the indices, cast to `component_type` if necessary.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedIndexComponentType`] unless the type is
    /// `UnsignedByte`, `UnsignedShort` or `UnsignedInt`. Previously set
    /// indices are kept in that case.
    pub fn set_indices_as(
        &mut self,
        indices: &[u32],
        component_type: ComponentType,
    ) -> Result<&mut Self> {
        match component_type {
            ComponentType::UnsignedByte => Ok(self.set_int_indices_as_byte(indices)),
            ComponentType::UnsignedShort => Ok(self.set_int_indices_as_short(indices)),
            ComponentType::UnsignedInt => Ok(self.set_int_indices(indices)),
            other => Err(Error::UnsupportedIndexComponentType {
                component_type: other,
            }),
        }
    }

    /// Use a prebuilt accessor as the indices.
    pub fn set_indices(&mut self, indices: AccessorModel) -> &mut Self {
        tracing::debug!(
            "Setting {} indices as {}",
            indices.count(),
            indices.component_type()
        );
        self.indices = Some(indices);
        self
    }

    fn set_indices_internal(&mut self, component_type: ComponentType, data: Vec<u8>) -> &mut Self {
        // packed one value per element, so the length is always whole
        let accessor = AccessorModel::from_parts(component_type, ElementType::Scalar, false, data);
        self.set_indices(accessor)
    }
}
