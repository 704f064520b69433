//! Morph target methods for `MeshPrimitiveBuilder`

use crate::creation::diagnostics::BuilderDiagnostic;
use crate::error::{Error, Result};
use crate::model::{AccessorModel, AttributeMap, ComponentType};
use crate::utils::f32_to_bytes;

use super::MeshPrimitiveBuilder;

impl MeshPrimitiveBuilder {
    /// Add morph target data for `attribute`, using the component and element
    /// type of the base attribute.
    ///
    /// See [`add_morph_target`](Self::add_morph_target) for how `index` is
    /// handled.
    ///
    /// # Errors
    /// Returns [`Error::MissingAttribute`] if the base attribute has not been
    /// added, or [`Error::AccessorLengthMismatch`] if `data` does not hold a
    /// whole number of elements.
    pub fn add_morph_target_bytes(
        &mut self,
        index: usize,
        attribute: &str,
        data: Vec<u8>,
    ) -> Result<&mut Self> {
        let base = self.base_attribute(attribute)?;
        let accessor = AccessorModel::new(base.component_type(), base.element_type(), false, data)?;
        self.add_morph_target(index, attribute, accessor)
    }

    /// Add float morph target deltas for a float attribute.
    ///
    /// # Errors
    /// As [`add_morph_target_bytes`](Self::add_morph_target_bytes), plus
    /// [`Error::MorphComponentTypeMismatch`] if the base attribute is not
    /// `GL_FLOAT`.
    pub fn add_morph_target_f32(
        &mut self,
        index: usize,
        attribute: &str,
        deltas: &[f32],
    ) -> Result<&mut Self> {
        let base = self.base_attribute(attribute)?;
        if base.component_type() != ComponentType::Float {
            return Err(Error::MorphComponentTypeMismatch {
                attribute: attribute.to_string(),
                expected: base.component_type(),
                found: ComponentType::Float,
            });
        }
        self.add_morph_target_bytes(index, attribute, f32_to_bytes(deltas))
    }

    /// Add `accessor` as the `attribute` entry of morph target `index`.
    ///
    /// If `index` is past the end of the target list, empty targets are
    /// inserted up to it and a [`BuilderDiagnostic::MorphTargetGap`] is
    /// reported. An existing entry is replaced and reported as
    /// [`BuilderDiagnostic::MorphTargetOverwrite`].
    ///
    /// # Errors
    /// Returns [`Error::MissingAttribute`] if the base attribute has not been
    /// added, and [`Error::MorphComponentTypeMismatch`] or
    /// [`Error::MorphElementTypeMismatch`] if `accessor` does not match its
    /// type. Returns [`Error::MorphTargetIndexOutOfRange`] if the target list
    /// cannot grow to `index`. The targets are left untouched on error.
    pub fn add_morph_target(
        &mut self,
        index: usize,
        attribute: &str,
        accessor: AccessorModel,
    ) -> Result<&mut Self> {
        let base = self.base_attribute(attribute)?;

        if base.component_type() != accessor.component_type() {
            return Err(Error::MorphComponentTypeMismatch {
                attribute: attribute.to_string(),
                expected: base.component_type(),
                found: accessor.component_type(),
            });
        }
        if base.element_type() != accessor.element_type() {
            return Err(Error::MorphElementTypeMismatch {
                attribute: attribute.to_string(),
                expected: base.element_type(),
                found: accessor.element_type(),
            });
        }

        let existing = self.targets.len();
        if index >= existing {
            let new_len = index
                .checked_add(1)
                .ok_or(Error::MorphTargetIndexOutOfRange { index })?;
            self.targets
                .try_reserve(new_len - existing)
                .map_err(|_| Error::MorphTargetIndexOutOfRange { index })?;
            if index > existing {
                self.report(&BuilderDiagnostic::MorphTargetGap { index, existing });
            }
            self.targets.resize_with(new_len, AttributeMap::new);
        }

        if self.targets[index].contains_key(attribute) {
            self.report(&BuilderDiagnostic::MorphTargetOverwrite {
                index,
                attribute: attribute.to_string(),
            });
        }
        self.targets[index].insert(attribute.to_string(), accessor);
        Ok(self)
    }

    fn base_attribute(&self, attribute: &str) -> Result<&AccessorModel> {
        self.attributes
            .get(attribute)
            .ok_or_else(|| Error::MissingAttribute {
                attribute: attribute.to_string(),
            })
    }
}
