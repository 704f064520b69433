//! Mesh primitive builder.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

mod attributes;
mod indices;
mod morph_targets;

use std::fmt;

use crate::model::{AccessorModel, AttributeMap, MeshPrimitiveModel, PrimitiveMode};

use super::diagnostics::{BuilderDiagnostic, DiagnosticCallback};

/// Builder for [`MeshPrimitiveModel`] instances.
///
/// Calls can be chained. [`build`](Self::build) hands out everything added so
/// far and leaves the builder empty, except for the rendering mode.
///
/// ```
/// use meshprim::creation::MeshPrimitiveBuilder;
///
/// let mut builder = MeshPrimitiveBuilder::new();
/// builder
///     .set_int_indices_as_short(&[0, 1, 2])
///     .add_positions_3d(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
/// builder.add_morph_target_f32(0, "POSITION", &[0.0; 9])?;
///
/// let primitive = builder.build();
/// assert_eq!(primitive.vertex_count(), Some(3));
/// assert_eq!(primitive.targets.len(), 1);
/// # Ok::<(), meshprim::Error>(())
/// ```
pub struct MeshPrimitiveBuilder {
    pub(crate) mode: PrimitiveMode,
    pub(crate) indices: Option<AccessorModel>,
    pub(crate) attributes: AttributeMap,
    pub(crate) targets: Vec<AttributeMap>,
    pub(crate) diagnostics: Option<DiagnosticCallback>,
}

impl MeshPrimitiveBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: PrimitiveMode::Triangles,
            indices: None,
            attributes: AttributeMap::new(),
            targets: Vec::new(),
            diagnostics: None,
        }
    }

    /// Install a callback that receives every [`BuilderDiagnostic`].
    #[must_use]
    pub fn with_diagnostics(
        mut self,
        callback: impl Fn(&BuilderDiagnostic) + Send + Sync + 'static,
    ) -> Self {
        self.diagnostics = Some(Box::new(callback));
        self
    }

    /// Set the primitive rendering mode.
    pub fn set_mode(&mut self, mode: PrimitiveMode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Render as `TRIANGLES`, the default.
    pub fn set_triangles(&mut self) -> &mut Self {
        self.set_mode(PrimitiveMode::Triangles)
    }

    /// Render as `LINES`.
    pub fn set_lines(&mut self) -> &mut Self {
        self.set_mode(PrimitiveMode::Lines)
    }

    /// Render as `POINTS`.
    pub fn set_points(&mut self) -> &mut Self {
        self.set_mode(PrimitiveMode::Points)
    }

    #[must_use]
    pub fn mode(&self) -> PrimitiveMode {
        self.mode
    }

    #[must_use]
    pub fn indices(&self) -> Option<&AccessorModel> {
        self.indices.as_ref()
    }

    #[must_use]
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Create the [`MeshPrimitiveModel`] from everything added since the
    /// last call. Indices, attributes and targets are moved out; the mode
    /// stays as it is.
    pub fn build(&mut self) -> MeshPrimitiveModel {
        let primitive = MeshPrimitiveModel {
            mode: self.mode,
            indices: self.indices.take(),
            attributes: std::mem::take(&mut self.attributes),
            targets: std::mem::take(&mut self.targets),
        };
        tracing::debug!(
            "Built mesh primitive: mode {:?}, {} attributes, {} targets, indexed: {}",
            primitive.mode,
            primitive.attributes.len(),
            primitive.targets.len(),
            primitive.indices.is_some()
        );
        primitive
    }

    pub(crate) fn report(&self, diagnostic: &BuilderDiagnostic) {
        tracing::warn!("{}", diagnostic);
        if let Some(callback) = &self.diagnostics {
            callback(diagnostic);
        }
    }
}

impl Default for MeshPrimitiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MeshPrimitiveBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeshPrimitiveBuilder")
            .field("mode", &self.mode)
            .field("indices", &self.indices)
            .field("attributes", &self.attributes)
            .field("targets", &self.targets)
            .field("diagnostics", &self.diagnostics.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComponentType, POSITION};

    #[test]
    fn test_default_mode_is_triangles() {
        let builder = MeshPrimitiveBuilder::default();
        assert_eq!(builder.mode(), PrimitiveMode::Triangles);
        assert!(builder.indices().is_none());
        assert!(builder.attributes().is_empty());
        assert_eq!(builder.target_count(), 0);
    }

    #[test]
    fn test_mode_setters() {
        let mut builder = MeshPrimitiveBuilder::new();
        assert_eq!(builder.set_lines().mode(), PrimitiveMode::Lines);
        assert_eq!(builder.set_points().mode(), PrimitiveMode::Points);
        assert_eq!(builder.set_triangles().mode(), PrimitiveMode::Triangles);
    }

    #[test]
    fn test_build_moves_state_out() {
        let mut builder = MeshPrimitiveBuilder::new();
        builder
            .set_lines()
            .set_int_indices(&[0, 1])
            .add_positions_3d(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
        builder.add_morph_target_f32(0, POSITION, &[0.0; 6]).unwrap();

        let first = builder.build();
        assert_eq!(first.mode, PrimitiveMode::Lines);
        assert_eq!(
            first.indices.as_ref().map(AccessorModel::component_type),
            Some(ComponentType::UnsignedInt)
        );
        assert_eq!(first.attributes.len(), 1);
        assert_eq!(first.targets.len(), 1);

        let second = builder.build();
        assert_eq!(second.mode, PrimitiveMode::Lines);
        assert!(second.indices.is_none());
        assert!(second.attributes.is_empty());
        assert!(second.targets.is_empty());
    }

    #[test]
    fn test_build_reflects_only_new_data() {
        let mut builder = MeshPrimitiveBuilder::new();
        builder.add_positions_3d(&[[0.0; 3]]);
        let _ = builder.build();

        builder.add_normals_3d(&[[0.0, 0.0, 1.0]]);
        let primitive = builder.build();
        assert!(primitive.attribute(POSITION).is_none());
        assert_eq!(primitive.attributes.len(), 1);
    }

    #[test]
    fn test_debug_hides_callback() {
        let builder = MeshPrimitiveBuilder::new().with_diagnostics(|_| {});
        let text = format!("{builder:?}");
        assert!(text.contains("diagnostics: true"));
    }
}
