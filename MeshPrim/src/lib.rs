//! # meshprim
//!
//! Builds glTF 2.0 mesh primitives: index buffers, vertex attributes and
//! morph targets, ready to be handed to a serializer.
//!
//! ## Quick Start
//!
//! ```
//! use meshprim::prelude::*;
//!
//! let mut builder = MeshPrimitiveBuilder::new();
//! builder
//!     .set_indices_as(&[0, 1, 2], ComponentType::UnsignedShort)?
//!     .add_positions_3d(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
//!     .add_normals_3d(&[[0.0, 0.0, 1.0]; 3]);
//!
//! let primitive = builder.build();
//! assert_eq!(primitive.mode, PrimitiveMode::Triangles);
//! assert_eq!(primitive.attributes.len(), 2);
//! # Ok::<(), meshprim::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `meshprim` command-line binary

pub mod creation;
pub mod error;
pub mod model;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::creation::{BuilderDiagnostic, MeshPrimitiveBuilder};
    pub use crate::error::{Error, Result};
    pub use crate::model::{
        AccessorModel, AttributeMap, ComponentType, ElementType, MeshPrimitiveModel, NORMAL,
        POSITION, PrimitiveMode, TANGENT, TEXCOORD_0,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
