//! Creation of glTF model elements.

mod builder;
pub mod diagnostics;

pub use builder::MeshPrimitiveBuilder;
pub use diagnostics::{BuilderDiagnostic, DiagnosticCallback};
