//! Non-fatal diagnostics reported while building a mesh primitive.

use std::fmt;

/// Callback invoked for every diagnostic, in addition to the `tracing` warning.
pub type DiagnosticCallback = Box<dyn Fn(&BuilderDiagnostic) + Send + Sync>;

/// A recoverable condition the builder worked around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderDiagnostic {
    /// A morph target was set past the end of the target list; empty targets
    /// were inserted to fill the gap.
    MorphTargetGap {
        /// The requested target index.
        index: usize,
        /// Number of targets that existed before the gap was filled.
        existing: usize,
    },
    /// A morph target entry was replaced.
    MorphTargetOverwrite {
        /// The target index.
        index: usize,
        /// The attribute name that was overwritten.
        attribute: String,
    },
}

impl fmt::Display for BuilderDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MorphTargetGap { index, existing } => write!(
                f,
                "setting attribute in morph target {index}, even though only {existing} targets have been created until now"
            ),
            Self::MorphTargetOverwrite { index, attribute } => {
                write!(f, "overwriting existing {attribute} in morph target {index}")
            }
        }
    }
}
