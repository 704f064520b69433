//! Error types for `meshprim`

use thiserror::Error;

use crate::model::{ComponentType, ElementType};

/// The error type for `meshprim` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Accessor Errors ====================
    /// The numeric value is not a known glTF component type constant.
    #[error("unknown component type: {0}")]
    UnknownComponentType(u32),

    /// The string is not a known glTF element type.
    #[error("unknown element type: {0:?}")]
    UnknownElementType(String),

    /// The accessor data does not hold a whole number of elements.
    #[error("accessor data of {byte_length} bytes is not a multiple of the element size {element_size}")]
    AccessorLengthMismatch {
        /// Length of the supplied data in bytes.
        byte_length: usize,
        /// Size of one element in bytes.
        element_size: usize,
    },

    // ==================== Mesh Primitive Errors ====================
    /// Indices were requested with a component type that glTF does not allow for indices.
    #[error(
        "the component type must be GL_UNSIGNED_BYTE, GL_UNSIGNED_SHORT or GL_UNSIGNED_INT, but is {component_type}"
    )]
    UnsupportedIndexComponentType {
        /// The rejected component type.
        component_type: ComponentType,
    },

    /// A morph target refers to an attribute the primitive does not have.
    #[error("the mesh primitive does not contain a {attribute} attribute")]
    MissingAttribute {
        /// The attribute name, e.g. `POSITION`.
        attribute: String,
    },

    /// Morph target data uses a different component type than its base attribute.
    #[error(
        "attribute {attribute} has component type {expected}, but the morphed attribute data has component type {found}"
    )]
    MorphComponentTypeMismatch {
        /// The attribute name.
        attribute: String,
        /// Component type of the base attribute.
        expected: ComponentType,
        /// Component type of the morph data.
        found: ComponentType,
    },

    /// Morph target data uses a different element type than its base attribute.
    #[error(
        "attribute {attribute} has element type {expected}, but the morphed attribute data has element type {found}"
    )]
    MorphElementTypeMismatch {
        /// The attribute name.
        attribute: String,
        /// Element type of the base attribute.
        expected: ElementType,
        /// Element type of the morph data.
        found: ElementType,
    },

    /// The morph target list cannot be extended to the requested index.
    #[error("morph target index {index} is out of range")]
    MorphTargetIndexOutOfRange {
        /// The requested target index.
        index: usize,
    },

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for `meshprim` operations.
pub type Result<T> = std::result::Result<T, Error>;
