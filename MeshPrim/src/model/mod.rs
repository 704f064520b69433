//! glTF data model types used by the builder.

pub mod accessor;
pub mod mesh_primitive;

pub use accessor::{AccessorModel, ComponentType, ElementType};
pub use mesh_primitive::{
    AttributeMap, MeshPrimitiveModel, NORMAL, POSITION, PrimitiveMode, TANGENT, TEXCOORD_0,
};
