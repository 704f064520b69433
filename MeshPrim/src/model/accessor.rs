//! Accessor models: typed views over little-endian attribute and index data.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::utils::bytes_to_f32;

/// glTF accessor component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    UnsignedInt,
    Float,
}

impl ComponentType {
    /// The OpenGL constant used for this type in glTF JSON.
    #[must_use]
    pub fn gl_constant(self) -> u32 {
        match self {
            Self::Byte => 5120,
            Self::UnsignedByte => 5121,
            Self::Short => 5122,
            Self::UnsignedShort => 5123,
            Self::UnsignedInt => 5125,
            Self::Float => 5126,
        }
    }

    /// Size of a single component in bytes.
    #[must_use]
    pub fn byte_size(self) -> usize {
        match self {
            Self::Byte | Self::UnsignedByte => 1,
            Self::Short | Self::UnsignedShort => 2,
            Self::UnsignedInt | Self::Float => 4,
        }
    }
}

impl TryFrom<u32> for ComponentType {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            5120 => Ok(Self::Byte),
            5121 => Ok(Self::UnsignedByte),
            5122 => Ok(Self::Short),
            5123 => Ok(Self::UnsignedShort),
            5125 => Ok(Self::UnsignedInt),
            5126 => Ok(Self::Float),
            other => Err(Error::UnknownComponentType(other)),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Byte => "GL_BYTE",
            Self::UnsignedByte => "GL_UNSIGNED_BYTE",
            Self::Short => "GL_SHORT",
            Self::UnsignedShort => "GL_UNSIGNED_SHORT",
            Self::UnsignedInt => "GL_UNSIGNED_INT",
            Self::Float => "GL_FLOAT",
        };
        f.write_str(name)
    }
}

/// glTF accessor element type (the shape of one element).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl ElementType {
    /// Vector element type for 1 to 4 dimensions (1 maps to `SCALAR`).
    #[must_use]
    pub fn vec(dimensions: usize) -> Option<Self> {
        match dimensions {
            1 => Some(Self::Scalar),
            2 => Some(Self::Vec2),
            3 => Some(Self::Vec3),
            4 => Some(Self::Vec4),
            _ => None,
        }
    }

    #[must_use]
    pub fn num_components(self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vec2 => 2,
            Self::Vec3 => 3,
            Self::Vec4 | Self::Mat2 => 4,
            Self::Mat3 => 9,
            Self::Mat4 => 16,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Vec2 => "VEC2",
            Self::Vec3 => "VEC3",
            Self::Vec4 => "VEC4",
            Self::Mat2 => "MAT2",
            Self::Mat3 => "MAT3",
            Self::Mat4 => "MAT4",
        }
    }
}

impl FromStr for ElementType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SCALAR" => Ok(Self::Scalar),
            "VEC2" => Ok(Self::Vec2),
            "VEC3" => Ok(Self::Vec3),
            "VEC4" => Ok(Self::Vec4),
            "MAT2" => Ok(Self::Mat2),
            "MAT3" => Ok(Self::Mat3),
            "MAT4" => Ok(Self::Mat4),
            other => Err(Error::UnknownElementType(other.to_string())),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tightly packed accessor data together with its type information.
///
/// Accessors are treated as immutable values once created. The data is
/// owned, so a stored accessor never aliases the caller's buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessorModel {
    component_type: ComponentType,
    element_type: ElementType,
    normalized: bool,
    data: Vec<u8>,
}

impl AccessorModel {
    /// Create an accessor over `data`.
    ///
    /// # Errors
    /// Returns [`Error::AccessorLengthMismatch`] if `data` does not hold a
    /// whole number of elements.
    pub fn new(
        component_type: ComponentType,
        element_type: ElementType,
        normalized: bool,
        data: Vec<u8>,
    ) -> Result<Self> {
        let element_size = component_type.byte_size() * element_type.num_components();
        if data.len() % element_size != 0 {
            return Err(Error::AccessorLengthMismatch {
                byte_length: data.len(),
                element_size,
            });
        }
        Ok(Self::from_parts(component_type, element_type, normalized, data))
    }

    /// Create an accessor whose data length is already known to be valid.
    pub(crate) fn from_parts(
        component_type: ComponentType,
        element_type: ElementType,
        normalized: bool,
        data: Vec<u8>,
    ) -> Self {
        Self {
            component_type,
            element_type,
            normalized,
            data,
        }
    }

    #[must_use]
    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    #[must_use]
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn byte_length(&self) -> usize {
        self.data.len()
    }

    /// Size of one element in bytes.
    #[must_use]
    pub fn element_size(&self) -> usize {
        self.component_type.byte_size() * self.element_type.num_components()
    }

    /// Number of elements.
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.len() / self.element_size()
    }

    /// Per-component minimum and maximum of float data.
    ///
    /// glTF requires these on `POSITION` accessors. Returns `None` for
    /// non-float or empty accessors.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec<f32>, Vec<f32>)> {
        if self.component_type != ComponentType::Float || self.data.is_empty() {
            return None;
        }

        let components = self.element_type.num_components();
        let mut min = vec![f32::MAX; components];
        let mut max = vec![f32::MIN; components];

        for element in bytes_to_f32(&self.data).chunks_exact(components) {
            for i in 0..components {
                min[i] = min[i].min(element[i]);
                max[i] = max[i].max(element[i]);
            }
        }

        Some((min, max))
    }
}
