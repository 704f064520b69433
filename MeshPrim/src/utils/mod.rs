//! Utility functions

pub mod buffers;

pub use buffers::{
    bytes_to_f32, bytes_to_u16, bytes_to_u32, cast_u32_to_u16_bytes, cast_u32_to_u8_bytes,
    f32_to_bytes, u16_to_bytes, u32_to_bytes,
};
