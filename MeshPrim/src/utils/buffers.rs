//! Little-endian byte buffer helpers for accessor data.
//!
//! glTF stores all binary data little-endian. The narrowing casts here
//! truncate each value to the target width (`value mod 2^16`, `value mod 2^8`)
//! and never range-check.

use byteorder::{ByteOrder, LittleEndian};

/// Pack `u32` values into little-endian bytes.
#[must_use]
pub fn u32_to_bytes(values: &[u32]) -> Vec<u8> {
    let mut bytes = vec![0u8; values.len() * 4];
    LittleEndian::write_u32_into(values, &mut bytes);
    bytes
}

/// Pack `u16` values into little-endian bytes.
#[must_use]
pub fn u16_to_bytes(values: &[u16]) -> Vec<u8> {
    let mut bytes = vec![0u8; values.len() * 2];
    LittleEndian::write_u16_into(values, &mut bytes);
    bytes
}

/// Pack `f32` values into little-endian bytes.
#[must_use]
pub fn f32_to_bytes(values: &[f32]) -> Vec<u8> {
    let mut bytes = vec![0u8; values.len() * 4];
    LittleEndian::write_f32_into(values, &mut bytes);
    bytes
}

/// Cast each `u32` to `u16` (truncating) and pack the result.
#[must_use]
pub fn cast_u32_to_u16_bytes(values: &[u32]) -> Vec<u8> {
    let narrowed: Vec<u16> = values.iter().map(|&v| v as u16).collect();
    u16_to_bytes(&narrowed)
}

/// Cast each `u32` to `u8` (truncating).
#[must_use]
pub fn cast_u32_to_u8_bytes(values: &[u32]) -> Vec<u8> {
    values.iter().map(|&v| v as u8).collect()
}

/// Unpack little-endian `u32` values. Trailing bytes that do not form a
/// whole value are ignored.
#[must_use]
pub fn bytes_to_u32(bytes: &[u8]) -> Vec<u32> {
    let whole = bytes.len() / 4 * 4;
    let mut values = vec![0u32; whole / 4];
    LittleEndian::read_u32_into(&bytes[..whole], &mut values);
    values
}

/// Unpack little-endian `u16` values.
#[must_use]
pub fn bytes_to_u16(bytes: &[u8]) -> Vec<u16> {
    let whole = bytes.len() / 2 * 2;
    let mut values = vec![0u16; whole / 2];
    LittleEndian::read_u16_into(&bytes[..whole], &mut values);
    values
}

/// Unpack little-endian `f32` values.
#[must_use]
pub fn bytes_to_f32(bytes: &[u8]) -> Vec<f32> {
    let whole = bytes.len() / 4 * 4;
    let mut values = vec![0f32; whole / 4];
    LittleEndian::read_f32_into(&bytes[..whole], &mut values);
    values
}
