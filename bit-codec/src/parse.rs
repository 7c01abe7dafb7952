//! # Parsing hex text into numbers
//!
//! These compose [`decode_hex`] with the fixed-width decoders.
//! The requested width is checked first,
//! then the hex text, and finally the decoded length.

use crate::{
    CodecError, NumericFamily, NumericKind, NumericValue, bytes_to_f32, bytes_to_f64, bytes_to_i8,
    bytes_to_i16, bytes_to_i32, bytes_to_i64, bytes_to_u8, bytes_to_u16, bytes_to_u32,
    bytes_to_u64, decode_hex,
};

/// Parses hex text holding a little-endian unsigned integer of `bit_size` bits.
///
/// Bit sizes 8, 16, 32, and 64 correspond to `u8`, `u16`, `u32`, and `u64`.
///
/// # Errors
///
/// - [`CodecError::UnsupportedWidth`] if `bit_size` is not one of the above
/// - [`CodecError::Format`] if the text is not valid hex
/// - [`CodecError::Length`] if the text does not hold exactly `bit_size / 8` bytes
pub fn parse_uint(text: &str, bit_size: u32) -> Result<u64, CodecError> {
    let family = NumericFamily::Unsigned;
    let kind = family.kind_with_bits(bit_size)?;
    let bytes = decode_hex(text)?;
    match kind {
        NumericKind::U8 => bytes_to_u8(&bytes).map(u64::from),
        NumericKind::U16 => bytes_to_u16(&bytes).map(u64::from),
        NumericKind::U32 => bytes_to_u32(&bytes).map(u64::from),
        NumericKind::U64 => bytes_to_u64(&bytes),
        NumericKind::I8
        | NumericKind::I16
        | NumericKind::I32
        | NumericKind::I64
        | NumericKind::F32
        | NumericKind::F64 => Err(CodecError::UnsupportedWidth {
            family,
            bits: bit_size,
        }),
    }
}

/// Parses hex text holding a little-endian two's-complement integer of `bit_size` bits.
///
/// Bit sizes 8, 16, 32, and 64 correspond to `i8`, `i16`, `i32`, and `i64`.
///
/// # Errors
///
/// See [`parse_uint`].
pub fn parse_int(text: &str, bit_size: u32) -> Result<i64, CodecError> {
    let family = NumericFamily::Signed;
    let kind = family.kind_with_bits(bit_size)?;
    let bytes = decode_hex(text)?;
    match kind {
        NumericKind::I8 => bytes_to_i8(&bytes).map(i64::from),
        NumericKind::I16 => bytes_to_i16(&bytes).map(i64::from),
        NumericKind::I32 => bytes_to_i32(&bytes).map(i64::from),
        NumericKind::I64 => bytes_to_i64(&bytes),
        NumericKind::U8
        | NumericKind::U16
        | NumericKind::U32
        | NumericKind::U64
        | NumericKind::F32
        | NumericKind::F64 => Err(CodecError::UnsupportedWidth {
            family,
            bits: bit_size,
        }),
    }
}

/// Parses hex text holding the little-endian IEEE-754 bits of a float.
///
/// `bit_size` is 32 for binary32 or 64 for binary64.
/// A binary32 value is widened to `f64`, which is always exact.
///
/// # Errors
///
/// Returns [`CodecError::UnsupportedWidth`] for any other `bit_size`;
/// otherwise see [`parse_uint`].
pub fn parse_float(text: &str, bit_size: u32) -> Result<f64, CodecError> {
    let family = NumericFamily::Float;
    match family.kind_with_bits(bit_size)? {
        NumericKind::F32 => parse_float32(text).map(f64::from),
        NumericKind::F64 => parse_float64(text),
        NumericKind::U8
        | NumericKind::U16
        | NumericKind::U32
        | NumericKind::U64
        | NumericKind::I8
        | NumericKind::I16
        | NumericKind::I32
        | NumericKind::I64 => Err(CodecError::UnsupportedWidth {
            family,
            bits: bit_size,
        }),
    }
}

/// Parses hex text holding the 4 little-endian bytes of a binary32 float.
///
/// # Errors
///
/// See [`parse_uint`].
pub fn parse_float32(text: &str) -> Result<f32, CodecError> {
    bytes_to_f32(&decode_hex(text)?)
}

/// Parses hex text holding the 8 little-endian bytes of a binary64 float.
///
/// # Errors
///
/// See [`parse_uint`].
pub fn parse_float64(text: &str) -> Result<f64, CodecError> {
    bytes_to_f64(&decode_hex(text)?)
}

/// Parses hex text into a value of the given kind.
///
/// # Errors
///
/// See [`parse_uint`].
pub fn parse_value(text: &str, kind: NumericKind) -> Result<NumericValue, CodecError> {
    kind.decode(&decode_hex(text)?)
}
