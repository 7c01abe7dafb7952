//! # Fixed-width numeric codecs
//!
//! Pure conversions between fixed-width numbers (`u8`..`u64`, `i8`..`i64`, `f32`, `f64`),
//! their raw byte representation, and hexadecimal text.
//!
//! All multi-byte words are stored **little-endian**.
//! Hex text is always written in byte-sequence order,
//! so `0x1234_5678_u32` is stored as `[0x78, 0x56, 0x34, 0x12]` and renders as `"78563412"`.
//! Signed and floating point values are carried as the bit pattern of the unsigned
//! integer of the same width; nothing is ever rounded or saturated.

// Private modules by default
pub mod bits;
mod error;
mod fixed_width;
mod hex_text;
mod kind;
mod parse;

// Flatten the module tree; most modules only have a handful of useful definitions.
pub use error::{CodecError, UnknownKindError};
pub use fixed_width::{
    FixedWidth, bytes_to_f32, bytes_to_f64, bytes_to_i8, bytes_to_i16, bytes_to_i32,
    bytes_to_i64, bytes_to_u8, bytes_to_u16, bytes_to_u32, bytes_to_u64, combine_bytes,
    f32_to_bytes, f64_to_bytes, i8_to_bytes, i16_to_bytes, i32_to_bytes, i64_to_bytes,
    u8_to_bytes, u16_to_bytes, u32_to_bytes, u64_to_bytes, value_to_bytes,
};
pub use hex_text::{decode_hex, encode_hex};
pub use kind::{NumericFamily, NumericKind, NumericValue};
pub use parse::{parse_float, parse_float32, parse_float64, parse_int, parse_uint, parse_value};
