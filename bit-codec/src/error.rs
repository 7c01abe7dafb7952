use crate::NumericFamily;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CodecError {
    #[error("Expected exactly {expected} bytes, but got {actual}.")]
    Length { expected: usize, actual: usize },
    #[error("Invalid hexadecimal text: {0}")]
    Format(#[from] hex::FromHexError),
    #[error("A width of {bits} bits is not supported for {family} values.")]
    UnsupportedWidth { family: NumericFamily, bits: u32 },
}

/// The name does not match any [`NumericKind`](crate::NumericKind).
#[derive(Debug, Error, PartialEq)]
#[error("Unknown numeric kind `{0}`; expected one of u8, u16, u32, u64, i8, i16, i32, i64, f32, f64.")]
pub struct UnknownKindError(pub String);
