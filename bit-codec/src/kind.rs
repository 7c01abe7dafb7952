use crate::{CodecError, FixedWidth, UnknownKindError};
#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The broad class of a numeric kind, used to validate requested bit widths.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NumericFamily {
    Unsigned,
    Signed,
    Float,
}

impl NumericFamily {
    /// Looks up the kind of this family with the given width in bits.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnsupportedWidth`] unless `bits` is one of 8, 16, 32 or 64
    /// for integers, or one of 32 or 64 for floats.
    pub const fn kind_with_bits(self, bits: u32) -> Result<NumericKind, CodecError> {
        match (self, bits) {
            (NumericFamily::Unsigned, 8) => Ok(NumericKind::U8),
            (NumericFamily::Unsigned, 16) => Ok(NumericKind::U16),
            (NumericFamily::Unsigned, 32) => Ok(NumericKind::U32),
            (NumericFamily::Unsigned, 64) => Ok(NumericKind::U64),
            (NumericFamily::Signed, 8) => Ok(NumericKind::I8),
            (NumericFamily::Signed, 16) => Ok(NumericKind::I16),
            (NumericFamily::Signed, 32) => Ok(NumericKind::I32),
            (NumericFamily::Signed, 64) => Ok(NumericKind::I64),
            (NumericFamily::Float, 32) => Ok(NumericKind::F32),
            (NumericFamily::Float, 64) => Ok(NumericKind::F64),
            (family, bits) => Err(CodecError::UnsupportedWidth { family, bits }),
        }
    }
}

impl Display for NumericFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NumericFamily::Unsigned => "unsigned integer",
            NumericFamily::Signed => "signed integer",
            NumericFamily::Float => "floating point",
        })
    }
}

/// One of the supported fixed-width numeric types.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum NumericKind {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

impl NumericKind {
    pub const ALL: [NumericKind; 10] = [
        NumericKind::U8,
        NumericKind::U16,
        NumericKind::U32,
        NumericKind::U64,
        NumericKind::I8,
        NumericKind::I16,
        NumericKind::I32,
        NumericKind::I64,
        NumericKind::F32,
        NumericKind::F64,
    ];

    /// The encoded width in bytes.
    pub const fn width(self) -> usize {
        match self {
            NumericKind::U8 | NumericKind::I8 => 1,
            NumericKind::U16 | NumericKind::I16 => 2,
            NumericKind::U32 | NumericKind::I32 | NumericKind::F32 => 4,
            NumericKind::U64 | NumericKind::I64 | NumericKind::F64 => 8,
        }
    }

    pub const fn family(self) -> NumericFamily {
        match self {
            NumericKind::U8 | NumericKind::U16 | NumericKind::U32 | NumericKind::U64 => {
                NumericFamily::Unsigned
            }
            NumericKind::I8 | NumericKind::I16 | NumericKind::I32 | NumericKind::I64 => {
                NumericFamily::Signed
            }
            NumericKind::F32 | NumericKind::F64 => NumericFamily::Float,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            NumericKind::U8 => "u8",
            NumericKind::U16 => "u16",
            NumericKind::U32 => "u32",
            NumericKind::U64 => "u64",
            NumericKind::I8 => "i8",
            NumericKind::I16 => "i16",
            NumericKind::I32 => "i32",
            NumericKind::I64 => "i64",
            NumericKind::F32 => "f32",
            NumericKind::F64 => "f64",
        }
    }

    /// Decodes a value of this kind from exactly [`NumericKind::width`] little-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Length`] if the slice has any other length.
    pub fn decode(self, bytes: &[u8]) -> Result<NumericValue, CodecError> {
        match self {
            NumericKind::U8 => u8::from_le_slice(bytes).map(NumericValue::U8),
            NumericKind::U16 => u16::from_le_slice(bytes).map(NumericValue::U16),
            NumericKind::U32 => u32::from_le_slice(bytes).map(NumericValue::U32),
            NumericKind::U64 => u64::from_le_slice(bytes).map(NumericValue::U64),
            NumericKind::I8 => i8::from_le_slice(bytes).map(NumericValue::I8),
            NumericKind::I16 => i16::from_le_slice(bytes).map(NumericValue::I16),
            NumericKind::I32 => i32::from_le_slice(bytes).map(NumericValue::I32),
            NumericKind::I64 => i64::from_le_slice(bytes).map(NumericValue::I64),
            NumericKind::F32 => f32::from_le_slice(bytes).map(NumericValue::F32),
            NumericKind::F64 => f64::from_le_slice(bytes).map(NumericValue::F64),
        }
    }
}

impl Display for NumericKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumericKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownKindError(s.to_string()))
    }
}

/// A value of one of the supported fixed-width numeric types.
///
/// With the `serde` feature, values serialize as plain numbers.
/// Non-finite floats have no number form in formats like JSON,
/// so `NaN`, `inf` and `-inf` serialize as their display string instead.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NumericValue {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

impl NumericValue {
    pub const fn kind(&self) -> NumericKind {
        match self {
            NumericValue::U8(_) => NumericKind::U8,
            NumericValue::U16(_) => NumericKind::U16,
            NumericValue::U32(_) => NumericKind::U32,
            NumericValue::U64(_) => NumericKind::U64,
            NumericValue::I8(_) => NumericKind::I8,
            NumericValue::I16(_) => NumericKind::I16,
            NumericValue::I32(_) => NumericKind::I32,
            NumericValue::I64(_) => NumericKind::I64,
            NumericValue::F32(_) => NumericKind::F32,
            NumericValue::F64(_) => NumericKind::F64,
        }
    }

    /// Encodes the value as little-endian bytes.
    pub fn to_le_vec(self) -> Vec<u8> {
        match self {
            NumericValue::U8(v) => v.to_le_vec(),
            NumericValue::U16(v) => v.to_le_vec(),
            NumericValue::U32(v) => v.to_le_vec(),
            NumericValue::U64(v) => v.to_le_vec(),
            NumericValue::I8(v) => v.to_le_vec(),
            NumericValue::I16(v) => v.to_le_vec(),
            NumericValue::I32(v) => v.to_le_vec(),
            NumericValue::I64(v) => v.to_le_vec(),
            NumericValue::F32(v) => v.to_le_vec(),
            NumericValue::F64(v) => v.to_le_vec(),
        }
    }
}

impl Display for NumericValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericValue::U8(v) => v.fmt(f),
            NumericValue::U16(v) => v.fmt(f),
            NumericValue::U32(v) => v.fmt(f),
            NumericValue::U64(v) => v.fmt(f),
            NumericValue::I8(v) => v.fmt(f),
            NumericValue::I16(v) => v.fmt(f),
            NumericValue::I32(v) => v.fmt(f),
            NumericValue::I64(v) => v.fmt(f),
            NumericValue::F32(v) => v.fmt(f),
            NumericValue::F64(v) => v.fmt(f),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for NumericValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            NumericValue::U8(v) => serializer.serialize_u8(v),
            NumericValue::U16(v) => serializer.serialize_u16(v),
            NumericValue::U32(v) => serializer.serialize_u32(v),
            NumericValue::U64(v) => serializer.serialize_u64(v),
            NumericValue::I8(v) => serializer.serialize_i8(v),
            NumericValue::I16(v) => serializer.serialize_i16(v),
            NumericValue::I32(v) => serializer.serialize_i32(v),
            NumericValue::I64(v) => serializer.serialize_i64(v),
            NumericValue::F32(v) if v.is_finite() => serializer.serialize_f32(v),
            NumericValue::F64(v) if v.is_finite() => serializer.serialize_f64(v),
            NumericValue::F32(_) | NumericValue::F64(_) => serializer.collect_str(self),
        }
    }
}
