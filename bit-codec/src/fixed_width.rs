//! # Fixed-width words
//!
//! Every decoder requires a slice of *exactly* the width of the target type;
//! there is no silent truncation of trailing bytes.
//! Signed and floating point words are read as the unsigned integer of the same width
//! and then reinterpreted via [`bits`](crate::bits).

use crate::bits::{conv_f32, conv_f64, conv_i8, conv_i16, conv_i32, conv_i64};
use crate::{CodecError, NumericKind};
use zerocopy::{FromBytes, LE, U16, U32, U64};

/// A numeric type with a fixed little-endian byte representation.
pub trait FixedWidth: Copy + Sized {
    /// The kind tag for this type.
    const KIND: NumericKind;

    /// Width of the encoded value in bytes.
    const WIDTH: usize = size_of::<Self>();

    /// Decodes a value from a little-endian slice of exactly [`Self::WIDTH`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Length`] if the slice is not exactly [`Self::WIDTH`] bytes long.
    fn from_le_slice(bytes: &[u8]) -> Result<Self, CodecError>;

    /// Encodes the value as exactly [`Self::WIDTH`] little-endian bytes.
    fn to_le_vec(self) -> Vec<u8>;
}

impl CodecError {
    pub(crate) const fn length<T: FixedWidth>(actual: usize) -> Self {
        CodecError::Length {
            expected: T::WIDTH,
            actual,
        }
    }
}

impl FixedWidth for u8 {
    const KIND: NumericKind = NumericKind::U8;

    fn from_le_slice(bytes: &[u8]) -> Result<Self, CodecError> {
        match bytes {
            [b] => Ok(*b),
            _ => Err(CodecError::length::<Self>(bytes.len())),
        }
    }

    fn to_le_vec(self) -> Vec<u8> {
        vec![self]
    }
}

/// Implements [`FixedWidth`] for an unsigned integer via its zerocopy little-endian wrapper.
macro_rules! impl_unsigned_fixed_width {
    ($native:ty, $wire:ty, $kind:expr) => {
        impl FixedWidth for $native {
            const KIND: NumericKind = $kind;

            fn from_le_slice(bytes: &[u8]) -> Result<Self, CodecError> {
                <$wire>::read_from_bytes(bytes)
                    .map(|word| word.get())
                    .map_err(|_| CodecError::length::<Self>(bytes.len()))
            }

            fn to_le_vec(self) -> Vec<u8> {
                <$wire>::new(self).to_bytes().to_vec()
            }
        }
    };
}

impl_unsigned_fixed_width!(u16, U16<LE>, NumericKind::U16);
impl_unsigned_fixed_width!(u32, U32<LE>, NumericKind::U32);
impl_unsigned_fixed_width!(u64, U64<LE>, NumericKind::U64);

/// Implements [`FixedWidth`] for a type whose bits are carried by an unsigned integer
/// of the same width.
macro_rules! impl_reinterpreted_fixed_width {
    ($native:ty, $pattern:ty, $kind:expr, $conv:ident) => {
        impl FixedWidth for $native {
            const KIND: NumericKind = $kind;

            fn from_le_slice(bytes: &[u8]) -> Result<Self, CodecError> {
                <$pattern>::from_le_slice(bytes).map($conv::from_bits)
            }

            fn to_le_vec(self) -> Vec<u8> {
                $conv::to_bits(self).to_le_vec()
            }
        }
    };
}

impl_reinterpreted_fixed_width!(i8, u8, NumericKind::I8, conv_i8);
impl_reinterpreted_fixed_width!(i16, u16, NumericKind::I16, conv_i16);
impl_reinterpreted_fixed_width!(i32, u32, NumericKind::I32, conv_i32);
impl_reinterpreted_fixed_width!(i64, u64, NumericKind::I64, conv_i64);
impl_reinterpreted_fixed_width!(f32, u32, NumericKind::F32, conv_f32);
impl_reinterpreted_fixed_width!(f64, u64, NumericKind::F64, conv_f64);

/// Encodes any fixed-width value as little-endian bytes.
pub fn value_to_bytes<T: FixedWidth>(value: T) -> Vec<u8> {
    value.to_le_vec()
}

/// Generates a `bytes_to_*` decoder and a `*_to_bytes` encoder returning a fixed-size array.
///
/// Unsigned types are written straight to their little-endian word;
/// the others first go through their unsigned bit pattern.
macro_rules! codec_fns {
    (@decode $native:ty, $width:literal, $decode:ident) => {
        #[doc = concat!("Decodes a `", stringify!($native), "` from exactly ", stringify!($width), " little-endian bytes.")]
        ///
        /// # Errors
        ///
        /// Returns [`CodecError::Length`] if the slice has any other length.
        #[inline]
        pub fn $decode(bytes: &[u8]) -> Result<$native, CodecError> {
            <$native>::from_le_slice(bytes)
        }
    };
    ($native:ty, $width:literal, $decode:ident, $encode:ident, $word:path) => {
        codec_fns!(@decode $native, $width, $decode);

        #[doc = concat!("Encodes a `", stringify!($native), "` as ", stringify!($width), " little-endian bytes.")]
        #[inline]
        pub const fn $encode(value: $native) -> [u8; $width] {
            $word(value)
        }
    };
    ($native:ty, $width:literal, $decode:ident, $encode:ident, $word:path, $to_bits:path) => {
        codec_fns!(@decode $native, $width, $decode);

        #[doc = concat!("Encodes a `", stringify!($native), "` as ", stringify!($width), " little-endian bytes.")]
        #[inline]
        pub const fn $encode(value: $native) -> [u8; $width] {
            $word($to_bits(value))
        }
    };
}

const fn u8_word(n: u8) -> [u8; 1] {
    [n]
}
const fn u16_word(n: u16) -> [u8; 2] {
    U16::<LE>::new(n).to_bytes()
}
const fn u32_word(n: u32) -> [u8; 4] {
    U32::<LE>::new(n).to_bytes()
}
const fn u64_word(n: u64) -> [u8; 8] {
    U64::<LE>::new(n).to_bytes()
}

codec_fns!(u8, 1, bytes_to_u8, u8_to_bytes, u8_word);
codec_fns!(u16, 2, bytes_to_u16, u16_to_bytes, u16_word);
codec_fns!(u32, 4, bytes_to_u32, u32_to_bytes, u32_word);
codec_fns!(u64, 8, bytes_to_u64, u64_to_bytes, u64_word);
codec_fns!(i8, 1, bytes_to_i8, i8_to_bytes, u8_word, conv_i8::to_bits);
codec_fns!(i16, 2, bytes_to_i16, i16_to_bytes, u16_word, conv_i16::to_bits);
codec_fns!(i32, 4, bytes_to_i32, i32_to_bytes, u32_word, conv_i32::to_bits);
codec_fns!(i64, 8, bytes_to_i64, i64_to_bytes, u64_word, conv_i64::to_bits);
codec_fns!(f32, 4, bytes_to_f32, f32_to_bytes, u32_word, conv_f32::to_bits);
codec_fns!(f64, 8, bytes_to_f64, f64_to_bytes, u64_word, conv_f64::to_bits);

/// Concatenates byte sequences in order, with no separator.
pub fn combine_bytes<I>(sequences: I) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    sequences.into_iter().fold(Vec::new(), |mut acc, seq| {
        acc.extend_from_slice(seq.as_ref());
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_little_endian_layout() {
        assert_eq!(u8_to_bytes(0x80), [0x80]);
        assert_eq!(u16_to_bytes(0xff00), [0x00, 0xff]);
        assert_eq!(u32_to_bytes(0x1234_5678), [0x78, 0x56, 0x34, 0x12]);
        assert_eq!(
            u64_to_bytes(0x1234_5678_9abc_def0),
            [0xf0, 0xde, 0xbc, 0x9a, 0x78, 0x56, 0x34, 0x12]
        );
        assert_eq!(bytes_to_u32(&[0x78, 0x56, 0x34, 0x12]), Ok(0x1234_5678));
    }

    #[test]
    fn test_array_and_vec_encoders_agree() {
        assert_eq!(value_to_bytes(0x1234_5678_u32), u32_to_bytes(0x1234_5678).to_vec());
        assert_eq!(value_to_bytes(-2_i16), i16_to_bytes(-2).to_vec());
        assert_eq!(value_to_bytes(1.5_f64), f64_to_bytes(1.5).to_vec());
    }

    proptest! {
        #[test]
        fn generated_encoders_match_fixed_width(a: u8, b: u16, c: u32, d: u64, e: i8, f: i64, g: u32) {
            prop_assert_eq!(u8_to_bytes(a).to_vec(), a.to_le_vec());
            prop_assert_eq!(u16_to_bytes(b).to_vec(), b.to_le_vec());
            prop_assert_eq!(u32_to_bytes(c).to_vec(), c.to_le_vec());
            prop_assert_eq!(u64_to_bytes(d).to_vec(), d.to_le_vec());
            prop_assert_eq!(u64_to_bytes(d), d.to_le_bytes());
            prop_assert_eq!(i8_to_bytes(e).to_vec(), e.to_le_vec());
            prop_assert_eq!(i64_to_bytes(f).to_vec(), f.to_le_vec());
            let x = f32::from_bits(g);
            prop_assert_eq!(f32_to_bytes(x).to_vec(), x.to_le_vec());
        }
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        assert_eq!(
            bytes_to_u16(&[0x01]),
            Err(CodecError::Length {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            bytes_to_u16(&[0x01, 0x02, 0x03]),
            Err(CodecError::Length {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(
            bytes_to_u8(&[]),
            Err(CodecError::Length {
                expected: 1,
                actual: 0
            })
        );
        assert_eq!(
            bytes_to_f64(&[0; 4]),
            Err(CodecError::Length {
                expected: 8,
                actual: 4
            })
        );
        assert_eq!(
            bytes_to_i32(&[0; 8]),
            Err(CodecError::Length {
                expected: 4,
                actual: 8
            })
        );
    }

    #[test]
    fn test_signed_reinterpretation() {
        assert_eq!(bytes_to_i8(&[0x80]), Ok(-128));
        assert_eq!(bytes_to_i16(&u16_to_bytes(0xff00)), Ok(-256));
        assert_eq!(bytes_to_i32(&u32_to_bytes(0xff00_0000)), Ok(-16_777_216));
        assert_eq!(
            bytes_to_i64(&u64_to_bytes(0xff00_0000_ff00_0000)),
            Ok(-72_057_589_759_737_856)
        );
        assert_eq!(i16_to_bytes(-1), [0xff, 0xff]);
    }

    #[test]
    fn test_float_reinterpretation() {
        assert_eq!(f32_to_bytes(-356.456), [0x5e, 0x3a, 0xb2, 0xc3]);
        assert_eq!(bytes_to_f32(&f32_to_bytes(-356.456)), Ok(-356.456));
        assert_eq!(bytes_to_f64(&f64_to_bytes(-356.456)), Ok(-356.456));
        assert_eq!(
            bytes_to_f64(&[0x9e, 0xef, 0xa7, 0xc6, 0x4b, 0x47, 0x76, 0xc0]),
            Ok(-356.456)
        );
    }

    #[test]
    fn test_combine_bytes() {
        assert_eq!(
            combine_bytes([&[0x01][..], &[0x02, 0x03][..]]),
            vec![0x01, 0x02, 0x03]
        );
        assert_eq!(
            combine_bytes([u16_to_bytes(1).to_vec(), Vec::new(), vec![0xff]]),
            vec![0x01, 0x00, 0xff]
        );
        assert!(combine_bytes(Vec::<Vec<u8>>::new()).is_empty());
    }

    proptest! {
        #[test]
        fn unsigned_round_trip(a: u8, b: u16, c: u32, d: u64) {
            prop_assert_eq!(bytes_to_u8(&u8_to_bytes(a)), Ok(a));
            prop_assert_eq!(bytes_to_u16(&u16_to_bytes(b)), Ok(b));
            prop_assert_eq!(bytes_to_u32(&u32_to_bytes(c)), Ok(c));
            prop_assert_eq!(bytes_to_u64(&u64_to_bytes(d)), Ok(d));
        }

        #[test]
        fn signed_round_trip(a: i8, b: i16, c: i32, d: i64) {
            prop_assert_eq!(bytes_to_i8(&value_to_bytes(a)), Ok(a));
            prop_assert_eq!(bytes_to_i16(&value_to_bytes(b)), Ok(b));
            prop_assert_eq!(bytes_to_i32(&value_to_bytes(c)), Ok(c));
            prop_assert_eq!(bytes_to_i64(&value_to_bytes(d)), Ok(d));
        }

        #[test]
        fn float_round_trip_is_bit_exact(a: u32, b: u64) {
            let x = f32::from_bits(a);
            let y = f64::from_bits(b);
            prop_assert_eq!(bytes_to_f32(&f32_to_bytes(x)).map(f32::to_bits), Ok(a));
            prop_assert_eq!(bytes_to_f64(&f64_to_bytes(y)).map(f64::to_bits), Ok(b));
        }

        #[test]
        fn combine_preserves_every_byte(parts in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..8), 0..8)) {
            let combined = combine_bytes(&parts);
            prop_assert_eq!(combined.len(), parts.iter().map(Vec::len).sum::<usize>());
            prop_assert_eq!(combined, parts.concat());
        }
    }
}
