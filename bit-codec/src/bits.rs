//! Bit-for-bit reinterpretation between signed/floating point values
//! and the unsigned integer of the same width.
//!
//! These never fail and never change a single bit:
//! `conv_i8::from_bits(0x80)` is `-128`, not an overflow.

pub mod conv_i8 {
    pub const fn to_bits(n: i8) -> u8 {
        n.cast_unsigned()
    }
    pub const fn from_bits(b: u8) -> i8 {
        b.cast_signed()
    }
}

pub mod conv_i16 {
    pub const fn to_bits(n: i16) -> u16 {
        n.cast_unsigned()
    }
    pub const fn from_bits(b: u16) -> i16 {
        b.cast_signed()
    }
}

pub mod conv_i32 {
    pub const fn to_bits(n: i32) -> u32 {
        n.cast_unsigned()
    }
    pub const fn from_bits(b: u32) -> i32 {
        b.cast_signed()
    }
}

pub mod conv_i64 {
    pub const fn to_bits(n: i64) -> u64 {
        n.cast_unsigned()
    }
    pub const fn from_bits(b: u64) -> i64 {
        b.cast_signed()
    }
}

/// IEEE-754 binary32.
pub mod conv_f32 {
    pub const fn to_bits(n: f32) -> u32 {
        n.to_bits()
    }
    pub const fn from_bits(b: u32) -> f32 {
        f32::from_bits(b)
    }
}

/// IEEE-754 binary64.
pub mod conv_f64 {
    pub const fn to_bits(n: f64) -> u64 {
        n.to_bits()
    }
    pub const fn from_bits(b: u64) -> f64 {
        f64::from_bits(b)
    }
}
