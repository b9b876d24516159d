//! The closed union of numeric values this crate can format.
//!
//! Callers hand the formatter a [`NumericValue`] built from whatever leaf
//! value they extracted, together with a [`Mode`](crate::Mode) selector. The
//! union is deliberately closed: every pipeline is selected by exhaustive
//! pattern matching, never by open-ended runtime dispatch.
//!
//! ## Creating Values
//!
//! Every supported primitive converts with `From`:
//!
//! ```rust
//! use numrepr::{IntValue, NumericValue};
//! use num_bigint::BigInt;
//!
//! let a = NumericValue::from(1.5f64);
//! let b = NumericValue::from(-42i32);
//! let c = NumericValue::from(BigInt::from(7) << 200);
//!
//! assert!(a.is_float());
//! assert!(b.is_int());
//! assert!(matches!(c, NumericValue::Int(IntValue::Big(_))));
//! ```

use crate::decimal::DecimalValue;
use half::f16;
use num_bigint::BigInt;
use std::fmt;

/// A tagged numeric value accepted by the formatter.
///
/// # Examples
///
/// ```rust
/// use numrepr::NumericValue;
///
/// let value = NumericValue::from(2.5f32);
/// assert_eq!(value.kind_name(), "single");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum NumericValue {
    /// IEEE 754 binary16.
    Half(f16),
    /// IEEE 754 binary32.
    Single(f32),
    /// IEEE 754 binary64.
    Double(f64),
    /// 128-bit fixed-point decimal.
    Decimal(DecimalValue),
    /// Signed or unsigned integer of fixed or arbitrary width.
    Int(IntValue),
}

/// A signed or unsigned integer of a known byte width, or arbitrary precision.
#[derive(Clone, Debug, PartialEq)]
pub enum IntValue {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    /// Arbitrary-precision signed integer.
    Big(BigInt),
}

impl NumericValue {
    /// Returns `true` if the value is a binary floating-point kind.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(
            self,
            NumericValue::Half(_) | NumericValue::Single(_) | NumericValue::Double(_)
        )
    }

    /// Returns `true` if the value is the fixed-point decimal kind.
    #[inline]
    #[must_use]
    pub const fn is_decimal(&self) -> bool {
        matches!(self, NumericValue::Decimal(_))
    }

    /// Returns `true` if the value is an integer kind.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, NumericValue::Int(_))
    }

    /// Returns the kind name used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            NumericValue::Half(_) => "half",
            NumericValue::Single(_) => "single",
            NumericValue::Double(_) => "double",
            NumericValue::Decimal(_) => "decimal",
            NumericValue::Int(i) => i.kind_name(),
        }
    }
}

impl IntValue {
    /// Returns `true` for the signed variants.
    ///
    /// The arbitrary-precision variant is always signed.
    #[inline]
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        matches!(
            self,
            IntValue::I8(_)
                | IntValue::I16(_)
                | IntValue::I32(_)
                | IntValue::I64(_)
                | IntValue::I128(_)
                | IntValue::Big(_)
        )
    }

    /// Byte length of the operand: the fixed width for primitive variants,
    /// `ceil(bitlength / 8)` of the two's-complement encoding for `Big`.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        match self {
            IntValue::I8(_) | IntValue::U8(_) => 1,
            IntValue::I16(_) | IntValue::U16(_) => 2,
            IntValue::I32(_) | IntValue::U32(_) => 4,
            IntValue::I64(_) | IntValue::U64(_) => 8,
            IntValue::I128(_) | IntValue::U128(_) => 16,
            IntValue::Big(b) => b.to_signed_bytes_le().len(),
        }
    }

    /// The little-endian two's-complement byte sequence of the value.
    ///
    /// This is the form the radix formatter consumes; for `Big` it is the
    /// minimal signed encoding (never empty, zero encodes as one zero byte).
    #[must_use]
    pub fn to_le_bytes(&self) -> Vec<u8> {
        match self {
            IntValue::I8(v) => v.to_le_bytes().to_vec(),
            IntValue::I16(v) => v.to_le_bytes().to_vec(),
            IntValue::I32(v) => v.to_le_bytes().to_vec(),
            IntValue::I64(v) => v.to_le_bytes().to_vec(),
            IntValue::I128(v) => v.to_le_bytes().to_vec(),
            IntValue::U8(v) => v.to_le_bytes().to_vec(),
            IntValue::U16(v) => v.to_le_bytes().to_vec(),
            IntValue::U32(v) => v.to_le_bytes().to_vec(),
            IntValue::U64(v) => v.to_le_bytes().to_vec(),
            IntValue::U128(v) => v.to_le_bytes().to_vec(),
            IntValue::Big(b) => {
                let bytes = b.to_signed_bytes_le();
                if bytes.is_empty() {
                    vec![0]
                } else {
                    bytes
                }
            }
        }
    }

    /// Returns the kind name used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            IntValue::I8(_) => "i8",
            IntValue::I16(_) => "i16",
            IntValue::I32(_) => "i32",
            IntValue::I64(_) => "i64",
            IntValue::I128(_) => "i128",
            IntValue::U8(_) => "u8",
            IntValue::U16(_) => "u16",
            IntValue::U32(_) => "u32",
            IntValue::U64(_) => "u64",
            IntValue::U128(_) => "u128",
            IntValue::Big(_) => "bigint",
        }
    }
}

impl fmt::Display for IntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntValue::I8(v) => write!(f, "{}", v),
            IntValue::I16(v) => write!(f, "{}", v),
            IntValue::I32(v) => write!(f, "{}", v),
            IntValue::I64(v) => write!(f, "{}", v),
            IntValue::I128(v) => write!(f, "{}", v),
            IntValue::U8(v) => write!(f, "{}", v),
            IntValue::U16(v) => write!(f, "{}", v),
            IntValue::U32(v) => write!(f, "{}", v),
            IntValue::U64(v) => write!(f, "{}", v),
            IntValue::U128(v) => write!(f, "{}", v),
            IntValue::Big(v) => write!(f, "{}", v),
        }
    }
}

impl From<i8> for IntValue {
    fn from(value: i8) -> Self {
        IntValue::I8(value)
    }
}

impl From<i16> for IntValue {
    fn from(value: i16) -> Self {
        IntValue::I16(value)
    }
}

impl From<i32> for IntValue {
    fn from(value: i32) -> Self {
        IntValue::I32(value)
    }
}

impl From<i64> for IntValue {
    fn from(value: i64) -> Self {
        IntValue::I64(value)
    }
}

impl From<i128> for IntValue {
    fn from(value: i128) -> Self {
        IntValue::I128(value)
    }
}

impl From<u8> for IntValue {
    fn from(value: u8) -> Self {
        IntValue::U8(value)
    }
}

impl From<u16> for IntValue {
    fn from(value: u16) -> Self {
        IntValue::U16(value)
    }
}

impl From<u32> for IntValue {
    fn from(value: u32) -> Self {
        IntValue::U32(value)
    }
}

impl From<u64> for IntValue {
    fn from(value: u64) -> Self {
        IntValue::U64(value)
    }
}

impl From<u128> for IntValue {
    fn from(value: u128) -> Self {
        IntValue::U128(value)
    }
}

impl From<BigInt> for IntValue {
    fn from(value: BigInt) -> Self {
        IntValue::Big(value)
    }
}

impl From<f16> for NumericValue {
    fn from(value: f16) -> Self {
        NumericValue::Half(value)
    }
}

impl From<f32> for NumericValue {
    fn from(value: f32) -> Self {
        NumericValue::Single(value)
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        NumericValue::Double(value)
    }
}

impl From<DecimalValue> for NumericValue {
    fn from(value: DecimalValue) -> Self {
        NumericValue::Decimal(value)
    }
}

impl From<IntValue> for NumericValue {
    fn from(value: IntValue) -> Self {
        NumericValue::Int(value)
    }
}

impl From<i8> for NumericValue {
    fn from(value: i8) -> Self {
        NumericValue::Int(IntValue::I8(value))
    }
}

impl From<i16> for NumericValue {
    fn from(value: i16) -> Self {
        NumericValue::Int(IntValue::I16(value))
    }
}

impl From<i32> for NumericValue {
    fn from(value: i32) -> Self {
        NumericValue::Int(IntValue::I32(value))
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        NumericValue::Int(IntValue::I64(value))
    }
}

impl From<i128> for NumericValue {
    fn from(value: i128) -> Self {
        NumericValue::Int(IntValue::I128(value))
    }
}

impl From<u8> for NumericValue {
    fn from(value: u8) -> Self {
        NumericValue::Int(IntValue::U8(value))
    }
}

impl From<u16> for NumericValue {
    fn from(value: u16) -> Self {
        NumericValue::Int(IntValue::U16(value))
    }
}

impl From<u32> for NumericValue {
    fn from(value: u32) -> Self {
        NumericValue::Int(IntValue::U32(value))
    }
}

impl From<u64> for NumericValue {
    fn from(value: u64) -> Self {
        NumericValue::Int(IntValue::U64(value))
    }
}

impl From<u128> for NumericValue {
    fn from(value: u128) -> Self {
        NumericValue::Int(IntValue::U128(value))
    }
}

impl From<BigInt> for NumericValue {
    fn from(value: BigInt) -> Self {
        NumericValue::Int(IntValue::Big(value))
    }
}
