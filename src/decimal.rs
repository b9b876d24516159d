//! The 128-bit fixed-point decimal type and its decompositions.
//!
//! A [`DecimalValue`] is a 96-bit unsigned magnitude assembled from three
//! 32-bit words, a scale in `0..=28`, and a sign flag:
//!
//! ```text
//! value == (-1)^sign * magnitude * 10^-scale
//! ```
//!
//! The value is already base 10, so the exact representation needs no base
//! conversion: the magnitude's digit string is the answer, shifted by the
//! scale. The in-memory layout mirrors the value's 128-bit storage: a flags
//! word carrying the scale and sign, then the high, middle, and low magnitude
//! words.
//!
//! ## Examples
//!
//! ```rust
//! use numrepr::DecimalValue;
//!
//! // 1.5 stored as magnitude 15, scale 1.
//! let d = DecimalValue::from_words(15, 0, 0, 1, false).unwrap();
//! assert_eq!(d.magnitude(), 15);
//! assert_eq!(d.to_exact().to_exact_string(), "1.5E0");
//! assert_eq!(d.to_plain_string(), "1.5");
//! ```

use crate::error::{Error, Result};
use crate::exact::ExactSci;

/// Largest representable scale: 28 fractional digits.
pub const MAX_SCALE: u8 = 28;

/// A 128-bit fixed-point decimal: 96-bit magnitude, scale, sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecimalValue {
    lo: u32,
    mid: u32,
    hi: u32,
    scale: u8,
    negative: bool,
}

impl DecimalValue {
    /// Builds a decimal from its three magnitude words, scale, and sign.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScale`] if `scale > 28`.
    pub fn from_words(lo: u32, mid: u32, hi: u32, scale: u8, negative: bool) -> Result<Self> {
        if scale > MAX_SCALE {
            return Err(Error::invalid_scale(scale));
        }
        Ok(DecimalValue {
            lo,
            mid,
            hi,
            scale,
            negative,
        })
    }

    /// The low magnitude word.
    #[inline]
    #[must_use]
    pub const fn lo(&self) -> u32 {
        self.lo
    }

    /// The middle magnitude word.
    #[inline]
    #[must_use]
    pub const fn mid(&self) -> u32 {
        self.mid
    }

    /// The high magnitude word.
    #[inline]
    #[must_use]
    pub const fn hi(&self) -> u32 {
        self.hi
    }

    /// Number of fractional digits.
    #[inline]
    #[must_use]
    pub const fn scale(&self) -> u8 {
        self.scale
    }

    /// The sign flag.
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns `true` if the magnitude is zero (regardless of sign or scale).
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.lo == 0 && self.mid == 0 && self.hi == 0
    }

    /// Assembles the 96-bit magnitude.
    #[inline]
    #[must_use]
    pub const fn magnitude(&self) -> u128 {
        (self.hi as u128) << 64 | (self.mid as u128) << 32 | self.lo as u128
    }

    /// The flags word of the in-memory layout: scale in bits 16..24, sign in
    /// bit 31.
    #[inline]
    #[must_use]
    pub const fn flags(&self) -> u32 {
        (self.scale as u32) << 16 | (self.negative as u32) << 31
    }

    /// Converts the value into its exact decimal triple.
    ///
    /// The decimal exponent is `digit_count - scale - 1`; zero short-circuits
    /// to the unsigned zero triple.
    #[must_use]
    pub fn to_exact(&self) -> ExactSci {
        ExactSci::from_decimal_parts(self.negative, self.magnitude(), u32::from(self.scale))
    }

    /// Renders the scale-preserving positional form: the magnitude's digits
    /// with the point inserted `scale` places from the right, trailing zeros
    /// kept exactly as stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numrepr::DecimalValue;
    ///
    /// let d = DecimalValue::from_words(123_4500, 0, 0, 4, true).unwrap();
    /// assert_eq!(d.to_plain_string(), "-123.4500");
    /// ```
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        let mut digits = self.magnitude().to_string();
        let scale = self.scale as usize;
        if digits.len() <= scale {
            let mut padded = "0".repeat(scale + 1 - digits.len());
            padded.push_str(&digits);
            digits = padded;
        }
        let split = digits.len() - scale;
        let mut out = String::with_capacity(digits.len() + 2);
        if self.negative && !self.is_zero() {
            out.push('-');
        }
        out.push_str(&digits[..split]);
        if scale > 0 {
            out.push('.');
            out.push_str(&digits[split..]);
        }
        out
    }

    /// Renders every byte of the 128-bit in-memory layout as fixed-width hex:
    /// flags word, then high, middle, and low magnitude words, big-endian.
    #[must_use]
    pub fn raw_bytes_hex(&self) -> String {
        format!(
            "0x{:08X}{:08X}{:08X}{:08X}",
            self.flags(),
            self.hi,
            self.mid,
            self.lo
        )
    }

    /// Renders the `sign|scale|magnitude` bit-field string: one sign bit, the
    /// scale as eight bits, and the 96-bit magnitude, all zero-padded binary.
    #[must_use]
    pub fn bit_field(&self) -> String {
        format!(
            "{}|{:08b}|{:032b}{:032b}{:032b}",
            u8::from(self.negative),
            self.scale,
            self.hi,
            self.mid,
            self.lo
        )
    }
}
