//! # numrepr
//!
//! Exact, unambiguous textual representations of numeric values — a debugging
//! "repr" facility for numbers.
//!
//! ## What does "exact" mean?
//!
//! A binary floating-point value almost never stores the decimal number it
//! was written as. `numrepr` renders the value the hardware actually holds,
//! digit for digit, with no hidden rounding:
//!
//! ```rust
//! use numrepr::{repr, FloatMode, Mode, NumericValue};
//!
//! let sum = NumericValue::from(0.1 + 0.2);
//! assert_eq!(
//!     repr(&sum, Mode::Float(FloatMode::Exact)).unwrap(),
//!     "3.000000000000000444089209850062616169452667236328125E-1",
//! );
//! ```
//!
//! The conversion uses arbitrary-precision integer arithmetic end to end —
//! no floating-point operation ever touches the digits — so the output is
//! exact for every finite input, from the deepest subnormal to the largest
//! normal value of each width.
//!
//! ## Key Features
//!
//! - **Exact scientific notation** for half/single/double floats and a
//!   128-bit fixed-point decimal type, rounding-free by construction
//! - **Bit-level views**: sign/exponent/mantissa field splits and raw-memory
//!   hex for every supported kind
//! - **Integer bases**: binary, quaternary, octal, and hex with correct
//!   two's-complement handling down to the most-negative value of each
//!   width, 8 through 128 bits plus arbitrary precision
//! - **Closed dispatch**: values and modes are plain enums; the wrong
//!   pairing is a synchronous error, never a silent fallback
//! - **No shared state**: every call is a pure function over immutable
//!   per-width constant tables, freely usable across threads
//!
//! ## Quick Start
//!
//! ```rust
//! use numrepr::{repr, FloatMode, IntMode, Mode, NumericValue};
//!
//! // The f32 nearest to pi, exactly.
//! let pi = NumericValue::from(3.1415926535f32);
//! assert_eq!(
//!     repr(&pi, Mode::Float(FloatMode::Exact)).unwrap(),
//!     "3.1415927410125732421875E0",
//! );
//!
//! // Integers in any power-of-two base.
//! let x = NumericValue::from(-42i32);
//! assert_eq!(repr(&x, Mode::Int(IntMode::Binary)).unwrap(), "-0b101010");
//! assert_eq!(repr(&x, Mode::Int(IntMode::RawBytesHex)).unwrap(), "0xFFFFFFD6");
//! ```
//!
//! ## Modes
//!
//! | Kind | Modes |
//! |------|-------|
//! | float / decimal | `Exact`, `Scientific(p)`, `Round(p)`, `General`, `RawBytesHex`, `BitField` |
//! | integer | `Binary`, `Octal`, `Quaternary`, `Hex`, `Decimal`, `RawBytesHex` |
//!
//! `Exact` emits `["-"] digit "." fraction "E" ["-"] exponent` with a single
//! nonzero leading digit and no trailing fraction zeros. `Scientific(p)` is
//! the rounded variant with an explicit `+`/`-` on the exponent. The
//! underlying digit/exponent triple is public as [`ExactSci`] for callers
//! that need a different assembly.
//!
//! ## Errors
//!
//! The only failures are programmer errors — a mode applied to the wrong
//! numeric kind, or a decimal scale out of range. Both return an [`Error`]
//! immediately; nothing is retried and no partial output is produced.
//!
//! ## Feature Flags
//!
//! - `serde`: derives `Serialize`/`Deserialize` on the mode, options, spec,
//!   and decomposition types so they can be embedded in diagnostics or
//!   loaded from configuration.

pub mod decimal;
pub mod error;
pub mod exact;
pub mod float;
pub mod mode;
pub mod options;
pub mod radix;
pub mod spec;
pub mod value;

mod render;

pub use decimal::{DecimalValue, MAX_SCALE};
pub use error::{Error, Result};
pub use exact::ExactSci;
pub use float::{FloatClass, FloatInfo};
pub use mode::{FloatMode, IntMode, Mode};
pub use options::ReprOptions;
pub use radix::Base;
pub use spec::{FloatKind, FloatSpec};
pub use value::{IntValue, NumericValue};

/// Re-export of the binary16 type accepted by [`NumericValue::Half`].
pub use half::f16;

/// Formats a value in the given mode with default options.
///
/// # Examples
///
/// ```rust
/// use numrepr::{repr, FloatMode, Mode, NumericValue};
///
/// let value = NumericValue::from(0.5f64);
/// let out = repr(&value, Mode::Float(FloatMode::Exact)).unwrap();
/// assert_eq!(out, "5.0E-1");
/// ```
///
/// # Errors
///
/// Returns [`Error::KindMismatch`] when the mode family does not match the
/// value's numeric kind.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn repr(value: &NumericValue, mode: Mode) -> Result<String> {
    repr_with_options(value, mode, ReprOptions::default())
}

/// Formats a value in the given mode with custom options.
///
/// # Examples
///
/// ```rust
/// use numrepr::{repr_with_options, IntMode, Mode, NumericValue, ReprOptions};
///
/// let value = NumericValue::from(0x2Au8);
/// let options = ReprOptions::new().with_pad_width(4);
/// let out = repr_with_options(&value, Mode::Int(IntMode::Hex), options).unwrap();
/// assert_eq!(out, "0x002A");
/// ```
///
/// # Errors
///
/// Returns [`Error::KindMismatch`] when the mode family does not match the
/// value's numeric kind.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn repr_with_options(
    value: &NumericValue,
    mode: Mode,
    options: ReprOptions,
) -> Result<String> {
    render::render(value, mode, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repr_exact_double() {
        let value = NumericValue::from(1.5f64);
        assert_eq!(
            repr(&value, Mode::Float(FloatMode::Exact)).unwrap(),
            "1.5E0"
        );
    }

    #[test]
    fn repr_exact_half() {
        let value = NumericValue::from(f16::from_f32(1.0));
        assert_eq!(
            repr(&value, Mode::Float(FloatMode::Exact)).unwrap(),
            "1.0E0"
        );
    }

    #[test]
    fn repr_integer_bases() {
        let value = NumericValue::from(255u8);
        assert_eq!(repr(&value, Mode::Int(IntMode::Hex)).unwrap(), "0xFF");
        assert_eq!(repr(&value, Mode::Int(IntMode::Octal)).unwrap(), "0o377");
        assert_eq!(
            repr(&value, Mode::Int(IntMode::Quaternary)).unwrap(),
            "0q3333"
        );
    }

    #[test]
    fn repr_decimal_value() {
        let d = DecimalValue::from_words(15, 0, 0, 1, false).unwrap();
        let value = NumericValue::from(d);
        assert_eq!(
            repr(&value, Mode::Float(FloatMode::Exact)).unwrap(),
            "1.5E0"
        );
    }

    #[test]
    fn repr_mismatch_errors() {
        let value = NumericValue::from(1u64);
        assert!(repr(&value, Mode::Float(FloatMode::Exact)).is_err());
    }

    #[test]
    fn options_pad_integer_digits() {
        let value = NumericValue::from(5u8);
        let options = ReprOptions::new().with_pad_width(8);
        assert_eq!(
            repr_with_options(&value, Mode::Int(IntMode::Binary), options).unwrap(),
            "0b00000101"
        );
    }
}
