//! Format mode selectors.
//!
//! A [`Mode`] names the pipeline a value is rendered through. The enums are
//! closed on purpose: the dispatcher matches exhaustively, and pairing a mode
//! with a value of the wrong kind is an immediate
//! [`Error::KindMismatch`](crate::Error::KindMismatch).

use crate::radix::Base;

/// Modes applicable to floating-point and fixed-point decimal values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FloatMode {
    /// Mathematically exact scientific notation, no rounding anywhere.
    Exact,
    /// Scientific notation rounded to the given number of fraction digits,
    /// explicit sign on the exponent.
    Scientific(usize),
    /// Positional decimal rounded to the given number of fraction digits.
    Round(usize),
    /// The host's shortest round-trip rendering.
    General,
    /// Every byte of the in-memory representation as fixed-width hex.
    RawBytesHex,
    /// The `sign|exponent|mantissa` binary field view.
    BitField,
}

impl FloatMode {
    /// Returns the mode name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            FloatMode::Exact => "Exact",
            FloatMode::Scientific(_) => "Scientific",
            FloatMode::Round(_) => "Round",
            FloatMode::General => "General",
            FloatMode::RawBytesHex => "RawBytesHex",
            FloatMode::BitField => "BitField",
        }
    }
}

/// Modes applicable to integer values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntMode {
    /// Base 2 with `0b` marker.
    Binary,
    /// Base 8 with `0o` marker.
    Octal,
    /// Base 4 with `0q` marker.
    Quaternary,
    /// Base 16 with `0x` marker.
    Hex,
    /// Native base 10.
    Decimal,
    /// Every byte of the in-memory representation as fixed-width hex, no
    /// sign interpretation.
    RawBytesHex,
}

impl IntMode {
    /// Returns the mode name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            IntMode::Binary => "Binary",
            IntMode::Octal => "Octal",
            IntMode::Quaternary => "Quaternary",
            IntMode::Hex => "Hex",
            IntMode::Decimal => "Decimal",
            IntMode::RawBytesHex => "RawBytesHex",
        }
    }

    /// The positional base this mode maps to, if any.
    #[must_use]
    pub const fn base(self) -> Option<Base> {
        match self {
            IntMode::Binary => Some(Base::Binary),
            IntMode::Quaternary => Some(Base::Quaternary),
            IntMode::Octal => Some(Base::Octal),
            IntMode::Hex => Some(Base::Hex),
            IntMode::Decimal | IntMode::RawBytesHex => None,
        }
    }
}

/// A format mode for any numeric kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// A float/decimal pipeline.
    Float(FloatMode),
    /// An integer pipeline.
    Int(IntMode),
}

impl Mode {
    /// Returns the mode name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Float(m) => m.name(),
            Mode::Int(m) => m.name(),
        }
    }
}
