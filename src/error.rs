//! Error types for numeric repr formatting.
//!
//! The only failures this crate can produce are programmer errors: asking a
//! formatter to render a value of the wrong numeric kind, or constructing a
//! fixed-point decimal with an out-of-range scale. There is no I/O anywhere in
//! the crate, so no transient-failure category exists. Errors are returned
//! synchronously and never swallowed; no partial output is ever produced.
//!
//! ## Examples
//!
//! ```rust
//! use numrepr::{repr, Mode, IntMode, NumericValue};
//!
//! // An integer mode applied to a float is a kind mismatch.
//! let result = repr(&NumericValue::from(1.5f64), Mode::Int(IntMode::Hex));
//! assert!(result.is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while formatting a value.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A mode was applied to a value of an incompatible numeric kind.
    #[error("kind mismatch: {mode} mode cannot format a {kind} value")]
    KindMismatch {
        mode: &'static str,
        kind: &'static str,
    },

    /// A fixed-point decimal was constructed with a scale outside 0..=28.
    #[error("invalid decimal scale {scale}, must be at most 28")]
    InvalidScale { scale: u8 },

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a kind-mismatch error naming the offending mode and value kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numrepr::Error;
    ///
    /// let err = Error::kind_mismatch("Binary", "double");
    /// assert!(err.to_string().contains("Binary"));
    /// ```
    pub fn kind_mismatch(mode: &'static str, kind: &'static str) -> Self {
        Error::KindMismatch { mode, kind }
    }

    /// Creates an invalid-scale error for a fixed-point decimal.
    pub fn invalid_scale(scale: u8) -> Self {
        Error::InvalidScale { scale }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_mismatch_names_both_sides() {
        let err = Error::kind_mismatch("Exact", "i32");
        let msg = err.to_string();
        assert!(msg.contains("Exact"));
        assert!(msg.contains("i32"));
    }

    #[test]
    fn invalid_scale_reports_value() {
        let err = Error::invalid_scale(29);
        assert!(err.to_string().contains("29"));
    }
}
