//! Configuration options for repr output.
//!
//! The formatting pipelines are governed almost entirely by the selected
//! [`Mode`](crate::Mode); the single tunable that cuts across modes is an
//! optional fixed output width used to zero-pad the digit portion of integer
//! output.
//!
//! ## Examples
//!
//! ```rust
//! use numrepr::{repr_with_options, IntMode, Mode, NumericValue, ReprOptions};
//!
//! let options = ReprOptions::new().with_pad_width(8);
//! let out = repr_with_options(
//!     &NumericValue::from(-42i32),
//!     Mode::Int(IntMode::Binary),
//!     options,
//! ).unwrap();
//! assert_eq!(out, "-0b00101010");
//! ```

/// Configuration options for repr formatting.
///
/// # Examples
///
/// ```rust
/// use numrepr::ReprOptions;
///
/// // Defaults: no zero-padding.
/// let options = ReprOptions::new();
/// assert_eq!(options.pad_width, None);
///
/// // Pad integer digits to a fixed width.
/// let options = ReprOptions::new().with_pad_width(16);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReprOptions {
    /// Minimum digit count for integer output; shorter digit strings are
    /// left-padded with zeros. Applies to the positional bases and decimal,
    /// never to the already fixed-width raw-bytes mode.
    pub pad_width: Option<usize>,
}

impl ReprOptions {
    /// Creates default options (no zero-padding).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fixed digit width for integer output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numrepr::ReprOptions;
    ///
    /// let options = ReprOptions::new().with_pad_width(4);
    /// assert_eq!(options.pad_width, Some(4));
    /// ```
    #[must_use]
    pub fn with_pad_width(mut self, width: usize) -> Self {
        self.pad_width = Some(width);
        self
    }
}
