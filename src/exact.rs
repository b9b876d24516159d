//! Exact conversion of binary and fixed-point magnitudes to decimal
//! scientific notation.
//!
//! [`ExactSci`] is the raw sign/digits/exponent triple: the significant
//! digits of the value with no leading or trailing zeros, and the power of
//! ten putting the first digit in the ones place. The triple is exposed
//! directly (not just as a pre-formatted string) so callers can choose
//! between the two exponent grammars:
//!
//! - [`to_exact_string`](ExactSci::to_exact_string): `-1.25E-3` (no `+` on
//!   positive exponents, digits never rounded)
//! - [`to_scientific_string`](ExactSci::to_scientific_string): `-1.250E+5`
//!   (explicit exponent sign, rounded to a fixed fraction width)
//!
//! The conversion itself never touches floating-point arithmetic. For a
//! magnitude `significand * 2^e` with `e >= 0` the digits come from an
//! arbitrary-precision shift; for `e < 0` the identity `2^n * 5^n = 10^n`
//! turns the division by `2^n` into a decimal-point shift: multiply by `5^n`
//! instead, render in base 10, and move the point `n` places left. Both paths
//! are exact for every representable input.
//!
//! ## Examples
//!
//! ```rust
//! use numrepr::ExactSci;
//!
//! // 3 * 2^-2 == 0.75
//! let exact = ExactSci::from_binary(false, 3, -2);
//! assert_eq!(exact.digits, "75");
//! assert_eq!(exact.exponent, -1);
//! assert_eq!(exact.to_exact_string(), "7.5E-1");
//! ```

use num_bigint::BigUint;

/// An exact decimal magnitude in normalized scientific form.
///
/// Invariant: for nonzero values `digits` starts and ends with a nonzero
/// digit and `value == (-1)^negative * 0.digits... * 10^(exponent + 1)`;
/// zero is the unsigned triple `("0", 0)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactSci {
    /// Sign of the value; always `false` for zero.
    pub negative: bool,
    /// Significant digits, most significant first.
    pub digits: String,
    /// Power of ten of the first digit.
    pub exponent: i32,
}

impl ExactSci {
    /// The zero triple.
    #[must_use]
    pub fn zero() -> Self {
        ExactSci {
            negative: false,
            digits: "0".to_string(),
            exponent: 0,
        }
    }

    /// Converts a binary magnitude `significand * 2^exponent` exactly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numrepr::ExactSci;
    ///
    /// // The f32 closest to pi: 13176795 * 2^-22.
    /// let exact = ExactSci::from_binary(false, 13176795, -22);
    /// assert_eq!(exact.to_exact_string(), "3.1415927410125732421875E0");
    /// ```
    #[must_use]
    pub fn from_binary(negative: bool, significand: u128, exponent: i32) -> Self {
        if significand == 0 {
            return Self::zero();
        }
        let (numerator, shift) = if exponent >= 0 {
            (BigUint::from(significand) << exponent as u32, 0usize)
        } else {
            let shift = exponent.unsigned_abs() as usize;
            (
                BigUint::from(significand) * BigUint::from(5u8).pow(shift as u32),
                shift,
            )
        };
        Self::normalize(negative, numerator.to_str_radix(10), shift)
    }

    /// Converts a base-10 magnitude `magnitude * 10^-scale` exactly.
    ///
    /// The value is already decimal, so no base conversion happens: the digit
    /// string is the magnitude itself and the exponent is shifted by the
    /// scale.
    #[must_use]
    pub fn from_decimal_parts(negative: bool, magnitude: u128, scale: u32) -> Self {
        if magnitude == 0 {
            return Self::zero();
        }
        Self::normalize(negative, magnitude.to_string(), scale as usize)
    }

    // Normalizes `raw * 10^-shift` where `raw` has no leading zeros: the
    // first digit lands in the ones place and trailing zeros are dropped.
    fn normalize(negative: bool, raw: String, shift: usize) -> Self {
        let exponent = raw.len() as i32 - shift as i32 - 1;
        let trimmed = raw.trim_end_matches('0');
        ExactSci {
            negative,
            digits: trimmed.to_string(),
            exponent,
        }
    }

    /// Returns `true` for the zero triple.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// Renders the exact grammar: `["-"] digit "." fraction "E" ["-"] exp`.
    ///
    /// The fraction is never empty (a lone `"0"` stands in when there are no
    /// further digits) and the exponent carries no `+` and no leading zeros.
    /// Zero renders as `"0.0E0"` regardless of the stored sign bit.
    #[must_use]
    pub fn to_exact_string(&self) -> String {
        let mut out = String::with_capacity(self.digits.len() + 8);
        if self.negative && !self.is_zero() {
            out.push('-');
        }
        let (head, rest) = self.digits.split_at(1);
        out.push_str(head);
        out.push('.');
        out.push_str(if rest.is_empty() { "0" } else { rest });
        out.push('E');
        out.push_str(&self.exponent.to_string());
        out
    }

    /// Renders the rounded scientific grammar with an explicit exponent sign:
    /// `["-"] digit ["." fraction] "E" ("+"|"-") exp`.
    ///
    /// The fraction is rounded half-away-from-zero to exactly `precision`
    /// digits and zero-padded to that width; `precision == 0` omits the
    /// decimal point. A carry out of the leading digit bumps the exponent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numrepr::FloatInfo;
    ///
    /// let exact = FloatInfo::of_double(std::f64::consts::PI).to_exact();
    /// assert_eq!(exact.to_scientific_string(6), "3.141593E+0");
    /// assert_eq!(exact.to_scientific_string(0), "3E+0");
    /// ```
    #[must_use]
    pub fn to_scientific_string(&self, precision: usize) -> String {
        let (digits, bump) = round_digits(self.digits.as_bytes(), precision + 1);
        let exponent = if self.is_zero() {
            0
        } else {
            self.exponent + bump
        };
        let mut out = String::with_capacity(digits.len() + 8);
        if self.negative && !self.is_zero() {
            out.push('-');
        }
        out.push(digits[0] as char);
        if precision > 0 {
            out.push('.');
            for &d in &digits[1..] {
                out.push(d as char);
            }
        }
        out.push('E');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&exponent.unsigned_abs().to_string());
        out
    }

    /// Renders a positional decimal with exactly `precision` fraction digits,
    /// rounding half-away-from-zero; `precision == 0` omits the point.
    ///
    /// The sign is dropped when the rounded magnitude is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numrepr::FloatInfo;
    ///
    /// let exact = FloatInfo::of_double(0.1 + 0.2).to_exact();
    /// assert_eq!(exact.to_fixed_string(2), "0.30");
    /// ```
    #[must_use]
    pub fn to_fixed_string(&self, precision: usize) -> String {
        let digits = self.digits.as_bytes();
        let int_len = self.exponent + 1;

        // Positional digit sequence: integer part then fraction, the fraction
        // carried one digit past the requested precision for the rounding
        // decision.
        let mut whole: Vec<u8> = Vec::with_capacity(digits.len() + precision + 2);
        if int_len > 0 {
            let int_len = int_len as usize;
            if digits.len() >= int_len {
                whole.extend_from_slice(&digits[..int_len]);
            } else {
                whole.extend_from_slice(digits);
                whole.resize(int_len, b'0');
            }
        } else {
            whole.push(b'0');
        }
        let int_digits = whole.len();

        let mut frac: Vec<u8> = Vec::new();
        if int_len > 0 {
            let int_len = int_len as usize;
            if digits.len() > int_len {
                frac.extend_from_slice(&digits[int_len..]);
            }
        } else {
            frac.resize((-int_len) as usize, b'0');
            frac.extend_from_slice(digits);
        }

        let round_up = frac.len() > precision && frac[precision] >= b'5';
        frac.truncate(precision);
        frac.resize(precision, b'0');
        whole.extend_from_slice(&frac);
        if round_up {
            increment(&mut whole);
        }

        let split = whole.len() - precision;
        let magnitude_zero = whole.iter().all(|&d| d == b'0');
        let mut out = String::with_capacity(whole.len() + 2);
        if self.negative && !magnitude_zero {
            out.push('-');
        }
        // A carry can grow the integer part by one digit.
        debug_assert!(split >= int_digits);
        for &d in &whole[..split] {
            out.push(d as char);
        }
        if precision > 0 {
            out.push('.');
            for &d in &whole[split..] {
                out.push(d as char);
            }
        }
        out
    }
}

// Rounds a digit string half-away-from-zero to exactly `keep` digits,
// zero-padding on the right when fewer are available. Returns the digits and
// the exponent adjustment from a carry out of the leading digit.
fn round_digits(digits: &[u8], keep: usize) -> (Vec<u8>, i32) {
    if digits.len() <= keep {
        let mut out = digits.to_vec();
        out.resize(keep, b'0');
        return (out, 0);
    }
    let mut out = digits[..keep].to_vec();
    if digits[keep] >= b'5' {
        increment(&mut out);
        if out.len() > keep {
            out.truncate(keep);
            return (out, 1);
        }
    }
    (out, 0)
}

// Adds one to a decimal digit string, growing it by a leading digit when the
// carry runs off the front.
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_unsigned() {
        assert_eq!(ExactSci::from_binary(true, 0, -52).to_exact_string(), "0.0E0");
        assert_eq!(ExactSci::from_decimal_parts(true, 0, 5).to_exact_string(), "0.0E0");
    }

    #[test]
    fn powers_of_two() {
        assert_eq!(ExactSci::from_binary(false, 1, 0).to_exact_string(), "1.0E0");
        assert_eq!(ExactSci::from_binary(false, 1, 10).to_exact_string(), "1.024E3");
        assert_eq!(ExactSci::from_binary(false, 1, -1).to_exact_string(), "5.0E-1");
        assert_eq!(ExactSci::from_binary(false, 1, -10).to_exact_string(), "9.765625E-4");
    }

    #[test]
    fn negative_values_carry_sign() {
        assert_eq!(ExactSci::from_binary(true, 3, -1).to_exact_string(), "-1.5E0");
    }

    #[test]
    fn fraction_never_empty() {
        assert_eq!(ExactSci::from_binary(false, 4, 0).to_exact_string(), "4.0E0");
        assert_eq!(ExactSci::from_binary(false, 1000, 0).to_exact_string(), "1.0E3");
    }

    #[test]
    fn decimal_parts_shift_the_point() {
        assert_eq!(
            ExactSci::from_decimal_parts(false, 31415, 4).to_exact_string(),
            "3.1415E0"
        );
        assert_eq!(
            ExactSci::from_decimal_parts(true, 5, 3).to_exact_string(),
            "-5.0E-3"
        );
        assert_eq!(
            ExactSci::from_decimal_parts(false, 1200, 0).to_exact_string(),
            "1.2E3"
        );
    }

    #[test]
    fn scientific_rounds_half_away_from_zero() {
        let e = ExactSci::from_decimal_parts(false, 25, 1); // 2.5
        assert_eq!(e.to_scientific_string(0), "3E+0");
        let e = ExactSci::from_decimal_parts(false, 24, 1); // 2.4
        assert_eq!(e.to_scientific_string(0), "2E+0");
    }

    #[test]
    fn scientific_carry_bumps_exponent() {
        let e = ExactSci::from_decimal_parts(false, 999, 1); // 99.9
        assert_eq!(e.to_scientific_string(1), "1.0E+2");
    }

    #[test]
    fn scientific_pads_to_precision() {
        let e = ExactSci::from_binary(false, 3, -1); // 1.5
        assert_eq!(e.to_scientific_string(4), "1.5000E+0");
    }

    #[test]
    fn scientific_zero() {
        assert_eq!(ExactSci::zero().to_scientific_string(3), "0.000E+0");
        assert_eq!(ExactSci::zero().to_scientific_string(0), "0E+0");
    }

    #[test]
    fn fixed_basic() {
        let e = ExactSci::from_binary(false, 3, -1); // 1.5
        assert_eq!(e.to_fixed_string(0), "2");
        assert_eq!(e.to_fixed_string(1), "1.5");
        assert_eq!(e.to_fixed_string(3), "1.500");
    }

    #[test]
    fn fixed_small_magnitudes() {
        let e = ExactSci::from_decimal_parts(false, 4, 3); // 0.004
        assert_eq!(e.to_fixed_string(2), "0.00");
        assert_eq!(e.to_fixed_string(3), "0.004");
        let e = ExactSci::from_decimal_parts(false, 5, 3); // 0.005
        assert_eq!(e.to_fixed_string(2), "0.01");
    }

    #[test]
    fn fixed_carry_into_integer() {
        let e = ExactSci::from_decimal_parts(false, 9999, 2); // 99.99
        assert_eq!(e.to_fixed_string(1), "100.0");
    }

    #[test]
    fn fixed_drops_sign_on_rounded_zero() {
        let e = ExactSci::from_decimal_parts(true, 4, 3); // -0.004
        assert_eq!(e.to_fixed_string(2), "0.00");
        let e = ExactSci::from_decimal_parts(true, 6, 3); // -0.006
        assert_eq!(e.to_fixed_string(2), "-0.01");
    }

    #[test]
    fn fixed_large_integer_part() {
        let e = ExactSci::from_binary(false, 1, 20); // 1048576
        assert_eq!(e.to_fixed_string(0), "1048576");
        assert_eq!(e.to_fixed_string(2), "1048576.00");
    }

    #[test]
    fn increments_carry_chains() {
        let mut d = b"199".to_vec();
        increment(&mut d);
        assert_eq!(d, b"200");
        let mut d = b"999".to_vec();
        increment(&mut d);
        assert_eq!(d, b"1000");
    }
}
