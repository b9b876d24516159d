//! The mode dispatcher: routes a (value, mode) pair into its pipeline.
//!
//! Every pairing of value kind and mode family is matched exhaustively; a
//! mode applied to the wrong kind fails immediately with
//! [`Error::KindMismatch`] and produces no partial output.

use crate::decimal::DecimalValue;
use crate::error::{Error, Result};
use crate::float::{FloatClass, FloatInfo};
use crate::mode::{FloatMode, IntMode, Mode};
use crate::options::ReprOptions;
use crate::radix;
use crate::value::{IntValue, NumericValue};

pub(crate) fn render(value: &NumericValue, mode: Mode, options: &ReprOptions) -> Result<String> {
    match (value, mode) {
        (NumericValue::Half(v), Mode::Float(m)) => {
            render_float(FloatInfo::of_half(*v), m, &|| v.to_string())
        }
        (NumericValue::Single(v), Mode::Float(m)) => {
            render_float(FloatInfo::of_single(*v), m, &|| v.to_string())
        }
        (NumericValue::Double(v), Mode::Float(m)) => {
            render_float(FloatInfo::of_double(*v), m, &|| v.to_string())
        }
        (NumericValue::Decimal(d), Mode::Float(m)) => Ok(render_decimal(d, m)),
        (NumericValue::Int(i), Mode::Int(m)) => Ok(render_int(i, m, options)),
        (v, m) => Err(Error::kind_mismatch(m.name(), v.kind_name())),
    }
}

// The digit-producing modes spell out non-finite values; the bit-oriented
// modes format the raw pattern instead.
fn render_float(
    info: FloatInfo,
    mode: FloatMode,
    general: &dyn Fn() -> String,
) -> Result<String> {
    match mode {
        FloatMode::RawBytesHex => Ok(radix::raw_bytes_hex(&info.to_le_bytes())),
        FloatMode::BitField => Ok(info.bit_field()),
        _ if !info.class.is_finite() => Ok(non_finite_literal(&info).to_string()),
        FloatMode::Exact => Ok(info.to_exact().to_exact_string()),
        FloatMode::Scientific(precision) => Ok(info.to_exact().to_scientific_string(precision)),
        FloatMode::Round(precision) => Ok(info.to_exact().to_fixed_string(precision)),
        FloatMode::General => Ok(general()),
    }
}

fn non_finite_literal(info: &FloatInfo) -> &'static str {
    match info.class {
        FloatClass::Infinite => {
            if info.negative {
                "-Infinity"
            } else {
                "Infinity"
            }
        }
        FloatClass::QuietNan => "NaN",
        FloatClass::SignalingNan => "sNaN",
        _ => unreachable!("finite classes are rendered by the digit pipelines"),
    }
}

fn render_decimal(value: &DecimalValue, mode: FloatMode) -> String {
    match mode {
        FloatMode::Exact => value.to_exact().to_exact_string(),
        FloatMode::Scientific(precision) => value.to_exact().to_scientific_string(precision),
        FloatMode::Round(precision) => value.to_exact().to_fixed_string(precision),
        FloatMode::General => value.to_plain_string(),
        FloatMode::RawBytesHex => value.raw_bytes_hex(),
        FloatMode::BitField => value.bit_field(),
    }
}

fn render_int(value: &IntValue, mode: IntMode, options: &ReprOptions) -> String {
    match mode.base() {
        Some(base) => {
            radix::format_radix(&value.to_le_bytes(), value.is_signed(), base, options.pad_width)
        }
        None => match mode {
            IntMode::Decimal => decimal_string(value, options.pad_width),
            IntMode::RawBytesHex => radix::raw_bytes_hex(&value.to_le_bytes()),
            _ => unreachable!("every positional mode maps to a base"),
        },
    }
}

// Native base-10 conversion; the pad width zero-extends the digit portion
// after the sign, matching the positional bases.
fn decimal_string(value: &IntValue, pad_width: Option<usize>) -> String {
    let rendered = value.to_string();
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let pad = pad_width.unwrap_or(0).saturating_sub(digits.len());
    let mut out = String::with_capacity(sign.len() + pad + digits.len());
    out.push_str(sign);
    for _ in 0..pad {
        out.push('0');
    }
    out.push_str(digits);
    out
}
