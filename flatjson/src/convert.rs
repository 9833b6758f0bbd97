//! String to number and number to string conversion.
//!
//! The parsing half is bespoke: the parser has already validated the shape
//! of every number token, so these routines never fail and accept exactly
//! the grammar the parser does (optional sign, digits, single decimal
//! point, no exponent). The formatting half delegates to `itoa` and `ryu`,
//! which produce the shortest representation without allocating.

use crate::config::{JsonFloat, JsonInt};

/// Parse a base-10 signed integer from its exact textual representation.
///
/// Any character outside the optional leading `-` and decimal digits
/// yields 0, as does empty input. Accumulation wraps, which makes
/// `JsonInt::MIN` round-trip through [`format_int`].
#[must_use]
pub fn parse_int(text: &[u8]) -> JsonInt {
    let (negative, digits) = match text.split_first() {
        Some((&b'-', rest)) => (true, rest),
        _ => (false, text),
    };

    let mut val: JsonInt = 0;
    for &c in digits {
        if c.is_ascii_digit() {
            val = val.wrapping_mul(10).wrapping_add(JsonInt::from(c - b'0'));
        } else {
            val = 0;
            break;
        }
    }

    if negative { val.wrapping_neg() } else { val }
}

/// Parse a decimal number: sign, integer part, optional fractional part.
///
/// Scientific notation is not part of the accepted grammar and yields an
/// unspecified value, like any other malformed input.
#[must_use]
pub fn parse_float(text: &[u8]) -> JsonFloat {
    if text.is_empty() {
        return 0.0;
    }

    let (sign, digits): (JsonFloat, &[u8]) = match text.split_first() {
        Some((&b'-', rest)) => (-1.0, rest),
        _ => (1.0, text),
    };

    let point = digits
        .iter()
        .position(|&c| c == b'.')
        .unwrap_or(digits.len());
    let int_part = parse_int(&digits[..point]) as JsonFloat;

    let mut frac_part: JsonFloat = 0.0;
    if point + 1 < digits.len() {
        let frac = &digits[point + 1..];
        let mut div: JsonFloat = 1.0;
        for _ in frac {
            div *= 10.0;
        }
        frac_part = parse_int(frac) as JsonFloat / div;
    }

    (int_part + frac_part) * sign
}

/// Format a signed integer into `buffer`.
///
/// Returns the number of bytes written, or 0 when the buffer is too small
/// (nothing useful is written in that case).
#[must_use]
pub fn format_int(val: JsonInt, buffer: &mut [u8]) -> usize {
    let mut digits = itoa::Buffer::new();
    copy_formatted(digits.format(val).as_bytes(), buffer)
}

/// Format a floating point value into `buffer` in its shortest
/// round-trippable representation.
///
/// Returns the number of bytes written, or 0 when the buffer is too small.
#[must_use]
pub fn format_float(val: JsonFloat, buffer: &mut [u8]) -> usize {
    let mut digits = ryu::Buffer::new();
    copy_formatted(digits.format(val).as_bytes(), buffer)
}

fn copy_formatted(formatted: &[u8], buffer: &mut [u8]) -> usize {
    match buffer.get_mut(..formatted.len()) {
        Some(dst) => {
            dst.copy_from_slice(formatted);
            formatted.len()
        },
        None => 0,
    }
}
