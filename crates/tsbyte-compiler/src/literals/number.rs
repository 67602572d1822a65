//! Numeric and big-integer literal decoding.
//!
//! Numeric literals take ECMAScript `Number` semantics: the text is read as a
//! double, then classified by [`NumericConstant::from_f64`]. Big-integer
//! literals are read exactly and stored as a 64-bit two's complement pattern.

use num_bigint::BigInt;
use tsbyte_core::OverflowPolicy;

/// The target encoding chosen for a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericConstant {
    I32(i32),
    /// A 64-bit integer as its high and low 32 bits.
    I64 { high: u32, low: u32 },
    F64(f64),
}

impl NumericConstant {
    /// Pick the encoding for `value`.
    ///
    /// Integral values in the signed 32-bit range become `I32`. Negative zero
    /// is not integral: the sign would be lost. Integral values outside the
    /// 32-bit range widen to `I64` when they fit in 64 bits, and otherwise
    /// stay `F64`. Under [`OverflowPolicy::Reject`] any integral value outside
    /// the 32-bit range returns `None`.
    pub fn from_f64(value: f64, overflow: OverflowPolicy) -> Option<Self> {
        if !is_integral(value) {
            return Some(NumericConstant::F64(value));
        }
        if value >= i32::MIN as f64 && value <= i32::MAX as f64 {
            return Some(NumericConstant::I32(value as i32));
        }
        match overflow {
            OverflowPolicy::Reject => None,
            OverflowPolicy::WidenToI64 if value >= i64::MIN as f64 && value < TWO_POW_63 => {
                let (high, low) = split_i64(value as i64);
                Some(NumericConstant::I64 { high, low })
            }
            OverflowPolicy::WidenToI64 => Some(NumericConstant::F64(value)),
        }
    }
}

/// `i64::MAX + 1`, the first integral double that does not fit in `i64`.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

fn is_integral(value: f64) -> bool {
    value.is_finite() && value.floor() == value && !(value == 0.0 && value.is_sign_negative())
}

/// Split a 64-bit integer into its high and low 32 bits.
pub fn split_i64(value: i64) -> (u32, u32) {
    let bits = value as u64;
    ((bits >> 32) as u32, bits as u32)
}

/// Reassemble a value split by [`split_i64`].
pub fn join_i64(high: u32, low: u32) -> i64 {
    (((high as u64) << 32) | low as u64) as i64
}

// ============================================================================
// Numeric literals
// ============================================================================

/// Parse the text of a numeric literal.
///
/// Accepts decimal literals with fraction and exponent, `0x`/`0o`/`0b`
/// prefixes, legacy octal (`017`), numeric separators and a leading `-`
/// folded in from a unary minus. Returns `None` for anything else.
pub fn parse_number(text: &str) -> Option<f64> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let body = strip_separators(body)?;

    let value = if let Some((radix, digits)) = radix_prefix(&body) {
        parse_radix(digits, radix)?
    } else if is_legacy_octal(&body) {
        parse_radix(&body[1..], 8)?
    } else {
        parse_decimal(&body)?
    };

    Some(if negative { -value } else { value })
}

fn radix_prefix(body: &str) -> Option<(u32, &str)> {
    let prefix = body.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &body[2..]))
}

fn is_legacy_octal(body: &str) -> bool {
    body.len() > 1 && body.starts_with('0') && body.bytes().all(|b| (b'0'..=b'7').contains(&b))
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    if let Ok(value) = u64::from_str_radix(digits, radix) {
        return Some(value as f64);
    }
    // Too wide for u64: accumulate in floating point like the host does.
    let mut value = 0.0f64;
    for ch in digits.chars() {
        value = value * radix as f64 + ch.to_digit(radix)? as f64;
    }
    Some(value)
}

fn parse_decimal(body: &str) -> Option<f64> {
    // `str::parse` also accepts "inf", "NaN" and a leading '+'.
    let valid = body
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    let first = body.bytes().next();
    if !valid || !first.is_some_and(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    body.parse::<f64>().ok()
}

/// Remove numeric separators. A separator must sit between two digits of
/// the literal's radix; legacy octal and other literals with a leading `0`
/// take none.
fn strip_separators(body: &str) -> Option<String> {
    if !body.contains('_') {
        return Some(body.to_string());
    }
    let bytes = body.as_bytes();
    let hex = matches!(body.get(..2), Some("0x" | "0X"));
    let second = bytes.get(1).copied();
    if !hex && bytes[0] == b'0' && second.is_some_and(|b| b == b'_' || b.is_ascii_digit()) {
        return None;
    }
    let digit = |c: Option<u8>| match c {
        Some(c) if hex => c.is_ascii_hexdigit(),
        Some(c) => c.is_ascii_digit(),
        None => false,
    };

    let mut out = String::with_capacity(body.len());
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            if !digit(before) || !digit(after) {
                return None;
            }
            continue;
        }
        out.push(b as char);
    }
    Some(out)
}

// ============================================================================
// Big-integer literals
// ============================================================================

/// Why a big-integer literal could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntError {
    Invalid,
    /// Outside `[i64::MIN, u64::MAX]`.
    OutOfRange,
}

/// Parse the text of a big-integer literal (`123n`, `0xFFn`, ...) into its
/// 64-bit two's complement pattern.
///
/// Negative values must fit in `i64`; non-negative values may use the full
/// `u64` range, so `0xFFFF_FFFF_FFFF_FFFFn` keeps all of its bits.
pub fn parse_bigint(text: &str) -> Result<u64, BigIntError> {
    let value = parse_bigint_value(text).ok_or(BigIntError::Invalid)?;
    if let Ok(bits) = u64::try_from(&value) {
        return Ok(bits);
    }
    i64::try_from(&value)
        .map(|signed| signed as u64)
        .map_err(|_| BigIntError::OutOfRange)
}

fn parse_bigint_value(text: &str) -> Option<BigInt> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let body = body.strip_suffix('n')?;
    let (radix, digits) = radix_prefix(body).unwrap_or((10, body));

    let mut normalised = String::with_capacity(digits.len());
    let mut prev_sep = false;
    for ch in digits.chars() {
        if ch == '_' {
            if prev_sep || normalised.is_empty() {
                return None;
            }
            prev_sep = true;
            continue;
        }
        ch.to_digit(radix)?;
        normalised.push(ch);
        prev_sep = false;
    }
    if prev_sep || normalised.is_empty() {
        return None;
    }
    if radix == 10 && normalised.len() > 1 && normalised.starts_with('0') {
        return None;
    }

    let value = BigInt::parse_bytes(normalised.as_bytes(), radix)?;
    Some(if negative { -value } else { value })
}
