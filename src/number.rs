//! Canonical number formatting.
//!
//! Every finite number has exactly one canonical token. Integers are plain
//! decimal digits. Floats use the shortest digit string that reparses to the
//! identical bits, laid out in the ECMAScript style: fixed notation while the
//! decimal exponent is in `(-7, 21)`, otherwise lowercase `e` with an
//! explicit `+` on non-negative exponents (`1e+21`, `5e-324`).

use crate::error::{CanonError, Result};

/// Format an integer as its canonical decimal token.
pub(crate) fn format_int(value: i128) -> String {
    value.to_string()
}

/// Format a finite double as its canonical token.
///
/// Integral values inside the fixed-notation range render with no decimal
/// point, so the double `1.0` and the integer `1` are indistinguishable in
/// output. `-0.0` keeps its sign (`-0`) so every representable double
/// round-trips bit-exactly. NaN and infinities are not JSON numbers and
/// fail with [`CanonError::InvalidNumber`].
pub(crate) fn format_float(value: f64) -> Result<String> {
    if !value.is_finite() {
        return Err(CanonError::InvalidNumber { value });
    }

    // `{:e}` yields the shortest round-trip digits as `d[.ddd]e<exp>`,
    // where <exp> is the decimal exponent of the leading digit.
    let sci = format!("{:e}", value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    // Exponential notation outside the fixed range. The mantissa is already
    // in canonical shape (leading sign, single integer digit, no trailing
    // zeros), so only the exponent needs reformatting.
    if exp >= 21 || exp <= -7 {
        let sign = if exp < 0 { "" } else { "+" };
        return Ok(format!("{}e{}{}", mantissa, sign, exp));
    }

    let negative = mantissa.starts_with('-');
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len() as i32;

    let body = if exp >= len - 1 {
        // Integral: pad with zeros up to the exponent, no decimal point.
        let mut s = digits;
        for _ in 0..(exp - (len - 1)) {
            s.push('0');
        }
        s
    } else if exp >= 0 {
        // Decimal point lands inside the digit string.
        let split = (exp + 1) as usize;
        format!("{}.{}", &digits[..split], &digits[split..])
    } else {
        // Leading zeros after `0.`.
        format!("0.{}{}", "0".repeat((-exp - 1) as usize), digits)
    };

    Ok(if negative {
        format!("-{}", body)
    } else {
        body
    })
}
