//! Printable values and number literals

use std::fmt;

/// Value produced by a statement for printing
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Stored variable value
    Int(i64),
    /// Result of an expression chain
    Float(f64),
    /// Result of a comparison
    Bool(bool),
    /// Literal operand echoed verbatim
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => fmt_float(*x, f),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// Floats always carry a fractional part, in exponent form too:
/// `10.0`, `1.0e16`, `1.5e-8`. Non-finite values are spelled
/// `Infinity`, `-Infinity` and `NaN`.
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_nan() {
        return f.write_str("NaN");
    }
    if x.is_infinite() {
        return f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let repr = format!("{x:?}");
    match repr.split_once('e') {
        Some((mantissa, exp)) if !mantissa.contains('.') => write!(f, "{mantissa}.0e{exp}"),
        _ => f.write_str(&repr),
    }
}

/// Parse a number literal.
///
/// Accepts an optional sign followed by `Infinity`, `NaN`, or a decimal with
/// optional fraction and exponent (`5`, `5.`, `.5`, `1e5`, `2.5E-3`). Rust-only
/// spellings such as `inf`, `infinity` or `nan` are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" || unsigned == "NaN" {
        return text.parse().ok();
    }

    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exp)) => (mantissa, Some(exp)),
        None => (unsigned, None),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if (int.is_empty() && frac.is_empty()) || !digits(int) || !digits(frac) {
        return None;
    }
    if let Some(exp) = exponent {
        let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        if exp.is_empty() || !digits(exp) {
            return None;
        }
    }

    text.parse().ok()
}
