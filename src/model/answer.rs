use serde::Serialize;
use serde_json::Value;

/// One binary judgement: sign absent (0) or present (1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Answer {
    Negative = 0,
    Positive = 1,
}

impl Answer {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_positive(self) -> bool {
        self == Answer::Positive
    }
}

impl From<Answer> for u8 {
    fn from(value: Answer) -> Self {
        value.as_u8()
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value {
            Answer::Positive
        } else {
            Answer::Negative
        }
    }
}

/// Coerces a raw value to 0/1. `None` is the invalid sentinel; nothing is
/// ever defaulted to `Negative`.
pub fn coerce_binary(value: &Value) -> Option<Answer> {
    if let Value::Bool(b) = value {
        return Some(Answer::from(*b));
    }
    let x = coerce_number(value)?;
    if x == 0.0 {
        Some(Answer::Negative)
    } else if x == 1.0 {
        Some(Answer::Positive)
    } else {
        None
    }
}

/// Integral coercion used for question numbers. Booleans are not numbers here.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    if value.is_boolean() {
        return None;
    }
    let x = coerce_number(value)?;
    if !x.is_finite() || x.fract() != 0.0 {
        return None;
    }
    if x < i64::MIN as f64 || x > i64::MAX as f64 {
        return None;
    }
    Some(x as i64)
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            parse_radix_literal(trimmed).or_else(|| trimmed.parse::<f64>().ok())
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Unsigned `0x`/`0b`/`0o` literals, as accepted by JavaScript's `Number`.
fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'b' | b'B' => 2,
        b'o' | b'O' => 8,
        _ => return None,
    };
    let digits = &s[2..];
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok().map(|v| v as f64)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/answer.rs"]
mod tests;
