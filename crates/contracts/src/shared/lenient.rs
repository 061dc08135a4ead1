//! Deserializers for the loosely typed upstream dumps.
//!
//! Fields may be strings, numbers, `null`, or the literal strings `"NaN"` /
//! `"null"`. All of them collapse into `Option<String>`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_string))
}

pub fn value_to_string(value: Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s,
        Value::Number(n) => {
            // 12.0 -> "12": ids exported from pandas come back as floats
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
                _ => n.to_string(),
            }
        }
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => return None,
    };
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "NaN" || trimmed == "null" || trimmed == "undefined" {
        None
    } else {
        Some(trimmed.to_string())
    }
}
