//! Canonical JSON encoder — produces one deterministic byte sequence per value.
//!
//! The encoder walks a [`Value`] tree once, top to bottom, and concatenates
//! canonical tokens with no inserted whitespace:
//!
//! - **Literals**: `null`, `true`, `false`
//! - **Numbers**: shortest round-trip tokens (see [`crate::number`])
//! - **Strings**: quoted, fully-escaped, ASCII-only (see [`crate::escape`])
//! - **Arrays**: `[` + comma-joined elements in original order + `]`
//! - **Objects**: `{` + comma-joined `"key":value` pairs, keys normalized to
//!   strings and sorted by code point + `}`
//!
//! Because mapping emission order is a pure function of key content, two
//! mappings holding the same pairs in different insertion orders encode to
//! byte-identical output. That is the property callers hashing or signing
//! the result rely on.
//!
//! # Example
//! ```
//! use canonjson::{encode, Value};
//!
//! let value = Value::Object(vec![
//!     (Value::from("b"), Value::from(2i64)),
//!     (Value::from("a"), Value::from(1i64)),
//! ]);
//! assert_eq!(encode(&value).unwrap(), r#"{"a":1,"b":2}"#);
//! ```

use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{CanonError, Result};
use crate::escape::escape_str;
use crate::number::{format_float, format_int};
use crate::ser::ValueSerializer;
use crate::types::Value;

/// Encode a value as canonical JSON text.
///
/// Semantically identical inputs always yield byte-identical output,
/// independent of mapping insertion order, platform, or locale. Fails
/// without producing partial output if any nested value is not encodable
/// (NaN/infinite floats, non-normalizable keys, non-UTF-8 bytes).
pub fn encode(value: &Value) -> Result<String> {
    let mut out = String::new();
    encode_value(value, &mut out)?;
    Ok(out)
}

/// Encode a value and write the canonical text to `writer`.
///
/// The text is identical to what [`encode`] returns; the sink is the
/// caller's to obtain, flush, and close. Sink failures surface as
/// [`CanonError::Io`].
pub fn encode_to<W: Write>(value: &Value, writer: &mut W) -> Result<()> {
    let text = encode(value)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Encode any `Serialize` value as canonical JSON text.
///
/// Convenience front door for callers who do not build [`Value`] trees by
/// hand: the input is serialized directly into the closed variant set, so
/// failures stay typed exactly as with [`encode`]. Non-finite floats fail
/// with [`CanonError::InvalidNumber`], map keys that cannot be normalized
/// fail with [`CanonError::UnserializableKey`], and a `Serialize` impl
/// that errors or produces an unrepresentable value fails with
/// [`CanonError::UnsupportedType`].
pub fn to_string<T: serde::Serialize>(value: &T) -> Result<String> {
    let value = value.serialize(ValueSerializer)?;
    encode(&value)
}

/// Recursive dispatch over the closed variant set. The exhaustive match is
/// the type classifier: a value that reaches this point is by construction
/// one of the eight encodable variants.
fn encode_value(value: &Value, out: &mut String) -> Result<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(i) => out.push_str(&format_int(*i)),
        Value::Float(f) => out.push_str(&format_float(*f)?),
        Value::String(s) => escape_str(s, out),
        Value::Bytes(bytes) => {
            let text =
                std::str::from_utf8(bytes).map_err(|_| CanonError::UnsupportedType {
                    type_name: "non-UTF-8 byte sequence".to_string(),
                })?;
            escape_str(text, out);
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                encode_value(item, out)?;
            }
            out.push(']');
        }
        Value::Object(entries) => {
            out.push('{');
            for (i, (key, val)) in sorted_entries(entries)?.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                escape_str(key, out);
                out.push(':');
                encode_value(val, out)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

/// Normalize every key to its canonical string and order the pairs.
///
/// `String` compares byte-wise, which for UTF-8 equals code-point order, so
/// the `BTreeMap` iteration order is exactly the canonical key order. When
/// two distinct keys normalize to the same string (e.g. the integer `1` and
/// the text `"1"`), the later pair in insertion order wins.
fn sorted_entries(entries: &[(Value, Value)]) -> Result<BTreeMap<String, &Value>> {
    let mut sorted = BTreeMap::new();
    for (key, value) in entries {
        sorted.insert(normalize_key(key)?, value);
    }
    Ok(sorted)
}

/// Collapse a mapping key to its canonical string form:
/// null → `null`, booleans → `true`/`false`, integers → decimal digits,
/// text → itself. Anything else cannot be a canonical key.
fn normalize_key(key: &Value) -> Result<String> {
    match key {
        Value::Null => Ok("null".to_string()),
        Value::Bool(true) => Ok("true".to_string()),
        Value::Bool(false) => Ok("false".to_string()),
        Value::Int(i) => Ok(format_int(*i)),
        Value::String(s) => Ok(s.clone()),
        Value::Bytes(bytes) => match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_string()),
            Err(_) => Err(CanonError::UnserializableKey {
                type_name: "non-UTF-8 bytes",
            }),
        },
        other => Err(CanonError::UnserializableKey {
            type_name: other.type_name(),
        }),
    }
}
