//! The closed set of values the canonical encoder accepts.
//!
//! `Value` is a tagged union over exactly the variants the canonical form
//! can express. Anything else must be rejected before it reaches the
//! encoder; the enum makes the accepted input surface statically visible
//! instead of relying on runtime type introspection.

/// A value encodable as canonical JSON.
///
/// Mapping entries keep their insertion order and carry `Value` keys so
/// heterogeneous keys (null, booleans, integers, text) survive until key
/// normalization. Uses `Vec<(Value, Value)>` rather than a map type because
/// the canonical order is computed at encode time from key content, not
/// from the container.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    /// One integer variant wide enough for both `i64` and `u64` ranges.
    Int(i128),
    Float(f64),
    String(String),
    /// Byte sequences are encoded as text and must be well-formed UTF-8.
    Bytes(Vec<u8>),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order.
    Object(Vec<(Value, Value)>),
}

impl Value {
    /// Variant name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i as i128)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Int(u as i128)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// Total conversion from a `serde_json` tree. Numbers that fit an integer
/// stay integers; everything else becomes a float. Object keys arrive as
/// text (serde_json has no other key type).
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i as i128)
                } else if let Some(u) = n.as_u64() {
                    Value::Int(u as i128)
                } else {
                    // A finite f64 by construction; NaN cannot be stored in
                    // a serde_json::Number.
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (Value::String(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}
