//! Error types for canonical JSON encoding.

use thiserror::Error;

/// Errors that can occur while producing canonical JSON.
///
/// Every failure aborts the encode call immediately; there is no partial
/// output and no fallback coercion. Messages name the offending type so
/// failures deep inside a nested value stay diagnosable.
#[derive(Error, Debug)]
pub enum CanonError {
    /// The input contains a value outside the closed variant set, or a value
    /// that cannot be represented as JSON (e.g. a non-UTF-8 byte sequence,
    /// or a type the serde front door cannot convert).
    #[error("unsupported type: {type_name}")]
    UnsupportedType { type_name: String },

    /// A mapping key could not be normalized to a canonical string
    /// (only null, boolean, integer, and text keys are normalizable).
    #[error("map key is not serializable: {type_name}")]
    UnserializableKey { type_name: &'static str },

    /// A floating-point value was NaN or infinite; neither is a valid
    /// JSON number.
    #[error("invalid number: {value} has no JSON representation")]
    InvalidNumber { value: f64 },

    /// Writing to the caller-supplied sink failed (`encode_to` only).
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout canonjson.
pub type Result<T> = std::result::Result<T, CanonError>;
