//! # canonjson
//!
//! A canonical JSON encoder: semantically identical inputs always produce
//! **byte-identical** output, independent of mapping insertion order,
//! platform, or locale.
//!
//! Canonical encodings matter wherever the output bytes are hashed, signed,
//! or compared for equality (content addressing, signature verification).
//! The guarantees here are about exactness, not just validity: one key
//! order (code-point sort on normalized keys), one number token per value
//! (shortest round-trip digits, ECMAScript-style exponents), one escape per
//! character (ASCII-only output), and no whitespace.
//!
//! ## Quick start
//!
//! ```rust
//! use canonjson::{encode, Value};
//!
//! let value = Value::Object(vec![
//!     (Value::from("b"), Value::from(2i64)),
//!     (Value::from("a"), Value::from(1i64)),
//! ]);
//! assert_eq!(encode(&value).unwrap(), r#"{"a":1,"b":2}"#);
//!
//! // serde front door for existing types
//! let text = canonjson::to_string(&serde_json::json!({"b": 2, "a": 1})).unwrap();
//! assert_eq!(text, r#"{"a":1,"b":2}"#);
//! ```
//!
//! Encoding is a pure, synchronous, single-pass traversal: no I/O of its
//! own, no shared state, no depth limit beyond the call stack. Decoding is
//! out of scope.
//!
//! ## Modules
//!
//! - [`encoder`] — recursive dispatch, key normalization and sorting
//! - [`error`] — typed failures (`UnsupportedType`, `UnserializableKey`,
//!   `InvalidNumber`, `Io`)
//! - [`types`] — the closed [`Value`] variant set

pub mod encoder;
pub mod error;
pub mod types;

mod escape;
mod number;
mod ser;

pub use encoder::{encode, encode_to, to_string};
pub use error::{CanonError, Result};
pub use types::Value;
