/// Property-based tests for the canonical encoder.
///
/// Uses the `proptest` crate to generate random values and verify the
/// guarantees the canonical form exists to provide:
///
/// - Determinism: repeated encodes are byte-identical
/// - Order-independence: mapping insertion order never affects output
/// - Order-preservation: sequence output order matches input order
/// - Number round-trip: every finite double reparses bit-exactly
/// - ASCII-only: string tokens never contain a byte outside printable ASCII
use proptest::prelude::*;

use canonjson::{encode, Value};

// ============================================================================
// Strategies
// ============================================================================

/// Object keys: short ASCII identifiers, enough to exercise sorting.
fn arb_key() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,11}"
}

/// Finite doubles only; NaN and infinities are rejected by design and
/// covered by the contract tests.
fn arb_finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("must be finite", |f| f.is_finite())
}

/// A scalar (non-container) value.
fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| Value::Int(i as i128)),
        arb_finite_f64().prop_map(Value::Float),
        any::<String>().prop_map(Value::String),
    ]
}

/// A full value tree: leaves, arrays, and objects nested up to 3 levels.
fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(3, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map(arb_key(), inner, 0..6).prop_map(|map| {
                Value::Object(
                    map.into_iter()
                        .map(|(k, v)| (Value::String(k), v))
                        .collect(),
                )
            }),
        ]
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Repeated encodes of the same value are byte-identical.
    #[test]
    fn encode_is_deterministic(value in arb_value()) {
        let first = encode(&value).unwrap();
        let second = encode(&value).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Reversing the insertion order of object pairs never changes the
    /// output bytes. Keys come from a btree_map strategy, so they are
    /// unique and the reversal is a pure permutation.
    #[test]
    fn object_insertion_order_is_irrelevant(
        pairs in prop::collection::btree_map(arb_key(), arb_leaf(), 0..10)
    ) {
        let forward: Vec<(Value, Value)> = pairs
            .iter()
            .map(|(k, v)| (Value::String(k.clone()), v.clone()))
            .collect();
        let mut backward = forward.clone();
        backward.reverse();

        let a = encode(&Value::Object(forward)).unwrap();
        let b = encode(&Value::Object(backward)).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Array output is the comma-join of element encodings in input order.
    #[test]
    fn array_preserves_element_order(items in prop::collection::vec(arb_leaf(), 0..10)) {
        let encoded = encode(&Value::Array(items.clone())).unwrap();
        let elements: Vec<String> = items
            .iter()
            .map(|item| encode(item).unwrap())
            .collect();
        prop_assert_eq!(encoded, format!("[{}]", elements.join(",")));
    }

    /// Every finite double's token reparses to the identical bits,
    /// including -0.0 and subnormals.
    #[test]
    fn float_token_round_trips_bit_exactly(f in arb_finite_f64()) {
        let token = encode(&Value::Float(f)).unwrap();
        let parsed: f64 = token.parse().unwrap();
        prop_assert_eq!(parsed.to_bits(), f.to_bits(), "token was {}", token);
    }

    /// String tokens contain only printable ASCII bytes, whatever the input.
    #[test]
    fn string_output_is_printable_ascii(s in any::<String>()) {
        let encoded = encode(&Value::String(s)).unwrap();
        prop_assert!(
            encoded.bytes().all(|b| (0x20..0x7f).contains(&b)),
            "non-ASCII byte in {:?}",
            encoded
        );
    }

    /// Encoding any value from the valid strategy set succeeds; failures are
    /// reserved for values outside the closed variant rules.
    #[test]
    fn valid_values_always_encode(value in arb_value()) {
        prop_assert!(encode(&value).is_ok());
    }
}
