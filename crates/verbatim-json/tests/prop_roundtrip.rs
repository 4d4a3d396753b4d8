//! Property-based round-trip tests.
//!
//! Random JSON documents are generated as `serde_json::Value` trees,
//! serialized to text with `serde_json`, and fed through this crate. Two
//! properties are checked on every case:
//!
//! 1. parse → render → re-parse is structurally stable (same variant tree,
//!    same insertion order, same literal buffers), and the second render is a
//!    byte-level fixed point;
//! 2. the rendered text is valid JSON carrying the same value according to an
//!    independent parser (`serde_json`).
//!
//! Strings are restricted to characters `serde_json` escapes the same way we
//! store them; numbers to values whose shortest display form round-trips.

use proptest::prelude::*;
use serde_json::{Map, Value};
use verbatim_json::{parse_str, to_text};

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,12}").unwrap()
}

fn arb_json_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,24}",
        Just("".to_string()),
        Just("with \"quotes\"".to_string()),
        Just("tab\tand\nnewline".to_string()),
        Just("back\\slash".to_string()),
        Just("caf\u{e9} \u{4f60}\u{597d}".to_string()),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i64..1_000_000i64).prop_map(|n| Value::Number(n.into())),
        // Finite floats only; shortest-display round-trip makes the
        // serde_json comparison exact.
        (-1.0e9f64..1.0e9f64).prop_filter_map("finite", serde_json::Number::from_f64)
            .prop_map(Value::Number),
        arb_json_string().prop_map(Value::String),
    ]
}

fn arb_json() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..6).prop_map(|pairs| {
                let mut map = Map::new();
                for (key, value) in pairs {
                    map.insert(key, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn roundtrip_is_structurally_stable(value in arb_json()) {
        let text = serde_json::to_string(&value).unwrap();
        let first = parse_str(&text).expect("parse of serde-produced JSON failed");
        let rendered = to_text(&first).expect("render failed");
        let second = parse_str(&rendered).expect("re-parse of our own output failed");
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(to_text(&second).unwrap(), rendered);
    }

    #[test]
    fn rendered_text_agrees_with_an_independent_parser(value in arb_json()) {
        let text = serde_json::to_string(&value).unwrap();
        let doc = parse_str(&text).expect("parse failed");
        let rendered = to_text(&doc).expect("render failed");
        let reparsed: Value = serde_json::from_str(&rendered)
            .expect("our output was not valid JSON");
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn object_key_order_tracks_the_input(keys in prop::collection::vec(arb_key(), 0..8)) {
        // Build an object literal by hand so duplicate keys collapse the way
        // first-insertion order dictates.
        let mut expected: Vec<String> = Vec::new();
        for key in &keys {
            if !expected.contains(key) {
                expected.push(key.clone());
            }
        }
        let body: Vec<String> = keys
            .iter()
            .enumerate()
            .map(|(i, k)| format!("\"{k}\": {i}"))
            .collect();
        let text = format!("{{{}}}", body.join(", "));

        let doc = parse_str(&text).expect("parse failed");
        let got: Vec<String> = doc
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn garbage_never_panics(text in "\\PC{0,40}") {
        // Any outcome is fine as long as it is an Ok or an Err, not a panic.
        let _ = parse_str(&text);
    }
}
