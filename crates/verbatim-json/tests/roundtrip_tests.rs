use verbatim_json::{parse_str, to_text};

/// Parse, render, re-parse, and require the two documents to be structurally
/// equal: same variant tree, same object insertion order, same literal digit
/// buffers. The rendered text itself is pretty-printed, so byte equality with
/// the input is not expected.
fn assert_roundtrip(text: &str) {
    let first = parse_str(text).expect("initial parse failed");
    let rendered = to_text(&first).expect("render failed");
    let second = parse_str(&rendered).expect("re-parse failed");
    assert_eq!(
        first, second,
        "round trip changed the document:\n  input:    {text}\n  rendered: {rendered}"
    );
    // A second render is a fixed point.
    assert_eq!(to_text(&second).unwrap(), rendered);
}

#[test]
fn roundtrip_primitives() {
    for text in ["null", "true", "false", "0", "-7", "3.14", r#""s""#] {
        assert_roundtrip(text);
    }
}

#[test]
fn roundtrip_preserves_number_spelling() {
    for text in ["1.50", "007", "0.000", "1e05", "-2e-07", "-0"] {
        assert_roundtrip(text);
        let doc = parse_str(text).unwrap();
        let spelled = doc.as_number().unwrap().to_string();
        assert_eq!(spelled, text, "literal spelling changed");
    }
}

#[test]
fn roundtrip_strings_with_escapes() {
    for text in [
        r#""a\nb""#,
        r#""tab\there""#,
        r#""quote \" inside""#,
        r#""uni é code""#,
        r#""pass\qthrough""#,
    ] {
        assert_roundtrip(text);
    }
}

#[test]
fn roundtrip_containers() {
    assert_roundtrip("[]");
    assert_roundtrip("{}");
    assert_roundtrip(r#"[1, [2, [3]], {"deep": {"deeper": null}}]"#);
    assert_roundtrip(r#"{"a": 1, "b": [true, false], "c": {"d": "e"}}"#);
}

#[test]
fn roundtrip_keeps_object_order() {
    let doc = parse_str(r#"{"z": 1, "m": 2, "a": 3}"#).unwrap();
    let rendered = to_text(&doc).unwrap();
    let again = parse_str(&rendered).unwrap();
    let keys: Vec<&str> = again
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["z", "m", "a"]);
}

#[test]
fn rendered_text_is_valid_json_for_other_parsers() {
    let input = r#"{"name": "Alice", "scores": [95, 87.5], "meta": {"note": "a\nb"}}"#;
    let rendered = to_text(&parse_str(input).unwrap()).unwrap();
    let ours: serde_json::Value = serde_json::from_str(&rendered).expect("not valid JSON");
    let theirs: serde_json::Value = serde_json::from_str(input).unwrap();
    assert_eq!(ours, theirs);
}
