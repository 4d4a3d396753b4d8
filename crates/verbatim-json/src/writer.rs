//! Pretty-printing serializer.
//!
//! Renders a [`JsonValue`] as indented text: 4 spaces per nesting level, one
//! array element or object entry per line, comma-separated with no trailing
//! comma, object entries as `"key": value` in live insertion order.
//!
//! Two entry points differ only in how string payloads are emitted:
//!
//! - [`to_text`] writes the stored escaped form verbatim, so a parsed
//!   document round-trips losslessly.
//! - [`to_text_escaped`] canonicalizes every string and key through
//!   unescape→escape first. That is idempotent for parsed documents and
//!   repairs raw control characters in programmatically built strings.
//!
//! Serialization is total for well-formed documents; only the
//! [`JsonValue::Uninitialized`] sentinel fails, with
//! [`TypeError::SerializeUninitialized`].

use crate::error::TypeError;
use crate::escape;
use crate::value::JsonValue;

const INDENT: &str = "    ";

/// Render a document, emitting stored string bodies verbatim.
pub fn to_text(value: &JsonValue) -> Result<String, TypeError> {
    render(value, false)
}

/// Render a document, canonicalizing the escaping of every string and key.
pub fn to_text_escaped(value: &JsonValue) -> Result<String, TypeError> {
    render(value, true)
}

fn render(value: &JsonValue, escape: bool) -> Result<String, TypeError> {
    let mut out = String::new();
    write_value(value, "", escape, &mut out)?;
    Ok(out)
}

/// `prefix` is the indentation of the line this value's closing delimiter
/// sits on; nested entries indent one level past it.
fn write_value(
    value: &JsonValue,
    prefix: &str,
    escape: bool,
    out: &mut String,
) -> Result<(), TypeError> {
    match value {
        JsonValue::Uninitialized => Err(TypeError::SerializeUninitialized),
        JsonValue::Null => {
            out.push_str("null");
            Ok(())
        }
        JsonValue::Bool(b) => {
            out.push_str(if *b { "true" } else { "false" });
            Ok(())
        }
        JsonValue::Number(n) => {
            out.push_str(&n.to_string());
            Ok(())
        }
        JsonValue::String(body) => {
            write_string(body, escape, out);
            Ok(())
        }
        JsonValue::Object(map) => {
            out.push_str("{\n");
            let inner = format!("{prefix}{INDENT}");
            let count = map.len();
            for (i, (key, entry)) in map.iter().enumerate() {
                out.push_str(&inner);
                write_string(key, escape, out);
                out.push_str(": ");
                write_value(entry, &inner, escape, out)?;
                if i + 1 != count {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(prefix);
            out.push('}');
            Ok(())
        }
        JsonValue::Array(items) => {
            out.push_str("[\n");
            let inner = format!("{prefix}{INDENT}");
            let count = items.len();
            for (i, item) in items.iter().enumerate() {
                out.push_str(&inner);
                write_value(item, &inner, escape, out)?;
                if i + 1 != count {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(prefix);
            out.push(']');
            Ok(())
        }
    }
}

fn write_string(body: &str, escape: bool, out: &mut String) {
    out.push('"');
    if escape {
        out.push_str(&escape::escape_str(&escape::unescape_str(body)));
    } else {
        out.push_str(body);
    }
    out.push('"');
}
