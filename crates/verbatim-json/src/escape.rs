//! Escape and unescape helpers for string payloads.
//!
//! Parsed string values are stored in canonical *escaped* form — the text
//! between the quotes with every escape normalized to backslash notation, not
//! the unescaped display text. These helpers convert between the two forms:
//!
//! - [`unescape_str`] — escaped form → display text
//! - [`escape_str`] — display text → escaped form
//!
//! `unescape_str(escape_str(s)) == s` holds for any `s`; composing the other
//! way canonicalizes an escaped string (the serializer's escape mode relies on
//! that to be idempotent for parsed documents).

use crate::chars;

/// Convert display text into canonical escaped form.
///
/// The short escapes `\" \\ \b \f \n \r \t` are used where they exist; other
/// control characters become `\u00XX`. Everything else, including non-ASCII,
/// passes through unchanged.
pub fn escape_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// Convert canonical escaped form back into display text.
///
/// Recognized short escapes are decoded; `\uXXXX` decodes the code unit,
/// combining UTF-16 surrogate pairs when both halves are present. A lone
/// surrogate or an incomplete `\u` run decodes to U+FFFD rather than failing:
/// parsed strings are always well-formed, so the lenient path only triggers on
/// hand-built payloads. An unrecognized escape passes through as
/// backslash+character, mirroring the parser's pass-through rule.
pub fn unescape_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\x08'),
            Some('f') => out.push('\x0c'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => match read_code_unit(&mut chars) {
                Some(unit) if (0xd800..0xdc00).contains(&unit) => {
                    // High surrogate: look for a following \uXXXX low half.
                    let mut rest = chars.clone();
                    let low = if rest.next() == Some('\\') && rest.next() == Some('u') {
                        read_code_unit(&mut rest)
                    } else {
                        None
                    };
                    match low {
                        Some(low) if (0xdc00..0xe000).contains(&low) => {
                            let cp =
                                0x10000 + ((unit - 0xd800) << 10) + (low - 0xdc00);
                            out.push(char::from_u32(cp).unwrap_or('\u{fffd}'));
                            chars = rest;
                        }
                        _ => out.push('\u{fffd}'),
                    }
                }
                Some(unit) if (0xdc00..0xe000).contains(&unit) => out.push('\u{fffd}'),
                Some(unit) => out.push(char::from_u32(unit).unwrap_or('\u{fffd}')),
                None => out.push('\u{fffd}'),
            },
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Read four hex digits as a UTF-16 code unit; `None` if any is missing.
fn read_code_unit(chars: &mut std::str::Chars<'_>) -> Option<u32> {
    let mut unit = 0u32;
    for _ in 0..4 {
        let digit = chars.next().and_then(chars::hex_digit_value)?;
        unit = unit * 16 + digit;
    }
    Some(unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_short_forms() {
        assert_eq!(escape_str("a\nb"), "a\\nb");
        assert_eq!(escape_str("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_str("back\\slash"), "back\\\\slash");
        assert_eq!(escape_str("tab\there"), "tab\\there");
    }

    #[test]
    fn escape_other_control_chars() {
        assert_eq!(escape_str("\x01"), "\\u0001");
        assert_eq!(escape_str("\x1f"), "\\u001f");
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(escape_str("café"), "café");
        assert_eq!(unescape_str("café"), "café");
    }

    #[test]
    fn unescape_short_forms() {
        assert_eq!(unescape_str("a\\nb"), "a\nb");
        assert_eq!(unescape_str("\\\"quoted\\\""), "\"quoted\"");
        assert_eq!(unescape_str("slash\\/ok"), "slash/ok");
    }

    #[test]
    fn unescape_unicode_bmp() {
        assert_eq!(unescape_str("\\u0041"), "A");
        assert_eq!(unescape_str("\\u00e9"), "é");
    }

    #[test]
    fn unescape_surrogate_pair() {
        // U+1F600 as a UTF-16 pair
        assert_eq!(unescape_str("\\ud83d\\ude00"), "😀");
    }

    #[test]
    fn unescape_lone_surrogate_is_replaced() {
        assert_eq!(unescape_str("\\ud83d"), "\u{fffd}");
        assert_eq!(unescape_str("\\udc00x"), "\u{fffd}x");
    }

    #[test]
    fn unrecognized_escape_passes_through() {
        assert_eq!(unescape_str("\\z"), "\\z");
    }

    #[test]
    fn round_trip_is_identity_on_display_text() {
        for s in ["", "plain", "multi\nline\twith \"quotes\"", "ctrl\x01end"] {
            assert_eq!(unescape_str(&escape_str(s)), s);
        }
    }
}
