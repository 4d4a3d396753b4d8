//! Character classification predicates used by the parser.
//!
//! All predicates are pure and total over a `char`. End of input is not a
//! character in this model — the [`CharSource`](crate::source::CharSource)
//! boundary reports it as `None`, so nothing here needs a sentinel value.

/// ASCII decimal digit (`0`–`9`).
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// ASCII hexadecimal digit (`0`–`9`, `a`–`f`, `A`–`F`).
pub fn is_hex_digit(c: char) -> bool {
    is_digit(c) || ('a'..='f').contains(&c) || ('A'..='F').contains(&c)
}

/// ASCII letter (`a`–`z` or `A`–`Z`).
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_uppercase()
}

/// JSON-relevant whitespace: space, tab, line feed, vertical tab, form feed,
/// carriage return.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Line-terminating characters: line feed, form feed, carriage return.
///
/// An unescaped line break inside a string literal terminates the string
/// abnormally, so the parser distinguishes these from plain whitespace.
pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\x0c' | '\r')
}

/// ASCII case folding to lowercase; non-uppercase input passes through.
pub fn to_lower(c: char) -> char {
    c.to_ascii_lowercase()
}

/// ASCII case folding to uppercase; non-lowercase input passes through.
pub fn to_upper(c: char) -> char {
    c.to_ascii_uppercase()
}

/// Numeric value of a decimal digit. Returns `None` for non-digits.
pub fn digit_value(c: char) -> Option<u32> {
    c.to_digit(10)
}

/// Numeric value of a hexadecimal digit. Returns `None` for non-hex-digits.
pub fn hex_digit_value(c: char) -> Option<u32> {
    c.to_digit(16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(!is_digit('a'));
        assert!(!is_digit('/'));
        assert!(!is_digit(':'));
    }

    #[test]
    fn hex_digits_use_conjunctive_bounds() {
        // A disjunctive range check would accept nearly every character;
        // make sure plain letters outside a-f/A-F are rejected.
        assert!(is_hex_digit('0'));
        assert!(is_hex_digit('a'));
        assert!(is_hex_digit('f'));
        assert!(is_hex_digit('A'));
        assert!(is_hex_digit('F'));
        assert!(!is_hex_digit('g'));
        assert!(!is_hex_digit('G'));
        assert!(!is_hex_digit('z'));
        assert!(!is_hex_digit(' '));
        assert!(!is_hex_digit('"'));
    }

    #[test]
    fn whitespace_and_line_breaks() {
        for c in [' ', '\t', '\n', '\x0b', '\x0c', '\r'] {
            assert!(is_whitespace(c), "{c:?} should be whitespace");
        }
        assert!(!is_whitespace('x'));

        for c in ['\n', '\x0c', '\r'] {
            assert!(is_line_break(c), "{c:?} should be a line break");
        }
        assert!(!is_line_break(' '));
        assert!(!is_line_break('\t'));
        assert!(!is_line_break('\x0b'));
    }

    #[test]
    fn case_folding() {
        assert_eq!(to_lower('E'), 'e');
        assert_eq!(to_lower('e'), 'e');
        assert_eq!(to_upper('e'), 'E');
        assert_eq!(to_upper('3'), '3');
    }

    #[test]
    fn digit_values() {
        assert_eq!(digit_value('7'), Some(7));
        assert_eq!(digit_value('x'), None);
        assert_eq!(hex_digit_value('b'), Some(11));
        assert_eq!(hex_digit_value('F'), Some(15));
        assert_eq!(hex_digit_value('g'), None);
    }
}
