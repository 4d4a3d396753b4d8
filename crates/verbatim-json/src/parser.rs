//! Recursive-descent JSON parser.
//!
//! [`parse`] consumes exactly one JSON value from a [`CharSource`], skipping
//! leading whitespace and leaving the cursor immediately past the last
//! character it consumed — no trailing-content check, so a caller can read
//! several values in sequence from one source. Every decision is made on one
//! character of lookahead:
//!
//! | lookahead    | production |
//! |--------------|------------|
//! | `n` `t` `f`  | `null` / `true` / `false` keyword |
//! | `-` or digit | number |
//! | `"`          | string |
//! | `[`          | array (recursive) |
//! | `{`          | object (explicit state machine) |
//! | whitespace   | skipped |
//! | anything else | [`ParseError::UnexpectedCharacter`] |
//!
//! Nesting is bounded by an explicit depth counter checked against
//! [`Limits::max_depth`], so adversarial input fails with
//! [`ParseError::NestingTooDeep`] instead of exhausting the call stack.
//!
//! Numbers are accumulated as digit text only — never as a binary value — so
//! no precision is lost before the caller asks for a conversion. Strings are
//! stored re-escaped into canonical backslash form; see
//! [`escape`](crate::escape) for the display-text conversion.

use crate::chars;
use crate::error::ParseError;
use crate::number::JsonNumber;
use crate::source::{CharSource, StrSource};
use crate::value::{JsonObject, JsonValue};

/// Guard rails for a single parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum array/object nesting depth.
    pub max_depth: usize,
}

impl Limits {
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for Limits {
    /// 128 levels, enough for any sane document while keeping stack use
    /// bounded on small-stack targets.
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

/// Parse one JSON value from the source with default [`Limits`].
pub fn parse<S: CharSource>(source: &mut S) -> Result<JsonValue, ParseError> {
    parse_with_limits(source, Limits::default())
}

/// Parse one JSON value with explicit limits.
pub fn parse_with_limits<S: CharSource>(
    source: &mut S,
    limits: Limits,
) -> Result<JsonValue, ParseError> {
    Parser {
        source,
        limits,
        depth: 0,
    }
    .parse_value()
}

/// Parse one JSON value from the front of a string.
pub fn parse_str(text: &str) -> Result<JsonValue, ParseError> {
    let mut source = StrSource::new(text);
    parse(&mut source)
}

/// Render a lookahead result for an error message.
fn describe(c: Option<char>) -> String {
    match c {
        Some(c) => format!("`{c}`"),
        None => "EOF".to_string(),
    }
}

/// Object sub-grammar states. "After comma" re-enters key acceptance, the
/// same as right after the opening brace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjectState {
    AfterOpen,
    AfterKey,
    AfterColon,
    AfterValue,
    AfterComma,
}

struct Parser<'a, S: CharSource> {
    source: &'a mut S,
    limits: Limits,
    depth: usize,
}

impl<S: CharSource> Parser<'_, S> {
    fn parse_value(&mut self) -> Result<JsonValue, ParseError> {
        loop {
            let Some(c) = self.source.next_char() else {
                return Err(ParseError::UnexpectedCharacter(
                    "expected a value, got EOF".to_string(),
                ));
            };
            return match c {
                'n' => {
                    self.expect_literal("ull", "null")?;
                    Ok(JsonValue::Null)
                }
                't' => {
                    self.expect_literal("rue", "true")?;
                    Ok(JsonValue::Bool(true))
                }
                'f' => {
                    self.expect_literal("alse", "false")?;
                    Ok(JsonValue::Bool(false))
                }
                '-' => Ok(JsonValue::Number(self.parse_number(None))),
                c if chars::is_digit(c) => Ok(JsonValue::Number(self.parse_number(Some(c)))),
                '"' => Ok(JsonValue::String(self.read_string_body()?)),
                '[' => self.parse_array(),
                '{' => self.parse_object(),
                c if chars::is_whitespace(c) => continue,
                other => Err(ParseError::UnexpectedCharacter(format!("`{other}`"))),
            };
        }
    }

    /// Consume the tail of a keyword whose first character was already read.
    fn expect_literal(&mut self, tail: &str, keyword: &str) -> Result<(), ParseError> {
        for expected in tail.chars() {
            match self.source.next_char() {
                Some(c) if c == expected => {}
                other => {
                    return Err(ParseError::UnterminatedLiteral(format!(
                        "expected `{expected}` while reading `{keyword}`, got {}",
                        describe(other)
                    )));
                }
            }
        }
        Ok(())
    }

    /// Number sub-grammar. `first_digit` is `None` when the leading `-` was
    /// consumed instead of a digit. The first character that belongs to no
    /// part of the number is left unconsumed for the caller.
    fn parse_number(&mut self, first_digit: Option<char>) -> JsonNumber {
        let mut integer = String::new();
        let mut fraction = String::new();
        let mut exponent = String::new();
        let negative = first_digit.is_none();
        let mut exponent_negative = false;
        let mut has_fraction = false;
        let mut has_exponent = false;

        if let Some(d) = first_digit {
            integer.push(d);
        }
        loop {
            match self.source.peek_char() {
                Some(c) if chars::is_digit(c) => {
                    self.source.next_char();
                    integer.push(c);
                }
                Some('.') => {
                    self.source.next_char();
                    has_fraction = true;
                    break;
                }
                Some(c) if chars::to_lower(c) == 'e' => {
                    self.source.next_char();
                    has_exponent = true;
                    break;
                }
                _ => break,
            }
        }
        if has_fraction {
            loop {
                match self.source.peek_char() {
                    Some(c) if chars::is_digit(c) => {
                        self.source.next_char();
                        fraction.push(c);
                    }
                    Some(c) if chars::to_lower(c) == 'e' => {
                        self.source.next_char();
                        has_exponent = true;
                        break;
                    }
                    _ => break,
                }
            }
        }
        if has_exponent {
            // An optional +/- is only legal as the very first exponent
            // character; a `+` is recorded as an unset sign flag.
            let mut sign_settled = false;
            loop {
                match self.source.peek_char() {
                    Some(c) if chars::is_digit(c) => {
                        self.source.next_char();
                        sign_settled = true;
                        exponent.push(c);
                    }
                    Some('-') if !sign_settled => {
                        self.source.next_char();
                        exponent_negative = true;
                        sign_settled = true;
                    }
                    Some('+') if !sign_settled => {
                        self.source.next_char();
                        sign_settled = true;
                    }
                    _ => break,
                }
            }
        }

        JsonNumber::from_parts(
            integer,
            fraction,
            exponent,
            negative,
            exponent_negative,
            has_fraction,
            has_exponent,
        )
    }

    /// String sub-grammar; the opening quote was consumed by the caller.
    ///
    /// The returned text is the canonical escaped form of the body: each
    /// recognized escape is re-emitted in backslash notation, an unrecognized
    /// escape passes through as backslash+character, and `\u` runs are
    /// validated to carry exactly four hex digits.
    fn read_string_body(&mut self) -> Result<String, ParseError> {
        let mut body = String::new();
        let mut escaping = false;
        loop {
            let Some(c) = self.source.next_char() else {
                return Err(ParseError::UnterminatedString(
                    "reached EOF before the closing quote".to_string(),
                ));
            };
            if chars::is_line_break(c) {
                return Err(ParseError::UnterminatedString(format!(
                    "unescaped line break {:?} before the closing quote",
                    c
                )));
            }
            if escaping {
                match c {
                    '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' => {
                        body.push('\\');
                        body.push(c);
                    }
                    'u' => {
                        body.push_str("\\u");
                        self.read_unicode_digits(&mut body)?;
                    }
                    other => {
                        body.push('\\');
                        body.push(other);
                    }
                }
                escaping = false;
            } else {
                match c {
                    '\\' => escaping = true,
                    '"' => break,
                    c => body.push(c),
                }
            }
        }
        Ok(body)
    }

    /// Exactly four hex digits after `\u`, appended verbatim.
    fn read_unicode_digits(&mut self, body: &mut String) -> Result<(), ParseError> {
        for _ in 0..4 {
            match self.source.next_char() {
                Some(c) if chars::is_hex_digit(c) => body.push(c),
                other => {
                    return Err(ParseError::UnicodeEscape(format!(
                        "`\\u` requires 4 hex digits, got {}",
                        describe(other)
                    )));
                }
            }
        }
        Ok(())
    }

    fn parse_array(&mut self) -> Result<JsonValue, ParseError> {
        self.enter()?;
        let mut items = Vec::new();
        let mut after_comma = false;
        loop {
            match self.source.peek_char() {
                None => {
                    return Err(ParseError::UnterminatedArray(
                        "reached EOF before `]`".to_string(),
                    ));
                }
                Some(']') => {
                    if after_comma {
                        return Err(ParseError::MisplacedComma(
                            "`]` right after a comma".to_string(),
                        ));
                    }
                    self.source.next_char();
                    break;
                }
                Some(',') => {
                    if after_comma || items.is_empty() {
                        return Err(ParseError::MisplacedComma(
                            "`,` must follow an array element".to_string(),
                        ));
                    }
                    self.source.next_char();
                    after_comma = true;
                }
                Some(c) if chars::is_whitespace(c) => {
                    self.source.next_char();
                }
                Some(_) => {
                    items.push(self.parse_value()?);
                    after_comma = false;
                }
            }
        }
        self.leave();
        Ok(JsonValue::Array(items))
    }

    fn parse_object(&mut self) -> Result<JsonValue, ParseError> {
        self.enter()?;
        let mut map = JsonObject::new();
        let mut state = ObjectState::AfterOpen;
        let mut pending_key = String::new();
        loop {
            match self.source.peek_char() {
                None => {
                    return Err(ParseError::UnterminatedObject(
                        "reached EOF before `}`".to_string(),
                    ));
                }
                Some('}') => match state {
                    ObjectState::AfterOpen | ObjectState::AfterValue => {
                        self.source.next_char();
                        break;
                    }
                    ObjectState::AfterComma => {
                        return Err(ParseError::PrematureClose(
                            "`}` right after a comma".to_string(),
                        ));
                    }
                    ObjectState::AfterKey | ObjectState::AfterColon => {
                        return Err(ParseError::PrematureClose(
                            "`}` while a value was still pending".to_string(),
                        ));
                    }
                },
                Some(',') => {
                    if state != ObjectState::AfterValue {
                        return Err(ParseError::MisplacedComma(
                            "`,` must follow a key-value pair".to_string(),
                        ));
                    }
                    self.source.next_char();
                    state = ObjectState::AfterComma;
                }
                Some(':') => {
                    if state != ObjectState::AfterKey {
                        return Err(ParseError::MisplacedColon(
                            "`:` must follow a key".to_string(),
                        ));
                    }
                    self.source.next_char();
                    state = ObjectState::AfterColon;
                }
                Some(c) if chars::is_whitespace(c) => {
                    self.source.next_char();
                }
                Some('"') if matches!(state, ObjectState::AfterOpen | ObjectState::AfterComma) => {
                    self.source.next_char();
                    pending_key = self.read_string_body()?;
                    state = ObjectState::AfterKey;
                }
                Some(_) if state == ObjectState::AfterColon => {
                    let value = self.parse_value()?;
                    map.insert(std::mem::take(&mut pending_key), value);
                    state = ObjectState::AfterValue;
                }
                Some(other) => {
                    return Err(ParseError::UnexpectedCharacter(format!(
                        "`{other}` while reading an object"
                    )));
                }
            }
        }
        self.leave();
        Ok(JsonValue::Object(map))
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.limits.max_depth {
            return Err(ParseError::NestingTooDeep {
                depth: self.depth,
                limit: self.limits.max_depth,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
