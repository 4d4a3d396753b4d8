//! Error types for parsing, access, and serialization.
//!
//! Two independent families, both fatal to the operation that raised them:
//!
//! - [`ParseError`] — grammar violations while consuming text
//! - [`TypeError`] — variant mismatches, strict-conversion failures, and
//!   attempts to serialize the uninitialized sentinel
//!
//! There is no internal catch-and-continue; callers pick their own recovery
//! granularity, typically around a single top-level `parse` call.

use thiserror::Error;

/// Grammar violations raised while consuming a character source.
///
/// Messages name the offending character, or `EOF` when the source ran out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character that opens no production appeared where a value was expected.
    #[error("unexpected character: {0}")]
    UnexpectedCharacter(String),

    /// A `null`/`true`/`false` keyword was spelled incorrectly.
    #[error("unterminated literal: {0}")]
    UnterminatedLiteral(String),

    /// End of input or an unescaped line break before the closing quote.
    #[error("unterminated string: {0}")]
    UnterminatedString(String),

    /// A `\u` escape was not followed by exactly four hex digits.
    #[error("malformed unicode escape: {0}")]
    UnicodeEscape(String),

    /// End of input before the closing `]`.
    #[error("unterminated array: {0}")]
    UnterminatedArray(String),

    /// End of input before the closing `}`.
    #[error("unterminated object: {0}")]
    UnterminatedObject(String),

    /// A comma where the grammar does not allow one.
    #[error("misplaced comma: {0}")]
    MisplacedComma(String),

    /// A colon anywhere other than between an object key and its value.
    #[error("misplaced colon: {0}")]
    MisplacedColon(String),

    /// A closing `}` while a key, colon, or value was still pending.
    #[error("premature close: {0}")]
    PrematureClose(String),

    /// Nesting exceeded the configured depth limit.
    #[error("nesting too deep: depth {depth} exceeds limit {limit}")]
    NestingTooDeep { depth: usize, limit: usize },
}

/// Variant and conversion failures on an already-built document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// An accessor was used against a mismatched variant.
    #[error("wrong variant access: expected {expected}, found {found}")]
    WrongVariantAccess {
        expected: &'static str,
        found: &'static str,
    },

    /// A strict numeric conversion was applied to the wrong classification.
    #[error("strict conversion mismatch: {0}")]
    StrictConversionMismatch(String),

    /// The default-constructed sentinel value cannot be rendered.
    #[error("cannot serialize an uninitialized value")]
    SerializeUninitialized,

    /// A numeric literal does not fit the requested native width.
    #[error("number out of range: {0}")]
    NumberOutOfRange(String),
}

/// Umbrella error for callers that funnel both families through one `?`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Type(#[from] TypeError),
}

/// Convenience alias used throughout verbatim-json.
pub type Result<T> = std::result::Result<T, Error>;
