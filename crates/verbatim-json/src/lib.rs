//! # verbatim-json
//!
//! Embeddable JSON support with a lossless document model: numbers keep their
//! exact literal spelling, objects keep first-insertion order, and string
//! payloads keep their canonical escaped form, so a parse→serialize round
//! trip preserves everything the text actually said.
//!
//! ## Quick start
//!
//! ```rust
//! use verbatim_json::{parse_str, to_text};
//!
//! let doc = parse_str(r#"{"price": 1.50, "tags": ["a", "b"]}"#).unwrap();
//! assert_eq!(doc.get("price").unwrap().as_number().unwrap().to_string(), "1.50");
//!
//! let text = to_text(&doc).unwrap();
//! let again = parse_str(&text).unwrap();
//! assert_eq!(doc, again);
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — recursive-descent parser with a configurable depth limit
//! - [`writer`] — pretty-printing serializer
//! - [`value`] — [`JsonValue`] tagged union and accessors
//! - [`number`] — [`JsonNumber`], the decomposed numeric literal
//! - [`ordered_map`] — [`OrderedMap`], insertion-ordered object storage
//! - [`source`] — the [`CharSource`] abstraction the parser consumes
//! - [`escape`] — escaped-form ↔ display-text string helpers
//! - [`chars`] — character classification predicates
//! - [`error`] — [`ParseError`] / [`TypeError`] families

pub mod chars;
pub mod error;
pub mod escape;
pub mod number;
pub mod ordered_map;
pub mod parser;
pub mod source;
pub mod value;
pub mod writer;

pub use error::{Error, ParseError, Result, TypeError};
pub use number::JsonNumber;
pub use ordered_map::OrderedMap;
pub use parser::{parse, parse_str, parse_with_limits, Limits};
pub use source::{CharSource, StrSource};
pub use value::{JsonObject, JsonValue};
pub use writer::{to_text, to_text_escaped};
