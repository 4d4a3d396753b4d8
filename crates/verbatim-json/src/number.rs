//! Lossless JSON numeric literal.
//!
//! A [`JsonNumber`] stores the literal exactly as it was spelled — sign flag,
//! integer digits, fractional digits, exponent sign flag, exponent digits —
//! and never a binary value. `"1.50"` keeps its trailing zero and `"007"`
//! keeps its leading zeros across a parse→serialize round trip. Conversion to
//! a native `i64` or `f64` is a separate, explicit, fallible step.

use std::fmt;

use crate::error::TypeError;
use crate::source::StrSource;

/// A decomposed JSON number literal.
///
/// Classification follows a single invariant: the literal is a *float* iff it
/// has a fractional part or an exponent part, otherwise it is an *integer*.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsonNumber {
    integer: String,
    fraction: String,
    exponent: String,
    negative: bool,
    exponent_negative: bool,
    has_fraction: bool,
    has_exponent: bool,
}

impl JsonNumber {
    /// Assemble a number from raw digit buffers and flags.
    ///
    /// This is the constructor the parser uses; the buffers are taken verbatim
    /// with no normalization.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        integer: String,
        fraction: String,
        exponent: String,
        negative: bool,
        exponent_negative: bool,
        has_fraction: bool,
        has_exponent: bool,
    ) -> Self {
        Self {
            integer,
            fraction,
            exponent,
            negative,
            exponent_negative,
            has_fraction,
            has_exponent,
        }
    }

    /// Build a number from a literal string such as `"3.0"` or `"-2e+10"`.
    ///
    /// Runs the parser's number sub-grammar over the text; fails if the text
    /// does not start with a number or has trailing content.
    pub fn from_literal(literal: &str) -> Result<Self, TypeError> {
        let mut src = StrSource::new(literal);
        let parsed = crate::parser::parse(&mut src);
        match parsed {
            Ok(crate::value::JsonValue::Number(n)) if src.rest().is_empty() => Ok(n),
            _ => Err(TypeError::NumberOutOfRange(format!(
                "`{literal}` is not a numeric literal"
            ))),
        }
    }

    /// Build an integer-classified number from a native value.
    pub fn from_i64(value: i64) -> Self {
        Self {
            integer: value.unsigned_abs().to_string(),
            negative: value < 0,
            ..Self::default()
        }
    }

    /// True iff the literal has a fractional or exponent part.
    pub fn is_float(&self) -> bool {
        self.has_fraction || self.has_exponent
    }

    /// True iff the literal has neither a fractional nor an exponent part.
    pub fn is_int(&self) -> bool {
        !self.is_float()
    }

    /// Convert to a 64-bit signed integer.
    ///
    /// With `strict`, a float-classified literal fails with
    /// [`TypeError::StrictConversionMismatch`]. Without it, the fractional and
    /// exponent parts are simply ignored — the signed integer digits alone are
    /// converted, matching stream extraction semantics. A literal whose
    /// integer digits do not fit an `i64` fails with
    /// [`TypeError::NumberOutOfRange`].
    pub fn to_i64(&self, strict: bool) -> Result<i64, TypeError> {
        if strict && self.is_float() {
            return Err(TypeError::StrictConversionMismatch(format!(
                "cannot convert float literal `{self}` to an integer"
            )));
        }
        let mut text = String::with_capacity(self.integer.len() + 1);
        if self.negative {
            text.push('-');
        }
        text.push_str(&self.integer);
        text.parse::<i64>()
            .map_err(|_| TypeError::NumberOutOfRange(format!("`{self}` does not fit an i64")))
    }

    /// Convert to a 64-bit binary float.
    ///
    /// With `strict`, an integer-classified literal fails with
    /// [`TypeError::StrictConversionMismatch`]. Rounding is whatever the host
    /// `f64` parser does; out-of-range magnitudes round to infinity as usual.
    pub fn to_f64(&self, strict: bool) -> Result<f64, TypeError> {
        if strict && self.is_int() {
            return Err(TypeError::StrictConversionMismatch(format!(
                "cannot convert integer literal `{self}` to a float"
            )));
        }
        self.to_string()
            .parse::<f64>()
            .map_err(|_| TypeError::NumberOutOfRange(format!("`{self}` is not a valid number")))
    }
}

impl fmt::Display for JsonNumber {
    /// Reconstruct the exact literal: `-`? integer (`.` fraction)?
    /// (`e` `-`? exponent)?. A `+` exponent sign seen by the parser is not
    /// retained, so `-2e+10` renders as `-2e10`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.integer)?;
        if self.has_fraction {
            write!(f, ".{}", self.fraction)?;
        }
        if self.has_exponent {
            f.write_str("e")?;
            if self.exponent_negative {
                f.write_str("-")?;
            }
            f.write_str(&self.exponent)?;
        }
        Ok(())
    }
}
