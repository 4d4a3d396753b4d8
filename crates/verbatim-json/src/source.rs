//! Character source abstraction consumed by the parser.
//!
//! A source exposes exactly two operations: read the next character and peek
//! at it without advancing. The parser borrows a source for the duration of
//! one [`parse`](crate::parser::parse) call and leaves the cursor immediately
//! past the last character it consumed, so a caller can keep reading the
//! underlying text (or parse another value) afterwards.

/// A sequential stream of characters with one character of lookahead.
///
/// `None` signals end of input from both operations.
pub trait CharSource {
    /// Consume and return the next character.
    fn next_char(&mut self) -> Option<char>;

    /// Return the next character without consuming it.
    fn peek_char(&mut self) -> Option<char>;
}

/// Adapts a borrowed `&str` as a [`CharSource`].
pub struct StrSource<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> StrSource<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// The remaining, not-yet-consumed text.
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }
}

impl CharSource for StrSource<'_> {
    fn next_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.rest().chars().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_advance() {
        let mut src = StrSource::new("ab");
        assert_eq!(src.peek_char(), Some('a'));
        assert_eq!(src.peek_char(), Some('a'));
        assert_eq!(src.next_char(), Some('a'));
        assert_eq!(src.next_char(), Some('b'));
        assert_eq!(src.peek_char(), None);
        assert_eq!(src.next_char(), None);
    }

    #[test]
    fn rest_tracks_consumption() {
        let mut src = StrSource::new("xyz");
        src.next_char();
        assert_eq!(src.rest(), "yz");
    }
}
