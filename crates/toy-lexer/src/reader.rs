use std::iter::Peekable;

/// Character stream with one character of lookahead.
///
/// Wraps any `char` iterator, so the scanner works the same over an in-memory
/// string or a decoded file.
pub struct Reader<I: Iterator<Item = char>> {
    chars: Peekable<I>,
}

impl<I: Iterator<Item = char>> Reader<I> {
    pub fn new(chars: I) -> Self {
        Self {
            chars: chars.peekable(),
        }
    }

    /// The next unconsumed character, without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Consume and return the next character.
    pub fn advance(&mut self) -> Option<char> {
        self.chars.next()
    }

    pub fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_consume() {
        let mut r = Reader::new("ab".chars());
        assert_eq!(r.peek(), Some('a'));
        assert_eq!(r.peek(), Some('a'));
        assert_eq!(r.advance(), Some('a'));
        assert_eq!(r.peek(), Some('b'));
    }

    #[test]
    fn test_drains_to_end() {
        let mut r = Reader::new(":=".chars());
        assert_eq!(r.advance(), Some(':'));
        assert!(!r.is_at_end());
        assert_eq!(r.advance(), Some('='));
        assert!(r.is_at_end());
    }

    #[test]
    fn test_empty() {
        let mut r = Reader::new("".chars());
        assert!(r.is_at_end());
        assert_eq!(r.peek(), None);
        assert_eq!(r.advance(), None);
    }
}
