//! Toy Lexer
//!
//! Tokenizes toy language source into a flat stream of classified tokens.
//! Handles keywords, identifiers (interned into a [`SymbolTable`]), integer
//! and string literals, one- and two-character operators, delimiters, and
//! `//` / `/* */` comments. Malformed input is reported as a diagnostic and
//! scanning continues.
//!
//! # Example
//!
//! ```
//! use toy_lexer::{Scanner, TokenKind};
//!
//! let scan = Scanner::tokenize("integer x := 5;");
//! assert!(scan.diagnostics.is_empty());
//! assert_eq!(scan.tokens[1].kind, TokenKind::Identifier);
//! assert_eq!(scan.tokens[1].value, "100");
//! ```

pub mod chars;
pub mod emit;
pub mod reader;
pub mod scanner;
pub mod symbol;
pub mod token;

pub use emit::{Emitter, TableEmitter};
pub use reader::Reader;
pub use scanner::{Scan, ScanEvent, Scanner, ScannerConfig, DEFAULT_MAX_STRING_LEN};
pub use symbol::{Symbol, SymbolTable};
pub use token::{Position, Token, TokenKind};

/// A lexical error. None of these stop the scan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum LexerError {
    #[error("Invalid character '{ch}' at {position}")]
    InvalidCharacter { ch: char, position: Position },

    #[error("Unterminated string starting at {position}")]
    UnterminatedString { position: Position },

    #[error("String too long at {position}")]
    StringTooLong { position: Position },

    #[error("Unterminated block comment starting at {position}")]
    UnterminatedBlockComment { position: Position },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_messages() {
        let at = Position::new(2, 5);
        assert_eq!(
            LexerError::InvalidCharacter { ch: '@', position: at }.to_string(),
            "Invalid character '@' at line 2 col 5"
        );
        assert_eq!(
            LexerError::UnterminatedString { position: at }.to_string(),
            "Unterminated string starting at line 2 col 5"
        );
        assert_eq!(
            LexerError::StringTooLong { position: at }.to_string(),
            "String too long at line 2 col 5"
        );
        assert_eq!(
            LexerError::UnterminatedBlockComment { position: at }.to_string(),
            "Unterminated block comment starting at line 2 col 5"
        );
    }
}
