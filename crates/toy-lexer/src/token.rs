use std::fmt;

/// A position in source text, tracking line and column for error reporting.
///
/// Both fields are 1-based. A newline moves to the next line and resets the
/// column; every other character advances the column by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} col {}", self.line, self.column)
    }
}

/// Token classification for toy language source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    Identifier,
    Keyword,
    Integer,
    String,
    Operator,
    Delimiter,
}

impl TokenKind {
    /// The label printed in the token table. These strings are part of the
    /// output format and must not change.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Identifier => "ID",
            TokenKind::Keyword => "keywords",
            TokenKind::Integer => "INTEGER",
            TokenKind::String => "STRING",
            TokenKind::Operator => "operators",
            TokenKind::Delimiter => "delimiters",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A token produced by the scanner.
///
/// `value` equals `lexeme` for every kind except [`TokenKind::Identifier`],
/// where it holds the decimal symbol code assigned to the name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, value: String, position: Position) -> Self {
        Self {
            lexeme,
            kind,
            value,
            position,
        }
    }

    /// A token whose value is its own lexeme.
    pub fn verbatim(kind: TokenKind, lexeme: String, position: Position) -> Self {
        let value = lexeme.clone();
        Self::new(kind, lexeme, value, position)
    }
}

/// Reserved words. Matching is case-sensitive.
pub const KEYWORDS: &[&str] = &[
    "array", "boolean", "char", "else", "false", "for", "function", "if", "integer", "print",
    "return", "string", "true", "void", "while",
];

/// Check if a name is a reserved word.
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}
