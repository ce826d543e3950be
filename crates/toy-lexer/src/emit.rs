use std::io::{self, Write};

use crate::token::Token;

/// Receives tokens in source order.
pub trait Emitter {
    fn emit(&mut self, token: &Token) -> io::Result<()>;
}

impl Emitter for Vec<Token> {
    fn emit(&mut self, token: &Token) -> io::Result<()> {
        self.push(token.clone());
        Ok(())
    }
}

const RULE_WIDTH: usize = 60;

/// Renders tokens as a three-column text table: lexeme, kind label, value.
pub struct TableEmitter<W: Write> {
    out: W,
}

impl<W: Write> TableEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the column header and the separator rule.
    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", row("Token", "Token Type", "Token Value"))?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Emitter for TableEmitter<W> {
    fn emit(&mut self, token: &Token) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            row(&token.lexeme, token.kind.label(), &token.value)
        )
    }
}

fn row(lexeme: &str, kind: &str, value: &str) -> String {
    format!("{lexeme:<20}\t{kind:<15}\t{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Position, TokenKind};
    use pretty_assertions::assert_eq;

    fn render(tokens: &[Token]) -> String {
        let mut emitter = TableEmitter::new(Vec::new());
        emitter.write_header().unwrap();
        for tok in tokens {
            emitter.emit(tok).unwrap();
        }
        String::from_utf8(emitter.into_inner()).unwrap()
    }

    #[test]
    fn test_header_only() {
        let out = render(&[]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Token               \tToken Type     \tToken Value"
        );
        assert_eq!(lines[1], "-".repeat(60));
    }

    #[test]
    fn test_identifier_row() {
        let tok = Token::new(
            TokenKind::Identifier,
            "x".into(),
            "100".into(),
            Position::default(),
        );
        let out = render(&[tok]);
        assert_eq!(
            out.lines().nth(2).unwrap(),
            "x                   \tID             \t100"
        );
    }

    #[test]
    fn test_long_lexeme_is_not_truncated() {
        let name = "a_really_long_identifier_name";
        let tok = Token::verbatim(TokenKind::Keyword, name.into(), Position::default());
        let out = render(&[tok]);
        assert_eq!(
            out.lines().nth(2).unwrap(),
            format!("{name}\tkeywords       \t{name}")
        );
    }

    #[test]
    fn test_vec_emitter_keeps_order() {
        let mut sink: Vec<Token> = Vec::new();
        let a = Token::verbatim(TokenKind::Delimiter, "(".into(), Position::new(1, 1));
        let b = Token::verbatim(TokenKind::Delimiter, ")".into(), Position::new(1, 2));
        sink.emit(&a).unwrap();
        sink.emit(&b).unwrap();
        assert_eq!(sink, vec![a, b]);
    }
}
