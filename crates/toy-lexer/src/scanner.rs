use std::collections::VecDeque;

use crate::chars::{
    is_delimiter, is_digit, is_ident_continue, is_ident_start, is_operator_start,
    is_two_char_operator, is_whitespace,
};
use crate::reader::Reader;
use crate::symbol::SymbolTable;
use crate::token::{is_keyword, Position, Token, TokenKind};
use crate::LexerError;

/// Default cap on a string literal's length, opening quote included.
pub const DEFAULT_MAX_STRING_LEN: usize = 1022;

/// Scanner settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Characters a string literal may accumulate, counting the opening
    /// quote, before it is cut off with [`LexerError::StringTooLong`].
    pub max_string_len: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_string_len: DEFAULT_MAX_STRING_LEN,
        }
    }
}

/// One item of scanner output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    Token(Token),
    Diagnostic(LexerError),
}

/// Everything produced by a complete scan.
#[derive(Debug, Clone)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<LexerError>,
    pub symbols: SymbolTable,
}

/// Toy language scanner.
///
/// Pulls characters from a [`Reader`] one at a time and yields tokens and
/// diagnostics as an iterator of [`ScanEvent`]s, in source order. Malformed
/// input produces a diagnostic (and, for strings, a partial token) and the scan
/// carries on; only end of input stops it.
///
/// The scanner owns all scan state: line/column counters and the symbol table
/// used to number identifiers. Independent scanners share nothing.
pub struct Scanner<I: Iterator<Item = char>> {
    reader: Reader<I>,
    line: usize,
    column: usize,
    symbols: SymbolTable,
    config: ScannerConfig,
    pending: VecDeque<ScanEvent>,
}

impl<'a> Scanner<std::str::Chars<'a>> {
    /// Create a scanner over in-memory source.
    pub fn from_source(source: &'a str) -> Self {
        Scanner::new(source.chars())
    }

    /// Scan the entire source, collecting tokens, diagnostics and symbols.
    pub fn tokenize(source: &str) -> Scan {
        Scanner::from_source(source).collect_scan()
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(chars: I) -> Self {
        Self::with_config(chars, ScannerConfig::default())
    }

    pub fn with_config(chars: I, config: ScannerConfig) -> Self {
        Self {
            reader: Reader::new(chars),
            line: 1,
            column: 1,
            symbols: SymbolTable::new(),
            config,
            pending: VecDeque::new(),
        }
    }

    /// Position of the next unconsumed character.
    pub fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }

    /// Drain the scanner, splitting its output into tokens and diagnostics.
    pub fn collect_scan(mut self) -> Scan {
        let mut tokens = Vec::new();
        let mut diagnostics = Vec::new();
        for event in self.by_ref() {
            match event {
                ScanEvent::Token(tok) => tokens.push(tok),
                ScanEvent::Diagnostic(err) => diagnostics.push(err),
            }
        }
        Scan {
            tokens,
            diagnostics,
            symbols: self.symbols,
        }
    }

    /// Consume input up to the next token boundary, queueing whatever it produced.
    fn scan_token(&mut self) {
        let Some(ch) = self.reader.peek() else {
            return;
        };

        match ch {
            c if is_whitespace(c) => {
                self.advance();
            }

            '"' => self.scan_string(),

            // Division, or the start of a comment
            '/' => self.scan_slash(),

            c if is_operator_start(c) => self.scan_operator(),

            c if is_delimiter(c) => {
                let start = self.current_position();
                self.advance();
                self.emit(Token::verbatim(TokenKind::Delimiter, c.to_string(), start));
            }

            c if is_ident_start(c) => self.scan_identifier(),

            c if is_digit(c) => self.scan_integer(),

            c => {
                let position = self.current_position();
                self.advance();
                self.report(LexerError::InvalidCharacter { ch: c, position });
            }
        }
    }

    // --- Scanners ---

    /// Scan a string literal.
    ///
    /// The lexeme keeps both quotes and has escapes already applied. Unknown
    /// escapes stay as the two characters `\X`.
    fn scan_string(&mut self) {
        let start = self.current_position();
        self.advance(); // opening quote

        let mut text = String::from('"');
        let mut len = 1;

        loop {
            let Some(c) = self.advance() else {
                self.report(LexerError::UnterminatedString { position: start });
                self.emit(Token::verbatim(TokenKind::String, text, start));
                return;
            };

            match c {
                '"' => {
                    text.push('"');
                    self.emit(Token::verbatim(TokenKind::String, text, start));
                    return;
                }
                '\\' => match self.advance() {
                    Some('n') => {
                        text.push('\n');
                        len += 1;
                    }
                    Some('t') => {
                        text.push('\t');
                        len += 1;
                    }
                    Some(c @ ('"' | '\\')) => {
                        text.push(c);
                        len += 1;
                    }
                    Some(other) => {
                        text.push('\\');
                        text.push(other);
                        len += 2;
                    }
                    // Input ends right after the backslash; the next read reports it
                    None => {
                        text.push('\\');
                        len += 1;
                    }
                },
                c => {
                    text.push(c);
                    len += 1;
                }
            }

            if len >= self.config.max_string_len {
                self.report(LexerError::StringTooLong { position: start });
                self.emit(Token::verbatim(TokenKind::String, text, start));
                return;
            }
        }
    }

    /// Scan `/`: a line comment, a block comment, or the division operator.
    fn scan_slash(&mut self) {
        let start = self.current_position();
        self.advance();

        if self.advance_if('/') {
            self.skip_line_comment();
        } else if self.advance_if('*') {
            self.skip_block_comment(start);
        } else {
            self.emit(Token::verbatim(TokenKind::Operator, "/".into(), start));
        }
    }

    /// Skip through the end of the line, newline included.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.advance() {
            if c == '\n' {
                break;
            }
        }
    }

    /// Skip to just past the closing `*/`.
    fn skip_block_comment(&mut self, start: Position) {
        loop {
            match self.advance() {
                Some('*') => {
                    if self.advance_if('/') {
                        return;
                    }
                }
                Some(_) => {}
                None => {
                    self.report(LexerError::UnterminatedBlockComment { position: start });
                    return;
                }
            }
        }
    }

    /// Scan a one- or two-character operator.
    fn scan_operator(&mut self) {
        let start = self.current_position();
        let Some(first) = self.advance() else {
            return;
        };

        let mut op = String::from(first);
        if let Some(second) = self.reader.peek() {
            if is_two_char_operator(first, second) {
                self.advance();
                op.push(second);
            }
        }

        self.emit(Token::verbatim(TokenKind::Operator, op, start));
    }

    /// Scan an identifier or keyword. Identifiers are numbered through the
    /// symbol table; the token value is the code.
    fn scan_identifier(&mut self) {
        let start = self.current_position();
        let ident = self.take_while(is_ident_continue);

        let token = if is_keyword(&ident) {
            Token::verbatim(TokenKind::Keyword, ident, start)
        } else {
            let code = self.symbols.code_for(&ident);
            Token::new(TokenKind::Identifier, ident, code.to_string(), start)
        };
        self.emit(token);
    }

    /// Scan a run of digits. No sign, no fraction, no normalization.
    fn scan_integer(&mut self) {
        let start = self.current_position();
        let digits = self.take_while(is_digit);
        self.emit(Token::verbatim(TokenKind::Integer, digits, start));
    }

    // --- Helpers ---

    fn emit(&mut self, token: Token) {
        self.pending.push_back(ScanEvent::Token(token));
    }

    fn report(&mut self, error: LexerError) {
        self.pending.push_back(ScanEvent::Diagnostic(error));
    }

    /// Consume one character, keeping line and column in step.
    fn advance(&mut self) -> Option<char> {
        let c = self.reader.advance()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn advance_if(&mut self, expected: char) -> bool {
        if self.reader.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn take_while(&mut self, pred: fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.reader.peek() {
            if !pred(c) {
                break;
            }
            text.push(c);
            self.advance();
        }
        text
    }
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = ScanEvent;

    fn next(&mut self) -> Option<ScanEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            if self.reader.is_at_end() {
                return None;
            }
            self.scan_token();
        }
    }
}
