//! WASM bindings for the toy lexer.
//!
//! Exposes `tokenize()` to JavaScript via wasm-bindgen.
//! Returns a JS object `{ tokens, diagnostics, symbols }`. Lexical errors are
//! data, not exceptions; only a serialization failure throws.

use serde::Serialize;
use toy_lexer::{LexerError, Scanner, Symbol, Token};
use wasm_bindgen::prelude::*;

#[derive(Debug, Serialize)]
pub struct TokenizeOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<LexerError>,
    pub symbols: Vec<Symbol>,
}

/// Scan source into plain Rust data. Shared by the JS entry point and tests.
pub fn tokenize_native(source: &str) -> TokenizeOutput {
    let scan = Scanner::tokenize(source);
    TokenizeOutput {
        symbols: scan.symbols.symbols(),
        tokens: scan.tokens,
        diagnostics: scan.diagnostics,
    }
}

/// Tokenize toy language source.
///
/// Returns a JS object with `{ tokens: Token[], diagnostics: Diagnostic[], symbols: Symbol[] }`.
#[wasm_bindgen]
pub fn tokenize(source: &str) -> Result<JsValue, JsError> {
    let output = tokenize_native(source);
    serde_wasm_bindgen::to_value(&output).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the lexer version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use toy_lexer::TokenKind;

    // =========================================================================
    // Native tests (non-WASM): verify the scan pipeline behind the binding
    // =========================================================================

    #[test]
    fn test_empty_source() {
        let output = tokenize_native("");
        assert!(output.tokens.is_empty());
        assert!(output.diagnostics.is_empty());
        assert!(output.symbols.is_empty());
    }

    #[test]
    fn test_statement() {
        let output = tokenize_native("while (i) i := i + 1;");
        let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Keyword,
                TokenKind::Delimiter,
                TokenKind::Identifier,
                TokenKind::Delimiter,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Integer,
                TokenKind::Delimiter,
            ]
        );
        assert_eq!(
            output.symbols,
            vec![Symbol {
                name: "i".into(),
                code: 100
            }]
        );
    }

    #[test]
    fn test_diagnostics_are_returned() {
        let output = tokenize_native("x ~ y");
        assert_eq!(output.tokens.len(), 2);
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(
            output.diagnostics[0].to_string(),
            "Invalid character '~' at line 1 col 3"
        );
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }

    #[test]
    fn test_multiple_scans() {
        // No state leaks between calls
        let out1 = tokenize_native("alpha beta");
        let out2 = tokenize_native("beta");
        assert_eq!(out1.tokens[1].value, "101");
        assert_eq!(out2.tokens[0].value, "100");
    }
}
