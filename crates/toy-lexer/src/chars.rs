//! Character classes used by the scanner's dispatch.

/// Whitespace as the C locale sees it: space, tab, newline, carriage return,
/// vertical tab and form feed.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Characters that can begin an operator.
///
/// `:` is included so that `:=` can be recognized; it is checked before the
/// delimiter class, which leaves `:`'s delimiter membership unreachable.
pub fn is_operator_start(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '!' | '*' | '/' | '%' | '^' | '<' | '>' | '=' | '|' | '&' | ':'
    )
}

/// Single-character delimiters.
pub fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        '(' | ')' | '[' | ']' | '{' | '}' | ',' | ';' | ':' | '"' | '\''
    )
}

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// The only recognized two-character operators: `:=`, `==` and `++`.
pub fn is_two_char_operator(first: char, second: char) -> bool {
    matches!((first, second), (':', '=') | ('=', '=') | ('+', '+'))
}
