//! Tokenizer for dice formulas.

use std::ops::Range;

use logos::Logos;

/// A formula token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of digits, kept as source text so overflow is reported by the parser.
    Number(String),
    /// A single ASCII letter.
    Letter(char),
}

/// Internal logos token, converted to owned `Token` after lexing.
#[derive(Logos, Debug)]
enum RawToken {
    #[regex(r"[0-9]+")]
    Number,

    #[regex(r"[a-zA-Z]")]
    Letter,
}

/// Lex a whitespace-free formula into `(Token, Span)` pairs.
///
/// Stops at the first character that is neither a digit nor a letter and
/// returns its span as the error.
pub fn lex(source: &str) -> Result<Vec<(Token, Range<usize>)>, Range<usize>> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let token = match result {
            Ok(RawToken::Number) => Token::Number(lexer.slice().to_string()),
            Ok(RawToken::Letter) => match lexer.slice().chars().next() {
                Some(c) => Token::Letter(c),
                None => return Err(span),
            },
            Err(()) => return Err(span),
        };
        tokens.push((token, span));
    }

    Ok(tokens)
}
