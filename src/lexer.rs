//! Splits a graph description into tokens.
//!
//! Whitespace and `#` comments are skipped. Numbers are kept as source slices;
//! the parser decides whether a number is a vertex id or a weight.

use logos::Logos;

use crate::document::{Span, Spanned};

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'src> {
    #[token("->")]
    Arrow,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number(&'src str),

    #[regex(r"#[^\n]*", logos::skip)]
    Comment,

    // A run of characters that cannot start any token.
    // Reported by the parser rather than here.
    #[regex(r"[^ \t\r\n\f0-9:;,#\-]+", priority = 1)]
    Invalid(&'src str),
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Arrow => write!(f, "`->`"),
            Token::Colon => write!(f, "`:`"),
            Token::Semicolon => write!(f, "`;`"),
            Token::Comma => write!(f, "`,`"),
            Token::Number(n) => write!(f, "number `{n}`"),
            Token::Comment => write!(f, "comment"),
            Token::Invalid(s) => write!(f, "`{s}`"),
        }
    }
}

/// Takes a graph description and splits it into a sequence of tokens.
pub fn tokenize(src: &str) -> Vec<Spanned<Token>> {
    let mut lexer = Token::lexer(src);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let token = result.unwrap_or_else(|_| Token::Invalid(lexer.slice()));
        tokens.push(Spanned::new(token, Span::from(lexer.span())));
    }

    tokens
}
