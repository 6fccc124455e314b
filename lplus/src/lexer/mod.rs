//! Lexer implementation using logos

mod token;

pub use token::Token;

use crate::ast::Span;
use logos::Logos;

/// One word of a line together with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'src> {
    pub token: Token,
    pub text: &'src str,
    pub span: Span,
}

impl<'src> Lexeme<'src> {
    pub fn is(&self, token: Token) -> bool {
        self.token == token
    }
}

/// Split a line into whitespace-delimited words.
///
/// Never fails: every run of non-whitespace characters is at least a
/// [`Token::Word`].
pub fn tokenize(line: &str) -> Vec<Lexeme<'_>> {
    let mut lexer = Token::lexer(line);
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        let span = Span::from(lexer.span());
        lexemes.push(Lexeme {
            token: result.unwrap_or(Token::Word),
            text: lexer.slice(),
            span,
        });
    }

    lexemes
}

/// Strip leading and trailing ASCII control characters and spaces.
///
/// Unicode whitespace such as U+00A0 is kept, so a line holding only that is
/// not blank.
pub fn trim(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}

/// Join raw token texts with single spaces, as used in diagnostics
pub fn join(lexemes: &[Lexeme<'_>]) -> String {
    lexemes
        .iter()
        .map(|lex| lex.text)
        .collect::<Vec<_>>()
        .join(" ")
}
