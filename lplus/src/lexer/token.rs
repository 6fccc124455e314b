//! Token definitions

use logos::Logos;

/// Classification of one whitespace-delimited word.
///
/// A word only gets a specific kind when the whole word matches it, so `+5`,
/// `%%` and `12ab` are all plain [`Token::Word`]s. Only ASCII whitespace
/// separates words.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\x0B\f\r]+")]
pub enum Token {
    // Keywords
    #[token("var", ignore(ascii_case))]
    Var,
    #[token("print", ignore(ascii_case))]
    Print,
    #[token("if", ignore(ascii_case))]
    If,
    #[token("fun", ignore(ascii_case))]
    Fun,

    // Arithmetic
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // Comparison / assignment
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // Function definition delimiters
    #[token("%")]
    Percent,
    #[token("$")]
    Dollar,

    /// ASCII decimal digits only
    #[regex(r"[0-9]+", priority = 3)]
    Digits,

    /// Any other run of non-whitespace characters
    #[regex(r"[^ \t\n\x0B\f\r]+", priority = 1)]
    Word,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Token::Var => "var",
            Token::Print => "print",
            Token::If => "if",
            Token::Fun => "fun",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Eq => "=",
            Token::Lt => "<",
            Token::Gt => ">",
            Token::Percent => "%",
            Token::Dollar => "$",
            Token::Digits => "digits",
            Token::Word => "word",
        };
        f.write_str(name)
    }
}
