//! Statement parser
//!
//! Lines are classified by their first word and then parsed by one of the
//! per-statement functions below. Rejections come in two tiers: a
//! [`Diagnostic`] (wrapped in [`Statement::Invalid`]) for everything except
//! malformed function definitions, which fail with a [`SyntaxError`].

use crate::ast::{CmpOp, Condition, FnDef, PrintStmt, Span, Statement, StatementKind, VarDecl};
use crate::error::{Result, SyntaxError};
use crate::interp::Diagnostic;
use crate::lexer::{Lexeme, Token, join, tokenize, trim};


/// Decide the statement kind from the first word
pub fn classify(tokens: &[Lexeme<'_>]) -> StatementKind {
    match tokens.first().map(|lex| lex.token) {
        Some(Token::Var) => StatementKind::Var,
        Some(Token::Print) => StatementKind::Print,
        Some(Token::If) => StatementKind::If,
        Some(Token::Fun) => StatementKind::Fun,
        _ => StatementKind::Unrecognized,
    }
}

/// Parse one line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Statement>> {
    let line = trim(line);
    if line.is_empty() {
        return Ok(None);
    }
    let tokens = tokenize(line);
    if tokens.is_empty() {
        return Ok(None);
    }

    let parsed = match classify(&tokens) {
        StatementKind::Var => parse_var(&tokens).map(Statement::Var),
        StatementKind::Print => parse_print(&tokens).map(Statement::Print),
        StatementKind::If => parse_if(&tokens[1..]).map(Statement::If),
        StatementKind::Fun => Ok(Statement::Fun(parse_fun(&tokens)?)),
        StatementKind::Unrecognized => Err(Diagnostic::invalid_statement(line)),
    };

    Ok(Some(parsed.unwrap_or_else(Statement::Invalid)))
}

/// `var <name> = <int>`; anything after the value is ignored
pub fn parse_var(tokens: &[Lexeme<'_>]) -> std::result::Result<VarDecl, Diagnostic> {
    if tokens.len() < 4 || !tokens[2].is(Token::Eq) {
        return Err(Diagnostic::invalid_var_decl(&join(tokens)));
    }
    let value = tokens[3]
        .text
        .parse::<i64>()
        .map_err(|_| Diagnostic::invalid_var_value(tokens[3].text))?;

    Ok(VarDecl {
        name: tokens[1].text.to_string(),
        value,
    })
}

/// `print <operand> ...`; the tail is only interpreted at execution time
pub fn parse_print(tokens: &[Lexeme<'_>]) -> std::result::Result<PrintStmt, Diagnostic> {
    if tokens.len() < 2 {
        return Err(Diagnostic::invalid_print(&join(tokens)));
    }

    Ok(PrintStmt {
        operand: tokens[1].text.to_string(),
        tail: tokens[2..].iter().map(|lex| lex.text.to_string()).collect(),
    })
}

/// `<int> <cmp> <int>`, with the `if` keyword already stripped.
///
/// Operands are integer literals only; variables are not resolved here.
pub fn parse_if(tokens: &[Lexeme<'_>]) -> std::result::Result<Condition, Diagnostic> {
    if tokens.len() < 3 {
        return Err(Diagnostic::invalid_if(&join(tokens)));
    }

    let (lhs, rhs) = match (tokens[0].text.parse::<i64>(), tokens[2].text.parse::<i64>()) {
        (Ok(lhs), Ok(rhs)) => (lhs, rhs),
        _ => return Err(Diagnostic::invalid_operands(&join(tokens))),
    };
    let op = CmpOp::from_token(tokens[1].text)
        .ok_or_else(|| Diagnostic::invalid_operator(Some(tokens[1].text)))?;

    Ok(Condition { lhs, op, rhs })
}

/// `fun <name> % <param>* % $ <body>* $`
///
/// Parameters may not be digits only. Body tokens are captured verbatim up to
/// the first closing `$`; tokens after it are ignored.
pub fn parse_fun(tokens: &[Lexeme<'_>]) -> Result<FnDef> {
    let end = Span::point(tokens.last().map_or(0, |lex| lex.span.end));

    if tokens.len() < 3 {
        return Err(SyntaxError::TooShort { span: end });
    }
    let open = &tokens[2];
    if !open.is(Token::Percent) {
        return Err(SyntaxError::ExpectedParamsOpen {
            found: open.text.to_string(),
            span: open.span,
        });
    }

    let rest = &tokens[3..];
    let close = rest.iter().position(|lex| lex.is(Token::Percent));
    let candidates = &rest[..close.unwrap_or(rest.len())];
    if let Some(bad) = candidates.iter().find(|lex| lex.is(Token::Digits)) {
        return Err(SyntaxError::NumericParameter {
            name: bad.text.to_string(),
            span: bad.span,
        });
    }
    let Some(close) = close else {
        return Err(SyntaxError::UnclosedParams {
            position: tokens.len(),
            span: open.span.merge(end),
        });
    };
    let params = candidates.iter().map(|lex| lex.text.to_string()).collect();

    // index of the token that must open the body
    let body_open = 3 + close + 1;
    let dollar = match tokens.get(body_open) {
        Some(lex) if lex.is(Token::Dollar) => lex,
        other => {
            return Err(SyntaxError::ExpectedBodyOpen {
                position: body_open,
                span: other.map_or(end, |lex| lex.span),
            });
        }
    };

    let body_tokens = &tokens[body_open + 1..];
    let Some(body_close) = body_tokens.iter().position(|lex| lex.is(Token::Dollar)) else {
        return Err(SyntaxError::UnclosedBody {
            span: dollar.span.merge(end),
        });
    };

    Ok(FnDef {
        name: tokens[1].text.to_string(),
        params,
        body: body_tokens[..body_close]
            .iter()
            .map(|lex| lex.text.to_string())
            .collect(),
    })
}
