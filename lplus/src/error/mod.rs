//! Hard failures and their reporting
//!
//! Only malformed function-definition syntax ends up here. Every other problem
//! with a statement is a soft [`crate::interp::Diagnostic`] written to the
//! session sink.

use crate::ast::Span;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, SyntaxError>;

/// Malformed `fun` statement
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error(
        "Syntax Error: Expected '%' at position 2 in the token array, but the array is too short."
    )]
    TooShort { span: Span },

    #[error("Syntax Error: Expected '%' at position 2 in the token array.")]
    ExpectedParamsOpen { found: String, span: Span },

    #[error("Mismatching Argument: variables cannot be only numbers")]
    NumericParameter { name: String, span: Span },

    #[error("Syntax Error: Expected '%' at position {position} in the token array.")]
    UnclosedParams { position: usize, span: Span },

    #[error("Syntax Error: Expected '$' after token[{position}] in the token array.")]
    ExpectedBodyOpen { position: usize, span: Span },

    #[error("Syntax Error: Expected closing '$' in the token array.")]
    UnclosedBody { span: Span },
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            Self::TooShort { span }
            | Self::ExpectedParamsOpen { span, .. }
            | Self::NumericParameter { span, .. }
            | Self::UnclosedParams { span, .. }
            | Self::ExpectedBodyOpen { span, .. }
            | Self::UnclosedBody { span } => *span,
        }
    }

    /// Short label attached to the offending span
    pub fn label(&self) -> String {
        match self {
            Self::TooShort { .. } => "expected `%` after the function name".to_string(),
            Self::ExpectedParamsOpen { found, .. } => format!("expected `%`, found `{found}`"),
            Self::NumericParameter { name, .. } => {
                format!("parameter `{name}` is only digits")
            }
            Self::UnclosedParams { .. } => "parameter list is never closed with `%`".to_string(),
            Self::ExpectedBodyOpen { .. } => "expected `$` to open the body".to_string(),
            Self::UnclosedBody { .. } => "body is never closed with `$`".to_string(),
        }
    }
}

/// Hard failure raised while running a multi-line block
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct LineError {
    /// 1-based line number within the block
    pub line: usize,
    /// The trimmed line that failed
    pub text: String,
    pub source: SyntaxError,
}

/// Report a hard failure with ariadne on stderr
pub fn report_error(name: &str, source: &str, error: &SyntaxError) -> std::io::Result<()> {
    use ariadne::{Color, Label, Report, ReportKind, Source};

    let range: std::ops::Range<usize> = error.span().into();
    Report::build(ReportKind::Error, (name, range.clone()))
        .with_message(error.to_string())
        .with_label(
            Label::new((name, range))
                .with_message(error.label())
                .with_color(Color::Red),
        )
        .finish()
        .eprint((name, Source::from(source)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wording() {
        let span = Span::new(0, 1);
        assert_eq!(
            SyntaxError::TooShort { span }.to_string(),
            "Syntax Error: Expected '%' at position 2 in the token array, but the array is too short."
        );
        assert_eq!(
            SyntaxError::NumericParameter {
                name: "12".to_string(),
                span
            }
            .to_string(),
            "Mismatching Argument: variables cannot be only numbers"
        );
        assert_eq!(
            SyntaxError::UnclosedParams { position: 6, span }.to_string(),
            "Syntax Error: Expected '%' at position 6 in the token array."
        );
        assert_eq!(
            SyntaxError::ExpectedBodyOpen { position: 4, span }.to_string(),
            "Syntax Error: Expected '$' after token[4] in the token array."
        );
        assert_eq!(
            SyntaxError::UnclosedBody { span }.to_string(),
            "Syntax Error: Expected closing '$' in the token array."
        );
    }

    #[test]
    fn test_span_accessor() {
        let err = SyntaxError::ExpectedParamsOpen {
            found: "(".to_string(),
            span: Span::new(8, 9),
        };
        assert_eq!(err.span(), Span::new(8, 9));
        assert!(err.label().contains('('));
    }

    #[test]
    fn test_line_error_display_and_source() {
        let err = LineError {
            line: 3,
            text: "fun f".to_string(),
            source: SyntaxError::TooShort {
                span: Span::point(5),
            },
        };
        assert!(err.to_string().starts_with("line 3: Syntax Error"));
        let std_err: &dyn std::error::Error = &err;
        assert!(std_err.source().is_some());
    }

    #[test]
    fn test_report_error_does_not_fail() {
        let err = SyntaxError::UnclosedBody {
            span: Span::new(12, 13),
        };
        assert!(report_error("<test>", "fun f % % $ x", &err).is_ok());
    }
}
