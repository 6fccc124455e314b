//! Source location tracking

use serde::{Deserialize, Serialize};

/// A byte range within one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `offset`, used when a construct ends early
    pub fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_merge() {
        let a = Span::new(4, 6);
        let b = Span::new(0, 2);
        assert_eq!(a.merge(b), Span::new(0, 6));
        assert_eq!(b.merge(a), Span::new(0, 6));
    }

    #[test]
    fn test_span_point() {
        let p = Span::point(7);
        assert_eq!(p.start, 7);
        assert_eq!(p.end, 7);
    }

    #[test]
    fn test_span_display() {
        assert_eq!(format!("{}", Span::new(3, 9)), "3..9");
    }

    #[test]
    fn test_span_range_conversion() {
        let range: std::ops::Range<usize> = Span::new(1, 5).into();
        assert_eq!(range, 1..5);
        assert_eq!(Span::from(2..3), Span::new(2, 3));
    }
}
