// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo}};

use crate::{ArrayAccessBoundsStatus, BoundsCheck, Index, Length, Position, idx, len};

/// A half open span of a sequence: `start` is inclusive, `end` is exclusive. Each bound
/// is independently from-start or from-end, so there are four shapes:
///
/// | shape     | example | meaning                                   |
/// |-----------|---------|-------------------------------------------|
/// | `a..b`    | `1..3`  | elements 1 and 2                          |
/// | `a..^b`   | `1..^1` | drop the first element and the last one   |
/// | `^a..b`   | `^3..5` | last 3 elements, but only those before 5  |
/// | `^a..^b`  | `^3..^1`| 3rd and 2nd from last                     |
///
/// A span whose bounds cross, or fall outside the sequence, is not an error. It simply
/// selects nothing.
///
/// ```
/// use seq_index::{Span, from_end, from_start};
///
/// let span = Span::new(from_start(1), from_end(1));
/// assert_eq!(span.to_string(), "1..^1");
/// assert_eq!(Span::from(2..4), Span::new(from_start(2), from_start(4)));
/// assert_eq!(Span::from(..), Span::all());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// The concrete, non-empty, in-bounds result of [`Span::resolve`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ResolvedSpan {
    pub first: Index,
    pub last_inclusive: Index,
}

impl Span {
    pub fn new(arg_start: impl Into<Position>, arg_end: impl Into<Position>) -> Self {
        Self {
            start: arg_start.into(),
            end: arg_end.into(),
        }
    }

    /// `0..^0`, every element.
    #[must_use]
    pub fn all() -> Self { Self::new(Position::start(), Position::end()) }

    /// `start..^0`.
    pub fn start_at(arg_start: impl Into<Position>) -> Self {
        Self::new(arg_start, Position::end())
    }

    /// `0..end`.
    pub fn end_at(arg_end: impl Into<Position>) -> Self {
        Self::new(Position::start(), arg_end)
    }

    /// Resolve both bounds against a known length. Returns [None] when the span selects
    /// nothing: a bound falls before the start or past the end of the sequence, or the
    /// bounds cross.
    #[must_use]
    pub fn resolve(&self, length: Length) -> Option<ResolvedSpan> {
        let first = self.start.resolve(length)?;
        let end_exclusive = self.end.resolve(length)?;
        if end_exclusive.as_usize() == 0 {
            return None;
        }
        let last_inclusive = end_exclusive - len(1);

        if last_inclusive.check_array_access_bounds(length)
            == ArrayAccessBoundsStatus::Overflowed
            || first > last_inclusive
        {
            return None;
        }

        Some(ResolvedSpan {
            first,
            last_inclusive,
        })
    }
}

impl ResolvedSpan {
    /// Number of selected elements, at least 1.
    #[must_use]
    pub fn element_count(&self) -> Length {
        len(self.last_inclusive.as_usize() - self.first.as_usize() + 1)
    }
}

impl Default for Span {
    fn default() -> Self { Self::all() }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}..{}", self.start, self.end) }
}

mod convert_from_std_ranges {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<Range<usize>> for Span {
        fn from(range: Range<usize>) -> Self { Span::new(range.start, range.end) }
    }

    impl From<RangeInclusive<usize>> for Span {
        fn from(range: RangeInclusive<usize>) -> Self {
            let (start, end) = range.into_inner();
            Span::new(start, idx(end.saturating_add(1)))
        }
    }

    impl From<RangeFrom<usize>> for Span {
        fn from(range: RangeFrom<usize>) -> Self { Span::start_at(range.start) }
    }

    impl From<RangeTo<usize>> for Span {
        fn from(range: RangeTo<usize>) -> Self { Span::end_at(range.end) }
    }

    impl From<RangeFull> for Span {
        fn from(_: RangeFull) -> Self { Span::all() }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{from_end, from_start};

    #[test]
    fn test_constructors() {
        assert_eq!(Span::all(), Span::new(from_start(0), from_end(0)));
        assert_eq!(Span::start_at(from_end(2)), Span::new(from_end(2), from_end(0)));
        assert_eq!(Span::end_at(from_end(2)), Span::new(from_start(0), from_end(2)));
        assert_eq!(Span::default(), Span::all());
    }

    #[test]
    fn test_from_std_ranges() {
        assert_eq!(Span::from(1..3), Span::new(from_start(1), from_start(3)));
        assert_eq!(Span::from(1..=3), Span::new(from_start(1), from_start(4)));
        assert_eq!(Span::from(2..), Span::new(from_start(2), from_end(0)));
        assert_eq!(Span::from(..2), Span::new(from_start(0), from_start(2)));
        assert_eq!(Span::from(..), Span::all());
    }

    #[test_case(Span::from(1..3), 5, Some((1, 2)))]
    #[test_case(Span::new(from_start(1), from_end(1)), 5, Some((1, 3)))]
    #[test_case(Span::new(from_end(3), from_start(4)), 5, Some((2, 3)))]
    #[test_case(Span::new(from_end(3), from_end(1)), 5, Some((2, 3)))]
    #[test_case(Span::all(), 5, Some((0, 4)))]
    #[test_case(Span::all(), 0, None)]
    #[test_case(Span::from(2..2), 5, None)]
    #[test_case(Span::from(3..1), 5, None)]
    #[test_case(Span::from(1..6), 5, None)]
    #[test_case(Span::new(from_end(6), from_end(0)), 5, None)]
    #[test_case(Span::new(from_start(0), from_end(5)), 5, None)]
    #[test_case(Span::new(from_start(0), from_end(6)), 5, None)]
    fn test_resolve(span: Span, length: usize, expected: Option<(usize, usize)>) {
        let actual = span
            .resolve(len(length))
            .map(|it| (it.first.as_usize(), it.last_inclusive.as_usize()));
        assert_eq!(actual, expected);
    }

    #[test_case(Span::from(1..4), 10, 3)]
    #[test_case(Span::new(from_end(1), from_end(0)), 10, 1)]
    #[test_case(Span::all(), 10, 10)]
    fn test_resolved_span_element_count(span: Span, length: usize, expected: usize) {
        let resolved = span.resolve(len(length)).unwrap();
        assert_eq!(resolved.element_count(), len(expected));
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::from(1..3).to_string(), "1..3");
        assert_eq!(Span::new(from_end(3), from_end(1)).to_string(), "^3..^1");
        assert_eq!(Span::all().to_string(), "0..^0");
    }
}
