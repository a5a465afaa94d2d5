// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{Index, Length, idx, len};

/// A position in a sequence, counted either from the start or from the end.
///
/// ```text
/// elements:        a    b    c    d    e
/// from start:      0    1    2    3    4    5 (one past the end, a bound only)
/// from end:       ^5   ^4   ^3   ^2   ^1   ^0 (one past the end, a bound only)
/// ```
///
/// - [`Position::FromStart`] holds a 0-based [Index].
/// - [`Position::FromEnd`] holds a 1-based distance ([Length]) back from one past the
///   last element: `^k` is the element that has exactly `k - 1` elements after it. `^0`
///   never denotes an element.
///
/// The textual form used by [Display] and [`std::str::FromStr`] is `3` for from-start and
/// `^3` for from-end.
///
/// # Examples
///
/// ```
/// use seq_index::{Position, from_end, idx, len};
///
/// let last = from_end(1);
/// assert!(last.is_from_end());
/// assert_eq!(last.to_string(), "^1");
/// assert_eq!(last.resolve(len(5)), Some(idx(4)));
///
/// let third = Position::from(2_usize);
/// assert_eq!(third.resolve(len(5)), Some(idx(2)));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Position {
    FromStart(Index),
    FromEnd(Length),
}

/// Creates a from-start [Position], see [`Position::from_start`].
///
/// Offsets are unsigned. A negative literal does not compile, and a signed value has to
/// go through [`Index::try_from`] first:
///
/// ```compile_fail
/// let _ = seq_index::from_start(-1);
/// ```
pub fn from_start(arg_offset: impl Into<Index>) -> Position {
    Position::from_start(arg_offset)
}

/// Creates a from-end [Position], see [`Position::from_end`].
///
/// ```compile_fail
/// let _ = seq_index::from_end(-1);
/// ```
pub fn from_end(arg_offset: impl Into<Length>) -> Position { Position::from_end(arg_offset) }

impl Position {
    pub fn from_start(arg_offset: impl Into<Index>) -> Self {
        Position::FromStart(arg_offset.into())
    }

    pub fn from_end(arg_offset: impl Into<Length>) -> Self {
        Position::FromEnd(arg_offset.into())
    }

    /// The first element, `0`.
    #[must_use]
    pub fn start() -> Self { Position::FromStart(idx(0)) }

    /// One past the last element, `^0`. Only meaningful as the exclusive end of a
    /// [`crate::Span`].
    #[must_use]
    pub fn end() -> Self { Position::FromEnd(len(0)) }

    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Position::FromStart(index) => index.as_usize(),
            Position::FromEnd(distance) => distance.as_usize(),
        }
    }

    #[must_use]
    pub fn is_from_end(&self) -> bool { matches!(self, Position::FromEnd(_)) }

    /// Resolve to an absolute index in a sequence with the given length.
    ///
    /// - A from-start position resolves to itself, even when it lies past the end (bounds
    ///   checking is left to the caller).
    /// - A from-end position `^v` resolves to `length - v`, or [None] if the sequence is
    ///   shorter than `v`.
    ///
    /// The result may be equal to `length`, which is a valid exclusive bound but not an
    /// element.
    #[must_use]
    pub fn resolve(&self, length: Length) -> Option<Index> {
        match self {
            Position::FromStart(index) => Some(*index),
            Position::FromEnd(distance) => length.checked_back(*distance),
        }
    }
}

impl Default for Position {
    fn default() -> Self { Self::start() }
}

impl From<usize> for Position {
    fn from(offset: usize) -> Self { Position::from_start(offset) }
}

impl From<Index> for Position {
    fn from(index: Index) -> Self { Position::FromStart(index) }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Position::FromStart(index) => write!(f, "{}", index.as_usize()),
            Position::FromEnd(distance) => write!(f, "^{}", distance.as_usize()),
        }
    }
}
