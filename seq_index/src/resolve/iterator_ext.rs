// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{IndexError, Position, SinglePassSlice, Span, resolve::element_at::resolve_single_pass};

/// Positional access on any [Iterator], consuming it in a single pass.
///
/// ```
/// use seq_index::{SeqIndexExt, Span, from_end};
///
/// let words = "the quick brown fox".split(' ');
/// assert_eq!(words.clone().at_position(from_end(2)).unwrap(), "brown");
/// assert_eq!(words.clone().at_position_or_none(from_end(5)), None);
///
/// let last_two: Vec<_> = words.slice_span(Span::start_at(from_end(2))).collect();
/// assert_eq!(last_two, vec!["brown", "fox"]);
/// ```
pub trait SeqIndexExt: Iterator + Sized {
    fn at_position(self, arg_position: impl Into<Position>) -> Result<Self::Item, IndexError> {
        let position: Position = arg_position.into();
        resolve_single_pass(self, position).ok_or(IndexError::OutOfRange { position })
    }

    fn at_position_or_none(self, arg_position: impl Into<Position>) -> Option<Self::Item> {
        resolve_single_pass(self, arg_position.into())
    }

    fn at_position_or_default(self, arg_position: impl Into<Position>) -> Self::Item
    where
        Self::Item: Default,
    {
        self.at_position_or_none(arg_position).unwrap_or_default()
    }

    /// Lazy, see [`SinglePassSlice`].
    fn slice_span(self, arg_span: impl Into<Span>) -> SinglePassSlice<Self> {
        SinglePassSlice::new(self, arg_span)
    }
}

impl<I: Iterator> SeqIndexExt for I {}
