// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Sequence;

/// A re-iterable sequence without direct access. Each [`Sequence::cursor`] is a fresh
/// clone of the wrapped iterator, so every pass starts from the beginning, but the
/// resolvers can only walk it forward.
///
/// This is how you hand something like `data.iter().filter(..)` or `0..n` to the
/// resolvers: its length is unknown until it has been walked.
///
/// ```
/// use seq_index::{Unindexed, element_at, from_end};
///
/// let evens = Unindexed::new((1..=10).filter(|it| it % 2 == 0));
/// assert_eq!(element_at(evens, from_end(2)).unwrap(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct Unindexed<I> {
    inner: I,
}

impl<I: Iterator + Clone> Unindexed<I> {
    pub fn new(arg_iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            inner: arg_iter.into_iter(),
        }
    }
}

impl<I: Iterator + Clone> Sequence for Unindexed<I> {
    type Item = I::Item;
    type Cursor = I;

    fn cursor(&self) -> Self::Cursor { self.inner.clone() }
}
