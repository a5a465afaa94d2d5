// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cell::RefCell;

use crate::Sequence;

/// A sequence that can be walked exactly once, like lines read from stdin or a socket.
///
/// The first [`Sequence::cursor`] takes the wrapped iterator. Every cursor acquired after
/// that is empty, there is no reset and no replay.
///
/// This uses a [`RefCell`] so it is `!Sync`, a one-shot source is never shared between
/// threads.
///
/// ```
/// use seq_index::{OneShot, Sequence};
///
/// let lines = OneShot::new(["a", "b"]);
/// assert_eq!(lines.cursor().count(), 2);
/// assert_eq!(lines.cursor().count(), 0);
/// assert!(lines.is_consumed());
/// ```
#[derive(Debug)]
pub struct OneShot<I> {
    inner: RefCell<Option<I>>,
}

impl<I: Iterator> OneShot<I> {
    pub fn new(arg_iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            inner: RefCell::new(Some(arg_iter.into_iter())),
        }
    }

    /// True once a cursor has been handed out.
    #[must_use]
    pub fn is_consumed(&self) -> bool { self.inner.borrow().is_none() }
}

/// The cursor of a [`OneShot`], empty if the source was already taken.
#[derive(Debug)]
pub struct OneShotCursor<I> {
    inner: Option<I>,
}

impl<I: Iterator> Iterator for OneShotCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> { self.inner.as_mut()?.next() }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(it) => it.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<I: Iterator> Sequence for OneShot<I> {
    type Item = I::Item;
    type Cursor = OneShotCursor<I>;

    fn cursor(&self) -> Self::Cursor {
        OneShotCursor {
            inner: self.inner.borrow_mut().take(),
        }
    }
}

/// Lets a [Slice](crate::Slice) borrow the source, so the caller can still ask
/// [`OneShot::is_consumed`] afterwards.
impl<I: Iterator> Sequence for &OneShot<I> {
    type Item = I::Item;
    type Cursor = OneShotCursor<I>;

    fn cursor(&self) -> Self::Cursor { <OneShot<I> as Sequence>::cursor(self) }
}
