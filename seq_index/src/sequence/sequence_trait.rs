// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Index, Length};

/// Random access capability: the element count and the element at any absolute index,
/// both without walking the sequence.
pub trait DirectAccess {
    type Item;

    fn length(&self) -> Length;

    /// Returns [None] when `index` is out of bounds.
    fn at(&self, index: Index) -> Option<Self::Item>;
}

/// A source of elements for the resolvers.
///
/// Every sequence can hand out a one-shot forward [`Sequence::Cursor`]. The cursor is an
/// ordinary [Iterator], so releasing it is scoped: dropping it (on completion, early
/// abandonment, or unwinding) releases whatever it holds.
///
/// Sequences that can also answer "how many" and "which one is at `i`" cheaply expose
/// that through [`Sequence::as_direct_access`]. The resolvers ask once at the start of an
/// operation and take the arithmetic fast path when it is available.
///
/// | Implementation            | Direct access | Cursor                               |
/// |---------------------------|---------------|--------------------------------------|
/// | `&[T]`, `&[T; N]`         | yes           | [`std::slice::Iter`]                 |
/// | `&Vec<T>`                 | yes           | [`std::slice::Iter`]                 |
/// | `&VecDeque<T>`            | yes           | [`std::collections::vec_deque::Iter`]|
/// | [`crate::Unindexed`]      | no            | a fresh clone of the iterator        |
/// | [`crate::OneShot`], `&OneShot` | no        | the iterator itself, once            |
pub trait Sequence {
    type Item;
    type Cursor: Iterator<Item = Self::Item>;

    /// Acquire a one-shot forward cursor. Each call starts a new pass, if the underlying
    /// source supports more than one.
    fn cursor(&self) -> Self::Cursor;

    /// View this sequence as a [`DirectAccess`] collection, if it is one.
    fn as_direct_access(&self) -> Option<&dyn DirectAccess<Item = Self::Item>> { None }
}
