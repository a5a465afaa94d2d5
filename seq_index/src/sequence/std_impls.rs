// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`Sequence`] and [`DirectAccess`] for borrowed std collections. The items are
//! references into the collection, nothing is cloned.

use std::collections::{VecDeque, vec_deque};

use crate::{DirectAccess, Index, Length, Sequence, len};

mod slice {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<'a, T> DirectAccess for &'a [T] {
        type Item = &'a T;

        fn length(&self) -> Length { len(<[T]>::len(self)) }

        fn at(&self, index: Index) -> Option<Self::Item> {
            let slice: &'a [T] = *self;
            slice.get(index.as_usize())
        }
    }

    impl<'a, T> Sequence for &'a [T] {
        type Item = &'a T;
        type Cursor = std::slice::Iter<'a, T>;

        fn cursor(&self) -> Self::Cursor {
            let slice: &'a [T] = *self;
            slice.iter()
        }

        fn as_direct_access(&self) -> Option<&dyn DirectAccess<Item = Self::Item>> {
            Some(self)
        }
    }
}

mod array {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<'a, T, const N: usize> DirectAccess for &'a [T; N] {
        type Item = &'a T;

        fn length(&self) -> Length { len(N) }

        fn at(&self, index: Index) -> Option<Self::Item> {
            let array: &'a [T; N] = *self;
            array.get(index.as_usize())
        }
    }

    impl<'a, T, const N: usize> Sequence for &'a [T; N] {
        type Item = &'a T;
        type Cursor = std::slice::Iter<'a, T>;

        fn cursor(&self) -> Self::Cursor {
            let array: &'a [T; N] = *self;
            array.iter()
        }

        fn as_direct_access(&self) -> Option<&dyn DirectAccess<Item = Self::Item>> {
            Some(self)
        }
    }
}

mod vec {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<'a, T> DirectAccess for &'a Vec<T> {
        type Item = &'a T;

        fn length(&self) -> Length { len(Vec::len(self)) }

        fn at(&self, index: Index) -> Option<Self::Item> {
            let vec: &'a Vec<T> = *self;
            vec.get(index.as_usize())
        }
    }

    impl<'a, T> Sequence for &'a Vec<T> {
        type Item = &'a T;
        type Cursor = std::slice::Iter<'a, T>;

        fn cursor(&self) -> Self::Cursor {
            let vec: &'a Vec<T> = *self;
            vec.iter()
        }

        fn as_direct_access(&self) -> Option<&dyn DirectAccess<Item = Self::Item>> {
            Some(self)
        }
    }
}

mod vec_deque_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<'a, T> DirectAccess for &'a VecDeque<T> {
        type Item = &'a T;

        fn length(&self) -> Length { len(VecDeque::len(self)) }

        fn at(&self, index: Index) -> Option<Self::Item> {
            let deque: &'a VecDeque<T> = *self;
            deque.get(index.as_usize())
        }
    }

    impl<'a, T> Sequence for &'a VecDeque<T> {
        type Item = &'a T;
        type Cursor = vec_deque::Iter<'a, T>;

        fn cursor(&self) -> Self::Cursor {
            let deque: &'a VecDeque<T> = *self;
            deque.iter()
        }

        fn as_direct_access(&self) -> Option<&dyn DirectAccess<Item = Self::Item>> {
            Some(self)
        }
    }
}
