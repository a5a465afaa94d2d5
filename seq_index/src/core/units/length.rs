/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::{fmt::Debug, num::TryFromIntError};

use super::{Index, idx};

/// Represents a count of elements, 1-based. Used for sequence lengths and for from-end
/// distances (a from-end distance of `k` is "the element that has `k - 1` elements
/// after it").
///
/// # Examples
///
/// ```
/// use seq_index::{Length, len};
///
/// let length1 = Length::new(10);
/// let length2 = len(10);
///
/// assert_eq!(length1, length2);
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Length(pub usize);

/// Creates a new [Length] from a value that can be converted into a Length.
///
/// This is a convenience function that is equivalent to calling [`Length::new`].
pub fn len(arg_length: impl Into<Length>) -> Length { arg_length.into() }

impl Debug for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Length({:?})", self.0)
    }
}

mod impl_core {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Length {
        pub fn new(arg_length: impl Into<Length>) -> Self { arg_length.into() }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }

        #[must_use]
        pub fn is_zero(&self) -> bool { self.0 == 0 }

        /// Returns the index that is `distance` elements back from one past the end of a
        /// sequence with this length, or [None] if the sequence is too short.
        #[must_use]
        pub fn checked_back(&self, distance: Length) -> Option<Index> {
            self.0.checked_sub(distance.0).map(idx)
        }
    }
}

mod impl_from_numeric {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    /// The only infallible integer conversion, see [`Index`] for why.
    impl From<usize> for Length {
        fn from(val: usize) -> Self { Length(val) }
    }

    impl From<Length> for usize {
        fn from(length: Length) -> Self { length.0 }
    }

    /// A negative distance is an error, it never becomes `^0`.
    impl TryFrom<isize> for Length {
        type Error = TryFromIntError;

        fn try_from(val: isize) -> Result<Self, Self::Error> {
            usize::try_from(val).map(Length)
        }
    }
}
