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

use std::{fmt::Debug, num::TryFromIntError, ops::Sub};

use super::Length;

/// Represents an absolute, 0-based position inside a sequence.
///
/// The relationship between [Index] and [Length] is that:
/// - A Length is 1-based (counts elements)
/// - An Index is 0-based (addresses an element)
/// - The last valid index in a sequence with length L is L-1
///
/// # Examples
///
/// ```
/// use seq_index::{Index, idx};
///
/// let index1 = Index::new(5);
/// let index2 = idx(5);
/// let index3 = Index::from(5_usize);
///
/// assert_eq!(index1, index2);
/// assert_eq!(index2, index3);
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Index(pub usize);

/// Creates a new [Index] from a value that can be converted into an Index.
///
/// This is a convenience function that is equivalent to calling [`Index::new`].
pub fn idx(arg_index: impl Into<Index>) -> Index { arg_index.into() }

impl Debug for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Index({:?})", self.0)
    }
}

mod construct {
    use super::{Index, TryFromIntError};

    impl Index {
        pub fn new(arg_index: impl Into<Index>) -> Self { arg_index.into() }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }
    }

    /// `usize` is the only integer that converts infallibly, so an unsuffixed literal
    /// like `idx(5)` infers as `usize` and a negative literal does not compile.
    impl From<usize> for Index {
        fn from(val: usize) -> Self { Index(val) }
    }

    impl From<Index> for usize {
        fn from(index: Index) -> Self { index.as_usize() }
    }

    /// Signed offsets must be checked, a negative value is an error and never index 0.
    impl TryFrom<isize> for Index {
        type Error = TryFromIntError;

        fn try_from(val: isize) -> Result<Self, Self::Error> {
            usize::try_from(val).map(Index)
        }
    }
}

mod ops {
    use super::{Index, Length, Sub};

    /// Saturates at zero, an [Index] is never negative.
    impl Sub<Length> for Index {
        type Output = Index;

        fn sub(self, rhs: Length) -> Self::Output { Index(self.0.saturating_sub(rhs.0)) }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::len;

    #[test]
    fn test_index_creation() {
        assert_eq!(Index::new(10), idx(10));
        assert_eq!(Index::from(10_usize).as_usize(), 10);
        assert_eq!(usize::from(idx(7)), 7);
    }

    #[test]
    fn test_signed_offsets_are_checked() {
        assert_eq!(Index::try_from(3_isize), Ok(idx(3)));
        assert_eq!(Index::try_from(0_isize), Ok(idx(0)));
        assert!(Index::try_from(-1_isize).is_err());
        assert!(Index::try_from(isize::MIN).is_err());
    }

    #[test]
    fn test_index_minus_length_saturates() {
        assert_eq!(idx(7) - len(3), idx(4));
        assert_eq!(idx(2) - len(3), idx(0));
    }

    #[test]
    fn test_debug_fmt() {
        assert_eq!(format!("{:?}", idx(3)), "Index(3)");
    }
}
