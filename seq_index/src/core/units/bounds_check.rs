// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Array-style bounds checking of an [Index] against a [Length].
//!
//! ```text
//!                           index=5 (0-based)   index=10 (0-based)
//!                                 ↓                   ↓
//! Index:      0   1   2   3   4   5   6   7   8   9 │ 10  11  12
//! (1-based) ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┼───┬───┬───┐
//!           │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ ✓ │ × │ × │ × │
//!           ├───┴───┴───┴───┴───┴───┴───┴───┴───┴───┼───┴───┴───┤
//!           ├────────── within bounds ──────────────┼─ overflow ┘
//!           └────────── length=10 (1-based) ────────┘
//! ```

use super::{Index, Length};

/// Result of [`BoundsCheck::check_array_access_bounds`].
///
/// # Examples
///
/// ```
/// use seq_index::{BoundsCheck, ArrayAccessBoundsStatus, idx, len};
///
/// assert_eq!(idx(5).check_array_access_bounds(len(10)), ArrayAccessBoundsStatus::Within);
/// assert_eq!(idx(10).check_array_access_bounds(len(10)), ArrayAccessBoundsStatus::Overflowed);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArrayAccessBoundsStatus {
    /// Index can safely access content.
    Within,

    /// Index would exceed the content (`index >= length`).
    Overflowed,
}

pub trait BoundsCheck {
    /// Returns [`ArrayAccessBoundsStatus::Within`] if the index can safely access
    /// content with the given length.
    fn check_array_access_bounds(&self, length: Length) -> ArrayAccessBoundsStatus;

    /// Simple boolean form of [`BoundsCheck::check_array_access_bounds`].
    fn overflows(&self, length: Length) -> bool {
        self.check_array_access_bounds(length) == ArrayAccessBoundsStatus::Overflowed
    }
}

impl BoundsCheck for Index {
    fn check_array_access_bounds(&self, length: Length) -> ArrayAccessBoundsStatus {
        if self.as_usize() < length.as_usize() {
            ArrayAccessBoundsStatus::Within
        } else {
            ArrayAccessBoundsStatus::Overflowed
        }
    }
}
