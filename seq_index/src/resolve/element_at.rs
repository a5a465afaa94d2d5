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

//! Resolve a single [Position] in a [Sequence] to the element it denotes.
//!
//! There are two strategies, picked once per call:
//!
//! 1. **Direct access**: the sequence knows its length and can index into itself, so
//!    both from-start and from-end positions are plain arithmetic plus a bounds check.
//!    Nothing is iterated.
//! 2. **Single pass**: the sequence can only be walked forward once.
//!    - From-start `i` skips `i` elements and takes the next one.
//!    - From-end `^k` walks the whole cursor through a trailing window ([`RingBuffer`])
//!      of capacity `k`. When the walk ends, a full window holds the answer at its front.
//!
//! The result comes in several shapes, see [`element_at`], [`element_at_or_none`],
//! [`element_at_or_default`] and [`element_at_or_else`].

use crate::{BoundsCheck, DirectAccess, Position, RingBuffer, Sequence};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum IndexError {
    #[error("Position {position} is out of range")]
    #[diagnostic(
        code(seq_index::resolve::out_of_range),
        help("From-start positions must be less than the length, from-end positions `^k` need 1 <= k <= length")
    )]
    OutOfRange { position: Position },
}

/// Returns the element at `position`, or [`IndexError::OutOfRange`] if there is none.
///
/// ```
/// use seq_index::{IndexError, element_at, from_end, from_start};
///
/// let items = vec!["a", "b", "c"];
/// assert_eq!(element_at(&items, from_start(1)), Ok(&"b"));
/// assert_eq!(element_at(&items, from_end(1)), Ok(&"c"));
/// assert_eq!(
///     element_at(&items, from_end(0)),
///     Err(IndexError::OutOfRange { position: from_end(0) })
/// );
/// ```
pub fn element_at<S: Sequence>(
    sequence: S,
    arg_position: impl Into<Position>,
) -> Result<S::Item, IndexError> {
    let position: Position = arg_position.into();
    element_at_or_none(sequence, position).ok_or(IndexError::OutOfRange { position })
}

/// Returns the element at `position`, or [None] if there is none. This is the permissive
/// accessor for item types that have no natural default, such as references.
pub fn element_at_or_none<S: Sequence>(
    sequence: S,
    arg_position: impl Into<Position>,
) -> Option<S::Item> {
    let position: Position = arg_position.into();

    if let Some(direct) = sequence.as_direct_access() {
        tracing::debug!(%position, length = ?direct.length(), "element_at: direct access");
        return resolve_direct(direct, position);
    }

    tracing::debug!(%position, "element_at: single pass");
    resolve_single_pass(sequence.cursor(), position)
}

/// Returns the element at `position`, or `Item::default()` if there is none.
///
/// Borrowed items (`&T`) have no default. For those, use
/// `element_at_or_none(..).copied().unwrap_or_default()` or [`element_at_or_else`].
///
/// ```
/// use seq_index::{Unindexed, element_at_or_default, from_end};
///
/// let numbers = Unindexed::new(1..=3);
/// assert_eq!(element_at_or_default(numbers.clone(), from_end(3)), 1);
/// assert_eq!(element_at_or_default(numbers, from_end(4)), 0);
/// ```
pub fn element_at_or_default<S>(sequence: S, arg_position: impl Into<Position>) -> S::Item
where
    S: Sequence,
    S::Item: Default,
{
    element_at_or_none(sequence, arg_position).unwrap_or_default()
}

/// Returns the element at `position`, or whatever `fallback` produces if there is none.
/// `fallback` only runs on a miss.
pub fn element_at_or_else<S: Sequence>(
    sequence: S,
    arg_position: impl Into<Position>,
    fallback: impl FnOnce() -> S::Item,
) -> S::Item {
    element_at_or_none(sequence, arg_position).unwrap_or_else(fallback)
}

/// Arithmetic only, no iteration.
fn resolve_direct<T>(direct: &dyn DirectAccess<Item = T>, position: Position) -> Option<T> {
    let length = direct.length();
    let index = match position {
        Position::FromStart(index) => index,
        // `^0` is one past the end, never an element.
        Position::FromEnd(distance) if distance.is_zero() => return None,
        Position::FromEnd(distance) => length.checked_back(distance)?,
    };
    if index.overflows(length) {
        return None;
    }
    direct.at(index)
}

/// Walk `cursor` at most once to find the element at `position`. The cursor is dropped
/// before this returns.
pub(crate) fn resolve_single_pass<I: Iterator>(
    mut cursor: I,
    position: Position,
) -> Option<I::Item> {
    match position {
        Position::FromStart(index) => cursor.nth(index.as_usize()),
        Position::FromEnd(distance) if distance.is_zero() => None,
        Position::FromEnd(distance) => {
            tracing::trace!(capacity = ?distance, "element_at: trailing window");
            let mut window = RingBuffer::new(distance);
            for item in cursor {
                // The evicted element can no longer be the answer.
                let _evicted = window.add(item);
            }
            // Fewer than `distance` elements were seen.
            if !window.is_full() {
                return None;
            }
            window.remove()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{OneShot, Unindexed, from_end, from_start};

    #[test_case(from_start(0), Some(10))]
    #[test_case(from_start(4), Some(50))]
    #[test_case(from_start(5), None)]
    #[test_case(from_end(1), Some(50))]
    #[test_case(from_end(5), Some(10))]
    #[test_case(from_end(6), None)]
    #[test_case(from_end(0), None)]
    fn test_direct_and_single_pass_agree(position: Position, expected: Option<i32>) {
        let data = [10, 20, 30, 40, 50];

        let direct = element_at_or_none(&data, position).copied();
        let single_pass = element_at_or_none(Unindexed::new(data.iter().copied()), position);
        let one_shot = element_at_or_none(OneShot::new(data), position);

        assert_eq!(direct, expected);
        assert_eq!(single_pass, expected);
        assert_eq!(one_shot, expected);
    }

    #[test]
    fn test_strict_error_names_the_position() {
        let data = vec![1, 2, 3];
        assert_eq!(
            element_at(&data, from_end(4)),
            Err(IndexError::OutOfRange {
                position: from_end(4)
            })
        );
        assert_eq!(
            element_at(&data, 3_usize).unwrap_err().to_string(),
            "Position 3 is out of range"
        );
        assert_eq!(
            element_at(&data, from_end(0)).unwrap_err().to_string(),
            "Position ^0 is out of range"
        );
    }

    #[test]
    fn test_empty_source() {
        let empty: Vec<u8> = vec![];
        for position in [from_start(0), from_end(0), from_end(1)] {
            assert!(element_at(&empty, position).is_err());
            assert_eq!(element_at_or_default(OneShot::new(empty.clone()), position), 0);
        }
    }

    #[test]
    fn test_or_else_only_runs_fallback_on_miss() {
        let calls = Cell::new(0);
        let fallback = || {
            calls.set(calls.get() + 1);
            -1
        };
        let numbers = Unindexed::new(0..3);

        assert_eq!(element_at_or_else(numbers.clone(), from_end(1), fallback), 2);
        assert_eq!(calls.get(), 0);
        assert_eq!(element_at_or_else(numbers, from_end(9), fallback), -1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_borrowed_items_default_via_copied() {
        let data = [7_u32, 8];
        let it = element_at_or_none(&data, from_end(3)).copied().unwrap_or_default();
        assert_eq!(it, 0);
    }

    #[test]
    fn test_from_start_single_pass_stops_pulling() {
        let pulled = Cell::new(0);
        let source = Unindexed::new((0..100).inspect(|_| pulled.set(pulled.get() + 1)));
        assert_eq!(element_at_or_none(source, from_start(3)), Some(3));
        assert_eq!(pulled.get(), 4);
    }

    #[test]
    fn test_re_resolving_is_idempotent() {
        let data = vec!["x", "y", "z"];
        let first = element_at(&data, from_end(2));
        let second = element_at(&data, from_end(2));
        assert_eq!(first, second);
        assert_eq!(first, Ok(&"y"));
    }
}
