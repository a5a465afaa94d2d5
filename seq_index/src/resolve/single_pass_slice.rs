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

//! A lazy [Span] over a cursor that can only be walked forward once.
//!
//! The strategy depends on the shape of the span, and it is picked on the first pull:
//!
//! | start  | end     | strategy                                                          |
//! |--------|---------|-------------------------------------------------------------------|
//! | `^s`   | any     | walk everything through a window of `s`, then drain the front     |
//! | `f`    | `e`     | skip `f`, take `e - f`, nothing is pulled past the last one taken |
//! | `f`    | `^0`    | skip `f`, yield the rest as it is pulled                          |
//! | `f`    | `^t`    | skip `f`, yield what falls out of a window of `t`, lagging by `t` |
//!
//! A `^s` start has to see the end of the cursor before the first element can be
//! yielded, so the count is only known then. The span is resolved against that count the
//! same way [`Span::resolve`] does it for direct access.
//!
//! A from-start end on a from-start start stops early if the cursor runs out first, so
//! `2..10` over five elements yields the last three.

use std::{fmt::{Debug, Formatter},
          iter::FusedIterator};

use crate::{Position, RingBuffer, Span, len};

/// Lazily yields the elements of a [Span] from a single-pass cursor. Build it with
/// [`SinglePassSlice::new`] or [`crate::SeqIndexExt::slice_span`].
///
/// The cursor is not touched until the first call to [`Iterator::next`]. The cursor and
/// any buffered elements are dropped as soon as the last element of the span has been
/// yielded, or when this iterator is dropped early.
///
/// ```
/// use seq_index::{SinglePassSlice, from_end, from_start, Span};
///
/// let lines = ["a", "b", "c", "d", "e"].into_iter();
/// let middle = SinglePassSlice::new(lines, Span::new(from_start(1), from_end(1)));
/// assert_eq!(middle.collect::<Vec<_>>(), vec!["b", "c", "d"]);
/// ```
pub struct SinglePassSlice<I: Iterator> {
    state: State<I>,
}

enum State<I: Iterator> {
    Unstarted {
        cursor: I,
        span: Span,
    },
    /// From-start end: yield `remaining` more, then stop.
    Take {
        cursor: I,
        remaining: usize,
    },
    /// `^0` end: yield everything that is left.
    Rest {
        cursor: I,
    },
    /// `^t` end: the window holds the last `t` elements pulled, which are not (yet)
    /// known to be inside the span.
    Lagged {
        cursor: I,
        window: RingBuffer<I::Item>,
    },
    /// From-end start: the cursor is exhausted, yield `remaining` from the window.
    Drain {
        window: RingBuffer<I::Item>,
        remaining: usize,
    },
    Done,
}

impl<I: Iterator> SinglePassSlice<I> {
    pub fn new(cursor: I, arg_span: impl Into<Span>) -> Self {
        Self {
            state: State::Unstarted {
                cursor,
                span: arg_span.into(),
            },
        }
    }

    /// Pick the strategy for `span`, pulling from `cursor` only as much as is needed
    /// before the first element can be yielded.
    fn start(mut cursor: I, span: Span) -> State<I> {
        tracing::debug!(%span, "slice: single pass");

        let first = match span.start {
            Position::FromEnd(distance) => {
                // `^0..` starts one past the end.
                if distance.is_zero() {
                    return State::Done;
                }
                return Self::start_from_end(cursor, span, distance.as_usize());
            }
            Position::FromStart(index) => index.as_usize(),
        };

        if let Position::FromStart(end) = span.end
            && end.as_usize() <= first
        {
            return State::Done;
        }

        if first > 0 && cursor.nth(first - 1).is_none() {
            return State::Done;
        }

        match span.end {
            Position::FromStart(end) => State::Take {
                cursor,
                remaining: end.as_usize() - first,
            },
            Position::FromEnd(distance) if distance.is_zero() => State::Rest { cursor },
            Position::FromEnd(distance) => {
                tracing::trace!(capacity = ?distance, "slice: lagging window");
                State::Lagged {
                    cursor,
                    window: RingBuffer::new(distance),
                }
            }
        }
    }

    fn start_from_end(cursor: I, span: Span, capacity: usize) -> State<I> {
        let mut window = RingBuffer::new(capacity);
        let mut count = 0_usize;
        for item in cursor {
            count += 1;
            let _evicted = window.add(item);
        }

        let Some(resolved) = span.resolve(len(count)) else {
            tracing::trace!(count, "slice: span is empty after the walk");
            return State::Done;
        };
        tracing::trace!(count, ?resolved, "slice: draining window");

        State::Drain {
            window,
            remaining: resolved.element_count().as_usize(),
        }
    }
}

impl<I: Iterator> Iterator for SinglePassSlice<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Any early return below leaves `Done` behind, which drops the cursor and the
            // window.
            match std::mem::replace(&mut self.state, State::Done) {
                State::Unstarted { cursor, span } => {
                    self.state = Self::start(cursor, span);
                }
                State::Take {
                    mut cursor,
                    remaining,
                } => {
                    let item = cursor.next()?;
                    if remaining > 1 {
                        self.state = State::Take {
                            cursor,
                            remaining: remaining - 1,
                        };
                    }
                    return Some(item);
                }
                State::Rest { mut cursor } => {
                    let item = cursor.next()?;
                    self.state = State::Rest { cursor };
                    return Some(item);
                }
                State::Lagged {
                    mut cursor,
                    mut window,
                } => loop {
                    let item = cursor.next()?;
                    if let Some(evicted) = window.add(item) {
                        self.state = State::Lagged { cursor, window };
                        return Some(evicted);
                    }
                },
                State::Drain {
                    mut window,
                    remaining,
                } => {
                    let item = window.remove()?;
                    if remaining > 1 {
                        self.state = State::Drain {
                            window,
                            remaining: remaining - 1,
                        };
                    }
                    return Some(item);
                }
                State::Done => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Unstarted { cursor, .. } => (0, cursor.size_hint().1),
            State::Take { cursor, remaining } => {
                let (lower, upper) = cursor.size_hint();
                (
                    lower.min(*remaining),
                    Some(upper.map_or(*remaining, |it| it.min(*remaining))),
                )
            }
            State::Rest { cursor } => cursor.size_hint(),
            State::Lagged { cursor, window } => {
                let (lower, upper) = cursor.size_hint();
                let pending = window.len().as_usize();
                let lag = window.capacity().as_usize();
                (
                    (lower + pending).saturating_sub(lag),
                    upper.map(|it| (it + pending).saturating_sub(lag)),
                )
            }
            State::Drain { remaining, .. } => (*remaining, Some(*remaining)),
            State::Done => (0, Some(0)),
        }
    }
}

impl<I: Iterator> FusedIterator for SinglePassSlice<I> {}

impl<I: Iterator> Debug for SinglePassSlice<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.state {
            State::Unstarted { span, .. } => {
                f.debug_struct("Unstarted").field("span", span).finish()
            }
            State::Take { remaining, .. } => {
                f.debug_struct("Take").field("remaining", remaining).finish()
            }
            State::Rest { .. } => f.write_str("Rest"),
            State::Lagged { window, .. } => f
                .debug_struct("Lagged")
                .field("lag", &window.capacity())
                .field("pending", &window.len())
                .finish(),
            State::Drain { remaining, .. } => {
                f.debug_struct("Drain").field("remaining", remaining).finish()
            }
            State::Done => f.write_str("Done"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{from_end, from_start};

    /// Counts pulls and records when it is dropped.
    struct Tracked {
        inner: std::ops::Range<i32>,
        pulled: Rc<Cell<usize>>,
        dropped: Rc<Cell<bool>>,
    }

    impl Iterator for Tracked {
        type Item = i32;

        fn next(&mut self) -> Option<i32> {
            let it = self.inner.next()?;
            self.pulled.set(self.pulled.get() + 1);
            Some(it)
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) { self.dropped.set(true); }
    }

    fn tracked(range: std::ops::Range<i32>) -> (Tracked, Rc<Cell<usize>>, Rc<Cell<bool>>) {
        let pulled = Rc::new(Cell::new(0));
        let dropped = Rc::new(Cell::new(false));
        let cursor = Tracked {
            inner: range,
            pulled: pulled.clone(),
            dropped: dropped.clone(),
        };
        (cursor, pulled, dropped)
    }

    fn run(span: Span) -> Vec<i32> { SinglePassSlice::new(1..=5, span).collect() }

    #[test_case(Span::from(1..3), vec![2, 3])]
    #[test_case(Span::from(1..=1), vec![2])]
    #[test_case(Span::from(3..1), vec![])]
    #[test_case(Span::from(2..2), vec![])]
    #[test_case(Span::from(7..9), vec![])]
    #[test_case(Span::from(1..), vec![2, 3, 4, 5])]
    #[test_case(Span::new(from_start(1), from_end(1)), vec![2, 3, 4])]
    #[test_case(Span::new(from_start(3), from_end(3)), vec![])]
    #[test_case(Span::new(from_start(0), from_end(5)), vec![])]
    #[test_case(Span::new(from_end(3), from_end(1)), vec![3, 4])]
    #[test_case(Span::new(from_end(2), from_end(0)), vec![4, 5])]
    #[test_case(Span::new(from_end(5), from_start(2)), vec![1, 2])]
    #[test_case(Span::new(from_end(9), from_end(0)), vec![])]
    #[test_case(Span::new(from_end(0), from_end(0)), vec![])]
    #[test_case(Span::new(from_end(1), from_end(2)), vec![])]
    fn test_shapes(span: Span, expected: Vec<i32>) {
        assert_eq!(run(span), expected);
    }

    #[test]
    fn test_from_start_end_truncates_at_exhaustion() {
        assert_eq!(run(Span::from(2..10)), vec![3, 4, 5]);
    }

    #[test]
    fn test_nothing_pulled_before_first_next() {
        let (cursor, pulled, dropped) = tracked(0..10);
        let slice = SinglePassSlice::new(cursor, Span::from(2..4));
        assert_eq!(pulled.get(), 0);
        drop(slice);
        assert!(dropped.get());
    }

    #[test]
    fn test_take_never_pulls_past_last_yielded() {
        let (cursor, pulled, dropped) = tracked(0..100);
        let mut slice = SinglePassSlice::new(cursor, Span::from(2..5));
        assert_eq!(slice.next(), Some(2));
        assert_eq!(slice.next(), Some(3));
        assert_eq!(slice.next(), Some(4));
        // The cursor is released with the last element.
        assert!(dropped.get());
        assert_eq!(pulled.get(), 5);
        assert_eq!(slice.next(), None);
        assert_eq!(pulled.get(), 5);
    }

    #[test]
    fn test_crossed_bounds_pull_nothing() {
        let (cursor, pulled, dropped) = tracked(0..100);
        let mut slice = SinglePassSlice::new(cursor, Span::from(5..5));
        assert_eq!(slice.next(), None);
        assert_eq!(pulled.get(), 0);
        assert!(dropped.get());
    }

    #[test]
    fn test_lagged_output_trails_input() {
        let (cursor, pulled, _) = tracked(0..10);
        let mut slice = SinglePassSlice::new(cursor, Span::new(from_start(0), from_end(3)));
        assert_eq!(slice.next(), Some(0));
        assert_eq!(pulled.get(), 4);
        assert_eq!(slice.next(), Some(1));
        assert_eq!(pulled.get(), 5);
    }

    #[test]
    fn test_from_end_start_walks_everything_first() {
        let (cursor, pulled, dropped) = tracked(0..10);
        let mut slice = SinglePassSlice::new(cursor, Span::new(from_end(3), from_end(1)));
        assert_eq!(slice.next(), Some(7));
        assert_eq!(pulled.get(), 10);
        assert!(dropped.get());
        assert_eq!(slice.collect::<Vec<_>>(), vec![8]);
    }

    #[test]
    fn test_early_abandon_releases_cursor() {
        let (cursor, _, dropped) = tracked(0..100);
        let mut slice = SinglePassSlice::new(cursor, Span::start_at(1));
        assert_eq!(slice.next(), Some(1));
        assert!(!dropped.get());
        drop(slice);
        assert!(dropped.get());
    }

    #[test]
    fn test_size_hint() {
        let mut slice = SinglePassSlice::new(0..10, Span::from(2..5));
        assert_eq!(slice.size_hint(), (0, Some(10)));
        slice.next();
        assert_eq!(slice.size_hint(), (2, Some(2)));

        let mut slice = SinglePassSlice::new(0..10, Span::new(from_start(0), from_end(3)));
        slice.next();
        assert_eq!(slice.size_hint(), (6, Some(6)));

        let mut slice = SinglePassSlice::new(0..10, Span::new(from_end(4), from_end(1)));
        slice.next();
        assert_eq!(slice.size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_debug_shows_state() {
        let mut slice = SinglePassSlice::new(0..10, Span::from(2..5));
        assert_eq!(
            format!("{slice:?}"),
            "Unstarted { span: Span { start: FromStart(Index(2)), end: FromStart(Index(5)) } }"
        );
        slice.next();
        assert_eq!(format!("{slice:?}"), "Take { remaining: 2 }");
        slice.by_ref().for_each(drop);
        assert_eq!(format!("{slice:?}"), "Done");
    }
}
