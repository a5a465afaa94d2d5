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

use std::{fmt::{Debug, Formatter},
          iter::FusedIterator};

use crate::{Index, Sequence, SinglePassSlice, Span, idx};

/// A lazy view of the elements of `sequence` that fall inside `span`. Nothing happens
/// when it is created; each iteration runs one fresh pass over the sequence.
///
/// When the sequence has [`crate::DirectAccess`] the span is resolved arithmetically and
/// only the selected elements are visited. Otherwise the pass goes through a
/// [`SinglePassSlice`].
///
/// ```
/// use seq_index::{Span, Unindexed, from_end, slice};
///
/// let data = vec![10, 20, 30, 40, 50];
/// let span = Span::new(from_end(3), from_end(1));
///
/// let direct = slice(&data, span);
/// assert_eq!(direct.iter().copied().collect::<Vec<_>>(), vec![30, 40]);
///
/// let single_pass = slice(Unindexed::new(data.iter().copied()), span);
/// assert_eq!(single_pass.iter().collect::<Vec<_>>(), vec![30, 40]);
///
/// // Re-iterating runs another pass with the same result.
/// assert_eq!(single_pass.iter().count(), 2);
/// ```
pub fn slice<S: Sequence>(sequence: S, arg_span: impl Into<Span>) -> Slice<S> {
    Slice {
        sequence,
        span: arg_span.into(),
    }
}

/// See [slice].
#[derive(Debug, Clone)]
pub struct Slice<S> {
    sequence: S,
    span: Span,
}

impl<S: Sequence> Slice<S> {
    #[must_use]
    pub fn span(&self) -> Span { self.span }

    /// Run a new pass. Needs a [Clone] sequence, which every re-iterable one is (borrowed
    /// collections, [`crate::Unindexed`]).
    #[must_use]
    pub fn iter(&self) -> SliceIter<S>
    where
        S: Clone,
    {
        SliceIter::new(self.sequence.clone(), self.span)
    }
}

impl<S: Sequence> IntoIterator for Slice<S> {
    type Item = S::Item;
    type IntoIter = SliceIter<S>;

    fn into_iter(self) -> Self::IntoIter { SliceIter::new(self.sequence, self.span) }
}

impl<S: Sequence + Clone> IntoIterator for &Slice<S> {
    type Item = S::Item;
    type IntoIter = SliceIter<S>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// One pass over a [Slice].
pub struct SliceIter<S: Sequence> {
    sequence: S,
    state: SliceState<S::Cursor>,
}

enum SliceState<C: Iterator> {
    Unstarted(Span),
    Direct { next: Index, last_inclusive: Index },
    SinglePass(SinglePassSlice<C>),
    Done,
}

impl<S: Sequence> SliceIter<S> {
    fn new(sequence: S, span: Span) -> Self {
        Self {
            sequence,
            state: SliceState::Unstarted(span),
        }
    }

    /// The capability check happens here, once per pass.
    fn start(&self, span: Span) -> SliceState<S::Cursor> {
        match self.sequence.as_direct_access() {
            Some(direct) => {
                let length = direct.length();
                match span.resolve(length) {
                    Some(resolved) => {
                        tracing::debug!(%span, ?length, ?resolved, "slice: direct access");
                        SliceState::Direct {
                            next: resolved.first,
                            last_inclusive: resolved.last_inclusive,
                        }
                    }
                    None => {
                        tracing::debug!(%span, ?length, "slice: direct access, empty");
                        SliceState::Done
                    }
                }
            }
            None => SliceState::SinglePass(SinglePassSlice::new(self.sequence.cursor(), span)),
        }
    }
}

impl<S: Sequence> Iterator for SliceIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let SliceState::Unstarted(span) = self.state {
            self.state = self.start(span);
        }

        match &mut self.state {
            SliceState::Unstarted(_) | SliceState::Done => None,
            SliceState::Direct {
                next,
                last_inclusive,
            } => {
                let index = *next;
                if index == *last_inclusive {
                    self.state = SliceState::Done;
                } else {
                    *next = idx(index.as_usize() + 1);
                }
                self.sequence.as_direct_access()?.at(index)
            }
            SliceState::SinglePass(inner) => {
                let it = inner.next();
                if it.is_none() {
                    self.state = SliceState::Done;
                }
                it
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            SliceState::Unstarted(span) => match self.sequence.as_direct_access() {
                Some(direct) => {
                    let it = span
                        .resolve(direct.length())
                        .map_or(0, |it| it.element_count().as_usize());
                    (it, Some(it))
                }
                None => (0, None),
            },
            SliceState::Direct {
                next,
                last_inclusive,
            } => {
                let it = last_inclusive.as_usize() - next.as_usize() + 1;
                (it, Some(it))
            }
            SliceState::SinglePass(inner) => inner.size_hint(),
            SliceState::Done => (0, Some(0)),
        }
    }
}

impl<S: Sequence> FusedIterator for SliceIter<S> {}

impl<S: Sequence> Debug for SliceIter<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.state {
            SliceState::Unstarted(span) => f.debug_tuple("Unstarted").field(span).finish(),
            SliceState::Direct {
                next,
                last_inclusive,
            } => f
                .debug_struct("Direct")
                .field("next", next)
                .field("last_inclusive", last_inclusive)
                .finish(),
            SliceState::SinglePass(inner) => {
                f.debug_tuple("SinglePass").field(inner).finish()
            }
            SliceState::Done => f.write_str("Done"),
        }
    }
}
