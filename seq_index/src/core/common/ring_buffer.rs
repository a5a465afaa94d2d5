/*
 *   Copyright (c) 2024-2025 R3BL LLC
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

//! A bounded FIFO ring buffer on the heap whose capacity is chosen at runtime.
//!
//! Adding to a full buffer evicts the oldest item and hands it back to the caller. This
//! is the trailing window used by the single-pass resolvers: with capacity `w` it holds
//! the most recent `w` items seen so far, without knowing when the source will end.
//!
//! ```text
//! capacity = 3, after adding a b c d e:
//!
//!            tail (oldest)      head (next write)
//!               ↓                 ↓
//!   storage: [ d ] [ e ] [ c ]
//!   logical:   c, d, e            (a and b were evicted in order)
//! ```

use crate::{Length, len};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingBuffer<T> {
    internal_storage: Vec<Option<T>>,
    capacity: usize,
    head: usize,
    tail: usize,
    count: usize,
}

impl<T> RingBuffer<T> {
    /// Storage is allocated lazily, one slot per added item, up to `capacity`.
    #[must_use]
    pub fn new(arg_capacity: impl Into<Length>) -> Self {
        let capacity: Length = arg_capacity.into();
        Self {
            internal_storage: Vec::new(),
            capacity: capacity.as_usize(),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> Length { len(self.capacity) }

    #[must_use]
    pub fn len(&self) -> Length { len(self.count) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.count == 0 }

    #[must_use]
    pub fn is_full(&self) -> bool { self.count == self.capacity }

    /// Insert at head (ie, insert the newest item). When the buffer is already full the
    /// oldest item is evicted first and returned. A zero capacity buffer retains nothing,
    /// so `value` itself comes straight back.
    pub fn add(&mut self, value: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(value);
        }

        let evicted = if self.count == self.capacity {
            self.remove()
        } else {
            None
        };

        if self.internal_storage.len() < self.capacity {
            self.internal_storage.push(Some(value));
        } else {
            self.internal_storage[self.head] = Some(value);
        }
        self.head = (self.head + 1) % self.capacity;
        self.count += 1;

        evicted
    }

    /// Remove from tail (ie, remove the oldest item). This is the only way items leave
    /// the buffer, apart from eviction in [`RingBuffer::add`].
    pub fn remove(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }

        let value = self.internal_storage[self.tail].take();
        self.tail = (self.tail + 1) % self.capacity;
        self.count -= 1;
        value
    }
}
