// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # seq_index
//!
//! Positional access over any sequence, counting from the start or from the end.
//!
//! - [`element_at`] looks up a single element: `from_start(2)` is the third element,
//!   `from_end(1)` is the last one.
//! - [`slice`] produces a lazy [Slice] for a [Span] like `1..^1` ("drop the first and
//!   the last").
//!
//! Both work on anything that implements [Sequence], and pick a strategy once per call:
//!
//! | source                                  | strategy                                  |
//! |-----------------------------------------|-------------------------------------------|
//! | `&[T]`, `&[T; N]`, `&Vec<T>`, `&VecDeque<T>` | direct access: arithmetic, no iteration   |
//! | [Unindexed], [OneShot], any [Iterator]  | single pass with a bounded trailing window |
//!
//! A single-pass source is walked forward at most once and never buffered in full. To
//! find `from_end(k)` only the last `k` elements seen are kept, in a [RingBuffer]. This
//! makes from-end access work on sources whose length is unknown until they end, like
//! the lines of stdin.
//!
//! ```
//! use seq_index::{SeqIndexExt, Span, element_at, from_end, from_start, slice};
//!
//! let numbers = vec![10, 20, 30, 40, 50];
//! assert_eq!(element_at(&numbers, from_end(2)), Ok(&40));
//!
//! let middle: Vec<_> = slice(&numbers, Span::new(from_start(1), from_end(1)))
//!     .into_iter()
//!     .copied()
//!     .collect();
//! assert_eq!(middle, vec![20, 30, 40]);
//!
//! // Any iterator, consumed in a single pass.
//! let third_from_last = (1..=100).filter(|it| it % 7 == 0).at_position(from_end(3));
//! assert_eq!(third_from_last, Ok(84));
//! ```
//!
//! Out of range positions and spans are not panics: [`element_at`] returns an
//! [`IndexError`], the permissive accessors return [None] or a default, and spans that
//! select nothing produce an empty [Slice].
//!
//! The crate also ships a `seqx` binary that applies [`element_at`] and [`slice`] to the
//! lines of a file or stdin, see [`cli`].

// Enforce strict error handling in production library code only. Tests are allowed to use
// .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod cli;
pub mod core;
pub mod position;
pub mod resolve;
pub mod sequence;

// Re-export.
#[allow(ambiguous_glob_reexports)]
pub use cli::*;
#[allow(ambiguous_glob_reexports)]
pub use core::*;
pub use position::*;
pub use resolve::*;
pub use sequence::*;
