// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Resolve [Position](crate::Position)s and [Span](crate::Span)s against a
//! [Sequence](crate::Sequence).
//!
//! Every operation checks once, up front, whether the sequence has direct access. If it
//! does, the work is arithmetic. If it doesn't, the sequence is walked forward once with
//! at most a bounded trailing window of elements held in memory.

// Attach sources.
pub mod element_at;
pub mod iterator_ext;
pub mod single_pass_slice;
pub mod slice;

// Re-export.
pub use element_at::{IndexError, element_at, element_at_or_default, element_at_or_else,
                     element_at_or_none};
pub use iterator_ext::*;
pub use single_pass_slice::*;
pub use slice::*;
