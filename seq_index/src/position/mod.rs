// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Value types for addressing a sequence from either end: [`Position`] for a single
//! element and [`Span`] for a half open range of elements.

// Attach sources.
pub mod parse;
pub mod position_type;
pub mod span;

// Re-export.
pub use parse::*;
pub use position_type::*;
pub use span::*;
