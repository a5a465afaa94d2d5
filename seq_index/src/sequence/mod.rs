// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The source side of the resolvers: the [`Sequence`] and [`DirectAccess`] capability
//! traits, their implementations for std collections, and adapters for plain iterators.

// Attach sources.
pub mod one_shot;
pub mod sequence_trait;
pub mod std_impls;
pub mod unindexed;

// Re-export.
pub use one_shot::*;
pub use sequence_trait::*;
pub use unindexed::*;
