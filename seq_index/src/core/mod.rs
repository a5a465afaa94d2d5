// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Building blocks shared by the resolvers and the `seqx` binary: unit types for
//! positions and counts, the bounded ring buffer, error plumbing, and logging setup.

// Attach sources.
pub mod common;
pub mod log;
pub mod units;

// Re-export.
pub use common::*;
pub use log::*;
pub use units::*;
