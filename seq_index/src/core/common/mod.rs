// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shared building blocks. The scratch folder helper in `temp_dir` only exists in unit
//! test builds and is not part of the public API:
//!
//! ```compile_fail
//! let _dir = seq_index::try_create_temp_dir();
//! ```

// Attach sources.
pub mod common_result_and_error;
pub mod miette_setup_global_report_handler;
pub mod ring_buffer;
#[cfg(test)]
pub mod temp_dir;

// Re-export.
pub use common_result_and_error::*;
pub use miette_setup_global_report_handler::*;
pub use ring_buffer::*;
#[cfg(test)]
pub use temp_dir::*;
