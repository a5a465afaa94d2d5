/*
 *   Copyright (c) 2022-2025 R3BL LLC
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

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! The library level errors are typed ([`crate::IndexError`],
//! [`crate::ParsePositionError`]); they implement [`miette::Diagnostic`] so they convert
//! into a [`miette::Report`] with `?` wherever a [`CommonResult`] is returned.

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// which are [`std::error::Error`] wrappers.
///
/// # Example
///
/// ```
/// use seq_index::{CommonResult, Position, element_at};
///
/// fn third_from_last(items: &[u8]) -> CommonResult<u8> {
///     let it = element_at(items, Position::from_end(3))?;
///     Ok(*it)
/// }
///
/// assert_eq!(third_from_last(&[1, 2, 3, 4]).unwrap(), 2);
/// assert!(third_from_last(&[1, 2]).is_err());
/// ```
pub type CommonResult<T> = miette::Result<T>;

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
