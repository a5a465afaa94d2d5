// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parse the textual notation for [Position] and [Span].
//!
//! | input     | result                         |
//! |-----------|--------------------------------|
//! | `3`       | from-start 3                   |
//! | `^1`      | from-end 1 (the last element)  |
//! | `2..^1`   | from-start 2 to from-end 1     |
//! | `^10..`   | the last 10 elements           |
//! | `..3`     | the first 3 elements           |
//! | `..`      | everything                     |

use std::str::FromStr;

use crate::{Position, Span};

pub const FROM_END_MARKER: char = '^';
pub const RANGE_OPERATOR: &str = "..";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ParsePositionError {
    #[error("Position is empty")]
    #[diagnostic(
        code(seq_index::parse::empty),
        help("Use a 0-based offset like `3`, or a distance from the end like `^1`")
    )]
    Empty,

    #[error("Invalid offset `{input}`")]
    #[diagnostic(
        code(seq_index::parse::invalid_offset),
        help("An offset is a non-negative integer, optionally prefixed with `^` to count from the end")
    )]
    InvalidOffset { input: String },

    #[error("Span `{input}` is missing the `..` operator")]
    #[diagnostic(
        code(seq_index::parse::missing_range_operator),
        help("Write a span as `start..end`, either side may be omitted, eg: `2..^1`, `^3..`")
    )]
    MissingRangeOperator { input: String },
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParsePositionError::Empty);
        }

        let (is_from_end, digits) = match trimmed.strip_prefix(FROM_END_MARKER) {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };

        // `usize::from_str` accepts a leading `+`, which isn't part of the notation.
        if !digits.chars().all(|it| it.is_ascii_digit()) || digits.is_empty() {
            return Err(ParsePositionError::InvalidOffset {
                input: trimmed.to_string(),
            });
        }

        let offset = digits
            .parse::<usize>()
            .map_err(|_| ParsePositionError::InvalidOffset {
                input: trimmed.to_string(),
            })?;

        Ok(if is_from_end {
            Position::from_end(offset)
        } else {
            Position::from_start(offset)
        })
    }
}

impl FromStr for Span {
    type Err = ParsePositionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let Some((lhs, rhs)) = trimmed.split_once(RANGE_OPERATOR) else {
            return Err(ParsePositionError::MissingRangeOperator {
                input: trimmed.to_string(),
            });
        };

        let start = match lhs.trim() {
            "" => Position::start(),
            it => it.parse()?,
        };
        let end = match rhs.trim() {
            "" => Position::end(),
            it => it.parse()?,
        };

        Ok(Span { start, end })
    }
}
