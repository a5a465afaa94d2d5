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


//! Run a parsed [`CLIArg`]. The input is read lazily, one line at a time, through a
//! [`OneShot`] source, so `seqx at 3` stops reading after the 4th line and `seqx slice
//! ^10..` holds at most 10 lines in memory.

use std::{cell::RefCell,
          fs::File,
          io::{self, BufRead, BufReader, BufWriter, Lines, Write},
          path::{Path, PathBuf},
          rc::Rc};

use crate::{CLIArg, CLICommand, CommonResult, IndexError, OneShot, element_at_or_none, ok,
            slice};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CliError {
    #[error("Could not open `{}`", .path.display())]
    #[diagnostic(
        code(seq_index::cli::source_unavailable),
        help("Check that the file exists and is readable, or leave out `--file` to read stdin")
    )]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not read line {line_number}")]
    #[diagnostic(
        code(seq_index::cli::read_line),
        help("The input must be valid UTF-8 text")
    )]
    ReadLine {
        line_number: usize,
        #[source]
        source: io::Error,
    },

    #[error("Could not write the output")]
    #[diagnostic(code(seq_index::cli::write_output))]
    WriteOutput {
        #[source]
        source: io::Error,
    },
}

/// Holds the first read error, if any, for the caller to report once the pass is over.
pub type ReadErrorSlot = Rc<RefCell<Option<CliError>>>;

/// The lines of a reader, without their line endings. The first read error ends the
/// iteration and is parked in the [`ReadErrorSlot`].
#[derive(Debug)]
pub struct LineSource<R> {
    lines: Lines<R>,
    line_number: usize,
    read_error: ReadErrorSlot,
    is_done: bool,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R, read_error: ReadErrorSlot) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            read_error,
            is_done: false,
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done {
            return None;
        }
        self.line_number += 1;
        match self.lines.next() {
            Some(Ok(line)) => Some(line),
            Some(Err(source)) => {
                tracing::warn!(line_number = self.line_number, error = %source, "read failed");
                self.is_done = true;
                *self.read_error.borrow_mut() = Some(CliError::ReadLine {
                    line_number: self.line_number,
                    source,
                });
                None
            }
            None => {
                self.is_done = true;
                None
            }
        }
    }
}

/// Open `--file`, or stdin when there is none.
///
/// # Errors
///
/// [`CliError::SourceUnavailable`] if the file can't be opened.
pub fn open_input(maybe_path: Option<&Path>) -> Result<Box<dyn BufRead>, CliError> {
    match maybe_path {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Entry point for the binary: reads the input named by `cli_arg` and writes to stdout.
///
/// # Errors
///
/// See [`run_command`].
pub fn run(cli_arg: &CLIArg) -> CommonResult<()> {
    let input = open_input(cli_arg.global_options.file.as_deref())?;
    let mut output = BufWriter::new(io::stdout().lock());
    run_command(&cli_arg.command, input, &mut output)
}

/// Run `command` over the lines of `input`, writing one line per result to `output`.
///
/// # Errors
///
/// - [`IndexError::OutOfRange`] from `at` without `--or-default`.
/// - [`CliError::ReadLine`] if reading stopped early. Lines of a `slice` before the
///   failure have already been written.
/// - [`CliError::WriteOutput`].
pub fn run_command(
    command: &CLICommand,
    input: impl BufRead,
    output: &mut impl Write,
) -> CommonResult<()> {
    let read_error = ReadErrorSlot::default();
    let source = OneShot::new(LineSource::new(input, read_error.clone()));

    match command {
        CLICommand::At {
            position,
            or_default,
        } => {
            let maybe_line = element_at_or_none(&source, *position);
            take_read_error(&read_error)?;
            let line = match maybe_line {
                Some(line) => line,
                None if *or_default => String::new(),
                None => {
                    return Err(IndexError::OutOfRange {
                        position: *position,
                    }
                    .into());
                }
            };
            write_line(output, &line)?;
        }
        CLICommand::Slice { span } => {
            for line in slice(&source, *span) {
                write_line(output, &line)?;
            }
            take_read_error(&read_error)?;
        }
    }

    output
        .flush()
        .map_err(|source| CliError::WriteOutput { source })?;

    ok!()
}

fn take_read_error(read_error: &ReadErrorSlot) -> Result<(), CliError> {
    match read_error.borrow_mut().take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

fn write_line(output: &mut impl Write, line: &str) -> Result<(), CliError> {
    writeln!(output, "{line}").map_err(|source| CliError::WriteOutput { source })
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{Span, from_end, from_start, try_create_temp_dir};

    const INPUT: &str = "one\ntwo\nthree\nfour\nfive\n";

    fn run_to_string(command: &CLICommand, input: &str) -> CommonResult<String> {
        let mut output = Vec::new();
        run_command(command, Cursor::new(input.as_bytes()), &mut output)?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    #[test_case(from_start(0), "one\n")]
    #[test_case(from_start(4), "five\n")]
    #[test_case(from_end(1), "five\n")]
    #[test_case(from_end(5), "one\n")]
    fn test_at(position: crate::Position, expected: &str) {
        let command = CLICommand::At {
            position,
            or_default: false,
        };
        assert_eq!(run_to_string(&command, INPUT).unwrap(), expected);
    }

    #[test]
    fn test_at_out_of_range() {
        let command = CLICommand::At {
            position: from_end(6),
            or_default: false,
        };
        let error = run_to_string(&command, INPUT).unwrap_err();
        assert_eq!(error.to_string(), "Position ^6 is out of range");

        let command = CLICommand::At {
            position: from_end(6),
            or_default: true,
        };
        assert_eq!(run_to_string(&command, INPUT).unwrap(), "\n");
    }

    #[test_case(Span::new(from_start(1), from_end(1)), "two\nthree\nfour\n")]
    #[test_case(Span::start_at(from_end(2)), "four\nfive\n")]
    #[test_case(Span::from(..2), "one\ntwo\n")]
    #[test_case(Span::from(3..1), "")]
    fn test_slice(span: Span, expected: &str) {
        let command = CLICommand::Slice { span };
        assert_eq!(run_to_string(&command, INPUT).unwrap(), expected);
    }

    #[test]
    fn test_read_error_stops_after_failing_line() {
        // 0xFF is not valid UTF-8.
        let input: &[u8] = b"one\ntwo\n\xFF\nfour\n";
        let read_error = ReadErrorSlot::default();
        let lines: Vec<_> = LineSource::new(input, read_error.clone()).collect();
        assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);
        assert!(matches!(
            read_error.borrow().as_ref(),
            Some(CliError::ReadLine { line_number: 3, .. })
        ));

        let mut output = Vec::new();
        let command = CLICommand::Slice { span: Span::all() };
        let error = run_command(&command, input, &mut output).unwrap_err();
        assert_eq!(error.to_string(), "Could not read line 3");
        assert_eq!(output, b"one\ntwo\n");
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let dir = try_create_temp_dir().unwrap();
        let path = dir.join("missing.txt");
        let error = open_input(Some(path.as_path())).err().unwrap();
        assert!(matches!(error, CliError::SourceUnavailable { .. }));
        assert!(error.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_reads_from_file() {
        let dir = try_create_temp_dir().unwrap();
        let path = dir.join("input.txt");
        std::fs::write(&path, INPUT).unwrap();

        let mut contents = String::new();
        open_input(Some(path.as_path()))
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, INPUT);

        let command = CLICommand::At {
            position: from_end(2),
            or_default: false,
        };
        let mut output = Vec::new();
        run_command(&command, open_input(Some(path.as_path())).unwrap(), &mut output).unwrap();
        assert_eq!(output, b"four\n");
    }
}
