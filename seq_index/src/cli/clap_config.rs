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


use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_core::LevelFilter;

use crate::{Position, Span};

/// Where `--enable-logging` writes, relative to the working directory.
pub const LOG_FILE_NAME: &str = "log.txt";

/// Shown under every error report printed by `seqx`.
pub const REPORT_FOOTER: &str =
    "Run the command again with `--enable-logging` and check `log.txt` for details.";

#[derive(Debug, Parser)]
#[command(bin_name = "seqx")]
#[command(about = "🔎 Pick lines out of a file or stdin by position, counting from the start or the end")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  seqx [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'f',
        value_name = "PATH",
        help = "Read lines from this file instead of stdin"
    )]
    pub file: Option<PathBuf>,

    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = LogLevel::Debug,
        help = "How much to log when logging is enabled"
    )]
    pub log_level: LogLevel,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "📍 Print the line at a position\n💡 Eg: `seqx at 0`, `seqx at ^1` for the last line"
    )]
    At {
        #[arg(
            value_name = "POSITION",
            help = "0-based offset from the start, or `^k` for the k-th line from the end"
        )]
        position: Position,

        #[arg(
            long,
            help = "Print an empty line instead of failing when there is no such line"
        )]
        or_default: bool,
    },

    #[clap(
        about = "✂️ Print the lines in a span\n💡 Eg: `seqx slice 2..^1`, `seqx slice ^10..` for the last 10 lines"
    )]
    Slice {
        #[arg(
            value_name = "SPAN",
            help = "`start..end`, start is inclusive and end is exclusive, either side may be omitted"
        )]
        span: Span,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}
