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

//! `seqx at ^1 --file Cargo.toml` prints the last line of a file, `seqx slice ^10..`
//! behaves like `tail`, and `seqx slice 1..^1` drops the first and last lines of stdin.

use clap::Parser;
use seq_index::{CLIArg, CommonResult, LOG_FILE_NAME, REPORT_FOOTER, TracingConfig, ok,
                run, setup_default_miette_global_report_handler};

fn main() -> CommonResult<()> {
    setup_default_miette_global_report_handler(REPORT_FOOTER);

    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        TracingConfig::new_file(LOG_FILE_NAME, cli_arg.global_options.log_level.into())
            .install_global()?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    if let Err(error) = run(&cli_arg) {
        tracing::error!(
            message = "Could not run seqx due to the following problem",
            error = ?error
        );
        return Err(error);
    }

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    ok!()
}
