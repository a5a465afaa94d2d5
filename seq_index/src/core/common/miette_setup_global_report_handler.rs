// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! If you want to change the default global report handler you can do the following:
//! 1. Customize the default global implementation of the `ReportHandler` trait. (Easy).
//! 2. Register a custom error report handler of your own. (Difficult).
//!
//! Background information on miette's architecture:
//! - Miette allows customization how the report is [`Report`](https://docs.rs/miette/latest/miette/struct.Report.html)
//!   displayed to terminal output (stdout, stderr), when the global hook is activated,
//!   due to a program "erroring out", when the top-level miette handler in
//!   `main() -> miette::Result<_>` is activated. This hook is only activated at the time
//!   that the error is displayed, not when it is registered, it is lazy.
//! - Using the [`MietteHandlerOpts`
//!   struct](https://docs.rs/miette/latest/miette/struct.MietteHandlerOpts.html) you can
//!   configure the default `MietteHandler`.

use miette::MietteHandlerOpts;
use tracing::debug;

/// Used when the `COLUMNS` env var isn't set.
pub const DEFAULT_REPORT_WIDTH: usize = 100;

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The report width is read from the `COLUMNS` environment variable just at the time of
/// the global error handler being used. So if an error never occurs, then the width is
/// never looked up. `footer` is printed below every report.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let report_width = {
            let it = std::env::var("COLUMNS")
                .ok()
                .and_then(|columns| columns.trim().parse::<usize>().ok())
                .unwrap_or(DEFAULT_REPORT_WIDTH);
            debug!("miette::set_hook -> report_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(report_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
