//! Handler for the `convert` command.

use crate::app;
use crate::cli::{output, ConvertArgs};
use crate::config::Config;
use crate::error::Result;

/// Execute the convert command.
pub fn execute(args: &ConvertArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;

    // Apply CLI overrides
    if let Some(ref input) = args.input {
        config.report.input = input.clone();
    }
    if let Some(ref out) = args.output {
        config.document.output = out.clone();
    }
    if let Some(rows) = args.rows_per_page {
        config.document.rows_per_page = rows;
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    config.validate()?;
    config.init_logging();

    let summary = app::run(&config)?;

    output::ok(&format!(
        "{} trades across {} pages written to '{}'",
        summary.trades,
        summary.pages,
        summary.output.display()
    ));
    Ok(())
}
