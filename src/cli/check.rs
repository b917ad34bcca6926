//! Handler for `check config`.

use crate::cli::{output, ConfigPathArg};
use crate::config::Config;
use crate::error::Result;

/// Validate a configuration file and print the resolved settings.
pub fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load(&args.config)?;

    output::section("Configuration");
    output::key_value("Input report", config.report.input.display());
    output::key_value("Output document", config.document.output.display());
    output::key_value("Rows per page", config.document.rows_per_page);
    output::key_value("Log level", &config.logging.level);
    output::key_value("Log format", &config.logging.format);
    output::ok("configuration is valid");
    Ok(())
}
