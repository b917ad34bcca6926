//! Pipeline orchestration.
//!
//! The four stages (locate, validate, pair, render) are threaded as
//! explicit values; only loading and rendering touch the filesystem.

use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::{pair, render, sheet};

/// What a successful conversion did, for operator output.
#[derive(Debug)]
pub struct RunSummary {
    pub header_row: usize,
    pub deal_rows: usize,
    pub trades: usize,
    pub pages: usize,
    pub output: PathBuf,
}

/// Runs the full conversion pipeline described by `config`.
pub fn run(config: &Config) -> Result<RunSummary> {
    let input = &config.report.input;
    info!(path = %input.display(), "loading tester report");
    let raw = sheet::load_raw_sheet(input)?;
    info!(rows = raw.len(), "worksheet loaded");

    let header_row = sheet::locate_deals_header(&raw)?;
    info!(header_row, "deals table located");

    let table = sheet::parse_deals_table(&raw, header_row)?;
    info!(deal_rows = table.len(), "deals table validated");

    let report = pair::pair_trades(&table)?;
    info!(trades = report.len(), "trades paired");

    let output = &config.document.output;
    let pages = render::render(&report, config.document.rows_per_page, output)?;
    info!(pages, path = %output.display(), "report written");

    Ok(RunSummary {
        header_row,
        deal_rows: table.len(),
        trades: report.len(),
        pages,
        output: output.clone(),
    })
}
