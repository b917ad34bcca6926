//! Handler for the `inspect` command: everything but the PDF.

use tabled::{settings::Style, Table, Tabled};

use crate::cli::{output, InspectArgs};
use crate::config::Config;
use crate::domain::Trade;
use crate::error::Result;
use crate::{pair, sheet};

#[derive(Tabled)]
struct TradePreview {
    #[tabled(rename = "No")]
    no: usize,
    #[tabled(rename = "Entry Time")]
    entry_time: String,
    #[tabled(rename = "Exit Time")]
    exit_time: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Entry")]
    entry_price: String,
    #[tabled(rename = "Exit")]
    exit_price: String,
    #[tabled(rename = "Profit")]
    profit: String,
}

impl From<&Trade> for TradePreview {
    fn from(trade: &Trade) -> Self {
        Self {
            no: trade.no,
            entry_time: trade.entry_time.to_string(),
            exit_time: trade.exit_time.to_string(),
            symbol: trade.symbol.to_string(),
            kind: trade.kind.to_string(),
            volume: trade.volume.to_string(),
            entry_price: trade.entry_price.to_string(),
            exit_price: trade.exit_price.to_string(),
            profit: trade.profit.to_string(),
        }
    }
}

/// Execute the inspect command.
pub fn execute(args: &InspectArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;
    if let Some(ref input) = args.input {
        config.report.input = input.clone();
    }

    let raw = sheet::load_raw_sheet(&config.report.input)?;
    let header_row = sheet::locate_deals_header(&raw)?;
    let table = sheet::parse_deals_table(&raw, header_row)?;
    let (entries, exits) = pair::partition(&table);

    output::section("Deals table");
    output::key_value("Sheet rows", raw.len());
    output::key_value("Header row", header_row);
    output::key_value("Deal rows", table.len());
    output::key_value("Entries", entries.len());
    output::key_value("Exits", exits.len());

    if entries.len() != exits.len() {
        output::warn("entry/exit counts differ; convert will refuse this report");
        return Ok(());
    }

    let report = pair::pair_trades(&table)?;
    output::section("Paired trades");
    let preview: Vec<TradePreview> = report
        .trades()
        .iter()
        .take(args.limit)
        .map(TradePreview::from)
        .collect();
    if preview.is_empty() {
        output::warn("no trades to preview");
    } else {
        let mut table = Table::new(preview);
        table.with(Style::psql());
        println!("{table}");
        if report.len() > args.limit {
            println!("… {} more", report.len() - args.limit);
        }
    }
    Ok(())
}
