//! Positional pairing of entry and exit deals into trades.
//!
//! Pairing is strictly positional: the i-th "in" row is merged with the
//! i-th "out" row of the filtered table. The tester export carries no
//! position identifier in its required columns, so there is nothing to key
//! a smarter match on; when the counts disagree the run fails loudly rather
//! than guess. Reordered or multi-leg histories that happen to have equal
//! counts will pair wrong silently — a known limit of the source format.

use tracing::debug;

use crate::domain::{CellValue, DealRow, DealsTable, Direction, Trade, TradeReport};
use crate::error::{Error, Result};

/// Splits the table into entry and exit rows, preserving source order.
#[must_use]
pub fn partition(table: &DealsTable) -> (Vec<&DealRow>, Vec<&DealRow>) {
    let entries = table
        .rows()
        .iter()
        .filter(|row| row.direction == Direction::In)
        .collect();
    let exits = table
        .rows()
        .iter()
        .filter(|row| row.direction == Direction::Out)
        .collect();
    (entries, exits)
}

/// Pairs entries with exits and builds the trade report.
pub fn pair_trades(table: &DealsTable) -> Result<TradeReport> {
    let (entries, exits) = partition(table);
    debug!(entries = entries.len(), exits = exits.len(), "deals partitioned");

    if entries.len() != exits.len() {
        return Err(Error::TradeMismatch {
            entries: entries.len(),
            exits: exits.len(),
        });
    }

    let trades = entries
        .iter()
        .zip(&exits)
        .enumerate()
        .map(|(i, (entry, exit))| combine(i + 1, entry, exit))
        .collect::<Result<Vec<_>>>()?;
    Ok(TradeReport::new(trades))
}

/// Merges one entry/exit pair into a trade record.
///
/// Commission and Swap are summed across both legs; Profit, Balance and
/// Comment come from the exit leg only; everything else from the entry.
fn combine(no: usize, entry: &DealRow, exit: &DealRow) -> Result<Trade> {
    let money = |column: &str, leg: &str, cell: &CellValue| {
        cell.as_decimal().ok_or_else(|| Error::TradeCombine {
            index: no,
            reason: format!("{column} is not numeric on the {leg} leg: '{cell}'"),
        })
    };

    let commission = money("Commission", "entry", &entry.commission)?
        + money("Commission", "exit", &exit.commission)?;
    let swap = money("Swap", "entry", &entry.swap)? + money("Swap", "exit", &exit.swap)?;

    Ok(Trade {
        no,
        entry_time: entry.time.clone(),
        exit_time: exit.time.clone(),
        symbol: entry.symbol.clone(),
        kind: entry.kind.clone(),
        volume: entry.volume.clone(),
        entry_price: entry.price.clone(),
        exit_price: exit.price.clone(),
        commission,
        swap,
        profit: exit.profit.clone(),
        balance: exit.balance.clone(),
        comment: exit.comment.clone(),
    })
}
