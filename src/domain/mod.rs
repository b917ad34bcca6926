//! Domain types: cells, deal rows, paired trades.

pub mod cell;
pub mod deal;
pub mod trade;

pub use cell::CellValue;
pub use deal::{DealRow, DealsTable, Direction};
pub use trade::{Trade, TradeReport, REPORT_COLUMNS};
