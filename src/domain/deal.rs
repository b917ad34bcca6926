//! Typed rows of the deals table.

use super::cell::CellValue;

/// Whether a deal row opens or closes a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    /// Parses a Direction cell, case-insensitively.
    ///
    /// Anything other than "in"/"out" (empty cells, balance rows, MT5
    /// "in/out" reversals) yields `None` and the row is not a deal leg.
    #[must_use]
    pub fn parse(cell: &str) -> Option<Self> {
        match cell.trim().to_lowercase().as_str() {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }
}

/// One execution row of the deals table.
///
/// `kind` holds the source "Type" column (buy/sell). All fields other than
/// `direction` are opaque scalars; Commission and Swap are only interpreted
/// when two rows are combined into a trade.
#[derive(Debug, Clone)]
pub struct DealRow {
    pub direction: Direction,
    pub time: CellValue,
    pub symbol: CellValue,
    pub kind: CellValue,
    pub volume: CellValue,
    pub price: CellValue,
    pub commission: CellValue,
    pub swap: CellValue,
    pub profit: CellValue,
    pub balance: CellValue,
    pub comment: CellValue,
}

/// The validated deals table: execution rows in source order.
///
/// Constructed only after schema validation succeeds; rows without a
/// recognized Direction have already been dropped.
#[derive(Debug, Default)]
pub struct DealsTable {
    rows: Vec<DealRow>,
}

impl DealsTable {
    #[must_use]
    pub fn new(rows: Vec<DealRow>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[DealRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
