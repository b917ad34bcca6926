//! Paired entry/exit trade records.

use rust_decimal::Decimal;

use super::cell::CellValue;

/// Column headers of the rendered report, in output order.
pub const REPORT_COLUMNS: [&str; 13] = [
    "Trade No",
    "Entry Time",
    "Exit Time",
    "Symbol",
    "Type",
    "Volume",
    "Entry Price",
    "Exit Price",
    "Commission",
    "Swap",
    "Profit",
    "Balance",
    "Comment",
];

/// One logical trade: an entry deal merged with its exit deal.
///
/// Symbol, Type, Volume and the entry price/time come from the "in" row;
/// Profit, Balance, Comment and the exit price/time come from the "out" row;
/// Commission and Swap are the sum of both legs.
#[derive(Debug, Clone)]
pub struct Trade {
    /// Sequential 1-based trade number.
    pub no: usize,
    pub entry_time: CellValue,
    pub exit_time: CellValue,
    pub symbol: CellValue,
    pub kind: CellValue,
    pub volume: CellValue,
    pub entry_price: CellValue,
    pub exit_price: CellValue,
    pub commission: Decimal,
    pub swap: Decimal,
    pub profit: CellValue,
    pub balance: CellValue,
    pub comment: CellValue,
}

impl Trade {
    /// Renders the trade as one report row, aligned with [`REPORT_COLUMNS`].
    #[must_use]
    pub fn cells(&self) -> [String; 13] {
        [
            self.no.to_string(),
            self.entry_time.to_string(),
            self.exit_time.to_string(),
            self.symbol.to_string(),
            self.kind.to_string(),
            self.volume.to_string(),
            self.entry_price.to_string(),
            self.exit_price.to_string(),
            self.commission.to_string(),
            self.swap.to_string(),
            self.profit.to_string(),
            self.balance.to_string(),
            self.comment.to_string(),
        ]
    }
}

/// The finished report: trades in pairing order, immutable once built.
#[derive(Debug, Default)]
pub struct TradeReport {
    trades: Vec<Trade>,
}

impl TradeReport {
    #[must_use]
    pub fn new(trades: Vec<Trade>) -> Self {
        Self { trades }
    }

    #[must_use]
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_trade() -> Trade {
        Trade {
            no: 1,
            entry_time: CellValue::Text("2024.01.05 10:30:00".into()),
            exit_time: CellValue::Text("2024.01.05 14:10:00".into()),
            symbol: CellValue::Text("EURUSD".into()),
            kind: CellValue::Text("buy".into()),
            volume: CellValue::Number(0.1),
            entry_price: CellValue::Number(1.0952),
            exit_price: CellValue::Number(1.0987),
            commission: dec!(-5.0),
            swap: dec!(0),
            profit: CellValue::Number(35.0),
            balance: CellValue::Number(10035.0),
            comment: CellValue::Text("tp".into()),
        }
    }

    #[test]
    fn cells_align_with_report_columns() {
        let cells = sample_trade().cells();
        assert_eq!(cells.len(), REPORT_COLUMNS.len());
        assert_eq!(cells[0], "1");
        assert_eq!(cells[3], "EURUSD");
        assert_eq!(cells[8], "-5.0");
        assert_eq!(cells[12], "tp");
    }
}
