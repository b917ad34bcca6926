//! Untyped spreadsheet cell values.

use std::fmt;

use calamine::Data;
use rust_decimal::Decimal;

/// One spreadsheet cell, detached from calamine and owned by the domain.
///
/// Most report columns are opaque passthrough: whatever the broker put in
/// the cell is carried to the rendered document unmodified. Only Commission
/// and Swap are ever interpreted numerically, via [`CellValue::as_decimal`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Interprets the cell as an exact decimal amount.
    ///
    /// Numeric cells convert directly; text cells are parsed after trimming.
    /// Returns `None` for empty cells and text that is not a decimal number.
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(n) => Decimal::try_from(*n).ok(),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Empty => None,
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Self::Empty,
            Data::String(s) => Self::Text(s.clone()),
            Data::Float(f) => Self::Number(*f),
            Data::Int(i) => Self::Number(*i as f64),
            Data::Bool(b) => Self::Text(b.to_string()),
            // Dates, durations and error cells keep calamine's text form.
            other => Self::Text(other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Empty => Ok(()),
        }
    }
}
