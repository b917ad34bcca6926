//! Spreadsheet boundary: loading, table location and schema validation.
//!
//! Tester reports put the deals table somewhere below an arbitrary amount of
//! summary and order data, so nothing above the detected header row is
//! assumed to have structure. The workbook's first sheet is read once into
//! an untyped grid; everything after that is a pure scan over it.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::domain::{CellValue, DealRow, DealsTable, Direction};
use crate::error::{Error, Result};

/// Raw worksheet: rows by columns, untyped, no header assumed.
pub type RawSheet = Vec<Vec<Data>>;

/// Columns the deals table must carry, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "Direction",
    "Time",
    "Symbol",
    "Type",
    "Volume",
    "Price",
    "Commission",
    "Swap",
    "Profit",
    "Balance",
    "Comment",
];

/// Cell values that identify the deals header row (lowercase).
const HEADER_MARKERS: [&str; 3] = ["direction", "time", "symbol"];

/// Reads the first worksheet of the workbook at `path` into a raw grid.
pub fn load_raw_sheet(path: &Path) -> Result<RawSheet> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| Error::file_access(path, e))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::file_access(path, "workbook contains no sheets"))?
        .map_err(|e| Error::file_access(path, e))?;
    let sheet: RawSheet = range.rows().map(<[Data]>::to_vec).collect();
    debug!(rows = sheet.len(), "worksheet loaded");
    Ok(sheet)
}

/// Finds the header row of the deals table.
///
/// Scans top to bottom; the first row whose lowercased cell values contain
/// all of "direction", "time" and "symbol" wins. Later matches are ignored.
pub fn locate_deals_header(sheet: &[Vec<Data>]) -> Result<usize> {
    for (index, row) in sheet.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| cell.to_string().trim().to_lowercase())
            .collect();
        if HEADER_MARKERS
            .iter()
            .all(|marker| cells.iter().any(|cell| cell == marker))
        {
            return Ok(index);
        }
    }
    Err(Error::TableNotFound)
}

/// Column positions of the 11 required columns within the header row.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    pub direction: usize,
    pub time: usize,
    pub symbol: usize,
    pub kind: usize,
    pub volume: usize,
    pub price: usize,
    pub commission: usize,
    pub swap: usize,
    pub profit: usize,
    pub balance: usize,
    pub comment: usize,
}

/// Validates the header row against [`REQUIRED_COLUMNS`].
///
/// Header cells are compared after whitespace trimming. Every missing
/// column is reported at once, in canonical order.
pub fn validate_schema(header: &[Data]) -> Result<ColumnMap> {
    let position = |name: &str| {
        header
            .iter()
            .position(|cell| cell.to_string().trim() == name)
    };

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| position(name).is_none())
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(Error::Schema { missing });
    }

    // The lookups cannot fail past this point.
    let index = |name: &str| position(name).unwrap_or_default();
    Ok(ColumnMap {
        direction: index("Direction"),
        time: index("Time"),
        symbol: index("Symbol"),
        kind: index("Type"),
        volume: index("Volume"),
        price: index("Price"),
        commission: index("Commission"),
        swap: index("Swap"),
        profit: index("Profit"),
        balance: index("Balance"),
        comment: index("Comment"),
    })
}

/// Re-parses the sheet from the header row into a typed [`DealsTable`].
///
/// Rows whose Direction cell is empty or not "in"/"out" are dropped here;
/// the tester report mixes balance lines and section footers into the same
/// region and none of those are deal legs.
pub fn parse_deals_table(sheet: &[Vec<Data>], header_row: usize) -> Result<DealsTable> {
    let header = sheet.get(header_row).map(Vec::as_slice).unwrap_or(&[]);
    let columns = validate_schema(header)?;

    let cell = |row: &[Data], index: usize| {
        row.get(index).map(CellValue::from).unwrap_or(CellValue::Empty)
    };

    let mut rows = Vec::new();
    for row in &sheet[header_row + 1..] {
        let direction_text = row
            .get(columns.direction)
            .map(ToString::to_string)
            .unwrap_or_default();
        let Some(direction) = Direction::parse(&direction_text) else {
            continue;
        };
        rows.push(DealRow {
            direction,
            time: cell(row, columns.time),
            symbol: cell(row, columns.symbol),
            kind: cell(row, columns.kind),
            volume: cell(row, columns.volume),
            price: cell(row, columns.price),
            commission: cell(row, columns.commission),
            swap: cell(row, columns.swap),
            profit: cell(row, columns.profit),
            balance: cell(row, columns.balance),
            comment: cell(row, columns.comment),
        });
    }
    debug!(rows = rows.len(), "deal rows retained");
    Ok(DealsTable::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(cells: &[&str]) -> Vec<Data> {
        cells.iter().map(|c| Data::String((*c).to_string())).collect()
    }

    fn full_header() -> Vec<Data> {
        text_row(&REQUIRED_COLUMNS)
    }

    // --- locator tests ---

    #[test]
    fn locates_first_header_row() {
        let sheet = vec![
            text_row(&["Settings", "Expert"]),
            text_row(&["Orders"]),
            text_row(&["Direction", "Time", "Symbol"]),
            text_row(&["Direction", "Time", "Symbol"]),
        ];
        assert_eq!(locate_deals_header(&sheet).expect("header"), 2);
    }

    #[test]
    fn locator_normalizes_case_and_whitespace() {
        let sheet = vec![text_row(&[" DIRECTION ", "Time", " symbol"])];
        assert_eq!(locate_deals_header(&sheet).expect("header"), 0);
    }

    #[test]
    fn locator_needs_all_three_markers() {
        let sheet = vec![
            text_row(&["Direction", "Time"]),
            text_row(&["Time", "Symbol", "Price"]),
        ];
        assert!(matches!(
            locate_deals_header(&sheet),
            Err(Error::TableNotFound)
        ));
    }

    #[test]
    fn locator_ignores_marker_order_and_extra_cells() {
        let sheet = vec![text_row(&["Time", "Profit", "Symbol", "Direction"])];
        assert_eq!(locate_deals_header(&sheet).expect("header"), 0);
    }

    // --- schema tests ---

    #[test]
    fn schema_accepts_superset_of_required() {
        let mut header = full_header();
        header.push(Data::String("Magic".into()));
        assert!(validate_schema(&header).is_ok());
    }

    #[test]
    fn schema_trims_header_whitespace() {
        let header: Vec<Data> = REQUIRED_COLUMNS
            .iter()
            .map(|c| Data::String(format!("  {c} ")))
            .collect();
        assert!(validate_schema(&header).is_ok());
    }

    #[test]
    fn schema_names_each_missing_column() {
        for (i, removed) in REQUIRED_COLUMNS.iter().enumerate() {
            let mut header = full_header();
            header.remove(i);
            let err = validate_schema(&header).expect_err("missing column accepted");
            match err {
                Error::Schema { missing } => assert_eq!(missing, vec![removed.to_string()]),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn schema_reports_all_missing_columns_at_once() {
        let header = text_row(&["Direction", "Time", "Symbol"]);
        let err = validate_schema(&header).expect_err("partial header accepted");
        match err {
            Error::Schema { missing } => {
                assert_eq!(
                    missing,
                    vec![
                        "Type", "Volume", "Price", "Commission", "Swap", "Profit", "Balance",
                        "Comment"
                    ]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    // --- deals table tests ---

    fn deal_row(direction: &str, symbol: &str) -> Vec<Data> {
        vec![
            Data::String(direction.to_string()),
            Data::String("2024.01.05 10:30:00".to_string()),
            Data::String(symbol.to_string()),
            Data::String("buy".to_string()),
            Data::Float(0.1),
            Data::Float(1.0952),
            Data::Float(-2.5),
            Data::Float(0.0),
            Data::Float(0.0),
            Data::Float(10000.0),
            Data::Empty,
        ]
    }

    #[test]
    fn parse_keeps_only_in_and_out_rows() {
        let sheet = vec![
            text_row(&["Deals"]),
            full_header(),
            deal_row("in", "EURUSD"),
            deal_row("", "GBPUSD"),
            deal_row("balance", "GBPUSD"),
            deal_row("out", "EURUSD"),
        ];
        let table = parse_deals_table(&sheet, 1).expect("table");
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].direction, Direction::In);
        assert_eq!(table.rows()[1].direction, Direction::Out);
    }

    #[test]
    fn parse_reads_cells_through_column_map() {
        // Columns shuffled relative to canonical order.
        let header = text_row(&[
            "Time",
            "Direction",
            "Symbol",
            "Type",
            "Volume",
            "Price",
            "Commission",
            "Swap",
            "Profit",
            "Balance",
            "Comment",
        ]);
        let row = vec![
            Data::String("2024.01.05 10:30:00".into()),
            Data::String("in".into()),
            Data::String("XAUUSD".into()),
            Data::String("sell".into()),
            Data::Float(0.5),
            Data::Float(2031.4),
            Data::Float(-3.0),
            Data::Float(-0.12),
            Data::Float(0.0),
            Data::Float(9990.0),
            Data::String("so far so good".into()),
        ];
        let table = parse_deals_table(&[header, row], 0).expect("table");
        let deal = &table.rows()[0];
        assert_eq!(deal.symbol, CellValue::Text("XAUUSD".into()));
        assert_eq!(deal.time, CellValue::Text("2024.01.05 10:30:00".into()));
        assert_eq!(deal.swap, CellValue::Number(-0.12));
    }

    #[test]
    fn short_rows_pad_with_empty_cells() {
        let sheet = vec![full_header(), text_row(&["out"])];
        let table = parse_deals_table(&sheet, 0).expect("table");
        assert!(table.rows()[0].comment.is_empty());
        assert!(table.rows()[0].profit.is_empty());
    }
}
