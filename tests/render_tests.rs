use std::fs;

use rust_decimal_macros::dec;
use tempfile::TempDir;

use dealsheet::domain::{CellValue, Trade, TradeReport};
use dealsheet::render;

fn trade(no: usize) -> Trade {
    Trade {
        no,
        entry_time: CellValue::Text("2024.01.05 10:30:00".into()),
        exit_time: CellValue::Text("2024.01.05 14:10:00".into()),
        symbol: CellValue::Text("EURUSD".into()),
        kind: CellValue::Text("buy".into()),
        volume: CellValue::Number(0.1),
        entry_price: CellValue::Number(1.0952),
        exit_price: CellValue::Number(1.0987),
        commission: dec!(-5.0),
        swap: dec!(-0.5),
        profit: CellValue::Number(35.0),
        balance: CellValue::Number(10035.0),
        comment: CellValue::Text("tp".into()),
    }
}

fn report(trades: usize) -> TradeReport {
    TradeReport::new((1..=trades).map(trade).collect())
}

#[test]
fn writes_a_pdf_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("trades.pdf");

    let pages = render::render(&report(3), 40, &path).expect("render");
    assert_eq!(pages, 1);

    let bytes = fs::read(&path).expect("read pdf");
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF"), "output must be a PDF document");
}

#[test]
fn eighty_five_trades_render_three_pages() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("trades.pdf");

    let pages = render::render(&report(85), 40, &path).expect("render");
    assert_eq!(pages, 3);
    assert!(path.exists());
}

#[test]
fn empty_report_still_renders_a_header_page() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("trades.pdf");

    let pages = render::render(&TradeReport::default(), 40, &path).expect("render");
    assert_eq!(pages, 1);
    assert!(fs::read(&path).expect("read pdf").starts_with(b"%PDF"));
}

#[test]
fn overwrites_an_existing_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("trades.pdf");
    fs::write(&path, b"stale content").expect("seed file");

    render::render(&report(1), 40, &path).expect("render");
    let bytes = fs::read(&path).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}
