//! PDF rendering of the trade report.
//!
//! One landscape A4 page per chunk of trades: a borderless text grid with a
//! bold header row, 8pt Helvetica, and column widths sized from the longest
//! cell in the chunk. Pagination is a pure function so it can be tested
//! without touching the PDF backend.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use tracing::debug;

use crate::domain::{Trade, TradeReport, REPORT_COLUMNS};
use crate::error::{Error, Result};

const PAGE_WIDTH_MM: f64 = 297.0;
const PAGE_HEIGHT_MM: f64 = 210.0;
const MARGIN_MM: f64 = 8.0;
const CONTENT_WIDTH_MM: f64 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
const ROW_HEIGHT_MM: f64 = 4.6;
const FONT_SIZE_PT: f64 = 8.0;

/// Splits `items` into consecutive chunks of at most `rows_per_page`.
#[must_use]
pub fn paginate<T>(items: &[T], rows_per_page: usize) -> Vec<&[T]> {
    items.chunks(rows_per_page.max(1)).collect()
}

/// Renders the report to `path`, overwriting any existing file.
///
/// Returns the number of pages written. An empty report still produces one
/// page carrying only the header row, so the output is always a valid
/// document.
pub fn render(report: &TradeReport, rows_per_page: usize, path: &Path) -> Result<usize> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Trade Report",
        Mm(PAGE_WIDTH_MM as f32),
        Mm(PAGE_HEIGHT_MM as f32),
        "page 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| Error::Render(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| Error::Render(e.to_string()))?;

    let chunks = paginate(report.trades(), rows_per_page);
    let mut pages = 0;
    if chunks.is_empty() {
        draw_page(&doc.get_page(first_page).get_layer(first_layer), &[], &font, &bold);
        pages = 1;
    } else {
        for (i, chunk) in chunks.iter().enumerate() {
            let layer = if i == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, layer) = doc.add_page(
                    Mm(PAGE_WIDTH_MM as f32),
                    Mm(PAGE_HEIGHT_MM as f32),
                    format!("page {}", i + 1),
                );
                doc.get_page(page).get_layer(layer)
            };
            draw_page(&layer, chunk, &font, &bold);
            pages += 1;
        }
    }
    debug!(pages, "pages laid out");

    let file = File::create(path)
        .map_err(|e| Error::Render(format!("cannot create '{}': {e}", path.display())))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| Error::Render(e.to_string()))?;
    Ok(pages)
}

fn draw_page(
    layer: &PdfLayerReference,
    trades: &[Trade],
    font: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    let mut rows: Vec<[String; 13]> = Vec::with_capacity(trades.len() + 1);
    rows.push(REPORT_COLUMNS.map(str::to_string));
    rows.extend(trades.iter().map(Trade::cells));
    let widths = column_widths(&rows, CONTENT_WIDTH_MM);

    let mut y = PAGE_HEIGHT_MM - MARGIN_MM - ROW_HEIGHT_MM;
    for (row_index, row) in rows.iter().enumerate() {
        let row_font = if row_index == 0 { bold } else { font };
        let mut x = MARGIN_MM;
        for (cell, width) in row.iter().zip(widths) {
            layer.use_text(cell.clone(), FONT_SIZE_PT as f32, Mm(x as f32), Mm(y as f32), row_font);
            x += width;
        }
        y -= ROW_HEIGHT_MM;
    }
}

/// Column widths proportional to the longest cell per column, scaled to the
/// printable width. A one-character floor keeps blank columns visible.
fn column_widths(rows: &[[String; 13]], total_width: f64) -> [f64; 13] {
    let mut units = [1.0_f64; 13];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            units[i] = units[i].max(cell.chars().count() as f64 + 2.0);
        }
    }
    let sum: f64 = units.iter().sum();
    units.map(|u| u / sum * total_width)
}
