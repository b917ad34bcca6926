//! Dealsheet - MT5 tester report to paired trade PDF converter.
//!
//! The tester exports a single worksheet that mixes settings, order history
//! and the deals table. This crate locates the deals table inside that
//! sheet, validates its schema, reconstructs logical trades by pairing the
//! i-th position-opening ("in") row with the i-th position-closing ("out")
//! row, and renders the result as a paginated PDF.
//!
//! # Pipeline
//!
//! Four stages, each consuming the previous stage's output:
//!
//! - [`sheet::locate_deals_header`] - find the header row in the raw grid
//! - [`sheet::parse_deals_table`] - validate the schema and type the rows
//! - [`pair::pair_trades`] - merge entry/exit rows positionally
//! - [`render::render`] - paginate and write the PDF
//!
//! Every stage returns a [`error::Result`]; nothing retries and nothing is
//! emitted on failure.
//!
//! # Modules
//!
//! - [`config`] - TOML configuration and logging setup
//! - [`domain`] - cells, deal rows, paired trades
//! - [`sheet`] - spreadsheet loading, table location, schema validation
//! - [`pair`] - positional entry/exit pairing
//! - [`render`] - PDF pagination and drawing
//! - [`app`] - pipeline orchestration
//! - [`cli`] - command-line interface
//! - [`error`] - error taxonomy

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod pair;
pub mod render;
pub mod sheet;
