use std::path::PathBuf;

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised by the conversion pipeline.
///
/// Every variant is fatal: the run terminates and no partial report is
/// treated as a success. Messages are operator-facing; `main` prints them
/// verbatim and exits nonzero.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot read report '{path}': {reason}")]
    FileAccess { path: PathBuf, reason: String },

    #[error("deals table not found: no row contains the Direction, Time and Symbol headers")]
    TableNotFound,

    #[error("missing columns in the deals table: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("entry/exit count mismatch: {entries} entries vs {exits} exits")]
    TradeMismatch { entries: usize, exits: usize },

    #[error("failed to combine trade {index}: {reason}")]
    TradeCombine { index: usize, reason: String },

    #[error("failed to render report document: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Builds a `FileAccess` error for the given report path.
    pub fn file_access(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::FileAccess {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_enumerates_every_missing_column() {
        let err = Error::Schema {
            missing: vec!["Volume".into(), "Swap".into(), "Comment".into()],
        };
        assert_eq!(
            err.to_string(),
            "missing columns in the deals table: Volume, Swap, Comment"
        );
    }

    #[test]
    fn mismatch_error_reports_both_counts() {
        let err = Error::TradeMismatch {
            entries: 3,
            exits: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("3 entries"));
        assert!(msg.contains("2 exits"));
    }

    #[test]
    fn combine_error_names_the_failing_trade() {
        let err = Error::TradeCombine {
            index: 7,
            reason: "Commission is not numeric: 'n/a'".into(),
        };
        assert!(err.to_string().contains("trade 7"));
    }
}
