use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or converting a coefficient table.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Please define a file to read pipe-delimited values from")]
    MissingInput,

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed delimited record in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("table has no header row")]
    MissingHeader,

    #[error("header columns {columns:?} match no known table shape")]
    ShapeNotRecognized { columns: Vec<String> },

    #[error("header columns {columns:?} match both emissivity and water vapour shapes")]
    AmbiguousShape { columns: Vec<String> },

    #[error("line {line} ('{key}'): expected at least {expected} cells, found {found}")]
    ShortRow {
        line: usize,
        key: String,
        expected: usize,
        found: usize,
    },
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
