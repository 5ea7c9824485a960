use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Failure to load one of the source tables. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed table {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path}, row {row}: {found} fields but the header has {expected}")]
    ExtraFields {
        path: PathBuf,
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("{path} has an empty header row")]
    EmptyHeader { path: PathBuf },

    #[error("{path} declares column '{column}' more than once")]
    DuplicateColumn { path: PathBuf, column: String },

    #[error("{path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },

    #[error("{path}, row {row}: year '{value}' is not an integer")]
    InvalidYear {
        path: PathBuf,
        row: usize,
        value: String,
    },
}

/// Failure to serialise or save an exported view.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("writing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("flushing CSV buffer: {0}")]
    Io(#[from] std::io::Error),
}
