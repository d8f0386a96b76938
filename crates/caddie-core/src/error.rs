use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the caddie pipeline.
#[derive(Error, Debug)]
pub enum CaddieError {
    /// The header row is missing one or more required columns.
    #[error("CSV is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A data row holds a value that cannot be parsed for its column.
    /// The whole ingestion is rejected; partial data is worse than no data
    /// for an analysis session.
    #[error("Malformed value {value:?} in column \"{column}\" at data row {row}")]
    MalformedRow {
        /// 1-based data-row number (header row not counted).
        row: usize,
        column: String,
        value: String,
    },

    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transport-level CSV failure (unbalanced quotes, bad UTF-8, ...).
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The given data path does not exist.
    #[error("Data path not found: {0}")]
    DataPathNotFound(PathBuf),

    /// A directory was given but holds no CSV files.
    #[error("No CSV files found in {0}")]
    NoCsvFiles(PathBuf),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the caddie crates.
pub type Result<T> = std::result::Result<T, CaddieError>;
