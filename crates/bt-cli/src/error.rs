//! Error types for the command line.

use std::path::PathBuf;

use bt_core::TableError;
use thiserror::Error;

/// Result type for command operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors reported by `bt` before exiting.
#[derive(Debug, Error)]
pub enum CliError {
    /// The definition file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The definition is not valid JSON for the expected shape.
    #[error("invalid definition: {0}")]
    Json(#[from] serde_json::Error),

    /// The definition parsed but describes an impossible table.
    #[error("invalid definition: {0}")]
    Definition(String),

    /// Table construction or sampling failed.
    #[error("{0}")]
    Table(#[from] TableError),

    /// A `--set` argument was not of the form key=value.
    #[error("invalid context assignment '{0}': expected key=value")]
    InvalidContext(String),
}
