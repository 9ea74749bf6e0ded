//! Error types for the table engine.

/// Errors that can occur while building or sampling tables.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    /// An entry weight was negative, NaN, or infinite.
    #[error("invalid weight {0}: weights must be finite and non-negative")]
    InvalidWeight(f64),

    /// A weighted table has entries but their weights sum to zero.
    #[error("cannot pick from {entries} entries with a total weight of zero")]
    EmptyDistribution {
        /// How many entries the table held.
        entries: usize,
    },

    /// A weighted table's weights sum past the largest finite `f64`.
    #[error("cannot pick from {entries} entries: total weight overflows")]
    WeightOverflow {
        /// How many entries the table held.
        entries: usize,
    },

    /// A fallible table condition reported an error.
    #[error("condition failed: {0}")]
    Condition(String),
}

/// Convenience result type for table operations.
pub type TableResult<T> = Result<T, TableError>;
