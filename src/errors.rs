//! Error types for cograph-core.

use thiserror::Error;

/// Top-level error type for graph analytics operations.
#[derive(Debug, Error)]
pub enum CographError {
    /// The edge source is missing a required column or holds a bad value.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Power iteration did not settle within its iteration budget.
    #[error("power iteration failed to converge within {iterations} iterations")]
    Convergence {
        /// Number of iterations that were run.
        iterations: usize,
    },

    /// A centrality name that matches no known metric (strict mode only).
    #[error("unknown centrality metric: {0}")]
    UnknownMetric(String),

    /// Configuration-related errors.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error wrapper.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader/writer error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Serde serialization/deserialization error.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for cograph operations.
pub type Result<T> = std::result::Result<T, CographError>;
