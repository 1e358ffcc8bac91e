//! Error types for RSQL building.

use thiserror::Error;

use crate::ast::LogicalOperator;

/// The main error type for rsql-builder operations.
///
/// The permissive [`build`](crate::build) path never produces one of these;
/// they come from the strict entry points, decoding, and the CLI.
#[derive(Debug, Error)]
pub enum RsqlError {
    /// A comparison has an empty selector.
    #[error("Comparison has an empty selector")]
    EmptySelector,

    /// A comparison has an empty operator token.
    #[error("Comparison on '{selector}' has an empty operator")]
    EmptyComparison { selector: String },

    /// A logical node has no operands.
    #[error("{operator} node has no operands")]
    EmptyOperands { operator: LogicalOperator },

    /// Percent-decoding produced invalid UTF-8.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Expression JSON could not be read.
    #[error("Invalid expression JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RsqlError {
    /// Create an empty-operator error for the given selector.
    pub fn empty_comparison(selector: impl Into<String>) -> Self {
        Self::EmptyComparison {
            selector: selector.into(),
        }
    }
}

/// Result type alias for rsql-builder operations.
pub type RsqlResult<T> = Result<T, RsqlError>;
