// Rust guideline compliant 2026-08-18

//! Error types for the Treescope core library.

use thiserror::Error;

/// Result type alias for Treescope operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Treescope operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No node matched the id pattern of a search expression.
    ///
    /// The wording mirrors the diagnostic the hosting framework surfaces to
    /// end users, so callers can pass it through unchanged.
    #[error("Invalid search expression - couldn't find id {pattern}. Complete search expression: {expression}")]
    NoMatch {
        /// The id pattern that matched nothing.
        pattern: String,
        /// The full original expression text.
        expression: String,
    },

    /// An `@`-segment named a keyword with no resolver.
    #[error("Invalid search expression - unknown keyword {keyword}. Complete search expression: {expression}")]
    UnknownKeyword {
        /// The unrecognized keyword, including the leading `@`.
        keyword: String,
        /// The full original expression text.
        expression: String,
    },

    /// The expression text itself is malformed.
    #[error("Invalid search expression - {detail}. Complete search expression: {expression}")]
    InvalidExpression {
        /// What is wrong with the expression.
        detail: String,
        /// The full original expression text.
        expression: String,
    },

    /// A keyword resolver could not produce a node from the current set.
    #[error("Invalid search expression - {keyword} {detail}. Complete search expression: {expression}")]
    Unresolvable {
        /// The keyword that failed, including the leading `@`.
        keyword: String,
        /// Why it failed (for example "has no parent here").
        detail: String,
        /// The full original expression text.
        expression: String,
    },

    /// Invalid node data or tree construction misuse.
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    Config(String),
}
