// File: src/database/error.rs
// Purpose: Data access error taxonomy

use thiserror::Error;

/// Everything that can go wrong between building a statement and reading
/// its rows back
#[derive(Debug, Error)]
pub enum DbError {
    /// Configuration is missing required fields or is malformed
    #[error("invalid database configuration: {0}")]
    Config(String),

    /// The connection could not be established
    #[error("failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    /// The statement could not be built (missing table, no fields, ...)
    #[error("invalid statement: {0}")]
    Prepare(String),

    /// The driver rejected or failed to run the statement
    #[error("statement failed: {sql}")]
    Execute {
        sql: String,
        #[source]
        source: sqlx::Error,
    },

    /// A column value could not be mapped onto a [`Value`](crate::Value)
    #[error("failed to decode column '{column}'")]
    Decode {
        column: String,
        #[source]
        source: sqlx::Error,
    },

    /// The blocking runtime backing the connection could not be started
    #[error("failed to start database runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
