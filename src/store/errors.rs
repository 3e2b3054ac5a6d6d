//! Store error types
//!
//! Every fault raised below the HTTP layer ends up here. Messages are kept
//! as SQLite reports them so they can be surfaced to clients unchanged.

use std::io;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Statement preparation or execution failed inside SQLite
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A write named a column the resource does not expose
    #[error("no such column: {table}.{column}")]
    UnknownColumn { table: &'static str, column: String },

    /// An update carried no columns to set
    #[error("no columns supplied for update on {0}")]
    EmptyUpdate(&'static str),

    /// The connection mutex was poisoned by a panicking statement
    #[error("store connection lock poisoned")]
    LockPoisoned,

    /// The blocking task running a statement did not complete
    #[error("store task failed: {0}")]
    Task(String),

    /// Filesystem error while preparing the database location
    #[error("database path error: {0}")]
    Io(#[from] io::Error),

    /// Close requested while other handles were still alive
    #[error("store still shared by {0} handles")]
    InUse(usize),
}

impl StoreError {
    /// Whether this error came out of SQLite itself
    pub fn is_sqlite(&self) -> bool {
        matches!(self, StoreError::Sqlite(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_column_message() {
        let err = StoreError::UnknownColumn {
            table: "candidates",
            column: "nickname".to_string(),
        };
        assert_eq!(err.to_string(), "no such column: candidates.nickname");
        assert!(!err.is_sqlite());
    }

    #[test]
    fn test_sqlite_message_passthrough() {
        let err = StoreError::from(rusqlite::Error::InvalidQuery);
        assert!(err.is_sqlite());
        assert_eq!(err.to_string(), rusqlite::Error::InvalidQuery.to_string());
    }
}
