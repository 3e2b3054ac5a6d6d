//! Result types returned by store operations

use serde::Serialize;
use serde_json::{Map, Value};

/// A row rendered as a JSON object, keyed by column name in select order
pub type Row = Map<String, Value>;

/// Outcome of a statement that writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExecResult {
    /// Rows changed by the statement
    pub rows_affected: usize,
    /// Rowid assigned by an insert; `None` for updates and deletes
    pub last_insert_id: Option<i64>,
}

impl ExecResult {
    pub fn inserted(rows_affected: usize, id: i64) -> Self {
        Self {
            rows_affected,
            last_insert_id: Some(id),
        }
    }

    pub fn changed(rows_affected: usize) -> Self {
        Self {
            rows_affected,
            last_insert_id: None,
        }
    }

    /// True when nothing matched
    pub fn is_noop(&self) -> bool {
        self.rows_affected == 0
    }
}
