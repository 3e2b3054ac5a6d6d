//! Resource definitions
//!
//! Each resource owns its table name, the columns a write may touch and the
//! read statements used for it. Column names in generated SQL only ever come
//! from these tables.

use std::fmt;

/// Selects candidates joined with the name of their party, if any.
const CANDIDATES_SELECT: &str = "SELECT candidates.*, parties.name AS party_name \
     FROM candidates \
     LEFT JOIN parties ON candidates.party_id = parties.id";

/// An entity type exposed over the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Candidates,
    Parties,
    Voters,
}

impl Resource {
    /// Backing table
    pub const fn table(self) -> &'static str {
        match self {
            Resource::Candidates => "candidates",
            Resource::Parties => "parties",
            Resource::Voters => "voters",
        }
    }

    /// Columns a write is allowed to name
    pub const fn writable_columns(self) -> &'static [&'static str] {
        match self {
            Resource::Candidates => &["first_name", "last_name", "industry_connected", "party_id"],
            Resource::Parties => &["name", "description"],
            Resource::Voters => &["first_name", "last_name", "email"],
        }
    }

    /// Returns the column name as stored if `column` is writable
    pub fn writable(self, column: &str) -> Option<&'static str> {
        self.writable_columns()
            .iter()
            .copied()
            .find(|candidate| *candidate == column)
    }

    /// Statement returning every row
    pub fn select_all_sql(self) -> String {
        match self {
            Resource::Candidates => CANDIDATES_SELECT.to_string(),
            other => format!("SELECT * FROM {}", other.table()),
        }
    }

    /// Statement returning the row whose id matches `?1`
    pub fn select_by_id_sql(self) -> String {
        match self {
            Resource::Candidates => format!("{CANDIDATES_SELECT} WHERE candidates.id = ?1"),
            other => format!("SELECT * FROM {} WHERE id = ?1", other.table()),
        }
    }

    /// Statement run in the same transaction before deleting row `?1`.
    ///
    /// Deleting a party detaches its candidates instead of removing them.
    pub const fn detach_sql(self) -> Option<&'static str> {
        match self {
            Resource::Parties => Some("UPDATE candidates SET party_id = NULL WHERE party_id = ?1"),
            _ => None,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}
