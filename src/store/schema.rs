//! Schema and seed data
//!
//! Both scripts are idempotent: tables are created only when missing and
//! seed rows carry fixed ids inserted with `OR IGNORE`.

use std::time::Duration;

use rusqlite::Connection;

use super::errors::StoreResult;

/// Table definitions for parties, candidates and voters
pub const SCHEMA_SQL: &str = include_str!("../../db/schema.sql");

/// Sample parties, candidates and voters
pub const SEED_SQL: &str = include_str!("../../db/seeds.sql");

/// Connection settings applied on open.
///
/// Foreign-key enforcement is left off: a candidate may point at a party id
/// that does not exist, and party deletion detaches candidates explicitly.
pub fn configure(conn: &Connection, busy_timeout: Duration) -> StoreResult<()> {
    conn.busy_timeout(busy_timeout)?;
    conn.pragma_update(None, "foreign_keys", "OFF")?;
    Ok(())
}

/// Creates any missing tables.
pub fn apply(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Loads the seed rows.
pub fn seed(conn: &mut Connection) -> StoreResult<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(SEED_SQL)?;
    tx.commit()?;
    Ok(())
}
