//! # Store
//!
//! Embedded SQLite store for candidates, parties and voters.
//!
//! A [`Store`] is opened once at process start, cloned into every handler
//! through router state and closed explicitly after the server stops. It
//! wraps a single connection behind a mutex; statements run on tokio's
//! blocking pool so request tasks never block on disk I/O.
//!
//! # Operations
//!
//! - `select_all` / `select_by_id`: rows as JSON objects
//! - `insert`: returns the assigned rowid in [`ExecResult`]
//! - `update_by_id` / `delete_by_id`: return the changed row count; zero is
//!   not an error
//!
//! Faults are never retried.

mod errors;
mod resource;
mod result;
pub mod schema;
pub mod sql;

pub use errors::{StoreError, StoreResult};
pub use resource::Resource;
pub use result::{ExecResult, Row};
pub use sql::Field;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rusqlite::Connection;
use tracing::{debug, info};

/// Default busy timeout (ms)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// How the store locates and configures its database
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    pub path: PathBuf,
    /// Busy timeout in milliseconds
    pub busy_timeout_ms: u64,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }

    fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}

/// Shared handle to the election database
#[derive(Debug, Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Opens (creating if needed) the database file and its parent directory.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&config.path)?;
        schema::configure(&conn, config.busy_timeout())?;
        info!(path = %config.path.display(), "connected to the election database");

        Ok(Self::from_connection(conn))
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        schema::configure(&conn, Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Creates any missing tables.
    pub fn apply_schema(&self) -> StoreResult<()> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        schema::apply(&conn)
    }

    /// Loads the sample dataset.
    pub fn seed(&self) -> StoreResult<()> {
        let mut conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        schema::seed(&mut conn)
    }

    pub async fn select_all(&self, resource: Resource) -> StoreResult<Vec<Row>> {
        self.run(move |conn| sql::select_all(conn, resource)).await
    }

    pub async fn select_by_id(&self, resource: Resource, id: impl Into<String>) -> StoreResult<Option<Row>> {
        let id = id.into();
        self.run(move |conn| sql::select_by_id(conn, resource, &id)).await
    }

    pub async fn insert(&self, resource: Resource, fields: Vec<Field>) -> StoreResult<ExecResult> {
        self.run(move |conn| sql::insert(conn, resource, &fields)).await
    }

    pub async fn update_by_id(
        &self,
        resource: Resource,
        id: impl Into<String>,
        fields: Vec<Field>,
    ) -> StoreResult<ExecResult> {
        let id = id.into();
        self.run(move |conn| sql::update_by_id(conn, resource, &id, &fields))
            .await
    }

    pub async fn delete_by_id(&self, resource: Resource, id: impl Into<String>) -> StoreResult<ExecResult> {
        let id = id.into();
        self.run(move |conn| sql::delete_by_id(conn, resource, &id)).await
    }

    /// Round trip used by the health check.
    pub async fn ping(&self) -> StoreResult<()> {
        self.run(|conn| sql::ping(conn)).await
    }

    /// Closes the connection. Fails with [`StoreError::InUse`] while other
    /// clones are still alive.
    ///
    /// After the server stops, a statement started by a request that was
    /// cancelled mid-flight may still hold a clone on the blocking pool. The
    /// close then fails with `InUse` and the connection is released when
    /// that statement finishes.
    pub fn close(self) -> StoreResult<()> {
        let mutex = Arc::try_unwrap(self.conn).map_err(|shared| StoreError::InUse(Arc::strong_count(&shared)))?;
        let conn = mutex.into_inner().map_err(|_| StoreError::LockPoisoned)?;
        conn.close().map_err(|(_, err)| StoreError::Sqlite(err))?;
        debug!("store closed");
        Ok(())
    }

    /// Path of the main database, `None` for in-memory stores.
    pub fn path(&self) -> StoreResult<Option<PathBuf>> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(conn
            .path()
            .filter(|p| !p.is_empty())
            .map(|p| Path::new(p).to_path_buf()))
    }

    async fn run<T, F>(&self, f: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> StoreResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn.lock().map_err(|_| StoreError::LockPoisoned)?;
            f(&mut *guard)
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }
}
