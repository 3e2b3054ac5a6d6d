//! CLI command implementations
//!
//! Both commands load configuration and install logging before touching
//! the database. `start` closes the store only after the server has
//! drained in-flight requests.

use std::path::Path;

use crate::http_server::HttpServer;
use crate::observability::{init_logging, log_event, log_event_with_detail, Event, ObservabilityError};
use crate::store::Store;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Run a CLI command
pub async fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config, seed } => init(&config, seed),
        Command::Start { config } => start(&config).await,
    }
}

fn load_config(config_path: &Path) -> CliResult<Config> {
    let config = Config::load(config_path)?;
    match init_logging(&config.logging) {
        Ok(()) | Err(ObservabilityError::AlreadyInstalled) => {}
        Err(e) => return Err(e.into()),
    }
    log_event_with_detail(Event::ConfigLoaded, &config_path.display().to_string());
    Ok(config)
}

fn open_store(config: &Config) -> CliResult<Store> {
    let store = Store::open(&config.store_config())?;
    // SQLite reports the path it resolved, which may differ from the configured one
    let opened = store.path()?.unwrap_or_else(|| config.database_path.clone());
    log_event_with_detail(Event::StoreOpened, &opened.display().to_string());

    store.apply_schema()?;
    log_event(Event::SchemaApplied);

    Ok(store)
}

/// Initialize the database file.
///
/// Creates the tables and, with `seed`, loads the sample rows. Running it
/// twice is harmless.
pub fn init(config_path: &Path, seed: bool) -> CliResult<()> {
    let config = load_config(config_path)?;
    let store = open_store(&config)?;

    if seed {
        store.seed()?;
        log_event(Event::SeedLoaded);
    }

    store.close()?;
    log_event(Event::StoreClosed);

    Ok(())
}

/// Start the server and block until shutdown.
///
/// Boot order: config, logging, store, schema, listener.
pub async fn start(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    log_event(Event::BootStart);

    let store = open_store(&config)?;

    let server = HttpServer::new(config.server.clone(), store.clone());
    let served = server
        .start()
        .await
        .map_err(|e| CliError::serve_failed(e.to_string()));

    match store.close() {
        Ok(()) => log_event(Event::StoreClosed),
        Err(e) => log_event_with_detail(Event::StoreCloseFailed, &e.to_string()),
    }

    served?;
    log_event(Event::ShutdownComplete);

    Ok(())
}
