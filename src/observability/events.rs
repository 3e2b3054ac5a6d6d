//! Process lifecycle events
//!
//! Events are explicit and typed so every milestone is logged under a
//! stable name.

use std::fmt;

/// Observable lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Database connection opened
    StoreOpened,
    /// Tables created or confirmed present
    SchemaApplied,
    /// Seed rows loaded
    SeedLoaded,
    /// Listener bound, serving requests
    ServerListening,

    // Shutdown
    /// Shutdown signal received
    ShutdownStart,
    /// Database connection released
    StoreClosed,
    /// Store could not be closed cleanly
    StoreCloseFailed,
    /// Shutdown complete
    ShutdownComplete,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreOpened => "STORE_OPENED",
            Event::SchemaApplied => "SCHEMA_APPLIED",
            Event::SeedLoaded => "SEED_LOADED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::StoreClosed => "STORE_CLOSED",
            Event::StoreCloseFailed => "STORE_CLOSE_FAILED",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
        }
    }

    /// Whether this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::StoreCloseFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
