//! election - candidates, parties and voters over a JSON REST API
//!
//! Backed by an embedded SQLite database.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
pub mod validation;
