//! # HTTP Server Module
//!
//! JSON API over the election store, combining all endpoint routers into a
//! single Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check (pings the store)
//! - `/candidates`, `/candidate`, `/candidate/:id` - Candidate CRUD
//! - `/parties`, `/party/:id` - Party reads and deletion
//! - `/voters` - Voter listing
//!
//! Request flow: route → required-field validation (writes only) → store →
//! [`Envelope`] or [`ApiError`].

pub mod candidate_routes;
pub mod config;
pub mod envelope;
pub mod errors;
pub mod health_routes;
pub mod party_routes;
pub mod server;
pub mod state;
pub mod voter_routes;

pub use config::HttpServerConfig;
pub use envelope::Envelope;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use state::ApiState;
