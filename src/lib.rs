//! tronlens - TRON wallet lookup service
//!
//! Accepts a TRON wallet address, queries the TronGrid indexing API for
//! balance and resource data, persists the result in PostgreSQL, and returns
//! it to the caller. Previously recorded lookups are served from a paginated
//! read endpoint.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration (gateway, upstream, storage)
//! - [`logging`] - tracing subscriber setup
//! - [`db`] - PostgreSQL connection pool
//! - [`error`] - Request-level error taxonomy and HTTP mapping
//! - [`trongrid`] - TronGrid HTTP client with retry/backoff
//! - [`wallet`] - Domain model, payload normalization, record store
//! - [`service`] - Lookup orchestration
//! - [`gateway`] - axum transport adapter

pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod service;
pub mod trongrid;
pub mod wallet;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use db::Database;
pub use error::LookupError;
pub use service::WalletService;
pub use trongrid::TronGridClient;
pub use wallet::{NewWalletLookup, WalletLookup, WalletStore};
