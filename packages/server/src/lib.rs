//! In-memory chat relay server library.
//!
//! Clients post short messages over HTTP; the server keeps them in memory and
//! serves the most recent window, each message decorated with a stable
//! per-user color.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use error::ServerError;
pub use ui::run as run_server;
