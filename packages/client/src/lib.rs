//! Polling CLI client for the relay server.
//!
//! Lines typed at the prompt are posted to `POST /message`; `GET /messages`
//! is polled on an interval and messages not shown yet are printed in their
//! author's color.

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod runner;

// Re-export entry points
pub use config::ClientConfig;
pub use error::ClientError;
pub use runner::run_client;
