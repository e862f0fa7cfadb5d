//! Handler modules for HTTP endpoints.

pub mod error;
pub mod http;

pub use error::ApiError;
pub use http::{get_messages, health_check, not_found, submit_message};
