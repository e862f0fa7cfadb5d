//! Client error definitions.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure talking to the server
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered a submission with a client error
    #[error("server rejected the message ({status}): {reason}")]
    Rejected { status: u16, reason: String },

    /// Terminal input failure
    #[error("input error: {0}")]
    Input(#[from] rustyline::error::ReadlineError),

    #[error("input task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
