//! HTTP API request/response DTOs for the relay.

use serde::{Deserialize, Serialize};

use crate::domain::{Color, ColoredMessage};

/// Body of `POST /message`, shared by the server and the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitMessageRequest {
    pub user: String,
    pub message: String,
    /// Client-side send time, opaque to the server; any JSON value is accepted
    pub timestamp: serde_json::Value,
}

/// One entry of `GET /messages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub user: String,
    pub message: String,
    pub timestamp: String,
    pub server_received: String, // ISO 8601
    pub color: Color,
}

impl From<ColoredMessage> for MessageDto {
    fn from(colored: ColoredMessage) -> Self {
        let ColoredMessage { message, color } = colored;
        Self {
            server_received: message.received_at.to_iso8601(),
            user: message.user.into_string(),
            message: message.message.as_str().to_string(),
            timestamp: message.client_timestamp.as_str().to_string(),
            color,
        }
    }
}

/// `{"status": ...}` acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusDto {
    pub status: String,
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: String, // ISO 8601
}

/// `{"error": ...}` body of client errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
