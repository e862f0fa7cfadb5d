//! HTTP access to the relay server.

use std::time::Duration;

use relay_server::infrastructure::dto::http::{
    ErrorDto, HealthDto, MessageDto, SubmitMessageRequest,
};

use crate::error::ClientError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Thin wrapper over the relay endpoints
pub struct RelayApi {
    client: reqwest::Client,
    base_url: String,
}

impl RelayApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn health(&self) -> Result<HealthDto, ClientError> {
        let health = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(health)
    }

    /// Post a message stamped with the local send time.
    pub async fn post_message(&self, user: &str, message: &str) -> Result<(), ClientError> {
        let request = SubmitMessageRequest {
            user: user.to_string(),
            message: message.to_string(),
            timestamp: serde_json::Value::String(relay_shared::time::now_iso8601()),
        };

        let response = self
            .client
            .post(format!("{}/message", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() {
            let reason = response
                .json::<ErrorDto>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                reason,
            });
        }
        response.error_for_status()?;
        Ok(())
    }

    /// The server's current window of recent messages, oldest first.
    pub async fn fetch_messages(&self) -> Result<Vec<MessageDto>, ClientError> {
        let messages = self
            .client
            .get(format!("{}/messages", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(messages)
    }
}
