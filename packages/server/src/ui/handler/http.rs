//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
};
use serde_json::Value;

use crate::{
    domain::{ClientTimestamp, MessageBody, MessageDraft, UserName},
    infrastructure::dto::http::{HealthDto, MessageDto, StatusDto, SubmitMessageRequest},
    ui::state::AppState,
    usecase::{FetchMessagesUseCase, SubmitMessageUseCase},
};

use super::error::ApiError;

/// Health check endpoint
pub async fn health_check() -> Json<HealthDto> {
    Json(HealthDto {
        status: "healthy".to_string(),
        timestamp: relay_shared::time::now_iso8601(),
    })
}

/// Recent messages, oldest first, each with its author's color
pub async fn get_messages(State(state): State<Arc<AppState>>) -> Json<Vec<MessageDto>> {
    let usecase = FetchMessagesUseCase::new(state.messages.clone(), state.colors.clone());
    let messages = usecase
        .execute(state.history_window)
        .into_iter()
        .map(MessageDto::from)
        .collect();
    Json(messages)
}

/// Accept a new message
pub async fn submit_message(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<StatusDto>, ApiError> {
    let draft = parse_submission(&body)?;

    let usecase = SubmitMessageUseCase::new(state.messages.clone(), state.colors.clone());
    usecase.execute(draft);

    Ok(Json(StatusDto {
        status: "success".to_string(),
    }))
}

/// Unknown paths and methods
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Validate a submission body into a draft.
///
/// `timestamp` is opaque: strings are kept verbatim, other JSON values as their JSON text.
fn parse_submission(body: &[u8]) -> Result<MessageDraft, ApiError> {
    let payload: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Rejected submission with invalid JSON: {}", e);
        ApiError::InvalidJson
    })?;

    if !payload.is_object() {
        tracing::warn!("Rejected submission that is not a JSON object");
        return Err(ApiError::MissingFields);
    }
    let request: SubmitMessageRequest = serde_json::from_value(payload).map_err(|e| {
        tracing::warn!("Rejected submission with missing fields: {}", e);
        ApiError::MissingFields
    })?;

    let user = UserName::new(request.user).map_err(|e| {
        tracing::warn!("Rejected submission: {}", e);
        ApiError::MissingFields
    })?;
    let client_timestamp = match request.timestamp {
        Value::String(text) => text,
        other => other.to_string(),
    };

    Ok(MessageDraft::new(
        user,
        MessageBody::new(request.message),
        ClientTimestamp::new(client_timestamp),
    ))
}
