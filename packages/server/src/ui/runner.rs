//! Router construction and server lifecycle.

use std::{future::Future, sync::Arc};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{config::ServerConfig, error::ServerError};

use super::{
    handler::{get_messages, health_check, not_found, submit_message},
    signal::shutdown_signal,
    state::AppState,
};

/// Build the HTTP router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/messages", get(get_messages).fallback(not_found))
        .route(
            "/message",
            post(submit_message)
                .fallback(not_found)
                .layer(DefaultBodyLimit::disable()),
        )
        .route("/health", get(health_check).fallback(not_found))
        .fallback(not_found)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Bind according to `config` and serve until Ctrl-C or SIGTERM.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    let local_addr = listener
        .local_addr()
        .map(|a| a.to_string())
        .unwrap_or(addr);
    tracing::info!("Chat server running on {}", local_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /messages  - Get recent messages");
    tracing::info!("  POST /message   - Send a message");
    tracing::info!("  GET  /health    - Health check");
    tracing::info!(
        "Server started at: {} (history window: {})",
        relay_shared::time::now_iso8601(),
        config.history_window
    );

    let state = Arc::new(AppState::in_memory(config.history_window));
    serve(listener, state, shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}
