//! In-memory chat relay server.
//!
//! Accepts messages on `POST /message` and serves the most recent ones on
//! `GET /messages`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin relay-server -- --port 8080
//! ```

use clap::Parser;
use relay_server::ServerConfig;
use relay_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = relay_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
