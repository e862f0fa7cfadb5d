//! Polling CLI chat client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin relay-client -- --user alice
//! ```

use clap::Parser;
use relay_client::ClientConfig;
use relay_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ClientConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the client
    if let Err(e) = relay_client::run_client(config).await {
        tracing::error!("Client error: {}", e);
        eprintln!("{e}");
        std::process::exit(1);
    }
}
