//! Command line configuration of the server.

use clap::Parser;

use crate::domain::DEFAULT_HISTORY_WINDOW;

/// In-memory chat relay server
#[derive(Debug, Clone, Parser)]
#[command(name = "relay-server", version, about)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Number of most recent messages served by GET /messages
    #[arg(long, default_value_t = DEFAULT_HISTORY_WINDOW, value_parser = parse_history_window)]
    pub history_window: usize,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// `host:port` to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_history_window(value: &str) -> Result<usize, String> {
    let window: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if window == 0 {
        return Err("history window must be at least 1".to_string());
    }
    Ok(window)
}
