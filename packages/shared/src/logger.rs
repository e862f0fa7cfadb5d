//! Tracing subscriber setup shared by the server and client binaries.

use tracing_subscriber::{
    EnvFilter, fmt::time::ChronoLocal, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Timestamp layout used as the prefix of every log line.
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Build the default filter directives for a binary.
///
/// The binary's own crate, the relay crates and `tower_http` are enabled at `default_level`;
/// everything else stays at the subscriber default (`error`).
pub fn default_directives(bin_name: &str, default_level: &str) -> String {
    let bin_target = bin_name.replace('-', "_");
    [
        bin_target.as_str(),
        "relay_server",
        "relay_client",
        "relay_shared",
        "tower_http",
    ]
    .iter()
    .map(|target| format!("{target}={default_level}"))
    .collect::<Vec<_>>()
    .join(",")
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level` when it is set.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(ChronoLocal::new(LOG_TIME_FORMAT.to_string()))
                .with_target(false),
        )
        .init();
}
