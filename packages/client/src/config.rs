//! Command line configuration of the client.

use clap::{Parser, builder::NonEmptyStringValueParser};

/// Polling chat client for the relay server
#[derive(Debug, Clone, Parser)]
#[command(name = "relay-client", version, about)]
pub struct ClientConfig {
    /// Base URL of the relay server
    #[arg(long, default_value = "http://localhost:8080")]
    pub url: String,

    /// Name shown next to your messages
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub user: String,

    /// Polling interval in milliseconds
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(100..))]
    pub interval_ms: u64,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_is_required() {
        // テスト項目: --user は必須
        assert!(ClientConfig::try_parse_from(["relay-client"]).is_err());
        assert!(ClientConfig::try_parse_from(["relay-client", "--user", ""]).is_err());
    }

    #[test]
    fn test_defaults() {
        // テスト項目: --user 以外はデフォルト値が使われる
        let config = ClientConfig::try_parse_from(["relay-client", "-u", "alice"]).unwrap();

        assert_eq!(config.user, "alice");
        assert_eq!(config.url, "http://localhost:8080");
        assert_eq!(config.interval_ms, 1000);
    }

    #[test]
    fn test_interval_lower_bound() {
        // テスト項目: 100ms 未満のポーリング間隔は拒否される
        let result =
            ClientConfig::try_parse_from(["relay-client", "-u", "alice", "--interval-ms", "10"]);

        assert!(result.is_err());
    }
}
