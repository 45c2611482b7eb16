// Command line configuration.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_STATUS_URL: &str = "http://127.0.0.1:5000/api/status";

/// Terminal dashboard for the Strategic Space trading backend
#[derive(Parser, Debug)]
#[command(name = "strategic-space-status")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Status endpoint URL
    #[arg(long, default_value = DEFAULT_STATUS_URL)]
    pub status_url: String,

    /// Transport timeout in seconds; requests wait indefinitely when unset
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// File that receives log output (the terminal is owned by the UI)
    #[arg(long, default_value = "strategic-space-status.log")]
    pub log_file: PathBuf,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["strategic-space-status"]).unwrap();
        assert_eq!(config.status_url, DEFAULT_STATUS_URL);
        assert_eq!(config.timeout(), None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn overrides() {
        let config = Config::try_parse_from([
            "strategic-space-status",
            "--status-url",
            "http://backend:8000/api/status",
            "--timeout-secs",
            "5",
            "--log-file",
            "/tmp/status.log",
        ])
        .unwrap();
        assert_eq!(config.status_url, "http://backend:8000/api/status");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.log_file, PathBuf::from("/tmp/status.log"));
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        assert!(
            Config::try_parse_from(["strategic-space-status", "--timeout-secs", "soon"]).is_err()
        );
    }
}
