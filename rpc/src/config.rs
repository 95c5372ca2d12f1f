//! Client configuration with TOML file support.

use crate::error::ConfigError;
use crate::scanner::ScanPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Where the node lives and how patiently to talk to it.
///
/// Can be loaded from a TOML file via [`ClientConfig::from_toml_file`] or built
/// programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// JSON-RPC endpoint of the node.
    #[serde(default = "default_node_url")]
    pub node_url: String,

    /// Upper bound for one request, connect included.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Confirmation polling.
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Fixed delay between two attempts; roughly one ledger close.
    #[serde(default = "default_interval_millis")]
    pub interval_millis: u64,

    /// Attempts before giving up with a confirmation timeout.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_node_url() -> String {
    "http://127.0.0.1:5005/".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_interval_millis() -> u64 {
    1000
}

fn default_max_attempts() -> u32 {
    20
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.node_url.starts_with("http://") || self.node_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "node_url must be an http(s) URL, got {:?}",
                self.node_url
            )));
        }
        if self.scan.max_attempts == 0 {
            return Err(ConfigError::Invalid("scan.max_attempts must be at least 1".into()));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn scan_policy(&self) -> ScanPolicy {
        ScanPolicy::new(
            Duration::from_millis(self.scan.interval_millis),
            self.scan.max_attempts,
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            node_url: default_node_url(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            scan: ScanConfig::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            interval_millis: default_interval_millis(),
            max_attempts: default_max_attempts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = ClientConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = ClientConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = ClientConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.node_url, "http://127.0.0.1:5005/");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.scan_policy(), ScanPolicy::new(Duration::from_secs(1), 20));
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            node_url = "https://s.altnet.rippletest.net:51234/"

            [scan]
            max_attempts = 5
        "#;
        let config = ClientConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.node_url, "https://s.altnet.rippletest.net:51234/");
        assert_eq!(config.scan.max_attempts, 5);
        assert_eq!(config.scan.interval_millis, 1000);
    }

    #[test]
    fn rejects_zero_attempts_and_bad_url() {
        let err = ClientConfig::from_toml_str("[scan]\nmax_attempts = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = ClientConfig::from_toml_str("node_url = \"localhost:5005\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_file_returns_read_error() {
        let err = ClientConfig::from_toml_file("/nonexistent/xrpl.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.toml");
        std::fs::write(&path, "request_timeout_secs = 3\n").unwrap();
        let config = ClientConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }
}
