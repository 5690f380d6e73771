use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use crate::report::{Reporter, SilentReporter, TracingReporter};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Execution mode; `test` silences error diagnostics.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Development,
    Production,
    Test,
}

impl FromStr for RunMode {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            _ => Err(ConfigError::InvalidMode(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub mode: RunMode,
}

impl ServerConfig {
    /// Reads `STATS_ADDR` and `STATS_MODE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("STATS_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(raw_addr.clone()))?;

        let mode = match lookup("STATS_MODE") {
            Some(raw) => raw.parse()?,
            None => RunMode::default(),
        };

        Ok(Self { addr, mode })
    }

    pub fn reporter(&self) -> Arc<dyn Reporter> {
        match self.mode {
            RunMode::Test => Arc::new(SilentReporter),
            RunMode::Development | RunMode::Production => Arc::new(TracingReporter),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidAddr(String),
    InvalidMode(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAddr(raw) => write!(f, "invalid STATS_ADDR: {raw}"),
            Self::InvalidMode(raw) => write!(f, "invalid STATS_MODE: {raw}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, RunMode, ServerConfig};
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg.addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(cfg.mode, RunMode::Development);
    }

    #[test]
    fn reads_addr_and_mode() {
        let cfg = config_from(&[("STATS_ADDR", "0.0.0.0:8080"), ("STATS_MODE", "Test")]).unwrap();
        assert_eq!(cfg.addr.port(), 8080);
        assert_eq!(cfg.mode, RunMode::Test);
    }

    #[test]
    fn only_test_mode_silences_reports() {
        let quiet = config_from(&[("STATS_MODE", "test")]).unwrap();
        assert!(quiet.reporter().is_silent());

        for mode in ["development", "production"] {
            let loud = config_from(&[("STATS_MODE", mode)]).unwrap();
            assert!(!loud.reporter().is_silent(), "{mode}");
        }
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            config_from(&[("STATS_ADDR", "nowhere")]).unwrap_err(),
            ConfigError::InvalidAddr("nowhere".to_string())
        );
        assert_eq!(
            config_from(&[("STATS_MODE", "staging")]).unwrap_err(),
            ConfigError::InvalidMode("staging".to_string())
        );
    }
}
