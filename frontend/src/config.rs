//! Runtime configuration, read from the environment (and a `.env` file when present).

use std::path::PathBuf;

use crate::errors::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:5678";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SESSION_FILE: &str = "session.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub session_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read the `BILLED_*` variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any variable source; unset variables take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let request_timeout_secs = match lookup("BILLED_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "BILLED_TIMEOUT_SECS",
                        value,
                    })
                }
            },
            None => defaults.request_timeout_secs,
        };

        let api_base_url = lookup("BILLED_API_URL").unwrap_or(defaults.api_base_url);
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "BILLED_API_URL",
                value: api_base_url,
            });
        }

        Ok(Self {
            api_base_url,
            request_timeout_secs,
            session_file: lookup("BILLED_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_file),
            log_level: lookup("BILLED_LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:5678");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("BILLED_API_URL", "https://api.billed.tld"),
            ("BILLED_TIMEOUT_SECS", "5"),
            ("BILLED_SESSION_FILE", "/tmp/billed-session.json"),
            ("BILLED_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://api.billed.tld");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.session_file, PathBuf::from("/tmp/billed-session.json"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_timeout() {
        for bad in ["abc", "0", "-3"] {
            let err = AppConfig::from_lookup(lookup_from(&[("BILLED_TIMEOUT_SECS", bad)])).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { key: "BILLED_TIMEOUT_SECS", .. }));
        }
    }

    #[test]
    fn test_invalid_api_url() {
        let err = AppConfig::from_lookup(lookup_from(&[("BILLED_API_URL", "localhost:5678")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BILLED_API_URL", .. }));
    }
}
