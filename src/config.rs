use std::{env, time::Duration};

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Server settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Endpoint of the disease risk model. Prediction answers 503 when unset.
    pub classifier_url: Option<String>,
    pub classifier_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let classifier_url = lookup("CLASSIFIER_URL").filter(|url| !url.trim().is_empty());
        let classifier_timeout = match lookup("CLASSIFIER_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_CLASSIFIER_TIMEOUT_SECS),
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidValue {
                    key: "CLASSIFIER_TIMEOUT_SECS",
                    value: raw.clone(),
                })?,
        };
        Ok(Self {
            bind_addr,
            classifier_url,
            classifier_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(cfg.classifier_url, None);
        assert_eq!(cfg.classifier_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let cfg = config(&[
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("CLASSIFIER_URL", "http://models:5000/predict"),
            ("CLASSIFIER_TIMEOUT_SECS", "3"),
        ])
        .unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:9000");
        assert_eq!(cfg.classifier_url.as_deref(), Some("http://models:5000/predict"));
        assert_eq!(cfg.classifier_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_blank_classifier_url_is_unset() {
        let cfg = config(&[("CLASSIFIER_URL", "  ")]).unwrap();
        assert_eq!(cfg.classifier_url, None);
    }

    #[test]
    fn test_bad_timeout() {
        let err = config(&[("CLASSIFIER_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "CLASSIFIER_TIMEOUT_SECS",
                value: "soon".into()
            }
        );
    }
}
