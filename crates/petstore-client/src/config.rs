// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Session configuration for the API under test
//
// The target service is supplied by the environment:
//   PROTOCOL      scheme including separator, e.g. "https://"
//   API_BASE_URL  host (and optional path prefix), e.g. "petstore.swagger.io"
//
// Missing values are fatal at construction time, never per request.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable holding the URL scheme (shared with the GUI suite).
pub const PROTOCOL_VAR: &str = "PROTOCOL";

/// Environment variable holding the API host.
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Optional per-request timeout in milliseconds.
pub const API_TIMEOUT_MS_VAR: &str = "API_TIMEOUT_MS";

/// User agent sent with every request unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("petstore-client/", env!("CARGO_PKG_VERSION"));

/// Configuration for a [`TestClient`](crate::TestClient) session.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
    user_agent: String,
    timeout: Option<Duration>,
}

impl ApiConfig {
    /// Creates a configuration for an explicit base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }

    /// Reads `PROTOCOL` and `API_BASE_URL` from the process environment.
    ///
    /// A `.env` file in the working directory (or a parent) is loaded first;
    /// variables already set in the process take precedence over it.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration from a `.env`-format file only.
    ///
    /// The process environment is neither consulted nor modified.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let vars = read_env_file(path.as_ref())?;
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| Error::MissingConfig(key.to_string()))
        };

        let protocol = required(PROTOCOL_VAR)?;
        let host = required(API_BASE_URL_VAR)?;
        let raw = format!("{}{}", protocol.trim(), host.trim());
        let base_url = Url::parse(&raw).map_err(|source| Error::InvalidUrl { url: raw, source })?;

        let timeout = lookup(API_TIMEOUT_MS_VAR)
            .map(|ms| parse_millis(API_TIMEOUT_MS_VAR, &ms))
            .transpose()?;

        tracing::debug!(base_url = %base_url, ?timeout, "Loaded API configuration");

        Ok(Self {
            base_url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout,
        })
    }

    /// Overrides the identifying user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets a per-request timeout. Unset means transport defaults.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent_str(&self) -> &str {
        &self.user_agent
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Parses a millisecond count from an environment value.
fn parse_millis(var: &str, value: &str) -> Result<Duration> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| Error::InvalidConfig {
            var: var.to_string(),
            value: value.to_string(),
            message: e.to_string(),
        })
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let env_file_error = |source| Error::EnvFile {
        path: path.display().to_string(),
        source,
    };
    dotenvy::from_path_iter(path)
        .map_err(env_file_error)?
        .collect::<std::result::Result<_, _>>()
        .map_err(env_file_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_joins_protocol_and_host() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("PROTOCOL", "https://"),
            ("API_BASE_URL", "petstore.swagger.io"),
        ]))
        .unwrap();

        assert_eq!(config.base_url().as_str(), "https://petstore.swagger.io/");
        assert_eq!(config.user_agent_str(), DEFAULT_USER_AGENT);
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_missing_protocol_is_fatal() {
        let err = ApiConfig::from_lookup(lookup(&[("API_BASE_URL", "petstore.swagger.io")]))
            .unwrap_err();
        assert!(matches!(err, Error::MissingConfig(ref var) if var == "PROTOCOL"));
    }

    #[test]
    fn test_blank_host_counts_as_missing() {
        let err = ApiConfig::from_lookup(lookup(&[("PROTOCOL", "https://"), ("API_BASE_URL", "  ")]))
            .unwrap_err();
        assert!(matches!(err, Error::MissingConfig(ref var) if var == "API_BASE_URL"));
    }

    #[test]
    fn test_optional_timeout() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("PROTOCOL", "http://"),
            ("API_BASE_URL", "localhost:8080"),
            ("API_TIMEOUT_MS", "1500"),
        ]))
        .unwrap();

        assert_eq!(config.request_timeout(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_malformed_timeout_is_fatal() {
        let err = ApiConfig::from_lookup(lookup(&[
            ("PROTOCOL", "http://"),
            ("API_BASE_URL", "localhost:8080"),
            ("API_TIMEOUT_MS", "abc"),
        ]))
        .unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidConfig { ref var, ref value, .. } if var == "API_TIMEOUT_MS" && value == "abc"
        ));
    }

    #[test]
    fn test_reads_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "# local pet store\nPROTOCOL=http://\nAPI_BASE_URL=localhost:8080/api\nAPI_TIMEOUT_MS=2000\n",
        )
        .unwrap();

        let config = ApiConfig::from_env_file(&path).unwrap();
        assert_eq!(config.base_url().as_str(), "http://localhost:8080/api");
        assert_eq!(config.request_timeout(), Some(Duration::from_millis(2000)));
    }

    #[test]
    fn test_env_file_missing_variable_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "PROTOCOL=https://\n").unwrap();

        let err = ApiConfig::from_env_file(&path).unwrap_err();
        assert!(matches!(err, Error::MissingConfig(ref var) if var == "API_BASE_URL"));

        let err = ApiConfig::from_env_file(dir.path().join("absent.env")).unwrap_err();
        assert!(matches!(err, Error::EnvFile { .. }));
    }
}
