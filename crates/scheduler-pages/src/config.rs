// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Configuration for the UI under test
//
// Environment:
//   PROTOCOL              scheme including separator, e.g. "https://"
//   GUI_BASE_URL          host of the scheduler demo
//   HEADLESS              optional, "false"/"0" to show the browser
//   GUI_CLICK_TIMEOUT_MS  optional, visibility wait before clicks

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const PROTOCOL_VAR: &str = "PROTOCOL";
pub const GUI_BASE_URL_VAR: &str = "GUI_BASE_URL";
pub const HEADLESS_VAR: &str = "HEADLESS";
pub const CLICK_TIMEOUT_VAR: &str = "GUI_CLICK_TIMEOUT_MS";

/// Default wait for an element to become visible before clicking it.
pub const DEFAULT_CLICK_TIMEOUT: Duration = Duration::from_millis(3000);

/// Desktop viewport the scheduler layout is verified against.
pub const DEFAULT_VIEWPORT: (u32, u32) = (1920, 1080);

/// Locale the date labels are formatted in.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Browser and page settings for a UI test session.
#[derive(Debug, Clone)]
pub struct GuiConfig {
    pub base_url: Url,
    pub headless: bool,
    pub viewport: (u32, u32),
    pub locale: String,
    pub click_timeout: Duration,
}

impl GuiConfig {
    /// Default settings against `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            headless: true,
            viewport: DEFAULT_VIEWPORT,
            locale: DEFAULT_LOCALE.to_string(),
            click_timeout: DEFAULT_CLICK_TIMEOUT,
        }
    }

    /// Reads the process environment, after loading a `.env` file if one exists.
    ///
    /// Variables already set in the process take precedence over the file.
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
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| Error::MissingConfig(key.to_string()))
        };

        let raw = format!(
            "{}{}",
            required(PROTOCOL_VAR)?.trim(),
            required(GUI_BASE_URL_VAR)?.trim()
        );
        let base_url = Url::parse(&raw).map_err(|source| Error::InvalidUrl { url: raw, source })?;

        let mut config = Self::new(base_url);
        if let Some(headless) = lookup(HEADLESS_VAR) {
            config.headless = parse_flag(HEADLESS_VAR, &headless)?;
        }
        if let Some(ms) = lookup(CLICK_TIMEOUT_VAR) {
            config.click_timeout = parse_millis(CLICK_TIMEOUT_VAR, &ms)?;
        }

        tracing::debug!(
            base_url = %config.base_url,
            headless = config.headless,
            "Loaded GUI configuration"
        );
        Ok(config)
    }
}

fn invalid(var: &str, value: &str, message: impl Into<String>) -> Error {
    Error::InvalidConfig {
        var: var.to_string(),
        value: value.to_string(),
        message: message.into(),
    }
}

/// Parses a boolean flag: true/false, 1/0, yes/no (any case).
fn parse_flag(var: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(invalid(var, value, "expected true/false, 1/0 or yes/no")),
    }
}

fn parse_millis(var: &str, value: &str) -> Result<Duration> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| invalid(var, value, e.to_string()))
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
