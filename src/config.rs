// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connection configuration for a Micron panel.
//!
//! A panel is addressed by the full URL of its status endpoint and a pair of
//! HTTP Basic Auth credentials. Configuration can be built in code or loaded
//! from a JSON file with the keys `http_url`, `http_username` and
//! `http_password` (all required) plus the optional `http_timeout_secs`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Configuration for a Micron panel connection.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use micron_lib::PanelConfig;
///
/// let config = PanelConfig::new("http://192.168.1.30/status.xml", "admin", "secret")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.url(), "http://192.168.1.30/status.xml");
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct PanelConfig {
    url: String,
    username: String,
    password: String,
    timeout: Duration,
}

/// Raw shape of the JSON configuration file.
///
/// All fields are optional here so a missing key can be reported by name
/// instead of as an opaque deserialization error.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    http_url: Option<String>,
    http_username: Option<String>,
    http_password: Option<String>,
    http_timeout_secs: Option<u64>,
}

impl PanelConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration from explicit values.
    ///
    /// # Arguments
    ///
    /// * `url` - Full URL of the panel's status endpoint
    /// * `username` - Username for HTTP Basic Auth
    /// * `password` - Password for HTTP Basic Auth
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Loads the configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read,
    /// `ConfigError::Json` if it is not valid JSON, and
    /// `ConfigError::MissingKey` if a required key is absent.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| {
            tracing::error!(path = %path.display(), "failed to read config file");
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let config = Self::from_json(&contents)?;
        tracing::info!(path = %path.display(), "config imported");
        Ok(config)
    }

    /// Parses the configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` for malformed JSON and
    /// `ConfigError::MissingKey` if a required key is absent.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let raw: ConfigFile = serde_json::from_str(contents)?;

        let url = raw.http_url.ok_or(ConfigError::MissingKey("http_url"))?;
        let username = raw
            .http_username
            .ok_or(ConfigError::MissingKey("http_username"))?;
        let password = raw
            .http_password
            .ok_or(ConfigError::MissingKey("http_password"))?;
        let timeout = raw
            .http_timeout_secs
            .map_or(Self::DEFAULT_TIMEOUT, Duration::from_secs);

        Ok(Self {
            url,
            username,
            password,
            timeout,
        })
    }

    /// Returns the panel URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the Basic Auth username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the Basic Auth password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_json() {
        let config = PanelConfig::from_json(
            r#"{
                "http_url": "http://panel.local/status.xml",
                "http_username": "admin",
                "http_password": "secret"
            }"#,
        )
        .unwrap();

        assert_eq!(config.url(), "http://panel.local/status.xml");
        assert_eq!(config.username(), "admin");
        assert_eq!(config.password(), "secret");
        assert_eq!(config.timeout(), PanelConfig::DEFAULT_TIMEOUT);
    }

    #[test]
    fn config_from_json_with_timeout() {
        let config = PanelConfig::from_json(
            r#"{
                "http_url": "http://panel.local/status.xml",
                "http_username": "admin",
                "http_password": "secret",
                "http_timeout_secs": 3
            }"#,
        )
        .unwrap();

        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn config_missing_password() {
        let result = PanelConfig::from_json(
            r#"{
                "http_url": "http://panel.local/status.xml",
                "http_username": "admin"
            }"#,
        );

        assert!(matches!(
            result,
            Err(ConfigError::MissingKey("http_password"))
        ));
    }

    #[test]
    fn config_missing_url() {
        let result = PanelConfig::from_json(
            r#"{"http_username": "admin", "http_password": "secret"}"#,
        );

        assert!(matches!(result, Err(ConfigError::MissingKey("http_url"))));
    }

    #[test]
    fn config_malformed_json() {
        let result = PanelConfig::from_json("not json");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn config_missing_file() {
        let result = PanelConfig::from_file("/nonexistent/micron-config.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn config_builder_chain() {
        let config = PanelConfig::new("http://panel.local/status.xml", "admin", "secret")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.username(), "admin");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }
}
