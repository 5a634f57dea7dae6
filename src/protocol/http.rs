// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP protocol implementation for Micron panels.

use reqwest::Client;

use crate::command::Command;
use crate::config::PanelConfig;
use crate::error::ProtocolError;

// Panels answer XML declared as ISO-8859-1 without a charset header, so the
// body decode needs a Latin-1 fallback rather than reqwest's UTF-8 default.
const FALLBACK_CHARSET: &str = "ISO-8859-1";

/// HTTP client for communicating with a Micron panel.
///
/// Every request targets the single configured endpoint URL with HTTP Basic
/// Auth. The client is cheap to clone and holds no request state.
#[derive(Debug, Clone)]
pub struct HttpClient {
    url: String,
    client: Client,
    credentials: Credentials,
}

/// HTTP authentication credentials.
#[derive(Debug, Clone)]
struct Credentials {
    username: String,
    password: String,
}

impl HttpClient {
    /// Creates an HTTP client from a panel configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be created.
    pub fn from_config(config: &PanelConfig) -> Result<Self, ProtocolError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(Self {
            url: config.url().to_string(),
            client,
            credentials: Credentials {
                username: config.username().to_string(),
                password: config.password().to_string(),
            },
        })
    }

    /// Returns the panel endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the panel's current XML status document.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the panel answers
    /// with a non-success status code.
    pub async fn fetch_status(&self) -> Result<String, ProtocolError> {
        tracing::debug!(url = %self.url, "fetching panel status");

        let response = self
            .client
            .get(&self.url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        Self::read_body(response).await
    }

    /// Sends a command to the panel and returns the response body.
    ///
    /// The response body is the panel's refreshed status document.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the panel answers
    /// with a non-success status code.
    pub async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<String, ProtocolError> {
        let body = command.to_xml_body();

        tracing::debug!(url = %self.url, body = %body, "sending panel command");

        let response = self
            .client
            .post(&self.url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .header(reqwest::header::CONTENT_TYPE, "text/xml")
            .body(body)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        Self::read_body(response).await
    }

    async fn read_body(response: reqwest::Response) -> Result<String, ProtocolError> {
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProtocolError::AuthenticationFailed);
        }

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .text_with_charset(FALLBACK_CHARSET)
            .await
            .map_err(ProtocolError::Http)?;

        tracing::debug!(len = body.len(), "received panel response");

        Ok(body)
    }
}
