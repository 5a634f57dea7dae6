// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for a Micron alarm panel.
//!
//! A [`Panel`] owns the HTTP client and the most recently fetched status
//! document. The document is replaced wholesale by [`Panel::refresh`] and by
//! the toggle commands (whose response body is the refreshed document); the
//! decoding accessors read whatever was fetched last and never touch the
//! network themselves.

use std::path::Path;

use parking_lot::RwLock;

use crate::command::AreaToggleCommand;
use crate::config::PanelConfig;
use crate::error::{Error, Result};
use crate::protocol::HttpClient;
use crate::status::{AreaStatus, StatusDocument, ZoneStatus, area, zone};
use crate::types::AreaId;

/// A Micron alarm panel reachable over HTTP.
///
/// # Examples
///
/// ```no_run
/// use micron_lib::{Panel, PanelConfig};
///
/// # async fn example() -> micron_lib::Result<()> {
/// let config = PanelConfig::new("http://192.168.1.30/status.xml", "admin", "secret");
/// let panel = Panel::connect(config).await?;
///
/// for area in panel.area_status()?.iter() {
///     println!("{}: {}", area.name, if area.armed { "armed" } else { "disarmed" });
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Panel {
    client: HttpClient,
    status: RwLock<String>,
}

impl Panel {
    /// Connects to the panel and fetches the initial status document.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created or the initial
    /// status fetch fails.
    pub async fn connect(config: PanelConfig) -> Result<Self> {
        let client = HttpClient::from_config(&config).map_err(Error::Protocol)?;
        let status = client.fetch_status().await.map_err(Error::Protocol)?;

        tracing::info!(url = %client.url(), "connected to panel");

        Ok(Self {
            client,
            status: RwLock::new(status),
        })
    }

    /// Loads configuration from a JSON file and connects.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be loaded or the connection fails.
    pub async fn connect_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = PanelConfig::from_file(path).map_err(Error::Config)?;
        Self::connect(config).await
    }

    /// Re-fetches the status document from the panel.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails. The stored document is left
    /// untouched on failure.
    pub async fn refresh(&self) -> Result<()> {
        let body = self.client.fetch_status().await.map_err(Error::Protocol)?;
        *self.status.write() = body;
        Ok(())
    }

    /// Returns a copy of the raw status document as last fetched.
    #[must_use]
    pub fn raw_status(&self) -> String {
        self.status.read().clone()
    }

    /// Parses the stored status document.
    fn document(&self) -> Result<StatusDocument> {
        StatusDocument::parse(&self.status.read()).map_err(Error::Parse)
    }

    /// Returns the text of the status field at the given ordinal offset.
    ///
    /// Diagnostic accessor; decodes the stored document without re-fetching.
    ///
    /// # Errors
    ///
    /// Returns error if the stored document is malformed or the offset is
    /// past the end of the document.
    pub fn field_text(&self, offset: usize) -> Result<String> {
        let doc = self.document()?;
        let text = doc.text_at(offset).map_err(Error::Parse)?;
        Ok(text.to_string())
    }

    /// Returns the tag name of the status field at the given ordinal offset.
    ///
    /// Diagnostic accessor; tag names at the documented offsets are not
    /// stable across firmware versions.
    ///
    /// # Errors
    ///
    /// Returns error if the stored document is malformed or the offset is
    /// past the end of the document.
    pub fn field_tag(&self, offset: usize) -> Result<String> {
        let doc = self.document()?;
        let tag = doc.tag_at(offset).map_err(Error::Parse)?;
        Ok(tag.to_string())
    }

    /// Returns the four area names, trimmed, in panel order.
    ///
    /// # Errors
    ///
    /// Returns error if the stored document cannot be decoded.
    pub fn area_names(&self) -> Result<Vec<String>> {
        let doc = self.document()?;
        area::decode_names(&doc).map_err(Error::Parse)
    }

    /// Returns the sixteen zone names, trimmed, in panel order.
    ///
    /// # Errors
    ///
    /// Returns error if the stored document cannot be decoded.
    pub fn zone_names(&self) -> Result<Vec<String>> {
        let doc = self.document()?;
        zone::decode_names(&doc).map_err(Error::Parse)
    }

    /// Returns the armed state of all areas.
    ///
    /// # Errors
    ///
    /// Returns error if the stored document cannot be decoded.
    pub fn area_status(&self) -> Result<AreaStatus> {
        let doc = self.document()?;
        AreaStatus::decode(&doc).map_err(Error::Parse)
    }

    /// Returns the activity state of all zones.
    ///
    /// # Errors
    ///
    /// Returns error if the stored document cannot be decoded.
    pub fn zone_status(&self) -> Result<ZoneStatus> {
        let doc = self.document()?;
        ZoneStatus::decode(&doc).map_err(Error::Parse)
    }

    /// Toggles the arm state of an area and returns the new area status.
    ///
    /// The panel flips the area between armed and disarmed; there is no
    /// set-to-state command on the wire, so calling this twice in quick
    /// succession toggles back. The command response doubles as the
    /// refreshed status document and replaces the stored one.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be decoded.
    pub async fn toggle_area(&self, area: AreaId) -> Result<AreaStatus> {
        tracing::info!(area = %area, "toggling area");

        let cmd = AreaToggleCommand::new(area);
        let body = self
            .client
            .send_command(&cmd)
            .await
            .map_err(Error::Protocol)?;
        *self.status.write() = body;

        self.area_status()
    }

    /// Resolves an area by name and toggles its arm state.
    ///
    /// The name is resolved against the stored status document; if it does
    /// not match any area, no request is sent.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownArea` if the name matches no area, or any
    /// error from [`Panel::toggle_area`].
    pub async fn toggle_area_by_name(&self, name: &str) -> Result<AreaStatus> {
        let names = self.area_names()?;
        let slot = names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| Error::UnknownArea(name.to_string()))?;

        self.toggle_area(AreaId::ALL[slot]).await
    }
}
