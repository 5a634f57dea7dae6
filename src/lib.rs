// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Micron Lib - A Rust library to monitor and control Micron alarm panels.
//!
//! Micron panels expose their state over a small HTTP+XML interface: a GET
//! on the status endpoint returns one flat XML document holding every value
//! the panel knows, and arm/disarm commands are POSTed back to the same
//! endpoint. The document's schema is positional - the values of interest
//! live at fixed ordinal offsets in the root's child list, not behind stable
//! tag names - and this library hides that quirk behind a typed API.
//!
//! # Supported Features
//!
//! - **Status queries**: area and zone names, armed/active state decoded
//!   from the panel's status bitmasks
//! - **Arm control**: per-area arm/disarm toggle, by index or by name
//! - **Configuration**: JSON config file or in-code builder, HTTP Basic
//!   Auth, configurable request timeout
//!
//! # Quick Start
//!
//! ```no_run
//! use micron_lib::{Panel, PanelConfig};
//!
//! #[tokio::main]
//! async fn main() -> micron_lib::Result<()> {
//!     let config = PanelConfig::new("http://192.168.1.30/status.xml", "admin", "secret");
//!     let panel = Panel::connect(config).await?;
//!
//!     for area in panel.area_status()?.iter() {
//!         println!("{}: {}", area.name, if area.armed { "armed" } else { "disarmed" });
//!     }
//!
//!     // The panel only offers a toggle; this flips armed <-> disarmed.
//!     panel.toggle_area_by_name("Home").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Loading Configuration From a File
//!
//! ```no_run
//! use micron_lib::Panel;
//!
//! #[tokio::main]
//! async fn main() -> micron_lib::Result<()> {
//!     // config.json: {"http_url": "...", "http_username": "...", "http_password": "..."}
//!     let panel = Panel::connect_file("config.json").await?;
//!
//!     for zone in panel.zone_status()?.iter() {
//!         if zone.active {
//!             println!("{} is open", zone.name);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod command;
mod config;
pub mod error;
mod panel;
pub mod protocol;
pub mod status;
pub mod types;

pub use command::{AreaToggleCommand, Command};
pub use config::PanelConfig;
pub use error::{ConfigError, Error, ParseError, ProtocolError, Result, ValueError};
pub use panel::Panel;
pub use protocol::HttpClient;
pub use status::{AreaState, AreaStatus, StatusDocument, ZoneState, ZoneStatus, offsets};
pub use types::AreaId;
