// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Micron panel command definitions.
//!
//! Commands are POSTed to the panel as small XML fragments. The panel
//! firmware owns the command vocabulary; the only operation it accepts is
//! the per-area arm/disarm toggle.
//!
//! # Examples
//!
//! ```
//! use micron_lib::command::{AreaToggleCommand, Command};
//! use micron_lib::types::AreaId;
//!
//! let cmd = AreaToggleCommand::new(AreaId::new(1).unwrap());
//! assert!(cmd.to_xml_body().contains("<AA>01</AA>"));
//! ```

mod area;

pub use area::AreaToggleCommand;

/// A command that can be sent to a Micron panel.
///
/// Commands are serialized to the vendor's XML POST format for transmission
/// over HTTP.
pub trait Command {
    /// Returns the full XML body for the POST request.
    fn to_xml_body(&self) -> String;
}
