// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Area arm/disarm toggle command.

use crate::command::Command;
use crate::types::AreaId;

// Vendor wire template. The spelling of the declaration and the tags is part
// of the firmware contract and must not be normalized.
const BODY_PREFIX: &str = "<?xml version='1.0' encoding='ISO-8859-1' ?><M><AA>";
const BODY_SUFFIX: &str = "</AA></M>";

/// Toggles the arm state of one area.
///
/// The panel firmware flips the area between armed and disarmed; there is no
/// way to request a specific target state on the wire. Calling this twice in
/// quick succession arms and then disarms again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaToggleCommand {
    area: AreaId,
}

impl AreaToggleCommand {
    /// Creates a toggle command for the given area.
    #[must_use]
    pub fn new(area: AreaId) -> Self {
        Self { area }
    }

    /// Returns the targeted area.
    #[must_use]
    pub fn area(&self) -> AreaId {
        self.area
    }
}

impl Command for AreaToggleCommand {
    fn to_xml_body(&self) -> String {
        format!("{BODY_PREFIX}{}{BODY_SUFFIX}", self.area.two_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_body_format() {
        let cmd = AreaToggleCommand::new(AreaId::first());
        assert_eq!(
            cmd.to_xml_body(),
            "<?xml version='1.0' encoding='ISO-8859-1' ?><M><AA>00</AA></M>"
        );
    }

    #[test]
    fn toggle_body_pads_area_id() {
        let cmd = AreaToggleCommand::new(AreaId::new(3).unwrap());
        assert!(cmd.to_xml_body().contains("<AA>03</AA>"));
    }

    #[test]
    fn toggle_area_accessor() {
        let id = AreaId::new(2).unwrap();
        let cmd = AreaToggleCommand::new(id);
        assert_eq!(cmd.area(), id);
    }
}
