// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone (sensor) state decoding.

use crate::error::ParseError;
use crate::status::document::{StatusDocument, offsets};

/// State of a single zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneState {
    /// The zone index (0-15).
    pub id: u8,
    /// The zone name as configured on the panel, trimmed.
    pub name: String,
    /// Whether the zone is currently active (open / motion detected).
    pub active: bool,
}

/// Activity state of all sixteen zones, in panel order.
///
/// Bit `i` of the panel's zone status bitmask corresponds to the zone name
/// at slot `i`. Bits beyond the name count are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneStatus {
    zones: Vec<ZoneState>,
}

/// Reads the sixteen consecutive zone name fields, trimmed, in document
/// order.
pub(crate) fn decode_names(doc: &StatusDocument) -> Result<Vec<String>, ParseError> {
    let mut names = Vec::with_capacity(offsets::ZONE_COUNT);
    for i in 0..offsets::ZONE_COUNT {
        names.push(doc.text_at(offsets::ZONE_NAMES + i)?.trim().to_string());
    }
    Ok(names)
}

impl ZoneStatus {
    /// Decodes the zone status from a status document.
    pub(crate) fn decode(doc: &StatusDocument) -> Result<Self, ParseError> {
        let raw = doc.integer_at(offsets::ZONE_STATUS, "zone status")?;
        let names = decode_names(doc)?;
        let mut zones = Vec::with_capacity(names.len());
        for (id, name) in (0u8..).zip(names) {
            zones.push(ZoneState {
                id,
                name,
                active: raw & (1 << id) != 0,
            });
        }
        Ok(Self { zones })
    }

    /// Returns whether the named zone is active, or `None` if no zone has
    /// that name.
    #[must_use]
    pub fn is_active(&self, name: &str) -> Option<bool> {
        self.zones
            .iter()
            .find(|z| z.name == name)
            .map(|z| z.active)
    }

    /// Returns the state of the zone at the given index.
    #[must_use]
    pub fn get(&self, id: u8) -> Option<&ZoneState> {
        self.zones.get(usize::from(id))
    }

    /// Iterates over the zones in panel order.
    pub fn iter(&self) -> impl Iterator<Item = &ZoneState> {
        self.zones.iter()
    }

    /// Returns the zone names in panel order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.zones.iter().map(|z| z.name.as_str()).collect()
    }

    /// Returns the currently active zones.
    #[must_use]
    pub fn active_zones(&self) -> Vec<&ZoneState> {
        self.zones.iter().filter(|z| z.active).collect()
    }
}

impl<'a> IntoIterator for &'a ZoneStatus {
    type Item = &'a ZoneState;
    type IntoIter = std::slice::Iter<'a, ZoneState>;

    fn into_iter(self) -> Self::IntoIter {
        self.zones.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(names: &[&str; 16], raw_status: u32) -> StatusDocument {
        let mut texts = vec![String::new(); 252];
        for (i, name) in names.iter().enumerate() {
            texts[offsets::ZONE_NAMES + i] = (*name).to_string();
        }
        texts[offsets::ZONE_STATUS] = raw_status.to_string();

        let mut xml = String::from("<S>");
        for (i, text) in texts.iter().enumerate() {
            xml.push_str(&format!("<F{i}>{text}</F{i}>"));
        }
        xml.push_str("</S>");
        StatusDocument::parse(&xml).unwrap()
    }

    const NAMES: [&str; 16] = [
        "Front", "Back", "Garage", "Kitchen", "Hall", "Landing", "Bed 1", "Bed 2", "Bed 3",
        "Office", "Loft", "Shed", "Patio", "Utility", "Porch", "Cellar",
    ];

    #[test]
    fn decode_names_in_order() {
        let doc = doc_with(&NAMES, 0);
        let names = decode_names(&doc).unwrap();
        assert_eq!(names.len(), 16);
        assert_eq!(names[0], "Front");
        assert_eq!(names[15], "Cellar");
    }

    #[test]
    fn decode_bitmask_maps_names() {
        let doc = doc_with(&NAMES, 0b0000_0000_0000_0101);
        let status = ZoneStatus::decode(&doc).unwrap();

        assert_eq!(status.is_active("Front"), Some(true));
        assert_eq!(status.is_active("Back"), Some(false));
        assert_eq!(status.is_active("Garage"), Some(true));
        assert_eq!(status.is_active("Kitchen"), Some(false));
    }

    #[test]
    fn decode_high_bit() {
        let doc = doc_with(&NAMES, 1 << 15);
        let status = ZoneStatus::decode(&doc).unwrap();
        assert_eq!(status.is_active("Cellar"), Some(true));
        assert_eq!(status.active_zones().len(), 1);
    }

    #[test]
    fn bits_beyond_name_count_ignored() {
        // Bit 16 has no zone slot; only the low 16 bits map to names.
        let doc = doc_with(&NAMES, 1 << 16);
        let status = ZoneStatus::decode(&doc).unwrap();
        assert!(status.iter().all(|z| !z.active));
    }

    #[test]
    fn get_by_index() {
        let doc = doc_with(&NAMES, 0b10);
        let status = ZoneStatus::decode(&doc).unwrap();
        let back = status.get(1).unwrap();
        assert_eq!(back.name, "Back");
        assert!(back.active);
        assert!(status.get(16).is_none());
    }

    #[test]
    fn short_document_reports_missing_field() {
        let doc = StatusDocument::parse("<S><A>x</A></S>").unwrap();
        let result = ZoneStatus::decode(&doc);
        assert!(matches!(result, Err(ParseError::FieldNotFound { .. })));
    }
}
