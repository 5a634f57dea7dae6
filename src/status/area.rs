// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Area (partition) state decoding.

use crate::error::ParseError;
use crate::status::document::{StatusDocument, offsets};
use crate::types::AreaId;

/// State of a single area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaState {
    /// The area index.
    pub id: AreaId,
    /// The area name as configured on the panel, trimmed.
    pub name: String,
    /// Whether the area is currently armed.
    pub armed: bool,
}

/// Armed state of all four areas, in panel order.
///
/// Bit `i` of the panel's area status bitmask corresponds to the area name
/// at slot `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaStatus {
    areas: Vec<AreaState>,
}

/// Reads the four consecutive area name fields, trimmed, in document order.
pub(crate) fn decode_names(doc: &StatusDocument) -> Result<Vec<String>, ParseError> {
    let mut names = Vec::with_capacity(offsets::AREA_COUNT);
    for i in 0..offsets::AREA_COUNT {
        names.push(doc.text_at(offsets::AREA_NAMES + i)?.trim().to_string());
    }
    Ok(names)
}

impl AreaStatus {
    /// Decodes the area status from a status document.
    pub(crate) fn decode(doc: &StatusDocument) -> Result<Self, ParseError> {
        let raw = doc.integer_at(offsets::AREA_STATUS, "area status")?;
        let areas = decode_names(doc)?
            .into_iter()
            .zip(AreaId::ALL)
            .map(|(name, id)| AreaState {
                id,
                name,
                armed: raw & (1 << id.value()) != 0,
            })
            .collect();
        Ok(Self { areas })
    }

    /// Returns whether the named area is armed, or `None` if no area has
    /// that name.
    #[must_use]
    pub fn is_armed(&self, name: &str) -> Option<bool> {
        self.areas.iter().find(|a| a.name == name).map(|a| a.armed)
    }

    /// Returns the state of the given area.
    #[must_use]
    pub fn get(&self, id: AreaId) -> Option<&AreaState> {
        self.areas.get(usize::from(id.value()))
    }

    /// Resolves an area name to its index.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<AreaId> {
        self.areas.iter().find(|a| a.name == name).map(|a| a.id)
    }

    /// Iterates over the areas in panel order.
    pub fn iter(&self) -> impl Iterator<Item = &AreaState> {
        self.areas.iter()
    }

    /// Returns the area names in panel order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.areas.iter().map(|a| a.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a AreaStatus {
    type Item = &'a AreaState;
    type IntoIter = std::slice::Iter<'a, AreaState>;

    fn into_iter(self) -> Self::IntoIter {
        self.areas.iter()
    }
}
