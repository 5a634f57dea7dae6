// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Positional access to the panel's XML status document.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::ParseError;

/// Fixed ordinal offsets into the status document.
///
/// These values are an external contract with the panel firmware: the
/// document always carries at least four area slots and sixteen zone slots
/// starting at these positions. The client does not validate the contract.
pub mod offsets {
    /// Offset of the area status bitmask field.
    pub const AREA_STATUS: usize = 251;
    /// Offset of the first area name field.
    pub const AREA_NAMES: usize = 178;
    /// Offset of the zone status bitmask field.
    pub const ZONE_STATUS: usize = 245;
    /// Offset of the first zone name field.
    pub const ZONE_NAMES: usize = 182;
    /// Number of area slots on the panel.
    pub const AREA_COUNT: usize = 4;
    /// Number of zone slots on the panel.
    pub const ZONE_COUNT: usize = 16;
}

/// One direct child of the status document's root element.
#[derive(Debug, Clone)]
struct Field {
    tag: String,
    text: String,
}

/// The flat child list of a status document's root element.
///
/// Fields are kept in document order; all lookups are by ordinal offset.
///
/// # Examples
///
/// ```
/// use micron_lib::status::StatusDocument;
///
/// let doc = StatusDocument::parse("<S><A>hello</A><B>2</B></S>").unwrap();
/// assert_eq!(doc.field_count(), 2);
/// assert_eq!(doc.text_at(0).unwrap(), "hello");
/// assert_eq!(doc.tag_at(1).unwrap(), "B");
/// ```
#[derive(Debug, Clone)]
pub struct StatusDocument {
    fields: Vec<Field>,
}

impl StatusDocument {
    /// Parses a status document from its XML text.
    ///
    /// Collects each direct child of the root element, in document order,
    /// with its tag name and concatenated text content. Text of nested
    /// elements is folded into the enclosing child.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Xml` if the document is malformed.
    pub fn parse(xml: &str) -> Result<Self, ParseError> {
        let mut reader = Reader::from_str(xml);
        let mut fields = Vec::new();
        let mut current: Option<Field> = None;
        let mut depth = 0usize;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    depth += 1;
                    if depth == 2 {
                        current = Some(Field {
                            tag: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                            text: String::new(),
                        });
                    }
                }
                Event::Empty(e) => {
                    if depth == 1 {
                        fields.push(Field {
                            tag: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                            text: String::new(),
                        });
                    }
                }
                Event::Text(t) => {
                    if depth >= 2
                        && let Some(field) = current.as_mut()
                    {
                        field.text.push_str(&t.unescape()?);
                    }
                }
                Event::End(_) => {
                    if depth == 2
                        && let Some(field) = current.take()
                    {
                        fields.push(field);
                    }
                    depth = depth.saturating_sub(1);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(Self { fields })
    }

    /// Returns the number of fields in the document.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns the text of the field at the given ordinal offset.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::FieldNotFound` if the offset is past the end of
    /// the document.
    pub fn text_at(&self, offset: usize) -> Result<&str, ParseError> {
        self.fields
            .get(offset)
            .map(|f| f.text.as_str())
            .ok_or(ParseError::FieldNotFound {
                index: offset,
                count: self.fields.len(),
            })
    }

    /// Returns the tag name of the field at the given ordinal offset.
    ///
    /// Tag names at the positions of interest are not stable across firmware
    /// versions; this accessor exists for diagnostics only.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::FieldNotFound` if the offset is past the end of
    /// the document.
    pub fn tag_at(&self, offset: usize) -> Result<&str, ParseError> {
        self.fields
            .get(offset)
            .map(|f| f.tag.as_str())
            .ok_or(ParseError::FieldNotFound {
                index: offset,
                count: self.fields.len(),
            })
    }

    /// Reads the field at the given offset as an unsigned integer.
    pub(crate) fn integer_at(
        &self,
        offset: usize,
        field: &'static str,
    ) -> Result<u32, ParseError> {
        let text = self.text_at(offset)?;
        text.trim()
            .parse()
            .map_err(|e| ParseError::InvalidValue {
                field,
                message: format!("{e}: {text:?}"),
            })
    }
}
