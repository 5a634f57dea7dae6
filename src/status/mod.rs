// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding of the panel's XML status document.
//!
//! A status document is one flat XML element whose children carry every
//! value the panel exposes. The vendor schema has no stable tag names at the
//! positions of interest, only stable ordinal offsets, so all access is
//! positional: [`StatusDocument`] gives raw field access, and
//! [`AreaStatus`] / [`ZoneStatus`] decode the named slices of it into typed
//! state.

pub(crate) mod area;
pub(crate) mod document;
pub(crate) mod zone;

pub use area::{AreaState, AreaStatus};
pub use document::{StatusDocument, offsets};
pub use zone::{ZoneState, ZoneStatus};
