// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for Micron panels.
//!
//! The panel speaks plain HTTP with Basic Auth: a GET on the status endpoint
//! returns the full XML status document, and commands are POSTed to the same
//! endpoint as `text/xml` bodies. Each request is independent; there is no
//! session or persistent connection.

mod http;

pub use http::HttpClient;
