// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Micron panel library.
//!
//! This module provides the error hierarchy for handling failures across the
//! library: configuration loading, HTTP communication, XML decoding, and
//! value validation.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when interacting
/// with a Micron alarm panel.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while loading configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Error occurred during HTTP communication with the panel.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while decoding the panel's XML status document.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The given area name does not match any area on the panel.
    #[error("unknown area name: {0}")]
    UnknownArea(String),
}

/// Errors related to loading the panel configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config file {path}: {source}")]
    Io {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON.
    #[error("invalid JSON in config file: {0}")]
    Json(#[from] serde_json::Error),

    /// A required configuration key is absent.
    #[error("config value '{0}' missing")]
    MissingKey(&'static str),
}

/// Errors related to HTTP communication with the panel.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The panel rejected the Basic Auth credentials.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The panel answered with a non-success status code.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
}

/// Errors related to decoding the panel's XML status document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing failed.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The requested field offset is past the end of the document.
    #[error("no field at offset {index} (document has {count} fields)")]
    FieldNotFound {
        /// The requested ordinal offset.
        index: usize,
        /// Number of fields the document actually has.
        count: usize,
    },

    /// A field did not hold the expected value format.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: &'static str,
        /// Description of the parsing failure.
        message: String,
    },
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The actual value that was provided.
        actual: u8,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
