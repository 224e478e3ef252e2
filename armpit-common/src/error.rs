// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Error types for board sessions.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Session and transport errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The serial port could not be opened
    #[error("Failed to open serial port {port}: {reason}")]
    Connection { port: String, reason: String },

    /// Read or write failed on an open link
    #[error("Serial I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No byte arrived within the configured read timeout
    #[error("Device stopped responding (no data for {0:?})")]
    Stall(Duration),

    /// The file listing reply could not be parsed
    #[error("Malformed file listing: {0}")]
    MalformedListing(String),

    /// A local path has no file name to use on the device
    #[error("No file name in path {0}")]
    EmptyPath(PathBuf),
}

/// Result type for board sessions.
pub type Result<T> = core::result::Result<T, Error>;
