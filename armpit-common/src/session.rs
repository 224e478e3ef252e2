// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Echo-synchronized session engine.
//!
//! The interpreter echoes every byte it receives before acting on it. That
//! echo is the only acknowledgement available, so payloads are written in
//! windows and each byte is confirmed against the echo before the next
//! window goes out. Completion is signalled by the prompt byte.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::forms;
use crate::link::Link;
use crate::text;
use crate::{DEFAULT_WINDOW, ENDL, LINE_END, PROMPT};

/// Default number of unrelated lines tolerated before a file listing.
pub const DEFAULT_LISTING_SKIP_LIMIT: usize = 64;

/// Tunables for a [`Session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Payload bytes written per burst (at least 1).
    pub window: usize,
    /// Lines skipped while looking for a file listing before giving up.
    pub listing_skip_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            listing_skip_limit: DEFAULT_LISTING_SKIP_LIMIT,
        }
    }
}

/// Outcome of one payload transmission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transmission {
    /// Payload bytes confirmed by echo (final echo cursor).
    pub verified: usize,
    /// Length of the normalized payload.
    pub total: usize,
    /// Echoed bytes that did not match and were dropped.
    pub discarded: usize,
}

/// A session with one board, owning its link for its whole lifetime.
pub struct Session<L: Link> {
    link: L,
    config: SessionConfig,
}

impl<L: Link> Session<L> {
    /// Create a session with the default configuration.
    pub fn new(link: L) -> Self {
        Self::with_config(link, SessionConfig::default())
    }

    /// Create a session with a custom configuration.
    pub fn with_config(link: L, mut config: SessionConfig) -> Self {
        config.window = config.window.max(1);
        Self { link, config }
    }

    /// The effective configuration, after clamping.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Read one line from the device, up to and including a carriage return.
    ///
    /// The line is trimmed and backspace erasures are removed. Blocks until
    /// the terminator arrives.
    pub fn read_line(&mut self) -> Result<String> {
        let mut raw = Vec::new();

        while raw.last() != Some(&LINE_END) {
            raw.push(self.link.read_byte()?);
        }

        Ok(text::clean_line(&raw))
    }

    /// Discard device output up to and including the next prompt.
    pub fn wait_for_prompt(&mut self) -> Result<()> {
        while self.link.read_byte()? != PROMPT {}
        Ok(())
    }

    /// Forward device output to `sink` until the next prompt.
    ///
    /// Bytes are passed through unchanged; the prompt itself is consumed.
    /// Returns the number of bytes forwarded.
    pub fn drain_until_prompt<W: Write + ?Sized>(&mut self, sink: &mut W) -> Result<usize> {
        let mut forwarded = 0;

        loop {
            let byte = self.link.read_byte()?;
            if byte == PROMPT {
                break;
            }
            sink.write_all(&[byte])?;
            forwarded += 1;
            if byte == b'\n' || byte == LINE_END {
                sink.flush()?;
            }
        }
        sink.flush()?;

        Ok(forwarded)
    }

    /// Normalize `code`, stream it with echo verification and submit it.
    pub fn send_code(&mut self, code: &str) -> Result<Transmission> {
        self.send_code_with(code, |_, _| {})
    }

    /// Like [`send_code`](Self::send_code), reporting `(verified, total)`
    /// after every window.
    pub fn send_code_with<F>(&mut self, code: &str, mut progress: F) -> Result<Transmission>
    where
        F: FnMut(usize, usize),
    {
        let payload = text::normalize(code);
        let bytes = payload.as_bytes();
        let mut report = Transmission {
            total: bytes.len(),
            ..Transmission::default()
        };

        // Invariant: verified <= end <= total
        while report.verified < bytes.len() {
            let end = bytes.len().min(report.verified + self.config.window);
            log::debug!("Sending bytes {}..{} of {}", report.verified, end, bytes.len());
            self.link.write_bytes(&bytes[report.verified..end])?;

            while report.verified < end {
                let byte = self.link.read_byte()?;
                if byte == bytes[report.verified] {
                    report.verified += 1;
                } else {
                    // Not resent; the device is expected to echo it eventually
                    log::trace!(
                        "Echo mismatch at {}: expected {:02x}, got {:02x}",
                        report.verified,
                        bytes[report.verified],
                        byte
                    );
                    report.discarded += 1;
                }
            }
            progress(report.verified, report.total);
        }

        self.link.write_bytes(ENDL)?;

        if report.discarded > 0 {
            log::debug!(
                "Payload confirmed with {} discarded echo bytes",
                report.discarded
            );
        }
        Ok(report)
    }

    /// Send `code` and forward its output to `sink` until the prompt.
    pub fn evaluate<W: Write + ?Sized>(&mut self, code: &str, sink: &mut W) -> Result<Transmission> {
        let report = self.send_code(code)?;
        self.drain_until_prompt(sink)?;
        Ok(report)
    }

    /// Return the names of the files stored on the board, in device order.
    pub fn list_files(&mut self) -> Result<Vec<String>> {
        self.send_code(forms::FILES)?;

        let mut skipped = 0;
        loop {
            let line = self.read_line()?;
            if line.starts_with('(') {
                return text::parse_listing(&line);
            }
            log::trace!("Skipping line before listing: {:?}", line);
            skipped += 1;
            if skipped > self.config.listing_skip_limit {
                return Err(Error::MalformedListing(format!(
                    "no listing within {} lines",
                    self.config.listing_skip_limit
                )));
            }
        }
    }

    /// Erase every file on the board. The caller waits for the prompt.
    pub fn erase(&mut self) -> Result<Transmission> {
        self.send_code(forms::ERASE)
    }

    /// Store `code` on the board as file `name`. The caller waits for the prompt.
    pub fn upload(&mut self, name: &str, code: &str) -> Result<Transmission> {
        self.upload_with(name, code, |_, _| {})
    }

    /// Like [`upload`](Self::upload), with progress reporting.
    pub fn upload_with<F>(&mut self, name: &str, code: &str, progress: F) -> Result<Transmission>
    where
        F: FnMut(usize, usize),
    {
        self.send_code_with(&forms::upload_form(name, code), progress)
    }

    /// Upload a local file under its base name. Returns the device-side name.
    pub fn upload_file(&mut self, path: &Path) -> Result<String> {
        self.upload_file_with(path, |_, _| {})
    }

    /// Like [`upload_file`](Self::upload_file), with progress reporting.
    pub fn upload_file_with<F>(&mut self, path: &Path, progress: F) -> Result<String>
    where
        F: FnMut(usize, usize),
    {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::EmptyPath(path.to_path_buf()))?;
        let code = fs::read_to_string(path)?;

        self.upload_with(&name, &code, progress)?;
        Ok(name)
    }

    /// Evaluate a file stored on the board, forwarding its output to `sink`.
    pub fn run_file<W: Write + ?Sized>(&mut self, name: &str, sink: &mut W) -> Result<Transmission> {
        self.evaluate(&forms::load_form(name), sink)
    }
}
