// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Simulated board for session tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use armpit_common::{Error, Link, Result};

/// A board that echoes every byte it receives.
///
/// When a line feed arrives the next scripted reply (or a bare prompt) is
/// queued for reading. Reading past the end of the queued output fails
/// instead of blocking, so a protocol hang shows up as an error.
#[derive(Default)]
pub struct SimDevice {
    output: VecDeque<u8>,
    replies: VecDeque<Vec<u8>>,
    noise: Vec<(usize, u8)>,
    received: usize,
    writes: Vec<Vec<u8>>,
}

impl SimDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes readable before anything is written.
    pub fn with_output(bytes: &[u8]) -> Self {
        Self {
            output: bytes.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Queue the reply to the next submitted line.
    pub fn reply(mut self, bytes: &[u8]) -> Self {
        self.replies.push_back(bytes.to_vec());
        self
    }

    /// Echo `byte` before the echo of the `index`-th received byte.
    pub fn noise_at(mut self, index: usize, byte: u8) -> Self {
        self.noise.push((index, byte));
        self
    }

    /// Every write burst, in order.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// Everything written, as text.
    pub fn sent(&self) -> String {
        String::from_utf8_lossy(&self.writes.concat()).into_owned()
    }

    /// Bytes queued but not yet read.
    pub fn unread(&self) -> usize {
        self.output.len()
    }
}

impl Link for SimDevice {
    fn read_byte(&mut self) -> Result<u8> {
        self.output
            .pop_front()
            .ok_or_else(|| Error::Io(io::Error::from(io::ErrorKind::UnexpectedEof)))
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writes.push(data.to_vec());

        for &byte in data {
            for &(_, wrong) in self.noise.iter().filter(|(i, _)| *i == self.received) {
                self.output.push_back(wrong);
            }
            self.output.push_back(byte);
            self.received += 1;

            if byte == b'\n' {
                let reply = self.replies.pop_front().unwrap_or_else(|| b">".to_vec());
                self.output.extend(reply);
            }
        }

        Ok(())
    }
}
