// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Byte-level transport seam between the session engine and the device.

use crate::error::Result;

/// A blocking, bidirectional byte channel to the board.
///
/// Nothing is assumed about buffering: written bytes are eventually
/// transmitted, and bytes sent by the device are eventually readable one
/// at a time.
pub trait Link {
    /// Block until one byte is available and return it.
    fn read_byte(&mut self) -> Result<u8>;

    /// Write all of `data` to the device.
    fn write_bytes(&mut self, data: &[u8]) -> Result<()>;
}

impl<L: Link + ?Sized> Link for &mut L {
    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        (**self).write_bytes(data)
    }
}

impl<L: Link + ?Sized> Link for Box<L> {
    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        (**self).write_bytes(data)
    }
}
