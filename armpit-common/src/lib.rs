// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Host-side session protocol for ARMpit Scheme boards.
//!
//! The board's serial link has no framing, acknowledgements or checksums.
//! Code is streamed in windows and every byte is confirmed by watching the
//! interpreter echo it back; completion is detected by the `>` prompt.
//!
//! - [`session`]: the echo-synchronized engine and device operations
//! - [`text`]: payload normalization, backspace cleanup, listing parse
//! - [`forms`]: the textual command forms understood by the interpreter
//! - [`console`]: completion symbols and multi-line input accumulation
//! - [`link`]: the byte-level transport seam

pub mod console;
pub mod error;
pub mod forms;
pub mod link;
pub mod session;
pub mod text;

// Re-export commonly used types
pub use error::{Error, Result};
pub use link::Link;
pub use session::{Session, SessionConfig, Transmission};

/// Serial line speed of the board (8N1, no flow control).
pub const BAUD_RATE: u32 = 9600;

/// Byte the interpreter emits when it is ready for input.
pub const PROMPT: u8 = b'>';

/// Terminator the device ends its output lines with.
pub const LINE_END: u8 = b'\r';

/// Destructive backspace as echoed by the interpreter's line editor.
pub const BACKSPACE: u8 = 0x08;

/// Terminator sent after a payload to submit it for evaluation.
pub const ENDL: &[u8] = b"\r\n";

/// Default number of payload bytes written per burst.
pub const DEFAULT_WINDOW: usize = 64;
