// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Textual command forms understood by the board's interpreter.

/// List the files stored on the board.
pub const FILES: &str = "(files)";

/// Erase every file stored on the board.
pub const ERASE: &str = "(erase)";

/// Evaluate a file stored on the board.
pub fn load_form(name: &str) -> String {
    format!("(load \"{}\")", name)
}

/// Wrap `code` so the board writes it to the file `name`.
///
/// The file receives a serialized `(begin ...)` form produced by the
/// board's own writer, so it reads back exactly as the board printed it.
pub fn upload_form(name: &str, code: &str) -> String {
    format!(
        "(let ((port (open-output-file \"{}\")))\n  (write '(begin {}) port)\n  (close-output-port port))",
        name, code
    )
}
