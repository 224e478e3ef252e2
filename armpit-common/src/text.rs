// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Text cleanup for the serial link.
//!
//! All functions here are single-pass scanners. A match never overlaps a
//! previous one and text exposed by a removal is not scanned again.

use crate::error::{Error, Result};
use crate::BACKSPACE;

/// Whitespace as the board's reader sees it: ASCII only.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Remove every `;` comment that is terminated by a newline.
///
/// The comment and its newline are both dropped. A `;` with no newline
/// after it is kept verbatim, together with the rest of the text.
pub fn strip_comments(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut rest = code;

    while let Some(start) = rest.find(';') {
        let Some(len) = rest[start..].find('\n') else {
            break;
        };
        out.push_str(&rest[..start]);
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);

    out
}

/// Replace every run of ASCII whitespace with a single space.
///
/// Other Unicode spaces such as U+00A0 are ordinary content.
pub fn collapse_whitespace(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut in_run = false;

    for c in code.chars() {
        if is_space(c) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }

    out
}

/// Prepare source text for transmission.
///
/// Comments are stripped, the result is trimmed and whitespace runs are
/// collapsed to one space. Whitespace inside string literals is collapsed
/// too. Applying it twice gives the same result as applying it once.
pub fn normalize(code: &str) -> String {
    collapse_whitespace(strip_comments(code).trim_matches(is_space))
}

/// Remove every byte other than a newline that is immediately followed
/// by a backspace.
///
/// Both bytes of each pair are dropped in one left-to-right pass, so
/// `A \b B \b C` becomes `C` while `A B \b \b C` becomes `A \b C`.
/// A newline is never erased and the backspace after it is kept.
pub fn clean_backspaces(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        if raw[i] != b'\n' && raw.get(i + 1) == Some(&BACKSPACE) {
            i += 2;
        } else {
            out.push(raw[i]);
            i += 1;
        }
    }

    out
}

/// Turn a raw device line into text: trim, then drop backspace erasures.
pub fn clean_line(raw: &[u8]) -> String {
    String::from_utf8_lossy(&clean_backspaces(raw.trim_ascii())).into_owned()
}

/// Parse a `("a.ss" "b.ss")` listing into its names, in device order.
///
/// One leading `(` and one trailing `)` are required. Each whitespace
/// separated token loses one leading and one trailing `"` if present.
pub fn parse_listing(line: &str) -> Result<Vec<String>> {
    let line = line.trim();
    let inner = line
        .strip_prefix('(')
        .and_then(|l| l.strip_suffix(')'))
        .ok_or_else(|| Error::MalformedListing(line.to_string()))?;

    Ok(inner
        .split_whitespace()
        .map(|token| {
            let token = token.strip_prefix('"').unwrap_or(token);
            token.strip_suffix('"').unwrap_or(token).to_string()
        })
        .collect())
}
