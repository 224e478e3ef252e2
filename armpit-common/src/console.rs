// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Interactive console support: completion symbols and input accumulation.
//!
//! This is pure logic; the line editor and the device round-trip live in
//! the host tool.

use std::collections::BTreeSet;

/// Names known to the interpreter before any user definitions.
pub const BUILTINS: &[&str] = &[
    "abs", "and", "append", "apply", "assoc", "assq", "assv", "begin", "boolean?", "caar",
    "cadr", "car", "case", "cdar", "cddr", "cdr", "char->integer", "char?", "close-input-port",
    "close-output-port", "cond", "cons", "define", "display", "do", "eof-object?", "eq?",
    "equal?", "eqv?", "erase", "even?", "files", "for-each", "if", "input-port?",
    "integer->char", "lambda", "length", "let", "let*", "letrec", "list", "list->string",
    "list-ref", "list-tail", "load", "map", "max", "member", "memq", "memv", "min", "modulo",
    "negative?", "newline", "not", "null?", "number->string", "number?", "odd?",
    "open-input-file", "open-output-file", "or", "output-port?", "pair?", "peek-char",
    "positive?", "procedure?", "quote", "quotient", "read", "read-char", "remainder",
    "reverse", "set!", "set-car!", "set-cdr!", "string->list", "string->number",
    "string->symbol", "string-append", "string-length", "string-ref", "string?", "substring",
    "symbol->string", "symbol?", "vector", "vector-length", "vector-ref", "vector-set!",
    "vector?", "write", "write-char", "zero?",
];

/// Forms whose first identifier names a new or updated binding.
const BINDING_FORMS: &[&str] = &["define", "set!"];

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '\'' | '"' | ';')
}

/// Net count of open parentheses in `code`.
///
/// Parentheses inside string literals, `;` comments and `#\(` character
/// literals are not counted.
pub fn paren_depth(code: &str) -> i64 {
    let mut depth = 0;
    let mut chars = code.chars();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            match c {
                '\\' => {
                    chars.next();
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            ';' => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '#' => {
                let mut ahead = chars.clone();
                if ahead.next() == Some('\\') {
                    ahead.next();
                    chars = ahead;
                }
            }
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
    }

    depth
}

/// Names bound by `(define ...)` and `(set! ...)` forms in `code`.
///
/// For `(define (f x) ...)` the name is `f`.
pub fn defined_names(code: &str) -> Vec<String> {
    let mut names = Vec::new();

    for (open, _) in code.match_indices('(') {
        let rest = code[open + 1..].trim_start();
        let Some(form) = BINDING_FORMS.iter().find(|form| {
            rest.strip_prefix(**form)
                .is_some_and(|after| after.chars().next().is_some_and(is_delimiter))
        }) else {
            continue;
        };

        let target = rest[form.len()..].trim_start_matches(|c: char| c.is_whitespace() || c == '(');
        let end = target.find(is_delimiter).unwrap_or(target.len());
        if end > 0 {
            names.push(target[..end].to_string());
        }
    }

    names
}

/// Identifiers offered for tab completion.
#[derive(Clone, Debug, Default)]
pub struct SymbolSet {
    symbols: BTreeSet<String>,
}

impl SymbolSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A set seeded with the interpreter's built-in names.
    pub fn with_builtins() -> Self {
        let mut set = Self::new();
        for name in BUILTINS {
            set.insert(name);
        }
        set
    }

    /// Add a symbol. Returns `true` if it was not already known.
    pub fn insert(&mut self, symbol: &str) -> bool {
        self.symbols.insert(symbol.to_string())
    }

    /// Add every name bound by `code`. Returns how many were new.
    pub fn learn(&mut self, code: &str) -> usize {
        defined_names(code)
            .into_iter()
            .filter(|name| self.symbols.insert(name.clone()))
            .count()
    }

    /// Whether `symbol` is offered for completion.
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    /// Known symbols starting with `prefix`, sorted.
    pub fn completions(&self, prefix: &str) -> Vec<&str> {
        self.symbols
            .range(prefix.to_string()..)
            .take_while(|s| s.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }
}

/// Accumulates console lines until they form a balanced submission.
#[derive(Clone, Debug, Default)]
pub struct PendingInput {
    buffer: String,
}

impl PendingInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one input line.
    ///
    /// Returns the whole submission once its parentheses balance, leaving
    /// the accumulator empty. Blank input with nothing pending yields `None`.
    pub fn push(&mut self, line: &str) -> Option<String> {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);

        if self.buffer.trim().is_empty() {
            self.buffer.clear();
            return None;
        }
        if paren_depth(&self.buffer) > 0 {
            return None;
        }

        Some(std::mem::take(&mut self.buffer))
    }

    /// Whether a partial submission is waiting for more lines.
    pub fn is_pending(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Drop any partial submission.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
