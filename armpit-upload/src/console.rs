// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Interactive console with tab completion over the board's symbols.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::FileHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use armpit_common::console::{PendingInput, SymbolSet};

use crate::transport::Board;

const PROMPT: &str = "> ";
const CONTINUATION_PROMPT: &str = "... ";

fn is_word_break(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '\'' | '"')
}

/// Line editor helper owning the completion symbols of this console.
#[derive(Helper)]
pub struct ConsoleHelper {
    symbols: SymbolSet,
}

impl ConsoleHelper {
    pub fn new(symbols: SymbolSet) -> Self {
        Self { symbols }
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolSet {
        &mut self.symbols
    }
}

impl Completer for ConsoleHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let start = line[..pos].rfind(is_word_break).map_or(0, |i| i + 1);
        let prefix = &line[start..pos];
        if prefix.is_empty() {
            return Ok((pos, Vec::new()));
        }

        let candidates = self
            .symbols
            .completions(prefix)
            .into_iter()
            .map(|symbol| Pair {
                display: symbol.to_string(),
                replacement: symbol.to_string(),
            })
            .collect();

        Ok((start, candidates))
    }
}

impl Hinter for ConsoleHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ConsoleHelper {}

impl Validator for ConsoleHelper {}

fn history_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "armpit-upload") {
        let mut path = proj_dirs.data_dir().to_path_buf();
        std::fs::create_dir_all(&path).ok();
        path.push("console_history");
        path
    } else {
        PathBuf::from(".armpit_history")
    }
}

/// Send one balanced submission and print the board's output.
fn submit(board: &mut Board, code: &str) -> Result<()> {
    board.evaluate(code, &mut io::stdout().lock())?;
    println!();
    Ok(())
}

/// Run the interactive console until end of input.
pub fn run(board: &mut Board, port_name: &str) -> Result<()> {
    let mut rl = Editor::<ConsoleHelper, FileHistory>::new()?;
    rl.set_helper(Some(ConsoleHelper::new(SymbolSet::with_builtins())));

    let history_path = history_path();
    if rl.load_history(&history_path).is_err() {
        log::debug!("No console history at {}", history_path.display());
    }

    println!("Connected to {}. Ctrl-D exits, Ctrl-C discards input.", port_name);

    let mut pending = PendingInput::new();
    loop {
        let prompt = if pending.is_pending() {
            CONTINUATION_PROMPT
        } else {
            PROMPT
        };

        match rl.readline(prompt) {
            Ok(line) => {
                let Some(code) = pending.push(&line) else {
                    continue;
                };
                let _ = rl.add_history_entry(code.as_str());

                submit(board, &code)?;

                if let Some(helper) = rl.helper_mut() {
                    let learned = helper.symbols_mut().learn(&code);
                    if learned > 0 {
                        log::debug!("Learned {} new symbols", learned);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => pending.clear(),
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Err(e) = rl.save_history(&history_path) {
        log::warn!("Failed to save console history: {}", e);
    }

    Ok(())
}
