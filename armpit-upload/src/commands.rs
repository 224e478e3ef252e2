// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command implementations for board operations.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::transport::Board;

/// Erase all files on the board.
pub fn erase(board: &mut Board) -> Result<()> {
    print!("Erasing files on board... ");
    io::stdout().flush()?;

    board.erase().context("Failed to send erase command")?;
    board.wait_for_prompt()?;

    println!("OK");
    Ok(())
}

/// Upload a local file to the board. Returns the name it is stored under.
pub fn upload(board: &mut Board, file: &Path) -> Result<String> {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})",
            )?
            .progress_chars("#>-"),
    );

    let name = board
        .upload_file_with(file, |verified, total| {
            pb.set_length(total as u64);
            pb.set_position(verified as u64);
        })
        .with_context(|| {
            pb.abandon();
            format!("Failed to upload {}", file.display())
        })?;
    pb.finish_and_clear();

    print!("Waiting for board... ");
    io::stdout().flush()?;
    board.wait_for_prompt()?;
    println!("OK");

    println!("Uploaded {} as {}", file.display(), name);
    Ok(name)
}

/// List the files stored on the board.
pub fn list(board: &mut Board) -> Result<()> {
    let files = board.list_files().context("Failed to list files")?;

    println!("Files on board:");
    if files.is_empty() {
        println!("  (none)");
    }
    for file in &files {
        println!("- {}", file);
    }

    Ok(())
}

/// Execute code on the board and print its output.
pub fn execute(board: &mut Board, code: &str) -> Result<()> {
    board
        .evaluate(code, &mut io::stdout().lock())
        .context("Failed to execute code")?;
    println!();
    Ok(())
}

/// Run a file stored on the board and print its output.
pub fn run_file(board: &mut Board, name: &str) -> Result<()> {
    log::info!("Running {} on board", name);
    board
        .run_file(name, &mut io::stdout().lock())
        .with_context(|| format!("Failed to run {}", name))?;
    println!();
    Ok(())
}
