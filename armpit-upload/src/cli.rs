// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};

use armpit_common::{SessionConfig, DEFAULT_WINDOW};

use crate::commands;
use crate::console;
use crate::transport::Transport;

/// Command-line arguments.
///
/// Requested operations run in a fixed order: erase, upload, upload and
/// run, list, execute, run, interactive.
#[derive(Parser)]
#[command(name = "armpit-upload")]
#[command(about = "Small utility for boards running ARMpit Scheme")]
pub struct Cli {
    /// Serial port (e.g., /dev/ttyUSB0)
    #[arg(short, long, default_value = "/dev/ttyUSB0")]
    pub port: String,

    /// Upload this file to the board (stored under its base name)
    #[arg(short, long, value_name = "FILE")]
    pub upload: Option<PathBuf>,

    /// Upload this file, then run it on the board
    #[arg(short = 'U', long, value_name = "FILE")]
    pub upload_run: Option<PathBuf>,

    /// List files currently on the board
    #[arg(short, long)]
    pub list: bool,

    /// Erase all files on the board
    #[arg(short = 'r', long)]
    pub erase: bool,

    /// Execute code on the board and print its output
    #[arg(short, long, value_name = "CODE")]
    pub execute: Option<String>,

    /// Run a file stored on the board and print its output
    #[arg(short = 'x', long, value_name = "NAME")]
    pub run: Option<String>,

    /// Start an interactive console
    #[arg(short, long)]
    pub interactive: bool,

    /// Payload bytes written per burst
    #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
    pub window: usize,

    /// Fail when the board sends nothing for this long (default: wait forever)
    #[arg(short, long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn has_operation(&self) -> bool {
        self.erase
            || self.upload.is_some()
            || self.upload_run.is_some()
            || self.list
            || self.execute.is_some()
            || self.run.is_some()
            || self.interactive
    }
}

/// Execute the requested operations in order.
pub fn run(cli: Cli) -> Result<()> {
    if !cli.has_operation() {
        println!("Nothing to do. See 'armpit-upload --help'.");
        return Ok(());
    }

    let transport = Transport::with_timeout(&cli.port, cli.timeout_ms)?;
    let port_name = transport.port_name();
    let mut board = armpit_common::Session::with_config(
        transport,
        SessionConfig {
            window: cli.window,
            ..SessionConfig::default()
        },
    );

    if cli.erase {
        commands::erase(&mut board)?;
    }

    if let Some(file) = &cli.upload {
        commands::upload(&mut board, file)?;
    }

    if let Some(file) = &cli.upload_run {
        let name = commands::upload(&mut board, file)?;
        commands::run_file(&mut board, &name)?;
    }

    if cli.list {
        commands::list(&mut board)?;
    }

    if let Some(code) = &cli.execute {
        commands::execute(&mut board, code)?;
    }

    if let Some(name) = &cli.run {
        commands::run_file(&mut board, name)?;
    }

    if cli.interactive {
        console::run(&mut board, &port_name)?;
    }

    Ok(())
}
