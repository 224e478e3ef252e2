// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Upload, list, erase and run code on ARMpit Scheme boards over serial.
//!
//! Usage:
//!   armpit-upload --port /dev/ttyUSB0 --erase --upload blink.ss --list
//!   armpit-upload --port /dev/ttyUSB0 --execute "(+ 1 2)"
//!   armpit-upload --port /dev/ttyUSB0 --interactive

mod cli;
mod commands;
mod console;
mod transport;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    cli::run(args)
}
