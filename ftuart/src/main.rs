// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Raw byte read/write tool for devices behind an FTDI UART bridge.
//!
//! Usage:
//!   ftuart --read 1A
//!   ftuart --read 1A 16
//!   ftuart --write 100 HELLO

mod cli;
mod locator;
mod transport;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    cli::run(args)
}
