// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use anyhow::Result;
use clap::{ArgAction, Parser};
use log::LevelFilter;

use ftuart_common::{session, Command, Executor, LineConfig, Report, DEFAULT_LOCATOR};

use crate::transport::SerialTransport;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "ftuart")]
#[command(about = "Read and write raw bytes over an FTDI UART bridge")]
pub struct Cli {
    /// Read bytes: count as a hex numeral, or a numeral followed by its base
    #[arg(
        short,
        long,
        num_args = 1..=2,
        value_names = ["ADDRESS", "LENGTH_OR_BASE"]
    )]
    pub read: Option<Vec<String>>,

    /// Write DATA (the address is reported but not transmitted)
    #[arg(short, long, num_args = 2, value_names = ["ADDRESS", "DATA"])]
    pub write: Option<Vec<String>>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Resolve the flags into a command. Nothing is opened yet.
    pub fn to_command(&self) -> Result<Command> {
        Ok(Command::from_values(
            self.read.as_deref(),
            self.write.as_deref(),
        )?)
    }
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    let command = cli.to_command()?;
    log::debug!("{:?}", command);

    let mut transport = SerialTransport;
    let mut report = Report::echoing();

    session::run(
        &mut transport,
        DEFAULT_LOCATOR,
        &LineConfig::default(),
        &Executor::default(),
        &command,
        &mut report,
    )?;

    Ok(())
}
