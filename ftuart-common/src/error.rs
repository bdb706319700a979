// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Error taxonomy shared by the command parser, the exchange executor and
//! the transport implementations.

use thiserror::Error;

/// Malformed or missing numeric field on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty numeral")]
    Empty,

    #[error("invalid base {0}: must be 0 or 2..=36")]
    InvalidBase(u32),

    #[error("invalid base {0:?}: not a decimal integer")]
    BaseNotNumeric(String),

    #[error("invalid literal {text:?} for base {base}")]
    InvalidDigit { text: String, base: u32 },

    #[error("negative count {0:?}")]
    Negative(String),

    #[error("count {0:?} does not fit in memory")]
    Overflow(String),

    #[error("expected {expected} value(s) for --{flag}, got {got}")]
    Arity {
        flag: &'static str,
        expected: &'static str,
        got: usize,
    },
}

/// Every failure that terminates an invocation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("failed to open {locator}: {reason}")]
    TransportOpen { locator: String, reason: String },

    #[error("transport I/O error: {0}")]
    TransportIo(String),
}

impl Error {
    pub fn open(locator: impl Into<String>, reason: impl ToString) -> Self {
        Error::TransportOpen {
            locator: locator.into(),
            reason: reason.to_string(),
        }
    }

    pub fn io(reason: impl ToString) -> Self {
        Error::TransportIo(reason.to_string())
    }
}

pub type Result<T> = core::result::Result<T, Error>;
