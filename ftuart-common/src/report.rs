// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Human-readable status lines produced by an invocation.

use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    ReadTarget { address: String },
    ReadData { data: Vec<u8> },
    WriteTarget { address: String, payload: String },
    ReadBack { data: Vec<u8> },
    Verdict { valid: bool },
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::ReadTarget { address } => write!(f, "Reading from {}", address),
            ReportLine::ReadData { data } => write!(f, "Data: {:02x?}", data),
            ReportLine::WriteTarget { address, payload } => {
                write!(f, "Writing {} to {}", payload, address)
            }
            ReportLine::ReadBack { data } => write!(f, "Read back: {:02x?}", data),
            ReportLine::Verdict { valid: true } => write!(f, "Data is valid"),
            ReportLine::Verdict { valid: false } => write!(f, "Data is invalid"),
        }
    }
}

/// Ordered report. With `echo` set, each line is printed to stdout as it is
/// pushed, so lines emitted before a failure are still seen.
#[derive(Debug, Default)]
pub struct Report {
    lines: Vec<ReportLine>,
    echo: bool,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn echoing() -> Self {
        Self {
            lines: Vec::new(),
            echo: true,
        }
    }

    pub fn push(&mut self, line: ReportLine) {
        if self.echo {
            println!("{}", line);
        }
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rendered text of every line, in order.
    pub fn rendered(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }
}
