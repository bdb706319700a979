// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common types and logic for the ftuart read/write tool.
//!
//! Everything here is transport-agnostic: the host binary plugs in a serial
//! port, tests plug in [`mock::MockTransport`].

pub mod command;
pub mod error;
pub mod exchange;
pub mod mock;
pub mod numeral;
pub mod report;
pub mod session;
pub mod transport;
pub mod validation;

// Re-export commonly used types
pub use command::{Command, ReadForm, ReadRequest, WriteRequest, READ_BACK_LEN};
pub use error::{Error, ParseError, Result};
pub use exchange::Executor;
pub use report::{Report, ReportLine};
pub use session::{run, ConnectionState, Session};
pub use transport::{LineConfig, Port, Transport, DEFAULT_BAUD_RATE, DEFAULT_LOCATOR};
pub use validation::{AcceptAll, EchoMatch, ExpectedBytes, ValidationPolicy};
