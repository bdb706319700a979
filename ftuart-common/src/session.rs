// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Connection lifecycle: `Closed -> Open -> Closed`, exactly once.
//!
//! [`Session`] owns the port for one invocation. It is closed explicitly by
//! [`Session::close`]; if it is dropped while still open (unwinding, early
//! return) the drop handler closes it instead.

use log::{debug, warn};

use crate::command::Command;
use crate::error::Result;
use crate::exchange::Executor;
use crate::report::Report;
use crate::transport::{LineConfig, Port, Transport};
use crate::validation::ValidationPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Closed,
    Open,
}

pub struct Session<P: Port> {
    port: P,
    state: ConnectionState,
}

impl<P: Port> Session<P> {
    pub fn open<T>(transport: &mut T, locator: &str, config: &LineConfig) -> Result<Self>
    where
        T: Transport<Port = P>,
    {
        debug!("opening {} at {} baud", locator, config.baud_rate);
        let port = transport.open(locator, config)?;
        debug!("connection open");
        Ok(Self {
            port,
            state: ConnectionState::Open,
        })
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn close(mut self) -> Result<()> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<()> {
        if self.state == ConnectionState::Closed {
            return Ok(());
        }
        self.state = ConnectionState::Closed;
        debug!("closing connection");
        self.port.close()
    }
}

impl<P: Port> Drop for Session<P> {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            warn!("close on drop failed: {}", e);
        }
    }
}

/// Open one connection, execute `command` on it, and close it on every path.
///
/// An exchange failure takes precedence over a close failure.
pub fn run<T, V>(
    transport: &mut T,
    locator: &str,
    config: &LineConfig,
    executor: &Executor<V>,
    command: &Command,
    report: &mut Report,
) -> Result<()>
where
    T: Transport,
    V: ValidationPolicy,
{
    let mut session = Session::open(transport, locator, config)?;
    let outcome = executor.execute(session.port_mut(), command, report);
    let closed = session.close();

    match (outcome, closed) {
        (Err(e), Err(close_err)) => {
            warn!("close after failed exchange also failed: {}", close_err);
            Err(e)
        }
        (outcome, closed) => outcome.and(closed),
    }
}
