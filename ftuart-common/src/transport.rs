// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Transport abstraction and the fixed line configuration.
//!
//! The exchange logic only needs a byte pipe: something that opens from a
//! locator, reads up to N bytes, writes a buffer and closes. Hardware
//! backends and the test mock both implement these traits.

use core::time::Duration;

use crate::error::Result;

/// Locator of the FTDI bridge the tool talks to.
pub const DEFAULT_LOCATOR: &str = "ftdi://ftdi:232:AQ00RVZA/1";

pub const DEFAULT_BAUD_RATE: u32 = 230_400;

/// Read timeout after which a read returns whatever has arrived.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataBits {
    Five,
    Six,
    Seven,
    Eight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBits {
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    None,
    Odd,
    Even,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowControl {
    None,
    Software,
    Hardware,
}

/// UART line settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineConfig {
    pub baud_rate: u32,
    pub data_bits: DataBits,
    pub stop_bits: StopBits,
    pub parity: Parity,
    pub flow_control: FlowControl,
    pub timeout: Duration,
}

impl Default for LineConfig {
    /// 230400 baud, 8N1, no flow control.
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            data_bits: DataBits::Eight,
            stop_bits: StopBits::One,
            parity: Parity::None,
            flow_control: FlowControl::None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

/// An open, exclusively owned connection.
pub trait Port {
    /// Read up to `n` bytes. Fewer are returned if the transport times out.
    fn read(&mut self, n: usize) -> Result<Vec<u8>>;

    fn write(&mut self, data: &[u8]) -> Result<()>;

    fn close(&mut self) -> Result<()>;
}

/// Opens ports.
pub trait Transport {
    type Port: Port;

    fn open(&mut self, locator: &str, config: &LineConfig) -> Result<Self::Port>;
}
