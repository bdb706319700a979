// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Serial transport layer backed by the `serialport` crate.

use std::io::{Read, Write};

use log::{debug, trace};
use serialport::SerialPort;

use ftuart_common::transport::{
    DataBits, FlowControl, LineConfig, Parity, Port, StopBits, Transport,
};
use ftuart_common::{Error, Result};

/// Largest single read issued to the OS; bounds memory for huge counts.
const READ_CHUNK: usize = 4096;

/// Opens FTDI bridges (or plain serial paths) through the OS serial driver.
#[derive(Debug, Default)]
pub struct SerialTransport;

impl Transport for SerialTransport {
    type Port = SerialConnection;

    fn open(&mut self, locator: &str, config: &LineConfig) -> Result<SerialConnection> {
        let port_name = crate::locator::resolve(locator)
            .map_err(|e| Error::open(locator, format!("{:#}", e)))?;

        let port = serialport::new(&port_name, config.baud_rate)
            .data_bits(data_bits(config.data_bits))
            .stop_bits(stop_bits(config.stop_bits))
            .parity(parity(config.parity))
            .flow_control(flow_control(config.flow_control))
            .timeout(config.timeout)
            .open()
            .map_err(|e| Error::open(port_name.as_str(), e))?;

        debug!("opened {} ({:?})", port_name, config);
        Ok(SerialConnection {
            port: Some(port),
            port_name,
        })
    }
}

/// An open serial port.
pub struct SerialConnection {
    port: Option<Box<dyn SerialPort>>,
    port_name: String,
}

impl SerialConnection {
    fn port(&mut self) -> Result<&mut Box<dyn SerialPort>> {
        self.port
            .as_mut()
            .ok_or_else(|| Error::io(format!("{} is closed", self.port_name)))
    }
}

impl Port for SerialConnection {
    fn read(&mut self, n: usize) -> Result<Vec<u8>> {
        let data = read_up_to(self.port()?, n)?;
        debug!("read {} of {} bytes", data.len(), n);
        trace!("rx {:02x?}", data);
        Ok(data)
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        let port = self.port()?;
        trace!("tx {:02x?}", data);
        port.write_all(data)
            .map_err(|e| Error::io(format!("Failed to write to serial port: {}", e)))?;
        port.flush()
            .map_err(|e| Error::io(format!("Failed to flush serial port: {}", e)))?;
        debug!("wrote {} bytes", data.len());
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        // Dropping the handle releases the OS port.
        if self.port.take().is_some() {
            debug!("closed {}", self.port_name);
        }
        Ok(())
    }
}

/// Read until `n` bytes arrive, the reader hits EOF, or the line goes quiet.
///
/// The buffer grows with the data actually received, never with `n`.
fn read_up_to<R: Read + ?Sized>(reader: &mut R, n: usize) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(n.min(READ_CHUNK));
    let mut chunk = [0u8; READ_CHUNK];

    while data.len() < n {
        let want = (n - data.len()).min(READ_CHUNK);
        match reader.read(&mut chunk[..want]) {
            Ok(0) => break,
            Ok(count) => data.extend_from_slice(&chunk[..count]),
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => break,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::io(format!("Serial read error: {}", e))),
        }
    }

    Ok(data)
}

fn data_bits(bits: DataBits) -> serialport::DataBits {
    match bits {
        DataBits::Five => serialport::DataBits::Five,
        DataBits::Six => serialport::DataBits::Six,
        DataBits::Seven => serialport::DataBits::Seven,
        DataBits::Eight => serialport::DataBits::Eight,
    }
}

fn stop_bits(bits: StopBits) -> serialport::StopBits {
    match bits {
        StopBits::One => serialport::StopBits::One,
        StopBits::Two => serialport::StopBits::Two,
    }
}

fn parity(parity: Parity) -> serialport::Parity {
    match parity {
        Parity::None => serialport::Parity::None,
        Parity::Odd => serialport::Parity::Odd,
        Parity::Even => serialport::Parity::Even,
    }
}

fn flow_control(flow: FlowControl) -> serialport::FlowControl {
    match flow {
        FlowControl::None => serialport::FlowControl::None,
        FlowControl::Software => serialport::FlowControl::Software,
        FlowControl::Hardware => serialport::FlowControl::Hardware,
    }
}
