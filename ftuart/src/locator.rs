// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! FTDI device URLs (`ftdi://vendor:product:serial/interface`) and their
//! resolution to an OS serial port.

use anyhow::{anyhow, bail, Context, Result};
use serialport::{SerialPortInfo, SerialPortType};

pub const FTDI_VID: u16 = 0x0403;

const SCHEME: &str = "ftdi://";

const PRODUCTS: &[(&str, u16)] = &[
    ("232", 0x6001),
    ("232r", 0x6001),
    ("232h", 0x6014),
    ("2232", 0x6010),
    ("2232d", 0x6010),
    ("2232h", 0x6010),
    ("4232", 0x6011),
    ("4232h", 0x6011),
    ("230x", 0x6015),
    ("231x", 0x6015),
    ("234x", 0x6015),
    ("ft232r", 0x6001),
    ("ft232h", 0x6014),
    ("ft2232h", 0x6010),
    ("ft4232h", 0x6011),
    ("ft230x", 0x6015),
];

/// Parsed `ftdi://` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FtdiUrl {
    pub vid: u16,
    pub pid: Option<u16>,
    pub serial: Option<String>,
    /// 1-based interface number.
    pub interface: u8,
}

/// Where to open the port: a USB device to look up, or a plain OS path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Ftdi(FtdiUrl),
    Path(String),
}

fn parse_id(text: &str, names: &[(&str, u16)], what: &str) -> Result<u16> {
    let lower = text.to_ascii_lowercase();
    if let Some((_, id)) = names.iter().find(|(name, _)| *name == lower) {
        return Ok(*id);
    }
    let hex = lower.strip_prefix("0x").unwrap_or(&lower);
    u16::from_str_radix(hex, 16).map_err(|_| anyhow!("unknown {} {:?}", what, text))
}

impl Locator {
    pub fn parse(text: &str) -> Result<Self> {
        let rest = match text.strip_prefix(SCHEME) {
            Some(rest) => rest,
            None => return Ok(Locator::Path(text.to_string())),
        };

        let (device, interface) = rest
            .split_once('/')
            .ok_or_else(|| anyhow!("missing interface in {:?}", text))?;
        let interface: u8 = interface
            .parse()
            .with_context(|| format!("bad interface in {:?}", text))?;
        if interface == 0 {
            bail!("interface numbers start at 1 in {:?}", text);
        }

        let mut fields = device.split(':');
        let vid = match fields.next() {
            Some("") | None => FTDI_VID,
            Some(v) => parse_id(v, &[("ftdi", FTDI_VID)], "vendor")?,
        };
        let pid = match fields.next() {
            Some("") | None => None,
            Some(p) => Some(parse_id(p, PRODUCTS, "product")?),
        };
        let serial = match fields.next() {
            Some("") | None => None,
            Some(s) => Some(s.to_string()),
        };
        if fields.next().is_some() {
            bail!("too many fields in {:?}", text);
        }

        Ok(Locator::Ftdi(FtdiUrl {
            vid,
            pid,
            serial,
            interface,
        }))
    }
}

impl FtdiUrl {
    fn matches(&self, info: &SerialPortInfo) -> bool {
        match &info.port_type {
            SerialPortType::UsbPort(usb) => {
                usb.vid == self.vid
                    && self.pid.map_or(true, |pid| usb.pid == pid)
                    && self
                        .serial
                        .as_deref()
                        .map_or(true, |s| usb.serial_number.as_deref() == Some(s))
            }
            _ => false,
        }
    }

    /// Pick the OS port for this URL out of `ports`.
    ///
    /// Multi-interface chips expose one port per interface; they are ordered
    /// by port name and indexed by the 1-based interface number.
    pub fn select(&self, ports: &[SerialPortInfo]) -> Result<String> {
        let mut names: Vec<&str> = ports
            .iter()
            .filter(|info| self.matches(info))
            .map(|info| info.port_name.as_str())
            .collect();
        names.sort_unstable_by(|a, b| natural_key(a).cmp(&natural_key(b)));

        if names.is_empty() {
            bail!("no FTDI device matches {}", self);
        }
        usize::from(self.interface)
            .checked_sub(1)
            .and_then(|index| names.get(index))
            .map(|name| name.to_string())
            .ok_or_else(|| {
                anyhow!(
                    "{} has {} interface(s), interface {} requested",
                    self,
                    names.len(),
                    self.interface
                )
            })
    }
}

/// Sort key so `ttyUSB2` comes before `ttyUSB10`.
fn natural_key(name: &str) -> (&str, Option<u64>) {
    let stem = name.trim_end_matches(|c: char| c.is_ascii_digit());
    (stem, name[stem.len()..].parse().ok())
}

impl std::fmt::Display for FtdiUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04x}", self.vid)?;
        if let Some(pid) = self.pid {
            write!(f, ":{:04x}", pid)?;
        }
        if let Some(serial) = &self.serial {
            write!(f, " serial {}", serial)?;
        }
        Ok(())
    }
}

/// Turn a locator into the OS port name to open.
pub fn resolve(text: &str) -> Result<String> {
    match Locator::parse(text)? {
        Locator::Path(path) => Ok(path),
        Locator::Ftdi(url) => {
            let ports = serialport::available_ports().context("Failed to enumerate serial ports")?;
            log::debug!("{} serial port(s) present", ports.len());
            let name = url.select(&ports)?;
            log::info!("{} resolved to {}", text, name);
            Ok(name)
        }
    }
}
