// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Parsed intent of one invocation.
//!
//! Raw flag values are resolved into a [`Command`] up front, so every numeric
//! field is validated before the transport is touched.

use crate::error::ParseError;
use crate::numeral::{parse_base, parse_count, HEX};

/// Number of bytes read back after every write.
pub const READ_BACK_LEN: usize = 5;

/// Which spelling of `--read` produced the count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadForm {
    /// `--read <address>`: the address is a hex numeral used as the byte count.
    ByAddressAsCount,
    /// `--read <address> <base>`: the address is a numeral in `base`.
    ByNumeralInBase { base: u32 },
}

/// A read of `count` bytes, keeping the address text for the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest {
    pub address: String,
    pub form: ReadForm,
    pub count: usize,
}

impl ReadRequest {
    pub fn by_address_as_count(address: &str) -> Result<Self, ParseError> {
        Ok(Self {
            address: address.to_string(),
            form: ReadForm::ByAddressAsCount,
            count: parse_count(address, HEX)?,
        })
    }

    pub fn by_numeral_in_base(address: &str, base: &str) -> Result<Self, ParseError> {
        let base = parse_base(base)?;
        Ok(Self {
            address: address.to_string(),
            form: ReadForm::ByNumeralInBase { base },
            count: parse_count(address, base)?,
        })
    }

    /// Build from the one or two values given to `--read`.
    pub fn from_values(values: &[String]) -> Result<Self, ParseError> {
        match values {
            [address] => Self::by_address_as_count(address),
            [address, base] => Self::by_numeral_in_base(address, base),
            _ => Err(ParseError::Arity {
                flag: "read",
                expected: "1 or 2",
                got: values.len(),
            }),
        }
    }
}

/// A payload to transmit. The address is reported but never sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    pub address: String,
    pub payload: String,
}

impl WriteRequest {
    pub fn new(address: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            payload: payload.into(),
        }
    }

    pub fn from_values(values: &[String]) -> Result<Self, ParseError> {
        match values {
            [address, payload] => Ok(Self::new(address.as_str(), payload.as_str())),
            _ => Err(ParseError::Arity {
                flag: "write",
                expected: "2",
                got: values.len(),
            }),
        }
    }

    /// Payload bytes as they go on the wire (UTF-8).
    pub fn encoded(&self) -> &[u8] {
        self.payload.as_bytes()
    }
}

/// Everything one invocation asks for. Either part may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    pub read: Option<ReadRequest>,
    pub write: Option<WriteRequest>,
}

impl Command {
    pub fn from_values(
        read: Option<&[String]>,
        write: Option<&[String]>,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            read: read.map(ReadRequest::from_values).transpose()?,
            write: write.map(WriteRequest::from_values).transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.read.is_none() && self.write.is_none()
    }
}
