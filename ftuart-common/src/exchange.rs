// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Drives an open port through the operations a [`Command`] requests.
//!
//! Order is fixed: the read (if any) first, then the write (if any), then a
//! [`READ_BACK_LEN`]-byte read-back that feeds the validation policy. Nothing
//! else touches the port between the write and its read-back.

use log::{debug, info};

use crate::command::{Command, ReadRequest, WriteRequest, READ_BACK_LEN};
use crate::error::Result;
use crate::report::{Report, ReportLine};
use crate::transport::Port;
use crate::validation::{AcceptAll, ValidationPolicy};

/// Runs commands against a port, judging read-backs with `V`.
pub struct Executor<V = AcceptAll> {
    policy: V,
}

impl Default for Executor<AcceptAll> {
    fn default() -> Self {
        Self::new(AcceptAll)
    }
}

impl<V: ValidationPolicy> Executor<V> {
    pub fn new(policy: V) -> Self {
        Self { policy }
    }

    /// Execute every part of `command`, appending to `report` as it goes.
    pub fn execute<P: Port + ?Sized>(
        &self,
        port: &mut P,
        command: &Command,
        report: &mut Report,
    ) -> Result<()> {
        if command.is_empty() {
            debug!("nothing to do");
        }
        if let Some(read) = &command.read {
            self.read(port, read, report)?;
        }
        if let Some(write) = &command.write {
            self.write(port, write, report)?;
            self.read_back(port, report)?;
        }
        Ok(())
    }

    fn read<P: Port + ?Sized>(
        &self,
        port: &mut P,
        request: &ReadRequest,
        report: &mut Report,
    ) -> Result<()> {
        report.push(ReportLine::ReadTarget {
            address: request.address.clone(),
        });
        debug!("reading {} bytes ({:?})", request.count, request.form);

        let data = port.read(request.count)?;
        if data.len() < request.count {
            info!("short read: {} of {} bytes", data.len(), request.count);
        }

        report.push(ReportLine::ReadData { data });
        Ok(())
    }

    fn write<P: Port + ?Sized>(
        &self,
        port: &mut P,
        request: &WriteRequest,
        report: &mut Report,
    ) -> Result<()> {
        report.push(ReportLine::WriteTarget {
            address: request.address.clone(),
            payload: request.payload.clone(),
        });

        let bytes = request.encoded();
        debug!(
            "writing {} bytes (address {} not transmitted)",
            bytes.len(),
            request.address
        );
        port.write(bytes)
    }

    fn read_back<P: Port + ?Sized>(&self, port: &mut P, report: &mut Report) -> Result<()> {
        let data = port.read(READ_BACK_LEN)?;
        let valid = self.policy.validate(&data);
        debug!("read-back {:02x?} -> valid={}", data, valid);

        report.push(ReportLine::ReadBack { data });
        report.push(ReportLine::Verdict { valid });
        Ok(())
    }
}
