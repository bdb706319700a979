// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! In-memory transport that records every call, for tests and dry runs.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::transport::{LineConfig, Port, Transport};

/// One observed transport call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Open { locator: String, config: LineConfig },
    Read { requested: usize },
    Write { data: Vec<u8> },
    Close,
}

#[derive(Debug, Default)]
struct Script {
    events: Vec<Event>,
    replies: VecDeque<Vec<u8>>,
    fail_open: Option<String>,
    fail_read: Option<usize>,
    fail_write: bool,
    reads_done: usize,
}

/// Transport whose ports share one event log with the transport itself.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    script: Rc<RefCell<Script>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the next read. Without queued replies a read of `n`
    /// returns `0, 1, 2, ..` truncated to `n` bytes.
    pub fn reply(self, data: impl Into<Vec<u8>>) -> Self {
        self.script.borrow_mut().replies.push_back(data.into());
        self
    }

    pub fn fail_open(self, reason: &str) -> Self {
        self.script.borrow_mut().fail_open = Some(reason.to_string());
        self
    }

    /// Fail the read with this zero-based index.
    pub fn fail_read(self, index: usize) -> Self {
        self.script.borrow_mut().fail_read = Some(index);
        self
    }

    pub fn fail_write(self) -> Self {
        self.script.borrow_mut().fail_write = true;
        self
    }

    pub fn events(&self) -> Vec<Event> {
        self.script.borrow().events.clone()
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.script.borrow().events.iter().filter(|e| pred(*e)).count()
    }
}

impl Transport for MockTransport {
    type Port = MockPort;

    fn open(&mut self, locator: &str, config: &LineConfig) -> Result<MockPort> {
        let mut script = self.script.borrow_mut();
        if let Some(reason) = &script.fail_open {
            return Err(Error::open(locator, reason));
        }
        script.events.push(Event::Open {
            locator: locator.to_string(),
            config: config.clone(),
        });
        Ok(MockPort {
            script: Rc::clone(&self.script),
        })
    }
}

#[derive(Debug)]
pub struct MockPort {
    script: Rc<RefCell<Script>>,
}

impl Port for MockPort {
    fn read(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut script = self.script.borrow_mut();
        script.events.push(Event::Read { requested: n });

        let index = script.reads_done;
        script.reads_done += 1;
        if script.fail_read == Some(index) {
            return Err(Error::io("mock read failure"));
        }

        let mut data = script
            .replies
            .pop_front()
            .unwrap_or_else(|| (0..n).map(|i| i as u8).collect());
        data.truncate(n);
        Ok(data)
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        let mut script = self.script.borrow_mut();
        script.events.push(Event::Write {
            data: data.to_vec(),
        });
        if script.fail_write {
            return Err(Error::io("mock write failure"));
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.script.borrow_mut().events.push(Event::Close);
        Ok(())
    }
}
