// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Tests for the open/close lifecycle around an exchange.

use ftuart_common::command::{Command, ReadRequest, WriteRequest};
use ftuart_common::mock::{Event, MockTransport};
use ftuart_common::session::{run, ConnectionState, Session};
use ftuart_common::transport::{DataBits, FlowControl, Parity, StopBits};
use ftuart_common::{Error, Executor, LineConfig, Report, DEFAULT_LOCATOR};

fn run_mock(transport: &MockTransport, command: &Command) -> (Result<(), Error>, Report) {
    let mut transport = transport.clone();
    let mut report = Report::new();
    let result = run(
        &mut transport,
        DEFAULT_LOCATOR,
        &LineConfig::default(),
        &Executor::default(),
        command,
        &mut report,
    );
    (result, report)
}

fn opens(transport: &MockTransport) -> usize {
    transport.count(|e| matches!(e, Event::Open { .. }))
}

fn closes(transport: &MockTransport) -> usize {
    transport.count(|e| matches!(e, Event::Close))
}

// --- Line configuration ---

#[test]
fn test_default_line_config() {
    let config = LineConfig::default();
    assert_eq!(config.baud_rate, 230_400);
    assert_eq!(config.data_bits, DataBits::Eight);
    assert_eq!(config.stop_bits, StopBits::One);
    assert_eq!(config.parity, Parity::None);
    assert_eq!(config.flow_control, FlowControl::None);
}

#[test]
fn test_open_uses_fixed_locator_and_config() {
    let transport = MockTransport::new();
    run_mock(&transport, &Command::default()).0.unwrap();
    assert_eq!(
        transport.events()[0],
        Event::Open {
            locator: "ftdi://ftdi:232:AQ00RVZA/1".to_string(),
            config: LineConfig::default(),
        }
    );
}

// --- Lifecycle ---

#[test]
fn test_no_flags_opens_then_closes() {
    let transport = MockTransport::new();
    let (result, report) = run_mock(&transport, &Command::default());
    result.unwrap();
    assert!(report.is_empty());
    assert_eq!(transport.events().len(), 2);
    assert_eq!(opens(&transport), 1);
    assert_eq!(transport.events()[1], Event::Close);
}

#[test]
fn test_close_is_last_after_write() {
    let transport = MockTransport::new();
    let command = Command {
        read: None,
        write: Some(WriteRequest::new("100", "HELLO")),
    };
    let (result, report) = run_mock(&transport, &command);
    result.unwrap();

    assert_eq!(opens(&transport), 1);
    assert_eq!(closes(&transport), 1);
    assert_eq!(transport.events().last(), Some(&Event::Close));
    assert_eq!(report.rendered().last().unwrap(), "Data is valid");
}

#[test]
fn test_close_after_read_failure() {
    let transport = MockTransport::new().fail_read(0);
    let command = Command {
        read: Some(ReadRequest::by_address_as_count("8").unwrap()),
        write: None,
    };
    let (result, _) = run_mock(&transport, &command);

    assert!(matches!(result, Err(Error::TransportIo(_))));
    assert_eq!(opens(&transport), 1);
    assert_eq!(closes(&transport), 1);
}

#[test]
fn test_close_after_read_back_failure() {
    let transport = MockTransport::new().fail_read(0);
    let command = Command {
        read: None,
        write: Some(WriteRequest::new("0", "x")),
    };
    let (result, report) = run_mock(&transport, &command);

    assert!(result.is_err());
    assert_eq!(closes(&transport), 1);
    assert_eq!(report.rendered(), vec!["Writing x to 0".to_string()]);
}

#[test]
fn test_close_after_write_failure() {
    let transport = MockTransport::new().fail_write();
    let command = Command {
        read: None,
        write: Some(WriteRequest::new("0", "x")),
    };
    let (result, _) = run_mock(&transport, &command);

    assert!(result.is_err());
    assert_eq!(closes(&transport), 1);
}

#[test]
fn test_open_failure_never_closes() {
    let transport = MockTransport::new().fail_open("device busy");
    let (result, report) = run_mock(&transport, &Command::default());

    match result {
        Err(Error::TransportOpen { locator, reason }) => {
            assert_eq!(locator, DEFAULT_LOCATOR);
            assert_eq!(reason, "device busy");
        }
        other => panic!("unexpected result {:?}", other),
    }
    assert!(transport.events().is_empty());
    assert!(report.is_empty());
}

// --- Session guard ---

#[test]
fn test_session_state_transitions() {
    let mut transport = MockTransport::new();
    let session = Session::open(&mut transport, "mock", &LineConfig::default()).unwrap();
    assert_eq!(session.state(), ConnectionState::Open);
    session.close().unwrap();
    assert_eq!(closes(&transport), 1);
}

#[test]
fn test_session_closes_on_drop() {
    let mut transport = MockTransport::new();
    {
        let _session = Session::open(&mut transport, "mock", &LineConfig::default()).unwrap();
    }
    assert_eq!(closes(&transport), 1);
}

#[test]
fn test_session_closes_during_unwind() {
    let transport = MockTransport::new();
    let inner = transport.clone();
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        let mut inner = inner;
        let _session = Session::open(&mut inner, "mock", &LineConfig::default()).unwrap();
        panic!("exchange blew up");
    }));
    assert!(outcome.is_err());
    assert_eq!(closes(&transport), 1);
}
