// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Verdict policies applied to the bytes read back after a write.

/// Decides whether read-back bytes are acceptable.
pub trait ValidationPolicy {
    fn validate(&self, data: &[u8]) -> bool;
}

/// Accepts everything. This is the default policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ValidationPolicy for AcceptAll {
    fn validate(&self, _data: &[u8]) -> bool {
        true
    }
}

/// The device must echo the start of the written payload.
#[derive(Debug, Clone)]
pub struct EchoMatch {
    expected: Vec<u8>,
}

impl EchoMatch {
    pub fn new(payload: &[u8], read_back_len: usize) -> Self {
        Self {
            expected: payload[..payload.len().min(read_back_len)].to_vec(),
        }
    }
}

impl ValidationPolicy for EchoMatch {
    fn validate(&self, data: &[u8]) -> bool {
        data == self.expected.as_slice()
    }
}

/// Read-back must equal a fixed byte pattern.
#[derive(Debug, Clone)]
pub struct ExpectedBytes(pub Vec<u8>);

impl ValidationPolicy for ExpectedBytes {
    fn validate(&self, data: &[u8]) -> bool {
        data == self.0.as_slice()
    }
}

impl<F> ValidationPolicy for F
where
    F: Fn(&[u8]) -> bool,
{
    fn validate(&self, data: &[u8]) -> bool {
        self(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_all_accepts_anything() {
        assert!(AcceptAll.validate(&[]));
        assert!(AcceptAll.validate(&[0xFF; 5]));
        assert!(AcceptAll.validate(&[0u8; 4096]));
    }

    #[test]
    fn echo_match_compares_prefix() {
        let policy = EchoMatch::new(b"HELLO WORLD", 5);
        assert!(policy.validate(b"HELLO"));
        assert!(!policy.validate(b"HELL"));
        assert!(!policy.validate(b"WORLD"));
    }

    #[test]
    fn echo_match_short_payload() {
        let policy = EchoMatch::new(b"HI", 5);
        assert!(policy.validate(b"HI"));
        assert!(!policy.validate(b"HI\0\0\0"));
    }

    #[test]
    fn expected_bytes() {
        let policy = ExpectedBytes(vec![0x06]);
        assert!(policy.validate(&[0x06]));
        assert!(!policy.validate(&[0x15]));
    }

    #[test]
    fn closure_policy() {
        let policy = |data: &[u8]| data.first() == Some(&0xAA);
        assert!(policy.validate(&[0xAA, 0x00]));
        assert!(!policy.validate(&[]));
    }
}
