// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Integer literal parsing for read counts.
//!
//! Accepts the usual shell-friendly integer spellings: optional surrounding
//! whitespace, an optional sign, `0x`/`0o`/`0b` prefixes matching the base,
//! `_` digit separators, and base 0 for prefix auto-detection.

use core::num::IntErrorKind;

use crate::error::ParseError;

/// Radix used by the single-value `--read` form.
pub const HEX: u32 = 16;

fn prefix_base(body: &str) -> Option<(u32, &str)> {
    let bytes = body.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    match bytes[1] {
        b'x' | b'X' => Some((16, &body[2..])),
        b'o' | b'O' => Some((8, &body[2..])),
        b'b' | b'B' => Some((2, &body[2..])),
        _ => None,
    }
}

/// Parse `text` as a non-negative integer in `base` (0 or 2..=36).
pub fn parse_count(text: &str, base: u32) -> Result<usize, ParseError> {
    if base == 1 || base > 36 {
        return Err(ParseError::InvalidBase(base));
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let invalid = || ParseError::InvalidDigit {
        text: text.to_string(),
        base,
    };

    // A prefix only counts when it agrees with an explicit base.
    let (radix, digits, prefixed) = match prefix_base(unsigned) {
        Some((detected, rest)) if base == 0 || base == detected => (detected, rest, true),
        _ if base == 0 => (10, unsigned, false),
        _ => (base, unsigned, false),
    };

    // Separators sit between digits; one may follow a prefix directly.
    let digits = match digits.strip_prefix('_') {
        Some(rest) if prefixed => rest,
        _ => digits,
    };
    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(invalid());
    }

    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();

    // Base 0 rejects ambiguous leading zeros such as "010".
    if base == 0 && !prefixed && cleaned.starts_with('0') && cleaned.bytes().any(|b| b != b'0') {
        return Err(invalid());
    }

    let value = usize::from_str_radix(&cleaned, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => ParseError::Overflow(text.to_string()),
        _ => invalid(),
    })?;

    if negative && value != 0 {
        return Err(ParseError::Negative(text.to_string()));
    }

    Ok(value)
}

/// Parse the base argument of the two-value `--read` form (a decimal integer).
pub fn parse_base(text: &str) -> Result<u32, ParseError> {
    let value = parse_count(text, 10).map_err(|_| ParseError::BaseNotNumeric(text.to_string()))?;
    match u32::try_from(value) {
        Ok(base) if base == 0 || (2..=36).contains(&base) => Ok(base),
        Ok(base) => Err(ParseError::InvalidBase(base)),
        Err(_) => Err(ParseError::BaseNotNumeric(text.to_string())),
    }
}
