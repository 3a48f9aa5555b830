// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `StatusCode`, with the well-known codes and
//! their symbolic names generated from the specification CSV.

mod generated;

use std::fmt;

use crate::UaNullable;

use self::generated::STATUS_CODE_SYMBOLS;

/// A 32-bit OPC UA status code. The value 0 is `Good`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct StatusCode(u32);

impl UaNullable for StatusCode {
    fn is_ua_null(&self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for StatusCode {
    fn from(value: u32) -> Self {
        StatusCode(value)
    }
}

impl From<StatusCode> for u32 {
    fn from(value: StatusCode) -> Self {
        value.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol_name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{:#010X}", self.0),
        }
    }
}

impl StatusCode {
    /// Create a status code from a raw 32-bit value.
    pub const fn from_bits(bits: u32) -> StatusCode {
        StatusCode(bits)
    }

    /// The raw 32-bit value of the status code.
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Test if the severity of the status code is good.
    pub const fn is_good(&self) -> bool {
        self.0 & 0xC000_0000 == 0
    }

    /// Test if the severity of the status code is uncertain.
    pub const fn is_uncertain(&self) -> bool {
        self.0 & 0xC000_0000 == 0x4000_0000
    }

    /// Test if the severity of the status code is bad.
    pub const fn is_bad(&self) -> bool {
        self.0 & 0x8000_0000 != 0
    }

    /// The symbolic name associated with the status code, `None` when the
    /// code is not one of the well-known codes.
    pub fn symbol_name(&self) -> Option<&'static str> {
        STATUS_CODE_SYMBOLS
            .binary_search_by_key(&self.0, |entry| entry.0)
            .ok()
            .map(|index| STATUS_CODE_SYMBOLS[index].1)
    }
}
