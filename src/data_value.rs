// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `DataValue`.

use crate::{date_time::DateTime, status_code::StatusCode, variant::Variant, UaNullable};

/// A value with associated quality and timing information, as read from or
/// written to an attribute of a node.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct DataValue {
    /// The value. A null variant when the read failed.
    pub value: Option<Variant>,
    /// The status associated with the value. `Good` when absent.
    pub status: Option<StatusCode>,
    /// The time the value was sourced.
    pub source_timestamp: Option<DateTime>,
    /// Sub-second precision of the source timestamp in picoseconds.
    pub source_picoseconds: Option<u16>,
    /// The time the server received the value.
    pub server_timestamp: Option<DateTime>,
    /// Sub-second precision of the server timestamp in picoseconds.
    pub server_picoseconds: Option<u16>,
}

// A data value whose fields are all at their defaults is omitted entirely
// from the stream, so the null test covers every field.
impl UaNullable for DataValue {
    fn is_ua_null(&self) -> bool {
        self.value.as_ref().map_or(true, |v| v.is_empty())
            && self.status.map_or(true, |s| s == StatusCode::Good)
            && self.source_timestamp.is_none()
            && self.source_picoseconds.is_none()
            && self.server_timestamp.is_none()
            && self.server_picoseconds.is_none()
    }
}

impl DataValue {
    /// Return a data value with no value, status or timestamps.
    pub fn null() -> DataValue {
        DataValue::default()
    }

    /// Create a data value carrying only a value.
    pub fn value_only<V>(value: V) -> DataValue
    where
        V: Into<Variant>,
    {
        DataValue {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// The status of the value, `Good` when absent.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::Good)
    }
}
