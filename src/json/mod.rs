//! Core utilities for OPC-UA JSON encoding.
//!
//! The [`JsonEncoder`] writes the reversible or non-reversible OPC-UA JSON
//! encoding of the built-in types to a character sink. The stream reader
//! types are re-exported for the decoding side and for callers that need to
//! validate raw JSON fragments.

mod encoder;

pub use encoder::JsonEncoder;

pub use struson::{
    reader::{JsonReader, JsonStreamReader, ValueType},
    writer::{JsonStreamWriter, JsonWriter},
};

use struson::writer::JsonNumberError;

use crate::EncodingError;

impl From<JsonNumberError> for EncodingError {
    fn from(value: JsonNumberError) -> Self {
        Self::Io(std::io::Error::other(value))
    }
}

impl From<struson::reader::ReaderError> for EncodingError {
    fn from(value: struson::reader::ReaderError) -> Self {
        Self::InvalidState(value.to_string())
    }
}

impl From<struson::reader::TransferError> for EncodingError {
    fn from(value: struson::reader::TransferError) -> Self {
        Self::InvalidState(value.to_string())
    }
}
