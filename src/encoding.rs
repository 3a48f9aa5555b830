// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the encoding error type, encoding limits and the [`UaNullable`]
//! trait used to decide when values may be left out of the encoded stream.

use thiserror::Error;

use crate::constants;

/// Result of an encoding operation.
pub type EncodingResult<T> = std::result::Result<T, EncodingError>;

/// Error produced when encoding fails. Encoding either completes and yields
/// well-defined output, or it fails with one of these; no partial output is
/// flushed past a failure.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// A string, byte string, array or nesting depth exceeded the configured
    /// encoding limits.
    #[error("encoding limit exceeded: {0}")]
    LimitExceeded(String),
    /// A variant type ID was out of range, or no codec was registered for a
    /// structured type.
    #[error("unknown type: {0}")]
    UnknownType(String),
    /// The caller drove the encoder illegally, e.g. a keyed emit outside of
    /// an object.
    #[error("invalid encoder state: {0}")]
    InvalidState(String),
    /// The underlying sink failed. The encoder is left in an unspecified
    /// state and must be reset.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl EncodingError {
    /// Create a new `LimitExceeded` error.
    pub fn limit_exceeded(message: impl Into<String>) -> Self {
        Self::LimitExceeded(message.into())
    }

    /// Create a new `UnknownType` error.
    pub fn unknown_type(message: impl Into<String>) -> Self {
        Self::UnknownType(message.into())
    }

    /// Create a new `InvalidState` error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

/// Limits on encoded values. The string, byte string, array and depth limits
/// are enforced by the encoder, `max_message_size` is advisory and consulted
/// by transports.
#[derive(Debug, Clone, Copy)]
pub struct EncodingLimits {
    /// Maximum length in bytes (not chars!) of a string.
    pub max_string_length: usize,
    /// Maximum length in bytes of a byte string.
    pub max_byte_string_length: usize,
    /// Maximum number of array elements.
    pub max_array_length: usize,
    /// Maximum size of a complete encoded message.
    pub max_message_size: usize,
    /// Maximum nesting depth of recursive values.
    pub max_nesting_depth: u64,
}

impl Default for EncodingLimits {
    fn default() -> Self {
        Self {
            max_string_length: constants::MAX_STRING_LENGTH,
            max_byte_string_length: constants::MAX_BYTE_STRING_LENGTH,
            max_array_length: constants::MAX_ARRAY_LENGTH,
            max_message_size: constants::MAX_MESSAGE_SIZE,
            max_nesting_depth: constants::MAX_ENCODING_DEPTH,
        }
    }
}

impl EncodingLimits {
    /// Limits suitable for encoding small payloads, for example extension
    /// object bodies that are not expected to contain a large value.
    pub fn minimal() -> Self {
        Self {
            max_string_length: 8192,
            max_byte_string_length: 8192,
            max_array_length: 8192,
            max_nesting_depth: 1,
            ..Default::default()
        }
    }
}

/// Trait implemented by OPC-UA types, indicating whether they are null or
/// not. Null fields of structured types are left out of the JSON stream.
pub trait UaNullable {
    /// Return true if this value is null, meaning it can be left out when
    /// being encoded as a field of a structured type.
    fn is_ua_null(&self) -> bool {
        false
    }
}

impl<T> UaNullable for Option<T>
where
    T: UaNullable,
{
    fn is_ua_null(&self) -> bool {
        match self {
            Some(s) => s.is_ua_null(),
            None => true,
        }
    }
}

impl<T> UaNullable for Vec<T> where T: UaNullable {}

impl<T> UaNullable for Box<T>
where
    T: UaNullable,
{
    fn is_ua_null(&self) -> bool {
        self.as_ref().is_ua_null()
    }
}

macro_rules! is_null_const {
    ($t:ty, $c:expr) => {
        impl UaNullable for $t {
            fn is_ua_null(&self) -> bool {
                *self == $c
            }
        }
    };
}

is_null_const!(bool, false);
is_null_const!(u8, 0);
is_null_const!(u16, 0);
is_null_const!(u32, 0);
is_null_const!(u64, 0);
is_null_const!(i8, 0);
is_null_const!(i16, 0);
is_null_const!(i32, 0);
is_null_const!(i64, 0);
is_null_const!(f32, 0.0);
is_null_const!(f64, 0.0);

impl UaNullable for String {}
impl UaNullable for str {}
