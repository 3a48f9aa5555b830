// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Constants for default encoding limits.

/// Default maximum length in bytes of a string.
pub const MAX_STRING_LENGTH: usize = 65535;

/// Default maximum length in bytes of a byte string.
pub const MAX_BYTE_STRING_LENGTH: usize = 65535;

/// Default maximum number of array elements.
pub const MAX_ARRAY_LENGTH: usize = 65535;

/// Default maximum size of an encoded message. This is consulted by transport
/// collaborators when sizing buffers, not enforced by the encoder itself.
pub const MAX_MESSAGE_SIZE: usize = 327675;

/// Default maximum nesting depth for recursive values such as variants,
/// diagnostic infos and structures.
pub const MAX_ENCODING_DEPTH: u64 = 64;
