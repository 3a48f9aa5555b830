// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The OPC UA JSON encoding for the built-in type system, as defined by
//! OPC UA Part 6 chapter 5.4.
//!
//! The crate contains the built-in types themselves, the encoding context
//! with its namespace, server and structure codec tables, and the
//! [`json::JsonEncoder`] which writes either the reversible form, which
//! round-trips losslessly through a conforming decoder, or the
//! non-reversible form, which sheds type tags and resolves namespace and
//! server indexes to URIs for schema-aware consumers.

mod array;
mod byte_string;
pub mod constants;
mod data_value;
mod date_time;
mod diagnostic_info;
mod encoding;
mod expanded_node_id;
mod extension_object;
mod guid;
pub mod json;
mod localized_text;
mod namespaces;
mod node_id;
mod qualified_name;
mod status_code;
mod string;
mod type_registry;
mod ua_enum;
mod variant;

#[cfg(test)]
mod tests;

pub use crate::{
    array::{Array, ArrayError},
    byte_string::ByteString,
    data_value::DataValue,
    date_time::{DateTime, DateTimeUtc},
    diagnostic_info::DiagnosticInfo,
    encoding::{EncodingError, EncodingLimits, EncodingResult, UaNullable},
    expanded_node_id::ExpandedNodeId,
    extension_object::{ExtensionObject, ExtensionObjectBody},
    guid::Guid,
    localized_text::LocalizedText,
    namespaces::{NamespaceMap, ServerMap, BASE_NAMESPACE},
    node_id::{Identifier, NodeId},
    qualified_name::QualifiedName,
    status_code::StatusCode,
    string::UAString,
    type_registry::{Context, ContextOwned, DataTypeManager, DynStruct, StructureCodec},
    ua_enum::UaEnum,
    variant::{Variant, VariantScalarTypeId, VariantType, VariantTypeId, XmlElement},
};
