// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `ExtensionObject`.

use crate::{byte_string::ByteString, node_id::NodeId, variant::XmlElement, UaNullable};

/// The encoded body of an extension object.
///
/// The body is kept in its encoded form; decoding it into a concrete
/// structure is the job of the data type manager on the decoding side.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ExtensionObjectBody {
    /// No body, the null extension object.
    #[default]
    None,
    /// A body encoded with the OPC UA binary encoding, tag 1 on the wire.
    ByteString(ByteString),
    /// A body encoded with the OPC UA XML encoding, tag 2 on the wire.
    XmlElement(XmlElement),
    /// A body encoded with the OPC UA JSON encoding. The JSON form carries
    /// no encoding tag, the body is written as a JSON value.
    Json(String),
}

impl ExtensionObjectBody {
    /// The wire tag of this body kind, 0 for none, 1 for binary, 2 for XML.
    /// JSON bodies have no tag.
    pub fn encoding(&self) -> Option<u8> {
        match self {
            ExtensionObjectBody::None => Some(0),
            ExtensionObjectBody::ByteString(_) => Some(1),
            ExtensionObjectBody::XmlElement(_) => Some(2),
            ExtensionObjectBody::Json(_) => None,
        }
    }
}

/// An extension object holds an encoded structure together with the NodeId
/// of the encoding that produced the body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtensionObject {
    /// The NodeId of the body's encoding.
    pub type_id: NodeId,
    /// The encoded body.
    pub body: ExtensionObjectBody,
}

impl UaNullable for ExtensionObject {
    fn is_ua_null(&self) -> bool {
        self.is_null()
    }
}

impl ExtensionObject {
    /// Create a null extension object with no body.
    pub fn null() -> ExtensionObject {
        ExtensionObject::default()
    }

    /// Test if the extension object has no body.
    pub fn is_null(&self) -> bool {
        matches!(self.body, ExtensionObjectBody::None)
    }

    /// Create an extension object carrying a binary encoded body.
    pub fn from_binary<B>(type_id: NodeId, body: B) -> ExtensionObject
    where
        B: Into<ByteString>,
    {
        ExtensionObject {
            type_id,
            body: ExtensionObjectBody::ByteString(body.into()),
        }
    }

    /// Create an extension object carrying an XML encoded body.
    pub fn from_xml<B>(type_id: NodeId, body: B) -> ExtensionObject
    where
        B: Into<XmlElement>,
    {
        ExtensionObject {
            type_id,
            body: ExtensionObjectBody::XmlElement(body.into()),
        }
    }

    /// Create an extension object carrying a JSON encoded body. The body
    /// must be a complete JSON value.
    pub fn from_json<B>(type_id: NodeId, body: B) -> ExtensionObject
    where
        B: Into<String>,
    {
        ExtensionObject {
            type_id,
            body: ExtensionObjectBody::Json(body.into()),
        }
    }
}
