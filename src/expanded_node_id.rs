// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Contains the implementation of `ExpandedNodeId`.

use std::{self, borrow::Cow, fmt};

use crate::{node_id::NodeId, string::*, NamespaceMap, UaNullable};

/// A NodeId that allows the namespace URI to be specified instead of an index.
#[derive(PartialEq, Debug, Clone, Eq, Hash, Default)]
pub struct ExpandedNodeId {
    /// The inner NodeId.
    pub node_id: NodeId,
    /// The full namespace URI. If this is set, the node ID namespace index may be zero.
    pub namespace_uri: UAString,
    /// The server index. 0 means current server.
    pub server_index: u32,
}

impl UaNullable for ExpandedNodeId {
    fn is_ua_null(&self) -> bool {
        self.is_null()
    }
}

impl fmt::Display for ExpandedNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.server_index != 0 {
            write!(f, "svr={};", self.server_index)?;
        }
        if !self.namespace_uri.is_null() {
            write!(f, "nsu={};{}", self.namespace_uri, self.node_id.identifier)
        } else {
            write!(f, "{}", self.node_id)
        }
    }
}

impl From<NodeId> for ExpandedNodeId {
    fn from(node_id: NodeId) -> Self {
        ExpandedNodeId {
            node_id,
            namespace_uri: UAString::null(),
            server_index: 0,
        }
    }
}

impl From<&NodeId> for ExpandedNodeId {
    fn from(node_id: &NodeId) -> Self {
        Self::from(node_id.clone())
    }
}

impl From<(NodeId, u32)> for ExpandedNodeId {
    fn from(v: (NodeId, u32)) -> Self {
        ExpandedNodeId {
            node_id: v.0,
            namespace_uri: UAString::null(),
            server_index: v.1,
        }
    }
}

impl ExpandedNodeId {
    /// Creates an expanded node id from a node id or equivalent e.g. (namespace, node id) tuple.
    pub fn new<T>(value: T) -> ExpandedNodeId
    where
        T: Into<ExpandedNodeId>,
    {
        value.into()
    }

    /// Return the null expanded node id.
    pub fn null() -> ExpandedNodeId {
        Self::from(NodeId::null())
    }

    /// Test if this is the null expanded node id.
    pub fn is_null(&self) -> bool {
        self.node_id.is_null() && self.namespace_uri.is_null() && self.server_index == 0
    }

    /// Test if this expanded node id refers to the local server.
    pub fn is_local(&self) -> bool {
        self.server_index == 0
    }

    /// Try to resolve this expanded node id into a plain node id, resolving
    /// any explicit namespace URI against the given namespace map. Returns
    /// `None` for remote node ids and unknown namespaces.
    pub fn try_resolve<'a>(&'a self, namespaces: &NamespaceMap) -> Option<Cow<'a, NodeId>> {
        if self.server_index != 0 {
            return None;
        }
        if self.namespace_uri.is_null() {
            Some(Cow::Borrowed(&self.node_id))
        } else {
            let namespace = namespaces.get_index(self.namespace_uri.as_ref())?;
            Some(Cow::Owned(NodeId {
                namespace,
                identifier: self.node_id.identifier.clone(),
            }))
        }
    }
}
