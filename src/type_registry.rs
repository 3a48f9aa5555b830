//! The structure codec registry and the encoding context.
//!
//! Structured types are not encoded through a trait on the value, but by
//! looking up a [`StructureCodec`] for the structure's type id in the
//! [`DataTypeManager`]. The codec calls back into the encoder to emit each
//! field with its declared name. This keeps the set of encodable structures
//! open: servers and clients register codecs for the types they know about,
//! including custom types defined by extensions to the standard.

use std::{any::Any, fmt, sync::Arc};

use hashbrown::HashMap;

use crate::{
    encoding::{EncodingLimits, EncodingResult},
    json::JsonEncoder,
    ExpandedNodeId, NamespaceMap, NodeId, ServerMap,
};

/// Trait for a structure value that can be passed to the encoder. The
/// concrete type is recovered by the structure's codec through downcasting.
pub trait DynStruct: Any + Send + Sync + fmt::Debug {
    /// The id of this structure's JSON encoding, used to locate its codec.
    fn json_encoding_id(&self) -> ExpandedNodeId;

    /// Method to cast this to a dyn Any trait object, required for downcasting by reference.
    fn as_dyn_any_ref(&self) -> &(dyn Any + Send + Sync);
}

/// A codec for one structured type. The encoder opens and closes the
/// surrounding JSON object; the codec emits the fields in declaration order
/// using the encoder's keyed emitters, skipping fields that are UA null.
pub trait StructureCodec: Send + Sync {
    /// Encode the fields of `value` into the currently open JSON object.
    fn encode(&self, encoder: &mut JsonEncoder<'_>, value: &dyn DynStruct) -> EncodingResult<()>;
}

/// Registry of structure codecs, keyed by data type id and encoding id.
#[derive(Clone, Default)]
pub struct DataTypeManager {
    codecs: HashMap<NodeId, Arc<dyn StructureCodec>>,
}

impl fmt::Debug for DataTypeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTypeManager")
            .field("codecs", &self.codecs.len())
            .finish()
    }
}

impl DataTypeManager {
    /// Create a new empty data type manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a codec under both the data type id and the encoding id of
    /// its structure.
    pub fn add_codec(
        &mut self,
        data_type_id: NodeId,
        encoding_id: NodeId,
        codec: Arc<dyn StructureCodec>,
    ) {
        self.codecs.insert(data_type_id, codec.clone());
        self.codecs.insert(encoding_id, codec);
    }

    /// Look up the codec for the structure with the given type id.
    pub fn codec_for(&self, id: &NodeId) -> Option<&Arc<dyn StructureCodec>> {
        self.codecs.get(id)
    }

    /// Look up the codec for the structure with the given expanded type id,
    /// resolving any explicit namespace URI first.
    pub fn codec_for_expanded(
        &self,
        id: &ExpandedNodeId,
        namespaces: &NamespaceMap,
    ) -> Option<&Arc<dyn StructureCodec>> {
        let resolved = id.try_resolve(namespaces)?;
        self.codec_for(resolved.as_ref())
    }
}

/// Owned variant of [Context], this is stored by clients and servers, which
/// call the [ContextOwned::context] method to produce a [Context] for
/// encoding.
#[derive(Debug, Default)]
pub struct ContextOwned {
    namespaces: NamespaceMap,
    servers: ServerMap,
    type_manager: DataTypeManager,
    limits: EncodingLimits,
}

impl ContextOwned {
    /// Create a new context.
    pub fn new(
        namespaces: NamespaceMap,
        servers: ServerMap,
        type_manager: DataTypeManager,
        limits: EncodingLimits,
    ) -> Self {
        Self {
            namespaces,
            servers,
            type_manager,
            limits,
        }
    }

    /// Return a context for encoding.
    pub fn context(&self) -> Context<'_> {
        Context {
            namespaces: &self.namespaces,
            servers: &self.servers,
            type_manager: &self.type_manager,
            limits: self.limits,
        }
    }

    /// Get the namespace table.
    pub fn namespaces(&self) -> &NamespaceMap {
        &self.namespaces
    }

    /// Get the namespace table mutably.
    pub fn namespaces_mut(&mut self) -> &mut NamespaceMap {
        &mut self.namespaces
    }

    /// Get the server table.
    pub fn servers(&self) -> &ServerMap {
        &self.servers
    }

    /// Get the server table mutably.
    pub fn servers_mut(&mut self) -> &mut ServerMap {
        &mut self.servers
    }

    /// Get the data type manager.
    pub fn type_manager(&self) -> &DataTypeManager {
        &self.type_manager
    }

    /// Get the data type manager mutably.
    pub fn type_manager_mut(&mut self) -> &mut DataTypeManager {
        &mut self.type_manager
    }

    /// Get the encoding limits.
    pub fn limits(&self) -> EncodingLimits {
        self.limits
    }

    /// Get the encoding limits mutably.
    pub fn limits_mut(&mut self) -> &mut EncodingLimits {
        &mut self.limits
    }
}

/// Encoding context. Lifetime is typically tied to an instance of
/// [ContextOwned]. Consulted read-only during an encoding pass, and may be
/// shared by any number of encoders.
#[derive(Debug, Clone)]
pub struct Context<'a> {
    namespaces: &'a NamespaceMap,
    servers: &'a ServerMap,
    type_manager: &'a DataTypeManager,
    limits: EncodingLimits,
}

impl<'a> Context<'a> {
    /// Constructor. Prefer to use `ContextOwned` to avoid having to juggle
    /// the tables yourself.
    pub fn new(
        namespaces: &'a NamespaceMap,
        servers: &'a ServerMap,
        type_manager: &'a DataTypeManager,
        limits: EncodingLimits,
    ) -> Self {
        Self {
            namespaces,
            servers,
            type_manager,
            limits,
        }
    }

    /// Get the namespace table.
    pub fn namespaces(&self) -> &'a NamespaceMap {
        self.namespaces
    }

    /// Get the server table.
    pub fn servers(&self) -> &'a ServerMap {
        self.servers
    }

    /// Get the data type manager.
    pub fn type_manager(&self) -> &'a DataTypeManager {
        self.type_manager
    }

    /// Get the encoding limits.
    pub fn limits(&self) -> EncodingLimits {
        self.limits
    }
}
