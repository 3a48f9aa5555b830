//! Utilities for working with the namespace and server tables.

use hashbrown::HashMap;

/// The base namespace, present in every namespace table at index 0.
pub const BASE_NAMESPACE: &str = "http://opcfoundation.org/UA/";

/// Map of namespace URIs to namespace indexes.
#[derive(Debug, Clone)]
pub struct NamespaceMap {
    known_namespaces: HashMap<String, u16>,
}

impl Default for NamespaceMap {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceMap {
    /// Create a new namespace map containing only the base namespace.
    pub fn new() -> Self {
        let mut known_namespaces = HashMap::new();
        known_namespaces.insert(BASE_NAMESPACE.to_owned(), 0u16);

        Self { known_namespaces }
    }

    /// Create a new namespace map from the given list of namespaces.
    pub fn new_full(map: HashMap<String, u16>) -> Self {
        Self {
            known_namespaces: map,
        }
    }

    /// Add a new namespace, returning its index in the namespace map.
    /// If the namespace is already added, its old index is returned.
    pub fn add_namespace(&mut self, namespace: &str) -> u16 {
        if let Some(ns) = self.known_namespaces.get(namespace) {
            return *ns;
        }
        let max = self
            .known_namespaces
            .iter()
            .map(|kv| *kv.1)
            .max()
            .unwrap_or_default();
        self.known_namespaces.insert(namespace.to_owned(), max + 1);

        max + 1
    }

    /// Return the inner namespace map.
    pub fn known_namespaces(&self) -> &HashMap<String, u16> {
        &self.known_namespaces
    }

    /// Get the index of the given namespace.
    pub fn get_index(&self, ns: &str) -> Option<u16> {
        self.known_namespaces.get(ns).copied()
    }

    /// Look up a namespace URI by its index.
    pub fn uri_by_index(&self, index: u16) -> Option<&str> {
        self.known_namespaces
            .iter()
            .find(|(_, i)| **i == index)
            .map(|(uri, _)| uri.as_str())
    }
}

/// Map of server URIs to server indexes. Index 0 is the local server.
#[derive(Debug, Clone, Default)]
pub struct ServerMap {
    known_servers: HashMap<String, u32>,
}

impl ServerMap {
    /// Create a new empty server map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new server URI, returning its index in the server map. The
    /// first URI added receives index 0, the local server.
    /// If the URI is already added, its old index is returned.
    pub fn add_server(&mut self, server: &str) -> u32 {
        if let Some(s) = self.known_servers.get(server) {
            return *s;
        }
        let next = self
            .known_servers
            .values()
            .map(|v| *v + 1)
            .max()
            .unwrap_or_default();
        self.known_servers.insert(server.to_owned(), next);

        next
    }

    /// Get the index of the given server URI.
    pub fn get_index(&self, server: &str) -> Option<u32> {
        self.known_servers.get(server).copied()
    }

    /// Look up a server URI by its index.
    pub fn uri_by_index(&self, index: u32) -> Option<&str> {
        self.known_servers
            .iter()
            .find(|(_, i)| **i == index)
            .map(|(uri, _)| uri.as_str())
    }
}
