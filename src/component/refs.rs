//! Output reference maps and requests

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::element::Element;
use crate::platform::Node;

/// Caller-owned map receiving produced elements by key
///
/// Cloning shares the map. The engine writes one entry per reference request
/// and never touches other keys.
#[derive(Clone, Default)]
pub struct Refs {
    entries: Arc<RwLock<HashMap<String, Element>>>,
}

impl Refs {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the element stored under `key`
    pub fn get(&self, key: &str) -> Option<Element> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Get the node stored under `key`, if it holds a single node
    pub fn node(&self, key: &str) -> Option<Node> {
        self.get(key).and_then(Element::into_node)
    }

    /// Whether `key` has been written
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    /// Written keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    /// Number of written keys
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been written
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether both handles share one map
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    fn insert(&self, key: &str, element: Element) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), element);
    }
}

impl fmt::Debug for Refs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refs").field("keys", &self.keys()).finish()
    }
}

/// Request to expose a produced element in `sink` under `key`
#[derive(Debug, Clone)]
pub struct RefRequest {
    key: String,
    sink: Refs,
}

impl RefRequest {
    /// Create a request writing into `sink`
    pub fn new(key: impl Into<String>, sink: &Refs) -> Self {
        Self {
            key: key.into(),
            sink: sink.clone(),
        }
    }

    /// The key to write
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The target map
    pub fn sink(&self) -> &Refs {
        &self.sink
    }

    pub(crate) fn bind(&self, element: Element) {
        log::debug!("binding ref '{}'", self.key);
        self.sink.insert(&self.key, element);
    }
}
