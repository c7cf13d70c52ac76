//! Listener storage for a single host node

use std::collections::HashMap;

use crate::value::Value;

/// Listeners registered on a node, grouped by event name
///
/// Values are stored as given. Registration never checks callability; a
/// non-callable value simply does nothing when the event fires.
#[derive(Debug, Clone, Default)]
pub struct ListenerTable {
    handlers: HashMap<String, Vec<Value>>,
}

impl ListenerTable {
    /// Create an empty listener table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for an event
    pub fn add(&mut self, event: &str, listener: Value) {
        self.handlers
            .entry(event.to_string())
            .or_default()
            .push(listener);
    }

    /// Snapshot of the listeners registered for an event, in registration order
    pub fn get(&self, event: &str) -> Vec<Value> {
        self.handlers.get(event).cloned().unwrap_or_default()
    }

    /// Number of listeners registered for an event
    pub fn count(&self, event: &str) -> usize {
        self.handlers.get(event).map_or(0, Vec::len)
    }

    /// Total number of listeners across all events
    pub fn len(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }

    /// Whether no listener is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all listeners
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}
