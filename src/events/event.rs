//! Event value delivered to listeners

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::platform::Node;

/// An event travelling from its target up through the target's ancestors
#[derive(Debug, Clone)]
pub struct Event {
    /// Event name, e.g. `click`
    kind: String,

    /// The node the event was dispatched on
    target: Node,

    /// The node whose listeners are currently running
    current_target: Node,

    /// Shared between every clone handed to listeners of one dispatch
    stopped: Arc<AtomicBool>,
}

impl Event {
    /// Create a new event targeting `target`
    pub fn new(kind: impl Into<String>, target: Node) -> Self {
        Self {
            kind: kind.into(),
            current_target: target.clone(),
            target,
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Event name
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The node the event was dispatched on
    pub fn target(&self) -> &Node {
        &self.target
    }

    /// The node whose listeners are currently running
    pub fn current_target(&self) -> &Node {
        &self.current_target
    }

    /// Stop the event from reaching further ancestors
    pub fn stop_propagation(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Check if propagation is stopped
    pub fn is_propagation_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    pub(crate) fn at(&self, current_target: Node) -> Self {
        Self {
            kind: self.kind.clone(),
            target: self.target.clone(),
            current_target,
            stopped: self.stopped.clone(),
        }
    }
}
