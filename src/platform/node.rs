//! Host node implementation with listener, method and got-parent support

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use crate::component::{GotParent, Method};
use crate::events::{Event, ListenerTable};
use crate::utils::{escape_attribute, escape_text};
use crate::value::Value;
use crate::Error;

/// What a host node is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Element with a tag name
    Element(String),
    /// Text leaf
    Text(String),
}

#[derive(Debug)]
struct NodeData {
    /// Unique identifier for this node
    id: usize,

    kind: NodeKind,

    /// Attributes in insertion order
    attributes: Vec<(String, String)>,

    listeners: ListenerTable,

    /// Methods attached by the component that produced this node
    methods: HashMap<String, Method>,

    /// Child nodes
    children: Vec<Node>,

    /// Current parent, if attached
    parent: Weak<RwLock<NodeData>>,

    /// Pending got-parent notifications, drained on delivery
    got_parent: Vec<GotParent>,
}

/// A shared handle to a node in the host tree
///
/// Cloning a `Node` clones the handle; both clones refer to the same node.
/// Equality is handle identity.
#[derive(Clone)]
pub struct Node {
    inner: Arc<RwLock<NodeData>>,
}

impl Node {
    fn with_kind(kind: NodeKind) -> Self {
        static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);

        Self {
            inner: Arc::new(RwLock::new(NodeData {
                id,
                kind,
                attributes: Vec::new(),
                listeners: ListenerTable::new(),
                methods: HashMap::new(),
                children: Vec::new(),
                parent: Weak::new(),
                got_parent: Vec::new(),
            })),
        }
    }

    /// Create a new element node
    pub fn element(tag: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Element(tag.into()))
    }

    /// Create a new text node
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Text(text.into()))
    }

    fn read(&self) -> RwLockReadGuard<'_, NodeData> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, NodeData> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the node's ID
    pub fn id(&self) -> usize {
        self.read().id
    }

    /// What kind of node this is
    pub fn kind(&self) -> NodeKind {
        self.read().kind.clone()
    }

    /// Tag name, `None` for text nodes
    pub fn tag(&self) -> Option<String> {
        match &self.read().kind {
            NodeKind::Element(tag) => Some(tag.clone()),
            NodeKind::Text(_) => None,
        }
    }

    /// Whether this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self.read().kind, NodeKind::Text(_))
    }

    /// Set an attribute, replacing any previous value in place
    pub fn set_attribute(&self, name: &str, value: impl Into<String>) {
        let value = value.into();
        let mut data = self.write();
        match data.attributes.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => data.attributes.push((name.to_string(), value)),
        }
    }

    /// Get an attribute
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.read()
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    /// Whether the attribute is set
    pub fn has_attribute(&self, name: &str) -> bool {
        self.read().attributes.iter().any(|(key, _)| key == name)
    }

    /// Remove an attribute, returning its previous value
    pub fn remove_attribute(&self, name: &str) -> Option<String> {
        let mut data = self.write();
        let index = data.attributes.iter().position(|(key, _)| key == name)?;
        Some(data.attributes.remove(index).1)
    }

    /// Get attributes in insertion order
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.read().attributes.clone()
    }

    /// Register a listener; the value is stored even if it is not callable
    pub fn add_event_listener(&self, event: &str, listener: impl Into<Value>) {
        self.write().listeners.add(event, listener.into());
    }

    /// Number of listeners registered for `event`
    pub fn listener_count(&self, event: &str) -> usize {
        self.read().listeners.count(event)
    }

    /// Total number of listeners on this node
    pub fn total_listener_count(&self) -> usize {
        self.read().listeners.len()
    }

    /// Dispatch an event on this node, bubbling to its ancestors
    pub fn dispatch_event(&self, kind: &str) -> Event {
        let event = Event::new(kind, self.clone());
        let mut current = Some(self.clone());

        while let Some(node) = current {
            // Snapshot so listeners may freely mutate the tree
            let listeners = node.read().listeners.get(kind);
            let local = event.at(node.clone());
            for listener in listeners {
                match listener {
                    Value::Handler(handler) => handler.call(local.clone()),
                    Value::Method(method) => {
                        method.call(vec![Value::Node(self.clone())]);
                    }
                    other => log::warn!(
                        "ignoring non-callable '{}' listener on node {}: {}",
                        kind,
                        node.id(),
                        other
                    ),
                }
            }
            if event.is_propagation_stopped() {
                break;
            }
            current = node.parent();
        }

        event
    }

    /// Simulate the primary activation event
    pub fn click(&self) -> Event {
        self.dispatch_event("click")
    }

    /// Attach a method, replacing one with the same name
    pub fn set_method(&self, name: impl Into<String>, method: Method) {
        self.write().methods.insert(name.into(), method);
    }

    /// Get an attached method
    pub fn method(&self, name: &str) -> Option<Method> {
        self.read().methods.get(name).cloned()
    }

    /// Call an attached method, `None` if no such method exists
    pub fn call_method(&self, name: &str, args: Vec<Value>) -> Option<Value> {
        let method = self.method(name)?;
        Some(method.call(args))
    }

    /// Names of attached methods, sorted
    pub fn method_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().methods.keys().cloned().collect();
        names.sort();
        names
    }

    pub(crate) fn push_got_parent(&self, callback: GotParent) {
        self.write().got_parent.push(callback);
    }

    pub(crate) fn take_got_parent(&self) -> Vec<GotParent> {
        std::mem::take(&mut self.write().got_parent)
    }

    /// Whether a got-parent notification is still pending on this node
    pub fn has_got_parent(&self) -> bool {
        !self.read().got_parent.is_empty()
    }

    /// Get the current parent
    pub fn parent(&self) -> Option<Node> {
        self.read().parent.upgrade().map(|inner| Node { inner })
    }

    /// Get a snapshot of the child nodes
    pub fn children(&self) -> Vec<Node> {
        self.read().children.clone()
    }

    /// Number of child nodes
    pub fn child_count(&self) -> usize {
        self.read().children.len()
    }

    /// Whether `self` is `other` or one of its ancestors
    pub fn contains(&self, other: &Node) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node == *self {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// Append a child, moving it out of its current parent first
    pub fn append(&self, child: &Node) -> Result<(), Error> {
        if self.is_text() {
            return Err(Error::Hierarchy(format!(
                "cannot append node {} to text node {}",
                child.id(),
                self.id()
            )));
        }
        if child.contains(self) {
            return Err(Error::Hierarchy(format!(
                "cannot append node {} into itself or its own descendant {}",
                child.id(),
                self.id()
            )));
        }

        child.remove();
        child.write().parent = Arc::downgrade(&self.inner);
        self.write().children.push(child.clone());
        Ok(())
    }

    /// Detach this node from its parent
    pub fn remove(&self) {
        let parent = self.parent();
        if let Some(parent) = parent {
            parent.write().children.retain(|node| node != self);
        }
        self.write().parent = Weak::new();
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let data = self.read();
        match &data.kind {
            NodeKind::Text(text) => text.clone(),
            NodeKind::Element(_) => data.children.iter().map(Node::text_content).collect(),
        }
    }

    /// Replace all children with a single text node holding `text`
    pub fn set_text_content(&self, text: impl Into<String>) {
        let text = text.into();
        if let NodeKind::Text(current) = &mut self.write().kind {
            *current = text;
            return;
        }

        let old = std::mem::take(&mut self.write().children);
        for child in old {
            child.write().parent = Weak::new();
        }
        if !text.is_empty() {
            let leaf = Node::text(text);
            leaf.write().parent = Arc::downgrade(&self.inner);
            self.write().children.push(leaf);
        }
    }

    /// Serialize this node and its descendants
    pub fn to_html(&self) -> String {
        let data = self.read();
        match &data.kind {
            NodeKind::Text(text) => escape_text(text),
            NodeKind::Element(tag) => {
                let mut out = format!("<{tag}");
                for (key, value) in &data.attributes {
                    out.push_str(&format!(" {}=\"{}\"", key, escape_attribute(value)));
                }
                out.push('>');
                for child in &data.children {
                    out.push_str(&child.to_html());
                }
                out.push_str(&format!("</{tag}>"));
                out
            }
        }
    }

    /// Depth-first search for the first element whose `id` attribute matches
    pub fn find_by_id(&self, id: &str) -> Option<Node> {
        if self.attribute("id").as_deref() == Some(id) {
            return Some(self.clone());
        }
        self.children()
            .iter()
            .find_map(|child| child.find_by_id(id))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read();
        f.debug_struct("Node")
            .field("id", &data.id)
            .field("kind", &data.kind)
            .field("attributes", &data.attributes)
            .field("children", &format!("[{} nodes]", data.children.len()))
            .field("methods", &format!("[{} methods]", data.methods.len()))
            .finish()
    }
}
