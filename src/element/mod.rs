//! Produced elements: host nodes and fragments
//!
//! A component or host build produces either a single [`Node`] or a
//! [`Fragment`], an ordered group of nodes and nested fragments without a
//! host identity of its own.

mod flatten;


pub use flatten::{collect_fragments, flatten, non_text_children, text_children};

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::component::GotParent;
use crate::platform::Node;

/// Shared got-parent notification storage for a fragment
///
/// All clones of one fragment share the slot, so a notification delivered
/// through any clone is gone for every other clone.
#[derive(Clone, Default)]
pub(crate) struct NotifySlot {
    callbacks: Arc<Mutex<Vec<GotParent>>>,
}

impl NotifySlot {
    pub(crate) fn push(&self, callback: GotParent) {
        self.callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(callback);
    }

    pub(crate) fn take(&self) -> Vec<GotParent> {
        std::mem::take(&mut *self.callbacks.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub(crate) fn is_set(&self) -> bool {
        !self
            .callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.callbacks, &other.callbacks)
    }
}

impl fmt::Debug for NotifySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pending = self
            .callbacks
            .lock()
            .map(|callbacks| callbacks.len())
            .unwrap_or(0);
        write!(f, "NotifySlot([{pending} pending])")
    }
}

/// An ordered group of elements with no host node of its own
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    items: Vec<Element>,
    slot: NotifySlot,
}

impl Fragment {
    /// Create a fragment from its items
    pub fn new(items: Vec<Element>) -> Self {
        Self {
            items,
            slot: NotifySlot::default(),
        }
    }

    /// Create an empty fragment
    pub fn empty() -> Self {
        Self::default()
    }

    /// The fragment's direct items
    pub fn items(&self) -> &[Element] {
        &self.items
    }

    /// Number of direct items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the fragment has no direct items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item
    pub fn push(&mut self, item: impl Into<Element>) {
        self.items.push(item.into());
    }

    /// The host nodes of this fragment, flattened in order
    pub fn nodes(&self) -> Vec<Node> {
        flatten(&self.items)
    }

    /// Whether a got-parent notification is still pending on this fragment
    pub fn has_got_parent(&self) -> bool {
        self.slot.is_set()
    }

    pub(crate) fn push_got_parent(&self, callback: GotParent) {
        self.slot.push(callback);
    }

    pub(crate) fn take_got_parent(&self) -> Vec<GotParent> {
        self.slot.take()
    }
}

impl PartialEq for Fragment {
    fn eq(&self, other: &Self) -> bool {
        self.slot.ptr_eq(&other.slot) && self.items == other.items
    }
}

/// The result of building an element: one host node or a fragment
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A single host node
    Node(Node),
    /// A group of elements
    Fragment(Fragment),
}

impl Element {
    /// Borrow the node, if this is a single node
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Element::Node(node) => Some(node),
            Element::Fragment(_) => None,
        }
    }

    /// Borrow the fragment, if this is one
    pub fn as_fragment(&self) -> Option<&Fragment> {
        match self {
            Element::Node(_) => None,
            Element::Fragment(fragment) => Some(fragment),
        }
    }

    /// Take the node, if this is a single node
    pub fn into_node(self) -> Option<Node> {
        match self {
            Element::Node(node) => Some(node),
            Element::Fragment(_) => None,
        }
    }

    /// Whether this is a fragment
    pub fn is_fragment(&self) -> bool {
        matches!(self, Element::Fragment(_))
    }

    /// The host nodes this element stands for, flattened in order
    pub fn nodes(&self) -> Vec<Node> {
        flatten(std::slice::from_ref(self))
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(node)
    }
}

impl From<&Node> for Element {
    fn from(node: &Node) -> Self {
        Element::Node(node.clone())
    }
}

impl From<Fragment> for Element {
    fn from(fragment: Fragment) -> Self {
        Element::Fragment(fragment)
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Element::Node(Node::text(text))
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Element::Node(Node::text(text))
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Node(Node::text(value.to_string()))
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Element::Node(Node::text(value.to_string()))
    }
}

impl From<usize> for Element {
    fn from(value: usize) -> Self {
        Element::Node(Node::text(value.to_string()))
    }
}

impl<T: Into<Element>> From<Vec<T>> for Element {
    fn from(items: Vec<T>) -> Self {
        Element::Fragment(Fragment::new(items.into_iter().map(Into::into).collect()))
    }
}

/// Build a `Vec<Element>` from anything convertible into an element
///
/// ```
/// use xjsx::{children, Element};
///
/// let items: Vec<Element> = children!["Counter ", 1, vec!["a", "b"]];
/// assert_eq!(items.len(), 3);
/// ```
#[macro_export]
macro_rules! children {
    () => {
        ::std::vec::Vec::<$crate::Element>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::Element::from($item)),+]
    };
}
