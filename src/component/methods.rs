//! Per-invocation method attachment sink (`cur`)

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::component::{GotParent, Method};
use crate::platform::Node;
use crate::value::Value;

/// Method name reserved for the got-parent notification
pub const GOT_PARENT_KEY: &str = "onGotParent";

#[derive(Default)]
struct MethodTable {
    /// Methods in insertion order, later writes replace earlier ones
    methods: Vec<(String, Method)>,
    got_parent: Option<GotParent>,
}

/// Sink a component writes methods into; they end up on the node it returns
///
/// One fresh sink is created for every component invocation. The engine keeps
/// a handle and reads it back once the component function returns.
#[derive(Clone, Default)]
pub struct MethodSink {
    table: Arc<Mutex<MethodTable>>,
}

impl MethodSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MethodTable> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Expose `method` as `name` on the produced node
    ///
    /// Writing under [`GOT_PARENT_KEY`] registers the got-parent notification
    /// instead; the method then receives the parent node as its only argument.
    pub fn insert(&self, name: impl Into<String>, method: Method) {
        let name = name.into();
        if name == GOT_PARENT_KEY {
            self.set_got_parent(GotParent::new(move |parent: Node| {
                method.call(vec![Value::Node(parent)]);
            }));
            return;
        }

        let mut table = self.lock();
        match table.methods.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = method,
            None => table.methods.push((name, method)),
        }
    }

    /// Register the got-parent notification, replacing a previous one
    pub fn set_got_parent(&self, callback: GotParent) {
        self.lock().got_parent = Some(callback);
    }

    /// Closure form of [`MethodSink::set_got_parent`]
    pub fn on_got_parent<F>(&self, callback: F)
    where
        F: Fn(Node) + Send + Sync + 'static,
    {
        self.set_got_parent(GotParent::new(callback));
    }

    /// Whether a method named `name` was written
    pub fn contains(&self, name: &str) -> bool {
        if name == GOT_PARENT_KEY {
            return self.has_got_parent();
        }
        self.lock().methods.iter().any(|(key, _)| key == name)
    }

    /// Whether a got-parent notification was registered
    pub fn has_got_parent(&self) -> bool {
        self.lock().got_parent.is_some()
    }

    /// Number of entries, counting the got-parent notification
    pub fn len(&self) -> usize {
        let table = self.lock();
        table.methods.len() + usize::from(table.got_parent.is_some())
    }

    /// Whether nothing was written
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn take_got_parent(&self) -> Option<GotParent> {
        self.lock().got_parent.take()
    }

    pub(crate) fn method_names(&self) -> Vec<String> {
        self.lock()
            .methods
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub(crate) fn drain_methods(&self) -> Vec<(String, Method)> {
        std::mem::take(&mut self.lock().methods)
    }
}

impl fmt::Debug for MethodSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.lock();
        f.debug_struct("MethodSink")
            .field(
                "methods",
                &table.methods.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .field("got_parent", &table.got_parent.is_some())
            .finish()
    }
}
