//! Configuration maps passed to host elements and components

use crate::component::{Handler, RefRequest};
use crate::events::EventSet;
use crate::value::Value;
use crate::Error;

/// Reserved key carrying an output reference request
pub const REF_KEY: &str = "ref";

/// Insertion-ordered map from property name to value
#[derive(Debug, Clone, Default)]
pub struct Config {
    entries: Vec<(String, Value)>,
}

impl Config {
    /// Create an empty configuration map
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Config::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Bind `handler` to `event` under the matching `on<Event>` key
    pub fn on(self, event: &str, handler: Handler) -> Self {
        self.with(EventSet::key_for_event(event), handler)
    }

    /// Request the produced element under `request`'s key
    pub fn with_ref(self, request: RefRequest) -> Self {
        self.with(REF_KEY, request)
    }

    /// Set a value, replacing an existing one in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get a value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Remove a value
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(name, _)| name == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Whether the key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The output reference request, if any
    ///
    /// A `ref` entry holding anything other than a [`RefRequest`] is a
    /// caller contract violation.
    pub fn ref_request(&self) -> Result<Option<&RefRequest>, Error> {
        match self.get(REF_KEY) {
            None => Ok(None),
            Some(Value::Ref(request)) => Ok(Some(request)),
            Some(other) => Err(Error::MalformedRef(format!(
                "expected a (key, map) reference request, got '{other}'"
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Config {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Config::new();
        for (key, value) in iter {
            config.set(key, value);
        }
        config
    }
}
