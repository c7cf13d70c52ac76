//! Recognized event names

use std::collections::HashSet;

use crate::utils::{capitalize, decapitalize};

/// Event names recognized by the element builder when it meets an `on<Event>` key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSet {
    names: HashSet<String>,
}

impl EventSet {
    /// The two events recognized out of the box
    pub const DEFAULT_EVENTS: [&'static str; 2] = ["click", "mouseover"];

    /// Build a set from event names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `event` is recognized
    pub fn contains(&self, event: &str) -> bool {
        self.names.contains(event)
    }

    /// Number of recognized events
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve a configuration key such as `onClick` to a recognized event name
    ///
    /// Returns `None` when the key is not of the form `on` + name, or when the
    /// name (first letter lower-cased) is not in the set.
    pub fn event_for_key(&self, key: &str) -> Option<String> {
        let rest = key.strip_prefix("on")?;
        if rest.is_empty() {
            return None;
        }
        let event = decapitalize(rest);
        self.contains(&event).then_some(event)
    }

    /// The configuration key that binds a listener for `event`
    pub fn key_for_event(event: &str) -> String {
        format!("on{}", capitalize(event))
    }
}

impl Default for EventSet {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EVENTS)
    }
}
