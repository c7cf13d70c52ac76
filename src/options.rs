//! Engine options

use serde::{Deserialize, Serialize};

use crate::events::EventSet;
use crate::Error;

/// Options an [`Engine`](crate::Engine) is built from
///
/// ```
/// use xjsx::EngineOptions;
///
/// let options = EngineOptions::from_json(r#"{ "events": ["click", "input"] }"#).unwrap();
/// assert!(options.event_set().contains("input"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Event names turned into listeners when they appear as `on<Event>` keys
    pub events: Vec<String>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            events: EventSet::DEFAULT_EVENTS
                .iter()
                .map(|event| event.to_string())
                .collect(),
        }
    }
}

impl EngineOptions {
    /// Parse options from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize options to JSON
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The recognized event allow-list
    pub fn event_set(&self) -> EventSet {
        EventSet::new(self.events.iter().cloned())
    }
}
