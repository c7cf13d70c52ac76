//! The parameter object handed to component functions

use crate::component::{Config, Handler, Method, MethodSink, Refs};
use crate::engine::Engine;
use crate::platform::Node;
use crate::value::Value;

/// Everything a component function receives
///
/// `config` is the caller's configuration map as given, `children` the
/// flattened children. `refs` starts empty and is the component's own output
/// map for `ref` requests on elements it builds. Anything written into `cur`
/// is attached to the node the component returns.
#[derive(Debug, Clone)]
pub struct Props {
    /// Caller-supplied configuration
    pub config: Config,

    /// Flattened children
    pub children: Vec<Node>,

    /// Fresh output reference map
    pub refs: Refs,

    /// Fresh method attachment sink
    pub cur: MethodSink,

    /// The engine invoking this component
    pub engine: Engine,
}

impl Props {
    /// Get a configuration value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.config.get(key)
    }

    /// Get a string configuration value
    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Get an integer configuration value
    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_int)
    }

    /// Get a list configuration value
    pub fn list(&self, key: &str) -> Option<&[Value]> {
        self.get(key).and_then(Value::as_list)
    }

    /// Get a method configuration value
    pub fn method(&self, key: &str) -> Option<&Method> {
        self.get(key).and_then(Value::as_method)
    }

    /// Get a handler configuration value
    pub fn handler(&self, key: &str) -> Option<&Handler> {
        self.get(key).and_then(Value::as_handler)
    }
}
