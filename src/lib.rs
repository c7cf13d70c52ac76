// Core module of the Xjsx composition engine
//
// Turns a tree of function components and host element descriptors into a
// live host tree. Components can hand out references to the nodes they
// build, attach methods to the node they return, and learn when their output
// lands under a parent node.

pub mod component;
pub mod element;
pub mod engine;
pub mod events;
pub mod options;
pub mod platform;
pub mod utils;
pub mod value;

pub use component::{
    callback, Callback, Component, Config, ElementType, GotParent, Handler, Method, MethodSink,
    Props, RefRequest, Refs,
};
pub use element::{collect_fragments, flatten, non_text_children, text_children, Element, Fragment};
pub use engine::{create, render, Engine};
pub use events::{Event, EventSet};
pub use options::EngineOptions;
pub use platform::{Document, Node, NodeKind};
pub use value::Value;

/// Version of the Xjsx engine
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export of common types for convenience
pub mod prelude {
    pub use crate::component::{
        Component, Config, GotParent, Handler, Method, MethodSink, Props, RefRequest, Refs,
    };
    pub use crate::element::{non_text_children, text_children, Element, Fragment};
    pub use crate::engine::Engine;
    pub use crate::platform::{Document, Node};
    pub use crate::value::Value;
    pub use crate::{children, component, Error};
}

/// Errors that can occur while building or rendering
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Root with id '{0}' does not exist")]
    RootNotFound(String),

    #[error(
        "{}cannot attach methods {:?} to a component that returns a fragment; only 'onGotParent' may be set on a fragment",
        component_prefix(.component),
        .methods
    )]
    InvalidMethodAttachment {
        component: Option<String>,
        methods: Vec<String>,
    },

    #[error("Malformed ref request: {0}")]
    MalformedRef(String),

    #[error("Hierarchy error: {0}")]
    Hierarchy(String),

    #[error("Options error: {0}")]
    Options(#[from] serde_json::Error),

    #[error("Component error: {0}")]
    Component(#[from] anyhow::Error),
}

fn component_prefix(component: &Option<String>) -> String {
    match component {
        Some(name) => format!("'{name}' component: "),
        None => String::new(),
    }
}
