//! Component model for the composition engine
//!
//! A component is a named function from [`Props`] to an [`Element`]. Besides
//! the caller's configuration it receives three channels:
//!
//! 1. `refs` - an output map for `ref` requests on the elements it builds
//! 2. `cur` - a [`MethodSink`] whose methods are attached to the returned node
//! 3. the got-parent slot of `cur`, fired once the returned node or fragment
//!    lands under a real parent node

mod callback;
mod config;
mod methods;
mod props;
mod refs;


pub use callback::{callback, Callback, GotParent, Handler, Method};
pub use config::{Config, REF_KEY};
pub use methods::{MethodSink, GOT_PARENT_KEY};
pub use props::Props;
pub use refs::{RefRequest, Refs};

use std::fmt;
use std::sync::Arc;

use crate::element::Element;
use crate::Error;

/// Type for component render functions
type RenderFn = dyn Fn(Props) -> Result<Element, Error> + Send + Sync;

/// A component function, optionally named for error messages
#[derive(Clone)]
pub struct Component {
    name: Option<String>,
    render: Arc<RenderFn>,
}

impl Component {
    /// Create a named component
    pub fn new<F>(name: impl Into<String>, render: F) -> Self
    where
        F: Fn(Props) -> Result<Element, Error> + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            render: Arc::new(render),
        }
    }

    /// Create a component without a name
    pub fn anonymous<F>(render: F) -> Self
    where
        F: Fn(Props) -> Result<Element, Error> + Send + Sync + 'static,
    {
        Self {
            name: None,
            render: Arc::new(render),
        }
    }

    /// The component's name, if it has one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn call(&self, props: Props) -> Result<Element, Error> {
        (self.render)(props)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// What `create` builds: a host element by tag, or a component
#[derive(Debug, Clone)]
pub enum ElementType {
    /// Host element tag name
    Tag(String),
    /// Component function
    Component(Component),
}

impl From<&str> for ElementType {
    fn from(tag: &str) -> Self {
        ElementType::Tag(tag.to_string())
    }
}

impl From<String> for ElementType {
    fn from(tag: String) -> Self {
        ElementType::Tag(tag)
    }
}

impl From<Component> for ElementType {
    fn from(component: Component) -> Self {
        ElementType::Component(component)
    }
}

impl From<&Component> for ElementType {
    fn from(component: &Component) -> Self {
        ElementType::Component(component.clone())
    }
}

/// Wrap a component function, naming it after the function
///
/// ```
/// use xjsx::{component, Element, Error, Props};
///
/// fn greeting(_props: Props) -> Result<Element, Error> {
///     Ok(Element::from("hello"))
/// }
///
/// assert_eq!(component!(greeting).name(), Some("greeting"));
/// ```
#[macro_export]
macro_rules! component {
    ($render:path) => {
        $crate::Component::new(stringify!($render), $render)
    };
}
