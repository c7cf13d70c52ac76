//! Element creation and rendering
//!
//! [`Engine::create`] is the single entry point for building elements. It
//! flattens the children, dispatches on the [`ElementType`], and finally
//! delivers got-parent notifications to everything that was just placed
//! under a real node. [`Engine::render`] appends a finished tree under a root
//! container.

mod host;
mod invoke;
mod notify;

#[cfg(test)]
mod tests;

use std::sync::{Arc, OnceLock};

use crate::component::{Config, ElementType};
use crate::element::{collect_fragments, flatten, Element};
use crate::events::EventSet;
use crate::options::EngineOptions;
use crate::platform::{Document, Node};
use crate::Error;

/// Stateless composition engine
///
/// Holds only the immutable event allow-list, so clones are cheap and any
/// number of renders may share one engine.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    events: Arc<EventSet>,
}

impl Engine {
    /// Create an engine from options
    pub fn new(options: &EngineOptions) -> Self {
        Self::with_events(options.event_set())
    }

    /// Create an engine recognizing exactly `events`
    pub fn with_events(events: EventSet) -> Self {
        Self {
            events: Arc::new(events),
        }
    }

    /// The recognized event allow-list
    pub fn events(&self) -> &EventSet {
        &self.events
    }

    /// Build a host element or invoke a component
    ///
    /// Children may be nodes or fragments nested to any depth; they are
    /// flattened before use. Once the result exists, every child and every
    /// nested fragment with a pending got-parent notification is told about
    /// it.
    pub fn create(
        &self,
        element_type: impl Into<ElementType>,
        config: Config,
        children: Vec<Element>,
    ) -> Result<Element, Error> {
        let fragments = collect_fragments(&children);
        let children = flatten(&children);

        let result = match element_type.into() {
            ElementType::Tag(tag) => {
                log::trace!("creating <{}> with {} children", tag, children.len());
                Element::Node(host::build(self, &tag, &config, &children)?)
            }
            ElementType::Component(component) => {
                log::trace!(
                    "invoking component {} with {} children",
                    component.name().unwrap_or("<anonymous>"),
                    children.len()
                );
                invoke::invoke(self, &component, config, children.clone())?
            }
        };

        notify::deliver(&result, &children, &fragments);
        Ok(result)
    }

    /// Append the flattened `tree` under the element with id `root_id`
    ///
    /// The root is not treated as a parent for got-parent notifications.
    pub fn render(
        &self,
        document: &Document,
        tree: impl Into<Element>,
        root_id: &str,
    ) -> Result<(), Error> {
        let root = document
            .get_element_by_id(root_id)
            .ok_or_else(|| Error::RootNotFound(root_id.to_string()))?;
        self.render_into(&root, tree)
    }

    /// Append the flattened `tree` under `root`
    pub fn render_into(&self, root: &Node, tree: impl Into<Element>) -> Result<(), Error> {
        let nodes = tree.into().nodes();
        log::debug!("rendering {} nodes into node {}", nodes.len(), root.id());
        for node in &nodes {
            root.append(node)?;
        }
        Ok(())
    }
}

fn default_engine() -> &'static Engine {
    static ENGINE: OnceLock<Engine> = OnceLock::new();
    ENGINE.get_or_init(Engine::default)
}

/// [`Engine::create`] on an engine with the default event allow-list
pub fn create(
    element_type: impl Into<ElementType>,
    config: Config,
    children: Vec<Element>,
) -> Result<Element, Error> {
    default_engine().create(element_type, config, children)
}

/// [`Engine::render`] on an engine with the default event allow-list
pub fn render(document: &Document, tree: impl Into<Element>, root_id: &str) -> Result<(), Error> {
    default_engine().render(document, tree, root_id)
}
