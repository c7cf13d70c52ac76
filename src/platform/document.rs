//! Root container lookup

use crate::platform::Node;
use crate::Error;

/// A host document: a `body` node plus lookup of containers by identifier
#[derive(Debug, Clone)]
pub struct Document {
    body: Node,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self {
            body: Node::element("body"),
        }
    }

    /// Create a document whose body holds one empty `div` with the given `id`
    pub fn with_root(id: &str) -> Result<Self, Error> {
        let document = Self::new();
        let root = document.create_element("div");
        root.set_attribute("id", id);
        document.body.append(&root)?;
        Ok(document)
    }

    /// The document body
    pub fn body(&self) -> &Node {
        &self.body
    }

    /// Create a detached element node
    pub fn create_element(&self, tag: &str) -> Node {
        Node::element(tag)
    }

    /// Create a detached text node
    pub fn create_text_node(&self, text: &str) -> Node {
        Node::text(text)
    }

    /// Find the element with the given `id` attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<Node> {
        self.body.find_by_id(id)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
