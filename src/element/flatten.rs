//! Children flattening and classification

use crate::element::{Element, Fragment};
use crate::platform::Node;

/// Flatten arbitrarily nested fragments into one ordered list of nodes
///
/// Depth-first, left to right. Pure: no notification is consumed.
pub fn flatten(items: &[Element]) -> Vec<Node> {
    let mut nodes = Vec::new();
    flatten_into(items, &mut nodes);
    nodes
}

fn flatten_into(items: &[Element], out: &mut Vec<Node>) {
    for item in items {
        match item {
            Element::Node(node) => out.push(node.clone()),
            Element::Fragment(fragment) => flatten_into(fragment.items(), out),
        }
    }
}

/// Every fragment found among `items`, at any nesting depth, outermost first
pub fn collect_fragments(items: &[Element]) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    collect_into(items, &mut fragments);
    fragments
}

fn collect_into(items: &[Element], out: &mut Vec<Fragment>) {
    for item in items {
        if let Element::Fragment(fragment) = item {
            out.push(fragment.clone());
            collect_into(fragment.items(), out);
        }
    }
}

/// The element children, dropping text nodes
pub fn non_text_children(children: &[Node]) -> Vec<Node> {
    children
        .iter()
        .filter(|child| !child.is_text())
        .cloned()
        .collect()
}

/// Only the text children
pub fn text_children(children: &[Node]) -> Vec<Node> {
    children
        .iter()
        .filter(|child| child.is_text())
        .cloned()
        .collect()
}
