//! Got-parent notification delivery

use crate::component::GotParent;
use crate::element::{Element, Fragment};
use crate::platform::Node;

/// Deliver pending got-parent notifications of `children` and `fragments` to `result`
///
/// Every notification is drained as it is collected, so each fires at most
/// once. When `result` is itself a fragment there is no parent node yet: the
/// notifications move onto `result` and fire together with its own, once it
/// lands under a real node.
pub(crate) fn deliver(result: &Element, children: &[Node], fragments: &[Fragment]) {
    let mut pending: Vec<GotParent> = Vec::new();

    for child in children {
        // A component may hand back one of its own children
        if result.as_node() == Some(child) {
            continue;
        }
        pending.extend(child.take_got_parent());
    }
    for fragment in fragments {
        pending.extend(fragment.take_got_parent());
    }

    if pending.is_empty() {
        return;
    }

    match result {
        Element::Node(parent) => {
            log::debug!(
                "delivering {} got-parent notifications to node {}",
                pending.len(),
                parent.id()
            );
            for callback in pending {
                callback.call(parent.clone());
            }
        }
        Element::Fragment(fragment) => {
            log::debug!(
                "deferring {} got-parent notifications to the enclosing fragment",
                pending.len()
            );
            for callback in pending {
                fragment.push_got_parent(callback);
            }
        }
    }
}
