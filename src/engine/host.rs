//! Host element construction

use crate::component::{Config, REF_KEY};
use crate::element::Element;
use crate::engine::Engine;
use crate::platform::Node;
use crate::Error;

/// Create one host node, bind its ref, apply attributes and listeners, append children
pub(crate) fn build(
    engine: &Engine,
    tag: &str,
    config: &Config,
    children: &[Node],
) -> Result<Node, Error> {
    let node = Node::element(tag);

    // Bound before anything else is applied
    if let Some(request) = config.ref_request()? {
        request.bind(Element::Node(node.clone()));
    }

    for (key, value) in config.iter() {
        if key == REF_KEY {
            continue;
        }
        match engine.events().event_for_key(key) {
            Some(event) => node.add_event_listener(&event, value.clone()),
            None => node.set_attribute(key, value.to_string()),
        }
    }

    for child in children {
        node.append(child)?;
    }

    Ok(node)
}
