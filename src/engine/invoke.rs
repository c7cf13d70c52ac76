//! Component invocation

use crate::component::{Component, Config, MethodSink, Props, Refs};
use crate::element::Element;
use crate::engine::Engine;
use crate::platform::Node;
use crate::Error;

/// Run a component and apply its ref, got-parent and method outputs
pub(crate) fn invoke(
    engine: &Engine,
    component: &Component,
    config: Config,
    children: Vec<Node>,
) -> Result<Element, Error> {
    let request = config.ref_request()?.cloned();
    let cur = MethodSink::new();

    let result = component.call(Props {
        config,
        children,
        refs: Refs::new(),
        cur: cur.clone(),
        engine: engine.clone(),
    })?;

    if let Some(request) = request {
        request.bind(result.clone());
    }

    if let Some(callback) = cur.take_got_parent() {
        match &result {
            Element::Node(node) => node.push_got_parent(callback),
            Element::Fragment(fragment) => fragment.push_got_parent(callback),
        }
    }

    if cur.is_empty() {
        return Ok(result);
    }

    let Element::Node(node) = &result else {
        return Err(Error::InvalidMethodAttachment {
            component: component.name().map(str::to_string),
            methods: cur.method_names(),
        });
    };
    for (name, method) in cur.drain_methods() {
        log::debug!("attaching method '{}' to node {}", name, node.id());
        node.set_method(name, method);
    }

    Ok(result)
}
