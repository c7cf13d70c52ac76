//! Tests for element creation, notification delivery and rendering

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::component::{Component, Config, Handler, Method, Props, RefRequest, Refs};
use crate::element::{Element, Fragment};
use crate::engine::Engine;
use crate::events::EventSet;
use crate::platform::{Document, Node};
use crate::value::Value;
use crate::{children, Error};

type Parents = Arc<Mutex<Vec<Node>>>;

/// A component returning `size` empty spans that records every parent it is told about
fn notifying(size: usize, parents: &Parents) -> Component {
    let parents = parents.clone();
    Component::new("Notifying", move |props: Props| {
        let parents = parents.clone();
        props.cur.on_got_parent(move |parent| {
            parents.lock().unwrap().push(parent);
        });
        let items: Vec<Element> = (0..size).map(|_| Element::from(Node::element("span"))).collect();
        Ok(Element::Fragment(Fragment::new(items)))
    })
}

fn host_node(element: Element) -> Node {
    element.into_node().expect("expected a single node")
}

#[test]
fn host_build_sets_attributes_and_children() {
    let engine = Engine::default();
    let div = host_node(
        engine
            .create(
                "div",
                Config::new().with("class", "box").with("tabindex", 3),
                children!["a", vec!["b", "c"]],
            )
            .unwrap(),
    );

    assert_eq!(div.to_html(), "<div class=\"box\" tabindex=\"3\">abc</div>");
    assert_eq!(div.child_count(), 3);
}

#[test]
fn recognized_event_key_installs_listener() {
    let engine = Engine::default();
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = clicks.clone();
    let button = host_node(
        engine
            .create(
                "button",
                Config::new().on("click", Handler::new(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                })),
                children![],
            )
            .unwrap(),
    );

    assert_eq!(button.listener_count("click"), 1);
    assert!(!button.has_attribute("onClick"));
    assert!(!button.has_attribute("click"));

    button.click();
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
}

#[test]
fn unrecognized_event_key_becomes_attribute() {
    let engine = Engine::default();
    let div = host_node(
        engine
            .create("div", Config::new().with("onFrobnicate", "x"), children![])
            .unwrap(),
    );

    assert_eq!(div.attribute("onFrobnicate").as_deref(), Some("x"));
    assert_eq!(div.total_listener_count(), 0);
}

#[test]
fn non_callable_listener_is_still_registered() {
    let engine = Engine::default();
    let button = host_node(
        engine
            .create("button", Config::new().with("onMouseover", 5), children![])
            .unwrap(),
    );

    assert_eq!(button.listener_count("mouseover"), 1);
    assert!(!button.has_attribute("onMouseover"));
    button.dispatch_event("mouseover");
}

#[test]
fn custom_event_set_is_honored() {
    let engine = Engine::with_events(EventSet::new(["input"]));
    let field = host_node(
        engine
            .create(
                "input",
                Config::new()
                    .with("onInput", Handler::new(|_| {}))
                    .with("onClick", "literal"),
                children![],
            )
            .unwrap(),
    );

    assert_eq!(field.listener_count("input"), 1);
    assert_eq!(field.attribute("onClick").as_deref(), Some("literal"));
}

#[test]
fn host_ref_is_written_once() {
    let engine = Engine::default();
    let refs = Refs::new();
    let span = host_node(
        engine
            .create(
                "span",
                Config::new().with_ref(RefRequest::new("text", &refs)),
                children!["0"],
            )
            .unwrap(),
    );

    assert_eq!(refs.keys(), vec!["text".to_string()]);
    assert_eq!(refs.node("text"), Some(span.clone()));
    assert!(!span.has_attribute("ref"));
}

#[test]
fn malformed_ref_fails_create() {
    let engine = Engine::default();
    let err = engine
        .create("div", Config::new().with("ref", "oops"), children![])
        .unwrap_err();
    assert!(matches!(err, Error::MalformedRef(_)));
}

#[test]
fn component_receives_flattened_children_and_fresh_channels() {
    let engine = Engine::default();
    let seen = Arc::new(Mutex::new(None));
    let record = seen.clone();
    let probe = Component::new("Probe", move |props: Props| {
        *record.lock().unwrap() = Some((
            props.children.len(),
            props.refs.is_empty(),
            props.cur.is_empty(),
            props.str("title").map(str::to_string),
        ));
        Ok(Element::Fragment(Fragment::new(
            props.children.iter().map(Element::from).collect(),
        )))
    });

    let result = engine
        .create(
            &probe,
            Config::new().with("title", "hello"),
            children!["a", vec![Element::from("b"), vec!["c"].into()]],
        )
        .unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        Some((3, true, true, Some("hello".to_string())))
    );
    assert_eq!(result.nodes().len(), 3);
}

#[test]
fn component_ref_receives_fragment() {
    let engine = Engine::default();
    let refs = Refs::new();
    let pair = Component::new("Pair", |_props: Props| Ok(Element::from(vec!["x", "y"])));

    let result = engine
        .create(&pair, Config::new().with_ref(RefRequest::new("pair", &refs)), children![])
        .unwrap();

    assert_eq!(refs.get("pair"), Some(result));
    assert_eq!(refs.len(), 1);
}

#[test]
fn methods_are_merged_onto_returned_node() {
    let engine = Engine::default();
    let widget = Component::new("Widget", |props: Props| {
        props.cur.insert("answer", Method::new(|_| Value::Int(42)));
        props.engine.create("div", Config::new(), children![])
    });

    let node = host_node(engine.create(&widget, Config::new(), children![]).unwrap());
    assert_eq!(node.call_method("answer", Vec::new()).and_then(|v| v.as_int()), Some(42));
}

#[test]
fn fragment_with_methods_fails_without_attaching() {
    let engine = Engine::default();
    let first = Node::element("li");
    let second = Node::element("li");
    let (a, b) = (first.clone(), second.clone());
    let list = Component::new("List", move |props: Props| {
        props.cur.insert("reset", Method::new(|_| Value::Null));
        Ok(Element::from(vec![a.clone(), b.clone()]))
    });

    let err = engine.create(&list, Config::new(), children![]).unwrap_err();
    match &err {
        Error::InvalidMethodAttachment { component, methods } => {
            assert_eq!(component.as_deref(), Some("List"));
            assert_eq!(methods, &vec!["reset".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("'List' component: "));
    assert!(first.method("reset").is_none());
    assert!(second.method("reset").is_none());
}

#[test]
fn anonymous_component_error_has_no_prefix() {
    let engine = Engine::default();
    let list = Component::anonymous(|props: Props| {
        props.cur.insert("reset", Method::new(|_| Value::Null));
        Ok(Element::Fragment(Fragment::empty()))
    });

    let err = engine.create(&list, Config::new(), children![]).unwrap_err();
    assert!(err.to_string().starts_with("cannot attach methods"));
}

#[test]
fn fragment_may_carry_got_parent_only() {
    let engine = Engine::default();
    let parents = Parents::default();
    let result = engine
        .create(notifying(2, &parents), Config::new(), children![])
        .unwrap();

    assert!(result.as_fragment().unwrap().has_got_parent());
    assert!(parents.lock().unwrap().is_empty());
}

#[test]
fn got_parent_fires_once_with_enclosing_node() {
    for size in [0, 1, 3] {
        let engine = Engine::default();
        let parents = Parents::default();
        let child = engine
            .create(notifying(size, &parents), Config::new(), children![])
            .unwrap();

        let div = host_node(engine.create("div", Config::new(), vec![child.clone()]).unwrap());

        let seen = parents.lock().unwrap().clone();
        assert_eq!(seen, vec![div.clone()], "fragment of {size} nodes");
        assert_eq!(div.child_count(), size);

        // Reusing the same fragment does not notify again
        engine.create("p", Config::new(), vec![child]).unwrap();
        assert_eq!(parents.lock().unwrap().len(), 1);
    }
}

#[test]
fn got_parent_reaches_fragments_nested_in_arrays() {
    let engine = Engine::default();
    let parents = Parents::default();
    let child = engine
        .create(notifying(1, &parents), Config::new(), children![])
        .unwrap();

    let nested = Element::from(vec![Element::from("a"), Element::from(vec![child])]);
    let ul = host_node(engine.create("ul", Config::new(), vec![nested]).unwrap());

    assert_eq!(*parents.lock().unwrap(), vec![ul]);
}

#[test]
fn got_parent_on_single_node_result() {
    let engine = Engine::default();
    let parents = Parents::default();
    let record = parents.clone();
    let leaf = Component::new("Leaf", move |props: Props| {
        let record = record.clone();
        props.cur.on_got_parent(move |parent| record.lock().unwrap().push(parent));
        props.engine.create("i", Config::new(), children![])
    });

    let inner = engine.create(&leaf, Config::new(), children![]).unwrap();
    assert!(inner.as_node().unwrap().has_got_parent());

    let outer = host_node(engine.create("b", Config::new(), vec![inner]).unwrap());
    assert_eq!(*parents.lock().unwrap(), vec![outer]);
}

#[test]
fn got_parent_fires_after_children_are_appended() {
    let engine = Engine::default();
    let counts = Arc::new(Mutex::new(Vec::new()));
    let record = counts.clone();
    let probe = Component::new("Probe", move |props: Props| {
        let record = record.clone();
        props
            .cur
            .on_got_parent(move |parent| record.lock().unwrap().push(parent.child_count()));
        Ok(Element::Fragment(Fragment::empty()))
    });

    let probe = engine.create(&probe, Config::new(), children![]).unwrap();
    engine
        .create("div", Config::new(), vec![probe, "x".into(), "y".into()])
        .unwrap();

    assert_eq!(*counts.lock().unwrap(), vec![2]);
}

#[test]
fn got_parent_passes_through_wrapping_component() {
    let engine = Engine::default();
    let parents = Parents::default();
    let wrapper = Component::new("Wrapper", |props: Props| {
        props
            .engine
            .create("section", Config::new(), props.children.iter().map(Element::from).collect())
    });

    let inner = engine
        .create(notifying(0, &parents), Config::new(), children![])
        .unwrap();
    let section = host_node(engine.create(&wrapper, Config::new(), vec![inner]).unwrap());

    assert_eq!(*parents.lock().unwrap(), vec![section]);
}

#[test]
fn got_parent_is_deferred_through_fragment_component() {
    let engine = Engine::default();
    let parents = Parents::default();
    let passthrough = Component::new("Passthrough", |props: Props| {
        Ok(Element::Fragment(Fragment::new(
            props.children.iter().map(Element::from).collect(),
        )))
    });

    let inner = engine
        .create(notifying(1, &parents), Config::new(), children![])
        .unwrap();
    let group = engine.create(&passthrough, Config::new(), vec![inner]).unwrap();
    assert!(parents.lock().unwrap().is_empty());
    assert!(group.as_fragment().unwrap().has_got_parent());

    let article = host_node(engine.create("article", Config::new(), vec![group]).unwrap());
    assert_eq!(*parents.lock().unwrap(), vec![article]);
}

#[test]
fn render_appends_flattened_tree_in_order() {
    let document = Document::with_root("root").unwrap();
    let (a, b, c) = (Node::element("a"), Node::element("b"), Node::element("c"));
    let tree = Element::from(vec![Element::from(a.clone()), vec![b.clone(), c.clone()].into()]);

    Engine::default().render(&document, tree, "root").unwrap();

    let root = document.get_element_by_id("root").unwrap();
    assert_eq!(root.children(), vec![a, b, c]);
    assert_eq!(root.to_html(), "<div id=\"root\"><a></a><b></b><c></c></div>");
}

#[test]
fn render_single_node() {
    let document = Document::with_root("app").unwrap();
    let node = Node::element("main");
    Engine::default().render(&document, node.clone(), "app").unwrap();
    assert_eq!(node.parent(), document.get_element_by_id("app"));
}

#[test]
fn render_does_not_notify_root() {
    let document = Document::with_root("root").unwrap();
    let engine = Engine::default();
    let parents = Parents::default();
    let tree = engine
        .create(notifying(1, &parents), Config::new(), children![])
        .unwrap();

    engine.render(&document, tree, "root").unwrap();
    assert!(parents.lock().unwrap().is_empty());
}

#[test]
fn render_missing_root_fails() {
    let document = Document::new();
    let err = Engine::default()
        .render(&document, Node::element("p"), "nope")
        .unwrap_err();
    assert!(matches!(err, Error::RootNotFound(ref id) if id == "nope"));
    assert_eq!(err.to_string(), "Root with id 'nope' does not exist");
}

#[test]
fn free_functions_use_default_events() {
    let document = Document::with_root("root").unwrap();
    let button = crate::create("button", Config::new().on("click", Handler::new(|_| {})), children![])
        .unwrap();
    crate::render(&document, button.clone(), "root").unwrap();
    assert_eq!(button.as_node().unwrap().listener_count("click"), 1);
}

#[test]
fn component_errors_propagate() {
    let engine = Engine::default();
    let failing = Component::new("Failing", |_props: Props| {
        Err(Error::from(anyhow::anyhow!("no data")))
    });
    let err = engine
        .create("div", Config::new(), vec![])
        .and_then(|_| engine.create(&failing, Config::new(), children![]))
        .unwrap_err();
    assert_eq!(err.to_string(), "Component error: no data");
}
