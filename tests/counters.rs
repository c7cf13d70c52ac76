// End-to-end counter scenarios: refs, attached methods and event handlers

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use xjsx::prelude::*;

fn show(refs: &Refs, count: &AtomicI64) {
    if let Some(span) = refs.node("countText") {
        span.set_text_content(count.load(Ordering::SeqCst).to_string());
    }
}

fn counter(props: Props) -> Result<Element, Error> {
    let engine = props.engine.clone();
    let refs = props.refs.clone();
    let count = Arc::new(AtomicI64::new(0));
    let name = props.str("name").unwrap_or_default().to_string();

    let increase = {
        let (refs, count) = (refs.clone(), count.clone());
        Handler::new(move |_| {
            count.fetch_add(1, Ordering::SeqCst);
            show(&refs, &count);
        })
    };

    {
        let (refs, count) = (refs.clone(), count.clone());
        props.cur.insert(
            "reset",
            Method::new(move |_| {
                count.store(0, Ordering::SeqCst);
                show(&refs, &count);
                Value::Null
            }),
        );
    }

    engine.create(
        "div",
        Config::new(),
        children![
            engine.create("h3", Config::new(), children!["Counter ", name])?,
            engine.create(
                "p",
                Config::new(),
                children![
                    engine.create(
                        "span",
                        Config::new().with_ref(RefRequest::new("countText", &refs)),
                        children![0]
                    )?,
                    engine.create("button", Config::new().on("click", increase), children!["Increase"])?,
                ]
            )?,
        ],
    )
}

fn colorizer(props: Props) -> Result<Element, Error> {
    let colors: Vec<String> = props
        .list("colors")
        .unwrap_or_default()
        .iter()
        .map(Value::to_string)
        .collect();

    let children = non_text_children(&props.children);
    for (index, child) in children.iter().enumerate() {
        if !colors.is_empty() {
            child.set_attribute("style", format!("color: {}", colors[index % colors.len()]));
        }
    }
    Ok(Element::from(children))
}

fn counters(props: Props) -> Result<Element, Error> {
    let counters = non_text_children(&props.children);
    let reset_all = Handler::new(move |_| {
        for counter in &counters {
            counter.call_method("reset", Vec::new());
        }
    });

    let mut items: Vec<Element> = props.children.iter().map(Element::from).collect();
    items.push(props.engine.create(
        "button",
        Config::new().on("click", reset_all),
        children!["Reset all"],
    )?);
    Ok(Element::from(items))
}

fn find_all(node: &Node, tag: &str) -> Vec<Node> {
    let mut found = Vec::new();
    if node.tag().as_deref() == Some(tag) {
        found.push(node.clone());
    }
    for child in node.children() {
        found.extend(find_all(&child, tag));
    }
    found
}

#[test]
fn counter_exposes_ref_and_reset() {
    let engine = Engine::default();
    let refs = Refs::new();

    let element = engine
        .create(
            component!(counter),
            Config::new().with("name", "1").with_ref(RefRequest::new("c", &refs)),
            children![],
        )
        .unwrap();
    let div = element.as_node().unwrap().clone();

    // (1) the ref holds exactly the produced div
    assert_eq!(refs.node("c"), Some(div.clone()));
    assert_eq!(div.tag().as_deref(), Some("div"));

    // (2) the div carries a callable reset
    assert!(div.method("reset").is_some());

    // (3) clicking the button increments the displayed count
    let span = find_all(&div, "span").remove(0);
    let button = find_all(&div, "button").remove(0);
    assert_eq!(span.text_content(), "0");
    button.click();
    button.click();
    assert_eq!(span.text_content(), "2");

    // (4) reset restores zero
    div.call_method("reset", Vec::new());
    assert_eq!(span.text_content(), "0");
}

#[test]
fn counters_example_renders_and_resets_all() {
    let document = Document::with_root("app").unwrap();
    let engine = Engine::default();

    let tree = engine
        .create(
            component!(counters),
            Config::new(),
            children![engine
                .create(
                    component!(colorizer),
                    Config::new().with("colors", vec!["red", "purple", "magenta"]),
                    children![
                        engine.create(component!(counter), Config::new().with("name", "1"), children![]).unwrap(),
                        " ",
                        engine.create(component!(counter), Config::new().with("name", "2"), children![]).unwrap(),
                        engine.create(component!(counter), Config::new().with("name", "3"), children![]).unwrap(),
                    ],
                )
                .unwrap()],
        )
        .unwrap();
    engine.render(&document, tree, "app").unwrap();

    let root = document.get_element_by_id("app").unwrap();
    let divs = non_text_children(&root.children());
    assert_eq!(divs.len(), 4);
    assert_eq!(divs[0].attribute("style").as_deref(), Some("color: red"));
    assert_eq!(divs[2].attribute("style").as_deref(), Some("color: magenta"));
    assert_eq!(divs[3].text_content(), "Reset all");

    let buttons = find_all(&root, "button");
    assert_eq!(buttons.len(), 4);
    buttons[0].click();
    buttons[1].click();
    buttons[1].click();

    let spans = find_all(&root, "span");
    let shown: Vec<String> = spans.iter().map(Node::text_content).collect();
    assert_eq!(shown, vec!["1", "2", "0"]);

    buttons[3].click();
    let shown: Vec<String> = spans.iter().map(Node::text_content).collect();
    assert_eq!(shown, vec!["0", "0", "0"]);
}
