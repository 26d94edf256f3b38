use ceptgen_common::schema::{MouseButton, Selector, Step, parse_recording};

#[test]
fn parses_a_full_recording() {
    let content = r##"{
        "title": "checkout",
        "selectorAttribute": "data-testid",
        "steps": [
            {
                "type": "setViewport",
                "width": 1280,
                "height": 720,
                "deviceScaleFactor": 1,
                "isMobile": false,
                "hasTouch": false,
                "isLandscape": false
            },
            {
                "type": "navigate",
                "url": "https://shop.example/cart",
                "assertedEvents": [
                    { "type": "navigation", "url": "https://shop.example/cart", "title": "Cart" }
                ]
            },
            {
                "type": "click",
                "target": "main",
                "selectors": [["aria/Pay now"], ["#pay"]],
                "offsetX": 12,
                "offsetY": 4
            }
        ]
    }"##;

    let flow = parse_recording(content).expect("recording should parse");
    assert_eq!(flow.title, "checkout");
    assert_eq!(flow.selector_attribute.as_deref(), Some("data-testid"));
    assert_eq!(flow.steps.len(), 3);

    let Step::SetViewport(viewport) = &flow.steps[0] else {
        panic!("expected setViewport");
    };
    assert_eq!(viewport.width, 1280);
    assert_eq!(viewport.height, 720);

    let Step::Navigate(navigate) = &flow.steps[1] else {
        panic!("expected navigate");
    };
    assert_eq!(navigate.url, "https://shop.example/cart");
    assert_eq!(navigate.asserted_events.len(), 1);
    assert_eq!(navigate.asserted_events[0].kind, "navigation");

    let Step::Click(click) = &flow.steps[2] else {
        panic!("expected click");
    };
    assert_eq!(click.target.as_deref(), Some("main"));
    assert_eq!(click.selectors.len(), 2);
    assert_eq!(click.selectors[0].first(), Some("aria/Pay now"));
    assert_eq!(click.selectors[1].first(), Some("#pay"));
    assert_eq!(click.offset_x, Some(12.0));
    assert_eq!(click.button, None);
}

#[test]
fn accepts_both_selector_shapes() {
    let content = r##"{
        "title": "shapes",
        "steps": [
            { "type": "click", "selectors": ["#plain", ["#grouped", "xpath///div"]] }
        ]
    }"##;

    let flow = parse_recording(content).expect("recording should parse");
    let Step::Click(click) = &flow.steps[0] else {
        panic!("expected click");
    };
    assert!(matches!(&click.selectors[0], Selector::Single(s) if s == "#plain"));
    assert!(matches!(&click.selectors[1], Selector::Parts(p) if p.len() == 2));
    assert_eq!(click.selectors[1].first(), Some("#grouped"));
}

#[test]
fn empty_selector_group_has_no_first() {
    let group = Selector::Parts(Vec::new());
    assert_eq!(group.first(), None);
}

#[test]
fn parses_secondary_button_click() {
    let content = r##"{
        "title": "context menu",
        "steps": [
            { "type": "click", "selectors": ["#menu"], "button": "secondary" }
        ]
    }"##;

    let flow = parse_recording(content).expect("recording should parse");
    let Step::Click(click) = &flow.steps[0] else {
        panic!("expected click");
    };
    assert_eq!(click.button, Some(MouseButton::Secondary));
}

#[test]
fn scroll_distinguishes_element_and_coordinate_forms() {
    let content = r##"{
        "title": "scrolls",
        "steps": [
            { "type": "scroll", "selectors": ["#feed"] },
            { "type": "scroll", "x": 0, "y": 805 }
        ]
    }"##;

    let flow = parse_recording(content).expect("recording should parse");

    let Step::Scroll(by_element) = &flow.steps[0] else {
        panic!("expected scroll");
    };
    let selectors = by_element.selectors.as_deref().expect("selectors present");
    assert_eq!(selectors[0].first(), Some("#feed"));

    let Step::Scroll(by_offset) = &flow.steps[1] else {
        panic!("expected scroll");
    };
    assert!(by_offset.selectors.is_none());
    assert_eq!(by_offset.x, 0.0);
    assert_eq!(by_offset.y, 805.0);
}

#[test]
fn parses_key_steps() {
    let content = r#"{
        "title": "submit",
        "steps": [
            { "type": "keyDown", "target": "main", "key": "Enter" },
            { "type": "keyUp", "key": "Enter" }
        ]
    }"#;

    let flow = parse_recording(content).expect("recording should parse");
    let Step::KeyDown(down) = &flow.steps[0] else {
        panic!("expected keyDown");
    };
    assert_eq!(down.key, "Enter");
    assert!(matches!(&flow.steps[1], Step::KeyUp(up) if up.key == "Enter"));
}

#[test]
fn parses_recorder_types_the_exporter_does_not_handle() {
    let content = r##"{
        "title": "mixed",
        "steps": [
            { "type": "change", "selectors": ["#q"], "value": "rust" },
            { "type": "emulateNetworkConditions", "download": 180000, "upload": 84000, "latency": 562.5 },
            { "type": "waitForExpression", "expression": "window.ready" },
            { "type": "close" },
            { "type": "customStep", "name": "snapshot", "parameters": { "kind": "full" } }
        ]
    }"##;

    let flow = parse_recording(content).expect("recording should parse");
    let names: Vec<&str> = flow.steps.iter().map(Step::type_name).collect();
    assert_eq!(
        names,
        vec![
            "change",
            "emulateNetworkConditions",
            "waitForExpression",
            "close",
            "customStep"
        ]
    );
}

#[test]
fn rejects_unknown_step_type() {
    let content = r#"{
        "title": "future",
        "steps": [ { "type": "teleport", "url": "https://example.com" } ]
    }"#;

    assert!(parse_recording(content).is_err());
}

#[test]
fn rejects_recording_without_title() {
    let content = r#"{ "steps": [] }"#;
    assert!(parse_recording(content).is_err());
}

#[test]
fn rejects_recording_without_steps() {
    let content = r#"{ "title": "no steps" }"#;
    assert!(parse_recording(content).is_err());
}

#[test]
fn rejects_plain_garbage() {
    assert!(parse_recording("not json at all").is_err());
}
