//! Rendering tests over the icon catalog.
//!
//! Output is parsed with roxmltree and asserted at the XML level, so
//! attribute ordering never matters to these tests.

use strokekit::{icons, render_icon_with_config, IconConfig, RenderOptions};

/// Render a catalog icon against an explicit default config (the global
/// config is left untouched so tests can run in parallel).
fn render_with(name: &str, opts: &RenderOptions, config: &IconConfig) -> String {
    let icon = icons::lookup(name).unwrap_or_else(|| panic!("missing catalog icon: {}", name));
    render_icon_with_config(&icon, opts, config)
}

fn render(name: &str, opts: &RenderOptions) -> String {
    render_with(name, opts, &IconConfig::default())
}

const SHAPE_TAGS: [&str; 7] = ["path", "circle", "rect", "line", "polyline", "polygon", "ellipse"];

/// All drawable shape elements in the document, in document order.
fn shapes<'a, 'i>(doc: &'a roxmltree::Document<'i>) -> Vec<roxmltree::Node<'a, 'i>> {
    doc.root_element()
        .descendants()
        .filter(|n| n.is_element() && SHAPE_TAGS.contains(&n.tag_name().name()))
        .collect()
}

// =============================================================================
// Default and precedence behavior
// =============================================================================

#[test]
fn defaults_come_from_icon_literals() {
    let svg = render("activity-2", &RenderOptions::default());
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let root = doc.root_element();

    assert_eq!(root.attribute("width"), Some("24"));
    assert_eq!(root.attribute("height"), Some("24"));
    assert_eq!(root.attribute("viewBox"), Some("0 0 24 24"));
    assert_eq!(root.attribute("fill"), Some("none"));

    let shapes = shapes(&doc);
    assert_eq!(shapes.len(), 1);
    for shape in shapes {
        assert_eq!(shape.attribute("stroke"), Some("currentColor"));
        assert_eq!(shape.attribute("stroke-width"), Some("2"));
        assert_eq!(shape.attribute("fill"), Some("none"));
        assert_eq!(shape.attribute("stroke-linecap"), Some("round"));
        assert_eq!(shape.attribute("stroke-linejoin"), Some("round"));
    }
}

#[test]
fn stroke_width_scales_with_size() {
    let opts = RenderOptions {
        size: Some(48.0),
        ..Default::default()
    };
    let svg = render("activity-2", &opts);
    let doc = roxmltree::Document::parse(&svg).unwrap();

    assert_eq!(doc.root_element().attribute("width"), Some("48"));
    assert_eq!(doc.root_element().attribute("height"), Some("48"));
    // 2 * (48 / 24)
    assert_eq!(shapes(&doc)[0].attribute("stroke-width"), Some("4"));
}

#[test]
fn stroke_width_scaling_is_linear() {
    let opts = RenderOptions {
        size: Some(36.0),
        ..Default::default()
    };
    let svg = render("activity-2", &opts);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    // 2 * (36 / 24)
    assert_eq!(shapes(&doc)[0].attribute("stroke-width"), Some("3"));
}

#[test]
fn absolute_stroke_width_is_unscaled() {
    let opts = RenderOptions {
        size: Some(48.0),
        stroke_width: Some(3.0),
        absolute_stroke_width: Some(true),
        ..Default::default()
    };
    let svg = render("activity-2", &opts);
    let doc = roxmltree::Document::parse(&svg).unwrap();

    assert_eq!(doc.root_element().attribute("width"), Some("48"));
    assert_eq!(shapes(&doc)[0].attribute("stroke-width"), Some("3"));
}

#[test]
fn config_defaults_sit_between_overrides_and_literals() {
    let config = IconConfig {
        default_size: Some(32.0),
        default_color: Some("#0f172a".to_string()),
        ..Default::default()
    };

    // No overrides: config wins over the icon literals.
    // heart's literal stroke 1.5 scales to 1.5 * (32 / 24) = 2.
    let svg = render_with("heart", &RenderOptions::default(), &config);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert_eq!(doc.root_element().attribute("width"), Some("32"));
    assert_eq!(shapes(&doc)[0].attribute("stroke"), Some("#0f172a"));
    assert_eq!(shapes(&doc)[0].attribute("stroke-width"), Some("2"));

    // Call-site overrides win over config.
    let opts = RenderOptions {
        size: Some(24.0),
        color: Some("tomato".to_string()),
        ..Default::default()
    };
    let svg = render_with("heart", &opts, &config);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert_eq!(doc.root_element().attribute("width"), Some("24"));
    assert_eq!(shapes(&doc)[0].attribute("stroke"), Some("tomato"));
}

#[test]
fn icon_literal_defaults_vary_per_family() {
    // The mini family renders at 16px with a 1.8 stroke literal.
    let svg = render("terminal", &RenderOptions::default());
    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert_eq!(doc.root_element().attribute("width"), Some("16"));
    let sw: f64 = shapes(&doc)[0]
        .attribute("stroke-width")
        .unwrap()
        .parse()
        .unwrap();
    // 1.8 * (16 / 24)
    assert!((sw - 1.2).abs() < 1e-9);

    // The status family carries a 3.0 stroke literal.
    let svg = render("zap", &RenderOptions::default());
    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert_eq!(shapes(&doc)[0].attribute("stroke-width"), Some("3"));
}

// =============================================================================
// Structural behavior
// =============================================================================

#[test]
fn rendering_is_deterministic() {
    let opts = RenderOptions {
        size: Some(20.0),
        color: Some("#334155".to_string()),
        ..Default::default()
    };
    assert_eq!(render("settings", &opts), render("settings", &opts));
}

#[test]
fn authored_shape_attributes_are_never_clobbered() {
    let svg = render("dot", &RenderOptions::default());
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let circle = shapes(&doc)[0];

    assert_eq!(circle.attribute("fill"), Some("currentColor"));
    assert_eq!(circle.attribute("stroke"), Some("none"));
    // Keys the author left out are still normalized in.
    assert_eq!(circle.attribute("stroke-width"), Some("3"));
}

#[test]
fn container_tags_pass_through_unchanged() {
    let svg = render("sun", &RenderOptions::default());
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let group = doc
        .root_element()
        .children()
        .find(|n| n.has_tag_name("g"))
        .expect("sun should render a g container");

    assert_eq!(group.attribute("stroke"), None);
    assert_eq!(group.attribute("stroke-width"), None);
    // The grouped rays still get shape normalization.
    let ray = group.children().find(|n| n.has_tag_name("path")).unwrap();
    assert_eq!(ray.attribute("stroke"), Some("currentColor"));
}

#[test]
fn output_order_mirrors_authoring_order() {
    let svg = render("search", &RenderOptions::default());
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let tags: Vec<&str> = shapes(&doc).iter().map(|n| n.tag_name().name()).collect();
    assert_eq!(tags, vec!["path", "circle"]);
}

#[test]
fn title_children_render_as_text() {
    let svg = render("heart", &RenderOptions::default());
    assert!(svg.contains("<title>heart</title>"));
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let el_title = doc
        .root_element()
        .children()
        .find(|n| n.has_tag_name("title"))
        .unwrap();
    assert_eq!(el_title.text(), Some("heart"));
    assert_eq!(el_title.attribute("stroke"), None);
}

#[test]
fn class_and_passthrough_attributes_land_on_the_root() {
    let opts = RenderOptions {
        class: Some("icon icon-check".to_string()),
        attrs: vec![
            ("aria-hidden".to_string(), "true".to_string()),
            ("data-testid".to_string(), "check".to_string()),
        ],
        ..Default::default()
    };
    let svg = render("check", &opts);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let root = doc.root_element();
    assert_eq!(root.attribute("class"), Some("icon icon-check"));
    assert_eq!(root.attribute("aria-hidden"), Some("true"));
    assert_eq!(root.attribute("data-testid"), Some("check"));
}

// =============================================================================
// Registry and JSON loading
// =============================================================================

#[test]
fn unknown_icon_name_is_an_error() {
    let err = strokekit::render("definitely-not-an-icon", &RenderOptions::default()).unwrap_err();
    assert!(err.contains("unknown icon"));
}

#[test]
fn registry_covers_the_catalog() {
    let names = icons::names();
    assert!(names.len() >= 70);
    assert!(names.contains(&"activity-2"));
    assert!(names.contains(&"chevron-down"));
    assert!(names.contains(&"map-pin"));
}

#[test]
fn catalog_spans_every_shape_tag() {
    let mut seen: Vec<&str> = Vec::new();
    for name in icons::names() {
        let svg = render(name, &RenderOptions::default());
        let doc = roxmltree::Document::parse(&svg)
            .unwrap_or_else(|e| panic!("invalid SVG for {}: {}", name, e));
        for node in shapes(&doc) {
            let tag = node.tag_name().name();
            if let Some(&known) = SHAPE_TAGS.iter().find(|&&t| t == tag) {
                if !seen.contains(&known) {
                    seen.push(known);
                }
            }
        }
    }
    for tag in SHAPE_TAGS {
        assert!(seen.contains(&tag), "no catalog icon draws a <{}>", tag);
    }
}

#[test]
fn icons_round_trip_through_json() {
    let original = icons::lookup("search").unwrap();
    let json = serde_json::to_string(&original).unwrap();
    let restored = strokekit::Icon::from_json(&json).unwrap();
    assert_eq!(original, restored);
    assert_eq!(
        render_icon_with_config(&original, &RenderOptions::default(), &IconConfig::default()),
        render_icon_with_config(&restored, &RenderOptions::default(), &IconConfig::default()),
    );
}

#[test]
fn caller_supplied_json_tables_render() {
    let json = r#"{
        "name": "tick",
        "defaultSize": 24,
        "defaultStrokeWidth": 2,
        "elements": [
            { "tag": "path", "attrs": [["d", "M20 6 9 17l-5-5"]] }
        ]
    }"#;
    let icon = strokekit::Icon::from_json(json).unwrap();
    let svg = render_icon_with_config(&icon, &RenderOptions::default(), &IconConfig::default());
    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert_eq!(shapes(&doc)[0].attribute("d"), Some("M20 6 9 17l-5-5"));
    assert_eq!(shapes(&doc)[0].attribute("stroke-width"), Some("2"));
}

// =============================================================================
// Per-icon smoke tests (every catalog entry renders valid XML)
// =============================================================================

macro_rules! icon_test {
    ($name:ident) => {
        paste::paste! {
            #[test]
            fn [<renders_ $name>]() {
                let icon_name = stringify!($name).replace('_', "-");
                let svg = render(&icon_name, &RenderOptions::default());
                let doc = roxmltree::Document::parse(&svg)
                    .unwrap_or_else(|e| panic!("invalid SVG for {}: {}", icon_name, e));
                assert_eq!(doc.root_element().tag_name().name(), "svg");
                assert!(!shapes(&doc).is_empty(), "{} renders no shapes", icon_name);
            }
        }
    };
}

icon_test!(arrow_up);
icon_test!(arrow_down);
icon_test!(arrow_left);
icon_test!(arrow_right);
icon_test!(arrow_up_down);
icon_test!(arrow_up_left);
icon_test!(arrow_up_right);
icon_test!(arrow_down_left);
icon_test!(arrow_down_right);
icon_test!(chevron_up);
icon_test!(chevron_down);
icon_test!(chevron_left);
icon_test!(chevron_right);
icon_test!(refresh_cw);
icon_test!(rotate_cw);
icon_test!(activity);
icon_test!(activity_2);
icon_test!(check);
icon_test!(x);
icon_test!(plus);
icon_test!(minus);
icon_test!(menu);
icon_test!(search);
icon_test!(settings);
icon_test!(info);
icon_test!(circle_alert);
icon_test!(triangle_alert);
icon_test!(external_link);
icon_test!(copy);
icon_test!(trash);
icon_test!(download);
icon_test!(upload);
icon_test!(link);
icon_test!(list);
icon_test!(eye);
icon_test!(play);
icon_test!(pause);
icon_test!(camera);
icon_test!(image);
icon_test!(film);
icon_test!(music);
icon_test!(mic);
icon_test!(video);
icon_test!(skip_forward);
icon_test!(monitor);
icon_test!(folder);
icon_test!(file);
icon_test!(mail);
icon_test!(lock);
icon_test!(calendar);
icon_test!(clock);
icon_test!(bell);
icon_test!(bookmark);
icon_test!(heart);
icon_test!(star);
icon_test!(house);
icon_test!(globe);
icon_test!(map_pin);
icon_test!(database);
icon_test!(server);
icon_test!(package);
icon_test!(zap);
icon_test!(flame);
icon_test!(sun);
icon_test!(moon);
icon_test!(cloud);
icon_test!(wifi);
icon_test!(signal);
icon_test!(target);
icon_test!(dot);
icon_test!(square);
icon_test!(circle);
icon_test!(terminal);
icon_test!(hash);
icon_test!(timer);
