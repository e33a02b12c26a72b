//! Built trees for whole documents

use goo::goo::ast::MAX_NESTING;
use goo::goo::building::{GenericNode, TreeBuilder};
use goo::goo::config::{BuilderConfig, Loader};
use goo::goo::parsing::{parse, Expected};
use goo::goo::pipeline::{execute_and_serialize, to_tree, GooError};
use goo::goo::testing::assert_tree;

#[test]
fn test_grid_extraction() {
    let nodes = to_tree("button\n  text = plot\n  sticky = nsew\n  row = 1\n.").expect("tree");
    assert_eq!(
        nodes,
        vec![GenericNode::new("button")
            .with_attribute("text", "plot")
            .with_grid_attribute("sticky", "nsew")
            .with_grid_attribute("row", "1")]
    );
    assert_tree(&nodes).node(0, |button| {
        button.attr_keys(&["text"]).grid_keys(&["sticky", "row"]);
    });
}

#[test]
fn test_file_macro() {
    let nodes = to_tree("WIDTH = 23\nlabel\n  width = WIDTH\n.").expect("tree");
    assert_eq!(
        nodes,
        vec![GenericNode::new("label").with_attribute("width", "23")]
    );
}

#[test]
fn test_nested_element() {
    let nodes = to_tree("frame\n  button\n    text = a\n  .\n.").expect("tree");
    assert_eq!(
        nodes,
        vec![GenericNode::new("frame")
            .with_child(GenericNode::new("button").with_attribute("text", "a"))]
    );
}

#[test]
fn test_macros_fixture() {
    let nodes = to_tree(include_str!("fixtures/macros.goo")).expect("tree");
    assert_tree(&nodes)
        .tags(&["label", "entry"])
        .node(0, |label| {
            label
                .attr_keys(&["text", "width"])
                .attr("text", "Hey there")
                .attr("width", "23")
                .grid("sticky", "w")
                .child_count(0);
        })
        .node(1, |entry| {
            entry.attr("width", "23").grid_keys(&["sticky"]);
        });
}

#[test]
fn test_nested_fixture() {
    let nodes = to_tree(include_str!("fixtures/nested.goo")).expect("tree");
    assert_tree(&nodes).node_count(1).node(0, |frame| {
        frame
            .tag("frame")
            .attr("name", "top")
            .grid("row", "0")
            .child_count(2)
            .child(0, |label| {
                label.tag("label").attr("text", "Settings").grid("sticky", "w");
            })
            .child(1, |buttons| {
                buttons
                    .attr("name", "buttons")
                    .no_grid()
                    .child_count(2)
                    .child(0, |ok| {
                        ok.attr("text", "Ok").attr("<Button-1>", "on_ok");
                    })
                    .child(1, |cancel| {
                        cancel.attr("text", "Cancel").attr("<Button-1>", "on_cancel");
                    });
            });
    });
}

#[test]
fn test_demo_bindings() {
    let nodes = to_tree(include_str!("fixtures/demo.goo")).expect("tree");
    let (bindings, options) = nodes[0].split_bindings();
    assert_eq!(bindings.get("<Button-1>"), Some(&"callback"));
    assert_eq!(options.keys().copied().collect::<Vec<_>>(), vec!["text"]);

    let (bindings, _) = nodes[1].split_bindings();
    assert!(bindings.is_empty());
}

#[test]
fn test_grid_keys_never_in_attributes() {
    let config = BuilderConfig::default();
    let nodes = to_tree(include_str!("fixtures/demo.goo")).expect("tree");
    for root in &nodes {
        for node in root.iter() {
            assert!(node.attributes.keys().all(|k| !config.is_grid_key(k)));
            assert!(node.grid_attributes.as_ref().map_or(true, |g| !g.is_empty()));
        }
    }
}

#[test]
fn test_single_pass_substitution() {
    let nodes = to_tree("A = B\nB = C\nC = D\nlabel\n  x = A\n  y = B\n  z = D\n.").expect("tree");
    assert_tree(&nodes).node(0, |label| {
        label.attr("x", "B").attr("y", "C").attr("z", "D");
    });
}

#[test]
fn test_quoted_value_is_substituted_too() {
    let nodes = to_tree("WIDTH = 23\nlabel\n  width = \"WIDTH\"\n.").expect("tree");
    assert_eq!(nodes[0].get("width"), Some("23"));
}

#[test]
fn test_duplicate_keys_in_grid() {
    let nodes = to_tree("label\n  row = 1\n  column = 2\n  row = 3\n.").expect("tree");
    assert_tree(&nodes).node(0, |label| {
        label.grid_keys(&["row", "column"]).grid("row", "3");
    });
}

#[test]
fn test_builder_from_loaded_config() {
    let mut config = Loader::new().build().expect("config");
    config.builder.grid_keys.push("padx".to_string());
    let doc = parse("label\n  padx = 4\n  text = hi\n  row = 1\n.").expect("document to parse");
    let nodes = TreeBuilder::with_config(config.builder)
        .build(&doc)
        .expect("tree");
    assert_tree(&nodes).node(0, |label| {
        label
            .attr_keys(&["text"])
            .grid_keys(&["padx", "row"])
            .grid("padx", "4");
    });
}

#[test]
fn test_origin_recovers_source() {
    let source = include_str!("fixtures/nested.goo");
    let doc = parse(source).expect("document to parse");
    let nodes = TreeBuilder::new().build(&doc).expect("tree");
    let cancel = &nodes[0].children[1].children[1];
    let origin = cancel.origin.expect("origin");
    assert_eq!(
        doc.source_text(origin, source),
        Some("button\n            text = Cancel\n            <Button-1> = on_cancel\n        .")
    );
}

fn nested(depth: usize) -> String {
    "a ".repeat(depth) + &". ".repeat(depth)
}

#[test]
fn test_deepest_accepted_nesting_builds_and_renders() {
    let nodes = to_tree(&nested(MAX_NESTING)).expect("tree");
    assert_eq!(nodes[0].iter().count(), MAX_NESTING);
    let xml = execute_and_serialize(&nested(MAX_NESTING), "xml").expect("xml output");
    assert_eq!(xml.lines().count(), 2 * MAX_NESTING - 1);
}

#[test]
fn test_very_deep_nesting_is_a_parse_error() {
    match to_tree(&nested(10_000)) {
        Err(GooError::Parse(e)) => {
            assert_eq!(e.expected, Expected::ShallowerNesting("a".to_string()));
            assert_eq!(e.offset(), Some(2 * MAX_NESTING));
        }
        other => panic!("expected a parse error, got {:?}", other),
    }
}
