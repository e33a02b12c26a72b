//! Treeviz formatter
//!
//! One line per node with two spaces of indentation per nesting level:
//!
//! ```text
//! frame name=top
//!   grid row=0
//!   label text="Hey there" width=23
//! ```
//!
//! Layout attributes are shown as a line of their own, under the grid tag, before the
//! children. Values that are empty or contain whitespace are quoted.

use super::registry::{FormatError, Formatter};
use crate::goo::building::{AttributeMap, GenericNode};

pub struct TreevizFormatter {
    grid_tag: String,
}

impl TreevizFormatter {
    pub fn new(grid_tag: impl Into<String>) -> Self {
        Self {
            grid_tag: grid_tag.into(),
        }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        Self::new("grid")
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, nodes: &[GenericNode]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(nodes, &self.grid_tag))
    }

    fn description(&self) -> &str {
        "Indented one-line-per-node tree"
    }
}

pub fn to_treeviz_str(nodes: &[GenericNode], grid_tag: &str) -> String {
    let mut out = String::new();
    for node in nodes {
        format_node(&mut out, node, grid_tag, 0);
    }
    out
}

fn format_node(out: &mut String, node: &GenericNode, grid_tag: &str, depth: usize) {
    format_line(out, depth, &node.tag, &node.attributes);
    if let Some(grid) = node.grid_attributes.as_ref().filter(|g| !g.is_empty()) {
        format_line(out, depth + 1, grid_tag, grid);
    }
    for child in &node.children {
        format_node(out, child, grid_tag, depth + 1);
    }
}

fn format_line(out: &mut String, depth: usize, tag: &str, attributes: &AttributeMap) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(tag);
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push('=');
        if value.is_empty() || value.contains(char::is_whitespace) {
            out.push_str(&format!("{:?}", value));
        } else {
            out.push_str(value);
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_output() {
        let nodes = vec![GenericNode::new("frame")
            .with_attribute("name", "top")
            .with_grid_attribute("row", "0")
            .with_child(
                GenericNode::new("label")
                    .with_attribute("text", "Hey there")
                    .with_attribute("width", "23"),
            )];
        insta::assert_snapshot!(to_treeviz_str(&nodes, "grid"), @r###"
        frame name=top
          grid row=0
          label text="Hey there" width=23
        "###);
    }

    #[test]
    fn test_empty_value_is_quoted() {
        let nodes = vec![GenericNode::new("entry").with_attribute("text", "")];
        assert_eq!(to_treeviz_str(&nodes, "grid"), "entry text=\"\"\n");
    }

    #[test]
    fn test_multiple_roots() {
        let nodes = vec![GenericNode::new("a"), GenericNode::new("b")];
        assert_eq!(
            TreevizFormatter::default().serialize(&nodes),
            Ok("a\nb\n".to_string())
        );
    }
}
