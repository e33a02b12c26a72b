//! XML formatter
//!
//! Each top-level node becomes one XML element, children nested with two spaces of
//! indentation per level:
//!
//! ```text
//! <label text="Hey there" width="23">
//!   <grid sticky="w"/>
//! </label>
//! ```
//!
//! Layout attributes are written as the first child, under the grid tag. Event keys such as
//! `<Button-1>` are not valid XML attribute names, so each one is written as a
//! `<bind event=".." handler=".."/>` child after the grid element. Attribute values are escaped.
//!
//! Goo symbols are looser than XML names. Any other key that is not an XML `Name` becomes an
//! `<attr name=".." value=".."/>` child after the bindings, and a tag that is not a `Name` is
//! written as `<widget tag="..">`. An invalid grid tag falls back to `grid`.

use super::registry::{FormatError, Formatter};
use crate::goo::building::{AttributeMap, GenericNode};

const INDENT: &str = "  ";

pub struct XmlFormatter {
    grid_tag: String,
}

impl XmlFormatter {
    pub fn new(grid_tag: impl Into<String>) -> Self {
        Self {
            grid_tag: grid_tag.into(),
        }
    }
}

impl Default for XmlFormatter {
    fn default() -> Self {
        Self::new("grid")
    }
}

impl Formatter for XmlFormatter {
    fn name(&self) -> &str {
        "xml"
    }

    fn serialize(&self, nodes: &[GenericNode]) -> Result<String, FormatError> {
        Ok(to_xml_str(nodes, &self.grid_tag))
    }

    fn description(&self) -> &str {
        "One XML element per widget"
    }
}

pub fn to_xml_str(nodes: &[GenericNode], grid_tag: &str) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node, grid_tag, 0);
    }
    out
}

const FALLBACK_TAG: &str = "widget";
const FALLBACK_GRID_TAG: &str = "grid";

fn write_node(out: &mut String, node: &GenericNode, grid_tag: &str, depth: usize) {
    let indent = INDENT.repeat(depth);
    let renamed = !is_xml_name(&node.tag);
    let tag = if renamed { FALLBACK_TAG } else { node.tag.as_str() };

    let (bindings, options) = node.split_bindings();
    let (named, unnamed): (Vec<_>, Vec<_>) = options
        .into_iter()
        .partition(|(k, _)| is_xml_name(k) && !(renamed && *k == "tag"));

    out.push_str(&indent);
    out.push('<');
    out.push_str(tag);
    if renamed {
        write_attributes(out, [("tag", node.tag.as_str())].into_iter());
    }
    write_attributes(out, named.into_iter());

    let grid = node.grid_attributes.as_ref().filter(|g| !g.is_empty());
    if grid.is_none() && bindings.is_empty() && unnamed.is_empty() && node.children.is_empty() {
        out.push_str("/>\n");
        return;
    }
    out.push_str(">\n");

    let inner = INDENT.repeat(depth + 1);
    if let Some(grid) = grid {
        let grid_tag = if is_xml_name(grid_tag) {
            grid_tag
        } else {
            FALLBACK_GRID_TAG
        };
        write_fields(out, &inner, grid_tag, grid_pairs(grid));
    }
    for (event, handler) in &bindings {
        write_empty(
            out,
            &inner,
            "bind",
            [("event", *event), ("handler", *handler)].into_iter(),
        );
    }
    for (key, value) in unnamed {
        write_empty(out, &inner, "attr", [("name", key), ("value", value)].into_iter());
    }
    for child in &node.children {
        write_node(out, child, grid_tag, depth + 1);
    }

    out.push_str(&indent);
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

fn grid_pairs(grid: &AttributeMap) -> impl Iterator<Item = (&str, &str)> {
    grid.iter().map(|(k, v)| (k.as_str(), v.as_str()))
}

/// An element whose keys become attributes where they are XML names and `<attr/>` children
/// otherwise.
fn write_fields<'a>(
    out: &mut String,
    indent: &str,
    tag: &str,
    fields: impl Iterator<Item = (&'a str, &'a str)>,
) {
    let (named, unnamed): (Vec<_>, Vec<_>) = fields.partition(|(k, _)| is_xml_name(k));
    if unnamed.is_empty() {
        write_empty(out, indent, tag, named.into_iter());
        return;
    }
    out.push_str(indent);
    out.push('<');
    out.push_str(tag);
    write_attributes(out, named.into_iter());
    out.push_str(">\n");
    let inner = format!("{}{}", indent, INDENT);
    for (key, value) in unnamed {
        write_empty(out, &inner, "attr", [("name", key), ("value", value)].into_iter());
    }
    out.push_str(indent);
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

fn write_empty<'a>(
    out: &mut String,
    indent: &str,
    tag: &str,
    attributes: impl Iterator<Item = (&'a str, &'a str)>,
) {
    out.push_str(indent);
    out.push('<');
    out.push_str(tag);
    write_attributes(out, attributes);
    out.push_str("/>\n");
}

fn write_attributes<'a>(out: &mut String, attributes: impl Iterator<Item = (&'a str, &'a str)>) {
    for (key, value) in attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
}

/// The XML 1.0 `Name` production
pub fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_name_start) && chars.all(is_name_char)
}

fn is_name_start(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}' | '\u{37F}'..='\u{1FFF}' | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}' | '\u{2C00}'..='\u{2FEF}' | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}' | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}

pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
