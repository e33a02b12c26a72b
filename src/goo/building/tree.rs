//! Generic attributed tree handed to rendering backends
//!
//! A [GenericNode] is what a backend walks to create real widgets: a tag, an ordered attribute
//! map, an optional map of layout attributes and ordered children. It knows nothing about any
//! particular toolkit.
//!
//! Attribute keys written in angle brackets, like `<Button-1>`, are event-binding requests whose
//! values name callbacks. [GenericNode::split_bindings] separates them from plain options.

use crate::goo::ast::NodeId;
use indexmap::IndexMap;
use serde::Serialize;

pub type AttributeMap = IndexMap<String, String>;

#[derive(Debug, Clone, Default, Serialize)]
pub struct GenericNode {
    pub tag: String,
    pub attributes: AttributeMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_attributes: Option<AttributeMap>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<GenericNode>,
    /// The AST element this node was built from
    #[serde(skip)]
    pub origin: Option<NodeId>,
}

/// Structural equality: `origin` is ignored and attribute order does not matter.
impl PartialEq for GenericNode {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.attributes == other.attributes
            && self.grid_attributes == other.grid_attributes
            && self.children == other.children
    }
}

impl Eq for GenericNode {}

pub fn is_event_key(key: &str) -> bool {
    key.len() >= 2 && key.starts_with('<') && key.ends_with('>')
}

impl GenericNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_grid_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.grid_attributes
            .get_or_insert_with(AttributeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: GenericNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn grid(&self, key: &str) -> Option<&str> {
        self.grid_attributes
            .as_ref()
            .and_then(|g| g.get(key))
            .map(String::as_str)
    }

    /// The `name` attribute, under which backends register the created widget
    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    /// Partition attributes into `(event bindings, widget options)`, both in source order.
    pub fn split_bindings(&self) -> (IndexMap<&str, &str>, IndexMap<&str, &str>) {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .partition(|(k, _)| is_event_key(k))
    }

    /// Depth-first pre-order walk, starting with this node
    pub fn iter(&self) -> impl Iterator<Item = &GenericNode> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// First node with the given tag, in pre-order
    pub fn find(&self, tag: &str) -> Option<&GenericNode> {
        self.iter().find(|n| n.tag == tag)
    }
}
