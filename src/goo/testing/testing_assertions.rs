//! Fluent assertion API for built trees

use crate::goo::building::GenericNode;

/// Create an assertion builder for a list of top-level nodes
pub fn assert_tree(nodes: &[GenericNode]) -> TreeAssertion<'_> {
    TreeAssertion { nodes }
}

fn summarize(nodes: &[GenericNode]) -> String {
    nodes
        .iter()
        .map(|n| n.tag.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct TreeAssertion<'a> {
    nodes: &'a [GenericNode],
}

impl<'a> TreeAssertion<'a> {
    pub fn node_count(self, expected: usize) -> Self {
        assert_eq!(
            self.nodes.len(),
            expected,
            "Expected {} top-level nodes, found {}: [{}]",
            expected,
            self.nodes.len(),
            summarize(self.nodes)
        );
        self
    }

    pub fn tags(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.nodes.iter().map(|n| n.tag.as_str()).collect();
        assert_eq!(actual, expected, "Top-level tags differ");
        self
    }

    pub fn node<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.nodes.len(),
            "Node index {} out of bounds ({} top-level nodes)",
            index,
            self.nodes.len()
        );
        assertion(NodeAssertion {
            node: &self.nodes[index],
            context: format!("nodes[{}]", index),
        });
        self
    }
}

pub struct NodeAssertion<'a> {
    node: &'a GenericNode,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn tag(self, expected: &str) -> Self {
        assert_eq!(
            self.node.tag, expected,
            "{}: expected tag `{}`, found `{}`",
            self.context, expected, self.node.tag
        );
        self
    }

    pub fn attr(self, key: &str, expected: &str) -> Self {
        assert_eq!(
            self.node.get(key),
            Some(expected),
            "{}: attribute `{}`",
            self.context,
            key
        );
        self
    }

    pub fn no_attr(self, key: &str) -> Self {
        assert!(
            self.node.get(key).is_none(),
            "{}: expected no attribute `{}`, found {:?}",
            self.context,
            key,
            self.node.get(key)
        );
        self
    }

    /// Attribute keys, in order
    pub fn attr_keys(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.node.attributes.keys().map(String::as_str).collect();
        assert_eq!(actual, expected, "{}: attribute keys", self.context);
        self
    }

    pub fn grid(self, key: &str, expected: &str) -> Self {
        assert_eq!(
            self.node.grid(key),
            Some(expected),
            "{}: grid attribute `{}`",
            self.context,
            key
        );
        self
    }

    /// Grid attribute keys, in order
    pub fn grid_keys(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .node
            .grid_attributes
            .iter()
            .flat_map(|g| g.keys().map(String::as_str))
            .collect();
        assert_eq!(actual, expected, "{}: grid attribute keys", self.context);
        self
    }

    pub fn no_grid(self) -> Self {
        assert!(
            self.node.grid_attributes.is_none(),
            "{}: expected no grid attributes, found {:?}",
            self.context,
            self.node.grid_attributes
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.node.children.len(),
            expected,
            "{}: expected {} children, found {}: [{}]",
            self.context,
            expected,
            self.node.children.len(),
            summarize(&self.node.children)
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.node.children.len(),
            "{}: child index {} out of bounds ({} children)",
            self.context,
            index,
            self.node.children.len()
        );
        assertion(NodeAssertion {
            node: &self.node.children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }
}
