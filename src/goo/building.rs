//! Tree builder
//!
//!     Lowers a parsed [Document] into [GenericNode]s, one per element, preserving source order
//!     throughout.
//!
//! Per Element
//!
//!     1. Attributes are collected in source order. A repeated key keeps its first position
//!        and takes the last value.
//!     2. A value that is exactly the key of a file-level macro is replaced by the macro's
//!        value. This is one pass: a substituted value is never looked up again.
//!     3. Keys in the configured grid set (`sticky row column rowspan columnspan` by default)
//!        move to `grid_attributes`, which stays `None` when no such key was present.
//!     4. Child elements are built recursively, in order.
//!
//!     Element-level assignments are attributes, never macros. Only the document's leading
//!     assignments feed the macro table, and a repeated macro key takes its last value.

pub mod tree;

use crate::goo::ast::{AstError, Document, NodeId, MAX_NESTING};
use crate::goo::config::BuilderConfig;
use indexmap::IndexMap;

pub use tree::{is_event_key, AttributeMap, GenericNode};

#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    config: BuilderConfig,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Build the top-level nodes of a document.
    ///
    /// Only fails if the document is not a well-formed tree of elements no deeper than
    /// [MAX_NESTING], which cannot happen for a document produced by the parser.
    pub fn build(&self, doc: &Document) -> Result<Vec<GenericNode>, AstError> {
        let macros = macro_table(doc);
        log::debug!("building {} roots with {} macros", doc.elements.len(), macros.len());
        doc.elements
            .iter()
            .map(|id| self.build_element(doc, &macros, *id, 1))
            .collect()
    }

    fn build_element(
        &self,
        doc: &Document,
        macros: &IndexMap<&str, &str>,
        id: NodeId,
        depth: usize,
    ) -> Result<GenericNode, AstError> {
        if depth > MAX_NESTING {
            return Err(AstError::TooDeep(id));
        }
        let element = match doc.ast.get(id) {
            None => return Err(AstError::UnknownNode(id)),
            Some(node) => node.as_element().ok_or(AstError::NotAnElement(id))?,
        };

        let mut all = AttributeMap::new();
        for attr in &element.attributes {
            let assignment = doc
                .ast
                .assignment(*attr)
                .ok_or(AstError::NotAnAssignment(*attr))?;
            let value = macros
                .get(assignment.value.as_str())
                .copied()
                .unwrap_or(assignment.value.as_str());
            all.insert(assignment.key.clone(), value.to_string());
        }

        let (grid, attributes): (AttributeMap, AttributeMap) = all
            .into_iter()
            .partition(|(key, _)| self.config.is_grid_key(key));

        let children = element
            .children
            .iter()
            .map(|child| self.build_element(doc, macros, *child, depth + 1))
            .collect::<Result<Vec<_>, _>>()?;

        log::trace!(
            "built `{}`: {} attributes, {} grid attributes, {} children",
            element.name,
            attributes.len(),
            grid.len(),
            children.len()
        );
        Ok(GenericNode {
            tag: element.name.clone(),
            attributes,
            grid_attributes: (!grid.is_empty()).then_some(grid),
            children,
            origin: Some(id),
        })
    }
}

/// Macro key to value, last definition wins.
pub fn macro_table(doc: &Document) -> IndexMap<&str, &str> {
    doc.macro_assignments()
        .map(|a| (a.key.as_str(), a.value.as_str()))
        .collect()
}

/// Build with the default configuration.
pub fn build(doc: &Document) -> Result<Vec<GenericNode>, AstError> {
    TreeBuilder::new().build(doc)
}
