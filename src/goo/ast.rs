//! Abstract syntax tree for goo documents
//!
//!     The AST has exactly two node kinds: an [Assignment] (`key = value`) and an [Element] (a
//!     named node with assignments, nested elements and a terminating `.`). They form the closed
//!     [AstNode] enum, so every grammar production is forced to yield one of the two.
//!
//! Storage
//!
//!     Nodes live in an arena ([Ast]) and refer to each other by [NodeId]. An element owns the
//!     ids of its attributes and children; each child element stores its parent's id as a plain
//!     back-reference. The parent is set once, when the owning element is allocated, and
//!     allocating a second owner for the same child is an [AstError]. The node graph is
//!     therefore always a tree.
//!
//! Provenance
//!
//!     Every node carries the [Provenance] set of tokens it was derived from. The [Document]
//!     keeps the token table alongside the arena so those ids can always be turned back into
//!     spans and source text. See [provenance](provenance).

pub mod provenance;
pub mod range;

use crate::goo::token::Token;
use la_arena::{Arena, Idx, RawIdx};
use std::collections::HashSet;
use std::fmt;

pub use provenance::Provenance;
pub use range::{LineIndex, Position, Range};

pub type NodeId = Idx<AstNode>;

/// Deepest element nesting accepted, counting a top-level element as depth 1. The parser
/// rejects anything deeper, which bounds every recursive walk over documents and built trees.
pub const MAX_NESTING: usize = 128;

fn raw(id: NodeId) -> u32 {
    u32::from(id.into_raw())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: String,
    pub value: String,
    pub provenance: Provenance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Assignment nodes, in source order
    pub attributes: Vec<NodeId>,
    /// Element nodes, in source order
    pub children: Vec<NodeId>,
    pub provenance: Provenance,
    parent: Option<NodeId>,
}

impl Element {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    Assignment(Assignment),
    Element(Element),
}

impl AstNode {
    pub fn provenance(&self) -> &Provenance {
        match self {
            AstNode::Assignment(a) => &a.provenance,
            AstNode::Element(e) => &e.provenance,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            AstNode::Element(e) => Some(e),
            AstNode::Assignment(_) => None,
        }
    }

    pub fn as_assignment(&self) -> Option<&Assignment> {
        match self {
            AstNode::Assignment(a) => Some(a),
            AstNode::Element(_) => None,
        }
    }

    /// Element name or assignment key
    pub fn label(&self) -> &str {
        match self {
            AstNode::Assignment(a) => &a.key,
            AstNode::Element(e) => &e.name,
        }
    }
}

/// Violations of the tree invariant while building nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    UnknownNode(NodeId),
    NotAnElement(NodeId),
    NotAnAssignment(NodeId),
    AlreadyParented { child: NodeId, parent: NodeId },
    /// The element sits deeper than [MAX_NESTING]
    TooDeep(NodeId),
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstError::UnknownNode(id) => write!(f, "node #{} does not exist", raw(*id)),
            AstError::NotAnElement(id) => {
                write!(f, "node #{} cannot be a child: it is not an element", raw(*id))
            }
            AstError::NotAnAssignment(id) => {
                write!(f, "node #{} cannot be an attribute: it is not an assignment", raw(*id))
            }
            AstError::AlreadyParented { child, parent } => write!(
                f,
                "node #{} already has parent #{}",
                raw(*child),
                raw(*parent)
            ),
            AstError::TooDeep(id) => write!(
                f,
                "node #{} is nested deeper than {} elements",
                raw(*id),
                MAX_NESTING
            ),
        }
    }
}

impl std::error::Error for AstError {}

/// Arena holding every node of one parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ast {
    nodes: Arena<AstNode>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        (raw(id) as usize) < self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&AstNode> {
        self.contains(id).then(|| &self.nodes[id])
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.get(id).and_then(AstNode::as_element)
    }

    pub fn assignment(&self, id: NodeId) -> Option<&Assignment> {
        self.get(id).and_then(AstNode::as_assignment)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.element(id).and_then(Element::parent)
    }

    /// Attribute assignments of an element, in source order
    pub fn attributes(&self, id: NodeId) -> impl Iterator<Item = &Assignment> + '_ {
        self.element(id)
            .map(|e| e.attributes.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |attr| self.assignment(*attr))
    }

    /// Child elements of an element, in source order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.element(id)
            .map(|e| e.children.as_slice())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &AstNode)> + '_ {
        self.nodes.iter()
    }

    pub fn alloc_assignment(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        provenance: Provenance,
    ) -> NodeId {
        self.nodes.alloc(AstNode::Assignment(Assignment {
            key: key.into(),
            value: value.into(),
            provenance,
        }))
    }

    /// Allocate an element and adopt its children.
    ///
    /// Fails without allocating anything if an attribute is not an assignment, a child is not
    /// an element, or a child already belongs to another element (or appears twice).
    pub fn alloc_element(
        &mut self,
        name: impl Into<String>,
        attributes: Vec<NodeId>,
        children: Vec<NodeId>,
        provenance: Provenance,
    ) -> Result<NodeId, AstError> {
        for &attr in &attributes {
            match self.get(attr) {
                None => return Err(AstError::UnknownNode(attr)),
                Some(AstNode::Element(_)) => return Err(AstError::NotAnAssignment(attr)),
                Some(AstNode::Assignment(_)) => {}
            }
        }

        let mut seen = HashSet::new();
        let next = NodeId::from_raw(RawIdx::from(self.nodes.len() as u32));
        for &child in &children {
            match self.get(child) {
                None => return Err(AstError::UnknownNode(child)),
                Some(AstNode::Assignment(_)) => return Err(AstError::NotAnElement(child)),
                Some(AstNode::Element(e)) => {
                    if let Some(parent) = e.parent {
                        return Err(AstError::AlreadyParented { child, parent });
                    }
                }
            }
            if !seen.insert(raw(child)) {
                return Err(AstError::AlreadyParented {
                    child,
                    parent: next,
                });
            }
        }

        let id = self.nodes.alloc(AstNode::Element(Element {
            name: name.into(),
            attributes,
            children: children.clone(),
            provenance,
            parent: None,
        }));
        for child in children {
            if let AstNode::Element(e) = &mut self.nodes[child] {
                e.parent = Some(id);
            }
        }
        Ok(id)
    }
}

impl std::ops::Index<NodeId> for Ast {
    type Output = AstNode;

    fn index(&self, id: NodeId) -> &AstNode {
        &self.nodes[id]
    }
}

/// Result of one parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub ast: Ast,
    /// Every token of the source, indexed by [TokenId](crate::goo::token::TokenId)
    pub tokens: Vec<Token>,
    /// File-level assignments, in source order
    pub macros: Vec<NodeId>,
    /// Top-level elements, in source order
    pub elements: Vec<NodeId>,
}

impl Document {
    pub fn macro_assignments(&self) -> impl Iterator<Item = &Assignment> + '_ {
        self.macros.iter().filter_map(|id| self.ast.assignment(*id))
    }

    pub fn root_elements(&self) -> impl Iterator<Item = (NodeId, &Element)> + '_ {
        self.elements
            .iter()
            .filter_map(|id| self.ast.element(*id).map(|e| (*id, e)))
    }

    /// Element ids in depth-first pre-order
    pub fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack: Vec<NodeId> = self.elements.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.ast.children(id).iter().rev().copied());
        }
        order
    }

    pub fn element_names(&self) -> Vec<&str> {
        self.walk()
            .into_iter()
            .filter_map(|id| self.ast.element(id).map(|e| e.name.as_str()))
            .collect()
    }

    /// Contributing tokens of a node, sorted by span
    pub fn tokens_of(&self, id: NodeId) -> Vec<&Token> {
        self.ast
            .get(id)
            .map(|node| node.provenance().sorted(&self.tokens))
            .unwrap_or_default()
    }

    pub fn span_of(&self, id: NodeId) -> Option<std::ops::Range<usize>> {
        self.ast.get(id)?.provenance().span(&self.tokens)
    }

    /// The minimal source substring covering every token of the node.
    pub fn source_text<'s>(&self, id: NodeId, source: &'s str) -> Option<&'s str> {
        source.get(self.span_of(id)?)
    }

    pub fn location_of(&self, id: NodeId, source: &str) -> Option<Range> {
        let span = self.span_of(id)?;
        Some(LineIndex::new(source).range(span))
    }
}
