//! Source text to built tree, and optionally to a serialized format
//!
//! [Pipeline] bundles a [TreeBuilder] and a [FormatRegistry] configured from a [GooConfig].
//! The free functions run against a shared pipeline built from the embedded defaults.

use crate::goo::ast::{AstError, Document};
use crate::goo::building::{GenericNode, TreeBuilder};
use crate::goo::config::{BuilderConfig, GooConfig};
use crate::goo::formats::{FormatError, FormatRegistry};
use crate::goo::lexing::LexError;
use crate::goo::parsing::{self, ParseError, SyntaxError};
use once_cell::sync::Lazy;
use std::fmt;

static DEFAULT_PIPELINE: Lazy<Pipeline> = Lazy::new(Pipeline::new);

/// Any failure between source text and output
#[derive(Debug, Clone, PartialEq)]
pub enum GooError {
    Lex(LexError),
    Parse(ParseError),
    Tree(AstError),
    Format(FormatError),
}

impl fmt::Display for GooError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GooError::Lex(e) => write!(f, "Lexing failed: {}", e),
            GooError::Parse(e) => write!(f, "Parsing failed: {}", e),
            GooError::Tree(e) => write!(f, "Building failed: {}", e),
            GooError::Format(e) => write!(f, "Formatting failed: {}", e),
        }
    }
}

impl std::error::Error for GooError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GooError::Lex(e) => Some(e),
            GooError::Parse(e) => Some(e),
            GooError::Tree(e) => Some(e),
            GooError::Format(e) => Some(e),
        }
    }
}

impl From<SyntaxError> for GooError {
    fn from(err: SyntaxError) -> Self {
        match err {
            SyntaxError::Lex(e) => GooError::Lex(e),
            SyntaxError::Parse(e) => GooError::Parse(e),
            SyntaxError::Tree(e) => GooError::Tree(e),
        }
    }
}

impl From<AstError> for GooError {
    fn from(err: AstError) -> Self {
        GooError::Tree(err)
    }
}

impl From<FormatError> for GooError {
    fn from(err: FormatError) -> Self {
        GooError::Format(err)
    }
}

pub struct Pipeline {
    builder: TreeBuilder,
    registry: FormatRegistry,
    format: String,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::from_config(&GooConfig::default())
    }

    pub fn from_config(config: &GooConfig) -> Self {
        Self {
            builder: TreeBuilder::with_config(config.builder.clone()),
            registry: FormatRegistry::with_config(&config.builder),
            format: config.output.format.clone(),
        }
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    pub fn build(&self, source: &str) -> Result<Vec<GenericNode>, GooError> {
        let doc = parse_document(source)?;
        Ok(self.builder.build(&doc)?)
    }

    /// Build and serialize with the configured output format.
    pub fn render(&self, source: &str) -> Result<String, GooError> {
        self.render_as(source, &self.format)
    }

    pub fn render_as(&self, source: &str, format: &str) -> Result<String, GooError> {
        if !self.registry.has(format) {
            return Err(FormatError::FormatNotFound(format.to_string()).into());
        }
        let nodes = self.build(source)?;
        Ok(self.registry.serialize(&nodes, format)?)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_document(source: &str) -> Result<Document, GooError> {
    Ok(parsing::parse(source)?)
}

/// Parse and build with the default grid keys.
pub fn to_tree(source: &str) -> Result<Vec<GenericNode>, GooError> {
    DEFAULT_PIPELINE.build(source)
}

pub fn to_tree_with(source: &str, config: &BuilderConfig) -> Result<Vec<GenericNode>, GooError> {
    let doc = parse_document(source)?;
    Ok(TreeBuilder::with_config(config.clone()).build(&doc)?)
}

/// Parse, build and serialize to the named format (`xml`, `json`, `yaml`, `treeviz`).
pub fn execute_and_serialize(source: &str, format: &str) -> Result<String, GooError> {
    DEFAULT_PIPELINE.render_as(source, format)
}
