//! Named formatters
//!
//! Formats are looked up by name at runtime (`"xml"`, `"json"`, ...), so they sit behind the
//! object-safe [Formatter] trait in a [FormatRegistry]. Names are kept sorted.

use crate::goo::building::GenericNode;
use crate::goo::config::BuilderConfig;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    FormatNotFound(String),
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Serializes top-level nodes to text
pub trait Formatter: Send + Sync {
    /// Registry key, e.g. "xml"
    fn name(&self) -> &str;

    fn serialize(&self, nodes: &[GenericNode]) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

#[derive(Default)]
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in formatters, with layout attributes rendered under `config.grid_tag`
    pub fn with_config(config: &BuilderConfig) -> Self {
        let mut registry = Self::new();
        registry.register(super::XmlFormatter::new(&config.grid_tag));
        registry.register(super::TreevizFormatter::new(&config.grid_tag));
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }

    pub fn with_defaults() -> Self {
        Self::with_config(&BuilderConfig::default())
    }

    /// Later registrations replace earlier ones of the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        let name = formatter.name().to_string();
        if self.formatters.insert(name, Box::new(formatter)).is_some() {
            log::debug!("replaced a registered formatter");
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn list_formats(&self) -> Vec<&str> {
        self.formatters.keys().map(String::as_str).collect()
    }

    pub fn serialize(&self, nodes: &[GenericNode], format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        log::debug!("serializing {} roots as {}", nodes.len(), format);
        formatter.serialize(nodes)
    }
}
