//! JSON and YAML output via serde
//!
//! Both emit the serde data model of the node list: `tag`, `attributes`, then
//! `grid_attributes` and `children` when present.

use super::registry::{FormatError, Formatter};
use crate::goo::building::GenericNode;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, nodes: &[GenericNode]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(nodes)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, nodes: &[GenericNode]) -> Result<String, FormatError> {
        serde_yaml::to_string(nodes).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML document"
    }
}
