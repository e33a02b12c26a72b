//! Configuration loading
//!
//! `defaults/goo.default.toml` is embedded into the library so that docs and runtime behavior
//! stay in sync. Applications layer their own files and overrides on top of those defaults via
//! [`Loader`] before deserializing into [`GooConfig`].
//!
//! [`BuilderConfig::default`] mirrors the embedded file, so code that never touches a config file
//! does not need to go through the loader at all.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/goo.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GooConfig {
    pub builder: BuilderConfig,
    pub output: OutputConfig,
}

/// Controls how the tree builder extracts layout attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    pub grid_tag: String,
    pub grid_keys: Vec<String>,
}

impl BuilderConfig {
    pub fn is_grid_key(&self, key: &str) -> bool {
        self.grid_keys.iter().any(|k| k == key)
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            grid_tag: "grid".to_string(),
            grid_keys: ["sticky", "row", "column", "rowspan", "columnspan"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered format, see [formats](crate::goo::formats)
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "xml".to_string(),
        }
    }
}

/// Layers configuration sources over the embedded defaults; later sources win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
        }
        .with_toml(DEFAULT_TOML)
    }

    /// Layer a TOML file. [Loader::build] fails if it does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml_file(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml_file(path.as_ref(), false)
    }

    /// Layer TOML text, e.g. a `[builder]` table cut from a larger application config.
    pub fn with_toml(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    fn with_toml_file(mut self, path: &Path, required: bool) -> Self {
        log::debug!("layering {} (required: {})", path.display(), required);
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Override one dotted key, such as `builder.grid_tag`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<GooConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<GooConfig, ConfigError> {
    Loader::new().build()
}
