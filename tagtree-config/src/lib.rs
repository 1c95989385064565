//! Shared configuration loader for tagtree tools.
//!
//! `defaults/tagtree.default.toml` is embedded into every binary so that the documented
//! defaults and the runtime behavior stay in sync. Applications layer user files and
//! command line overrides on top of those defaults via [`Loader`] before deserializing
//! into [`TagtreeConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tagtree::FormattingRules;

const DEFAULT_TOML: &str = include_str!("../defaults/tagtree.default.toml");

/// Top-level configuration consumed by tagtree applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TagtreeConfig {
    pub formatting: FormattingConfig,
    pub render: RenderConfig,
}

/// Mirrors the knobs exposed by [`FormattingRules`].
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    pub indent: String,
    pub tab: String,
    pub elide_end_tags: bool,
    #[serde(default)]
    pub always_wrap: Vec<String>,
}

impl FormattingConfig {
    pub fn rules(&self) -> FormattingRules {
        FormattingRules::from(self.clone())
    }
}

impl From<FormattingConfig> for FormattingRules {
    fn from(config: FormattingConfig) -> Self {
        FormattingRules {
            indent: config.indent,
            tab: config.tab,
            elide_end_tags: config.elide_end_tags,
            always_wrap: config.always_wrap,
        }
    }
}

/// Controls the `render` command.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Registry name of the output format
    pub format: String,
    pub input: InputKind,
}

/// Syntax of a document description file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    /// Pick from the file extension
    Auto,
    Json,
    Yaml,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (command line flags end up here).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TagtreeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TagtreeConfig, ConfigError> {
    Loader::new().build()
}
