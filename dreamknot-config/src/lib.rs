//! Shared configuration loader for the dreamknot tools.
//!
//! `defaults/dreamknot.default.toml` is embedded into every binary so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults via
//! [`Loader`] before deserializing into [`DreamknotConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use dreamknot::{Tokenizer, Vocabulary, VocabularyError};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const DEFAULT_TOML: &str = include_str!("../defaults/dreamknot.default.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),
    #[error("invalid vocabulary: {0}")]
    Vocabulary(#[from] VocabularyError),
}

/// Top-level configuration consumed by dreamknot applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DreamknotConfig {
    pub vocabulary: VocabularyConfig,
    pub server: ServerConfig,
}

/// Textual form of the tokenizer vocabulary.
#[derive(Debug, Clone, Deserialize)]
pub struct VocabularyConfig {
    pub functions: Vec<String>,
    pub operators: Vec<String>,
}

impl VocabularyConfig {
    /// Validate the entries and build the immutable vocabulary.
    pub fn to_vocabulary(&self) -> Result<Vocabulary, VocabularyError> {
        Vocabulary::from_entries(&self.operators, &self.functions)
    }
}

/// Where the language server offers semantic tokens.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub language_id: String,
    pub scheme: String,
}

impl DreamknotConfig {
    pub fn tokenizer(&self) -> Result<Tokenizer, ConfigError> {
        Ok(Tokenizer::new(self.vocabulary.to_vocabulary()?))
    }
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DreamknotConfig, ConfigError> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DreamknotConfig, ConfigError> {
    Loader::new().build()
}
