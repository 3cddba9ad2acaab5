//! Configuration loader for switch tables and grammar options.
//!
//! `defaults/switchparse.default.toml` is embedded into the crate so that the documented
//! defaults and runtime behavior stay in sync. Callers layer their own files (usually a switch
//! table) on top via [`Loader`] before deserializing into [`Settings`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::switches::{Registry, RegistryError, SwitchDescriptor};

const DEFAULT_TOML: &str = include_str!("../defaults/switchparse.default.toml");

/// Top-level configuration: grammar knobs plus an optional switch table.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub syntax: SyntaxOptions,
    #[serde(default)]
    pub switches: Vec<SwitchDescriptor>,
}

impl Settings {
    /// Validate the configured switch table.
    pub fn registry(&self) -> Result<Registry, RegistryError> {
        Registry::new(self.switches.iter().cloned())
    }
}

/// Knobs of the switch grammar that may vary between applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxOptions {
    /// Accept `/` as a short cluster prefix in addition to `-`.
    pub slash_prefix: bool,
}

impl Default for SyntaxOptions {
    fn default() -> Self {
        Self { slash_prefix: true }
    }
}

/// Helper for layering user files over the built-in defaults.
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

    /// Layer TOML text, e.g. a switch table embedded in the application.
    pub fn with_toml(mut self, text: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(text, FileFormat::Toml));
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
    pub fn build(self) -> Result<Settings, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Settings, ConfigError> {
    Loader::new().build()
}
