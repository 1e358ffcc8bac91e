//! CLI configuration (`rsql.toml`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{RsqlError, RsqlResult};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "rsql.toml";

/// Output settings for the `rsql` binary.
///
/// ```toml
/// readable = true
/// strict = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RsqlConfig {
    /// Print readable RSQL instead of the URL-encoded form
    pub readable: bool,

    /// Reject empty selectors, operators and operand lists
    pub strict: bool,
}

impl RsqlConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(content: &str) -> RsqlResult<Self> {
        toml::from_str(content).map_err(|e| RsqlError::Config(e.to_string()))
    }

    /// Load a configuration file.
    pub fn from_file(path: &Path) -> RsqlResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load `explicit` if given, else the first existing default location,
    /// else defaults.
    pub fn load(explicit: Option<&Path>) -> RsqlResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> RsqlConfigBuilder {
        RsqlConfigBuilder::default()
    }
}

/// `./rsql.toml`, then `<config_dir>/rsql/config.toml`.
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("rsql").join("config.toml"));
    }
    paths
}

/// Builder for RsqlConfig
#[derive(Debug, Default)]
pub struct RsqlConfigBuilder {
    config: RsqlConfig,
}

impl RsqlConfigBuilder {
    /// Print readable RSQL
    pub fn readable(mut self, readable: bool) -> Self {
        self.config.readable = readable;
        self
    }

    /// Use the strict build path
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Build the configuration
    pub fn build(self) -> RsqlConfig {
        self.config
    }
}
