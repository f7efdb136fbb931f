//! Resolver configuration loader.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::extensions::AllowedExtensions;
use crate::resolver::PathResolver;

/// File name searched for by [`ResolverConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "asset-resolver.config.json";

/// Discoverable configuration describing how resolvers should be built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Base location new resolvers are initialized with.
    pub base_path: Option<String>,
    /// Per-extension overrides merged over the default whitelist.
    pub allowed_extensions: BTreeMap<String, bool>,
}

impl ResolverConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// A missing or unparsable file falls back to the defaults so callers can always build a
    /// resolver.
    pub fn discover(dir: &Path) -> Self {
        let candidate = Self::default_path(dir);
        match Self::from_path(&candidate) {
            Ok(config) => config,
            Err(ConfigError::Io { .. }) => Self::default(),
            Err(err) => {
                tracing::warn!("{err}; falling back to default resolver configuration");
                Self::default()
            }
        }
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Location of the configuration file inside `dir`.
    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join(DEFAULT_CONFIG_FILE)
    }

    /// Whitelist produced by merging the configured overrides over the defaults.
    pub fn allowed_extensions(&self) -> AllowedExtensions {
        AllowedExtensions::with_overrides(
            self.allowed_extensions
                .iter()
                .map(|(extension, enabled)| (extension.as_str(), *enabled)),
        )
    }

    /// Build a resolver, initialized when a base path is configured.
    pub fn build_resolver(&self) -> PathResolver {
        let mut resolver = PathResolver::new(self.allowed_extensions());
        if let Some(base_path) = &self.base_path {
            resolver.initialize(base_path.as_str());
        }
        resolver
    }
}
