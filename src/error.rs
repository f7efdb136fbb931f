//! Error types surfaced by the resolver and the configuration loader.

use std::path::PathBuf;

/// Errors returned while resolving an asset reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The reference has no extension, or its extension is not whitelisted.
    #[error("invalid reference `{reference}`: extension not allowed")]
    InvalidReference {
        /// Reference exactly as it was passed to the resolver.
        reference: String,
    },
}

/// Errors that can occur while loading resolver configuration from disk.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the JSON configuration.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        #[source]
        source: serde_json::Error,
    },
}
