//! Navigable resolver that turns asset references into absolute locations.

use crate::asset_paths::{
    collapse_backwards_segments, directory_of, is_external_reference, join_reference,
};
use crate::error::ResolveError;
use crate::extensions::AllowedExtensions;

/// Resolves stylesheet, image and font references the way a browser resolves relative URLs.
///
/// The resolver keeps a fixed base path and a current path. References starting with `/`
/// resolve against the base, other relative references against the current path, and
/// references with their own scheme are returned unchanged. Resolving with `plunge` moves the
/// current path to the directory of the resolved reference so that follow-up references can
/// be written relative to it.
///
/// ```
/// use asset_path_resolver::PathResolver;
///
/// let mut resolver = PathResolver::default();
/// resolver.initialize("http://example.com/");
///
/// let sheet = resolver.resolve("/css/style.css", true).unwrap();
/// assert_eq!(sheet, "http://example.com/css/style.css");
///
/// let font = resolver.resolve("../fonts/Helvetica.ttf", false).unwrap();
/// assert_eq!(font, "http://example.com/fonts/Helvetica.ttf");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    base_path: String,
    current_path: String,
    allowed_extensions: AllowedExtensions,
}

impl PathResolver {
    /// Create an uninitialized resolver accepting the given extensions.
    pub fn new(allowed_extensions: AllowedExtensions) -> Self {
        Self {
            base_path: String::new(),
            current_path: String::new(),
            allowed_extensions,
        }
    }

    /// Set the base path and rewind the current path to it.
    pub fn initialize(&mut self, base_path: impl Into<String>) {
        let base_path = base_path.into();
        tracing::debug!(base = %base_path, "initializing resolver");
        self.current_path.clone_from(&base_path);
        self.base_path = base_path;
    }

    /// Resolve `reference`, optionally plunging into its directory afterwards.
    ///
    /// Fails with [`ResolveError::InvalidReference`] when the reference's extension is missing
    /// or not whitelisted. A failed call never moves the current path.
    pub fn resolve(&mut self, reference: &str, plunge: bool) -> Result<String, ResolveError> {
        if !self.allowed_extensions.permits(reference) {
            tracing::warn!(reference, "rejecting reference with disallowed extension");
            return Err(ResolveError::InvalidReference {
                reference: reference.to_string(),
            });
        }

        let resolved = if is_external_reference(reference) {
            reference.to_string()
        } else {
            let base = if reference.starts_with('/') {
                &self.base_path
            } else {
                &self.current_path
            };
            collapse_backwards_segments(&join_reference(base, reference))
        };

        tracing::debug!(reference, resolved = %resolved, plunge, "resolved reference");

        if plunge {
            self.current_path = directory_of(&resolved).to_string();
            tracing::trace!(current = %self.current_path, "plunged into directory");
        }

        Ok(resolved)
    }

    /// Root location established by [`PathResolver::initialize`].
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Location relative references are currently resolved against.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Extensions this resolver accepts.
    pub fn allowed_extensions(&self) -> &AllowedExtensions {
        &self.allowed_extensions
    }
}
