//! Whitelist of file extensions the resolver accepts.

use std::collections::BTreeSet;

/// Extensions accepted when no overrides are supplied.
pub const DEFAULT_EXTENSIONS: [&str; 5] = ["png", "jpg", "gif", "css", "ttf"];

/// Set of accepted extension suffixes, compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedExtensions {
    extensions: BTreeSet<String>,
}

impl Default for AllowedExtensions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

impl AllowedExtensions {
    /// Start from the defaults and apply per-extension overrides.
    ///
    /// An entry mapped to `true` adds the extension, one mapped to `false` removes it. Keys are
    /// trimmed and a leading `.` is dropped, so `".woff2"` and `"woff2"` are the same key.
    pub fn with_overrides<I, K>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let mut allowed = Self::default();
        allowed.merge(overrides);
        allowed
    }

    /// Apply overrides on top of the current set.
    pub fn merge<I, K>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        for (key, enabled) in overrides {
            let Some(extension) = normalise_key(key.as_ref()) else {
                continue;
            };
            if enabled {
                self.extensions.insert(extension);
            } else {
                self.extensions.remove(&extension);
            }
        }
    }

    /// Returns `true` when the extension is whitelisted.
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }

    /// Returns `true` when the extension of `reference` is whitelisted.
    pub fn permits(&self, reference: &str) -> bool {
        extension_of(reference).is_some_and(|extension| self.contains(extension))
    }

    /// Iterate over the accepted extensions in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

/// Substring after the last `.` of a reference, if there is one.
pub fn extension_of(reference: &str) -> Option<&str> {
    reference.rsplit_once('.').map(|(_, extension)| extension)
}

fn normalise_key(key: &str) -> Option<String> {
    let key = key.trim();
    let key = key.strip_prefix('.').unwrap_or(key);
    (!key.is_empty()).then(|| key.to_string())
}
