//! Stylesheet scanning: references inside a stylesheet are relative to the stylesheet itself.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::asset_paths::should_ignore_asset_reference;
use crate::error::ResolveError;
use crate::models::{RejectedReference, StylesheetAssets};
use crate::resolver::PathResolver;

fn stylesheet_reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r#"(?i)url\(\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|(?P<bare>[^)'"\s]*))\s*\)|@import\s+(?:"(?P<idq>[^"]*)"|'(?P<isq>[^']*)')"#,
        )
        .expect("invalid stylesheet reference regex")
    })
}

/// Collect `url(...)` and `@import` targets from stylesheet source.
///
/// References are returned in document order with duplicates removed. Inline data, fragment
/// identifiers and empty values are skipped.
pub fn collect_stylesheet_references(css: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut references = Vec::new();

    for captures in stylesheet_reference_pattern().captures_iter(css) {
        let Some(value) = ["dq", "sq", "bare", "idq", "isq"]
            .iter()
            .find_map(|name| captures.name(name))
        else {
            continue;
        };

        let value = value.as_str().trim();
        if should_ignore_asset_reference(value) {
            continue;
        }
        if seen.insert(value.to_string()) {
            references.push(value.to_string());
        }
    }

    references
}

/// Resolve every asset a stylesheet references.
///
/// Works on a copy of `resolver`: the copy plunges into the stylesheet's directory and then
/// resolves each reference without plunging, so the caller's navigation state is untouched.
/// Only an invalid `stylesheet` reference is an error; rejected assets are reported in
/// [`StylesheetAssets::rejected`].
pub fn resolve_stylesheet_assets(
    resolver: &PathResolver,
    stylesheet: &str,
    css: &str,
) -> Result<StylesheetAssets, ResolveError> {
    let mut scoped = resolver.clone();
    let stylesheet = scoped.resolve(stylesheet, true)?;

    let mut resolved = Vec::new();
    let mut rejected = Vec::new();

    for reference in collect_stylesheet_references(css) {
        match scoped.resolve(&reference, false) {
            Ok(path) => resolved.push(path),
            Err(err) => rejected.push(RejectedReference {
                reason: err.to_string(),
                reference,
            }),
        }
    }

    tracing::debug!(
        stylesheet = %stylesheet,
        resolved = resolved.len(),
        rejected = rejected.len(),
        "resolved stylesheet assets"
    );

    Ok(StylesheetAssets {
        stylesheet,
        resolved,
        rejected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSS: &str = r#"
@import "base.css";
@import url('print.css');
@font-face {
  font-family: "Helvetica";
  src: url(../fonts/Helvetica.ttf) format("truetype");
}
body { background: URL( "../images/bg.png" ) no-repeat; }
.icon { background-image: url(data:image/png;base64,AAAA); }
.mask { mask: url(#mask-shape); }
.logo { background: url("https://cdn.example.org/logo.png"); }
.again { background: url(../images/bg.png); }
script { behavior: url(htc/fix.htc); }
"#;

    #[test]
    fn collects_references_in_document_order() {
        assert_eq!(collect_stylesheet_references(CSS), vec![
            "base.css".to_string(),
            "print.css".to_string(),
            "../fonts/Helvetica.ttf".to_string(),
            "../images/bg.png".to_string(),
            "https://cdn.example.org/logo.png".to_string(),
            "htc/fix.htc".to_string(),
        ]);
    }

    #[test]
    fn empty_stylesheet_has_no_references() {
        assert!(collect_stylesheet_references("body { color: red; }").is_empty());
        assert!(collect_stylesheet_references("a { background: url(); }").is_empty());
    }

    #[test]
    fn resolves_assets_relative_to_stylesheet() {
        let mut resolver = PathResolver::default();
        resolver.initialize("http://example.com/");

        let assets = resolve_stylesheet_assets(&resolver, "/css/style.css", CSS).unwrap();

        assert_eq!(assets.stylesheet, "http://example.com/css/style.css");
        assert_eq!(assets.resolved, vec![
            "http://example.com/css/base.css".to_string(),
            "http://example.com/css/print.css".to_string(),
            "http://example.com/fonts/Helvetica.ttf".to_string(),
            "http://example.com/images/bg.png".to_string(),
            "https://cdn.example.org/logo.png".to_string(),
        ]);
        assert_eq!(assets.rejected.len(), 1);
        assert_eq!(assets.rejected[0].reference, "htc/fix.htc");
    }

    #[test]
    fn leaves_caller_resolver_untouched() {
        let mut resolver = PathResolver::default();
        resolver.initialize("http://example.com/");

        resolve_stylesheet_assets(&resolver, "/css/style.css", CSS).unwrap();
        assert_eq!(resolver.current_path(), "http://example.com/");
    }

    #[test]
    fn invalid_stylesheet_reference_is_an_error() {
        let resolver = PathResolver::default();
        let err = resolve_stylesheet_assets(&resolver, "/css/style.scss", CSS).unwrap_err();
        assert_eq!(err, ResolveError::InvalidReference {
            reference: "/css/style.scss".to_string()
        });
    }
}
