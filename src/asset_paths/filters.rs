use std::sync::OnceLock;

use regex::Regex;

fn external_reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("invalid URL scheme regex")
    })
}

fn asset_reference_ignores() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
                Regex::new(r"(?i)^mailto:").expect("invalid mailto regex"),
                Regex::new(r"(?i)^about:").expect("invalid about regex"),
                Regex::new(r"(?i)^javascript:").expect("invalid javascript regex"),
                Regex::new(r"^#").expect("invalid fragment regex"),
            ]
        })
        .as_slice()
}

/// Returns `true` when the reference carries its own scheme (`http://`, `https://`, ...).
///
/// Such references are already complete and are handed back verbatim by the resolver. A bare
/// `http` prefix is not enough: `httpdocs/a.css` and `http:a.css` have no `://` and are
/// resolved as relative paths.
pub fn is_external_reference(value: &str) -> bool {
    external_reference_pattern().is_match(value)
}

/// Determine whether a reference found inside a stylesheet should be skipped entirely.
///
/// Inline data, fragment identifiers and non-navigable schemes never name a file that could
/// be resolved against a base path.
pub fn should_ignore_asset_reference(value: &str) -> bool {
    value.trim().is_empty()
        || asset_reference_ignores()
            .iter()
            .any(|pattern| pattern.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::{is_external_reference, should_ignore_asset_reference};

    #[test]
    fn detects_http_urls() {
        assert!(is_external_reference("http://example.com/css/style.css"));
        assert!(is_external_reference("https://cdn.example.com/logo.png"));
    }

    #[test]
    fn detects_other_schemes() {
        assert!(is_external_reference("ftp://mirror.example.com/font.ttf"));
        assert!(is_external_reference("git+ssh://host/repo.css"));
    }

    #[test]
    fn treats_scheme_less_paths_as_local() {
        assert!(!is_external_reference("/css/style.css"));
        assert!(!is_external_reference("httpdocs/style.css"));
        assert!(!is_external_reference("http:a.css"));
        assert!(!is_external_reference("//cdn.example.com/style.css"));
        assert!(!is_external_reference("../fonts/Helvetica.ttf"));
    }

    #[test]
    fn ignores_data_uris_and_fragments() {
        assert!(should_ignore_asset_reference("data:image/png;base64,abc"));
        assert!(should_ignore_asset_reference("#gradient"));
        assert!(should_ignore_asset_reference("MAILTO:user@example.com"));
        assert!(should_ignore_asset_reference("   "));
    }

    #[test]
    fn keeps_relative_paths() {
        assert!(!should_ignore_asset_reference("images/photo.png"));
        assert!(!should_ignore_asset_reference("http://example.com/a.png"));
    }
}
