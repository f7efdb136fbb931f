use std::sync::OnceLock;

use regex::Regex;

fn backwards_segment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[0-9A-Za-z_]+/\.\./").expect("invalid backwards segment regex")
    })
}

/// Remove every `segment/../` pair in a single left-to-right pass.
///
/// Matches never overlap and the output is not rescanned, so `a/b/../../c` collapses to
/// `a/../c` rather than `c`. Only the trailing run of `[0-9A-Za-z_]` characters before the
/// separator is removed, so `web-fonts/../` leaves `web-` behind.
pub fn collapse_backwards_segments(path: &str) -> String {
    if !path.contains("..") {
        return path.to_string();
    }
    backwards_segment_pattern()
        .replace_all(path, "")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::collapse_backwards_segments;

    #[test]
    fn removes_segment_before_backwards_marker() {
        assert_eq!(
            collapse_backwards_segments("http://example.com/css/tools/../base.css"),
            "http://example.com/css/base.css"
        );
    }

    #[test]
    fn collapses_every_separate_occurrence() {
        assert_eq!(
            collapse_backwards_segments("/a/x/../b/y/../c.css"),
            "/a/b/c.css"
        );
    }

    #[test]
    fn does_not_rescan_after_substitution() {
        assert_eq!(collapse_backwards_segments("a/b/../../c.css"), "a/../c.css");
    }

    #[test]
    fn leaves_leading_backwards_markers() {
        assert_eq!(collapse_backwards_segments("../a.css"), "../a.css");
        assert_eq!(collapse_backwards_segments("/../a.css"), "/../a.css");
    }

    #[test]
    fn removes_only_trailing_word_run_of_segment() {
        assert_eq!(collapse_backwards_segments("web-fonts/../a.ttf"), "web-a.ttf");
        assert_eq!(
            collapse_backwards_segments("http://example.com/../a.css"),
            "http://example.a.css"
        );
    }

    #[test]
    fn passes_through_paths_without_backwards_markers() {
        assert_eq!(collapse_backwards_segments("/css/style.css"), "/css/style.css");
    }
}
