//! Post text normalization.
//!
//! Lowercases, collapses whitespace, strips URLs, and unwraps hashtags so the
//! downstream lexicon scans only ever see one canonical form. Total over any
//! input; empty input yields an empty string.

use regex::Regex;
use std::sync::LazyLock;

// Compile patterns once at startup
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace run pattern"));

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*(),]|(?:%[0-9a-fA-F]{2}))+")
        .expect("Invalid regex: http/https url pattern")
});

static HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\w+)").expect("Invalid regex: hashtag pattern"));

/// Normalize raw post text for analysis.
///
/// Transformations, in order: lowercase, collapse whitespace runs to a single
/// space, remove HTTP/HTTPS URLs, strip `#` from hashtags while keeping the
/// tag word, trim. Whitespace is re-collapsed after URL removal so the result
/// is a fixed point of this function.
pub fn normalize(text: &str) -> String {
    let text = text.to_lowercase();
    let text = WHITESPACE.replace_all(&text, " ");
    let text = URL.replace_all(&text, "");
    let text = HASHTAG.replace_all(&text, "$1");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_collapses_whitespace() {
        assert_eq!(
            normalize("  Need   a\tDashboard\n\nBuilt  "),
            "need a dashboard built"
        );
    }

    #[test]
    fn test_strips_urls() {
        assert_eq!(
            normalize("see https://example.com/page?q=1 for details"),
            "see for details"
        );
        assert_eq!(normalize("ends with http://foo.bar/baz"), "ends with");
    }

    #[test]
    fn test_unwraps_hashtags() {
        assert_eq!(normalize("#DataViz and #WebDev"), "dataviz and webdev");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Check https://example.com NOW #DataViz",
            "  Plain   text  ",
            "already normalized text",
            "émojis 🚀 and açcents",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not a fixed point for {:?}", sample);
        }
    }

    #[test]
    fn test_non_ascii_preserved() {
        assert_eq!(normalize("Besoin d'aide 🚀"), "besoin d'aide 🚀");
    }
}
