//! Static stylesheets and scripts bundled into the generated head.

/// Baseline layout for every highlighted block.
pub const BASE_STYLES: &str = include_str!("../assets/base.css");

/// Line Highlight plugin colors, including pass/fail/warn variants.
pub const LINE_HIGHLIGHT_STYLES: &str = include_str!("../assets/line-highlight.css");

/// Inserted/deleted line colors for `language-diff` blocks.
pub const DIFF_STYLES: &str = include_str!("../assets/diff.css");

/// Placeholder, code-fold and TODO token styles used by the Swift additions.
pub const SWIFT_STYLES: &str = include_str!("../assets/swift.css");

/// Grammar patches applied to `Prism.languages.swift` once Prism has loaded.
pub const SWIFT_ENHANCEMENTS: &str = include_str!("../assets/swift.js");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_are_not_empty() {
        for block in [
            BASE_STYLES,
            LINE_HIGHLIGHT_STYLES,
            DIFF_STYLES,
            SWIFT_STYLES,
            SWIFT_ENHANCEMENTS,
        ] {
            assert!(!block.trim().is_empty());
        }
    }

    #[test]
    fn test_swift_enhancements_guard_on_grammar() {
        assert!(SWIFT_ENHANCEMENTS.contains("if (Prism.languages.swift) {"));
        assert!(SWIFT_ENHANCEMENTS.contains(r"/\b(any|macro)\b/"));
        assert!(SWIFT_ENHANCEMENTS.contains("pattern: /<#.+?#>/"));
    }

    #[test]
    fn test_dark_mode_overrides() {
        assert!(LINE_HIGHLIGHT_STYLES.contains("@media (prefers-color-scheme: dark)"));
        assert!(DIFF_STYLES.contains("#6fd574"));
        assert!(SWIFT_STYLES.contains("#87878A"));
    }
}
