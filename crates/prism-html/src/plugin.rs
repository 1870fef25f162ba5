//! Prism plugins and their CDN locations.
//!
//! Plugins live under `plugins/<slug>/` where the slug is the display name
//! lower-cased with spaces turned into hyphens (`Line Numbers` →
//! `line-numbers`).

use std::borrow::Cow;

use prism_html_theme::CDN_BASE;

/// A Prism plugin: one script and an optional stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugin {
    name: Cow<'static, str>,
    file_name: Cow<'static, str>,
    css_file_name: Option<Cow<'static, str>>,
    script_content: Option<Cow<'static, str>>,
}

impl Plugin {
    pub const LINE_HIGHLIGHT: Plugin = Plugin::builtin(
        "Line Highlight",
        "prism-line-highlight.min.js",
        Some("prism-line-highlight.min.css"),
    );
    pub const LINE_NUMBERS: Plugin = Plugin::builtin(
        "Line Numbers",
        "prism-line-numbers.min.js",
        Some("prism-line-numbers.min.css"),
    );
    pub const COPY_TO_CLIPBOARD: Plugin =
        Plugin::builtin("Copy to Clipboard", "prism-copy-to-clipboard.min.js", None);
    pub const SHOW_INVISIBLES: Plugin = Plugin::builtin(
        "Show Invisibles",
        "prism-show-invisibles.min.js",
        Some("prism-show-invisibles.min.css"),
    );
    pub const AUTOLOADER: Plugin = Plugin::builtin("Autoloader", "prism-autoloader.min.js", None);
    pub const TOOLBAR: Plugin = Plugin::builtin(
        "Toolbar",
        "prism-toolbar.min.js",
        Some("prism-toolbar.min.css"),
    );
    pub const MATCH_BRACES: Plugin = Plugin::builtin(
        "Match Braces",
        "prism-match-braces.min.js",
        Some("prism-match-braces.min.css"),
    );
    pub const HIGHLIGHT_KEYWORDS: Plugin = Plugin::builtin(
        "Highlight Keywords",
        "prism-highlight-keywords.min.js",
        None,
    );
    pub const INLINE_COLOR: Plugin = Plugin::builtin(
        "Inline Color",
        "prism-inline-color.min.js",
        Some("prism-inline-color.min.css"),
    );
    pub const PREVIEWERS: Plugin = Plugin::builtin(
        "Previewers",
        "prism-previewers.min.js",
        Some("prism-previewers.min.css"),
    );
    pub const COMMAND_LINE: Plugin = Plugin::builtin(
        "Command Line",
        "prism-command-line.min.js",
        Some("prism-command-line.min.css"),
    );
    pub const UNESCAPED_MARKUP: Plugin = Plugin::builtin(
        "Unescaped Markup",
        "prism-unescaped-markup.min.js",
        Some("prism-unescaped-markup.min.css"),
    );
    pub const NORMALIZE_WHITESPACE: Plugin = Plugin::builtin(
        "Normalize Whitespace",
        "prism-normalize-whitespace.min.js",
        None,
    );
    pub const DATA_URI_HIGHLIGHT: Plugin = Plugin::builtin(
        "Data-URI Highlight",
        "prism-data-uri-highlight.min.js",
        None,
    );
    pub const DIFF_HIGHLIGHT: Plugin = Plugin::builtin(
        "Diff Highlight",
        "prism-diff-highlight.min.js",
        Some("prism-diff-highlight.min.css"),
    );
    pub const JSONP_HIGHLIGHT: Plugin =
        Plugin::builtin("JSONP Highlight", "prism-jsonp-highlight.min.js", None);
    pub const WPD: Plugin = Plugin::builtin(
        "WebPlatform Docs",
        "prism-wpd.min.js",
        Some("prism-wpd.min.css"),
    );
    pub const CUSTOM_CLASS: Plugin =
        Plugin::builtin("Custom Class", "prism-custom-class.min.js", None);
    pub const FILE_HIGHLIGHT: Plugin =
        Plugin::builtin("File Highlight", "prism-file-highlight.min.js", None);
    pub const SHOW_LANGUAGE: Plugin =
        Plugin::builtin("Show Language", "prism-show-language.min.js", None);
    pub const TREEVIEW: Plugin = Plugin::builtin(
        "Treeview",
        "prism-treeview.min.js",
        Some("prism-treeview.min.css"),
    );

    /// Every plugin in the catalog.
    pub const ALL: &'static [Plugin] = &[
        Plugin::LINE_HIGHLIGHT,
        Plugin::LINE_NUMBERS,
        Plugin::COPY_TO_CLIPBOARD,
        Plugin::SHOW_INVISIBLES,
        Plugin::AUTOLOADER,
        Plugin::TOOLBAR,
        Plugin::MATCH_BRACES,
        Plugin::HIGHLIGHT_KEYWORDS,
        Plugin::INLINE_COLOR,
        Plugin::PREVIEWERS,
        Plugin::COMMAND_LINE,
        Plugin::UNESCAPED_MARKUP,
        Plugin::NORMALIZE_WHITESPACE,
        Plugin::DATA_URI_HIGHLIGHT,
        Plugin::DIFF_HIGHLIGHT,
        Plugin::JSONP_HIGHLIGHT,
        Plugin::WPD,
        Plugin::CUSTOM_CLASS,
        Plugin::FILE_HIGHLIGHT,
        Plugin::SHOW_LANGUAGE,
        Plugin::TREEVIEW,
    ];

    const fn builtin(
        name: &'static str,
        file_name: &'static str,
        css_file_name: Option<&'static str>,
    ) -> Plugin {
        Plugin {
            name: Cow::Borrowed(name),
            file_name: Cow::Borrowed(file_name),
            css_file_name: match css_file_name {
                Some(css) => Some(Cow::Borrowed(css)),
                None => None,
            },
            script_content: None,
        }
    }

    /// Describe a plugin that is not in the catalog.
    pub fn new(name: impl Into<Cow<'static, str>>, file_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
            css_file_name: None,
            script_content: None,
        }
    }

    pub fn with_css_file_name(mut self, css_file_name: impl Into<Cow<'static, str>>) -> Self {
        self.css_file_name = Some(css_file_name.into());
        self
    }

    /// Attach free-form script content to the plugin description.
    pub fn with_script_content(mut self, content: impl Into<Cow<'static, str>>) -> Self {
        self.script_content = Some(content.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn css_file_name(&self) -> Option<&str> {
        self.css_file_name.as_deref()
    }

    pub fn script_content(&self) -> Option<&str> {
        self.script_content.as_deref()
    }

    /// Directory name under `plugins/`, e.g. `copy-to-clipboard`.
    pub fn slug(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }

    pub fn script_url(&self, cdn_version: &str) -> String {
        format!(
            "{CDN_BASE}/{cdn_version}/plugins/{}/{}",
            self.slug(),
            self.file_name
        )
    }

    /// Stylesheet URL, or `None` for script-only plugins.
    pub fn css_url(&self, cdn_version: &str) -> Option<String> {
        let css_file_name = self.css_file_name.as_deref()?;
        Some(format!(
            "{CDN_BASE}/{cdn_version}/plugins/{}/{css_file_name}",
            self.slug()
        ))
    }

    /// Look up a catalog plugin by slug or display name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Plugin> {
        let slug = name.trim().to_lowercase().replace(' ', "-");
        Plugin::ALL.iter().find(|p| p.slug() == slug).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_numbers_urls() {
        let plugin = Plugin::LINE_NUMBERS;
        assert_eq!(
            plugin.script_url("1.29.0"),
            "https://cdnjs.cloudflare.com/ajax/libs/prism/1.29.0/plugins/line-numbers/prism-line-numbers.min.js"
        );
        assert_eq!(
            plugin.css_url("1.29.0").as_deref(),
            Some(
                "https://cdnjs.cloudflare.com/ajax/libs/prism/1.29.0/plugins/line-numbers/prism-line-numbers.min.css"
            )
        );
    }

    #[test]
    fn test_script_only_plugin_has_no_css() {
        assert_eq!(Plugin::COPY_TO_CLIPBOARD.css_url("1.29.0"), None);
        assert_eq!(
            Plugin::COPY_TO_CLIPBOARD.script_url("1.29.0"),
            "https://cdnjs.cloudflare.com/ajax/libs/prism/1.29.0/plugins/copy-to-clipboard/prism-copy-to-clipboard.min.js"
        );
    }

    #[test]
    fn test_slug_keeps_punctuation() {
        assert_eq!(Plugin::DATA_URI_HIGHLIGHT.slug(), "data-uri-highlight");
        assert_eq!(Plugin::JSONP_HIGHLIGHT.slug(), "jsonp-highlight");
        assert_eq!(Plugin::WPD.slug(), "webplatform-docs");
    }

    #[test]
    fn test_custom_plugin() {
        let plugin = Plugin::new("Keep Markup", "prism-keep-markup.min.js")
            .with_script_content("Prism.plugins.KeepMarkup = true;");
        assert_eq!(
            plugin.script_url("1.30.0"),
            "https://cdnjs.cloudflare.com/ajax/libs/prism/1.30.0/plugins/keep-markup/prism-keep-markup.min.js"
        );
        assert_eq!(plugin.css_url("1.30.0"), None);
        assert_eq!(plugin.script_content(), Some("Prism.plugins.KeepMarkup = true;"));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Plugin::from_name("line-numbers"), Some(Plugin::LINE_NUMBERS));
        assert_eq!(Plugin::from_name("Copy to Clipboard"), Some(Plugin::COPY_TO_CLIPBOARD));
        assert_eq!(Plugin::from_name("nope"), None);
    }
}
