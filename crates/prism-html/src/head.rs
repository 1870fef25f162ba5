//! Head assembly: theme, plugin stylesheets, extra styles, scripts.
//!
//! Output order is fixed so that the same configuration always yields the
//! same markup:
//!
//! 1. theme (`<link>`, `<style>`, or a `<!-- No theme -->` text node)
//! 2. plugin stylesheets, in plugin order
//! 3. one `<style>` with the bundled styles and any custom CSS
//! 4. the Prism core script
//! 5. plugin scripts, in plugin order
//! 6. language components, in language order
//! 7. the initialization script

use std::fmt;

use prism_html_theme::CDN_BASE;

use crate::assets;
use crate::config::{Configuration, ConfigurationScope, ThemeOption};
use crate::language::Language;
use crate::node::{Element, Node, render_nodes};

/// Optional blocks the head needs, derived from a configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadFeatures {
    /// A plugin named `Line Highlight` is configured.
    pub line_highlight: bool,
    /// `diff` is among the languages.
    pub diff: bool,
    /// `swift` is among the languages; adds token styles and grammar patches.
    pub swift_enhancements: bool,
}

impl HeadFeatures {
    /// Work out which optional blocks a configuration needs.
    pub fn detect(config: &Configuration) -> Self {
        Self {
            line_highlight: config.has_plugin("Line Highlight"),
            diff: config.has_language(Language::Diff),
            swift_enhancements: config.has_language(Language::Swift),
        }
    }
}

/// Assemble the head nodes for a configuration.
pub fn assemble(config: &Configuration) -> Vec<Node> {
    let features = HeadFeatures::detect(config);
    let version = config.cdn_version();
    let mut nodes = Vec::with_capacity(4 + config.plugins().len() * 2 + config.languages().len());

    nodes.push(theme_node(config.theme(), version));

    for plugin in config.plugins() {
        if let Some(css_url) = plugin.css_url(version) {
            nodes.push(stylesheet(css_url));
        }
    }

    nodes.push(
        Element::new("style")
            .child(Node::raw(style_sheet(config, &features)))
            .into(),
    );

    nodes.push(deferred_script(format!("{CDN_BASE}/{version}/prism.min.js")));

    for plugin in config.plugins() {
        nodes.push(deferred_script(plugin.script_url(version)));
    }

    for language in config.languages() {
        nodes.push(deferred_script(format!(
            "{CDN_BASE}/{version}/components/{}",
            language.cdn_component_path()
        )));
    }

    nodes.push(
        Element::new("script")
            .child(Node::raw(init_script(config, &features)))
            .into(),
    );

    tracing::debug!(
        nodes = nodes.len(),
        line_highlight = features.line_highlight,
        diff = features.diff,
        swift = features.swift_enhancements,
        "assembled prism head"
    );
    nodes
}

fn theme_node(theme: &ThemeOption, version: &str) -> Node {
    match theme {
        ThemeOption::Builtin(theme) => stylesheet(theme.css_url(version)),
        ThemeOption::Custom(theme) => Element::new("style")
            .child(Node::raw(theme.styles()))
            .into(),
        ThemeOption::None => Node::text("<!-- No theme -->"),
    }
}

fn stylesheet(href: String) -> Node {
    Element::new("link")
        .attr("rel", "stylesheet")
        .attr("href", href)
        .into()
}

fn deferred_script(src: String) -> Node {
    Element::new("script")
        .attr("src", src)
        .boolean_attr("defer")
        .into()
}

/// Body of the generated `<style>` element. Blocks are separated by a
/// newline; custom CSS goes last, verbatim.
pub fn style_sheet(config: &Configuration, features: &HeadFeatures) -> String {
    let mut blocks = vec![assets::BASE_STYLES.trim_end()];
    if features.line_highlight {
        blocks.push(assets::LINE_HIGHLIGHT_STYLES.trim_end());
    }
    if features.diff {
        blocks.push(assets::DIFF_STYLES.trim_end());
    }
    if features.swift_enhancements {
        blocks.push(assets::SWIFT_STYLES.trim_end());
    }
    if let Some(custom) = config.custom_styles() {
        blocks.push(custom);
    }
    blocks.join("\n")
}

/// Body of the initialization `<script>`.
///
/// Everything runs after `DOMContentLoaded` and only if Prism loaded.
pub fn init_script(config: &Configuration, features: &HeadFeatures) -> String {
    let mut script = String::from(
        "document.addEventListener(\"DOMContentLoaded\", function () {\n  if (typeof Prism !== \"undefined\") {\n",
    );
    if config.auto_highlight() {
        script.push_str("    Prism.highlightAll();\n");
    }
    if features.swift_enhancements {
        script.push_str(assets::SWIFT_ENHANCEMENTS.trim_end());
        script.push('\n');
    }
    if let Some(custom) = config.custom_scripts() {
        script.push_str(custom);
        script.push('\n');
    }
    script.push_str("  }\n});");
    script
}

/// The head markup for one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    config: Configuration,
}

impl Head {
    /// Wrap a configuration; nodes are assembled on demand.
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    pub fn minimal() -> Self {
        Self::new(Configuration::minimal())
    }

    pub fn standard() -> Self {
        Self::new(Configuration::standard())
    }

    pub fn full() -> Self {
        Self::new(Configuration::full())
    }

    pub fn swift() -> Self {
        Self::new(Configuration::swift())
    }

    pub fn mobile() -> Self {
        Self::new(Configuration::mobile())
    }

    pub fn for_scope(scope: ConfigurationScope) -> Self {
        Self::new(Configuration::for_scope(scope))
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn features(&self) -> HeadFeatures {
        HeadFeatures::detect(&self.config)
    }

    pub fn nodes(&self) -> Vec<Node> {
        assemble(&self.config)
    }

    pub fn render(&self) -> String {
        render_nodes(&self.nodes())
    }
}

impl Default for Head {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl From<Configuration> for Head {
    fn from(config: Configuration) -> Self {
        Self::new(config)
    }
}

impl fmt::Display for Head {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
