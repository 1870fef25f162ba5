//! Page-level highlighting configuration and its presets.

use prism_html_theme::{CustomTheme, Theme, ThemeError, builtin};

use crate::language::Language;
use crate::plugin::Plugin;

/// Prism release used when none is configured.
pub const DEFAULT_CDN_VERSION: &str = "1.29.0";

/// Which stylesheet, if any, the head should carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeOption {
    /// A stylesheet shipped with Prism, linked from the CDN.
    Builtin(Theme),
    /// Inline CSS emitted in a `<style>` element.
    Custom(CustomTheme),
    /// No theme at all.
    None,
}

impl Default for ThemeOption {
    fn default() -> Self {
        ThemeOption::Builtin(Theme::Default)
    }
}

impl From<Theme> for ThemeOption {
    fn from(theme: Theme) -> Self {
        ThemeOption::Builtin(theme)
    }
}

impl From<CustomTheme> for ThemeOption {
    fn from(theme: CustomTheme) -> Self {
        ThemeOption::Custom(theme)
    }
}

/// Everything the head assembler needs to know about a page.
///
/// Languages and plugins keep their insertion order and are emitted in that
/// order. Duplicates are kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    languages: Vec<Language>,
    plugins: Vec<Plugin>,
    theme: ThemeOption,
    cdn_version: String,
    auto_highlight: bool,
    custom_styles: Option<String>,
    custom_scripts: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            plugins: Vec::new(),
            theme: ThemeOption::default(),
            cdn_version: DEFAULT_CDN_VERSION.to_string(),
            auto_highlight: true,
            custom_styles: None,
            custom_scripts: None,
        }
    }
}

impl Configuration {
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    pub fn theme(&self) -> &ThemeOption {
        &self.theme
    }

    pub fn cdn_version(&self) -> &str {
        &self.cdn_version
    }

    pub fn auto_highlight(&self) -> bool {
        self.auto_highlight
    }

    pub fn custom_styles(&self) -> Option<&str> {
        self.custom_styles.as_deref()
    }

    pub fn custom_scripts(&self) -> Option<&str> {
        self.custom_scripts.as_deref()
    }

    pub fn has_language(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    /// Whether a plugin with this display name is configured.
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }

    /// A builder pre-filled with this configuration.
    pub fn to_builder(&self) -> ConfigurationBuilder {
        ConfigurationBuilder {
            config: self.clone(),
        }
    }

    /// JavaScript, CSS and HTML with line numbers and the stock theme.
    pub fn minimal() -> Self {
        Self::builder()
            .languages([Language::JavaScript, Language::Css, Language::Html])
            .plugins([Plugin::LINE_NUMBERS, Plugin::LINE_HIGHLIGHT])
            .theme(Theme::Default)
            .build()
    }

    pub fn standard() -> Self {
        Self::builder()
            .languages(Language::WEB.iter().copied())
            .languages(Language::DATA.iter().copied())
            .plugins([
                Plugin::LINE_NUMBERS,
                Plugin::LINE_HIGHLIGHT,
                Plugin::COPY_TO_CLIPBOARD,
            ])
            .theme(Theme::Okaidia)
            .build()
    }

    pub fn full() -> Self {
        Self::builder()
            .languages(Language::WEB.iter().copied())
            .languages(Language::SCRIPTING.iter().copied())
            .languages(Language::SYSTEM.iter().copied())
            .languages(Language::DATA.iter().copied())
            .plugins([
                Plugin::LINE_NUMBERS,
                Plugin::LINE_HIGHLIGHT,
                Plugin::COPY_TO_CLIPBOARD,
                Plugin::SHOW_INVISIBLES,
                Plugin::TOOLBAR,
                Plugin::MATCH_BRACES,
            ])
            .theme(Theme::Okaidia)
            .build()
    }

    /// Swift first, plus web and data formats, with the Xcode-like theme.
    pub fn swift() -> Self {
        Self::builder()
            .language(Language::Swift)
            .languages(Language::WEB.iter().copied())
            .languages(Language::DATA.iter().copied())
            .plugins([
                Plugin::LINE_NUMBERS,
                Plugin::LINE_HIGHLIGHT,
                Plugin::COPY_TO_CLIPBOARD,
                Plugin::TOOLBAR,
            ])
            .theme(builtin::swift())
            .build()
    }

    pub fn mobile() -> Self {
        Self::builder()
            .languages(Language::MOBILE.iter().copied())
            .languages(Language::DATA.iter().copied())
            .plugins([
                Plugin::LINE_NUMBERS,
                Plugin::COPY_TO_CLIPBOARD,
                Plugin::TOOLBAR,
            ])
            .theme(Theme::Tomorrow)
            .build()
    }

    pub fn for_scope(scope: ConfigurationScope) -> Self {
        match scope {
            ConfigurationScope::Live | ConfigurationScope::Preview => Self::standard(),
            ConfigurationScope::Test => Self::minimal(),
        }
    }
}

/// Where a page is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigurationScope {
    Live,
    Test,
    Preview,
}

/// Builder for [`Configuration`].
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    config: Configuration,
}

impl ConfigurationBuilder {
    pub fn language(mut self, language: Language) -> Self {
        self.config.languages.push(language);
        self
    }

    /// Append languages, keeping their order.
    pub fn languages(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.config.languages.extend(languages);
        self
    }

    pub fn plugin(mut self, plugin: Plugin) -> Self {
        self.config.plugins.push(plugin);
        self
    }

    pub fn plugins(mut self, plugins: impl IntoIterator<Item = Plugin>) -> Self {
        self.config.plugins.extend(plugins);
        self
    }

    pub fn theme(mut self, theme: impl Into<ThemeOption>) -> Self {
        self.config.theme = theme.into();
        self
    }

    pub fn no_theme(mut self) -> Self {
        self.config.theme = ThemeOption::None;
        self
    }

    pub fn cdn_version(mut self, version: impl Into<String>) -> Self {
        self.config.cdn_version = version.into();
        self
    }

    pub fn auto_highlight(mut self, enabled: bool) -> Self {
        self.config.auto_highlight = enabled;
        self
    }

    /// Extra CSS appended to the generated `<style>` element.
    pub fn custom_styles(mut self, css: impl Into<String>) -> Self {
        self.config.custom_styles = Some(css.into());
        self
    }

    /// Extra JavaScript run inside the initialization handler.
    pub fn custom_scripts(mut self, js: impl Into<String>) -> Self {
        self.config.custom_scripts = Some(js.into());
        self
    }

    pub fn build(self) -> Configuration {
        self.config
    }
}

/// Errors produced while loading a configuration document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[cfg(feature = "toml")]
    #[error("invalid configuration TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown language `{0}`")]
    UnknownLanguage(String),
    #[error("unknown plugin `{0}`")]
    UnknownPlugin(String),
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
    #[error("invalid value for `{field}`: expected {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },
    #[error(transparent)]
    Theme(#[from] ThemeError),
}
