//! Built-in themes, token styles and the custom theme builder.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::CDN_BASE;
use crate::tokens::{ParseTokenTypeError, TokenType};

/// A theme shipped with Prism itself, loaded as a stylesheet from the CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// The stock `prism.css` theme.
    #[default]
    Default,
    Dark,
    Funky,
    Okaidia,
    Twilight,
    Coy,
    SolarizedLight,
    Tomorrow,
}

impl Theme {
    pub const ALL: &'static [Theme] = &[
        Theme::Default,
        Theme::Dark,
        Theme::Funky,
        Theme::Okaidia,
        Theme::Twilight,
        Theme::Coy,
        Theme::SolarizedLight,
        Theme::Tomorrow,
    ];

    /// File stem of the theme stylesheet, e.g. `prism-okaidia`.
    pub fn file_stem(self) -> &'static str {
        match self {
            Theme::Default => "prism",
            Theme::Dark => "prism-dark",
            Theme::Funky => "prism-funky",
            Theme::Okaidia => "prism-okaidia",
            Theme::Twilight => "prism-twilight",
            Theme::Coy => "prism-coy",
            Theme::SolarizedLight => "prism-solarizedlight",
            Theme::Tomorrow => "prism-tomorrow",
        }
    }

    /// Short name without the `prism-` prefix, e.g. `okaidia`.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Default => "default",
            other => other.file_stem().trim_start_matches("prism-"),
        }
    }

    pub fn css_file_name(self) -> String {
        format!("{}.min.css", self.file_stem())
    }

    /// Stylesheet URL for the given Prism release.
    pub fn css_url(self, cdn_version: &str) -> String {
        // The default theme lives directly under themes/ as prism.min.css;
        // keep this path spelled out even though the stem would produce it.
        if self == Theme::Default {
            format!("{CDN_BASE}/{cdn_version}/themes/prism.min.css")
        } else {
            format!("{CDN_BASE}/{cdn_version}/themes/{}", self.css_file_name())
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no built-in theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    /// Accepts both the short name (`okaidia`) and the file stem
    /// (`prism-okaidia`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Theme::ALL
            .iter()
            .copied()
            .find(|t| t.name() == name || t.file_stem() == name)
            .ok_or_else(|| ParseThemeError(s.to_string()))
    }
}

/// A theme defined inline as CSS text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTheme {
    name: String,
    styles: String,
}

impl CustomTheme {
    pub fn new(name: impl Into<String>, styles: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            styles: styles.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stylesheet, emitted verbatim into a `<style>` element.
    pub fn styles(&self) -> &str {
        &self.styles
    }
}

/// Visual style for one token type.
///
/// Values are passed through to CSS untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStyle {
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub font_weight: Option<String>,
    pub font_style: Option<String>,
    pub text_decoration: Option<String>,
}

impl TokenStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    pub fn font_style(mut self, style: impl Into<String>) -> Self {
        self.font_style = Some(style.into());
        self
    }

    pub fn text_decoration(mut self, decoration: impl Into<String>) -> Self {
        self.text_decoration = Some(decoration.into());
        self
    }

    /// Check if this style has no declarations.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.background_color.is_none()
            && self.font_weight.is_none()
            && self.font_style.is_none()
            && self.text_decoration.is_none()
    }

    /// Render as a CSS declaration list: `color: #fff; font-weight: bold`.
    ///
    /// Absent fields are skipped and there is no trailing separator.
    pub fn css(&self) -> String {
        let declarations = [
            ("color", &self.color),
            ("background-color", &self.background_color),
            ("font-weight", &self.font_weight),
            ("font-style", &self.font_style),
            ("text-decoration", &self.text_decoration),
        ];

        declarations
            .iter()
            .filter_map(|(property, value)| {
                value.as_ref().map(|v| format!("{property}: {v}"))
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Accumulates token styles and free-form CSS, then renders a [`CustomTheme`].
///
/// Rendering is deterministic: token rules are emitted sorted by the raw
/// token name, whatever order they were set in.
#[derive(Debug, Clone, Default)]
pub struct ThemeBuilder {
    token_styles: HashMap<TokenType, TokenStyle>,
    base_styles: String,
    dark_mode_styles: String,
}

impl ThemeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style for a token type, replacing any earlier one.
    pub fn set_token_style(&mut self, token_type: TokenType, style: TokenStyle) -> &mut Self {
        self.token_styles.insert(token_type, style);
        self
    }

    /// Replace the CSS emitted before the token rules.
    pub fn set_base_styles(&mut self, styles: impl Into<String>) -> &mut Self {
        self.base_styles = styles.into();
        self
    }

    /// Replace the CSS wrapped in a `prefers-color-scheme: dark` media query.
    pub fn set_dark_mode_styles(&mut self, styles: impl Into<String>) -> &mut Self {
        self.dark_mode_styles = styles.into();
        self
    }

    pub fn token_style(&self, token_type: TokenType) -> Option<&TokenStyle> {
        self.token_styles.get(&token_type)
    }

    pub fn base_styles(&self) -> &str {
        &self.base_styles
    }

    pub fn dark_mode_styles(&self) -> &str {
        &self.dark_mode_styles
    }

    /// Number of token types with a style.
    pub fn len(&self) -> usize {
        self.token_styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.token_styles.is_empty()
    }

    /// Render the accumulated state into a named theme.
    pub fn build(&self, name: impl Into<String>) -> CustomTheme {
        let name = name.into();
        tracing::trace!(theme = %name, tokens = self.token_styles.len(), "building custom theme");

        let mut css = String::with_capacity(self.base_styles.len() + 64 * self.token_styles.len());
        css.push_str(&self.base_styles);
        css.push('\n');

        // Sort by the raw token name, not declaration order
        let mut sorted: Vec<_> = self.token_styles.iter().collect();
        sorted.sort_by_key(|(token_type, _)| token_type.as_str());

        for (token_type, style) in sorted {
            css.push_str(&format!("{} {{ {} }}\n", token_type.selector(), style.css()));
        }

        if !self.dark_mode_styles.is_empty() {
            css.push_str("@media (prefers-color-scheme: dark) {\n");
            css.push_str(&self.dark_mode_styles);
            css.push_str("\n}\n");
        }

        CustomTheme { name, styles: css }
    }
}

/// Errors that can occur while loading a theme definition.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The document is not valid TOML.
    #[cfg(feature = "toml")]
    #[error("invalid theme TOML: {0}")]
    Toml(#[from] toml::de::Error),
    /// A `[tokens]` key names no Prism token type.
    #[error(transparent)]
    UnknownToken(#[from] ParseTokenTypeError),
    /// A field has the wrong shape.
    #[error("invalid value for `{field}`: expected {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },
    /// The theme has no `name` and none was supplied.
    #[error("theme has no name")]
    MissingName,
    /// A `modifiers` entry is not one of the supported modifiers.
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
}
