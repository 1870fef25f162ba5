//! Runtime TOML loading for [`Configuration`].
//!
//! ```toml
//! languages = ["swift", "js"]
//! plugins = ["line-numbers", { name = "Keep Markup", file = "prism-keep-markup.min.js" }]
//! theme = "okaidia"
//! cdn-version = "1.29.0"
//! auto-highlight = true
//! custom-styles = "pre { border-radius: 8px }"
//! custom-scripts = "console.log('ready');"
//! ```
//!
//! `theme` is a built-in theme name, `"none"`, or an inline table in the
//! custom theme format (`name`, `base`, `dark`, `[theme.tokens]`).

use prism_html_theme::{CustomTheme, Theme};
use toml::{Table, Value};

use crate::config::{ConfigError, Configuration, ConfigurationBuilder};
use crate::language::Language;
use crate::plugin::Plugin;

const TOP_LEVEL_KEYS: &str = "one of languages, plugins, theme, cdn-version, auto-highlight, custom-styles, custom-scripts";

impl Configuration {
    /// Parse a configuration document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let table: Table = source.parse()?;
        Self::from_toml_table(&table)
    }

    /// Build a configuration from an already parsed table. Missing keys keep
    /// their defaults.
    pub fn from_toml_table(table: &Table) -> Result<Self, ConfigError> {
        let mut builder = Configuration::builder();

        for (key, value) in table {
            builder = match key.as_str() {
                "languages" => load_languages(builder, value)?,
                "plugins" => load_plugins(builder, value)?,
                "theme" => load_theme(builder, value)?,
                "cdn-version" => builder.cdn_version(expect_str(value, key)?),
                "auto-highlight" => builder.auto_highlight(expect_bool(value, key)?),
                "custom-styles" => builder.custom_styles(expect_str(value, key)?),
                "custom-scripts" => builder.custom_scripts(expect_str(value, key)?),
                _ => {
                    return Err(ConfigError::InvalidField {
                        field: key.clone(),
                        expected: TOP_LEVEL_KEYS,
                    });
                }
            };
        }

        let config = builder.build();
        tracing::debug!(
            languages = config.languages().len(),
            plugins = config.plugins().len(),
            cdn_version = config.cdn_version(),
            "loaded configuration from TOML"
        );
        Ok(config)
    }
}

fn load_languages(
    builder: ConfigurationBuilder,
    value: &Value,
) -> Result<ConfigurationBuilder, ConfigError> {
    let mut languages = Vec::new();
    for entry in expect_array(value, "languages")? {
        let name = expect_str(entry, "languages")?;
        let language = Language::from_name(name)
            .ok_or_else(|| ConfigError::UnknownLanguage(name.to_string()))?;
        languages.push(language);
    }
    Ok(builder.languages(languages))
}

fn load_plugins(
    builder: ConfigurationBuilder,
    value: &Value,
) -> Result<ConfigurationBuilder, ConfigError> {
    let mut plugins = Vec::new();
    for entry in expect_array(value, "plugins")? {
        let plugin = match entry {
            Value::String(name) => catalog_plugin(name)?,
            Value::Table(table) => table_plugin(table)?,
            _ => {
                return Err(ConfigError::InvalidField {
                    field: "plugins".to_string(),
                    expected: "a plugin name or a plugin table",
                });
            }
        };
        plugins.push(plugin);
    }
    Ok(builder.plugins(plugins))
}

fn catalog_plugin(name: &str) -> Result<Plugin, ConfigError> {
    Plugin::from_name(name).ok_or_else(|| ConfigError::UnknownPlugin(name.to_string()))
}

/// A table with only a `name` refers to the catalog; a `file` describes a
/// plugin of its own.
fn table_plugin(table: &Table) -> Result<Plugin, ConfigError> {
    let name = match table.get("name") {
        Some(value) => expect_str(value, "plugins.name")?,
        None => {
            return Err(ConfigError::InvalidField {
                field: "plugins.name".to_string(),
                expected: "a string",
            });
        }
    };

    let Some(file) = table.get("file") else {
        return catalog_plugin(name);
    };

    let mut plugin = Plugin::new(name.to_string(), expect_str(file, "plugins.file")?.to_string());
    if let Some(css) = table.get("css") {
        plugin = plugin.with_css_file_name(expect_str(css, "plugins.css")?.to_string());
    }
    if let Some(script) = table.get("script") {
        plugin = plugin.with_script_content(expect_str(script, "plugins.script")?.to_string());
    }
    Ok(plugin)
}

fn load_theme(
    builder: ConfigurationBuilder,
    value: &Value,
) -> Result<ConfigurationBuilder, ConfigError> {
    match value {
        Value::String(name) if name.eq_ignore_ascii_case("none") => Ok(builder.no_theme()),
        Value::String(name) => {
            let theme: Theme = name
                .parse()
                .map_err(|_| ConfigError::UnknownTheme(name.clone()))?;
            Ok(builder.theme(theme))
        }
        Value::Table(table) => Ok(builder.theme(CustomTheme::from_toml_table(table)?)),
        _ => Err(ConfigError::InvalidField {
            field: "theme".to_string(),
            expected: "a theme name or a custom theme table",
        }),
    }
}

fn expect_array<'a>(value: &'a Value, field: &str) -> Result<&'a [Value], ConfigError> {
    match value {
        Value::Array(values) => Ok(values),
        _ => Err(ConfigError::InvalidField {
            field: field.to_string(),
            expected: "an array",
        }),
    }
}

fn expect_str<'a>(value: &'a Value, field: &str) -> Result<&'a str, ConfigError> {
    value.as_str().ok_or_else(|| ConfigError::InvalidField {
        field: field.to_string(),
        expected: "a string",
    })
}

fn expect_bool(value: &Value, field: &str) -> Result<bool, ConfigError> {
    value.as_bool().ok_or_else(|| ConfigError::InvalidField {
        field: field.to_string(),
        expected: "a boolean",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeOption;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(
            Configuration::from_toml_str("").unwrap(),
            Configuration::default()
        );
    }

    #[test]
    fn test_full_document() {
        let config = Configuration::from_toml_str(indoc! {r#"
            languages = ["swift", "js", "yml"]
            plugins = [
                "line-numbers",
                "Copy to Clipboard",
                { name = "Keep Markup", file = "prism-keep-markup.min.js", css = "keep.min.css" },
            ]
            theme = "okaidia"
            cdn-version = "1.30.0"
            auto-highlight = false
            custom-styles = "pre { border-radius: 8px }"
            custom-scripts = "console.log('ready');"
        "#})
        .unwrap();

        assert_eq!(
            config.languages(),
            &[Language::Swift, Language::JavaScript, Language::Yaml]
        );
        assert_eq!(config.plugins()[0], Plugin::LINE_NUMBERS);
        assert_eq!(config.plugins()[1], Plugin::COPY_TO_CLIPBOARD);
        assert_eq!(config.plugins()[2].name(), "Keep Markup");
        assert_eq!(config.plugins()[2].css_file_name(), Some("keep.min.css"));
        assert_eq!(config.theme(), &ThemeOption::Builtin(Theme::Okaidia));
        assert_eq!(config.cdn_version(), "1.30.0");
        assert!(!config.auto_highlight());
        assert_eq!(config.custom_styles(), Some("pre { border-radius: 8px }"));
        assert_eq!(config.custom_scripts(), Some("console.log('ready');"));
    }

    #[test]
    fn test_no_theme() {
        let config = Configuration::from_toml_str("theme = \"none\"").unwrap();
        assert_eq!(config.theme(), &ThemeOption::None);
    }

    #[test]
    fn test_custom_theme_table() {
        let config = Configuration::from_toml_str(indoc! {r##"
            [theme]
            name = "xcode"
            [theme.tokens]
            keyword = "#AD3DA4"
        "##})
        .unwrap();
        assert_eq!(
            config.theme(),
            &ThemeOption::Custom(CustomTheme::new(
                "xcode",
                "\n.token.keyword { color: #AD3DA4 }\n"
            ))
        );
    }

    #[test]
    fn test_plugin_table_by_name() {
        let config = Configuration::from_toml_str("plugins = [{ name = \"toolbar\" }]").unwrap();
        assert_eq!(config.plugins(), &[Plugin::TOOLBAR]);
    }

    #[test]
    fn test_unknown_language() {
        let err = Configuration::from_toml_str("languages = [\"cobol\"]").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLanguage(ref name) if name == "cobol"));
    }

    #[test]
    fn test_unknown_plugin() {
        let err = Configuration::from_toml_str("plugins = [\"sparkles\"]").unwrap_err();
        assert_eq!(err.to_string(), "unknown plugin `sparkles`");
    }

    #[test]
    fn test_unknown_theme() {
        let err = Configuration::from_toml_str("theme = \"solarized-dark\"").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTheme(_)));
    }

    #[test]
    fn test_wrong_types() {
        let err = Configuration::from_toml_str("auto-highlight = \"yes\"").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField { ref field, expected: "a boolean" } if field == "auto-highlight"
        ));

        let err = Configuration::from_toml_str("languages = \"swift\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField { expected: "an array", .. }));
    }

    #[test]
    fn test_unknown_key() {
        let err = Configuration::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField { ref field, .. } if field == "colour"));
    }

    #[test]
    fn test_theme_errors_are_wrapped() {
        let err = Configuration::from_toml_str("[theme]\n[theme.tokens]\nkeyword = \"#fff\"")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Theme(prism_html_theme::ThemeError::MissingName)
        ));
    }

    #[test]
    fn test_syntax_error() {
        let err = Configuration::from_toml_str("languages = [").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
