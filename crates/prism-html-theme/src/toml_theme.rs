//! Runtime TOML parsing for custom themes.
//!
//! The format borrows from Helix theme files:
//!
//! ```toml
//! name = "xcode"
//! base = "code[class*=\"language-\"] { color: #000 }"
//! dark = ".token.keyword { color: #FF79B2 }"
//!
//! [tokens]
//! keyword = "#AD3DA4"
//! comment = { fg = "#707F8C", modifiers = ["italic"] }
//! string = { color = "#D22E1B", background-color = "#fff8f7" }
//! ```
//!
//! A bare string is shorthand for the foreground color. Explicit
//! declarations take precedence over `modifiers`.

use toml::{Table, Value};

use crate::theme::{CustomTheme, ThemeBuilder, ThemeError, TokenStyle};
use crate::tokens::TokenType;

const STYLE_KEYS: &str =
    "one of fg, color, bg, background-color, font-weight, font-style, text-decoration, modifiers";

impl CustomTheme {
    /// Parse a theme document and render it.
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        let table: Table = source.parse()?;
        Self::from_toml_table(&table)
    }

    /// Render a theme from an already parsed table. The table must carry a
    /// `name`.
    pub fn from_toml_table(table: &Table) -> Result<Self, ThemeError> {
        let name = match table.get("name") {
            Some(value) => expect_str(value, "name")?,
            None => return Err(ThemeError::MissingName),
        };
        Ok(ThemeBuilder::from_toml_table(table)?.build(name))
    }
}

impl ThemeBuilder {
    /// Load `base`, `dark` and `[tokens]` from a theme table. Other keys
    /// (including `name`) are left to the caller.
    pub fn from_toml_table(table: &Table) -> Result<Self, ThemeError> {
        let mut builder = ThemeBuilder::new();

        if let Some(base) = table.get("base") {
            builder.set_base_styles(expect_str(base, "base")?);
        }
        if let Some(dark) = table.get("dark") {
            builder.set_dark_mode_styles(expect_str(dark, "dark")?);
        }

        match table.get("tokens") {
            None => {}
            Some(Value::Table(tokens)) => {
                for (name, value) in tokens {
                    let token_type: TokenType = name.parse()?;
                    builder.set_token_style(token_type, parse_style(name, value)?);
                }
            }
            Some(_) => {
                return Err(ThemeError::InvalidField {
                    field: "tokens".to_string(),
                    expected: "a table",
                });
            }
        }

        tracing::debug!(tokens = builder.len(), "loaded theme from TOML");
        Ok(builder)
    }
}

fn parse_style(token: &str, value: &Value) -> Result<TokenStyle, ThemeError> {
    let table = match value {
        Value::String(color) => return Ok(TokenStyle::new().color(color.as_str())),
        Value::Table(table) => table,
        _ => {
            return Err(ThemeError::InvalidField {
                field: format!("tokens.{token}"),
                expected: "a color string or a style table",
            });
        }
    };

    let mut style = TokenStyle::new();
    if let Some(modifiers) = table.get("modifiers") {
        style = apply_modifiers(style, token, modifiers)?;
    }

    for (key, value) in table {
        let field = format!("tokens.{token}.{key}");
        let slot = match key.as_str() {
            "modifiers" => continue,
            "fg" | "color" => &mut style.color,
            "bg" | "background-color" => &mut style.background_color,
            "font-weight" => &mut style.font_weight,
            "font-style" => &mut style.font_style,
            "text-decoration" => &mut style.text_decoration,
            _ => {
                return Err(ThemeError::InvalidField {
                    field,
                    expected: STYLE_KEYS,
                });
            }
        };
        *slot = Some(expect_str(value, &field)?.to_string());
    }

    Ok(style)
}

fn apply_modifiers(
    mut style: TokenStyle,
    token: &str,
    modifiers: &Value,
) -> Result<TokenStyle, ThemeError> {
    let field = format!("tokens.{token}.modifiers");
    let Value::Array(modifiers) = modifiers else {
        return Err(ThemeError::InvalidField {
            field,
            expected: "an array of strings",
        });
    };

    let mut decorations = Vec::new();
    for modifier in modifiers {
        match expect_str(modifier, &field)? {
            "bold" => style.font_weight = Some("bold".to_string()),
            "italic" => style.font_style = Some("italic".to_string()),
            "underlined" => decorations.push("underline"),
            "crossed_out" => decorations.push("line-through"),
            other => return Err(ThemeError::UnknownModifier(other.to_string())),
        }
    }
    if !decorations.is_empty() {
        style.text_decoration = Some(decorations.join(" "));
    }

    Ok(style)
}

fn expect_str<'a>(value: &'a Value, field: &str) -> Result<&'a str, ThemeError> {
    value.as_str().ok_or_else(|| ThemeError::InvalidField {
        field: field.to_string(),
        expected: "a string",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_theme() {
        let theme = CustomTheme::from_toml_str(indoc! {r##"
            name = "xcode"
            base = "pre { margin: 0 }"
            dark = ".token.keyword { color: #FF79B2 }"

            [tokens]
            keyword = "#AD3DA4"
            comment = { fg = "#707F8C", modifiers = ["italic"] }
            string = { color = "#D22E1B", background-color = "#fff8f7", font-weight = "600" }
        "##})
        .unwrap();

        assert_eq!(theme.name(), "xcode");
        assert_eq!(
            theme.styles(),
            indoc! {"
                pre { margin: 0 }
                .token.comment { color: #707F8C; font-style: italic }
                .token.keyword { color: #AD3DA4 }
                .token.string { color: #D22E1B; background-color: #fff8f7; font-weight: 600 }
                @media (prefers-color-scheme: dark) {
                .token.keyword { color: #FF79B2 }
                }
            "}
        );
    }

    #[test]
    fn test_modifiers_combine_decorations() {
        let theme = CustomTheme::from_toml_str(indoc! {r#"
            name = "m"
            [tokens]
            deleted = { modifiers = ["underlined", "crossed_out", "bold"] }
        "#})
        .unwrap();
        assert_eq!(
            theme.styles(),
            "\n.token.deleted { font-weight: bold; text-decoration: underline line-through }\n"
        );
    }

    #[test]
    fn test_explicit_declaration_beats_modifier() {
        let theme = CustomTheme::from_toml_str(indoc! {r#"
            name = "m"
            [tokens]
            bold = { font-weight = "800", modifiers = ["bold"] }
        "#})
        .unwrap();
        assert_eq!(theme.styles(), "\n.token.bold { font-weight: 800 }\n");
    }

    #[test]
    fn test_missing_name() {
        let err = CustomTheme::from_toml_str("[tokens]\nkeyword = \"#fff\"").unwrap_err();
        assert!(matches!(err, ThemeError::MissingName));
    }

    #[test]
    fn test_unknown_token() {
        let err = CustomTheme::from_toml_str("name = \"x\"\n[tokens]\nheading = \"#fff\"")
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown token type `heading`");
    }

    #[test]
    fn test_unknown_style_key() {
        let err = CustomTheme::from_toml_str("name = \"x\"\n[tokens]\nurl = { underline = true }")
            .unwrap_err();
        assert!(matches!(
            err,
            ThemeError::InvalidField { ref field, .. } if field == "tokens.url.underline"
        ));
    }

    #[test]
    fn test_unknown_modifier() {
        let err =
            CustomTheme::from_toml_str("name = \"x\"\n[tokens]\nurl = { modifiers = [\"blink\"] }")
                .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownModifier(ref m) if m == "blink"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = CustomTheme::from_toml_str("name = ").unwrap_err();
        assert!(matches!(err, ThemeError::Toml(_)));
    }
}
