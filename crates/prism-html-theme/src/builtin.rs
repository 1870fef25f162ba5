//! Pre-built custom themes.

use crate::theme::{CustomTheme, ThemeBuilder, TokenStyle};
use crate::tokens::TokenType;

/// Xcode-like light theme for Swift code.
pub fn swift() -> CustomTheme {
    let mut builder = ThemeBuilder::new();

    builder
        .set_token_style(TokenType::Keyword, TokenStyle::new().color("#AD3DA4"))
        .set_token_style(TokenType::ClassName, TokenStyle::new().color("#4B21B0"))
        .set_token_style(TokenType::Function, TokenStyle::new().color("#4B21B0"))
        .set_token_style(TokenType::Comment, TokenStyle::new().color("#707F8C"))
        .set_token_style(TokenType::String, TokenStyle::new().color("#D22E1B"))
        .set_token_style(TokenType::Number, TokenStyle::new().color("#D22E1B"));

    builder.build("swift")
}
