//! Theme support for PrismJS pages.
//!
//! This crate provides:
//! - Token type definitions (the closed list of Prism token categories)
//! - Token styles and a deterministic custom-theme CSS builder
//! - Built-in Prism theme identifiers and their CDN stylesheet URLs
//! - Pre-built custom themes (see [`builtin`])
//! - Theme parsing from TOML files (feature `toml`)

pub mod builtin;
pub mod theme;
pub mod tokens;

#[cfg(feature = "toml")]
mod toml_theme;

pub use theme::{CustomTheme, ParseThemeError, Theme, ThemeBuilder, ThemeError, TokenStyle};
pub use tokens::{ParseTokenTypeError, TokenType};

/// Root of every PrismJS asset on the cdnjs mirror.
pub const CDN_BASE: &str = "https://cdnjs.cloudflare.com/ajax/libs/prism";
