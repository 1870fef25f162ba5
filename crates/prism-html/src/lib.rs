//! PrismJS page integration.
//!
//! Given a [`Configuration`] this crate produces the `<head>` markup that
//! loads a Prism theme, plugins and language components from cdnjs, plus an
//! initialization script. [`CodeBlock`] and [`InlineCode`] produce the
//! `<pre>`/`<code>` markup Prism highlights in the browser.
//!
//! Nothing here highlights code: output is markup only, and the same
//! configuration always produces the same markup.
//!
//! # Example
//!
//! ```rust
//! use prism_html::{CodeBlock, Configuration, Head, Language, Plugin, Theme};
//!
//! let config = Configuration::builder()
//!     .languages([Language::Rust, Language::Toml])
//!     .plugin(Plugin::LINE_NUMBERS)
//!     .theme(Theme::Tomorrow)
//!     .build();
//!
//! let head = Head::new(config).render();
//! assert!(head.contains("components/prism-rust.min.js"));
//!
//! let block = CodeBlock::new("fn main() {}")
//!     .language(Language::Rust)
//!     .line_numbers(true)
//!     .highlight_lines([1]);
//! assert_eq!(
//!     block.render(),
//!     r#"<pre class="line-numbers" data-line="1"><code class="language-rust">fn main() {}</code></pre>"#
//! );
//! ```
//!
//! # Features
//!
//! - `toml`: load configurations with `Configuration::from_toml_str`

pub mod assets;
pub mod code;
pub mod config;
pub mod head;
pub mod language;
pub mod node;
pub mod plugin;

#[cfg(feature = "toml")]
mod toml_config;

pub use code::{CodeBlock, CommandLine, InlineCode};
pub use config::{
    ConfigError, Configuration, ConfigurationBuilder, ConfigurationScope, DEFAULT_CDN_VERSION,
    ThemeOption,
};
pub use head::{Head, HeadFeatures, assemble};
pub use language::{Language, ParseLanguageError};
pub use node::{Attribute, Element, Node, html_escape, render_nodes, write_nodes};
pub use plugin::Plugin;

pub use prism_html_theme as theme;
pub use prism_html_theme::{CDN_BASE, CustomTheme, Theme, ThemeBuilder, TokenStyle, TokenType};
