//! Prism language components.
//!
//! Each language maps to a component script under `components/` on the CDN
//! and to the `language-<id>` class Prism looks for on `<code>` elements.

use std::fmt;
use std::str::FromStr;

/// A language Prism can load a grammar component for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Bash,
    C,
    Cpp,
    CSharp,
    Css,
    Csv,
    Dart,
    Diff,
    Docker,
    Elixir,
    Go,
    Graphql,
    Haskell,
    Html,
    Java,
    JavaScript,
    Json,
    Jsx,
    Kotlin,
    Lua,
    Markdown,
    ObjectiveC,
    Perl,
    Php,
    PowerShell,
    Python,
    R,
    Ruby,
    Rust,
    Scala,
    Scss,
    Sql,
    Swift,
    Toml,
    Tsx,
    TypeScript,
    Xml,
    Yaml,
    Zig,
}

impl Language {
    /// Every language in the catalog.
    pub const ALL: &'static [Language] = &[
        Language::Bash,
        Language::C,
        Language::Cpp,
        Language::CSharp,
        Language::Css,
        Language::Csv,
        Language::Dart,
        Language::Diff,
        Language::Docker,
        Language::Elixir,
        Language::Go,
        Language::Graphql,
        Language::Haskell,
        Language::Html,
        Language::Java,
        Language::JavaScript,
        Language::Json,
        Language::Jsx,
        Language::Kotlin,
        Language::Lua,
        Language::Markdown,
        Language::ObjectiveC,
        Language::Perl,
        Language::Php,
        Language::PowerShell,
        Language::Python,
        Language::R,
        Language::Ruby,
        Language::Rust,
        Language::Scala,
        Language::Scss,
        Language::Sql,
        Language::Swift,
        Language::Toml,
        Language::Tsx,
        Language::TypeScript,
        Language::Xml,
        Language::Yaml,
        Language::Zig,
    ];

    /// Markup, styling and browser scripting.
    pub const WEB: &'static [Language] = &[
        Language::Html,
        Language::Css,
        Language::JavaScript,
        Language::TypeScript,
        Language::Jsx,
        Language::Tsx,
    ];

    pub const MOBILE: &'static [Language] = &[
        Language::Swift,
        Language::Kotlin,
        Language::ObjectiveC,
        Language::Java,
        Language::Dart,
    ];

    pub const SYSTEM: &'static [Language] = &[
        Language::C,
        Language::Cpp,
        Language::Rust,
        Language::Go,
        Language::Zig,
    ];

    pub const SCRIPTING: &'static [Language] = &[
        Language::Python,
        Language::Ruby,
        Language::Bash,
        Language::Php,
        Language::Perl,
        Language::Lua,
    ];

    /// Serialization and configuration formats.
    pub const DATA: &'static [Language] = &[
        Language::Json,
        Language::Yaml,
        Language::Xml,
        Language::Csv,
        Language::Toml,
    ];

    /// The Prism component identifier.
    pub fn id(self) -> &'static str {
        match self {
            Language::Bash => "bash",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Css => "css",
            Language::Csv => "csv",
            Language::Dart => "dart",
            Language::Diff => "diff",
            Language::Docker => "docker",
            Language::Elixir => "elixir",
            Language::Go => "go",
            Language::Graphql => "graphql",
            Language::Haskell => "haskell",
            Language::Html => "html",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::Json => "json",
            Language::Jsx => "jsx",
            Language::Kotlin => "kotlin",
            Language::Lua => "lua",
            Language::Markdown => "markdown",
            Language::ObjectiveC => "objectivec",
            Language::Perl => "perl",
            Language::Php => "php",
            Language::PowerShell => "powershell",
            Language::Python => "python",
            Language::R => "r",
            Language::Ruby => "ruby",
            Language::Rust => "rust",
            Language::Scala => "scala",
            Language::Scss => "scss",
            Language::Sql => "sql",
            Language::Swift => "swift",
            Language::Toml => "toml",
            Language::Tsx => "tsx",
            Language::TypeScript => "typescript",
            Language::Xml => "xml",
            Language::Yaml => "yaml",
            Language::Zig => "zig",
        }
    }

    /// Alternative names accepted by [`Language::from_name`].
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Language::Bash => &["sh", "shell", "zsh"],
            Language::C => &["h"],
            Language::Cpp => &["c++", "cxx", "hpp"],
            Language::CSharp => &["cs", "c#", "c-sharp"],
            Language::Diff => &["patch"],
            Language::Docker => &["dockerfile"],
            Language::Elixir => &["ex", "exs"],
            Language::Go => &["golang"],
            Language::Graphql => &["gql"],
            Language::Haskell => &["hs"],
            Language::Html => &["htm"],
            Language::JavaScript => &["js", "mjs", "cjs"],
            Language::Json => &["jsonc"],
            Language::Kotlin => &["kt", "kts"],
            Language::Markdown => &["md"],
            Language::ObjectiveC => &["objc", "objective-c", "mm"],
            Language::Perl => &["pl", "pm"],
            Language::PowerShell => &["ps1", "pwsh"],
            Language::Python => &["py", "py3", "python3"],
            Language::Ruby => &["rb"],
            Language::Rust => &["rs"],
            Language::Scss => &["sass"],
            Language::Sql => &["mysql", "postgres", "postgresql", "sqlite"],
            Language::TypeScript => &["ts", "mts", "cts"],
            Language::Xml => &["xsl", "xslt", "svg"],
            Language::Yaml => &["yml"],
            _ => &[],
        }
    }

    /// File name of the grammar component, e.g. `prism-swift.min.js`.
    pub fn cdn_component_path(self) -> String {
        format!("prism-{}.min.js", self.id())
    }

    /// Class Prism expects on the `<code>` element, e.g. `language-swift`.
    pub fn class_name(self) -> String {
        format!("language-{}", self.id())
    }

    /// Resolve an identifier or common alias, case-insensitively.
    pub fn from_name(name: &str) -> Option<Language> {
        let name = name.trim().to_ascii_lowercase();
        let name = name.strip_prefix("language-").unwrap_or(&name);
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.id() == name || l.aliases().iter().any(|alias| *alias == name))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when a string names no known language.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language `{0}`")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_name(s).ok_or_else(|| ParseLanguageError(s.to_string()))
    }
}
