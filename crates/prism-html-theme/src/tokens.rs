//! Token type definitions - single source of truth.
//!
//! Prism tokenizes source code into a small vocabulary of token kinds and
//! wraps every token in `<span class="token <kind>">`. Themes style those
//! spans through selectors of the fixed shape `.token.<kind>`.
//!
//! The raw string of a kind (`attr-name`, `class-name`, ...) is what Prism
//! emits, and it is also the ordering key used by
//! [`ThemeBuilder::build`](crate::ThemeBuilder::build).

use std::fmt;
use std::str::FromStr;

/// A Prism token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Comment,
    Prolog,
    Doctype,
    Cdata,
    Punctuation,
    Namespace,
    Property,
    Tag,
    Boolean,
    Number,
    Constant,
    Symbol,
    Deleted,
    Selector,
    AttrName,
    String,
    Char,
    Builtin,
    Inserted,
    Operator,
    Entity,
    Url,
    Variable,
    Atrule,
    AttrValue,
    Function,
    FunctionVariable,
    Keyword,
    Regex,
    Important,
    Bold,
    Italic,
    ClassName,
}

impl TokenType {
    /// Every token type, in declaration order.
    pub const ALL: &'static [TokenType] = &[
        TokenType::Comment,
        TokenType::Prolog,
        TokenType::Doctype,
        TokenType::Cdata,
        TokenType::Punctuation,
        TokenType::Namespace,
        TokenType::Property,
        TokenType::Tag,
        TokenType::Boolean,
        TokenType::Number,
        TokenType::Constant,
        TokenType::Symbol,
        TokenType::Deleted,
        TokenType::Selector,
        TokenType::AttrName,
        TokenType::String,
        TokenType::Char,
        TokenType::Builtin,
        TokenType::Inserted,
        TokenType::Operator,
        TokenType::Entity,
        TokenType::Url,
        TokenType::Variable,
        TokenType::Atrule,
        TokenType::AttrValue,
        TokenType::Function,
        TokenType::FunctionVariable,
        TokenType::Keyword,
        TokenType::Regex,
        TokenType::Important,
        TokenType::Bold,
        TokenType::Italic,
        TokenType::ClassName,
    ];

    /// The class name Prism puts on tokens of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Comment => "comment",
            TokenType::Prolog => "prolog",
            TokenType::Doctype => "doctype",
            TokenType::Cdata => "cdata",
            TokenType::Punctuation => "punctuation",
            TokenType::Namespace => "namespace",
            TokenType::Property => "property",
            TokenType::Tag => "tag",
            TokenType::Boolean => "boolean",
            TokenType::Number => "number",
            TokenType::Constant => "constant",
            TokenType::Symbol => "symbol",
            TokenType::Deleted => "deleted",
            TokenType::Selector => "selector",
            TokenType::AttrName => "attr-name",
            TokenType::String => "string",
            TokenType::Char => "char",
            TokenType::Builtin => "builtin",
            TokenType::Inserted => "inserted",
            TokenType::Operator => "operator",
            TokenType::Entity => "entity",
            TokenType::Url => "url",
            TokenType::Variable => "variable",
            TokenType::Atrule => "atrule",
            TokenType::AttrValue => "attr-value",
            TokenType::Function => "function",
            TokenType::FunctionVariable => "function-variable",
            TokenType::Keyword => "keyword",
            TokenType::Regex => "regex",
            TokenType::Important => "important",
            TokenType::Bold => "bold",
            TokenType::Italic => "italic",
            TokenType::ClassName => "class-name",
        }
    }

    /// CSS selector matching tokens of this kind, e.g. `.token.attr-name`.
    pub fn selector(self) -> String {
        format!(".token.{}", self.as_str())
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known token type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token type `{0}`")]
pub struct ParseTokenTypeError(pub String);

impl FromStr for TokenType {
    type Err = ParseTokenTypeError;

    /// Parses the raw Prism name. A leading `.token.` is accepted so that
    /// selectors copied out of a stylesheet parse too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix(".token.").unwrap_or(name);
        TokenType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == name)
            .ok_or_else(|| ParseTokenTypeError(s.to_string()))
    }
}
