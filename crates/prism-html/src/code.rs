//! Markup for individual code samples.
//!
//! [`CodeBlock`] produces the `<pre><code>` pair Prism and its plugins look
//! for, carrying line numbers, highlighted lines and command-line prompts as
//! `data-*` attributes. [`InlineCode`] produces a single `<code>` element.

use std::fmt;

use crate::language::Language;
use crate::node::{Element, Node};

/// Class used when a sample has no language.
pub const NO_LANGUAGE_CLASS: &str = "language-none";

fn language_class(language: Option<Language>) -> String {
    match language {
        Some(language) => language.class_name(),
        None => NO_LANGUAGE_CLASS.to_string(),
    }
}

fn join_lines(lines: &[u32]) -> String {
    lines
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Prompt annotations for the Command Line plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    user: Option<String>,
    host: Option<String>,
    output_lines: Vec<u32>,
    prompt: Option<String>,
}

impl CommandLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Lines (1-based) that are program output rather than commands.
    pub fn output_lines(mut self, lines: impl IntoIterator<Item = u32>) -> Self {
        self.output_lines.extend(lines);
        self
    }

    /// Replaces the `user@host` prompt with a fixed string.
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }
}

/// A block of code rendered as `<pre><code>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    language: Option<Language>,
    line_numbers: bool,
    highlighted_lines: Vec<u32>,
    start: i64,
    title: Option<String>,
    command_line: Option<CommandLine>,
    code: String,
}

impl CodeBlock {
    /// A plain block: no language, no line numbers, counting from 1.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            language: None,
            line_numbers: false,
            highlighted_lines: Vec::new(),
            start: 1,
            title: None,
            command_line: None,
            code: code.into(),
        }
    }

    pub fn swift(code: impl Into<String>) -> Self {
        Self::new(code).language(Language::Swift).line_numbers(true)
    }

    pub fn javascript(code: impl Into<String>) -> Self {
        Self::new(code)
            .language(Language::JavaScript)
            .line_numbers(true)
    }

    pub fn html(code: impl Into<String>) -> Self {
        Self::new(code).language(Language::Html).line_numbers(true)
    }

    pub fn css(code: impl Into<String>) -> Self {
        Self::new(code).language(Language::Css).line_numbers(true)
    }

    pub fn json(code: impl Into<String>) -> Self {
        Self::new(code).language(Language::Json)
    }

    pub fn diff(code: impl Into<String>) -> Self {
        Self::new(code).language(Language::Diff)
    }

    /// A shell session annotated for the Command Line plugin.
    pub fn bash(command_line: CommandLine, code: impl Into<String>) -> Self {
        Self::new(code)
            .language(Language::Bash)
            .command_line(command_line)
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    /// Mark lines (1-based) for the Line Highlight plugin. Repeated calls
    /// accumulate; lines are emitted in the order given, repeats included.
    pub fn highlight_lines(mut self, lines: impl IntoIterator<Item = u32>) -> Self {
        self.highlighted_lines.extend(lines);
        self
    }

    /// Number shown on the first line. Zero and negative numbers are allowed.
    pub fn start(mut self, line: i64) -> Self {
        self.start = line;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn command_line(mut self, command_line: CommandLine) -> Self {
        self.command_line = Some(command_line);
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Class for the `<code>` element.
    pub fn code_class(&self) -> String {
        language_class(self.language)
    }

    /// Class for the `<pre>` element, if any.
    pub fn pre_class(&self) -> Option<&'static str> {
        self.line_numbers.then_some("line-numbers")
    }

    /// The `data-*` attributes of the `<pre>` element, in emission order.
    pub fn data_attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();

        if !self.highlighted_lines.is_empty() {
            attrs.push(("data-line", join_lines(&self.highlighted_lines)));
        }
        if self.start != 1 {
            attrs.push(("data-start", self.start.to_string()));
        }

        if let Some(cmd) = &self.command_line {
            if let Some(user) = &cmd.user {
                attrs.push(("data-user", user.clone()));
            }
            if let Some(host) = &cmd.host {
                attrs.push(("data-host", host.clone()));
            }
            if !cmd.output_lines.is_empty() {
                attrs.push(("data-output", join_lines(&cmd.output_lines)));
            }
            if let Some(prompt) = &cmd.prompt {
                attrs.push(("data-prompt", prompt.clone()));
            }
        }

        attrs
    }

    /// The data attributes as `key="value"` pairs separated by spaces.
    ///
    /// Values are emitted as given, without escaping. Use
    /// [`CodeBlock::to_node`] when they may contain markup characters.
    pub fn attribute_string(&self) -> String {
        self.data_attributes()
            .iter()
            .map(|(name, value)| format!("{name}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_node(&self) -> Node {
        let code = Element::new("code")
            .attr("class", self.code_class())
            .child(Node::text(self.code.as_str()));

        let mut pre = Element::new("pre");
        if let Some(class) = self.pre_class() {
            pre = pre.attr("class", class);
        }
        for (name, value) in self.data_attributes() {
            pre = pre.attr(name, value);
        }
        let pre = pre.child(code);

        match &self.title {
            Some(title) => Element::new("div")
                .attr("class", "code-block-wrapper")
                .child(
                    Element::new("div")
                        .attr("class", "code-block-title")
                        .child(Node::text(title.as_str())),
                )
                .child(pre)
                .into(),
            None => pre.into(),
        }
    }

    pub fn render(&self) -> String {
        self.to_node().render()
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// A code fragment inside running text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineCode {
    language: Option<Language>,
    code: String,
}

impl InlineCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            language: None,
            code: code.into(),
        }
    }

    pub fn swift(code: impl Into<String>) -> Self {
        Self::new(code).language(Language::Swift)
    }

    pub fn javascript(code: impl Into<String>) -> Self {
        Self::new(code).language(Language::JavaScript)
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn class_name(&self) -> String {
        language_class(self.language)
    }

    pub fn to_node(&self) -> Node {
        Element::new("code")
            .attr("class", self.class_name())
            .child(Node::text(self.code.as_str()))
            .into()
    }

    pub fn render(&self) -> String {
        self.to_node().render()
    }
}

impl fmt::Display for InlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_block() {
        assert_eq!(
            CodeBlock::new("x").render(),
            r#"<pre><code class="language-none">x</code></pre>"#
        );
    }

    #[test]
    fn test_line_numbers_and_start() {
        let block = CodeBlock::swift("let x = 1").start(10);
        assert_eq!(block.pre_class(), Some("line-numbers"));
        assert_eq!(block.attribute_string(), r#"data-start="10""#);
        assert_eq!(
            block.render(),
            r#"<pre class="line-numbers" data-start="10"><code class="language-swift">let x = 1</code></pre>"#
        );
    }

    #[test]
    fn test_highlighted_lines_keep_caller_order() {
        let block = CodeBlock::new("a").highlight_lines([3, 1, 3]);
        assert_eq!(block.attribute_string(), r#"data-line="3,1,3""#);

        let block = CodeBlock::new("a").highlight_lines([5, 2]).highlight_lines([1]);
        assert_eq!(block.attribute_string(), r#"data-line="5,2,1""#);
    }

    #[test]
    fn test_output_lines_keep_caller_order() {
        let block = CodeBlock::new("a").command_line(CommandLine::new().output_lines([4, 2]));
        assert_eq!(block.attribute_string(), r#"data-output="4,2""#);
    }

    #[test]
    fn test_zero_and_negative_start() {
        assert_eq!(CodeBlock::new("a").start(0).attribute_string(), r#"data-start="0""#);
        assert_eq!(CodeBlock::new("a").start(-5).attribute_string(), r#"data-start="-5""#);
    }

    #[test]
    fn test_start_of_one_is_omitted() {
        assert!(CodeBlock::new("a").start(1).data_attributes().is_empty());
    }

    #[test]
    fn test_command_line_attributes() {
        let block = CodeBlock::new("ls")
            .highlight_lines([1])
            .start(3)
            .command_line(
                CommandLine::new()
                    .user("root")
                    .host("box")
                    .output_lines([2])
                    .prompt("#"),
            );
        assert_eq!(
            block.attribute_string(),
            r##"data-line="1" data-start="3" data-user="root" data-host="box" data-output="2" data-prompt="#""##
        );
    }

    #[test]
    fn test_empty_command_line_adds_nothing() {
        let block = CodeBlock::bash(CommandLine::new(), "echo hi");
        assert_eq!(block.attribute_string(), "");
        assert_eq!(block.code_class(), "language-bash");
        assert_eq!(block.pre_class(), None);
    }

    #[test]
    fn test_attribute_string_is_literal() {
        let block = CodeBlock::new("a").command_line(CommandLine::new().user("o'neil").prompt("&>"));
        assert_eq!(block.attribute_string(), r#"data-user="o'neil" data-prompt="&>""#);
        assert_eq!(
            block.render(),
            r#"<pre data-user="o&#39;neil" data-prompt="&amp;&gt;"><code class="language-none">a</code></pre>"#
        );
    }

    #[test]
    fn test_title_wraps_block() {
        let block = CodeBlock::css("a { }").title("style.css");
        assert_eq!(
            block.render(),
            concat!(
                r#"<div class="code-block-wrapper">"#,
                r#"<div class="code-block-title">style.css</div>"#,
                r#"<pre class="line-numbers"><code class="language-css">a { }</code></pre>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_code_is_escaped() {
        let block = CodeBlock::html("<p>Tom & Jerry</p>");
        assert_eq!(
            block.render(),
            r#"<pre class="line-numbers"><code class="language-html">&lt;p&gt;Tom &amp; Jerry&lt;/p&gt;</code></pre>"#
        );
        assert_eq!(block.code(), "<p>Tom & Jerry</p>");
    }

    #[test]
    fn test_convenience_defaults() {
        assert_eq!(CodeBlock::json("{}").pre_class(), None);
        assert_eq!(CodeBlock::diff("+a").pre_class(), None);
        assert_eq!(CodeBlock::diff("+a").code_class(), "language-diff");
        assert_eq!(CodeBlock::javascript("1").pre_class(), Some("line-numbers"));
        assert_eq!(CodeBlock::html("1").pre_class(), Some("line-numbers"));
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(
            InlineCode::swift("let a: [Int]").render(),
            r#"<code class="language-swift">let a: [Int]</code>"#
        );
        assert_eq!(
            InlineCode::new("a < b").render(),
            r#"<code class="language-none">a &lt; b</code>"#
        );
        assert_eq!(
            InlineCode::javascript("x").to_string(),
            r#"<code class="language-javascript">x</code>"#
        );
    }
}
