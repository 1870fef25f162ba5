//! Minimal HTML node model and renderer.
//!
//! The assemblers in this crate produce [`Node`] trees instead of strings so
//! that callers can hand them to their own templating layer. [`Node::render`]
//! is a small reference sink: it is the only place where text gets escaped.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &["link", "meta", "br", "hr", "img", "input"];

/// One attribute on an element. A `None` value renders as a bare boolean
/// attribute such as `defer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: Cow<'static, str>,
    pub value: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn boolean(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// An HTML element with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    pub fn boolean_attr(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.attributes.push(Attribute::boolean(name));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Look up an attribute value by name. Boolean attributes yield `Some("")`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_deref().unwrap_or(""))
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag)
    }
}

/// A node in the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on render.
    Text(String),
    /// Pre-formed content emitted verbatim (style and script bodies).
    Raw(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn raw(raw: impl Into<String>) -> Self {
        Node::Raw(raw.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Tag name for elements, `None` for text and raw nodes.
    pub fn tag(&self) -> Option<&'static str> {
        self.as_element().map(|e| e.tag)
    }

    /// Concatenated text and raw content of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Node::Text(text) | Node::Raw(text) => out.push_str(text),
        }
    }

    /// Render this node to an HTML string.
    pub fn render(&self) -> String {
        let mut html = String::new();
        self.render_into(&mut html);
        html
    }

    fn render_into(&self, html: &mut String) {
        match self {
            Node::Text(text) => html.push_str(&html_escape(text)),
            Node::Raw(raw) => html.push_str(raw),
            Node::Element(element) => {
                html.push('<');
                html.push_str(element.tag);
                for attribute in &element.attributes {
                    html.push(' ');
                    html.push_str(&attribute.name);
                    if let Some(value) = &attribute.value {
                        html.push_str("=\"");
                        html.push_str(&html_escape(value));
                        html.push('"');
                    }
                }
                html.push('>');

                if element.is_void() {
                    return;
                }

                for child in &element.children {
                    child.render_into(html);
                }
                html.push_str("</");
                html.push_str(element.tag);
                html.push('>');
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Render a sequence of sibling nodes, one after another.
pub fn render_nodes(nodes: &[Node]) -> String {
    nodes.iter().map(Node::render).collect()
}

/// Write nodes as HTML to a writer, one node at a time.
///
/// Each node is rendered to a string before it is written, so this saves
/// building the whole document in memory, not the per-node work.
pub fn write_nodes<W: Write>(w: &mut W, nodes: &[Node]) -> io::Result<()> {
    for node in nodes {
        w.write_all(node.render().as_bytes())?;
    }
    Ok(())
}

/// Escape HTML special characters.
pub fn html_escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
