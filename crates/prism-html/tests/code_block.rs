use indoc::indoc;
use pretty_assertions::assert_eq;
use prism_html::{CodeBlock, CommandLine, InlineCode, Language, Node};

#[test]
fn javascript_block_with_highlighted_lines() {
    let block = CodeBlock::new("a\nb\nc")
        .language(Language::JavaScript)
        .line_numbers(true)
        .highlight_lines([2, 3]);

    assert_eq!(block.code_class(), "language-javascript");
    assert_eq!(block.pre_class(), Some("line-numbers"));
    assert_eq!(block.attribute_string(), r#"data-line="2,3""#);

    let node = block.to_node();
    let pre = node.as_element().unwrap();
    assert_eq!(pre.tag, "pre");
    assert_eq!(pre.attribute("class"), Some("line-numbers"));
    let code = pre.children[0].as_element().unwrap();
    assert_eq!(code.attribute("class"), Some("language-javascript"));
    assert_eq!(pre.children[0].text_content(), "a\nb\nc");
}

#[test]
fn bash_block_with_command_line() {
    let block = CodeBlock::bash(
        CommandLine::new()
            .user("admin")
            .host("server")
            .output_lines([2, 3]),
        "ls\nfile-a\nfile-b",
    );
    assert_eq!(
        block.attribute_string(),
        r#"data-user="admin" data-host="server" data-output="2,3""#
    );
}

#[test]
fn no_optional_attributes_by_default() {
    let block = CodeBlock::new("x").language(Language::Python);
    assert!(block.data_attributes().is_empty());
    assert_eq!(block.attribute_string(), "");
    assert_eq!(
        block.render(),
        r#"<pre><code class="language-python">x</code></pre>"#
    );
}

#[test]
fn titled_block_renders_wrapper() {
    let code = indoc! {r#"
        struct Point {
            x: i32,
        }
    "#};
    let block = CodeBlock::new(code)
        .language(Language::Rust)
        .title("point.rs")
        .highlight_lines([2]);

    let node = block.to_node();
    let wrapper = node.as_element().unwrap();
    assert_eq!(wrapper.tag, "div");
    assert_eq!(wrapper.attribute("class"), Some("code-block-wrapper"));
    assert_eq!(wrapper.children.len(), 2);
    assert_eq!(wrapper.children[0].text_content(), "point.rs");
    assert_eq!(wrapper.children[1].tag(), Some("pre"));

    assert_eq!(
        block.render(),
        concat!(
            r#"<div class="code-block-wrapper"><div class="code-block-title">point.rs</div>"#,
            r#"<pre data-line="2"><code class="language-rust">struct Point {"#,
            "\n    x: i32,\n}\n",
            "</code></pre></div>"
        )
    );
}

#[test]
fn title_text_is_escaped() {
    let html = CodeBlock::new("").title("<b>").render();
    assert!(html.contains(r#"<div class="code-block-title">&lt;b&gt;</div>"#));
}

#[test]
fn code_node_holds_unescaped_text() {
    let block = CodeBlock::new("a && b");
    let node = block.to_node();
    let code = &node.as_element().unwrap().children[0];
    assert_eq!(code.as_element().unwrap().children, vec![Node::text("a && b")]);
    assert!(block.render().contains("a &amp;&amp; b"));
}

#[test]
fn inline_code_variants() {
    assert_eq!(
        InlineCode::new("print()").language(Language::Python).render(),
        r#"<code class="language-python">print()</code>"#
    );
    assert_eq!(InlineCode::swift("x").class_name(), "language-swift");
    assert_eq!(InlineCode::new("x").class_name(), "language-none");
}
