use std::cell::Cell;

use sprigc_core::{
    ast::template_child::TemplateChildNode,
    errors::CompilerError,
    options::{CompilerOptions, WhiteSpaceStrategy},
    parse::Parser,
};

fn el(node: &TemplateChildNode) -> &sprigc_core::ast::Node<sprigc_core::ast::el::Element> {
    match node {
        TemplateChildNode::Element(el) => el,
        other => panic!("expected element, got {:?}", other),
    }
}

#[test]
fn nested_elements_and_text() {
    let options = CompilerOptions::default();
    let root = Parser::base_parse("<div><span>hi</span></div>", &options);

    assert_eq!(root.inner.children.len(), 1);
    let div = el(&root.inner.children[0]);
    assert_eq!(div.inner.tag, "div");
    let span = el(&div.inner.children[0]);
    assert_eq!(span.inner.tag, "span");
    match &span.inner.children[0] {
        TemplateChildNode::Text(text) => assert_eq!(text.inner.content, "hi"),
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn attributes_quoted_unquoted_and_bare() {
    let options = CompilerOptions::default();
    let root = Parser::base_parse(r#"<input id="a" type=text disabled>"#, &options);

    let input = el(&root.inner.children[0]);
    let attrs: Vec<(&str, Option<&str>)> = input
        .inner
        .attrs
        .iter()
        .map(|a| (a.inner.name.as_str(), a.inner.value.as_deref()))
        .collect();
    assert_eq!(
        attrs,
        vec![
            ("id", Some("a")),
            ("type", Some("text")),
            ("disabled", None),
        ]
    );
}

#[test]
fn binding_and_directive_names_are_kept_verbatim() {
    let options = CompilerOptions::default();
    let root = Parser::base_parse(r#"<div :id="d" @click="go" v-pin.once="1"></div>"#, &options);

    let div = el(&root.inner.children[0]);
    let names: Vec<&str> = div
        .inner
        .attrs
        .iter()
        .map(|a| a.inner.name.as_str())
        .collect();
    assert_eq!(names, vec![":id", "@click", "v-pin.once"]);
}

#[test]
fn void_and_self_closing_tags_take_no_children() {
    let options = CompilerOptions::default();
    let root = Parser::base_parse(r#"<div><br><img src="x"/>tail</div>"#, &options);

    let div = el(&root.inner.children[0]);
    assert_eq!(div.inner.children.len(), 3);
    assert_eq!(el(&div.inner.children[0]).inner.tag, "br");
    let img = el(&div.inner.children[1]);
    assert_eq!(img.inner.tag, "img");
    assert!(img.inner.is_self_closing);
    assert!(img.inner.children.is_empty());
}

#[test]
fn comments_are_dropped_unless_requested() {
    let options = CompilerOptions::default();
    let root = Parser::base_parse("<div><!-- note --></div>", &options);
    assert!(el(&root.inner.children[0]).inner.children.is_empty());

    let options = CompilerOptions {
        comments: true,
        ..Default::default()
    };
    let root = Parser::base_parse("<div><!-- note --></div>", &options);
    let div = el(&root.inner.children[0]);
    match &div.inner.children[0] {
        TemplateChildNode::Comment(comment) => assert_eq!(comment.inner.content, " note "),
        other => panic!("expected comment, got {:?}", other),
    }
}

#[test]
fn whitespace_between_elements_is_condensed() {
    let options = CompilerOptions::default();
    let root = Parser::base_parse("<div>\n  <span>a</span>\n  <span>b</span>\n</div>", &options);

    let div = el(&root.inner.children[0]);
    // newline-bearing whitespace runs between elements are removed
    assert_eq!(div.inner.children.len(), 2);
    assert_eq!(el(&div.inner.children[0]).inner.tag, "span");
    assert_eq!(el(&div.inner.children[1]).inner.tag, "span");
}

#[test]
fn inline_whitespace_squashes_to_one_space() {
    let options = CompilerOptions::default();
    let root = Parser::base_parse("<div><b>a</b>   <b>b</b></div>", &options);

    let div = el(&root.inner.children[0]);
    assert_eq!(div.inner.children.len(), 3);
    match &div.inner.children[1] {
        TemplateChildNode::Text(text) => assert_eq!(text.inner.content, " "),
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn preserve_strategy_keeps_whitespace() {
    let options = CompilerOptions {
        whitespace: WhiteSpaceStrategy::Preserve,
        ..Default::default()
    };
    let root = Parser::base_parse("<div>a\n  b</div>", &options);
    let div = el(&root.inner.children[0]);
    match &div.inner.children[0] {
        TemplateChildNode::Text(text) => assert_eq!(text.inner.content, "a\n  b"),
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn pre_tag_keeps_inner_whitespace() {
    let options = CompilerOptions::default();
    let root = Parser::base_parse("<pre>  a\n  b  </pre>", &options);
    let pre = el(&root.inner.children[0]);
    match &pre.inner.children[0] {
        TemplateChildNode::Text(text) => assert_eq!(text.inner.content, "  a\n  b  "),
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn stray_angle_bracket_merges_into_text() {
    let options = CompilerOptions {
        error_handling: sprigc_core::options::ErrorHandlingOptions {
            on_error: |_| {},
            ..Default::default()
        },
        ..Default::default()
    };
    let root = Parser::base_parse("<div>a < b</div>", &options);
    let div = el(&root.inner.children[0]);
    assert_eq!(div.inner.children.len(), 1);
    match &div.inner.children[0] {
        TemplateChildNode::Text(text) => assert_eq!(text.inner.content, "a < b"),
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn text_starting_with_a_multibyte_character() {
    let options = CompilerOptions::default();
    let root = Parser::base_parse("<div>é hello</div>", &options);
    let div = el(&root.inner.children[0]);
    match &div.inner.children[0] {
        TemplateChildNode::Text(text) => assert_eq!(text.inner.content, "é hello"),
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn multibyte_text_around_a_stray_angle_bracket() {
    let options = CompilerOptions {
        error_handling: sprigc_core::options::ErrorHandlingOptions {
            on_error: |_| {},
            ..Default::default()
        },
        ..Default::default()
    };
    let root = Parser::base_parse("<div>日本 < ça</div>", &options);
    let div = el(&root.inner.children[0]);
    match &div.inner.children[0] {
        TemplateChildNode::Text(text) => assert_eq!(text.inner.content, "日本 < ça"),
        other => panic!("expected text, got {:?}", other),
    }
}

thread_local! {
    static ERRORS: Cell<usize> = const { Cell::new(0) };
}

fn count_error(_err: CompilerError) {
    ERRORS.with(|e| e.set(e.get() + 1));
}

#[test]
fn duplicate_attribute_is_reported() {
    ERRORS.with(|e| e.set(0));
    let options = CompilerOptions {
        error_handling: sprigc_core::options::ErrorHandlingOptions {
            on_error: count_error,
            ..Default::default()
        },
        ..Default::default()
    };
    let root = Parser::base_parse(r#"<div id="a" id="b"></div>"#, &options);
    assert_eq!(ERRORS.with(|e| e.get()), 1);
    // both occurrences still parse
    assert_eq!(el(&root.inner.children[0]).inner.attrs.len(), 2);
}

#[test]
fn abutting_attributes_are_reported() {
    ERRORS.with(|e| e.set(0));
    let options = CompilerOptions {
        error_handling: sprigc_core::options::ErrorHandlingOptions {
            on_error: count_error,
            ..Default::default()
        },
        ..Default::default()
    };
    let root = Parser::base_parse(r#"<div id="a"class="b"></div>"#, &options);
    assert_eq!(ERRORS.with(|e| e.get()), 1);
    // both attributes still parse
    assert_eq!(el(&root.inner.children[0]).inner.attrs.len(), 2);
}

#[test]
fn missing_end_tag_is_reported() {
    ERRORS.with(|e| e.set(0));
    let options = CompilerOptions {
        error_handling: sprigc_core::options::ErrorHandlingOptions {
            on_error: count_error,
            ..Default::default()
        },
        ..Default::default()
    };
    let root = Parser::base_parse("<div><span>a</div>", &options);
    assert_eq!(ERRORS.with(|e| e.get()), 1);
    assert_eq!(el(&root.inner.children[0]).inner.tag, "div");
}

#[test]
fn unclosed_comment_is_reported() {
    ERRORS.with(|e| e.set(0));
    let options = CompilerOptions {
        comments: true,
        error_handling: sprigc_core::options::ErrorHandlingOptions {
            on_error: count_error,
            ..Default::default()
        },
        ..Default::default()
    };
    let root = Parser::base_parse("<!-- never closed", &options);
    assert_eq!(ERRORS.with(|e| e.get()), 1);
    match &root.inner.children[0] {
        TemplateChildNode::Comment(comment) => {
            assert_eq!(comment.inner.content, " never closed");
        }
        other => panic!("expected comment, got {:?}", other),
    }
}
