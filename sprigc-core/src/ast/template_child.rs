use crate::ast::{el::Element, utils::SourceLocation, Node, NodeType};

/// ElementNode | TextNode | CommentNode
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateChildNode {
    Element(Node<Element>),
    Text(Node<Text>),
    Comment(Node<Comment>),
}

/// Raw text run. Interpolation markers are kept verbatim; splitting them
/// into expressions is a codegen-time concern.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Text {
    pub content: String,
}

impl Node<Text> {
    pub fn new(content: String, loc: SourceLocation) -> Self {
        Self {
            kind: NodeType::Text,
            loc,
            inner: Text { content },
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Comment {
    pub content: String,
}

impl Node<Comment> {
    pub fn new(content: String, loc: SourceLocation) -> Self {
        Self {
            kind: NodeType::Comment,
            loc,
            inner: Comment { content },
        }
    }
}

impl TemplateChildNode {
    pub fn new_el(node: Node<Element>) -> Self {
        TemplateChildNode::Element(node)
    }
    pub fn new_text(node: Node<Text>) -> Self {
        TemplateChildNode::Text(node)
    }
    pub fn new_comment(node: Node<Comment>) -> Self {
        TemplateChildNode::Comment(node)
    }
}
