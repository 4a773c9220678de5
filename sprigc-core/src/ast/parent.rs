use crate::ast::{
    template_child::TemplateChildNode,
    utils::{SourceLocation, LOC_STUB},
    Node, NodeType,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Root {
    pub children: Vec<TemplateChildNode>,
    pub source: String,
}

impl Node<Root> {
    pub fn new(children: Vec<TemplateChildNode>, source: String, loc: Option<SourceLocation>) -> Self {
        let loc = loc.unwrap_or(LOC_STUB);
        Self {
            kind: NodeType::Root,
            loc,
            inner: Root { children, source },
        }
    }
}
