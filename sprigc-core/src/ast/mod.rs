pub mod attr;
pub mod el;
pub mod parent;
pub mod template_child;
pub mod utils;

use std::fmt::Debug;

use crate::ast::utils::SourceLocation;

#[derive(Clone, PartialEq, Debug)]
pub struct Node<N: Clone + Debug + PartialEq + Eq> {
    pub kind: NodeType,
    pub loc: SourceLocation,
    pub inner: N,
}

impl<N: Clone + Debug + PartialEq + Eq> Eq for Node<N> {}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NodeType {
    Root,
    Element,
    Text,
    Comment,
    Attribute,
    Directive,
}
