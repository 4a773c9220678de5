use crate::ast::{
    attr::{Attribute, Directive},
    template_child::TemplateChildNode,
    utils::SourceLocation,
    Node, NodeType,
};

/// A generated property binding destined for the vnode creation data.
/// `value` is always an expression string (literals are pre-quoted).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Prop {
    pub name: String,
    pub value: String,
}

/// A generated event handler binding (`@click`/`v-on:click`).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Handler {
    pub name: String,
    pub value: String,
    pub modifiers: Vec<String>,
}

/// One parsed markup element.
///
/// `attrs` is the ordered raw attribute sequence; extraction is destructive
/// and single-owner, so once a transform module has claimed an attribute no
/// later module can see it. Everything below `attrs` is produced by the
/// transform pass.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Element {
    pub tag: String,
    pub is_self_closing: bool,
    /// remaining raw attributes, consumed as they are processed
    pub attrs: Vec<Node<Attribute>>,

    // semantic annotations set by transform modules
    pub static_class: Option<String>,
    pub class_binding: Option<String>,
    pub static_style: Option<String>,
    pub style_binding: Option<String>,

    /// bound or literal attributes destined for the vnode `attrs` data
    pub bound_attrs: Vec<Prop>,
    /// element property bindings destined for the vnode `props` data
    pub props: Vec<Prop>,
    pub handlers: Vec<Handler>,
    /// directives with no compile-time handler, passed through to the runtime
    pub directives: Vec<Node<Directive>>,

    pub children: Vec<TemplateChildNode>,
    /// transform-pass latch; a second pass over the same element is a no-op
    pub processed: bool,
}

impl Node<Element> {
    pub fn new_el(
        tag: String,
        attrs: Vec<Node<Attribute>>,
        is_self_closing: bool,
        loc: SourceLocation,
    ) -> Self {
        Self {
            kind: NodeType::Element,
            loc,
            inner: Element {
                tag,
                is_self_closing,
                attrs,
                static_class: None,
                class_binding: None,
                static_style: None,
                style_binding: None,
                bound_attrs: vec![],
                props: vec![],
                handlers: vec![],
                directives: vec![],
                children: vec![],
                processed: false,
            },
        }
    }
}
