use ahash::AHashSet;

use crate::ast::{utils::SourceLocation, Node, NodeType};

/// A raw attribute as it appeared in the markup. The name is kept verbatim,
/// including any binding/directive prefix; classification happens in the
/// transform pass. `value` is `None` for bare attributes (`<input disabled>`).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

impl Node<Attribute> {
    pub fn new(name: String, value: Option<String>, loc: SourceLocation) -> Self {
        Self {
            kind: NodeType::Attribute,
            loc,
            inner: Attribute { name, value },
        }
    }
}

/// A directive descriptor, created when the transform pass claims a
/// directive-prefixed attribute. Consumed by directive compilers within the
/// same pass; not mutated afterwards.
#[derive(Clone, PartialEq, Debug)]
pub struct Directive {
    /// directive identifier without its syntactic prefix, e.g. `html`
    pub name: String,
    /// the attribute name as written, e.g. `v-html`
    pub raw_name: String,
    /// bound value expression; may be empty
    pub expr: String,
    pub arg: Option<String>,
    /// a `[computed]` argument
    pub is_dynamic_arg: bool,
    pub modifiers: AHashSet<String>,
}

impl Eq for Directive {}

impl Node<Directive> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        raw_name: String,
        expr: String,
        arg: Option<String>,
        is_dynamic_arg: bool,
        modifiers: AHashSet<String>,
        loc: SourceLocation,
    ) -> Self {
        Self {
            kind: NodeType::Directive,
            loc,
            inner: Directive {
                name,
                raw_name,
                expr,
                arg,
                is_dynamic_arg,
                modifiers,
            },
        }
    }
}
