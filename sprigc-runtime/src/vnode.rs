use ahash::{AHashMap, AHashSet};
use serde_json::Value;

use crate::element::ElementHandle;

/// Lightweight descriptor of a renderable element, handed to the dispatcher
/// by the patch engine at creation, patch and destroy points.
#[derive(Debug, Clone, Default)]
pub struct VNode {
    pub tag: String,
    pub data: VNodeData,
    pub children: Vec<VNode>,
    pub text: Option<String>,
    pub key: Option<String>,
    /// Live element this vnode is currently rendered as, if any.
    pub elm: Option<ElementHandle>,
}

#[derive(Debug, Clone, Default)]
pub struct VNodeData {
    /// Runtime directive descriptors, in template declaration order.
    pub directives: Vec<DirectiveSpec>,
    pub props: AHashMap<String, Value>,
}

/// One evaluated directive occurrence on a vnode; the rendered counterpart
/// of a compiled `directives:[...]` entry.
#[derive(Debug, Clone)]
pub struct DirectiveSpec {
    pub name: String,
    /// Full attribute form as written, e.g. `v-pin:top.once`. Distinct specs
    /// on one element always differ in raw name.
    pub raw_name: String,
    pub value: Value,
    pub arg: Option<String>,
    pub modifiers: AHashSet<String>,
}

impl VNode {
    pub fn element(tag: &str) -> Self {
        VNode {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn text(content: &str) -> Self {
        VNode {
            text: Some(content.to_string()),
            ..Default::default()
        }
    }
}

impl DirectiveSpec {
    pub fn new(name: &str, value: Value) -> Self {
        DirectiveSpec {
            name: name.to_string(),
            raw_name: format!("v-{}", name),
            value,
            arg: None,
            modifiers: AHashSet::new(),
        }
    }
}
