use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;
use serde_json::Value;

use crate::directives::DirectiveState;

/// Shared handle to a live rendered element. The patch engine and directive
/// hooks both hold clones of the same handle; interior mutability keeps the
/// dispatch single-threaded and synchronous.
pub type ElementHandle = Rc<RefCell<Element>>;

/// A live rendered element. Carries its mutable runtime properties and the
/// per-directive lifecycle state the dispatcher tracks for it.
#[derive(Debug, Default)]
pub struct Element {
    pub tag: String,
    pub props: AHashMap<String, Value>,
    /// Whether the element is currently present under a parent.
    pub in_tree: bool,
    pub(crate) directive_states: AHashMap<String, DirectiveState>,
}

impl Element {
    pub fn new(tag: &str) -> ElementHandle {
        Rc::new(RefCell::new(Element {
            tag: tag.to_string(),
            ..Default::default()
        }))
    }

    pub fn set_prop(&mut self, name: &str, value: Value) {
        self.props.insert(name.to_string(), value);
    }

    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }
}
