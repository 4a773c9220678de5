use crate::{
    ast::{attr::Directive, el::Element},
    helpers::add_prop,
};

/// `v-text`: binds the element's text content.
pub fn text(el: &mut Element, dir: &Directive) {
    if !dir.expr.trim().is_empty() {
        add_prop(el, "textContent", &format!("_s({})", dir.expr));
    }
}
