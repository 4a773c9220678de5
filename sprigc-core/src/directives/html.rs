use crate::{
    ast::{attr::Directive, el::Element},
    helpers::add_prop,
};

/// `v-html`: a non-empty bound value produces exactly one property binding
/// that sets the element's raw markup content to the stringified expression.
/// An empty bound value is valid and contributes nothing.
pub fn html(el: &mut Element, dir: &Directive) {
    if !dir.expr.trim().is_empty() {
        add_prop(el, "innerHTML", &format!("_s({})", dir.expr));
    }
}
