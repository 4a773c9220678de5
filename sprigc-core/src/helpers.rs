use crate::{
    ast::{
        attr::Directive,
        el::{Element, Handler, Prop},
        Node,
    },
    text_parser::parse_filters,
    utils::json_stringify,
};

/// Destructive single-owner read of a raw attribute. The attribute is removed
/// from the element's remaining attribute sequence, so a second extraction of
/// the same name returns `None`. Absence is a normal result, never an error.
pub fn get_and_remove_attr(el: &mut Element, name: &str) -> Option<String> {
    let i = el.attrs.iter().position(|attr| attr.inner.name == name)?;
    let attr = el.attrs.remove(i);
    // bare attributes (`<input disabled>`) read as the empty string
    Some(attr.inner.value.unwrap_or_default())
}

/// Look for the dynamically-bound form of an attribute (`:name` /
/// `v-bind:name`) first; if absent and `allow_static_fallback` is set, fall
/// back to the static literal form returned as a quoted string expression.
/// All forms are destructive reads.
pub fn get_binding_attr(
    el: &mut Element,
    name: &str,
    allow_static_fallback: bool,
) -> Option<String> {
    let dynamic = get_and_remove_attr(el, &format!(":{name}"))
        .or_else(|| get_and_remove_attr(el, &format!("v-bind:{name}")));
    match dynamic {
        Some(expr) => Some(parse_filters(&expr)),
        None if allow_static_fallback => get_and_remove_attr(el, name).map(|v| json_stringify(&v)),
        None => None,
    }
}

/// Add an element property binding. An earlier binding of the same name is
/// replaced so the generated data never carries duplicate keys.
pub fn add_prop(el: &mut Element, name: &str, value: &str) {
    upsert(&mut el.props, name, value);
}

/// Add a bound or literal attribute destined for the vnode `attrs` data.
pub fn add_bound_attr(el: &mut Element, name: &str, value: &str) {
    upsert(&mut el.bound_attrs, name, value);
}

pub fn add_handler(el: &mut Element, name: String, value: String, modifiers: Vec<String>) {
    el.handlers.push(Handler {
        name,
        value,
        modifiers,
    });
}

/// Attach a directive descriptor for the runtime dispatcher.
pub fn add_directive(el: &mut Element, dir: Node<Directive>) {
    el.directives.push(dir);
}

fn upsert(list: &mut Vec<Prop>, name: &str, value: &str) {
    if let Some(prop) = list.iter_mut().find(|p| p.name == name) {
        prop.value = value.to_string();
    } else {
        list.push(Prop {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
}
