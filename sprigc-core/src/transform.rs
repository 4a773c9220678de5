use ahash::AHashSet;

use crate::{
    ast::{
        attr::Directive, el::Element, parent::Root, template_child::TemplateChildNode,
        utils::SourceLocation, Node,
    },
    errors::{CompilerError, ErrorCode},
    helpers::{add_bound_attr, add_directive, add_handler, add_prop},
    options::CompilerOptions,
    re::{BIND_RE, DIR_RE, ON_RE},
    text_parser::{parse_filters, parse_text},
    utils::json_stringify,
};

/// TransformModule:
///   An independently pluggable unit that annotates element nodes during the
///   transform pass and later contributes a generated data fragment during
///   codegen. Modules are plain function-pair records held in registration
///   order; they are stateless across invocations and `transform_node` must
///   be idempotent when re-run with no new attributes present.
pub struct TransformModule {
    pub transform_node: Option<fn(el: &mut Element, options: &CompilerOptions)>,
    /// Produces a fragment of generated object-literal source, each entry
    /// terminated by `,`; the empty string when the module contributes
    /// nothing.
    pub gen_data: Option<fn(el: &Element) -> String>,
    /// Generated-data keys that only ever hold static values; consumed by
    /// external optimizers for caching/hoisting decisions.
    pub static_keys: &'static [&'static str],
}

/// DirectiveCompiler:
///   Handles a single directive attribute on an element, translating the raw
///   directive into generated property bindings on the node.
pub type DirectiveCompiler = fn(el: &mut Element, dir: &Directive);

pub struct Transform;

impl Transform {
    /// Single pass over the tree: each element runs every registered module's
    /// `transform_node` in registration order, then directive and binding
    /// attributes are rewritten into generated bindings.
    pub fn transform(root: &mut Node<Root>, options: &CompilerOptions) {
        for child in root.inner.children.iter_mut() {
            walk(child, options);
        }
    }
}

fn walk(node: &mut TemplateChildNode, options: &CompilerOptions) {
    if let TemplateChildNode::Element(el) = node {
        process_element(el, options);
        for child in el.inner.children.iter_mut() {
            walk(child, options);
        }
    }
}

pub fn process_element(el: &mut Node<Element>, options: &CompilerOptions) {
    // second invocation with no new attributes is a no-op
    if el.inner.processed {
        return;
    }
    for module in &options.modules {
        if let Some(transform_node) = module.transform_node {
            transform_node(&mut el.inner, options);
        }
    }
    process_attrs(el, options);
    el.inner.processed = true;
}

/// Annotation keys declared static-only by the registered modules, in
/// registration order.
pub fn static_keys(options: &CompilerOptions) -> Vec<&'static str> {
    options
        .modules
        .iter()
        .flat_map(|m| m.static_keys.iter().copied())
        .collect()
}

/// Consume every attribute the modules left behind: handler and binding
/// prefixes become generated handlers/bindings, directive attributes become
/// descriptors (compiled away when a compiler is registered, kept for the
/// runtime otherwise), and plain attributes become quoted literals.
fn process_attrs(el: &mut Node<Element>, options: &CompilerOptions) {
    let attrs = std::mem::take(&mut el.inner.attrs);
    for attr in attrs {
        let name = attr.inner.name.clone();
        let value = attr.inner.value.clone().unwrap_or_default();
        if DIR_RE.is_match(&name) {
            if ON_RE.is_match(&name) {
                let raw = ON_RE.replace(&name, "").to_string();
                let (event, modifiers) = split_modifiers(&raw);
                add_handler(&mut el.inner, event, parse_filters(&value), modifiers);
            } else if BIND_RE.is_match(&name) {
                let raw = BIND_RE.replace(&name, "").to_string();
                let (bind_name, modifiers) = split_modifiers(&raw);
                let expr = parse_filters(&value);
                if modifiers.contains(&"prop".to_string()) {
                    add_prop(&mut el.inner, &bind_name, &expr);
                } else {
                    add_bound_attr(&mut el.inner, &bind_name, &expr);
                }
            } else if let Some(dir) = parse_directive(&name, &value, attr.loc.clone(), options) {
                match options.directives.get(&dir.inner.name) {
                    Some(compile) => compile(&mut el.inner, &dir.inner),
                    None => add_directive(&mut el.inner, dir),
                }
            }
        } else {
            if parse_text(&value, Some(options.delimiters)).is_some() {
                (options.error_handling.on_warn)(CompilerError::new(
                    ErrorCode::XInterpolationInStaticAttr,
                    Some(attr.loc.clone()),
                ));
            }
            add_bound_attr(&mut el.inner, &name, &json_stringify(&value));
        }
    }
}

/// `v-name[:arg][.modifier]*`, with `[expr]` as a dynamic argument.
fn parse_directive(
    raw_name: &str,
    value: &str,
    loc: SourceLocation,
    options: &CompilerOptions,
) -> Option<Node<Directive>> {
    let body = &raw_name[2..];
    let name_end = body.find(|c| c == ':' || c == '.').unwrap_or(body.len());
    let name = &body[..name_end];
    if name.is_empty() {
        (options.error_handling.on_warn)(CompilerError::new(
            ErrorCode::XMissingDirectiveName,
            Some(loc),
        ));
        return None;
    }

    let mut rest = &body[name_end..];
    let mut arg = None;
    let mut is_dynamic_arg = false;
    if let Some(stripped) = rest.strip_prefix(':') {
        rest = stripped;
        if let Some(stripped) = rest.strip_prefix('[') {
            is_dynamic_arg = true;
            match stripped.find(']') {
                Some(i) => {
                    arg = Some(stripped[..i].to_string());
                    rest = &stripped[i + 1..];
                }
                None => {
                    // unterminated dynamic argument, take the remainder
                    arg = Some(stripped.to_string());
                    rest = "";
                }
            }
        } else {
            let end = rest.find('.').unwrap_or(rest.len());
            arg = Some(rest[..end].to_string());
            rest = &rest[end..];
        }
    }
    let modifiers: AHashSet<String> = rest
        .split('.')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    Some(Node::<Directive>::new(
        name.to_string(),
        raw_name.to_string(),
        value.trim().to_string(),
        arg,
        is_dynamic_arg,
        modifiers,
        loc,
    ))
}

fn split_modifiers(raw: &str) -> (String, Vec<String>) {
    let mut parts = raw.split('.');
    let name = parts.next().unwrap_or_default().to_string();
    (name, parts.map(String::from).collect())
}
