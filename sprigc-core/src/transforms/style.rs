use crate::{
    ast::el::Element,
    errors::{CompilerError, ErrorCode},
    helpers::{get_and_remove_attr, get_binding_attr},
    options::CompilerOptions,
    text_parser::parse_text,
    transform::TransformModule,
    utils::json_stringify,
};

pub fn module() -> TransformModule {
    TransformModule {
        transform_node: Some(transform_node),
        gen_data: Some(gen_data),
        static_keys: &["staticStyle"],
    }
}

fn transform_node(el: &mut Element, options: &CompilerOptions) {
    if let Some(static_style) = get_and_remove_attr(el, "style") {
        if parse_text(&static_style, Some(options.delimiters)).is_some() {
            (options.error_handling.on_warn)(CompilerError::new(
                ErrorCode::XInterpolationInStaticAttr,
                None,
            ));
        }
        let trimmed = static_style.trim().to_string();
        if !trimmed.is_empty() {
            el.static_style = Some(trimmed);
        }
    }
    if let Some(binding) = get_binding_attr(el, "style", false) {
        el.style_binding = Some(binding);
    }
}

fn gen_data(el: &Element) -> String {
    let mut data = String::new();
    if let Some(static_style) = &el.static_style {
        data.push_str(&format!("staticStyle:{},", json_stringify(static_style)));
    }
    if let Some(binding) = &el.style_binding {
        data.push_str(&format!("style:({}),", binding));
    }
    data
}
