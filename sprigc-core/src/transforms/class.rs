use crate::{
    ast::el::Element,
    errors::{CompilerError, ErrorCode},
    helpers::{get_and_remove_attr, get_binding_attr},
    options::CompilerOptions,
    re::ATTR_VALUE_SPACE_RE,
    text_parser::parse_text,
    transform::TransformModule,
    utils::json_stringify,
};

pub fn module() -> TransformModule {
    TransformModule {
        transform_node: Some(transform_node),
        gen_data: Some(gen_data),
        static_keys: &["staticClass"],
    }
}

fn transform_node(el: &mut Element, options: &CompilerOptions) {
    if let Some(static_class) = get_and_remove_attr(el, "class") {
        if parse_text(&static_class, Some(options.delimiters)).is_some() {
            // recoverable: report and keep compiling
            (options.error_handling.on_warn)(CompilerError::new(
                ErrorCode::XInterpolationInStaticAttr,
                None,
            ));
        }
        let condensed = ATTR_VALUE_SPACE_RE
            .replace_all(static_class.trim(), " ")
            .to_string();
        if !condensed.is_empty() {
            el.static_class = Some(condensed);
        }
    }
    if let Some(binding) = get_binding_attr(el, "class", false) {
        el.class_binding = Some(binding);
    }
}

fn gen_data(el: &Element) -> String {
    let mut data = String::new();
    if let Some(static_class) = &el.static_class {
        data.push_str(&format!("staticClass:{},", json_stringify(static_class)));
    }
    if let Some(binding) = &el.class_binding {
        data.push_str(&format!("class:{},", binding));
    }
    data
}
