use crate::{
    ast::{
        attr::Directive,
        el::{Element, Handler, Prop},
        parent::Root,
        template_child::TemplateChildNode,
        Node,
    },
    errors::{CompilerError, ErrorCode},
    options::CompilerOptions,
    text_parser::parse_text,
    utils::{is_simple_identifier, json_stringify},
};

pub struct CodegenResult {
    pub code: String,
}

/// Generate the render-function source for a transformed tree. The output is
/// a function that, given a rendering context, returns a tree of virtual-node
/// descriptors:
/// `function render(){with(this){return _c('div',{...},[...])}}`
/// using the runtime helpers `_c` (element), `_v` (text), `_e` (comment),
/// `_s` (to-string) and `_f` (filter lookup).
pub fn generate(root: &Node<Root>, options: &CompilerOptions) -> CodegenResult {
    let mut ctx = CodegenContext::new(options);
    ctx.push("function render(){with(this){return ");

    let mut elements = root
        .inner
        .children
        .iter()
        .filter(|child| matches!(child, TemplateChildNode::Element(_)));
    match elements.next() {
        Some(first) => {
            if elements.next().is_some() {
                (options.error_handling.on_warn)(CompilerError::new(
                    ErrorCode::XMultipleRootNodes,
                    None,
                ));
            }
            ctx.gen_node(first);
        }
        None => ctx.push("_e()"),
    }

    ctx.push("}}");
    CodegenResult { code: ctx.code }
}

struct CodegenContext<'a> {
    code: String,
    options: &'a CompilerOptions,
}

impl<'a> CodegenContext<'a> {
    fn new(options: &'a CompilerOptions) -> Self {
        Self {
            code: String::new(),
            options,
        }
    }

    fn push(&mut self, code: &str) {
        self.code.push_str(code);
    }

    fn gen_node(&mut self, node: &TemplateChildNode) {
        match node {
            TemplateChildNode::Element(el) => self.gen_element(el),
            TemplateChildNode::Text(text) => self.gen_text(&text.inner.content),
            TemplateChildNode::Comment(comment) => {
                self.push(&format!("_e({})", json_stringify(&comment.inner.content)));
            }
        }
    }

    fn gen_element(&mut self, el: &Node<Element>) {
        self.push(&format!("_c('{}'", el.inner.tag));
        if let Some(data) = gen_data(&el.inner, self.options) {
            self.push(",");
            self.push(&data);
        }
        if !el.inner.children.is_empty() {
            self.push(",[");
            for (i, child) in el.inner.children.iter().enumerate() {
                if i > 0 {
                    self.push(",");
                }
                self.gen_node(child);
            }
            self.push("]");
        }
        self.push(")");
    }

    fn gen_text(&mut self, content: &str) {
        match parse_text(content, Some(self.options.delimiters)) {
            Some(expression) => self.push(&format!("_v({})", expression)),
            None => self.push(&format!("_v({})", json_stringify(content))),
        }
    }
}

/// Build the vnode creation data for one element by concatenating every
/// registered module's `gen_data` fragment in registration order, then the
/// generated bindings the transform pass produced. `None` when the element
/// carries no data at all.
pub fn gen_data(el: &Element, options: &CompilerOptions) -> Option<String> {
    let mut data = String::from("{");

    for module in &options.modules {
        if let Some(gen_data) = module.gen_data {
            data.push_str(&gen_data(el));
        }
    }

    if !el.bound_attrs.is_empty() {
        data.push_str(&format!("attrs:{{{}}},", gen_props(&el.bound_attrs)));
    }
    if !el.props.is_empty() {
        data.push_str(&format!("domProps:{{{}}},", gen_props(&el.props)));
    }
    if !el.handlers.is_empty() {
        data.push_str(&format!("on:{{{}}},", gen_handlers(&el.handlers)));
    }
    if !el.directives.is_empty() {
        data.push_str(&format!("directives:[{}],", gen_directives(&el.directives)));
    }

    if data == "{" {
        return None;
    }
    data.pop(); // trailing comma
    data.push('}');
    Some(data)
}

fn gen_key(name: &str) -> String {
    if is_simple_identifier(name) {
        name.to_string()
    } else {
        json_stringify(name)
    }
}

fn gen_props(props: &[Prop]) -> String {
    props
        .iter()
        .map(|prop| format!("{}:{}", gen_key(&prop.name), prop.value))
        .collect::<Vec<_>>()
        .join(",")
}

fn gen_handlers(handlers: &[Handler]) -> String {
    handlers
        .iter()
        .map(|handler| format!("{}:{}", gen_key(&handler.name), gen_handler(handler)))
        .collect::<Vec<_>>()
        .join(",")
}

fn gen_handler(handler: &Handler) -> String {
    if handler.modifiers.is_empty() {
        return handler.value.clone();
    }
    let mut guards = String::new();
    for modifier in &handler.modifiers {
        match modifier.as_str() {
            "stop" => guards.push_str("$event.stopPropagation();"),
            "prevent" => guards.push_str("$event.preventDefault();"),
            _ => {}
        }
    }
    format!(
        "function($event){{{}return ({})($event)}}",
        guards, handler.value
    )
}

/// Runtime directive descriptors, in declaration order; this array is what
/// the runtime hook dispatcher receives on the rendered vnode.
fn gen_directives(directives: &[Node<Directive>]) -> String {
    directives
        .iter()
        .map(|dir| gen_directive(&dir.inner))
        .collect::<Vec<_>>()
        .join(",")
}

fn gen_directive(dir: &Directive) -> String {
    let mut out = format!(
        "{{name:{},rawName:{}",
        json_stringify(&dir.name),
        json_stringify(&dir.raw_name)
    );
    if !dir.expr.is_empty() {
        out.push_str(&format!(
            ",value:({}),expression:{}",
            dir.expr,
            json_stringify(&dir.expr)
        ));
    }
    if let Some(arg) = &dir.arg {
        if dir.is_dynamic_arg {
            out.push_str(&format!(",arg:({})", arg));
        } else {
            out.push_str(&format!(",arg:{}", json_stringify(arg)));
        }
    }
    if !dir.modifiers.is_empty() {
        // stable output for an unordered modifier set
        let mut modifiers: Vec<&String> = dir.modifiers.iter().collect();
        modifiers.sort();
        let body = modifiers
            .iter()
            .map(|m| format!("{}:true", gen_key(m)))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&format!(",modifiers:{{{}}}", body));
    }
    out.push('}');
    out
}
