use crate::{
    ast::{parent::Root, Node},
    codegen::{generate, CodegenResult},
    options::CompilerOptions,
    parse::Parser,
    transform::Transform,
};

pub struct CompiledResult {
    pub ast: Node<Root>,
    pub code: String,
}

/// The full pipeline: parse markup into an AST, run the transform module and
/// directive-compiler pass, then generate the render-function source. Each
/// invocation is self-contained; nothing is shared across compilations
/// except the read-only options.
pub fn compile(template: &str, options: &CompilerOptions) -> CompiledResult {
    let mut ast = Parser::base_parse(template, options);
    Transform::transform(&mut ast, options);
    let CodegenResult { code } = generate(&ast, options);
    CompiledResult { ast, code }
}
