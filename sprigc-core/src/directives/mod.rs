use ahash::AHashMap;

use crate::transform::DirectiveCompiler;

pub mod html;
pub mod text;

/// Directive compilers recognized out of the box. Anything not in this map
/// is carried through to the runtime as a directive descriptor.
pub fn default_directives() -> AHashMap<String, DirectiveCompiler> {
    let mut directives: AHashMap<String, DirectiveCompiler> = AHashMap::new();
    directives.insert("html".to_string(), html::html as DirectiveCompiler);
    directives.insert("text".to_string(), text::text as DirectiveCompiler);
    directives
}
