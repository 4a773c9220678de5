use ahash::AHashMap;

use crate::{
    directives,
    errors::{default_on_error, default_on_warn, CompilerError},
    transform::{DirectiveCompiler, TransformModule},
    transforms,
};

pub struct ErrorHandlingOptions {
    pub on_warn: fn(warning: CompilerError),
    pub on_error: fn(error: CompilerError),
}

impl Default for ErrorHandlingOptions {
    fn default() -> Self {
        Self {
            on_warn: default_on_warn,
            on_error: default_on_error,
        }
    }
}

pub enum WhiteSpaceStrategy {
    /// Preserve all whitespace
    Preserve,
    /// Remove whitespace except in text nodes
    Condense,
}

/// Process-wide compiler configuration. Constructed once at startup and
/// passed explicitly into each compilation; never mutated during a pass, so
/// independent templates can compile on separate threads.
pub struct CompilerOptions {
    /// @default ['{{', '}}']
    pub delimiters: (&'static str, &'static str),
    /// Whitespace handling strategy
    pub whitespace: WhiteSpaceStrategy,
    /// Whether to keep comments in the template AST.
    pub comments: bool,
    /// e.g. native elements that can self-close, e.g. `<img>`, `<br>`, `<hr>`
    pub is_void_tag: fn(tag: &str) -> bool,
    /// e.g. elements that should preserve whitespace inside, e.g. `<pre>`
    pub is_pre_tag: fn(tag: &str) -> bool,
    /// An ordered list of transform modules applied to every element node.
    /// Registration order is an observable contract: attribute extraction is
    /// destructive, so earlier modules claim attributes first.
    pub modules: Vec<TransformModule>,
    /// An object of { name: compiler } applied to every directive attribute
    /// found on element nodes.
    pub directives: AHashMap<String, DirectiveCompiler>,
    pub error_handling: ErrorHandlingOptions,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            delimiters: ("{{", "}}"),
            whitespace: WhiteSpaceStrategy::Condense,
            comments: false,
            is_void_tag: default_is_void_tag,
            is_pre_tag: |tag| tag == "pre",
            modules: transforms::default_modules(),
            directives: directives::default_directives(),
            error_handling: Default::default(),
        }
    }
}

fn default_is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
