pub mod ast;
pub mod codegen;
pub mod compile;
pub mod directives;
pub mod errors;
pub mod helpers;
pub mod options;
pub mod parse;
pub mod re;
pub mod text_parser;
pub mod transform;
pub mod transforms;
pub mod utils;
