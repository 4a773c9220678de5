pub mod directives;
pub mod element;
pub mod path;
pub mod re;
pub mod vnode;
