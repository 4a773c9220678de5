use std::fmt::Display;

use crate::ast::utils::SourceLocation;

#[derive(Debug)]
pub struct CompilerError {
    pub code: ErrorCode,
    pub loc: Option<SourceLocation>,
}

impl CompilerError {
    pub fn new(code: ErrorCode, loc: Option<SourceLocation>) -> Self {
        Self { code, loc }
    }
    pub fn message(&self) -> &'static str {
        self.code.into_message()
    }
}

pub fn default_on_error(err: CompilerError) {
    println!("{:?}", err);
}

pub fn default_on_warn(err: CompilerError) {
    println!("[compiler warn] {:?}", err);
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorCode {
    /// parse errors
    DuplicateAttribute,
    EOFBeforeTagName,
    EOFInComment,
    EOFInTag,
    IncorrectlyClosedComment,
    InvalidFirstCharacterOfTagName,
    MissingAttributeValue,
    MissingEndTagName,
    MissingWhitespaceBetweenAttributes,
    UnexpectedCharacterInAttributeName,
    UnexpectedCharacterInUnquotedAttributeValue,
    UnexpectedEqualsSignBeforeAttributeName,
    UnexpectedSolidusInTag,
    XInvalidEndTag,
    XMissingEndTag,

    /// transform diagnostics (recoverable, reported via `on_warn`)
    XInterpolationInStaticAttr,
    XMissingDirectiveName,
    XMultipleRootNodes,

    /// Special value for higher-order compilers to pick up the last code
    /// to avoid collision of error codes. This should always be kept as the last
    /// item.
    __ExtendPoint__,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.into_message())
    }
}

impl ErrorCode {
    #[inline(never)]
    fn into_message(&self) -> &'static str {
        match &self {
            Self::DuplicateAttribute => "Duplicate attribute.",
            Self::EOFBeforeTagName => "Unexpected EOF in tag.",
            Self::EOFInComment => "Unexpected EOF in comment.",
            Self::EOFInTag => "Unexpected EOF in tag.",
            Self::IncorrectlyClosedComment => "Incorrectly closed comment.",
            Self::InvalidFirstCharacterOfTagName => "Illegal tag name. Use '&lt;' to print '<'.",
            Self::MissingAttributeValue => "Attribute value was expected.",
            Self::MissingEndTagName => "End tag name was expected.",
            Self::MissingWhitespaceBetweenAttributes => "Whitespace was expected.",
            Self::UnexpectedCharacterInAttributeName => {
                "Attribute name cannot contain U+0022 (\"), U+0027 ('), and U+003C (<)."
            }
            Self::UnexpectedCharacterInUnquotedAttributeValue => {
                "Unquoted attribute value cannot contain U+0022 (\"), U+0027 ('), U+003C (<), \
                 U+003D (=), and U+0060 (`)."
            }
            Self::UnexpectedEqualsSignBeforeAttributeName => {
                "Attribute name cannot start with '='."
            }
            Self::UnexpectedSolidusInTag => "Illegal '/' in tags.",
            Self::XInvalidEndTag => "Invalid end tag.",
            Self::XMissingEndTag => "End tag was not found.",
            Self::XInterpolationInStaticAttr => {
                "Interpolation inside attributes is not supported. Use a binding (':' or \
                 'v-bind:') instead."
            }
            Self::XMissingDirectiveName => "Legal directive name was expected.",
            Self::XMultipleRootNodes => {
                "Template should have a single root element; extra roots are ignored."
            }
            Self::__ExtendPoint__ => "",
        }
    }
}
