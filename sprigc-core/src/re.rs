use once_cell::sync::Lazy;
use regex::Regex;

macro_rules! lazy_re {
    ($re_name:ident, $re:expr $(,)?) => {
        pub static $re_name: Lazy<Regex> = Lazy::new(|| $re.unwrap());
    };
}

/////   Parser REs.
lazy_re!(TAG_OPEN_RE, Regex::new(r"^</?([A-Za-z][^\t\r\n\f />]*)"));
lazy_re!(END_TAG_OPEN_RE, Regex::new(r"^[\t\r\n\f />]"));
lazy_re!(ADVANCE_SPACE_RE, Regex::new(r"^[\t\r\n\f ]+"));
lazy_re!(COMMENT_END_RE, Regex::new(r"--(!)?>"));
lazy_re!(ATTR_NAME_RE, Regex::new(r"^[^\t\r\n\f />][^\t\r\n\f />=]*"));
lazy_re!(ATTR_VALUE_RE, Regex::new(r"^[\t\r\n\f ]*="));
lazy_re!(UNQUOTED_RE, Regex::new(r"^[^\t\r\n\f >]+"));
lazy_re!(UNEXPECTED_CHARS_IN_UNQUOTED_RE, Regex::new("[\"'<=`]"));
lazy_re!(UNEXPECTED_CHAR_IN_ATTR_NAME_RE, Regex::new("[\"'<]"));
lazy_re!(NON_WHITESPACE_RE, Regex::new(r"[^\t\r\n\f ]"));
lazy_re!(NEW_LINE_RE, Regex::new("[\r\n]"));
lazy_re!(CONDENSE_WHITESPACE_RE, Regex::new(r"[\t\r\n\f ]+"));
lazy_re!(ATTR_VALUE_SPACE_RE, Regex::new(r"\s+"));

/////   Transform REs.

/// Any attribute in the reserved binding/directive prefix space.
lazy_re!(DIR_RE, Regex::new(r"^(v-|:|@)"));
/// Dynamic attribute binding: `:name` or `v-bind:name`.
lazy_re!(BIND_RE, Regex::new(r"^(:|v-bind:)"));
/// Event handler binding: `@name` or `v-on:name`.
lazy_re!(ON_RE, Regex::new(r"^(@|v-on:)"));

/////   Interpolation REs.

/// Default `{{ expr }}` delimiters. Custom delimiters build an equivalent
/// regex through `regex::escape`.
lazy_re!(DEFAULT_INTERP_RE, Regex::new(r"\{\{((?s).+?)\}\}"));
