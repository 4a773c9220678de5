use once_cell::sync::Lazy;
use regex::Regex;

macro_rules! lazy_re {
    ($re_name:ident, $re:expr $(,)?) => {
        pub static $re_name: Lazy<Regex> = Lazy::new(|| $re.unwrap());
    };
}

/// Characters outside the identifier/dot/`$` class mark a path as
/// "not a simple path".
lazy_re!(BAIL_RE, Regex::new(r"[^\w.$]"));
