use regex::Regex;

use crate::{re::DEFAULT_INTERP_RE, utils::json_stringify};

/// Scan a literal string for delimiter-marked embedded expressions and
/// return a single expression string that concatenates literal and evaluated
/// segments, or `None` when the text contains no interpolation at all (which
/// callers must treat as "static text", distinct from an empty expression).
///
/// An unterminated open delimiter is left in the text as literal content;
/// graceful degradation here is user-visible behavior and is kept on purpose.
pub fn parse_text(text: &str, delimiters: Option<(&str, &str)>) -> Option<String> {
    let built;
    let re: &Regex = match delimiters {
        None | Some(("{{", "}}")) => &DEFAULT_INTERP_RE,
        Some((open, close)) => {
            built = build_interp_regex(open, close);
            &built
        }
    };
    if !re.is_match(text) {
        return None;
    }

    let mut tokens: Vec<String> = vec![];
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let matched = caps.get(0).unwrap();
        if matched.start() > last {
            tokens.push(json_stringify(&text[last..matched.start()]));
        }
        let exp = parse_filters(caps.get(1).unwrap().as_str().trim());
        tokens.push(format!("_s({})", exp));
        last = matched.end();
    }
    if last < text.len() {
        tokens.push(json_stringify(&text[last..]));
    }
    Some(tokens.join("+"))
}

fn build_interp_regex(open: &str, close: &str) -> Regex {
    // escaped delimiters always form a valid pattern
    Regex::new(&format!(
        "{}((?s).+?){}",
        regex::escape(open),
        regex::escape(close)
    ))
    .unwrap()
}

/// Split a filter-pipe expression (`expr | filter | other(arg)`) and wrap the
/// expression in resolved filter calls, innermost first. Pipes inside string
/// literals, parens, brackets or braces are not split points, nor is `||`.
pub fn parse_filters(exp: &str) -> String {
    let bytes = exp.as_bytes();
    let mut in_single = false;
    let mut in_double = false;
    let mut in_template = false;
    let mut paren = 0i32;
    let mut square = 0i32;
    let mut curly = 0i32;
    let mut last_filter_index = 0usize;
    let mut expression: Option<String> = None;
    let mut filters: Vec<String> = vec![];

    for i in 0..bytes.len() {
        let c = bytes[i];
        let prev = if i > 0 { bytes[i - 1] } else { 0 };
        if in_single {
            if c == b'\'' && prev != b'\\' {
                in_single = false;
            }
        } else if in_double {
            if c == b'"' && prev != b'\\' {
                in_double = false;
            }
        } else if in_template {
            if c == b'`' && prev != b'\\' {
                in_template = false;
            }
        } else if c == b'|'
            && bytes.get(i + 1) != Some(&b'|')
            && prev != b'|'
            && paren == 0
            && square == 0
            && curly == 0
        {
            if expression.is_none() {
                expression = Some(exp[..i].trim().to_string());
            } else {
                filters.push(exp[last_filter_index..i].trim().to_string());
            }
            last_filter_index = i + 1;
        } else {
            match c {
                b'"' => in_double = true,
                b'\'' => in_single = true,
                b'`' => in_template = true,
                b'(' => paren += 1,
                b')' => paren -= 1,
                b'[' => square += 1,
                b']' => square -= 1,
                b'{' => curly += 1,
                b'}' => curly -= 1,
                _ => {}
            }
        }
    }

    let mut expression = match expression {
        Some(expression) => expression,
        None => return exp.trim().to_string(),
    };
    filters.push(exp[last_filter_index..].trim().to_string());

    for filter in &filters {
        expression = wrap_filter(&expression, filter);
    }
    expression
}

fn wrap_filter(exp: &str, filter: &str) -> String {
    match filter.find('(') {
        None => format!("_f(\"{}\")({})", filter, exp),
        Some(i) => {
            let name = &filter[..i];
            // args already carry the closing paren
            let args = &filter[i + 1..];
            if args == ")" {
                format!("_f(\"{}\")({})", name, exp)
            } else {
                format!("_f(\"{}\")({},{}", name, exp, args)
            }
        }
    }
}
