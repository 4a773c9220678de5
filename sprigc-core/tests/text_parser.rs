use sprigc_core::text_parser::{parse_filters, parse_text};

#[test]
fn plain_text_has_no_expression() {
    assert_eq!(parse_text("plain text", None), None);
    assert_eq!(parse_text("", None), None);
}

#[test]
fn mixed_literal_and_interpolation() {
    assert_eq!(
        parse_text("a{{b}}c", None),
        Some(r#""a"+_s(b)+"c""#.to_string())
    );
}

#[test]
fn interpolation_only() {
    assert_eq!(parse_text("{{ msg }}", None), Some("_s(msg)".to_string()));
}

#[test]
fn interpolation_with_filter() {
    assert_eq!(
        parse_text("{{ msg | up }}", None),
        Some(r#"_s(_f("up")(msg))"#.to_string())
    );
}

#[test]
fn chained_filters_wrap_innermost_first() {
    assert_eq!(
        parse_filters("msg | up | pad(2)"),
        r#"_f("pad")(_f("up")(msg),2)"#
    );
}

#[test]
fn logical_or_is_not_a_filter_pipe() {
    assert_eq!(parse_filters("a || b"), "a || b");
    assert_eq!(parse_filters("'a|b'"), "'a|b'");
    assert_eq!(parse_filters("fn(a|b)"), "fn(a|b)");
}

#[test]
fn custom_delimiters() {
    assert_eq!(
        parse_text("a[[b]]c", Some(("[[", "]]"))),
        Some(r#""a"+_s(b)+"c""#.to_string())
    );
    // default markers are literal text under custom delimiters
    assert_eq!(parse_text("a{{b}}c", Some(("[[", "]]"))), None);
}

#[test]
fn unterminated_delimiter_stays_literal() {
    assert_eq!(parse_text("a{{b", None), None);
    assert_eq!(
        parse_text("{{a}} then {{b", None),
        Some(r#"_s(a)+" then {{b""#.to_string())
    );
}

#[test]
fn literal_segments_are_escaped() {
    assert_eq!(
        parse_text("say \"hi\"\n{{x}}", None),
        Some(r#""say \"hi\"\n"+_s(x)"#.to_string())
    );
}
