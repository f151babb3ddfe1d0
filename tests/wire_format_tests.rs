//! Wire format conformance tests.
//!
//! Each case pins one rule of the line grammar or of rendering, using the
//! untyped codec so that no record binding is involved.

use text_parameters::{
    marshal, marshal_with_options, params, unmarshal, unmarshal_str, EmptyValue, Error,
    MarshalOptions, ParameterMap,
};

fn parsed(body: &str) -> ParameterMap {
    unmarshal_str(body).unwrap_or_else(|e| panic!("{body:?} should parse: {e}"))
}

// Parsing

#[test]
fn test_simple_body() {
    assert_eq!(
        parsed("foo: 3\nbar: 4\nbaz: 5\n"),
        params! { "foo" => 3, "bar" => 4, "baz" => 5 }
    );
}

#[test]
fn test_spaces_not_unified() {
    assert_eq!(
        parsed("foo   :    gold\nbar:           silver\nbaz              :bronze\n"),
        params! { "foo" => "gold", "bar" => "silver", "baz" => "bronze" }
    );
}

#[test]
fn test_tabs_are_horizontal_whitespace() {
    assert_eq!(parsed("\tfoo\t:\tgold\t"), params! { "foo" => "gold" });
}

#[test]
fn test_name_only_lines() {
    assert_eq!(
        parsed("foo\nbar: 1.4142\nbaz\npiyo: GoLang\n"),
        params! { "foo" => "", "bar" => "1.4142", "baz" => "", "piyo" => "GoLang" }
    );
}

#[test]
fn test_colon_with_nothing_after() {
    assert_eq!(parsed("foo:"), params! { "foo" => "" });
    assert_eq!(parsed("foo:   "), params! { "foo" => "" });
}

#[test]
fn test_first_colon_splits() {
    assert_eq!(parsed("F:oo: 3"), params! { "F" => "oo: 3" });
    assert_eq!(
        parsed("url: http://example.com:8080/"),
        params! { "url" => "http://example.com:8080/" }
    );
}

#[test]
fn test_symbol_names() {
    assert_eq!(parsed("(^^): 3"), params! { "(^^)" => 3 });
    assert_eq!(parsed("~!@#$%&*: x"), params! { "~!@#$%&*" => "x" });
}

#[test]
fn test_value_is_verbatim() {
    let params = parsed("greeting:   hello,  world \u{611b}  ");
    assert_eq!(params.get("greeting"), "hello,  world \u{611b}");
}

#[test]
fn test_last_occurrence_wins() {
    let params = parsed("a: 1\na: 2\na: 3");
    assert_eq!(params.len(), 1);
    assert_eq!(params.get("a"), "3");
}

#[test]
fn test_names_are_case_sensitive() {
    let params = parsed("extra: 1\nExtra: 2");
    assert_eq!(params.len(), 2);
    assert_eq!(params.get("extra"), "1");
    assert_eq!(params.get("Extra"), "2");
}

#[test]
fn test_blank_and_whitespace_lines_skipped() {
    assert_eq!(parsed(""), ParameterMap::new());
    assert_eq!(parsed("\n\n \t \n"), ParameterMap::new());
    assert_eq!(parsed("\na: 1\n\n\nb: 2"), params! { "a" => 1, "b" => 2 });
}

#[test]
fn test_missing_trailing_newline() {
    assert_eq!(parsed("a: 1\nb: 2"), parsed("a: 1\nb: 2\n"));
}

#[test]
fn test_crlf_line_endings() {
    assert_eq!(
        parsed("a: 1\r\nb\r\nc: x y\r\n"),
        params! { "a" => 1, "b" => "", "c" => "x y" }
    );
}

// Rejections

#[test]
fn test_space_inside_name() {
    assert_eq!(unmarshal_str("f oo: 3").unwrap_err(), Error::format(1, "f oo: 3"));
}

#[test]
fn test_non_ascii_name() {
    assert_eq!(unmarshal_str("愛: 3").unwrap_err(), Error::format(1, "愛: 3"));
}

#[test]
fn test_empty_name() {
    assert!(unmarshal_str(": value").unwrap_err().is_format());
    assert!(unmarshal_str("   : value").unwrap_err().is_format());
}

#[test]
fn test_control_characters_in_name() {
    assert!(unmarshal_str("a\u{7f}b: 1").unwrap_err().is_format());
    assert!(unmarshal_str("a\u{1}b: 1").unwrap_err().is_format());
}

#[test]
fn test_error_names_offending_line() {
    let err = unmarshal_str("good: 1\n\nbad name: 2\nalso bad: 3").unwrap_err();
    assert_eq!(err, Error::format(3, "bad name: 2"));
}

#[test]
fn test_reader_entry_point() {
    assert_eq!(
        unmarshal("foo: 3\nbar: 4".as_bytes()).unwrap(),
        params! { "foo" => 3, "bar" => 4 }
    );
    assert!(unmarshal("f oo: 3".as_bytes()).unwrap_err().is_format());
}

// Rendering

#[test]
fn test_marshal_output() {
    let params = params! {
        "foo" => "",
        "bar" => "1.4142",
        "baz" => "",
        "piyo" => "GoLang",
    };
    assert_eq!(marshal(&params), "bar: 1.4142\nbaz\nfoo\npiyo: GoLang\n");
}

#[test]
fn test_marshal_byte_order() {
    let params = params! { "b" => 1, "B" => 2, "a" => 3, "(^^)" => 4 };
    assert_eq!(marshal(&params), "(^^): 4\nB: 2\na: 3\nb: 1\n");
}

#[test]
fn test_marshal_is_deterministic() {
    let forward: ParameterMap = [("x", "1"), ("y", "2"), ("z", "3")].into_iter().collect();
    let backward: ParameterMap = [("z", "3"), ("y", "2"), ("x", "1")].into_iter().collect();
    assert_eq!(marshal(&forward), marshal(&backward));
}

#[test]
fn test_empty_value_styles_read_back_equal() {
    let params = params! { "flag" => "", "level" => 3 };
    let separator = MarshalOptions::new().with_empty_values(EmptyValue::Separator);

    let name_only = marshal(&params);
    let with_separator = marshal_with_options(&params, &separator);
    assert_eq!(name_only, "flag\nlevel: 3\n");
    assert_eq!(with_separator, "flag: \nlevel: 3\n");
    assert_eq!(parsed(&name_only), parsed(&with_separator));
}

#[test]
fn test_round_trip_then_idempotent() {
    let body = "zeta : 26\n\nalpha:1\nmid:  a: b  \nalpha: 2\n";
    let once = marshal(&parsed(body));
    assert_eq!(once, "alpha: 2\nmid: a: b\nzeta: 26\n");
    assert_eq!(marshal(&parsed(&once)), once);
}
