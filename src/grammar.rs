//! Line tokenizer for the parameter grammar.
//!
//! A body is a sequence of `\n`-separated lines. Each non-blank line is
//! split at its **first** `:` into a name and a value, both trimmed of
//! spaces and tabs. A line without `:` is a name-only entry whose value is
//! the empty string.
//!
//! ```text
//! line      := name [ ws* ":" ws* value ]
//! namechar  := %x21-39 / %x3B-7E
//! ```

use crate::{Error, Result};

/// One parsed `name: value` pair, borrowed from the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterLine<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Returns `true` for bytes allowed in a parameter name: printable,
/// non-whitespace ASCII other than `:`.
#[inline]
#[must_use]
pub const fn is_name_byte(b: u8) -> bool {
    matches!(b, 0x21..=0x39 | 0x3B..=0x7E)
}

/// Returns `true` if `name` is non-empty and made only of name bytes.
///
/// # Examples
///
/// ```rust
/// use text_parameters::grammar::is_valid_name;
///
/// assert!(is_valid_name("packet-received"));
/// assert!(is_valid_name("(^^)"));
/// assert!(!is_valid_name("f oo"));
/// assert!(!is_valid_name("愛"));
/// assert!(!is_valid_name(""));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_name_byte)
}

#[inline]
fn trim_horizontal(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}

/// Tokenizes one line (without its `\n` terminator).
///
/// Returns `Ok(None)` for blank lines. `line_no` is 1-based and only used
/// for error reporting.
///
/// # Examples
///
/// ```rust
/// use text_parameters::grammar::{parse_line, ParameterLine};
///
/// let parsed = parse_line(1, "F:oo: 3").unwrap();
/// assert_eq!(parsed, Some(ParameterLine { name: "F", value: "oo: 3" }));
///
/// assert_eq!(parse_line(2, "   ").unwrap(), None);
/// assert!(parse_line(3, "f oo: 3").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Format`] carrying the verbatim line when the resolved
/// name contains anything outside the name character set.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<ParameterLine<'_>>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if trim_horizontal(line).is_empty() {
        return Ok(None);
    }

    let (name, value) = match line.split_once(':') {
        Some((name, value)) => (trim_horizontal(name), trim_horizontal(value)),
        None => (trim_horizontal(line), ""),
    };

    if !is_valid_name(name) {
        return Err(Error::format(line_no, line));
    }

    Ok(Some(ParameterLine { name, value }))
}

/// Iterates the parameter lines of a whole body, in line order.
///
/// Blank lines are skipped. Invalid lines are yielded as errors in place;
/// callers are expected to stop at the first one.
pub fn lines(body: &str) -> impl Iterator<Item = Result<ParameterLine<'_>>> {
    body.split('\n')
        .enumerate()
        .filter_map(|(idx, line)| parse_line(idx + 1, line).transpose())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair<'a>(name: &'a str, value: &'a str) -> Option<ParameterLine<'a>> {
        Some(ParameterLine { name, value })
    }

    #[test]
    fn test_simple_pair() {
        assert_eq!(parse_line(1, "foo: 3").unwrap(), pair("foo", "3"));
    }

    #[test]
    fn test_uneven_spacing() {
        assert_eq!(parse_line(1, "foo   :    gold").unwrap(), pair("foo", "gold"));
        assert_eq!(
            parse_line(1, "bar:           silver").unwrap(),
            pair("bar", "silver")
        );
        assert_eq!(
            parse_line(1, "\tbaz              :bronze\t").unwrap(),
            pair("baz", "bronze")
        );
    }

    #[test]
    fn test_first_colon_delimits() {
        assert_eq!(parse_line(1, "F:oo: 3").unwrap(), pair("F", "oo: 3"));
        assert_eq!(
            parse_line(1, "url: http://example.com:8080").unwrap(),
            pair("url", "http://example.com:8080")
        );
    }

    #[test]
    fn test_name_only() {
        assert_eq!(parse_line(1, "foo").unwrap(), pair("foo", ""));
        assert_eq!(parse_line(1, "  foo  ").unwrap(), pair("foo", ""));
        assert_eq!(parse_line(1, "foo:").unwrap(), pair("foo", ""));
    }

    #[test]
    fn test_symbol_names() {
        assert_eq!(parse_line(1, "(^^): 3").unwrap(), pair("(^^)", "3"));
        assert_eq!(parse_line(1, "~!@#$%: x").unwrap(), pair("~!@#$%", "x"));
    }

    #[test]
    fn test_value_keeps_inner_whitespace_and_unicode() {
        assert_eq!(
            parse_line(1, "greeting:  hello   wörld ").unwrap(),
            pair("greeting", "hello   wörld")
        );
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(parse_line(1, "").unwrap(), None);
        assert_eq!(parse_line(1, " \t ").unwrap(), None);
        assert_eq!(parse_line(1, "\r").unwrap(), None);
    }

    #[test]
    fn test_crlf() {
        assert_eq!(parse_line(1, "foo: 3\r").unwrap(), pair("foo", "3"));
    }

    #[test]
    fn test_rejects_space_in_name() {
        let err = parse_line(4, "f oo: 3").unwrap_err();
        assert_eq!(err, Error::format(4, "f oo: 3"));
    }

    #[test]
    fn test_rejects_non_ascii_name() {
        assert!(parse_line(1, "愛: 3").unwrap_err().is_format());
    }

    #[test]
    fn test_rejects_empty_name() {
        assert!(parse_line(1, ": value").unwrap_err().is_format());
        assert!(parse_line(1, "  :").unwrap_err().is_format());
    }

    #[test]
    fn test_rejects_control_characters() {
        assert!(parse_line(1, "a\u{7f}b: 1").unwrap_err().is_format());
        assert!(parse_line(1, "a\u{0}b: 1").unwrap_err().is_format());
    }

    #[test]
    fn test_lines_reports_line_numbers() {
        let body = "a: 1\n\nb c: 2\nd: 4";
        let parsed: Vec<_> = lines(body).collect();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0], Ok(ParameterLine { name: "a", value: "1" }));
        assert_eq!(parsed[1], Err(Error::format(3, "b c: 2")));
    }
}
