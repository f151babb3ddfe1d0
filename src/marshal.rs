//! Untyped codec between a [`ParameterMap`] and a text body.
//!
//! [`marshal`] renders one `name: value` line per entry; [`unmarshal`]
//! tokenizes a whole body and aggregates the lines into a map, letting the
//! last occurrence of a repeated name win. Any invalid line fails the whole
//! call.

use std::io;

use crate::grammar;
use crate::{EmptyValue, Error, KeyOrder, MarshalOptions, ParameterMap, Result};

/// Renders `params` as a text body with default options.
///
/// Entries are written in ascending name order, one per line, each line
/// terminated by `\n`. Values are written verbatim; the format has no escape
/// mechanism, so values must not contain line terminators.
///
/// # Examples
///
/// ```rust
/// use text_parameters::{marshal, params};
///
/// let params = params! { "Foo" => "foobar", "Bar" => "golang" };
/// assert_eq!(marshal(&params), "Bar: golang\nFoo: foobar\n");
/// ```
#[must_use]
pub fn marshal(params: &ParameterMap) -> String {
    marshal_with_options(params, &MarshalOptions::default())
}

/// Renders `params` as a text body with custom options.
#[must_use]
pub fn marshal_with_options(params: &ParameterMap, options: &MarshalOptions) -> String {
    let names: Vec<&str> = match options.key_order {
        KeyOrder::Sorted => params.sorted_keys(),
        KeyOrder::Insertion => params.keys().collect(),
    };

    let mut output = String::with_capacity(params.len() * 16);
    for name in names {
        let value = params.get(name);
        write_line(&mut output, name, value, options.empty_values);
    }
    output
}

#[inline]
fn write_line(output: &mut String, name: &str, value: &str, empty_values: EmptyValue) {
    if value.contains(['\n', '\r']) {
        tracing::warn!(
            name,
            "parameter value contains a line terminator; output will not round-trip"
        );
    }

    output.push_str(name);
    match (value.is_empty(), empty_values) {
        (true, EmptyValue::NameOnly) => {}
        (true, EmptyValue::Separator) => output.push_str(": "),
        (false, _) => {
            output.push_str(": ");
            output.push_str(value);
        }
    }
    output.push('\n');
}

/// Parses a whole text body into a [`ParameterMap`].
///
/// # Examples
///
/// ```rust
/// use text_parameters::unmarshal_str;
///
/// let params = unmarshal_str("foo\nbar: 1.4142\n").unwrap();
/// assert_eq!(params.get("foo"), "");
/// assert_eq!(params.get("bar"), "1.4142");
/// ```
///
/// # Errors
///
/// Returns [`Error::Format`] for the first line, in line order, that does
/// not match the grammar. No partial map is returned.
pub fn unmarshal_str(body: &str) -> Result<ParameterMap> {
    let mut params = ParameterMap::new();
    for line in grammar::lines(body) {
        let line = line.map_err(|err| {
            tracing::debug!(error = %err, "rejected parameter body");
            err
        })?;
        params.set(line.name, line.value);
    }
    tracing::debug!(entries = params.len(), "unmarshaled parameter body");
    Ok(params)
}

/// Reads `reader` to its end and parses it into a [`ParameterMap`].
///
/// # Examples
///
/// ```rust
/// use text_parameters::unmarshal;
///
/// let body = "foo: 3\nbar: 4\nbaz: 5";
/// let params = unmarshal(body.as_bytes()).unwrap();
/// assert_eq!(
///     (params.get("foo"), params.get("bar"), params.get("baz")),
///     ("3", "4", "5")
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the input is not valid UTF-8,
/// and [`Error::Format`] as for [`unmarshal_str`].
pub fn unmarshal<R: io::Read>(mut reader: R) -> Result<ParameterMap> {
    let mut body = String::new();
    reader
        .read_to_string(&mut body)
        .map_err(|e| Error::io(&e.to_string()))?;
    unmarshal_str(&body)
}
