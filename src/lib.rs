//! # text_parameters
//!
//! A Serde-compatible codec for line-oriented text parameters: one
//! `name: value` pair per line.
//!
//! ```text
//! Received: 10
//! Time: 0.3838
//! Money: 1980
//! ```
//!
//! ## Two Codec Paths
//!
//! - **Untyped**: [`marshal`] / [`unmarshal`] convert between a text body and
//!   a [`ParameterMap`] of raw strings.
//! - **Typed**: [`Encoder`] / [`Decoder`] (and the `to_*` / `from_*`
//!   functions) convert between a text body and a record type deriving
//!   `Serialize` / `Deserialize`. Each field binds to a parameter name and
//!   its value is coerced to or from the field's declared type.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use text_parameters::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Transfer {
//!     #[serde(rename = "packet-received")]
//!     received: i32,
//!     #[serde(rename = "transfer-time")]
//!     time: f64,
//!     extra: String,
//! }
//!
//! let transfer = Transfer {
//!     received: 1024,
//!     time: 12.345,
//!     extra: "extra-field".to_string(),
//! };
//!
//! let text = to_string(&transfer).unwrap();
//! assert_eq!(text, "extra: extra-field\npacket-received: 1024\ntransfer-time: 12.345\n");
//!
//! let transfer_back: Transfer = from_str(&text).unwrap();
//! assert_eq!(transfer, transfer_back);
//! ```
//!
//! ## Field Binding
//!
//! - `#[serde(rename = "wire-name")]` binds a field to an explicit name.
//! - An untagged field binds to its Rust identifier, verbatim.
//! - `#[serde(skip)]` keeps a field out of coding entirely.
//! - `#[serde(alias = "...")]` and `#[serde(default)]` work as usual.
//! - A bound field missing from the input gets its zero value unless it
//!   declares a serde default.
//!
//! ## Errors
//!
//! Every failure is an [`Error`]; [`Error::category`] tells a malformed line
//! ([`Category::Format`]) from a value that does not fit its field
//! ([`Category::FieldType`]) and from a record that cannot be coded at all
//! ([`Category::Usage`]).
//!
//! See [`format`] for the complete wire format.

pub mod binding;
pub mod codec;
pub mod coerce;
pub mod de;
pub mod error;
pub mod format;
pub mod grammar;
pub mod macros;
pub mod map;
pub mod marshal;
pub mod options;
pub mod ser;

pub use codec::{Decoder, Encoder};
pub use coerce::ScalarKind;
pub use de::Deserializer;
pub use error::{Category, Error, Result};
pub use map::ParameterMap;
pub use marshal::{marshal, marshal_with_options, unmarshal, unmarshal_str};
pub use options::{EmptyValue, KeyOrder, MarshalOptions};
pub use ser::Serializer;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Serialize a record to a text body.
///
/// # Examples
///
/// ```rust
/// use text_parameters::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(to_string(&point).unwrap(), "x: 1\ny: 2\n");
/// ```
///
/// # Errors
///
/// Returns a usage error if the value is not a record or has a field that
/// cannot be coded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &MarshalOptions::default())
}

/// Serialize a record to a text body with custom options.
///
/// # Errors
///
/// Returns a usage error if the value is not a record or has a field that
/// cannot be coded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &MarshalOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let params = to_params(value)?;
    Ok(marshal_with_options(&params, options))
}

/// Convert a record to a [`ParameterMap`] of rendered field values.
///
/// # Examples
///
/// ```rust
/// use text_parameters::to_params;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let params = to_params(&Point { x: 1, y: -2 }).unwrap();
/// assert_eq!(params.get("y"), "-2");
/// ```
///
/// # Errors
///
/// Returns a usage error if the value is not a record or has a field that
/// cannot be coded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_params<T>(value: &T) -> Result<ParameterMap>
where
    T: ?Sized + Serialize,
{
    value.serialize(Serializer)
}

/// Serialize a record to a writer.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    Encoder::new(writer).encode(value)
}

/// Deserialize a record from a [`ParameterMap`].
///
/// Bound fields with no entry get their serde default when they declare
/// one, and their zero value otherwise.
///
/// # Examples
///
/// ```rust
/// use text_parameters::{from_params, params};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_params(&params! { "x" => 1 }).unwrap();
/// assert_eq!(point, Point { x: 1, y: 0 });
/// ```
///
/// # Errors
///
/// Returns a usage error if `T` is not a codable record and
/// [`Error::FieldType`] for the first value that does not fit its field.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_params<T>(params: &ParameterMap) -> Result<T>
where
    T: DeserializeOwned,
{
    de::decode(params)
}

/// Deserialize a record from a text body.
///
/// # Examples
///
/// ```rust
/// use text_parameters::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns [`Error::Format`] if a line is malformed, plus the errors of
/// [`from_params`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let params = unmarshal_str(s)?;
    from_params(&params)
}

/// Deserialize a record from bytes of text.
///
/// # Errors
///
/// Returns [`Error::Io`] if the bytes are not valid UTF-8, plus the errors
/// of [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::io(&e.to_string()))?;
    from_str(s)
}

/// Deserialize a record from an I/O stream, reading it to the end.
///
/// # Examples
///
/// ```rust
/// use text_parameters::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x: 1\ny: 2")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, plus the errors of [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    Decoder::new(reader).decode()
}
