//! Error types for text parameter encoding and decoding.
//!
//! Every failure is returned as an [`Error`] value. The variants fall into
//! a small number of categories that callers can branch on through
//! [`Error::category`]:
//!
//! - **Format**: a line of input violates the parameter grammar
//! - **Field type**: a raw value cannot be coerced to a field's declared kind
//! - **Usage**: the record argument itself cannot be coded (not a record,
//!   unsupported field type, duplicate or invalid wire name, a field with
//!   neither an entry nor a zero value)
//! - **I/O**: reading from or writing to the underlying stream failed
//!
//! ## Examples
//!
//! ```rust
//! use text_parameters::{unmarshal_str, Category};
//!
//! let err = unmarshal_str("f oo: 3").unwrap_err();
//! assert_eq!(err.category(), Category::Format);
//! assert!(err.to_string().contains("f oo: 3"));
//! ```

use std::fmt;
use thiserror::Error;

use crate::coerce::ScalarKind;

/// Represents all possible errors that can occur while coding text parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A line does not match the parameter grammar
    #[error("invalid parameter line {line}: {text:?}")]
    Format { line: usize, text: String },

    /// A raw value cannot be converted to the field's declared kind
    #[error("cannot decode {value:?} into field `{field}` of type {kind}")]
    FieldType {
        field: String,
        kind: ScalarKind,
        value: String,
    },

    /// The value being coded is not a record
    #[error("expected a record (struct or string-keyed map), found {found}")]
    StructPointer { found: String },

    /// A record field has a shape that has no text representation
    #[error("field `{field}` has unsupported type {found}")]
    UnsupportedType { field: String, found: String },

    /// Two fields resolve to the same wire name, or one field is reached
    /// through more than one of its names
    #[error("parameter name `{name}` is bound more than once")]
    DuplicateField { name: String },

    /// A field has no entry and no zero value to fall back on
    #[error("field `{field}` is missing and has no zero value")]
    MissingField { field: String },

    /// A field resolves to a wire name outside the name grammar
    #[error("parameter name {name:?} contains characters outside 0x21-0x39 / 0x3B-0x7E")]
    InvalidName { name: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

/// Coarse classification of an [`Error`], for callers that react per kind
/// of failure rather than per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Format,
    FieldType,
    Usage,
    Io,
    Custom,
}

impl Error {
    /// Creates a format error for the 1-based `line` whose raw text is `text`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use text_parameters::Error;
    ///
    /// let err = Error::format(3, "d dd: 12.345");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn format(line: usize, text: &str) -> Self {
        Error::Format {
            line,
            text: text.to_string(),
        }
    }

    /// Creates a field type error for `value` that could not become `kind`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use text_parameters::{Error, ScalarKind};
    ///
    /// let err = Error::field_type("C", ScalarKind::Unsigned(32), "-1");
    /// assert_eq!(err.to_string(), "cannot decode \"-1\" into field `C` of type u32");
    /// ```
    pub fn field_type(field: &str, kind: ScalarKind, value: &str) -> Self {
        Error::FieldType {
            field: field.to_string(),
            kind,
            value: value.to_string(),
        }
    }

    /// Creates a usage error for a top-level value that is not a record.
    pub fn struct_pointer(found: &str) -> Self {
        Error::StructPointer {
            found: found.to_string(),
        }
    }

    /// Creates a usage error for a field whose type cannot be coded.
    pub fn unsupported_type(field: &str, found: &str) -> Self {
        Error::UnsupportedType {
            field: field.to_string(),
            found: found.to_string(),
        }
    }

    pub fn duplicate_field(name: &str) -> Self {
        Error::DuplicateField {
            name: name.to_string(),
        }
    }

    pub fn missing_field(field: &str) -> Self {
        Error::MissingField {
            field: field.to_string(),
        }
    }

    pub fn invalid_name(name: &str) -> Self {
        Error::InvalidName {
            name: name.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for stream reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the category this error belongs to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use text_parameters::{Category, Error};
    ///
    /// assert_eq!(Error::struct_pointer("i32").category(), Category::Usage);
    /// assert_eq!(Error::duplicate_field("a").category(), Category::Usage);
    /// ```
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Error::Format { .. } => Category::Format,
            Error::FieldType { .. } => Category::FieldType,
            Error::StructPointer { .. }
            | Error::UnsupportedType { .. }
            | Error::DuplicateField { .. }
            | Error::MissingField { .. }
            | Error::InvalidName { .. } => Category::Usage,
            Error::Io(_) => Category::Io,
            Error::Custom(_) => Category::Custom,
        }
    }

    #[must_use]
    pub fn is_format(&self) -> bool {
        self.category() == Category::Format
    }

    #[must_use]
    pub fn is_field_type(&self) -> bool {
        self.category() == Category::FieldType
    }

    #[must_use]
    pub fn is_usage(&self) -> bool {
        self.category() == Category::Usage
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    fn missing_field(field: &'static str) -> Self {
        Error::missing_field(field)
    }

    fn duplicate_field(field: &'static str) -> Self {
        Error::duplicate_field(field)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
