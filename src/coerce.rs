//! Type coercion between raw parameter text and typed scalar values.
//!
//! Each supported scalar type implements [`Scalar`], which knows its
//! [`ScalarKind`], how to parse itself from a raw value and how to render
//! itself back to canonical text. Parsing is fixed-width: a value that
//! overflows the declared type is rejected rather than narrowed.
//!
//! | Kind | Accepts | Renders |
//! |------|---------|---------|
//! | signed integer | base-10, optional sign | base-10 |
//! | unsigned integer | base-10, no `-` | base-10 |
//! | float | decimal, integer or fractional | shortest round-trip decimal |
//! | string | anything | verbatim |

use std::fmt;

use crate::{Error, Result};

/// The declared kind and bit width of a record field.
///
/// # Examples
///
/// ```rust
/// use text_parameters::ScalarKind;
///
/// assert_eq!(ScalarKind::Signed(32).to_string(), "i32");
/// assert_eq!(ScalarKind::Float(64).to_string(), "f64");
/// assert_eq!(ScalarKind::String.to_string(), "string");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Signed(u8),
    Unsigned(u8),
    Float(u8),
    String,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Signed(bits) => write!(f, "i{bits}"),
            ScalarKind::Unsigned(bits) => write!(f, "u{bits}"),
            ScalarKind::Float(bits) => write!(f, "f{bits}"),
            ScalarKind::String => f.write_str("string"),
        }
    }
}

/// A field type with a text representation.
pub trait Scalar: Sized {
    const KIND: ScalarKind;

    /// Parses a raw value, returning `None` if it is not a valid `Self`.
    fn parse_param(raw: &str) -> Option<Self>;

    /// Renders the canonical text form.
    fn render_param(&self) -> String;
}

macro_rules! impl_signed {
    ($($ty:ty => $bits:expr),* $(,)?) => {$(
        impl Scalar for $ty {
            const KIND: ScalarKind = ScalarKind::Signed($bits);

            fn parse_param(raw: &str) -> Option<Self> {
                raw.parse().ok()
            }

            fn render_param(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($ty:ty => $bits:expr),* $(,)?) => {$(
        impl Scalar for $ty {
            const KIND: ScalarKind = ScalarKind::Unsigned($bits);

            fn parse_param(raw: &str) -> Option<Self> {
                // Negative literals are refused outright, `-0` included.
                if raw.starts_with('-') {
                    return None;
                }
                raw.parse().ok()
            }

            fn render_param(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($ty:ty => $bits:expr),* $(,)?) => {$(
        impl Scalar for $ty {
            const KIND: ScalarKind = ScalarKind::Float($bits);

            fn parse_param(raw: &str) -> Option<Self> {
                raw.parse().ok()
            }

            fn render_param(&self) -> String {
                // Display on the native width is the shortest text that parses back exactly.
                self.to_string()
            }
        }
    )*};
}

impl_signed!(i8 => 8, i16 => 16, i32 => 32, i64 => 64, i128 => 128);
impl_unsigned!(u8 => 8, u16 => 16, u32 => 32, u64 => 64, u128 => 128);
impl_float!(f32 => 32, f64 => 64);

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::String;

    fn parse_param(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn render_param(&self) -> String {
        self.clone()
    }
}

/// Coerces `raw` into `T` on behalf of `field`.
///
/// # Examples
///
/// ```rust
/// use text_parameters::coerce::coerce;
///
/// assert_eq!(coerce::<u32>("Money", "1980").unwrap(), 1980);
/// assert!(coerce::<u32>("C", "-1").unwrap_err().is_field_type());
/// assert!(coerce::<i64>("B", "1.4142").is_err());
/// assert_eq!(coerce::<f64>("Time", "0.3838").unwrap(), 0.3838);
/// ```
///
/// # Errors
///
/// Returns [`Error::FieldType`] carrying the field name, `T`'s kind and the
/// offending raw value, whatever the reason the value was refused.
pub fn coerce<T: Scalar>(field: &str, raw: &str) -> Result<T> {
    T::parse_param(raw).ok_or_else(|| Error::field_type(field, T::KIND, raw))
}

/// Renders `value` to its canonical text form.
///
/// # Examples
///
/// ```rust
/// use text_parameters::coerce::render;
///
/// assert_eq!(render(&-20_i64), "-20");
/// assert_eq!(render(&1.4142_f32), "1.4142");
/// assert_eq!(render(&2.8888_f64), "2.8888");
/// ```
#[must_use]
pub fn render<T: Scalar>(value: &T) -> String {
    value.render_param()
}
