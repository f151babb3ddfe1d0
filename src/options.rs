//! Configuration options for marshaling parameters to text.
//!
//! This module provides types to customize the rendered body:
//!
//! - [`MarshalOptions`]: Main configuration struct
//! - [`KeyOrder`]: Order in which entries are written
//! - [`EmptyValue`]: How an entry with an empty value is written
//!
//! Every combination of options produces text that unmarshals back to the
//! same map.
//!
//! ## Examples
//!
//! ```rust
//! use text_parameters::{marshal_with_options, params, EmptyValue, KeyOrder, MarshalOptions};
//!
//! let params = params! { "zeta" => 1, "alpha" => "" };
//!
//! let options = MarshalOptions::new()
//!     .with_key_order(KeyOrder::Insertion)
//!     .with_empty_values(EmptyValue::Separator);
//! assert_eq!(marshal_with_options(&params, &options), "zeta: 1\nalpha: \n");
//! ```

/// Order in which a parameter map's entries are written.
///
/// # Examples
///
/// ```rust
/// use text_parameters::KeyOrder;
///
/// assert_eq!(KeyOrder::default(), KeyOrder::Sorted);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// Ascending byte-wise order of names; reproducible and diff-stable.
    #[default]
    Sorted,
    /// The map's insertion order.
    Insertion,
}

/// How an entry whose value is the empty string is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EmptyValue {
    /// A bare `name` line.
    #[default]
    NameOnly,
    /// `name: ` with the separator kept.
    Separator,
}

/// Configuration options for marshaling.
///
/// # Examples
///
/// ```rust
/// use text_parameters::{EmptyValue, KeyOrder, MarshalOptions};
///
/// // Default: sorted names, name-only lines for empty values
/// let options = MarshalOptions::new();
/// assert_eq!(options.key_order, KeyOrder::Sorted);
/// assert_eq!(options.empty_values, EmptyValue::NameOnly);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarshalOptions {
    pub key_order: KeyOrder,
    pub empty_values: EmptyValue,
}

impl MarshalOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the order in which entries are written.
    #[must_use]
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    /// Sets how entries with empty values are written.
    #[must_use]
    pub fn with_empty_values(mut self, empty_values: EmptyValue) -> Self {
        self.empty_values = empty_values;
        self
    }
}
