//! Field resolution: which record fields take part in coding, and under
//! which wire name.
//!
//! Records describe their fields through serde's derive, which fixes the
//! mapping at compile time:
//!
//! - a field's wire name is its `#[serde(rename = "...")]` tag when present,
//!   otherwise its Rust identifier, verbatim;
//! - a field marked `#[serde(skip)]` never takes part, whatever its name or
//!   tag.
//!
//! [`Bindings`] collects the resolved names in declaration order and checks
//! them against the name grammar. Two fields resolving to the same name are
//! rejected, so a wire name always identifies exactly one field.
//!
//! ```rust
//! use text_parameters::binding::Bindings;
//!
//! let bindings = Bindings::resolve(&["packet-received", "transfer-time", "Extra"]).unwrap();
//! assert_eq!(bindings.names().collect::<Vec<_>>(), ["packet-received", "transfer-time", "Extra"]);
//!
//! assert!(Bindings::resolve(&["dup", "dup"]).unwrap_err().is_usage());
//! ```

use indexmap::IndexSet;

use crate::grammar::is_valid_name;
use crate::{Error, Result};

/// The resolved wire names of one record, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings(IndexSet<String>);

impl Bindings {
    #[must_use]
    pub fn new() -> Self {
        Bindings(IndexSet::new())
    }

    /// Resolves the field names serde reports for a struct.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] or [`Error::DuplicateField`] for the
    /// first field, in declaration order, that cannot be bound.
    pub fn resolve(fields: &[&str]) -> Result<Self> {
        let mut bindings = Bindings(IndexSet::with_capacity(fields.len()));
        for field in fields {
            bindings.bind(field)?;
        }
        Ok(bindings)
    }

    /// Adds one more field under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if `name` is outside the name grammar,
    /// and [`Error::DuplicateField`] if another field already binds to it.
    pub fn bind(&mut self, name: &str) -> Result<()> {
        if !is_valid_name(name) {
            return Err(Error::invalid_name(name));
        }
        if !self.0.insert(name.to_string()) {
            return Err(Error::duplicate_field(name));
        }
        tracing::trace!(name, "bound field");
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }
}

impl IntoIterator for Bindings {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let bindings = Bindings::resolve(&["b", "a", "c"]).unwrap();
        assert_eq!(bindings.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(bindings.len(), 3);
    }

    #[test]
    fn test_empty_record() {
        assert!(Bindings::resolve(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = Bindings::resolve(&["x", "y", "x"]).unwrap_err();
        assert_eq!(err, Error::duplicate_field("x"));
    }

    #[test]
    fn test_case_distinct_names() {
        assert_eq!(Bindings::resolve(&["Extra", "extra"]).unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_name_rejected() {
        assert_eq!(
            Bindings::resolve(&["ok", "not ok"]).unwrap_err(),
            Error::invalid_name("not ok")
        );
        assert!(Bindings::resolve(&["a:b"]).is_err());
        assert!(Bindings::resolve(&[""]).is_err());
    }

    #[test]
    fn test_incremental_bind() {
        let mut bindings = Bindings::new();
        bindings.bind("one").unwrap();
        bindings.bind("two").unwrap();
        assert!(bindings.bind("one").is_err());
        assert_eq!(bindings.len(), 2);
    }
}
