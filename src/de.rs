//! Record deserialization.
//!
//! This module provides the [`Deserializer`] that populates a record
//! implementing `Deserialize` from a [`ParameterMap`].
//!
//! ## Overview
//!
//! - Only the record's bound fields that have an entry are handed to the
//!   record; entries with no matching field are ignored.
//! - A bound field with no entry falls back to its `#[serde(default)]` when
//!   it has one, and to the zero value of its kind (`0`, `0.0`, `""`,
//!   `None`) otherwise.
//! - A present entry is coerced to the field's declared type; the first
//!   value that does not fit fails the whole decode with
//!   [`Error::FieldType`].
//!
//! ## Usage
//!
//! ```rust
//! use serde::Deserialize;
//! use text_parameters::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Stats {
//!     #[serde(rename = "Received")]
//!     received: i32,
//!     #[serde(rename = "Time")]
//!     time: f64,
//!     #[serde(rename = "Money")]
//!     money: u32,
//! }
//!
//! let stats: Stats = from_str("Received: 10\nTime: 0.3838\nMoney: 1980").unwrap();
//! assert_eq!(stats, Stats { received: 10, time: 0.3838, money: 1980 });
//!
//! let err = from_str::<Stats>("Money: -1").unwrap_err();
//! assert!(err.is_field_type());
//! ```

use indexmap::IndexSet;
use serde::de::value::StrDeserializer;
use serde::de::{self, DeserializeOwned, IntoDeserializer, Visitor};
use serde::Serialize;

use crate::binding::Bindings;
use crate::coerce::{coerce, Scalar};
use crate::{Error, ParameterMap, Result};

/// Deserializes a record out of a [`ParameterMap`].
///
/// Created via [`Deserializer::new`]; the top-level value must be a record
/// (a struct, a newtype around one, or a string-keyed map), otherwise
/// [`Error::StructPointer`] is returned before any field is looked at.
///
/// A deserializer on its own only hands over the fields that have an entry,
/// so a field with neither an entry nor a serde default reports
/// [`Error::MissingField`]. [`from_params`](crate::from_params) and
/// [`Decoder`](crate::Decoder) retry such fields with their zero value.
pub struct Deserializer<'a> {
    params: &'a ParameterMap,
    zeroed: Option<&'a IndexSet<String>>,
}

impl<'a> Deserializer<'a> {
    pub fn new(params: &'a ParameterMap) -> Self {
        Deserializer {
            params,
            zeroed: None,
        }
    }

    fn with_zeroed(params: &'a ParameterMap, zeroed: &'a IndexSet<String>) -> Self {
        Deserializer {
            params,
            zeroed: Some(zeroed),
        }
    }

    fn feeds(&self, name: &str) -> bool {
        self.params.contains(name) || self.zeroed.map_or(false, |zeroed| zeroed.contains(name))
    }
}

/// Decodes a fresh record.
///
/// Fields the record reports missing are handed to it again with no entry,
/// which yields their zero value. Each field is retried at most once.
pub(crate) fn decode<T>(params: &ParameterMap) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut zeroed = IndexSet::new();
    loop {
        match T::deserialize(Deserializer::with_zeroed(params, &zeroed)) {
            Err(Error::MissingField { field }) if !zeroed.contains(&field) => {
                tracing::trace!(field = %field, "zero-filling absent field");
                zeroed.insert(field);
            }
            result => return result,
        }
    }
}

/// Decodes `incoming` over `target` in place.
///
/// `current` holds the target's own encoding. Its entries are handed back
/// for fields the body does not mention, so those fields keep their value.
/// Fields are written one by one in binding order: a failure leaves the
/// fields before it written, and fields that take no part in coding are
/// never touched.
pub(crate) fn decode_into<T>(
    current: ParameterMap,
    incoming: &ParameterMap,
    target: &mut T,
) -> Result<()>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = current;
    merged.extend(incoming.iter());

    let mut zeroed = IndexSet::new();
    loop {
        match T::deserialize_in_place(Deserializer::with_zeroed(&merged, &zeroed), target) {
            // The body reaches this field through an alias, so its current
            // value must not be handed over as well.
            Err(Error::DuplicateField { name })
                if merged.contains(&name) && !incoming.contains(&name) =>
            {
                merged.delete(&name);
            }
            Err(Error::MissingField { field }) if !zeroed.contains(&field) => {
                zeroed.insert(field);
            }
            result => return result,
        }
    }
}

macro_rules! not_a_record {
    ($($method:ident => $found:expr),* $(,)?) => {$(
        fn $method<V>(self, _visitor: V) -> Result<V::Value>
        where
            V: Visitor<'de>,
        {
            Err(Error::struct_pointer($found))
        }
    )*};
}

impl<'de, 'a> de::Deserializer<'de> for Deserializer<'a> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    not_a_record! {
        deserialize_bool => "bool",
        deserialize_i8 => "i8",
        deserialize_i16 => "i16",
        deserialize_i32 => "i32",
        deserialize_i64 => "i64",
        deserialize_i128 => "i128",
        deserialize_u8 => "u8",
        deserialize_u16 => "u16",
        deserialize_u32 => "u32",
        deserialize_u64 => "u64",
        deserialize_u128 => "u128",
        deserialize_f32 => "f32",
        deserialize_f64 => "f64",
        deserialize_char => "char",
        deserialize_str => "string",
        deserialize_string => "string",
        deserialize_bytes => "bytes",
        deserialize_byte_buf => "bytes",
        deserialize_option => "option",
        deserialize_unit => "unit",
        deserialize_seq => "sequence",
        deserialize_identifier => "identifier",
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_tuple<V>(self, _len: usize, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::struct_pointer("tuple"))
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        _visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::struct_pointer("tuple struct"))
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let entries: Vec<(&str, &str)> = self.params.iter().collect();
        visitor.visit_map(EntryAccess {
            iter: entries.into_iter(),
            value: None,
        })
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let bindings = Bindings::resolve(fields)?;
        let names: Vec<String> = bindings.into_iter().filter(|n| self.feeds(n)).collect();
        tracing::trace!(record = name, fields = names.len(), "decoding record");
        visitor.visit_map(FieldAccess {
            params: self.params,
            names: names.into_iter(),
            current: None,
        })
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::struct_pointer("enum"))
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

/// Walks the struct bindings selected for decoding.
struct FieldAccess<'a> {
    params: &'a ParameterMap,
    names: std::vec::IntoIter<String>,
    current: Option<String>,
}

impl<'de, 'a> de::MapAccess<'de> for FieldAccess<'a> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.names.next() {
            Some(name) => {
                let key: StrDeserializer<'_, Error> = name.as_str().into_deserializer();
                let key = seed.deserialize(key)?;
                self.current = Some(name);
                Ok(Some(key))
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        let name = self
            .current
            .take()
            .ok_or_else(|| Error::custom("next_value_seed called before next_key_seed"))?;
        let raw = self.params.find(&name);
        tracing::trace!(field = %name, present = raw.is_some(), "decoding field");
        seed.deserialize(FieldDeserializer { field: &name, raw })
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.names.len())
    }
}

/// Walks every entry of the map, for string-keyed map records.
struct EntryAccess<'a> {
    iter: std::vec::IntoIter<(&'a str, &'a str)>,
    value: Option<(&'a str, &'a str)>,
}

impl<'de, 'a> de::MapAccess<'de> for EntryAccess<'a> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((name, value)) => {
                self.value = Some((name, value));
                let key: StrDeserializer<'_, Error> = name.into_deserializer();
                seed.deserialize(key).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some((name, value)) => seed.deserialize(FieldDeserializer {
                field: name,
                raw: Some(value),
            }),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

/// Coerces one raw value (or its absence) into whatever the field asks for.
struct FieldDeserializer<'f> {
    field: &'f str,
    raw: Option<&'f str>,
}

impl FieldDeserializer<'_> {
    fn scalar<T: Scalar + Default>(&self) -> Result<T> {
        match self.raw {
            Some(raw) => coerce(self.field, raw),
            None => Ok(T::default()),
        }
    }

    fn unsupported(&self, found: &str) -> Error {
        Error::unsupported_type(self.field, found)
    }
}

macro_rules! deserialize_scalar {
    ($($method:ident => $visit:ident),* $(,)?) => {$(
        fn $method<V>(self, visitor: V) -> Result<V::Value>
        where
            V: Visitor<'de>,
        {
            visitor.$visit(self.scalar()?)
        }
    )*};
}

macro_rules! unsupported_field {
    ($($method:ident => $found:expr),* $(,)?) => {$(
        fn $method<V>(self, _visitor: V) -> Result<V::Value>
        where
            V: Visitor<'de>,
        {
            Err(self.unsupported($found))
        }
    )*};
}

impl<'de, 'f> de::Deserializer<'de> for FieldDeserializer<'f> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    deserialize_scalar! {
        deserialize_i8 => visit_i8,
        deserialize_i16 => visit_i16,
        deserialize_i32 => visit_i32,
        deserialize_i64 => visit_i64,
        deserialize_i128 => visit_i128,
        deserialize_u8 => visit_u8,
        deserialize_u16 => visit_u16,
        deserialize_u32 => visit_u32,
        deserialize_u64 => visit_u64,
        deserialize_u128 => visit_u128,
        deserialize_f32 => visit_f32,
        deserialize_f64 => visit_f64,
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_str(self.raw.unwrap_or_default())
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.raw {
            Some(_) => visitor.visit_some(self),
            None => visitor.visit_none(),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    unsupported_field! {
        deserialize_bool => "bool",
        deserialize_char => "char",
        deserialize_bytes => "bytes",
        deserialize_byte_buf => "bytes",
        deserialize_unit => "unit",
        deserialize_seq => "sequence",
        deserialize_map => "map",
        deserialize_identifier => "identifier",
    }

    fn deserialize_unit_struct<V>(self, name: &'static str, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(self.unsupported(name))
    }

    fn deserialize_tuple<V>(self, _len: usize, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(self.unsupported("tuple"))
    }

    fn deserialize_tuple_struct<V>(
        self,
        name: &'static str,
        _len: usize,
        _visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(self.unsupported(name))
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        _fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(self.unsupported(name))
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        _variants: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(self.unsupported(name))
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }
}
