//! Record serialization.
//!
//! This module provides the [`Serializer`] that turns a record implementing
//! `Serialize` into a [`ParameterMap`], one entry per bound field. Field
//! values are rendered by the coercion engine; a field whose value is
//! `None` is left out.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde::Serialize;
//! use text_parameters::{to_params, to_string};
//!
//! #[derive(Serialize)]
//! struct Transfer {
//!     #[serde(rename = "packet-received")]
//!     received: i32,
//!     #[serde(rename = "transfer-time")]
//!     time: f64,
//!     #[serde(skip)]
//!     scratch: String,
//! }
//!
//! let transfer = Transfer { received: 1024, time: 12.345, scratch: "unused".into() };
//!
//! let params = to_params(&transfer).unwrap();
//! assert_eq!(params.get("packet-received"), "1024");
//! assert!(!params.contains("scratch"));
//!
//! assert_eq!(to_string(&transfer).unwrap(), "packet-received: 1024\ntransfer-time: 12.345\n");
//! ```
//!
//! Serializing anything that is not a record fails with
//! [`Error::StructPointer`]:
//!
//! ```rust
//! use text_parameters::to_string;
//!
//! assert!(to_string(&42).unwrap_err().is_usage());
//! ```

use serde::ser::{self, Impossible, Serialize};

use crate::binding::Bindings;
use crate::coerce::render;
use crate::{Error, ParameterMap, Result};

/// Serializes a record into a [`ParameterMap`].
pub struct Serializer;

macro_rules! not_a_record {
    ($($method:ident($ty:ty) => $found:expr),* $(,)?) => {$(
        fn $method(self, _v: $ty) -> Result<ParameterMap> {
            Err(Error::struct_pointer($found))
        }
    )*};
}

impl ser::Serializer for Serializer {
    type Ok = ParameterMap;
    type Error = Error;

    type SerializeSeq = Impossible<ParameterMap, Error>;
    type SerializeTuple = Impossible<ParameterMap, Error>;
    type SerializeTupleStruct = Impossible<ParameterMap, Error>;
    type SerializeTupleVariant = Impossible<ParameterMap, Error>;
    type SerializeMap = MapSerializer;
    type SerializeStruct = StructSerializer;
    type SerializeStructVariant = Impossible<ParameterMap, Error>;

    not_a_record! {
        serialize_bool(bool) => "bool",
        serialize_i8(i8) => "i8",
        serialize_i16(i16) => "i16",
        serialize_i32(i32) => "i32",
        serialize_i64(i64) => "i64",
        serialize_i128(i128) => "i128",
        serialize_u8(u8) => "u8",
        serialize_u16(u16) => "u16",
        serialize_u32(u32) => "u32",
        serialize_u64(u64) => "u64",
        serialize_u128(u128) => "u128",
        serialize_f32(f32) => "f32",
        serialize_f64(f64) => "f64",
        serialize_char(char) => "char",
        serialize_str(&str) => "string",
        serialize_bytes(&[u8]) => "bytes",
    }

    fn serialize_none(self) -> Result<ParameterMap> {
        Err(Error::struct_pointer("option"))
    }

    fn serialize_some<T>(self, _value: &T) -> Result<ParameterMap>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::struct_pointer("option"))
    }

    fn serialize_unit(self) -> Result<ParameterMap> {
        Err(Error::struct_pointer("unit"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<ParameterMap> {
        Ok(ParameterMap::new())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<ParameterMap> {
        Err(Error::struct_pointer("enum"))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<ParameterMap>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<ParameterMap>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::struct_pointer("enum"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::struct_pointer("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::struct_pointer("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::struct_pointer("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::struct_pointer("enum"))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapSerializer {
            params: ParameterMap::with_capacity(len.unwrap_or(0)),
            bindings: Bindings::new(),
            current_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        tracing::trace!(record = name, fields = len, "encoding record");
        Ok(StructSerializer {
            params: ParameterMap::with_capacity(len),
            bindings: Bindings::new(),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::struct_pointer("enum"))
    }
}

/// Collects the fields of a struct.
pub struct StructSerializer {
    params: ParameterMap,
    bindings: Bindings,
}

impl ser::SerializeStruct for StructSerializer {
    type Ok = ParameterMap;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.bindings.bind(key)?;
        if let Some(text) = value.serialize(FieldSerializer { field: key })? {
            self.params.set(key, text);
        }
        Ok(())
    }

    fn end(self) -> Result<ParameterMap> {
        Ok(self.params)
    }
}

/// Collects the entries of a string-keyed map.
pub struct MapSerializer {
    params: ParameterMap,
    bindings: Bindings,
    current_key: Option<String>,
}

impl ser::SerializeMap for MapSerializer {
    type Ok = ParameterMap;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let name = key
            .serialize(FieldSerializer { field: "map key" })?
            .ok_or_else(|| Error::unsupported_type("map key", "option"))?;
        self.bindings.bind(&name)?;
        self.current_key = Some(name);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let name = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called before serialize_key"))?;
        if let Some(text) = value.serialize(FieldSerializer { field: &name })? {
            self.params.set(name, text);
        }
        Ok(())
    }

    fn end(self) -> Result<ParameterMap> {
        Ok(self.params)
    }
}

/// Renders one field value; `None` means the field is omitted.
struct FieldSerializer<'f> {
    field: &'f str,
}

impl FieldSerializer<'_> {
    fn unsupported(&self, found: &str) -> Error {
        Error::unsupported_type(self.field, found)
    }
}

macro_rules! serialize_scalar {
    ($($method:ident($ty:ty)),* $(,)?) => {$(
        fn $method(self, v: $ty) -> Result<Option<String>> {
            Ok(Some(render(&v)))
        }
    )*};
}

impl<'f> ser::Serializer for FieldSerializer<'f> {
    type Ok = Option<String>;
    type Error = Error;

    type SerializeSeq = Impossible<Option<String>, Error>;
    type SerializeTuple = Impossible<Option<String>, Error>;
    type SerializeTupleStruct = Impossible<Option<String>, Error>;
    type SerializeTupleVariant = Impossible<Option<String>, Error>;
    type SerializeMap = Impossible<Option<String>, Error>;
    type SerializeStruct = Impossible<Option<String>, Error>;
    type SerializeStructVariant = Impossible<Option<String>, Error>;

    serialize_scalar! {
        serialize_i8(i8),
        serialize_i16(i16),
        serialize_i32(i32),
        serialize_i64(i64),
        serialize_i128(i128),
        serialize_u8(u8),
        serialize_u16(u16),
        serialize_u32(u32),
        serialize_u64(u64),
        serialize_u128(u128),
        serialize_f32(f32),
        serialize_f64(f64),
    }

    fn serialize_str(self, v: &str) -> Result<Option<String>> {
        Ok(Some(v.to_string()))
    }

    fn serialize_bool(self, _v: bool) -> Result<Option<String>> {
        Err(self.unsupported("bool"))
    }

    fn serialize_char(self, _v: char) -> Result<Option<String>> {
        Err(self.unsupported("char"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Option<String>> {
        Err(self.unsupported("bytes"))
    }

    fn serialize_none(self) -> Result<Option<String>> {
        Ok(None)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Option<String>>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Option<String>> {
        Err(self.unsupported("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Option<String>> {
        Err(self.unsupported(name))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Option<String>> {
        Err(self.unsupported(name))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Option<String>>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Option<String>>
    where
        T: ?Sized + Serialize,
    {
        Err(self.unsupported(name))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(self.unsupported("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(self.unsupported("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(self.unsupported(name))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(self.unsupported(name))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(self.unsupported("map"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(self.unsupported(name))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(self.unsupported(name))
    }
}
