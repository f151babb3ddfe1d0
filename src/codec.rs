//! Stream façade: [`Encoder`] and [`Decoder`].
//!
//! An `Encoder` writes one record per call as a complete text body; a
//! `Decoder` reads its stream to the end and decodes a record from it. Both
//! own the stream they were created with and hand it back through
//! `into_inner`.

use std::io;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{de, marshal, ser, Error, MarshalOptions, ParameterMap, Result};

/// Writes records to a byte stream.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use text_parameters::Encoder;
///
/// #[derive(Serialize)]
/// struct Reading {
///     #[serde(rename = "Foo")]
///     foo: f64,
///     #[serde(rename = "Piyo")]
///     piyo: i32,
///     #[serde(rename = "barbaz")]
///     bar: String,
/// }
///
/// let mut encoder = Encoder::new(Vec::new());
/// encoder
///     .encode(&Reading { foo: 1.41421356, piyo: 12345, bar: "golang".into() })
///     .unwrap();
///
/// let body = String::from_utf8(encoder.into_inner()).unwrap();
/// assert_eq!(body, "Foo: 1.41421356\nPiyo: 12345\nbarbaz: golang\n");
/// ```
pub struct Encoder<W> {
    writer: W,
    options: MarshalOptions,
}

impl<W: io::Write> Encoder<W> {
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, MarshalOptions::default())
    }

    pub fn with_options(writer: W, options: MarshalOptions) -> Self {
        Encoder { writer, options }
    }

    /// Encodes `value` and writes the resulting body to the stream.
    ///
    /// # Errors
    ///
    /// Returns a usage error if `value` is not a record or has a field that
    /// cannot be coded, and [`Error::Io`] if writing fails. Nothing is
    /// written when encoding fails.
    pub fn encode<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let params = value.serialize(ser::Serializer)?;
        let body = marshal::marshal_with_options(&params, &self.options);
        self.writer
            .write_all(body.as_bytes())
            .map_err(|e| Error::io(&e.to_string()))?;
        tracing::debug!(entries = params.len(), bytes = body.len(), "encoded record");
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Reads records from a byte stream.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use text_parameters::Decoder;
///
/// #[derive(Deserialize, Debug)]
/// struct Reading {
///     #[serde(rename = "Foo")]
///     foo: f64,
///     #[serde(rename = "barbaz")]
///     bar: String,
///     #[serde(rename = "Piyo")]
///     piyo: i32,
/// }
///
/// let body = "Foo: 3.14\nbarbaz: golang\nPiyo: 123";
/// let reading: Reading = Decoder::new(body.as_bytes()).decode().unwrap();
/// assert_eq!(reading.foo, 3.14);
/// assert_eq!(reading.bar, "golang");
/// assert_eq!(reading.piyo, 123);
/// ```
pub struct Decoder<R> {
    reader: R,
}

impl<R: io::Read> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Decoder { reader }
    }

    fn read_params(&mut self) -> Result<ParameterMap> {
        marshal::unmarshal(&mut self.reader)
    }

    /// Reads the stream to its end and decodes a fresh record.
    ///
    /// Bound fields with no entry in the body get their serde default when
    /// they declare one, and their zero value otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] or [`Error::Format`] if the body cannot be read
    /// or parsed, a usage error if `T` is not a codable record, and
    /// [`Error::FieldType`] for the first field whose value does not fit.
    pub fn decode<T>(&mut self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let params = self.read_params()?;
        let value = de::decode(&params)?;
        tracing::debug!(entries = params.len(), "decoded record");
        Ok(value)
    }

    /// Reads the stream to its end and decodes it over an existing record.
    ///
    /// Fields with no entry in the body keep their current value, and fields
    /// marked `#[serde(skip)]` are never touched. Fields are written in
    /// declaration order; when one fails, the fields before it stay written.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde::{Deserialize, Serialize};
    /// use text_parameters::Decoder;
    ///
    /// #[derive(Serialize, Deserialize)]
    /// struct Window {
    ///     width: u32,
    ///     height: u32,
    /// }
    ///
    /// let mut window = Window { width: 640, height: 480 };
    /// Decoder::new("width: 800".as_bytes()).decode_into(&mut window).unwrap();
    /// assert_eq!((window.width, window.height), (800, 480));
    /// ```
    ///
    /// # Errors
    ///
    /// As for [`Decoder::decode`]. The usage check on `target` happens
    /// before the stream is read.
    pub fn decode_into<T>(&mut self, target: &mut T) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        let current = target.serialize(ser::Serializer)?;
        let incoming = self.read_params()?;
        de::decode_into(current, &incoming, target)?;
        tracing::debug!(entries = incoming.len(), "decoded record in place");
        Ok(())
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
