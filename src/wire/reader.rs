//! Path-aware access to the fields of a structured value.
//!
//! Leaf fields go through their `serde` implementations; the reader only adds
//! the bookkeeping needed to report *where* a value failed and to tell an
//! absent key apart from a `null` one.

use super::DecodeError;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// Name of a JSON value's shape, used as the `actual` half of
/// [`DecodeErrorType::MalformedField`].
///
/// [`DecodeErrorType::MalformedField`]: super::DecodeErrorType::MalformedField
pub(crate) const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Type name of `T` without module paths, e.g. `Vec<Id<UserMarker>>`.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);

            continue;
        }

        out.push(c);

        if !(c.is_alphanumeric() || c == '_') {
            segment_start = out.len();
        }
    }

    out
}

pub(crate) fn key_path(path: &str, key: &str) -> String {
    format!("{path}.{key}")
}

pub(crate) fn index_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

/// Deserialize a leaf value, reporting failures against `path`.
pub(crate) fn deserialize_at<T: DeserializeOwned>(
    value: &Value,
    path: &str,
) -> Result<T, DecodeError> {
    T::deserialize(value).map_err(|source| {
        DecodeError::malformed(path, short_type_name::<T>(), value_kind(value)).with_source(source)
    })
}

/// Serialize a leaf value.
///
/// Model types only contain string-keyed maps and serialize infallibly.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Value {
    match serde_json::to_value(value) {
        Ok(json) => json,
        Err(source) => {
            tracing::error!(error = %source, "model value failed to serialize");

            Value::Null
        }
    }
}

/// Read-only view over an object with the path it was found at.
pub(crate) struct ObjectReader<'a> {
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> ObjectReader<'a> {
    pub fn new(value: &'a Value, path: impl Into<String>) -> Result<Self, DecodeError> {
        let path = path.into();

        match value {
            Value::Object(map) => Ok(Self { path, map }),
            other => Err(DecodeError::malformed(path, "object", value_kind(other))),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn child(&self, key: &str) -> String {
        key_path(&self.path, key)
    }

    /// Raw value of a key, `null` included.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    /// Integer `type` discriminant of the object.
    ///
    /// Any integer in the signed 64-bit range is accepted; mapping it to a
    /// known variant is left to the caller.
    pub fn discriminant(&self) -> Result<i64, DecodeError> {
        self.map
            .get("type")
            .and_then(Value::as_i64)
            .ok_or_else(|| DecodeError::unrecognized_discriminant(self.child("type")))
    }

    /// Key that must be present and non-null.
    pub fn required<T: DeserializeOwned>(&self, key: &str) -> Result<T, DecodeError> {
        match self.map.get(key) {
            Some(value) => deserialize_at(value, &self.child(key)),
            None => Err(self.missing::<T>(key)),
        }
    }

    /// Key that may be absent. A `null` is read as absent.
    pub fn optional<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DecodeError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => deserialize_at(value, &self.child(key)).map(Some),
        }
    }

    /// Key that must be present but may be `null`.
    pub fn nullable<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DecodeError> {
        match self.map.get(key) {
            None => Err(self.missing::<T>(key)),
            Some(Value::Null) => Ok(None),
            Some(value) => deserialize_at(value, &self.child(key)).map(Some),
        }
    }

    /// Key that may be absent, `null`, or a value; all three are kept apart.
    pub fn optional_nullable<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<Option<T>>, DecodeError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(Value::Null) => Ok(Some(None)),
            Some(value) => deserialize_at(value, &self.child(key)).map(|v| Some(Some(v))),
        }
    }

    /// Sequence where absence and `null` both mean empty.
    pub fn list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, DecodeError> {
        self.optional(key).map(Option::unwrap_or_default)
    }

    /// Boolean that defaults to `false` when absent.
    pub fn flag(&self, key: &str) -> Result<bool, DecodeError> {
        self.optional(key).map(Option::unwrap_or_default)
    }

    /// Reader over a nested object that must be present.
    pub fn object(&self, key: &str) -> Result<ObjectReader<'a>, DecodeError> {
        match self.map.get(key) {
            Some(value) => ObjectReader::new(value, self.child(key)),
            None => Err(DecodeError::malformed(self.child(key), "object", "missing")),
        }
    }

    /// Elements of an array key for decoders that need their own dispatch.
    ///
    /// Absent and `null` read as `None`.
    pub fn array(&self, key: &str) -> Result<Option<&'a [Value]>, DecodeError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(other) => Err(DecodeError::malformed(
                self.child(key),
                "array",
                value_kind(other),
            )),
        }
    }

    /// Every key not named in `known`, cloned out of the input.
    ///
    /// Named keys holding `null` are kept as well, since [`Self::optional`]
    /// reads them as absent and an encoder would otherwise drop them.
    pub fn remaining(&self, known: &[&str]) -> Map<String, Value> {
        self.map
            .iter()
            .filter(|(key, value)| value.is_null() || !known.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn missing<T>(&self, key: &str) -> DecodeError {
        DecodeError::malformed(self.child(key), short_type_name::<T>(), "missing")
    }
}

/// Builder for an encoded object.
#[derive(Debug, Default)]
pub(crate) struct ObjectWriter {
    map: Map<String, Value>,
}

impl ObjectWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always write the key; `None` values are written as `null`.
    pub fn field<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> &mut Self {
        self.map.insert(key.to_owned(), to_json(value));

        self
    }

    pub fn value(&mut self, key: &str, value: Value) -> &mut Self {
        self.map.insert(key.to_owned(), value);

        self
    }

    /// Write the key only when a value is present.
    pub fn optional<T: Serialize>(&mut self, key: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.field(key, value);
        }

        self
    }

    /// Write nothing, `null`, or the value.
    pub fn optional_nullable<T: Serialize>(
        &mut self,
        key: &str,
        value: &Option<Option<T>>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.field(key, value);
        }

        self
    }

    /// Write a sequence only when it has elements.
    pub fn non_empty<T: Serialize>(&mut self, key: &str, values: &[T]) -> &mut Self {
        if !values.is_empty() {
            self.field(key, values);
        }

        self
    }

    /// Write a boolean only when it is set.
    pub fn flag(&mut self, key: &str, value: bool) -> &mut Self {
        if value {
            self.value(key, Value::Bool(true));
        }

        self
    }

    pub fn extend(&mut self, extra: &Map<String, Value>) -> &mut Self {
        for (key, value) in extra {
            self.map.insert(key.clone(), value.clone());
        }

        self
    }

    pub fn finish(&mut self) -> Value {
        Value::Object(std::mem::take(&mut self.map))
    }
}
