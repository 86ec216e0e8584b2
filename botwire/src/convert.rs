use std::borrow::Cow;

use derive_more::From;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    error::{ShapeMismatch, WireError},
    maybe::Maybe,
};

/// Canonical in-memory shape of a payload: a JSON mapping with string keys.
pub type JsonObject = serde_json::Map<String, Value>;

/// Raw payload accepted by the decoding entry points.
///
/// Callers hand over either JSON text or something already parsed; both are
/// funneled through [`JsonInput::into_object`] before any field is looked at,
/// so the per-object decoding logic only ever sees the canonical mapping
/// form.
#[derive(Debug, From)]
pub enum JsonInput<'a> {
    Text(Cow<'a, str>),
    Parsed(Value),
}

impl<'a> From<&'a str> for JsonInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for JsonInput<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl From<JsonObject> for JsonInput<'_> {
    fn from(object: JsonObject) -> Self {
        Self::Parsed(Value::Object(object))
    }
}

impl JsonInput<'_> {
    /// Normalizes the input to the canonical mapping form.
    ///
    /// Text is parsed first. Any input that is not a JSON object at the top
    /// level, malformed text included, is rejected with
    /// [`WireError::InvalidInputShape`].
    pub fn into_object(self) -> Result<JsonObject, WireError> {
        log::trace!("JsonInput::into_object >> input: {:?}", self);

        let value = match self {
            Self::Text(text) => {
                serde_json::from_str(&text).map_err(ShapeMismatch::MalformedText)?
            }
            Self::Parsed(value) => value,
        };

        match value {
            Value::Object(object) => Ok(object),
            other => Err(ShapeMismatch::UnexpectedType(json_kind(&other)).into()),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Wire-level identity of an object: the name used in error reports and the
/// keys a payload must carry for decoding to succeed.
pub trait WireObject {
    const NAME: &'static str;
    const REQUIRED: &'static [&'static str];
}

/// Decoding capability: building a typed object out of a raw payload.
pub trait FromJson: Sized {
    /// Decodes from JSON text or an already-parsed value.
    fn from_json<'a>(input: impl Into<JsonInput<'a>>) -> Result<Self, WireError> {
        Self::from_object(input.into().into_object()?)
    }

    /// Decodes from the canonical mapping form.
    ///
    /// Keys with no matching field are ignored; whatever the service added
    /// since this catalog was written must not break decoding.
    fn from_object(object: JsonObject) -> Result<Self, WireError>;
}

/// Encoding capability: rendering the object as compact JSON text.
pub trait ToJson: Serialize + WireObject {
    fn to_json(&self) -> Result<String, WireError> {
        serde_json::to_string(self).map_err(|e| WireError::Encode {
            object: Self::NAME,
            source: e,
        })
    }
}

/// Encoding capability: rendering the object as the canonical mapping form,
/// ready to be merged into a larger request body.
pub trait ToObject: Serialize + WireObject {
    fn to_object(&self) -> Result<JsonObject, WireError> {
        let value = serde_json::to_value(self).map_err(|e| WireError::Encode {
            object: Self::NAME,
            source: e,
        })?;

        match value {
            Value::Object(object) => Ok(object),
            other => Err(ShapeMismatch::UnexpectedType(json_kind(&other)).into()),
        }
    }
}

/// Pulls a required field out of the payload.
///
/// `owner` is the wire name of the object being decoded and only feeds error
/// reports. A missing key is an error in its own right; a present key that
/// cannot be decoded into `T` is another.
pub fn required_field<T>(
    object: &mut JsonObject,
    owner: &'static str,
    key: &'static str,
) -> Result<T, WireError>
where
    T: DeserializeOwned,
{
    let value = object.remove(key).ok_or(WireError::MissingRequiredField {
        object: owner,
        field: key,
    })?;

    serde_json::from_value(value).map_err(|e| WireError::FieldMismatch {
        object: owner,
        field: key,
        source: e,
    })
}

/// Pulls an optional field out of the payload, keeping "key absent" and "key
/// null" apart.
pub fn maybe_field<T>(
    object: &mut JsonObject,
    owner: &'static str,
    key: &'static str,
) -> Result<Maybe<T>, WireError>
where
    T: DeserializeOwned,
{
    match object.remove(key) {
        None => Ok(Maybe::Absent),
        Some(Value::Null) => Ok(Maybe::Null),
        Some(value) => serde_json::from_value(value).map(Maybe::Value).map_err(|e| {
            WireError::FieldMismatch {
                object: owner,
                field: key,
                source: e,
            }
        }),
    }
}
