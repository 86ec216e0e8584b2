use thiserror::Error;

/// Errors produced while moving objects between wire payloads and typed
/// values.
///
/// Decoding errors carry the wire name of the object being decoded and,
/// where it applies, the offending field, so a caller three levels up can
/// still tell which part of a nested payload was bad.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("payload has invalid shape: {0}")]
    InvalidInputShape(#[from] ShapeMismatch),
    #[error("missing required field `{field}` in {object} payload")]
    MissingRequiredField {
        object: &'static str,
        field: &'static str,
    },
    #[error("field `{field}` of {object} does not match its declared type: {source}")]
    FieldMismatch {
        object: &'static str,
        field: &'static str,
        source: serde_json::Error,
    },
    #[error("could not encode {object} as JSON: {source}")]
    Encode {
        object: &'static str,
        source: serde_json::Error,
    },
}

/// The ways an incoming payload can fail normalization to the canonical
/// mapping form.
#[derive(Debug, Error)]
pub enum ShapeMismatch {
    #[error("expected a JSON object, found {0}")]
    UnexpectedType(&'static str),
    #[error("text is not valid JSON: {0}")]
    MalformedText(#[source] serde_json::Error),
}
