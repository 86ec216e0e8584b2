use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tri-state optional for wire fields, keeping a key that was never sent
/// apart from a key sent with an explicit `null`. [`Option`] alone cannot
/// express that difference, and collapsing it loses information the service
/// actually put on the wire.
///
/// Decoding maps a missing key to [`Maybe::Absent`] and a `null` value to
/// [`Maybe::Null`]. On encoding, `Absent` fields are elided via
/// `#[serde(skip_serializing_if = "Maybe::is_absent")]`, while `Null` is
/// written out as `null`.
///
/// `From<Option<T>>` treats `None` as `Absent`, which is the right reading
/// for builders: an unset field is one that should not appear on the wire at
/// all.
#[derive(Clone, Debug, PartialEq)]
pub enum Maybe<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Maybe<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Absent => Maybe::Absent,
            Self::Null => Maybe::Null,
            Self::Value(v) => Maybe::Value(v),
        }
    }

    /// Collapses the absent-vs-null distinction, which is usually what a
    /// consumer wants once decoding is behind it.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Value(v) => v,
            _ => default,
        }
    }

    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Absent => Maybe::Absent,
            Self::Null => Maybe::Null,
            Self::Value(v) => Maybe::Value(f(v)),
        }
    }
}

// Absent regardless of T, so no Default bound on T.
impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Absent,
        }
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(v) => serializer.serialize_some(v),
            _ => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<T>::deserialize(deserializer)? {
            Some(v) => Ok(Self::Value(v)),
            None => Ok(Self::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Sample {
        #[serde(default)]
        #[serde(skip_serializing_if = "Maybe::is_absent")]
        field: Maybe<i64>,
    }

    #[test]
    fn test_absent_key_stays_absent() {
        let sample: Sample = serde_json::from_value(json!({})).unwrap();
        assert_eq!(sample.field, Maybe::Absent);
        assert_eq!(serde_json::to_value(&sample).unwrap(), json!({}));
    }

    #[test]
    fn test_null_key_stays_null() {
        let sample: Sample = serde_json::from_value(json!({ "field": null })).unwrap();
        assert_eq!(sample.field, Maybe::Null);
        assert_eq!(
            serde_json::to_value(&sample).unwrap(),
            json!({ "field": null })
        );
    }

    #[test]
    fn test_value_survives_roundtrip() {
        let sample: Sample = serde_json::from_value(json!({ "field": 42 })).unwrap();
        assert_eq!(sample.field, Maybe::Value(42));
        assert_eq!(
            serde_json::to_value(&sample).unwrap(),
            json!({ "field": 42 })
        );
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Maybe::from(Some(1)), Maybe::Value(1));
        assert_eq!(Maybe::<i64>::from(None), Maybe::Absent);

        assert_eq!(Maybe::Value(1).into_option(), Some(1));
        assert_eq!(Maybe::<i64>::Null.into_option(), None);
        assert_eq!(Maybe::<i64>::Absent.into_option(), None);
    }

    #[test]
    fn test_map_preserves_state() {
        assert_eq!(Maybe::Value(2).map(|v| v * 10), Maybe::Value(20));
        assert_eq!(Maybe::<i64>::Null.map(|v| v * 10), Maybe::Null);
        assert_eq!(Maybe::<i64>::Absent.map(|v| v * 10), Maybe::Absent);
    }
}
