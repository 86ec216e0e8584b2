use botwire_macros::ApiObject;
use json_display::JsonDisplay;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::maybe::Maybe;

/// Descriptor for a voice message.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder, ApiObject, JsonDisplay)]
pub struct Voice {
    pub file_id: String,
    pub file_unique_id: String,
    pub duration: i64,
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub mime_type: Maybe<String>,
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub file_size: Maybe<i64>,
}
