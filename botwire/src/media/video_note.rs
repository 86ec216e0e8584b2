use botwire_macros::ApiObject;
use json_display::JsonDisplay;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{maybe::Maybe, media::photo_size::PhotoSize};

/// Descriptor for a video note, the short round video message recorded
/// in-app.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder, ApiObject, JsonDisplay)]
pub struct VideoNote {
    pub file_id: String,
    pub file_unique_id: String,
    /// Video width and height: the diameter of the round message.
    pub length: i64,
    pub duration: i64,
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub thumb: Maybe<PhotoSize>,
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub file_size: Maybe<i64>,
}
