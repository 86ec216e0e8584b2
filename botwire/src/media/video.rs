use botwire_macros::ApiObject;
use json_display::JsonDisplay;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{maybe::Maybe, media::photo_size::PhotoSize};

/// Descriptor for a video file.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder, ApiObject, JsonDisplay)]
pub struct Video {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i64,
    pub height: i64,
    /// Duration of the video in seconds as defined by the sender.
    pub duration: i64,
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub thumb: Maybe<PhotoSize>,
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub mime_type: Maybe<String>,
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub file_size: Maybe<i64>,
}
