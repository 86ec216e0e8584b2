use botwire_macros::ApiObject;
use json_display::JsonDisplay;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{maybe::Maybe, media::photo_size::PhotoSize};

/// Descriptor for an animation file (GIF or H.264/MPEG-4 AVC video without
/// sound).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder, ApiObject, JsonDisplay)]
pub struct Animation {
    /// Identifier for this file, which can be used to download or reuse it.
    pub file_id: String,
    /// Unique identifier for this file, supposed to be stable over time and
    /// across bots. Cannot be used to download or reuse the file.
    pub file_unique_id: String,
    /// Video width as defined by the sender.
    pub width: i64,
    /// Video height as defined by the sender.
    pub height: i64,
    /// Duration of the video in seconds as defined by the sender.
    pub duration: i64,
    /// Animation thumbnail as defined by the sender.
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub thumb: Maybe<PhotoSize>,
    /// Original filename as defined by the sender.
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub file_name: Maybe<String>,
    /// MIME type of the file as defined by the sender.
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub mime_type: Maybe<String>,
    /// File size in bytes.
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub file_size: Maybe<i64>,
}
