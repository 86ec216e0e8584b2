use botwire_macros::ApiObject;
use json_display::JsonDisplay;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{maybe::Maybe, media::photo_size::PhotoSize};

/// Descriptor for an audio file the client should treat as music.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder, ApiObject, JsonDisplay)]
pub struct Audio {
    pub file_id: String,
    pub file_unique_id: String,
    /// Duration of the audio in seconds as defined by the sender.
    pub duration: i64,
    /// Performer of the audio as defined by the sender or by audio tags.
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub performer: Maybe<String>,
    /// Title of the audio as defined by the sender or by audio tags.
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub title: Maybe<String>,
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub mime_type: Maybe<String>,
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub file_size: Maybe<i64>,
    /// Thumbnail of the album cover to which the music file belongs.
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub thumb: Maybe<PhotoSize>,
}
