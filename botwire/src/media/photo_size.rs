use botwire_macros::ApiObject;
use json_display::JsonDisplay;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::maybe::Maybe;

/// Descriptor for one rendition of a photo, also used for the thumbnails
/// attached to other media descriptors.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder, ApiObject, JsonDisplay)]
pub struct PhotoSize {
    /// Identifier for this file, which can be used to download or reuse it.
    pub file_id: String,
    /// Unique identifier for this file, supposed to be stable over time and
    /// across bots. Cannot be used to download or reuse the file.
    pub file_unique_id: String,
    /// Photo width.
    pub width: i64,
    /// Photo height.
    pub height: i64,
    /// File size in bytes.
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub file_size: Maybe<i64>,
}

#[cfg(test)]
pub mod tests {
    use serde_json::json;

    use super::*;
    use crate::misc::test_utils;

    pub fn make_minimal_photo_size() -> PhotoSize {
        PhotoSize::builder()
            .file_id("AgACAgQAAxkBAAIBQ2Rl".to_owned())
            .file_unique_id("AQADcwwAAnNwMVNy".to_owned())
            .width(90)
            .height(51)
            .build()
    }

    #[test]
    fn test_minimal_photo_size() {
        let photo_size = make_minimal_photo_size();
        let expected = json!({
            "file_id": photo_size.file_id,
            "file_unique_id": photo_size.file_unique_id,
            "width": 90,
            "height": 51,
        });

        test_utils::test_wire_object(photo_size, expected);
    }

    #[test]
    fn test_full_photo_size() {
        let photo_size = PhotoSize::builder()
            .file_id("AgACAgQAAxkBAAIBQ2Rl".to_owned())
            .file_unique_id("AQADcwwAAnNwMVNy".to_owned())
            .width(90)
            .height(51)
            .file_size(2123)
            .build();

        let expected = json!({
            "file_id": photo_size.file_id,
            "file_unique_id": photo_size.file_unique_id,
            "width": 90,
            "height": 51,
            "file_size": 2123,
        });

        test_utils::test_wire_object(photo_size, expected);
    }

    #[test]
    fn test_required_keys_reported() {
        let payload = json!({
            "file_id": "AgACAgQAAxkBAAIBQ2Rl",
            "file_unique_id": "AQADcwwAAnNwMVNy",
            "width": 90,
            "height": 51,
        });

        test_utils::test_missing_required::<PhotoSize>(payload);
    }
}
