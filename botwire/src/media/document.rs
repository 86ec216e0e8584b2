use botwire_macros::ApiObject;
use json_display::JsonDisplay;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{maybe::Maybe, media::photo_size::PhotoSize};

/// Descriptor for a general file, as opposed to the media kinds the service
/// gives dedicated handling to.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder, ApiObject, JsonDisplay)]
pub struct Document {
    pub file_id: String,
    pub file_unique_id: String,
    /// Document thumbnail as defined by the sender.
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub thumb: Maybe<PhotoSize>,
    /// Original filename as defined by the sender.
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub file_name: Maybe<String>,
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub mime_type: Maybe<String>,
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub file_size: Maybe<i64>,
}

#[cfg(test)]
pub mod tests {
    use serde_json::json;

    use super::*;
    use crate::{media::photo_size::tests::make_minimal_photo_size, misc::test_utils};

    pub fn make_full_document() -> Document {
        Document::builder()
            .file_id("BQACAgQAAxkBAAIBRWRn".to_owned())
            .file_unique_id("AgADdQwAAnNwMVN1".to_owned())
            .thumb(make_minimal_photo_size())
            .file_name("report.pdf".to_owned())
            .mime_type("application/pdf".to_owned())
            .file_size(912_406)
            .build()
    }

    #[test]
    fn test_full_document() {
        let document = make_full_document();
        let thumb = make_minimal_photo_size();
        let expected = json!({
            "file_id": document.file_id,
            "file_unique_id": document.file_unique_id,
            "thumb": {
                "file_id": thumb.file_id,
                "file_unique_id": thumb.file_unique_id,
                "width": 90,
                "height": 51,
            },
            "file_name": "report.pdf",
            "mime_type": "application/pdf",
            "file_size": 912_406,
        });

        test_utils::test_wire_object(document, expected);
    }

    #[test]
    fn test_required_keys_reported() {
        let payload = json!({
            "file_id": "BQACAgQAAxkBAAIBRWRn",
            "file_unique_id": "AgADdQwAAnNwMVN1",
        });

        test_utils::test_missing_required::<Document>(payload);
    }
}
