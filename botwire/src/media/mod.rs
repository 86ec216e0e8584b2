//! Module containing the descriptors for media files the service stores and
//! re-serves: every kind carries the `file_id`/`file_unique_id` pair plus
//! whatever dimensions and metadata apply to it.

pub mod animation;
pub mod audio;
pub mod document;
pub mod photo_size;
pub mod video;
pub mod video_note;
pub mod voice;

pub use animation::Animation;
pub use audio::Audio;
pub use document::Document;
pub use photo_size::PhotoSize;
pub use video::Video;
pub use video_note::VideoNote;
pub use voice::Voice;
