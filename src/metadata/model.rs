//! Aggregated per-entry metadata record.
//!
//! Flat [`FieldRecord`]s from the provider are reshaped into the nested
//! groups consumers read: `filesystem`, `external`, `thumbnail` and `media`.

use chrono::{DateTime, Utc};
use filemeta_common::ImageTransform;
use serde::{Deserialize, Serialize};

use super::field::{FieldName, FieldRecord};

/// Metadata for one entry, grouped by origin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedMetadata {
    pub filesystem: FilesystemGroup,
    pub external: ExternalGroup,
    pub thumbnail: ThumbnailGroup,
    pub media: MediaGroup,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesystemGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_icon_url: Option<String>,
    /// Whether the entry's content is available. Missing means `false`.
    #[serde(default)]
    pub present: bool,
}

/// Content thumbnail; only filled for present images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<ImageTransform>,
}

impl ThumbnailGroup {
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.transform.is_none()
    }
}

/// Media properties; only filled for present images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_transform: Option<ImageTransform>,
}

impl MediaGroup {
    pub fn is_empty(&self) -> bool {
        self.image_transform.is_none()
    }
}

impl AggregatedMetadata {
    /// Build the base record from a first-pass fetch; `thumbnail` and
    /// `media` start empty.
    pub fn from_base_record(record: &FieldRecord) -> Self {
        Self {
            filesystem: FilesystemGroup {
                modification_time: record.time(&FieldName::ModificationTime),
            },
            external: ExternalGroup {
                thumbnail_url: record.text(&FieldName::ThumbnailUrl).map(str::to_string),
                custom_icon_url: record.text(&FieldName::CustomIconUrl).map(str::to_string),
                present: record.flag(&FieldName::Present).unwrap_or(false),
            },
            thumbnail: ThumbnailGroup::default(),
            media: MediaGroup::default(),
        }
    }

    /// Merge a content-pass fetch into the `thumbnail` and `media` groups.
    ///
    /// Every slot is overwritten, so a field missing from `record` clears it.
    pub fn apply_content_record(&mut self, record: &FieldRecord) {
        self.thumbnail.url = record
            .text(&FieldName::ContentThumbnailUrl)
            .map(str::to_string);
        self.thumbnail.transform = record.transform(&FieldName::ContentThumbnailTransform);
        self.media.image_transform = record.transform(&FieldName::ContentImageTransform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn base_record_fills_filesystem_and_external() {
        let mtime = Utc.with_ymd_and_hms(2015, 6, 1, 8, 30, 0).unwrap();
        let record = FieldRecord::new()
            .with(FieldName::ModificationTime, mtime)
            .with(FieldName::ThumbnailUrl, "https://thumbs.example.com/1")
            .with(FieldName::CustomIconUrl, "https://icons.example.com/doc")
            .with(FieldName::Present, true);

        let meta = AggregatedMetadata::from_base_record(&record);
        assert_eq!(meta.filesystem.modification_time, Some(mtime));
        assert_eq!(
            meta.external.thumbnail_url.as_deref(),
            Some("https://thumbs.example.com/1")
        );
        assert_eq!(
            meta.external.custom_icon_url.as_deref(),
            Some("https://icons.example.com/doc")
        );
        assert!(meta.external.present);
        assert!(meta.thumbnail.is_empty());
        assert!(meta.media.is_empty());
    }

    #[test]
    fn missing_present_means_absent() {
        let meta = AggregatedMetadata::from_base_record(&FieldRecord::new());
        assert!(!meta.external.present);
        assert_eq!(meta, AggregatedMetadata::default());
    }

    #[test]
    fn content_record_fills_thumbnail_and_media() {
        let mut meta = AggregatedMetadata::default();
        let rotate = ImageTransform::new(1, 1, 1);
        meta.apply_content_record(
            &FieldRecord::new()
                .with(FieldName::ContentThumbnailUrl, "file:///p/a.jpg")
                .with(FieldName::ContentThumbnailTransform, rotate)
                .with(FieldName::ContentImageTransform, rotate),
        );

        assert_eq!(meta.thumbnail.url.as_deref(), Some("file:///p/a.jpg"));
        assert_eq!(meta.thumbnail.transform, Some(rotate));
        assert_eq!(meta.media.image_transform, Some(rotate));
    }

    #[test]
    fn serializes_with_camel_case_groups() {
        let mtime = Utc.with_ymd_and_hms(2015, 6, 1, 8, 30, 0).unwrap();
        let mut meta = AggregatedMetadata::from_base_record(
            &FieldRecord::new()
                .with(FieldName::ModificationTime, mtime)
                .with(FieldName::Present, true),
        );
        meta.media.image_transform = Some(ImageTransform::new(-1, 1, 0));

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "filesystem": {"modificationTime": "2015-06-01T08:30:00Z"},
                "external": {"present": true},
                "thumbnail": {},
                "media": {"imageTransform": {"scaleX": -1, "scaleY": 1, "rotate90": 0}}
            })
        );
    }
}
