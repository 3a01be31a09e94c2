//! Metadata provider backed by the local file system.
//!
//! Serves `file:` entries by stat-ing them and, for content fields, reading
//! the EXIF orientation of images with the [`image`] crate. The external
//! fields (`thumbnailUrl`, `customIconUrl`) have no local source and are never
//! reported.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use filemeta_common::{Entry, Error, ImageTransform};
use futures::future::try_join_all;
use image::metadata::Orientation;
use image::{ImageDecoder, ImageReader};
use tracing::{debug, trace};

use crate::metadata::field::{FieldName, FieldRecord};
use crate::metadata::provider::MetadataProvider;

/// [`MetadataProvider`] for entries on the local file system.
#[derive(Debug, Clone)]
pub struct LocalFileSystemProvider {
    read_orientation: bool,
}

impl LocalFileSystemProvider {
    /// Create a provider that reads image orientation.
    pub fn new() -> Self {
        Self {
            read_orientation: true,
        }
    }

    /// Enable or disable decoding images to read their orientation.
    ///
    /// When disabled, transform fields are never reported.
    #[must_use]
    pub fn with_orientation(mut self, enabled: bool) -> Self {
        self.read_orientation = enabled;
        self
    }

    async fn probe(&self, entry: &Entry, path: &Path, fields: &[FieldName]) -> Result<FieldRecord> {
        let mut record = FieldRecord::new();

        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if is_missing(&e) => {
                trace!(entry = %entry, error = %e, "Entry does not exist");
                if fields.contains(&FieldName::Present) {
                    record.insert(FieldName::Present, false);
                }
                return Ok(record);
            }
            Err(e) => {
                return Err(Error::from(e))
                    .with_context(|| format!("Failed to stat {}", path.display()));
            }
        };

        // Decoded at most once per entry, shared by both transform fields.
        let mut transform: Option<Option<ImageTransform>> = None;

        for field in fields {
            match field {
                FieldName::ModificationTime => {
                    if let Ok(modified) = metadata.modified() {
                        record.insert(field.clone(), DateTime::<Utc>::from(modified));
                    }
                }
                FieldName::Present => record.insert(field.clone(), true),
                FieldName::ContentThumbnailUrl if metadata.is_file() => {
                    record.insert(field.clone(), entry.key());
                }
                FieldName::ContentThumbnailTransform | FieldName::ContentImageTransform
                    if metadata.is_file() =>
                {
                    if transform.is_none() {
                        transform = Some(self.read_transform(path).await);
                    }
                    if let Some(Some(value)) = transform {
                        record.insert(field.clone(), value);
                    }
                }
                _ => {}
            }
        }

        trace!(entry = %entry, fields = record.len(), "Probed local entry");
        Ok(record)
    }

    async fn read_transform(&self, path: &Path) -> Option<ImageTransform> {
        if !self.read_orientation {
            return None;
        }

        let owned = path.to_path_buf();
        match tokio::task::spawn_blocking(move || read_orientation(&owned)).await {
            Ok(Ok(orientation)) => transform_for(orientation),
            Ok(Err(e)) => {
                debug!(path = %path.display(), error = %e, "Could not read image orientation");
                None
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Orientation task failed");
                None
            }
        }
    }
}

impl Default for LocalFileSystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataProvider for LocalFileSystemProvider {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn fetch(
        &self,
        entries: &[Entry],
        fields: &[FieldName],
    ) -> Result<Vec<FieldRecord>> {
        let paths = entries
            .iter()
            .map(local_path)
            .collect::<filemeta_common::Result<Vec<PathBuf>>>()?;

        debug!(
            entries = entries.len(),
            fields = fields.len(),
            "Fetching local metadata"
        );

        try_join_all(
            entries
                .iter()
                .zip(&paths)
                .map(|(entry, path)| self.probe(entry, path, fields)),
        )
        .await
    }
}

fn local_path(entry: &Entry) -> filemeta_common::Result<PathBuf> {
    if !entry.is_local() {
        return Err(Error::unsupported_scheme(entry.url().scheme()));
    }
    entry
        .to_file_path()
        .ok_or_else(|| Error::invalid_input(format!("not a local path: {}", entry)))
}

/// Whether a stat failure means nothing exists at the path.
///
/// A path running through a regular file (`notes.txt/child.jpg`) fails with
/// `NotADirectory` rather than `NotFound`.
fn is_missing(err: &std::io::Error) -> bool {
    matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory)
}

fn read_orientation(path: &Path) -> image::ImageResult<Orientation> {
    let mut decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()?;
    decoder.orientation()
}

/// Map an EXIF orientation to the transform that displays the image upright.
fn transform_for(orientation: Orientation) -> Option<ImageTransform> {
    let (scale_x, scale_y, rotate90) = match orientation {
        Orientation::NoTransforms => return None,
        Orientation::Rotate90 => (1, 1, 1),
        Orientation::Rotate180 => (1, 1, 2),
        Orientation::Rotate270 => (1, 1, 3),
        Orientation::FlipHorizontal => (-1, 1, 0),
        Orientation::FlipVertical => (1, -1, 0),
        Orientation::Rotate90FlipH => (-1, 1, 3),
        Orientation::Rotate270FlipH => (-1, 1, 1),
    };
    Some(ImageTransform::new(scale_x, scale_y, rotate90))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_mapping() {
        assert_eq!(transform_for(Orientation::NoTransforms), None);
        assert_eq!(
            transform_for(Orientation::Rotate90),
            Some(ImageTransform::new(1, 1, 1))
        );
        assert_eq!(
            transform_for(Orientation::FlipVertical),
            Some(ImageTransform::new(1, -1, 0))
        );
        assert_eq!(
            transform_for(Orientation::Rotate90FlipH),
            Some(ImageTransform::new(-1, 1, 3))
        );
    }

    #[test]
    fn missing_kinds() {
        assert!(is_missing(&std::io::Error::from(ErrorKind::NotFound)));
        assert!(is_missing(&std::io::Error::from(ErrorKind::NotADirectory)));
        assert!(!is_missing(&std::io::Error::from(ErrorKind::PermissionDenied)));
    }

    #[test]
    fn local_path_rejects_remote_entries() {
        let entry = Entry::parse("https://drive.example.com/a.jpg").unwrap();
        let err = local_path(&entry).unwrap_err();
        assert!(matches!(err, Error::UnsupportedScheme(ref s) if s == "https"));
    }

    #[tokio::test]
    async fn unknown_fields_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();
        let entry = Entry::from_path(&path).unwrap();

        let records = LocalFileSystemProvider::new()
            .fetch(&[entry], &[FieldName::from("imageWidth"), FieldName::Present])
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0].flag(&FieldName::Present), Some(true));
    }

    #[tokio::test]
    async fn remote_entry_fails_whole_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let local = Entry::from_path(&dir.path().join("a.png")).unwrap();
        let remote = Entry::parse("https://drive.example.com/a.jpg").unwrap();

        let err = LocalFileSystemProvider::new()
            .fetch(&[local, remote], &[FieldName::Present])
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnsupportedScheme(_))
        ));
    }
}
