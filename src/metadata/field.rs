//! Field names and per-entry field records exchanged with providers.
//!
//! A provider answers a `fetch` with one [`FieldRecord`] per requested entry.
//! Each record maps a [`FieldName`] to a [`FieldValue`]; a name that is absent
//! simply has no value for that entry.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use filemeta_common::ImageTransform;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

/// Name of a metadata attribute.
///
/// The set is open: names this crate does not know are kept verbatim in
/// [`FieldName::Other`] so providers can serve fields defined elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldName {
    ModificationTime,
    CustomIconUrl,
    ThumbnailUrl,
    Present,
    ContentThumbnailUrl,
    ContentThumbnailTransform,
    ContentImageTransform,
    Other(String),
}

impl FieldName {
    /// Wire name of this field (e.g. `"modificationTime"`).
    pub fn as_str(&self) -> &str {
        match self {
            Self::ModificationTime => "modificationTime",
            Self::CustomIconUrl => "customIconUrl",
            Self::ThumbnailUrl => "thumbnailUrl",
            Self::Present => "present",
            Self::ContentThumbnailUrl => "contentThumbnailUrl",
            Self::ContentThumbnailTransform => "contentThumbnailTransform",
            Self::ContentImageTransform => "contentImageTransform",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for FieldName {
    fn from(name: &str) -> Self {
        match name {
            "modificationTime" => Self::ModificationTime,
            "customIconUrl" => Self::CustomIconUrl,
            "thumbnailUrl" => Self::ThumbnailUrl,
            "present" => Self::Present,
            "contentThumbnailUrl" => Self::ContentThumbnailUrl,
            "contentThumbnailTransform" => Self::ContentThumbnailTransform,
            "contentImageTransform" => Self::ContentImageTransform,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldName {
    fn from(name: String) -> Self {
        match Self::from(name.as_str()) {
            Self::Other(_) => Self::Other(name),
            known => known,
        }
    }
}

impl From<FieldName> for String {
    fn from(name: FieldName) -> Self {
        match name {
            FieldName::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Field values
// ---------------------------------------------------------------------------

/// Value of a single field.
///
/// Serialized with an explicit kind tag (`{"kind": "text", "value": ...}`), so
/// a text value that happens to look like a timestamp keeps its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum FieldValue {
    Flag(bool),
    Time(DateTime<Utc>),
    Transform(ImageTransform),
    Text(String),
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

impl From<ImageTransform> for FieldValue {
    fn from(value: ImageTransform) -> Self {
        Self::Transform(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Field values fetched for one entry.
///
/// Typed accessors return `None` both when the field is missing and when it
/// holds a value of another kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRecord {
    values: HashMap<FieldName, FieldValue>,
}

impl FieldRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: FieldName, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name`, replacing any earlier value.
    pub fn insert(&mut self, name: FieldName, value: impl Into<FieldValue>) {
        self.values.insert(name, value.into());
    }

    pub fn get(&self, name: &FieldName) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &FieldName) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn time(&self, name: &FieldName) -> Option<DateTime<Utc>> {
        match self.get(name)? {
            FieldValue::Time(value) => Some(*value),
            _ => None,
        }
    }

    pub fn text(&self, name: &FieldName) -> Option<&str> {
        match self.get(name)? {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn flag(&self, name: &FieldName) -> Option<bool> {
        match self.get(name)? {
            FieldValue::Flag(value) => Some(*value),
            _ => None,
        }
    }

    pub fn transform(&self, name: &FieldName) -> Option<ImageTransform> {
        match self.get(name)? {
            FieldValue::Transform(value) => Some(*value),
            _ => None,
        }
    }
}
