//! URL-keyed handles to file-system objects.
//!
//! An [`Entry`] identifies one file or directory by its URL. The URL string is
//! the entry's stable key: two entries are the same object iff their keys match.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Handle to a single file-system object, keyed by its URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(Url);

impl Entry {
    /// Wrap an already-parsed URL.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self(url)
    }

    /// Parse an entry from a URL string.
    ///
    /// # Examples
    ///
    /// ```
    /// use filemeta_common::Entry;
    ///
    /// let entry = Entry::parse("file:///photos/beach.jpg").unwrap();
    /// assert_eq!(entry.extension().as_deref(), Some("jpg"));
    /// assert!(Entry::parse("not a url").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self(Url::parse(input)?))
    }

    /// Build a `file:` entry from an absolute local path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `path` is not absolute.
    pub fn from_path(path: &Path) -> Result<Self> {
        Url::from_file_path(path)
            .map(Self)
            .map_err(|()| Error::invalid_input(format!("not an absolute path: {}", path.display())))
    }

    /// The stable unique key of this entry (its URL string).
    pub fn key(&self) -> &str {
        self.0.as_str()
    }

    /// The underlying URL.
    pub fn url(&self) -> &Url {
        &self.0
    }

    /// Whether this entry lives on the local file system.
    pub fn is_local(&self) -> bool {
        self.0.scheme() == "file"
    }

    /// Local path of a `file:` entry, or `None` for any other scheme.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        if !self.is_local() {
            return None;
        }
        self.0.to_file_path().ok()
    }

    /// Last non-empty path segment.
    ///
    /// Local entries are percent-decoded through their file path; other
    /// schemes return the raw segment.
    pub fn file_name(&self) -> Option<String> {
        if let Some(path) = self.to_file_path() {
            return path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
        }
        self.0
            .path_segments()?
            .filter(|segment| !segment.is_empty())
            .last()
            .map(str::to_string)
    }

    /// Lowercased extension of [`file_name`](Self::file_name), if any.
    ///
    /// A leading dot alone (`.profile`) is not an extension.
    pub fn extension(&self) -> Option<String> {
        let name = self.file_name()?;
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_lowercase())
    }
}

impl From<Url> for Entry {
    fn from(url: Url) -> Self {
        Self(url)
    }
}

impl FromStr for Entry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
