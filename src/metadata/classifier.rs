//! File-type classification for entries.
//!
//! The aggregator only asks one question of a classifier: is this entry an
//! image? [`ExtensionClassifier`] answers it from the entry's file extension.

use filemeta_common::paths::image_extensions;
use filemeta_common::Entry;

/// Decides whether an entry is an image.
pub trait TypeClassifier: Send + Sync {
    fn is_image(&self, entry: &Entry) -> bool;
}

/// Classifier backed by a list of image extensions.
#[derive(Debug, Clone)]
pub struct ExtensionClassifier {
    image_extensions: Vec<String>,
}

impl ExtensionClassifier {
    /// Create a classifier using the common image extension table.
    pub fn new() -> Self {
        Self::with_extensions(image_extensions().iter().copied())
    }

    /// Create a classifier recognising exactly `extensions`.
    ///
    /// Extensions are matched case-insensitively and given without the
    /// leading dot.
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            image_extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn extensions(&self) -> &[String] {
        &self.image_extensions
    }
}

impl Default for ExtensionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeClassifier for ExtensionClassifier {
    fn is_image(&self, entry: &Entry) -> bool {
        entry
            .extension()
            .map(|ext| self.image_extensions.iter().any(|known| *known == ext))
            .unwrap_or(false)
    }
}
