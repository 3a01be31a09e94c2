//! Two-pass metadata aggregation for lists of entries.
//!
//! The [`MetadataAggregator`] fetches base file-system fields for every entry,
//! then issues a second fetch for content-thumbnail fields restricted to
//! entries that are present and classified as images.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use filemeta_common::Entry;
use tracing::debug;

use super::classifier::TypeClassifier;
use super::field::{FieldName, FieldRecord};
use super::model::AggregatedMetadata;
use super::provider::MetadataProvider;

/// Fields requested for every entry.
pub const BASE_FIELDS: [FieldName; 4] = [
    FieldName::ModificationTime,
    FieldName::CustomIconUrl,
    FieldName::ThumbnailUrl,
    FieldName::Present,
];

/// Fields requested only for present images.
pub const CONTENT_FIELDS: [FieldName; 3] = [
    FieldName::ContentThumbnailUrl,
    FieldName::ContentThumbnailTransform,
    FieldName::ContentImageTransform,
];

/// Aggregates provider fields into one [`AggregatedMetadata`] per entry.
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use filemeta::metadata::{ExtensionClassifier, LocalFileSystemProvider, MetadataAggregator};
///
/// let aggregator = MetadataAggregator::new(
///     Arc::new(LocalFileSystemProvider::new()),
///     Arc::new(ExtensionClassifier::new()),
/// );
/// let metadata = aggregator.get(&entries).await?;
/// assert_eq!(metadata.len(), entries.len());
/// ```
#[derive(Clone)]
pub struct MetadataAggregator {
    provider: Arc<dyn MetadataProvider>,
    classifier: Arc<dyn TypeClassifier>,
}

impl MetadataAggregator {
    pub fn new(provider: Arc<dyn MetadataProvider>, classifier: Arc<dyn TypeClassifier>) -> Self {
        Self {
            provider,
            classifier,
        }
    }

    /// Fetch and aggregate metadata for `entries`.
    ///
    /// The result has one record per entry, in input order. Entries sharing
    /// a key share a record: the last base record for a key wins, and the key
    /// is requested at most once in the content pass.
    ///
    /// # Errors
    ///
    /// Any provider failure is returned unchanged and no partial result is
    /// produced. A provider answer whose length differs from the request is
    /// treated as a provider failure.
    pub async fn get(&self, entries: &[Entry]) -> Result<Vec<AggregatedMetadata>> {
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let base = self.provider.fetch(entries, &BASE_FIELDS).await?;
        ensure_aligned(self.provider.name(), entries.len(), base.len())?;
        debug!(
            provider = self.provider.name(),
            entries = entries.len(),
            "Fetched base metadata"
        );

        // One slot per distinct key, in first-seen order.
        let mut slots: Vec<AggregatedMetadata> = Vec::with_capacity(entries.len());
        let mut slot_entries: Vec<&Entry> = Vec::with_capacity(entries.len());
        let mut slot_of_key: HashMap<&str, usize> = HashMap::with_capacity(entries.len());
        let mut slot_of_position: Vec<usize> = Vec::with_capacity(entries.len());

        for (entry, record) in entries.iter().zip(&base) {
            let metadata = AggregatedMetadata::from_base_record(record);
            let slot = match slot_of_key.get(entry.key()) {
                Some(&slot) => {
                    slots[slot] = metadata;
                    slot
                }
                None => {
                    let slot = slots.len();
                    slots.push(metadata);
                    slot_entries.push(entry);
                    slot_of_key.insert(entry.key(), slot);
                    slot
                }
            };
            slot_of_position.push(slot);
        }

        let eligible: Vec<usize> = (0..slots.len())
            .filter(|&slot| {
                slots[slot].external.present && self.classifier.is_image(slot_entries[slot])
            })
            .collect();

        if eligible.is_empty() {
            debug!(
                provider = self.provider.name(),
                "No present images; skipping content metadata"
            );
        } else {
            let content_entries: Vec<Entry> = eligible
                .iter()
                .map(|&slot| slot_entries[slot].clone())
                .collect();
            let content = self
                .provider
                .fetch(&content_entries, &CONTENT_FIELDS)
                .await?;
            ensure_aligned(self.provider.name(), content_entries.len(), content.len())?;
            debug!(
                provider = self.provider.name(),
                entries = content_entries.len(),
                "Fetched content metadata"
            );

            merge_content(&mut slots, &eligible, &content);
        }

        Ok(slot_of_position
            .into_iter()
            .map(|slot| slots[slot].clone())
            .collect())
    }
}

fn merge_content(slots: &mut [AggregatedMetadata], eligible: &[usize], content: &[FieldRecord]) {
    for (&slot, record) in eligible.iter().zip(content) {
        slots[slot].apply_content_record(record);
    }
}

fn ensure_aligned(provider: &str, requested: usize, returned: usize) -> Result<()> {
    if requested != returned {
        anyhow::bail!(
            "Provider '{}' returned {} records for {} entries",
            provider,
            returned,
            requested
        );
    }
    Ok(())
}
