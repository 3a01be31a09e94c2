//! Trait definition for metadata providers.
//!
//! This module defines the [`MetadataProvider`] trait that every metadata
//! backend (the local file system, a cloud drive mirror, a test double)
//! implements.

use async_trait::async_trait;
use filemeta_common::Entry;

use super::field::{FieldName, FieldRecord};

/// Async trait that all metadata providers must implement.
///
/// Providers are expected to be cheaply cloneable or wrapped in an `Arc` so
/// they can be shared across tasks.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Short, lowercase identifier for this provider (e.g. `"local"`).
    fn name(&self) -> &'static str;

    /// Fetch `fields` for every entry in `entries`.
    ///
    /// The result holds exactly one record per entry, in the same order as
    /// `entries`. Field names the provider cannot serve are left out of the
    /// records rather than treated as errors.
    async fn fetch(
        &self,
        entries: &[Entry],
        fields: &[FieldName],
    ) -> anyhow::Result<Vec<FieldRecord>>;
}
