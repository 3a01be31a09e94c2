//! Metadata aggregation for file-system entries.
//!
//! This module defines the [`MetadataProvider`] trait through which field
//! values are fetched, and the [`MetadataAggregator`] that reshapes them into
//! one [`AggregatedMetadata`] record per entry.
//!
//! # Module layout
//!
//! - [`field`] -- Field names, values and per-entry records.
//! - [`provider`] -- Provider trait definition.
//! - [`providers`] -- Concrete providers (local file system).
//! - [`classifier`] -- Image classification of entries.
//! - [`model`] -- The aggregated output record.
//! - [`aggregator`] -- Two-pass aggregation.

pub mod aggregator;
pub mod classifier;
pub mod field;
pub mod model;
pub mod provider;
pub mod providers;

pub use aggregator::{MetadataAggregator, BASE_FIELDS, CONTENT_FIELDS};
pub use classifier::{ExtensionClassifier, TypeClassifier};
pub use field::{FieldName, FieldRecord, FieldValue};
pub use model::{AggregatedMetadata, ExternalGroup, FilesystemGroup, MediaGroup, ThumbnailGroup};
pub use provider::MetadataProvider;
pub use providers::LocalFileSystemProvider;
