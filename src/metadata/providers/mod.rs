//! Concrete metadata provider implementations.
//!
//! Each submodule serves one kind of entry and implements the
//! [`MetadataProvider`](super::MetadataProvider) trait.

pub mod local;

pub use local::LocalFileSystemProvider;
