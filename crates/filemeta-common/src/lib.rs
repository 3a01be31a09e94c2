//! Filemeta-Common: Shared types and utilities.
//!
//! This crate provides common functionality used across filemeta:
//!
//! - **Entries**: URL-keyed handles to file-system objects
//! - **Core Types**: Image display transforms
//! - **Path Utilities**: The default image extension table
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use filemeta_common::{Entry, Error, Result};
//! use filemeta_common::paths::image_extensions;
//! use std::path::Path;
//!
//! let entry = Entry::from_path(Path::new("/photos/beach.jpg")).unwrap();
//! assert_eq!(entry.key(), "file:///photos/beach.jpg");
//!
//! assert!(image_extensions().contains(&entry.extension().unwrap().as_str()));
//!
//! fn example() -> Result<()> {
//!     Err(Error::invalid_input("relative path"))
//! }
//! assert!(example().is_err());
//! ```

pub mod entry;
pub mod error;
pub mod paths;
pub mod types;

pub use entry::Entry;
pub use error::{Error, Result};
pub use types::*;
