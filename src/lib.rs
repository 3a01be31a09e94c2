//! Filemeta - file metadata aggregation
//!
//! This library crate exposes the aggregator, providers and configuration
//! used by the `filemeta` binary.

pub mod config;
pub mod metadata;
