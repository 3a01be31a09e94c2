//! Shared test doubles for aggregation tests.
//!
//! Provides [`ScriptedProvider`], a [`MetadataProvider`] answering from
//! per-key records while recording every call, and [`KeyClassifier`], a
//! classifier answering from a fixed set of keys.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use filemeta::metadata::{FieldName, FieldRecord, MetadataProvider, TypeClassifier};
use filemeta_common::Entry;
use parking_lot::Mutex;

/// Failure raised by [`ScriptedProvider`] when a pass is set to fail.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("provider unavailable during {0} pass")]
pub struct ProviderDown(pub &'static str);

/// One recorded `fetch` call.
#[derive(Debug, Clone)]
pub struct FetchCall {
    pub keys: Vec<String>,
    pub fields: Vec<FieldName>,
}

/// Provider answering from scripted per-key records.
///
/// Requests that include `contentThumbnailUrl` are served from the content
/// table, every other request from the base table.
#[derive(Default)]
pub struct ScriptedProvider {
    base: HashMap<String, FieldRecord>,
    content: HashMap<String, FieldRecord>,
    fail_base: bool,
    fail_content: bool,
    calls: Mutex<Vec<FetchCall>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, key: &str, record: FieldRecord) -> Self {
        self.base.insert(key.to_string(), record);
        self
    }

    pub fn content(mut self, key: &str, record: FieldRecord) -> Self {
        self.content.insert(key.to_string(), record);
        self
    }

    pub fn failing_base(mut self) -> Self {
        self.fail_base = true;
        self
    }

    pub fn failing_content(mut self) -> Self {
        self.fail_content = true;
        self
    }

    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl MetadataProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch(
        &self,
        entries: &[Entry],
        fields: &[FieldName],
    ) -> anyhow::Result<Vec<FieldRecord>> {
        self.calls.lock().push(FetchCall {
            keys: entries.iter().map(|e| e.key().to_string()).collect(),
            fields: fields.to_vec(),
        });

        let is_content = fields.contains(&FieldName::ContentThumbnailUrl);
        if is_content && self.fail_content {
            return Err(ProviderDown("content").into());
        }
        if !is_content && self.fail_base {
            return Err(ProviderDown("base").into());
        }

        let table = if is_content { &self.content } else { &self.base };
        Ok(entries
            .iter()
            .map(|e| table.get(e.key()).cloned().unwrap_or_default())
            .collect())
    }
}

/// Classifier that treats exactly the listed keys as images.
pub struct KeyClassifier(HashSet<String>);

impl KeyClassifier {
    pub fn new<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        Self(keys.into_iter().map(str::to_string).collect())
    }
}

impl TypeClassifier for KeyClassifier {
    fn is_image(&self, entry: &Entry) -> bool {
        self.0.contains(entry.key())
    }
}

pub fn entry(url: &str) -> Entry {
    Entry::parse(url).expect("valid test URL")
}

pub fn present(flag: bool) -> FieldRecord {
    FieldRecord::new().with(FieldName::Present, flag)
}
