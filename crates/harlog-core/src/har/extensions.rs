use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Side-channel for custom fields attached to a HAR record.
///
/// HAR 1.2 allows tools to attach vendor-specific fields under keys prefixed
/// with an underscore (e.g. `_resourceType`, `_fromCache`). These carry no
/// standardized meaning, so they are kept opaque: every key the schema does
/// not recognize lands here on deserialization and is written back verbatim
/// on serialization.
///
/// Unknown keys without the underscore prefix are kept too rather than
/// rejected; consumers must never fail on fields they do not understand.
/// The typed [`insert`](Extensions::insert) API does enforce the prefix so
/// that programmatic producers stay within the convention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extensions(BTreeMap<String, Value>);

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert a custom field. The key must carry the `_` prefix.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<()> {
        let key = key.into();
        if !key.starts_with('_') {
            return Err(Error::InvalidExtensionKey(key));
        }
        self.0.insert(key, value);
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Keys present in this record, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
}
