//! Component declaration registry.
//!
//! The registry is keyed by component name alone. Iteration follows the order
//! in which a name was first inserted; re-declaring a name replaces the record
//! in place (last writer wins) and resets its `used` flag.

use std::collections::HashMap;

use serde::Serialize;

/// A component declaration found in the scanned tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    pub name: String,
    pub file_path: String,
    #[serde(rename = "isUsed")]
    pub used: bool,
}

impl ComponentRecord {
    pub fn new(name: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_path: file_path.into(),
            used: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    records: Vec<ComponentRecord>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the record for `name`.
    pub fn upsert(&mut self, name: &str, file_path: &str) {
        let record = ComponentRecord::new(name, file_path);
        match self.index.get(name) {
            Some(&idx) => self.records[idx] = record,
            None => {
                self.index.insert(name.to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Mark `name` as used. Returns false when no such declaration exists.
    pub fn mark_used(&mut self, name: &str) -> bool {
        match self.index.get(name) {
            Some(&idx) => {
                self.records[idx].used = true;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&ComponentRecord> {
        self.index.get(name).map(|&idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<ComponentRecord> {
        self.records
    }
}
