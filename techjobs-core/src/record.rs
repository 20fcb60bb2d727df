use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{JobStoreError, Result};

/// The header row of a dataset: unique column names in file order.
#[derive(Debug, PartialEq, Eq)]
pub struct Columns {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Columns {
    /// Build from header names. Fails on the first repeated name.
    pub fn new(names: Vec<String>) -> Result<Self> {
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(JobStoreError::DuplicateColumn(name.clone()));
            }
        }
        Ok(Self { names, index })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One job listing: a column name to value mapping.
///
/// Values are stored positionally against the dataset's shared [`Columns`].
/// Equality and hashing cover the complete mapping, so two rows with the same
/// value in every column compare equal.
#[derive(Debug, Clone)]
pub struct Record {
    columns: Arc<Columns>,
    values: Vec<String>,
}

impl Record {
    /// `values` must hold exactly one entry per column.
    pub(crate) fn new(columns: Arc<Columns>, values: Vec<String>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    /// Value of `column`, or `None` if the dataset has no such column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .position(column)
            .map(|i| self.values[i].as_str())
    }

    pub(crate) fn value_at(&self, index: usize) -> &str {
        &self.values[index]
    }

    /// `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .names()
            .iter()
            .zip(&self.values)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn columns(&self) -> &[String] {
        self.columns.names()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
            && (Arc::ptr_eq(&self.columns, &other.columns)
                || self.columns.names == other.columns.names)
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Column names are left out: equal records always share them.
        self.values.hash(state);
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// All records of a source file, in row order.
#[derive(Debug)]
pub struct Dataset {
    columns: Arc<Columns>,
    records: Vec<Record>,
}

impl Dataset {
    pub(crate) fn new(columns: Arc<Columns>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        self.columns.names()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Position of `column` in the header.
    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.columns
            .position(column)
            .ok_or_else(|| JobStoreError::MissingColumn(column.to_string()))
    }

    /// Number of data rows (excluding header).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
