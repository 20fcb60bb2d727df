use std::collections::HashSet;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing::{error, trace};

use crate::error::Result;
use crate::loader::load_dataset;
use crate::parser::Delimiter;
use crate::record::{Dataset, Record};
use crate::searcher;

/// Read-only job listings backed by a delimited file.
///
/// The file is read the first time any query runs and cached for the life of
/// the store. If that read fails, the error is logged, the query sees an empty
/// dataset, and the next query tries again. Concurrent first calls share a
/// single load; the others block until it finishes.
///
/// Build one store at startup and hand out references to it.
#[derive(Debug)]
pub struct JobStore {
    path: PathBuf,
    delimiter: Delimiter,
    dataset: OnceCell<Dataset>,
}

impl JobStore {
    /// A store over a comma-separated file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_delimiter(path, Delimiter::Comma)
    }

    pub fn with_delimiter(path: impl Into<PathBuf>, delimiter: Delimiter) -> Self {
        Self {
            path: path.into(),
            delimiter,
            dataset: OnceCell::new(),
        }
    }

    /// File path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }

    /// Load the file now, returning the error instead of logging it.
    ///
    /// A no-op once loaded. A failed load leaves the store unloaded.
    pub fn load(&self) -> Result<&Dataset> {
        self.dataset
            .get_or_try_init(|| load_dataset(&self.path, self.delimiter))
    }

    fn ensure_loaded(&self) -> Option<&Dataset> {
        match self.load() {
            Ok(dataset) => Some(dataset),
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "failed to load job data");
                None
            }
        }
    }

    /// Header names of the loaded file.
    pub fn columns(&self) -> &[String] {
        self.ensure_loaded().map(Dataset::columns).unwrap_or(&[])
    }

    /// Every value found in `column`, once each, in first-seen order.
    pub fn distinct_values(&self, column: &str) -> Result<Vec<&str>> {
        trace!(column, "distinct_values");
        match self.ensure_loaded() {
            Some(dataset) => searcher::distinct_values(dataset, column),
            None => Ok(Vec::new()),
        }
    }

    /// All records in file order.
    pub fn all_records(&self) -> &[Record] {
        self.ensure_loaded().map(Dataset::records).unwrap_or(&[])
    }

    /// Records whose `column` value contains `needle`, matching case exactly.
    ///
    /// For example, searching `employer` for "Enterprise" includes
    /// "Enterprise Holdings, Inc".
    pub fn find_by_column_contains(&self, column: &str, needle: &str) -> Result<Vec<&Record>> {
        trace!(column, needle, "find_by_column_contains");
        match self.ensure_loaded() {
            Some(dataset) => searcher::find_by_column_contains(dataset, column, needle),
            None => Ok(Vec::new()),
        }
    }

    /// Records with at least one column containing `needle`, ignoring case.
    ///
    /// Identical rows come back as one entry.
    pub fn find_by_any_column_contains(&self, needle: &str) -> HashSet<&Record> {
        trace!(needle, "find_by_any_column_contains");
        match self.ensure_loaded() {
            Some(dataset) => searcher::find_by_any_column_contains(dataset, needle),
            None => HashSet::new(),
        }
    }
}
