use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::error::{JobStoreError, Result};
use crate::parser::{parse_dataset, Delimiter};
use crate::record::Dataset;

/// Read a whole delimited file into memory and parse it into a [`Dataset`].
pub fn load_dataset(path: &Path, delimiter: Delimiter) -> Result<Dataset> {
    let file = File::open(path)?;
    let metadata = file.metadata()?;

    if metadata.len() == 0 {
        return Err(JobStoreError::EmptyFile);
    }

    // SAFETY: We only read from the mmap, and it is dropped before returning.
    // The file should not be modified externally during the load.
    let mmap = unsafe { Mmap::map(&file)? };

    let dataset = parse_dataset(&mmap, delimiter)?;
    debug!(
        path = %path.display(),
        rows = dataset.len(),
        columns = dataset.columns().len(),
        "loaded job data"
    );

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn make_csv(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn basic_load() {
        let f = make_csv("name,age\nAlice,30\nBob,25\n");
        let ds = load_dataset(f.path(), Delimiter::Comma).unwrap();
        assert_eq!(ds.columns(), &["name", "age"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[1].get("name"), Some("Bob"));
    }

    #[test]
    fn no_trailing_newline() {
        let f = make_csv("x,y\n1,2\n3,4");
        let ds = load_dataset(f.path(), Delimiter::Comma).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[1].get("y"), Some("4"));
    }

    #[test]
    fn empty_file() {
        let f = make_csv("");
        let result = load_dataset(f.path(), Delimiter::Comma);
        assert!(matches!(result, Err(JobStoreError::EmptyFile)));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_dataset(&dir.path().join("absent.csv"), Delimiter::Comma);
        assert!(matches!(result, Err(JobStoreError::Io(_))));
    }
}
