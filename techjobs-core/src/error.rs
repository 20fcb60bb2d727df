use thiserror::Error;

pub type Result<T> = std::result::Result<T, JobStoreError>;

#[derive(Debug, Error)]
pub enum JobStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("File is empty")]
    EmptyFile,

    #[error("Duplicate column in header: {0}")]
    DuplicateColumn(String),

    #[error("Column not found: {0}")]
    MissingColumn(String),
}

impl JobStoreError {
    /// True for failures that come from reading or parsing the source file.
    pub fn is_load_error(&self) -> bool {
        !matches!(self, JobStoreError::MissingColumn(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_is_not_a_load_error() {
        assert!(!JobStoreError::MissingColumn("x".into()).is_load_error());
        assert!(JobStoreError::EmptyFile.is_load_error());
        assert!(JobStoreError::DuplicateColumn("x".into()).is_load_error());
    }

    #[test]
    fn messages_name_the_column() {
        let err = JobStoreError::MissingColumn("salary".into());
        assert_eq!(err.to_string(), "Column not found: salary");
    }
}
