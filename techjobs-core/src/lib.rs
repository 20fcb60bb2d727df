pub mod error;
pub mod loader;
pub mod parser;
pub mod record;
pub mod searcher;
pub mod store;

pub use error::{JobStoreError, Result};
pub use parser::Delimiter;
pub use record::{Columns, Dataset, Record};
pub use store::JobStore;
