use std::str::FromStr;
use std::sync::Arc;

use crate::error::Result;
use crate::record::{Columns, Dataset, Record};

/// Supported field delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Semicolon,
    Pipe,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
            Delimiter::Semicolon => b';',
            Delimiter::Pipe => b'|',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Delimiter::Comma => "comma",
            Delimiter::Tab => "tab",
            Delimiter::Semicolon => "semicolon",
            Delimiter::Pipe => "pipe",
        }
    }
}

impl FromStr for Delimiter {
    type Err = String;

    /// Accepts a name (`comma`, `tab`, ...) or the delimiter character itself.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "comma" | "," => Ok(Delimiter::Comma),
            "tab" | "\t" | "\\t" => Ok(Delimiter::Tab),
            "semicolon" | ";" => Ok(Delimiter::Semicolon),
            "pipe" | "|" => Ok(Delimiter::Pipe),
            other => Err(format!(
                "unknown delimiter '{other}' (expected comma, tab, semicolon or pipe)"
            )),
        }
    }
}

/// Parse delimited text into a [`Dataset`].
///
/// The first row names the columns and must not repeat a name. Every other row
/// must carry exactly one field per column. Quoted fields may contain the
/// delimiter or line breaks, and `""` inside quotes is a literal quote.
/// Blank lines are skipped and do not become records.
pub fn parse_dataset(data: &[u8], delimiter: Delimiter) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter.as_byte())
        .from_reader(data);

    let names = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let columns = Arc::new(Columns::new(names)?);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let values = row.iter().map(|f| f.to_string()).collect();
        records.push(Record::new(Arc::clone(&columns), values));
    }

    Ok(Dataset::new(columns, records))
}
