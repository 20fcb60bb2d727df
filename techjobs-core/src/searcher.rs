use std::collections::HashSet;

use rayon::prelude::*;

use crate::error::Result;
use crate::record::{Dataset, Record};

/// Values of `column` without duplicates, in the order they first appear.
pub fn distinct_values<'a>(dataset: &'a Dataset, column: &str) -> Result<Vec<&'a str>> {
    let idx = dataset.column_index(column)?;

    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for record in dataset.records() {
        let value = record.value_at(idx);
        if seen.insert(value) {
            values.push(value);
        }
    }

    Ok(values)
}

/// Records whose `column` value contains `needle` (case-sensitive), in row order.
///
/// An empty `needle` matches every record.
pub fn find_by_column_contains<'a>(
    dataset: &'a Dataset,
    column: &str,
    needle: &str,
) -> Result<Vec<&'a Record>> {
    let idx = dataset.column_index(column)?;

    // rayon keeps source order when collecting into a Vec
    Ok(dataset
        .records()
        .par_iter()
        .filter(|record| record.value_at(idx).contains(needle))
        .collect())
}

/// Records with any column containing `needle`, ignoring case.
///
/// Rows with identical values in every column are indistinguishable here and
/// come back as a single entry.
pub fn find_by_any_column_contains<'a>(dataset: &'a Dataset, needle: &str) -> HashSet<&'a Record> {
    let needle = needle.to_lowercase();

    dataset
        .records()
        .par_iter()
        .filter(|record| {
            record
                .values()
                .iter()
                .any(|value| value.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JobStoreError;
    use crate::parser::{parse_dataset, Delimiter};

    const JOBS: &str = "name,employer,location\n\
        Dev1,Acme Corp,Saint Louis\n\
        Dev2,Acme Corp,Kansas City\n\
        Dev3,Enterprise Holdings Inc,Saint Louis\n\
        Dev1,Acme Corp,Saint Louis\n";

    fn jobs() -> Dataset {
        parse_dataset(JOBS.as_bytes(), Delimiter::Comma).unwrap()
    }

    fn names(records: &[&Record]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.get("name").unwrap().to_string())
            .collect()
    }

    #[test]
    fn distinct_values_first_seen_order() {
        let ds = jobs();
        let values = distinct_values(&ds, "location").unwrap();
        assert_eq!(values, vec!["Saint Louis", "Kansas City"]);
    }

    #[test]
    fn distinct_values_missing_column() {
        let ds = jobs();
        let result = distinct_values(&ds, "salary");
        assert!(matches!(result, Err(JobStoreError::MissingColumn(c)) if c == "salary"));
    }

    #[test]
    fn column_search_is_case_sensitive() {
        let ds = jobs();
        let hits = find_by_column_contains(&ds, "employer", "Enterprise").unwrap();
        assert_eq!(names(&hits), vec!["Dev3"]);

        let hits = find_by_column_contains(&ds, "employer", "enterprise").unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn column_search_keeps_row_order_and_duplicates() {
        let ds = jobs();
        let hits = find_by_column_contains(&ds, "employer", "Acme").unwrap();
        assert_eq!(names(&hits), vec!["Dev1", "Dev2", "Dev1"]);
    }

    #[test]
    fn empty_needle_matches_everything() {
        let ds = jobs();
        let hits = find_by_column_contains(&ds, "name", "").unwrap();
        assert_eq!(hits.len(), ds.len());
    }

    #[test]
    fn column_search_only_looks_at_that_column() {
        let ds = jobs();
        let hits = find_by_column_contains(&ds, "name", "Acme").unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn any_column_search_ignores_case() {
        let ds = jobs();
        let hits = find_by_any_column_contains(&ds, "SAINT louis");
        let mut found: Vec<_> = hits.iter().map(|r| r.get("name").unwrap()).collect();
        found.sort();
        assert_eq!(found, vec!["Dev1", "Dev3"]);
    }

    #[test]
    fn any_column_search_collapses_identical_rows() {
        let ds = jobs();
        // rows 0 and 3 are identical in every column
        let hits = find_by_any_column_contains(&ds, "acme");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn any_column_search_no_match() {
        let ds = jobs();
        assert!(find_by_any_column_contains(&ds, "Initech").is_empty());
    }
}
