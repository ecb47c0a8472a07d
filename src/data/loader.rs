use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures while parsing an uploaded CSV file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} has {found} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset from a CSV file on disk.
pub fn load_path(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let dataset = load_reader(file)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(dataset)
}

/// Parse CSV from any reader.  First record is the header; every cell is
/// type-inferred via [`CellValue::infer`].
pub fn load_reader<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in csv_reader.records().enumerate() {
        let record = result?;
        if record.len() != columns.len() {
            return Err(LoadError::RaggedRow {
                row: row_no,
                found: record.len(),
                expected: columns.len(),
            });
        }
        rows.push(record.iter().map(CellValue::infer).collect());
    }

    Ok(Dataset::from_rows(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_matches_csv() {
        let csv = "city,sales\nBerlin,10\nParis,20\nBerlin,5\n";
        let ds = load_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.shape(), (3, 2));
        assert_eq!(ds.columns, vec!["city", "sales"]);
    }

    #[test]
    fn cells_are_type_inferred() {
        let csv = "name,score,flag,note\nana,1.5,true,\n";
        let ds = load_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.value(0, "name"), Some(&CellValue::String("ana".into())));
        assert_eq!(ds.value(0, "score"), Some(&CellValue::Float(1.5)));
        assert_eq!(ds.value(0, "flag"), Some(&CellValue::Bool(true)));
        assert_eq!(ds.value(0, "note"), Some(&CellValue::Null));
    }

    #[test]
    fn header_only_csv_is_empty_dataset() {
        let ds = load_reader("a,b,c\n".as_bytes()).unwrap();
        assert_eq!(ds.shape(), (0, 3));
        assert!(ds.is_empty());
    }

    #[test]
    fn ragged_row_is_an_error() {
        let err = load_reader("a,b\n1,2\n3\n".as_bytes()).unwrap_err();
        match err {
            LoadError::RaggedRow {
                row,
                found,
                expected,
            } => {
                assert_eq!((row, found, expected), (1, 1, 2));
            }
            other => panic!("expected RaggedRow, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"a,b\n\xff\xfe,2\n";
        let result = load_reader(bytes);
        assert!(matches!(result, Err(LoadError::Csv(_))));
    }
}
