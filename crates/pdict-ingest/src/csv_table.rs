//! Header-less CSV files as raw tables.

use std::path::Path;

use csv::ReaderBuilder;
use pdict_model::{RawCell, RawTable};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Reads every record of a CSV file as one table row.
///
/// The file carries no header; labels are ordinary cells. Records may have
/// different lengths and blank records are dropped.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| open_error(path, source))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(|v| RawCell::new(v.trim())).collect());
    }

    if rows.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), rows = rows.len(), "loaded table");
    Ok(RawTable::new(rows))
}

fn open_error(path: &Path, source: csv::Error) -> IngestError {
    let missing = matches!(
        source.kind(),
        csv::ErrorKind::Io(err) if err.kind() == std::io::ErrorKind::NotFound
    );
    if missing {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn reads_rows_without_header() {
        let file = create_temp_csv("przypadek,lp,lm\nmianownik,pies,psy\n,,\ndopełniacz, psa ,psów\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0][0].text, "przypadek");
        assert_eq!(table.rows[2][1].text, "psa");
        assert_eq!(table.rows[2][1].row_span, 1);
    }

    #[test]
    fn ragged_records_are_kept() {
        let file = create_temp_csv("a,b,c\nd\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.rows[1].len(), 1);
        assert_eq!(table.expand().width(), 3);
    }

    #[test]
    fn empty_file_is_an_error() {
        let file = create_temp_csv("\n , \n");
        let err = read_csv_table(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyCsv { .. }));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_csv_table(&dir.path().join("none.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
