//! Header-first CSV loading into [`FeedRow`]s.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::row::FeedRow;

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Read a CSV file whose first row holds the column names.
///
/// Blank rows are skipped, short rows are padded with empty values and
/// surplus cells beyond the header are ignored.
pub fn read_csv_rows(path: &Path) -> Result<Vec<FeedRow>> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = parse_rows(file, path)?;
    debug!(path = %path.display(), rows = rows.len(), "read csv rows");
    Ok(rows)
}

/// Parse CSV text from any reader (pasted uploads, tests).
pub fn parse_csv_rows<R: Read>(reader: R) -> Result<Vec<FeedRow>> {
    parse_rows(reader, &PathBuf::from("<input>"))
}

fn parse_rows<R: Read>(reader: R, path: &Path) -> Result<Vec<FeedRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| csv_error(path, source))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| csv_error(path, source))?;
        let row: FeedRow = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = record.get(idx).unwrap_or("").trim();
                (header.clone(), value.to_string())
            })
            .collect();
        if row.is_blank() {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headers_and_skips_blank_rows() {
        let text = "\u{feff}Name , Salary\nJosh Allen,8300\n,\nJalen Hurts,8100\n";
        let rows = parse_csv_rows(text.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        let headers: Vec<&str> = rows[0].headers().collect();
        assert_eq!(headers, vec!["Name", "Salary"]);
        assert_eq!(rows[1].get("Name"), Some("Jalen Hurts"));
    }

    #[test]
    fn pads_short_rows() {
        let rows = parse_csv_rows("A,B,C\n1,2\n".as_bytes()).unwrap();
        assert_eq!(rows[0].get("C"), Some(""));
        assert_eq!(rows[0].len(), 3);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_csv_rows(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
