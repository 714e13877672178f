//! CSV Data Loader Module
//! Reads the UN tourism CSV, skipping its leading metadata line.

use crate::data::record::RawRow;
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const COUNTRY_COLUMN: &str = "Region/Country/Area";
pub const YEAR_COLUMN: &str = "Year";
pub const SERIES_COLUMN: &str = "Series";
pub const VALUE_COLUMN: &str = "Value";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Default, PartialEq)]
struct ColumnIndex {
    unnamed: Option<usize>,
    region: Option<usize>,
    year: Option<usize>,
    series: Option<usize>,
    value: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        // Names are matched trimmed; with several blank headers the first one wins.
        Self {
            unnamed: headers.iter().position(|h| h.trim().is_empty()),
            region: find(COUNTRY_COLUMN),
            year: find(YEAR_COLUMN),
            series: find(SERIES_COLUMN),
            value: find(VALUE_COLUMN),
        }
    }

    fn row(&self, record: &StringRecord) -> RawRow {
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        RawRow {
            unnamed: cell(self.unnamed),
            region: cell(self.region),
            year: cell(self.year),
            series: cell(self.series),
            value: cell(self.value),
        }
    }
}

/// Drop blank lines, then the first remaining line.
///
/// Returns `None` when fewer than two non-blank lines exist.
pub fn strip_metadata_line(text: &str) -> Option<String> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return None;
    }

    Some(lines[1..].join("\n"))
}

/// Tokenize CSV text whose first line is metadata and second line is the header.
pub fn parse_csv_with_metadata(text: &str) -> Result<Vec<RawRow>, LoaderError> {
    let Some(body) = strip_metadata_line(text) else {
        debug!("CSV has fewer than two lines, nothing to parse");
        return Ok(Vec::new());
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let columns = ColumnIndex::from_headers(reader.headers()?);
    debug!(?columns, "Resolved CSV columns");

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(columns.row(&record));
    }

    Ok(rows)
}

/// Reads the tourism CSV from disk.
pub struct DataLoader;

impl DataLoader {
    /// Whole file as text, ready for [`parse_csv_with_metadata`].
    pub fn read_csv_text(file_path: &Path) -> Result<String, LoaderError> {
        debug!(path = %file_path.display(), "Reading CSV");
        fs::read_to_string(file_path).map_err(|source| LoaderError::Io {
            path: file_path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "Metadata, ignored\n\
        Region/Country/Area,,Year,Series,Value,Footnotes\n\
        4,Afghanistan,2019,\"Tourist/visitor arrivals (thousands)\",\"1,200\",\n\
        4,Afghanistan,2019,Tourism expenditure (millions of US dollars),50,\n";

    #[test]
    fn test_strip_metadata_line() {
        let body = strip_metadata_line("Metadata, ignored\r\n\r\nh1,h2\r\n\r\na,b\r\n").unwrap();
        assert_eq!(body, "h1,h2\na,b");
    }

    #[test]
    fn test_strip_skips_exactly_once() {
        let body = strip_metadata_line("\n\nmeta\n\nheader\n\nrow1\n\nrow2\n").unwrap();
        assert_eq!(body, "header\nrow1\nrow2");
    }

    #[test]
    fn test_too_few_lines() {
        assert_eq!(strip_metadata_line(""), None);
        assert_eq!(strip_metadata_line("only metadata\n\n"), None);
        assert!(parse_csv_with_metadata("only metadata").unwrap().is_empty());
    }

    #[test]
    fn test_parse_sample() {
        let rows = parse_csv_with_metadata(SAMPLE).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].unnamed.as_deref(), Some("Afghanistan"));
        assert_eq!(rows[0].region.as_deref(), Some("4"));
        assert_eq!(rows[0].year.as_deref(), Some("2019"));
        assert_eq!(
            rows[0].series.as_deref(),
            Some("Tourist/visitor arrivals (thousands)")
        );
        assert_eq!(rows[0].value.as_deref(), Some("1,200"));
    }

    #[test]
    fn test_unskipped_metadata_misreads_headers() {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(SAMPLE.as_bytes());
        let columns = ColumnIndex::from_headers(reader.headers().unwrap());
        assert_eq!(columns.year, None);
        assert_eq!(columns.series, None);
    }

    #[test]
    fn test_first_blank_header_is_unnamed_column() {
        let text = "meta\n Year ,,Series,,Value\n2019,Wakanda,S,Atlantis,1\n";
        let rows = parse_csv_with_metadata(text).unwrap();
        assert_eq!(rows[0].unnamed.as_deref(), Some("Wakanda"));
        assert_eq!(rows[0].year.as_deref(), Some("2019"));
    }

    #[test]
    fn test_short_rows_and_missing_columns() {
        let text = "meta\nCountry,Year,Series\nWakanda,2019\n";
        let rows = parse_csv_with_metadata(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].unnamed, None);
        assert_eq!(rows[0].region, None);
        assert_eq!(rows[0].year.as_deref(), Some("2019"));
        assert_eq!(rows[0].series, None);
        assert_eq!(rows[0].value, None);
    }

    #[test]
    fn test_load_csv_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let text = DataLoader::read_csv_text(file.path()).unwrap();
        let rows = parse_csv_with_metadata(&text).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DataLoader::read_csv_text(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
    }
}
