//! CSV Data Loader Module
//! Reads CSV files into text and runs the table pipeline.

use super::columns::ColumnWidthEstimator;
use super::table::{Table, TableBuilder, TableError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read CSV: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse CSV: {0}")]
    Table(#[from] TableError),
}

/// A table together with the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTable {
    pub source: Option<PathBuf>,
    pub table: Table,
}

impl LoadedTable {
    /// File name for display, if the table came from a file.
    pub fn file_name(&self) -> Option<String> {
        self.source
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
    }
}

/// Text without a leading U+FEFF byte-order mark.
fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Handles reading and parsing of CSV files.
pub struct DataLoader;

impl DataLoader {
    /// Read a file as text. Invalid UTF-8 sequences are replaced rather than
    /// rejected and a leading byte-order mark is dropped.
    pub fn read_text(path: &Path) -> Result<String, LoaderError> {
        let bytes = std::fs::read(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "read csv file");
        let text = String::from_utf8_lossy(&bytes);
        Ok(strip_bom(&text).to_string())
    }

    /// Build a table from CSV text and attach column widths.
    pub fn parse_text(source: Option<PathBuf>, text: &str) -> Result<LoadedTable, LoaderError> {
        let mut table = TableBuilder::build(strip_bom(text))?;
        table.header = ColumnWidthEstimator::estimate(&table.field_names, table.records.first())?;

        debug!(
            records = table.row_count(),
            fields = table.header.len(),
            header = %serde_json::to_string(&table.header).unwrap_or_default(),
            "built table"
        );

        Ok(LoadedTable { source, table })
    }

    /// Read and parse a CSV file in one step.
    pub fn load_csv(path: &Path) -> Result<LoadedTable, LoaderError> {
        let text = Self::read_text(path)?;
        Self::parse_text(Some(path.to_path_buf()), &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Item,Price\napple,10\nbanana,5\n").unwrap();

        let loaded = DataLoader::load_csv(file.path()).unwrap();

        assert_eq!(loaded.source.as_deref(), Some(file.path()));
        assert_eq!(loaded.table.row_count(), 2);
        let fields: Vec<&str> = loaded.table.header.iter().map(|h| h.field.as_str()).collect();
        assert_eq!(fields, vec!["item", "price", "id"]);
        assert_eq!(loaded.file_name(), file.path().file_name().map(|n| n.to_string_lossy().to_string()));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name\nab\xffc\n").unwrap();

        let loaded = DataLoader::load_csv(file.path()).unwrap();
        assert_eq!(loaded.table.records[0].get("name"), Some("ab\u{fffd}c"));
    }

    #[test]
    fn byte_order_mark_is_dropped_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\xef\xbb\xbfid,name\n5,a\n").unwrap();

        let text = DataLoader::read_text(file.path()).unwrap();
        assert!(text.starts_with("id,"));

        let loaded = DataLoader::load_csv(file.path()).unwrap();
        assert_eq!(loaded.table.field_names, vec!["id", "name"]);
        assert_eq!(loaded.table.records[0].get("id"), Some("5"));
    }

    #[test]
    fn byte_order_mark_in_text_keeps_source_id() {
        let loaded = DataLoader::parse_text(None, "\u{feff}id,name\n5,a\n").unwrap();
        assert_eq!(loaded.table.field_names, vec!["id", "name"]);
        assert_eq!(loaded.table.records[0].get("id"), Some("5"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = DataLoader::load_csv(&dir.path().join("nope.csv"));
        assert!(matches!(result, Err(LoaderError::Io(_))));
    }

    #[test]
    fn header_only_text_has_no_records() {
        let result = DataLoader::parse_text(None, "a,b\n");
        assert!(matches!(result, Err(LoaderError::Table(TableError::NoRecords))));
    }

    #[test]
    fn empty_text_has_no_header() {
        let result = DataLoader::parse_text(None, "");
        assert!(matches!(result, Err(LoaderError::Table(TableError::MissingHeader))));
    }
}
