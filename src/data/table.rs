//! Table Builder Module
//! Turns raw CSV text into records keyed by lower-cased header names.

use super::tokenizer::RowTokenizer;
use std::collections::HashMap;
use thiserror::Error;

/// Name of the identifier field injected when the header lacks one.
pub const ID_FIELD: &str = "id";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("CSV text has no header line")]
    MissingHeader,
    #[error("Table has no records")]
    NoRecords,
}

/// One data row. A value is `None` when the source line had fewer cells
/// than the header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: HashMap<String, Option<String>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, overwriting any earlier value under the same name.
    pub fn insert(&mut self, field: impl Into<String>, value: Option<String>) {
        self.values.insert(field.into(), value);
    }

    /// Value of a field, `None` if the field is missing or had no cell.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).and_then(|v| v.as_deref())
    }

}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, Some(v.into()));
        }
        record
    }
}

/// Display metadata for one column.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HeaderField {
    pub field: String,
    pub display_name: String,
    pub width: u32,
}

/// Parsed CSV content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub records: Vec<Record>,
    /// Lower-cased header names in source order, duplicates kept, with
    /// `id` appended when the source header had none.
    pub field_names: Vec<String>,
    /// Column metadata, filled in by the width estimator.
    pub header: Vec<HeaderField>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}

/// Field names with duplicates removed, in first-occurrence order.
pub fn distinct_field_names(field_names: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(field_names.len());
    for name in field_names {
        if !seen.contains(name) {
            seen.push(name.clone());
        }
    }
    seen
}

/// Builds a [`Table`] from CSV text.
pub struct TableBuilder;

impl TableBuilder {
    /// Parse CSV text into a table without column metadata.
    ///
    /// Lines are split on `\n` (a trailing `\r` is dropped) and empty lines
    /// are discarded. The first remaining line is the header. Every record
    /// gets an `id` holding its line position when the header has none.
    pub fn build(csv_text: &str) -> Result<Table, TableError> {
        let lines: Vec<&str> = csv_text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .collect();

        let (header_line, data_lines) = lines.split_first().ok_or(TableError::MissingHeader)?;
        let field_names = Self::parse_header(header_line);
        let has_id = field_names.iter().any(|name| name == ID_FIELD);

        let records: Vec<Record> = data_lines
            .iter()
            .enumerate()
            .map(|(idx, line)| Self::build_record(&field_names, has_id, idx + 1, line))
            .collect();

        let mut field_names = field_names;
        if !has_id {
            field_names.push(ID_FIELD.to_string());
        }

        Ok(Table {
            records,
            field_names,
            header: Vec::new(),
        })
    }

    /// Header cells are split on every comma, stripped of quotes and
    /// lower-cased.
    fn parse_header(line: &str) -> Vec<String> {
        line.split(',')
            .map(|cell| cell.replace('"', "").to_lowercase())
            .collect()
    }

    fn build_record(field_names: &[String], has_id: bool, line_no: usize, line: &str) -> Record {
        let mut values = RowTokenizer::tokenize(line).into_iter();
        let mut record = Record::new();

        for name in field_names {
            record.insert(name.as_str(), values.next());
        }
        if !has_id {
            record.insert(ID_FIELD, Some(line_no.to_string()));
        }

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl Record {
        fn contains_field(&self, field: &str) -> bool {
            self.values.contains_key(field)
        }

        fn field_count(&self) -> usize {
            self.values.len()
        }

        fn fields(&self) -> impl Iterator<Item = &str> {
            self.values.keys().map(String::as_str)
        }
    }

    #[test]
    fn header_is_lowercased_and_unquoted() {
        let table = TableBuilder::build("\"Name\",AMOUNT,\"Id\"\nfoo,1,7\n").unwrap();
        assert_eq!(table.field_names, vec!["name", "amount", "id"]);
    }

    #[test]
    fn existing_id_column_is_kept() {
        let table = TableBuilder::build("id,name\n42,foo\n43,bar\n").unwrap();

        assert_eq!(table.field_names, vec!["id", "name"]);
        for record in &table.records {
            assert_eq!(record.field_count(), 2);
        }
        assert_eq!(table.records[0].get("id"), Some("42"));
        assert_eq!(table.records[1].get("id"), Some("43"));
    }

    #[test]
    fn synthetic_id_follows_line_position() {
        let table = TableBuilder::build("name,amount\nfoo,1\nbar,2\nbaz,3").unwrap();

        assert_eq!(table.field_names, vec!["name", "amount", "id"]);
        let ids: Vec<_> = table.records.iter().map(|r| r.get("id")).collect();
        assert_eq!(ids, vec![Some("1"), Some("2"), Some("3")]);
    }

    #[test]
    fn empty_lines_are_skipped() {
        let table = TableBuilder::build("\nname\n\nfoo\n\n\nbar\n").unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.records[0].get("name"), Some("foo"));
        assert_eq!(table.records[1].get("id"), Some("2"));
    }

    #[test]
    fn crlf_lines_behave_like_lf() {
        let table = TableBuilder::build("name,amount\r\nfoo,1\r\n\r\n").unwrap();

        assert_eq!(table.field_names, vec!["name", "amount", "id"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.records[0].get("amount"), Some("1"));
    }

    #[test]
    fn short_row_leaves_values_absent() {
        let table = TableBuilder::build("a,b,c\n1\n").unwrap();
        let record = &table.records[0];

        assert_eq!(record.get("a"), Some("1"));
        assert!(record.contains_field("b"));
        assert_eq!(record.get("b"), None);
        assert_eq!(record.get("c"), None);
    }

    #[test]
    fn long_row_extra_cells_are_dropped() {
        let table = TableBuilder::build("a\n1,2,3\n").unwrap();
        assert_eq!(table.records[0].field_count(), 2);
        assert_eq!(table.records[0].get("a"), Some("1"));
    }

    #[test]
    fn duplicate_header_keeps_last_value() {
        let table = TableBuilder::build("x,x\n1,2\n").unwrap();

        assert_eq!(table.field_names, vec!["x", "x", "id"]);
        assert_eq!(distinct_field_names(&table.field_names), vec!["x", "id"]);
        assert_eq!(table.records[0].get("x"), Some("2"));
    }

    #[test]
    fn quoted_values_use_tokenizer() {
        let table = TableBuilder::build("a,b\n\"1,5\",x\n").unwrap();
        assert_eq!(table.records[0].get("a"), Some("1,5"));
        assert_eq!(table.records[0].get("b"), Some("x"));
    }

    #[test]
    fn no_header_is_an_error() {
        assert_eq!(TableBuilder::build(""), Err(TableError::MissingHeader));
        assert_eq!(TableBuilder::build("\n\r\n"), Err(TableError::MissingHeader));
    }

    #[test]
    fn header_only_builds_empty_table() {
        let table = TableBuilder::build("a,b\n").unwrap();
        assert!(table.records.is_empty());
        assert_eq!(table.field_names, vec!["a", "b", "id"]);
    }

    #[test]
    fn building_twice_is_identical() {
        let text = "Name,Qty\nfoo,1\nbar,\"2,0\"\n";
        assert_eq!(TableBuilder::build(text), TableBuilder::build(text));
    }

    #[test]
    fn record_keys_match_field_names() {
        let table = TableBuilder::build("a,b\n1,2\n3\n").unwrap();
        let fields = distinct_field_names(&table.field_names);
        for record in &table.records {
            let mut keys: Vec<&str> = record.fields().collect();
            keys.sort_unstable();
            let mut expected: Vec<&str> = fields.iter().map(String::as_str).collect();
            expected.sort_unstable();
            assert_eq!(keys, expected);
        }
    }
}
