use crate::error::CliError;
use connectors::file::csv::settings::CsvFormatOptions;
use model::records::record::RecordType;
use serde::Deserialize;
use std::path::Path;

/// A record description plus an optional CSV `format` block.
///
/// ```json
/// {
///   "name": "Customer",
///   "fields": [
///     { "name": "Index", "type": "i64", "annotation": "primaryKey" },
///     { "name": "Email", "type": "Option<String>", "annotation": "index" }
///   ],
///   "format": { "has_header_row": true }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct SchemaFile {
    #[serde(flatten)]
    pub record: RecordType,
    #[serde(default)]
    pub format: CsvFormatOptions,
}

impl SchemaFile {
    pub fn read(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let source = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&source)?)
    }

    /// The record, renamed to `table` when one is given.
    pub fn record(&self, table: Option<&str>) -> RecordType {
        match table {
            Some(table) => self.record.clone().with_table_name(table),
            None => self.record.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SchemaFile;
    use std::io::Write;

    #[test]
    fn test_read_schema_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "Reading",
                "fields": [
                    {{ "name": "Id", "type": "i64", "annotation": "primaryKey" }},
                    {{ "name": "Value", "type": "Option<f64>" }}
                ],
                "format": {{ "delimiter": ";", "has_header_row": true }}
            }}"#
        )
        .unwrap();

        let schema = SchemaFile::read(file.path()).unwrap();
        assert_eq!(schema.record.fields.len(), 2);
        assert_eq!(schema.format.delimiter, ';');
        assert!(schema.format.has_header_row);
        assert_eq!(schema.record(Some("readings")).table_name(), "readings");
        assert_eq!(schema.record(None).table_name(), "Reading");
    }

    #[test]
    fn test_format_block_is_optional() {
        let schema: SchemaFile =
            serde_json::from_str(r#"{ "name": "T", "fields": [] }"#).unwrap();
        assert_eq!(schema.format.delimiter, ',');
    }
}
