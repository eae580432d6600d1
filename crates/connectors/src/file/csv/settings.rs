use crate::file::csv::error::FileError;
use serde::{Deserialize, Serialize};

/// Tokenizer options for one CSV source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvFormatOptions {
    pub delimiter: char,
    pub comment: Option<char>,
    pub has_header_row: bool,
    pub trim_leading_space: bool,
    /// Accept bare quotes in unquoted fields and stray quotes in quoted ones.
    pub use_lazy_quotes: bool,
}

impl Default for CsvFormatOptions {
    fn default() -> Self {
        CsvFormatOptions {
            delimiter: ',',
            comment: None,
            has_header_row: false,
            trim_leading_space: false,
            use_lazy_quotes: false,
        }
    }
}

impl CsvFormatOptions {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_comment(mut self, comment: char) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn with_header(mut self, has_header_row: bool) -> Self {
        self.has_header_row = has_header_row;
        self
    }

    pub fn with_trim_leading_space(mut self, trim: bool) -> Self {
        self.trim_leading_space = trim;
        self
    }

    pub fn with_lazy_quotes(mut self, lazy: bool) -> Self {
        self.use_lazy_quotes = lazy;
        self
    }

    pub fn delimiter_byte(&self) -> Result<u8, FileError> {
        let delimiter = single_byte("delimiter", self.delimiter)?;
        if matches!(delimiter, b'"' | b'\r' | b'\n') {
            return Err(FileError::InvalidOption(format!(
                "delimiter cannot be {:?}",
                self.delimiter
            )));
        }
        Ok(delimiter)
    }

    pub fn comment_byte(&self) -> Result<Option<u8>, FileError> {
        let Some(comment) = self.comment else {
            return Ok(None);
        };
        let byte = single_byte("comment character", comment)?;
        if comment == self.delimiter || matches!(byte, b'"' | b'\r' | b'\n') {
            return Err(FileError::InvalidOption(format!(
                "comment character cannot be {comment:?}"
            )));
        }
        Ok(Some(byte))
    }

    /// Builds the tokenizer. Rows are read flexibly so that width mismatches
    /// are reported by the loader against the schema, not by the tokenizer.
    pub fn reader_builder(&self) -> Result<csv::ReaderBuilder, FileError> {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.delimiter_byte()?)
            .comment(self.comment_byte()?)
            .has_headers(self.has_header_row)
            .double_quote(true)
            .escape(None)
            .flexible(true);
        Ok(builder)
    }
}

fn single_byte(option: &str, c: char) -> Result<u8, FileError> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(FileError::InvalidOption(format!(
            "{option} must be a single-byte character, got {c:?}"
        )))
    }
}
