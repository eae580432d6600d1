use crate::file::csv::{
    error::FileError,
    quotes::{LeadingSpaceTrim, QuoteViolation, check_quotes, leading_noise},
    settings::CsvFormatOptions,
};
use std::{
    cell::RefCell,
    fs::File,
    io::{self, Read},
    path::Path,
    rc::Rc,
};

/// Raw text fields of one CSV record, in source column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based data row number; the header row is not counted.
    pub number: u64,
    /// Line on which the record starts.
    pub line: u64,
    fields: csv::StringRecord,
}

impl RawRow {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index)
    }

    pub fn iter(&self) -> csv::StringRecordIter<'_> {
        self.fields.iter()
    }
}

/// Hands bytes to the tokenizer and keeps a copy of the ones not yet
/// consumed, so each record's raw text is available for line tracking and
/// strict quote checks. With `trim` set, leading field space is dropped here,
/// before the tokenizer decides whether a field is quoted.
struct Tap<R> {
    inner: R,
    captured: Rc<RefCell<Vec<u8>>>,
    trim: Option<LeadingSpaceTrim>,
}

impl<R: Read> Read for Tap<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let n = self.inner.read(buf)?;
            let kept = match self.trim.as_mut() {
                Some(trim) => trim.filter_in_place(&mut buf[..n]),
                None => n,
            };
            // A read that was all trimmed space must not look like EOF.
            if kept > 0 || n == 0 {
                self.captured.borrow_mut().extend_from_slice(&buf[..kept]);
                return Ok(kept);
            }
        }
    }
}

/// Lazy, sequential stream of CSV records. Only the record being yielded is
/// held in memory.
pub struct CsvSource<R: Read> {
    reader: csv::Reader<Tap<R>>,
    record: csv::StringRecord,
    captured: Rc<RefCell<Vec<u8>>>,
    /// Stream offset of the first captured byte.
    captured_base: u64,
    delimiter: u8,
    comment: Option<u8>,
    lazy_quotes: bool,
    rows_read: u64,
    finished: bool,
}

impl<R: Read> CsvSource<R> {
    pub fn from_reader(reader: R, options: &CsvFormatOptions) -> Result<Self, FileError> {
        let builder = options.reader_builder()?;
        let captured = Rc::new(RefCell::new(Vec::new()));
        let delimiter = options.delimiter_byte()?;

        let tap = Tap {
            inner: reader,
            captured: captured.clone(),
            trim: options
                .trim_leading_space
                .then(|| LeadingSpaceTrim::new(delimiter)),
        };

        Ok(CsvSource {
            reader: builder.from_reader(tap),
            record: csv::StringRecord::new(),
            captured,
            captured_base: 0,
            delimiter,
            comment: options.comment_byte()?,
            lazy_quotes: options.use_lazy_quotes,
            rows_read: 0,
            finished: false,
        })
    }

    /// Number of data rows yielded so far.
    pub fn rows_read(&self) -> u64 {
        self.rows_read
    }

    fn next_row(&mut self) -> Result<Option<RawRow>, FileError> {
        if !self.reader.read_record(&mut self.record)? {
            return Ok(None);
        }
        self.rows_read += 1;

        // The record's reported start precedes any blank or comment lines the
        // tokenizer skipped to reach it.
        let start = self
            .record
            .position()
            .map_or(self.captured_base, |p| p.byte());
        let end = self.reader.position().byte();

        let mut bytes = self.captured.borrow_mut();
        let to = (end.saturating_sub(self.captured_base) as usize).min(bytes.len());
        let from = (start.saturating_sub(self.captured_base) as usize).min(to);
        let (skipped, skipped_lines) = leading_noise(&bytes[from..to], self.comment);
        let line = self.record.position().map_or(0, |p| p.line()) + skipped_lines;

        if !self.lazy_quotes {
            check_quotes(&bytes[from + skipped..to], self.delimiter).map_err(|violation| {
                match violation {
                    QuoteViolation::Bare { field } => FileError::BareQuote { line, field },
                    QuoteViolation::Extraneous { field } => {
                        FileError::ExtraneousQuote { line, field }
                    }
                }
            })?;
        }

        bytes.drain(..to);
        self.captured_base += to as u64;
        drop(bytes);

        Ok(Some(RawRow {
            number: self.rows_read,
            line,
            fields: self.record.clone(),
        }))
    }
}

impl CsvSource<File> {
    pub fn from_path(path: impl AsRef<Path>, options: &CsvFormatOptions) -> Result<Self, FileError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => FileError::NotFound(path.display().to_string()),
            io::ErrorKind::PermissionDenied => {
                FileError::PermissionDenied(path.display().to_string())
            }
            _ => FileError::IoError(err),
        })?;
        Self::from_reader(file, options)
    }
}

impl<R: Read> Iterator for CsvSource<R> {
    type Item = Result<RawRow, FileError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_row() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
