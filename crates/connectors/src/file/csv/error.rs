use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Invalid CSV option: {0}")]
    InvalidOption(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Bare \" in non-quoted field {field} on line {line}")]
    BareQuote { line: u64, field: usize },
    #[error("Extraneous or missing \" in quoted field {field} on line {line}")]
    ExtraneousQuote { line: u64, field: usize },
}
