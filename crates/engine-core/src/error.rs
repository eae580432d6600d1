use connectors::{
    file::csv::error::FileError,
    sql::base::{coercion::TypeConversionError, error::DbError},
};
use model::core::data_type::DataType;
use planner::error::SchemaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Row {row} (line {line}) has {actual} fields, expected {expected}")]
    RowWidthMismatch {
        row: u64,
        line: u64,
        expected: usize,
        actual: usize,
    },

    #[error("Row {row}: cannot convert '{raw_value}' in column '{column}' to {target}")]
    TypeConversion {
        row: u64,
        column: String,
        raw_value: String,
        target: DataType,
    },

    #[error("Table already exists: {0}")]
    TableAlreadyExists(String),

    /// Failures reported by the database engine, passed through unchanged.
    #[error(transparent)]
    Database(#[from] DbError),

    #[error(transparent)]
    File(#[from] FileError),
}

impl LoadError {
    pub(crate) fn conversion(row: u64, err: TypeConversionError) -> Self {
        LoadError::TypeConversion {
            row,
            column: err.column,
            raw_value: err.raw_value,
            target: err.target,
        }
    }
}
