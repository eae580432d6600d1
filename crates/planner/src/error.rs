use model::records::field::DeclaredType;
use thiserror::Error;

/// Errors raised while resolving a record description into a table schema.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The field's declared type has no column kind.
    #[error("Unsupported field kind for '{field}': {declared}")]
    UnsupportedFieldKind { field: String, declared: DeclaredType },

    /// The annotation token is not `primaryKey`, `unique` or `index`.
    #[error("Invalid annotation '{annotation}' on field '{field}'")]
    InvalidAnnotation { field: String, annotation: String },

    /// More than one field is annotated `primaryKey`.
    #[error("Duplicate primary key: '{second}' conflicts with '{first}'")]
    DuplicateConstraint { first: String, second: String },

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Record '{0}' has no fields")]
    EmptyRecord(String),
}
