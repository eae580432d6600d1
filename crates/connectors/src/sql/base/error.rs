use thiserror::Error;

/// All errors coming from the database/query layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Any error reported by the embedded engine, passed through unchanged.
    #[error(transparent)]
    Sql(#[from] rusqlite::Error),

    /// A stored value has no `Value` counterpart (e.g. a BLOB).
    #[error("Unsupported value in column '{column}': {kind}")]
    UnsupportedValue { column: String, kind: String },
}

impl DbError {
    /// Whether the engine rejected a CREATE TABLE because the name is taken.
    ///
    /// Depending on the engine version the message arrives either as a plain
    /// failure or as an input error pointing at the offending token.
    pub fn is_table_already_exists(&self) -> bool {
        match self {
            DbError::Sql(rusqlite::Error::SqliteFailure(_, Some(message)))
            | DbError::Sql(rusqlite::Error::SqlInputError { msg: message, .. }) => {
                message.starts_with("table ") && message.ends_with("already exists")
            }
            _ => false,
        }
    }
}
