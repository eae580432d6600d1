use connectors::sql::base::error::DbError;
use engine_core::error::LoadError;
use planner::error::SchemaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the schema file: {0}")]
    SchemaFileRead(#[from] std::io::Error),

    #[error("Failed to deserialize the schema file as JSON: {0}")]
    SchemaDeserialize(#[from] serde_json::Error),

    #[error("Invalid record description: {0}")]
    Schema(#[from] SchemaError),

    #[error("Failed to open the database: {0}")]
    Database(#[from] DbError),

    #[error("Load failed: {0}")]
    Load(#[from] LoadError),
}
