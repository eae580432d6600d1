use crate::sql::base::error::DbError;
use model::core::value::Value;

/// Capability surface of the embedded SQL engine.
///
/// Transactions are explicit: `begin` opens one on the connection and it stays
/// open until `commit` or `rollback`.
pub trait SqlAdapter {
    /// Executes one or more statements without parameters.
    fn exec(&self, sql: &str) -> Result<(), DbError>;

    /// Executes a single parameterized statement, binding `params`
    /// positionally. Returns the number of rows changed.
    fn exec_params(&self, sql: &str, params: &[Value]) -> Result<usize, DbError>;

    fn query_rows(&self, sql: &str, params: &[Value]) -> Result<Vec<Vec<Value>>, DbError>;

    fn begin(&self) -> Result<(), DbError>;
    fn commit(&self) -> Result<(), DbError>;
    fn rollback(&self) -> Result<(), DbError>;

    // Introspection
    fn table_exists(&self, table: &str) -> Result<bool, DbError>;
}
