use crate::sql::base::error::DbError;
use model::core::value::Value;
use rusqlite::{
    ToSql,
    types::{ToSqlOutput, Value as SqlValue, ValueRef},
};

/// A `Value` converted into the storage class SQLite binds.
#[derive(Debug, Clone, PartialEq)]
pub struct SqliteParam(SqlValue);

impl SqliteParam {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Int(v) => SqliteParam(SqlValue::Integer(*v)),
            Value::Float(v) => SqliteParam(SqlValue::Real(*v)),
            Value::Boolean(v) => SqliteParam(SqlValue::Integer(i64::from(*v))),
            Value::Text(v) => SqliteParam(SqlValue::Text(v.clone())),
            Value::Null => SqliteParam(SqlValue::Null),
        }
    }
}

impl ToSql for SqliteParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

pub struct SqliteParamStore {
    pub params: Vec<SqliteParam>,
}

impl SqliteParamStore {
    pub fn from_values(values: &[Value]) -> Self {
        Self {
            params: values.iter().map(SqliteParam::from_value).collect(),
        }
    }
}

/// Reads a stored value back. BLOBs have no `Value` counterpart.
pub fn value_from_sql(column: &str, value: ValueRef<'_>) -> Result<Value, DbError> {
    match value {
        ValueRef::Null => Ok(Value::Null),
        ValueRef::Integer(v) => Ok(Value::Int(v)),
        ValueRef::Real(v) => Ok(Value::Float(v)),
        ValueRef::Text(bytes) => Ok(Value::Text(String::from_utf8_lossy(bytes).into_owned())),
        ValueRef::Blob(_) => Err(DbError::UnsupportedValue {
            column: column.to_string(),
            kind: "BLOB".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{SqliteParam, value_from_sql};
    use model::core::value::Value;
    use rusqlite::types::{Value as SqlValue, ValueRef};

    #[test]
    fn test_boolean_binds_as_integer() {
        assert_eq!(
            SqliteParam::from_value(&Value::Boolean(true)),
            SqliteParam(SqlValue::Integer(1))
        );
        assert_eq!(
            SqliteParam::from_value(&Value::Boolean(false)),
            SqliteParam(SqlValue::Integer(0))
        );
        assert_eq!(SqliteParam::from_value(&Value::Null), SqliteParam(SqlValue::Null));
    }

    #[test]
    fn test_value_from_sql() {
        assert_eq!(value_from_sql("a", ValueRef::Integer(3)).unwrap(), Value::Int(3));
        assert_eq!(
            value_from_sql("a", ValueRef::Text(b"hi")).unwrap(),
            Value::Text("hi".into())
        );
        assert!(value_from_sql("a", ValueRef::Blob(&[1, 2])).is_err());
    }
}
