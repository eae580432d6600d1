//! Public load operations.
//!
//! `load_new` / `load_into` take any `io::Read` as the CSV source;
//! `connect_new` / `create_table` are the path-based forms.

use crate::{
    error::LoadError,
    executor::{LoadExecutor, LoadSummary},
};
use connectors::{
    file::csv::{settings::CsvFormatOptions, source::CsvSource},
    sql::{
        base::adapter::SqlAdapter,
        sqlite::adapter::{DatabasePath, SqliteAdapter},
    },
};
use model::records::record::{Record, RecordType};
use planner::resolver;
use std::{io::Read, path::Path};
use tracing::info;

/// Opens a fresh in-memory database and loads `source` into a new table.
/// Closing the returned handle is up to the caller.
pub fn load_new<R: Read>(
    record: &RecordType,
    source: R,
    options: &CsvFormatOptions,
) -> Result<SqliteAdapter, LoadError> {
    let adapter = SqliteAdapter::open_in_memory()?;
    load_into(&adapter, record, source, options)?;
    Ok(adapter)
}

/// Creates the record's table on an open database and loads `source` into it.
/// Fails with `TableAlreadyExists` if the table name is taken.
pub fn load_into<A, R>(
    adapter: &A,
    record: &RecordType,
    source: R,
    options: &CsvFormatOptions,
) -> Result<LoadSummary, LoadError>
where
    A: SqlAdapter + ?Sized,
    R: Read,
{
    let schema = resolver::resolve(record)?;
    // Bad format options must fail before any DDL runs.
    let source = CsvSource::from_reader(source, options)?;

    info!(
        record = %record.name,
        table = %schema.name,
        columns = schema.width(),
        "Loading CSV"
    );

    let executor = LoadExecutor::new(adapter, schema);
    executor.create_schema()?;
    executor.insert_rows(source)
}

/// Path-based form of [`load_new`]. `options` defaults to
/// `CsvFormatOptions::default()`.
pub fn connect_new(
    record: &RecordType,
    csv_path: impl AsRef<Path>,
    options: Option<&CsvFormatOptions>,
) -> Result<SqliteAdapter, LoadError> {
    connect_new_at(&DatabasePath::InMemory, record, csv_path, options)
}

/// Like [`connect_new`], but the database may live on disk. An existing file
/// is opened, a missing one is created.
pub fn connect_new_at(
    database: &DatabasePath,
    record: &RecordType,
    csv_path: impl AsRef<Path>,
    options: Option<&CsvFormatOptions>,
) -> Result<SqliteAdapter, LoadError> {
    let adapter = SqliteAdapter::open_at(database)?;
    create_table(&adapter, record, csv_path, options)?;
    Ok(adapter)
}

/// Path-based form of [`load_into`].
pub fn create_table<A: SqlAdapter + ?Sized>(
    adapter: &A,
    record: &RecordType,
    csv_path: impl AsRef<Path>,
    options: Option<&CsvFormatOptions>,
) -> Result<LoadSummary, LoadError> {
    let default_options = CsvFormatOptions::default();
    let options = options.unwrap_or(&default_options);

    let schema = resolver::resolve(record)?;
    let source = CsvSource::from_path(csv_path.as_ref(), options)?;

    info!(
        record = %record.name,
        table = %schema.name,
        csv = %csv_path.as_ref().display(),
        "Loading CSV file"
    );

    let executor = LoadExecutor::new(adapter, schema);
    executor.create_schema()?;
    executor.insert_rows(source)
}

/// [`load_new`] for a type that describes its own record layout.
pub fn load_record_new<T: Record, R: Read>(
    source: R,
    options: &CsvFormatOptions,
) -> Result<SqliteAdapter, LoadError> {
    load_new(&T::record_type(), source, options)
}

/// [`load_into`] for a type that describes its own record layout.
pub fn load_record_into<T, A, R>(
    adapter: &A,
    source: R,
    options: &CsvFormatOptions,
) -> Result<LoadSummary, LoadError>
where
    T: Record,
    A: SqlAdapter + ?Sized,
    R: Read,
{
    load_into(adapter, &T::record_type(), source, options)
}

#[cfg(test)]
mod tests {
    use super::{connect_new, create_table, load_into, load_new};
    use crate::error::LoadError;
    use connectors::{
        file::csv::{error::FileError, settings::CsvFormatOptions},
        sql::base::adapter::SqlAdapter,
    };
    use model::{core::value::Value, records::record::RecordType};
    use planner::error::SchemaError;
    use std::io::Write;

    fn reading() -> RecordType {
        RecordType::builder("Reading")
            .field::<i64>("Id")
            .field::<String>("Name")
            .field::<f64>("Value")
            .build()
    }

    #[test]
    fn test_load_new_returns_open_handle() {
        let adapter = load_new(&reading(), "1,a,1.5\n2,b,2.5\n".as_bytes(), &Default::default())
            .unwrap();

        let rows = adapter
            .query_rows("SELECT COUNT(*) FROM Reading", &[])
            .unwrap();
        assert_eq!(rows, vec![vec![Value::Int(2)]]);
    }

    #[test]
    fn test_schema_error_stops_before_ddl() {
        let record = RecordType::builder("Bad")
            .field::<i64>("Id")
            .field::<Vec<u8>>("Payload")
            .build();

        let adapter = load_new(&reading(), "".as_bytes(), &Default::default()).unwrap();
        let err = load_into(&adapter, &record, "".as_bytes(), &Default::default()).unwrap_err();

        assert!(matches!(
            err,
            LoadError::Schema(SchemaError::UnsupportedFieldKind { .. })
        ));
        assert!(!adapter.table_exists("Bad").unwrap());
    }

    #[test]
    fn test_invalid_option_stops_before_ddl() {
        let adapter = load_new(&reading(), "".as_bytes(), &Default::default()).unwrap();
        let record = reading().with_table_name("Other");
        let options = CsvFormatOptions::default().with_delimiter('\n');

        let err = load_into(&adapter, &record, "".as_bytes(), &options).unwrap_err();
        assert!(matches!(err, LoadError::File(FileError::InvalidOption(_))));
        assert!(!adapter.table_exists("Other").unwrap());
    }

    #[test]
    fn test_table_already_exists() {
        let adapter = load_new(&reading(), "1,a,1.5\n".as_bytes(), &Default::default()).unwrap();
        let err = load_into(&adapter, &reading(), "2,b,2.5\n".as_bytes(), &Default::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::TableAlreadyExists(ref t) if t == "Reading"));
    }

    #[test]
    fn test_path_based_operations() {
        let mut csv = tempfile::NamedTempFile::new().unwrap();
        writeln!(csv, "Id,Name,Value").unwrap();
        writeln!(csv, "1,a,1.5").unwrap();

        let options = CsvFormatOptions::default().with_header(true);
        let adapter = connect_new(&reading(), csv.path(), Some(&options)).unwrap();

        let summary = create_table(
            &adapter,
            &reading().with_table_name("Copy"),
            csv.path(),
            Some(&options),
        )
        .unwrap();
        assert_eq!(summary.rows_inserted, 1);
        assert!(adapter.table_exists("Reading").unwrap());
        assert!(adapter.table_exists("Copy").unwrap());
    }

    #[test]
    fn test_missing_csv_file() {
        let err = connect_new(&reading(), "/no/such/file.csv", None).unwrap_err();
        assert!(matches!(err, LoadError::File(FileError::NotFound(_))));
    }
}
