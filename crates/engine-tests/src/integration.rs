#[cfg(test)]
mod tests {
    use crate::{
        csv_file,
        utils::{
            CUSTOMERS_CSV, Customer, READINGS_CSV, Reading, assert_row_count,
            assert_table_exists, fetch_rows, get_column_names, get_schema_sql,
        },
    };
    use connectors::{
        file::csv::{error::FileError, settings::CsvFormatOptions},
        sql::{
            base::error::DbError,
            sqlite::adapter::{DatabasePath, SqliteAdapter},
        },
    };
    use engine_core::{
        error::LoadError,
        load::{
            connect_new, connect_new_at, create_table, load_into, load_new, load_record_into,
            load_record_new,
        },
    };
    use model::{
        core::{data_type::DataType, value::Value},
        records::record::{Record, RecordType},
    };
    use planner::error::SchemaError;
    use tracing_test::traced_test;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    // Test Settings: Default (no header, comma delimiter).
    // Scenario: Load five readings and filter on Value.
    // Expected Outcome: rows with Value > 80 ordered by Name are (4,happy,100.5) then (3,yo,90.3).
    #[traced_test]
    #[test]
    fn tc01() {
        let adapter =
            load_new(&Reading::record_type(), READINGS_CSV.as_bytes(), &Default::default())
                .unwrap();

        let rows = fetch_rows(
            &adapter,
            "SELECT Id, Name, Value FROM Reading WHERE Value > 80 ORDER BY Name ASC;",
        );
        assert_eq!(
            rows,
            vec![
                vec![Value::Int(4), text("happy"), Value::Float(100.5)],
                vec![Value::Int(3), text("yo"), Value::Float(90.3)],
            ]
        );
        assert!(logs_contain("Load committed"));
    }

    // Test Settings: HEADER = TRUE.
    // Scenario: Customer record with primaryKey, unique and index annotations.
    // Expected Outcome:
    // - The stored table DDL carries the named PK and UNIQUE constraints.
    // - A separate NonClustered index exists for the indexed field.
    // - The header row is not loaded.
    #[traced_test]
    #[test]
    fn tc02() {
        let options = CsvFormatOptions::default().with_header(true);
        let adapter =
            load_new(&Customer::record_type(), CUSTOMERS_CSV.as_bytes(), &options).unwrap();

        let table_sql = get_schema_sql(&adapter, "Customer").unwrap();
        assert!(table_sql.contains("CONSTRAINT PK_Customer_Index PRIMARY KEY('Index')"));
        assert!(table_sql.contains("CONSTRAINT Unique_Customer_CustomerId UNIQUE('CustomerId')"));

        let index_sql = get_schema_sql(&adapter, "NonClustered_Customer_Email").unwrap();
        assert_eq!(
            index_sql,
            "CREATE INDEX NonClustered_Customer_Email ON 'Customer'('Email')"
        );

        assert_eq!(
            get_column_names(&adapter, "Customer"),
            vec!["Index", "CustomerId", "FirstName", "Email"]
        );
        assert_row_count(&adapter, "Customer", 3);
    }

    // Test Settings: HEADER = TRUE.
    // Scenario: The third customer repeats a unique CustomerId.
    // Expected Outcome: The engine error is surfaced unchanged and no customer rows remain.
    #[traced_test]
    #[test]
    fn tc03() {
        let csv = "\
Index,CustomerId,FirstName,Email
1,A,Sheryl,a@x.io
2,B,Preston,b@x.io
3,A,Roy,c@x.io
";
        let options = CsvFormatOptions::default().with_header(true);
        let adapter = SqliteAdapter::open_in_memory().unwrap();

        let err = load_into(&adapter, &Customer::record_type(), csv.as_bytes(), &options)
            .unwrap_err();
        assert!(matches!(err, LoadError::Database(DbError::Sql(_))));

        assert_table_exists(&adapter, "Customer", true);
        assert_row_count(&adapter, "Customer", 0);
        assert!(logs_contain("rolling back"));
    }

    // Test Settings: Default.
    // Scenario: Mixed kinds round-trip through the table.
    // Expected Outcome: N rows in, N rows out, values equal to the parsed fields in column order.
    #[traced_test]
    #[test]
    fn tc04() {
        let record = RecordType::builder("Measurement")
            .field::<u32>("Id")
            .field::<i16>("Delta")
            .field::<f32>("Ratio")
            .field::<String>("Label")
            .build();
        let csv = "1,-5,0.25,first\n2,0,1e2,\"second, quoted\"\n3,32767,-1.5,third\n";

        let adapter = load_new(&record, csv.as_bytes(), &Default::default()).unwrap();
        let rows = fetch_rows(&adapter, "SELECT * FROM Measurement ORDER BY Id;");

        assert_eq!(
            rows,
            vec![
                vec![Value::Int(1), Value::Int(-5), Value::Float(0.25), text("first")],
                vec![Value::Int(2), Value::Int(0), Value::Float(100.0), text("second, quoted")],
                vec![Value::Int(3), Value::Int(32767), Value::Float(-1.5), text("third")],
            ]
        );
    }

    // Test Settings: Default.
    // Scenario: Nullable columns receive "", "null" and "NULL"; a non-nullable TEXT column receives "".
    // Expected Outcome: Nullable columns store NULL; the TEXT column stores the empty string.
    #[traced_test]
    #[test]
    fn tc05() {
        let record = RecordType::builder("Sparse")
            .field::<i64>("Id")
            .field::<Option<i64>>("Count")
            .field::<Option<f64>>("Score")
            .field::<Option<String>>("Note")
            .field::<String>("Tag")
            .build();
        let csv = "1,,null,NULL,\n2,null,NULL,,x\n3,NULL,,null,y\n4,7,1.5,Null,z\n";

        let adapter = load_new(&record, csv.as_bytes(), &Default::default()).unwrap();
        let rows = fetch_rows(&adapter, "SELECT * FROM Sparse ORDER BY Id;");

        for row in &rows[..3] {
            assert_eq!(&row[1..4], &[Value::Null, Value::Null, Value::Null]);
        }
        assert_eq!(rows[0][4], text(""));
        assert_eq!(
            rows[3],
            vec![Value::Int(4), Value::Int(7), Value::Float(1.5), text("Null"), text("z")]
        );
    }

    // Test Settings: Default.
    // Scenario: A null sentinel lands in a non-nullable INTEGER column.
    // Expected Outcome: TypeConversion error for that row; no rows are kept.
    #[traced_test]
    #[test]
    fn tc06() {
        let csv = "1,a,1.0\nnull,b,2.0\n";
        let adapter = SqliteAdapter::open_in_memory().unwrap();

        let err = load_into(&adapter, &Reading::record_type(), csv.as_bytes(), &Default::default())
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::TypeConversion { row: 2, ref column, ref raw_value, target: DataType::Integer }
                if column == "Id" && raw_value == "null"
        ));
        assert_row_count(&adapter, "Reading", 0);
    }

    // Test Settings: Default.
    // Scenario: Row 3 of 5 has a non-numeric Value.
    // Expected Outcome:
    // - The load fails with TypeConversion on row 3.
    // - The table exists with the right schema and holds 0 of the 5 rows.
    #[traced_test]
    #[test]
    fn tc07() {
        let csv = "1,hi,2.8\n2,hello,3.4\n3,yo,ninety\n4,happy,100.5\n5,yay,8.1";
        let adapter = SqliteAdapter::open_in_memory().unwrap();

        let err = load_into(&adapter, &Reading::record_type(), csv.as_bytes(), &Default::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::TypeConversion { row: 3, .. }));

        assert_table_exists(&adapter, "Reading", true);
        assert_eq!(get_column_names(&adapter, "Reading"), vec!["Id", "Name", "Value"]);
        assert_row_count(&adapter, "Reading", 0);
    }

    // Test Settings: Default.
    // Scenario: The fourth row has one field too few.
    // Expected Outcome: RowWidthMismatch with the row's position; nothing committed.
    #[traced_test]
    #[test]
    fn tc08() {
        let csv = "1,hi,2.8\n2,hello,3.4\n3,yo,90.3\n4,happy\n";
        let adapter = SqliteAdapter::open_in_memory().unwrap();

        let err = load_into(&adapter, &Reading::record_type(), csv.as_bytes(), &Default::default())
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::RowWidthMismatch { row: 4, line: 4, expected: 3, actual: 2 }
        ));
        assert_row_count(&adapter, "Reading", 0);
    }

    // Test Settings: On-disk database.
    // Scenario: Load into a file database, reopen it and load the same record again.
    // Expected Outcome:
    // - The second load fails with TableAlreadyExists.
    // - The rows of the first load are still there.
    #[traced_test]
    #[test]
    fn tc09() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = DatabasePath::File(dir.path().join("readings.db"));
        let csv = csv_file(READINGS_CSV);

        let adapter = connect_new_at(&db_path, &Reading::record_type(), csv.path(), None).unwrap();
        adapter.close().unwrap();

        let reopened = SqliteAdapter::open_at(&db_path).unwrap();
        assert_row_count(&reopened, "Reading", 5);

        let err = create_table(&reopened, &Reading::record_type(), csv.path(), None).unwrap_err();
        assert!(matches!(err, LoadError::TableAlreadyExists(ref t) if t == "Reading"));
        assert_row_count(&reopened, "Reading", 5);
    }

    // Test Settings: DELIMITER = ';', COMMENT = '#', HEADER = TRUE, TRIM_LEADING_SPACE = TRUE.
    // Scenario: A commented, semicolon-separated file with padded fields.
    // Expected Outcome: Comments and header are skipped; leading spaces are trimmed.
    #[traced_test]
    #[test]
    fn tc10() {
        let csv = csv_file("# exported readings\nId;Name;Value\n1;  alpha;  1.5\n# gap\n2; beta;2.5\n");
        let options = CsvFormatOptions::default()
            .with_delimiter(';')
            .with_comment('#')
            .with_header(true)
            .with_trim_leading_space(true);

        let adapter = connect_new(&Reading::record_type(), csv.path(), Some(&options)).unwrap();
        let rows = fetch_rows(&adapter, "SELECT Id, Name, Value FROM Reading ORDER BY Id;");

        assert_eq!(
            rows,
            vec![
                vec![Value::Int(1), text("alpha"), Value::Float(1.5)],
                vec![Value::Int(2), text("beta"), Value::Float(2.5)],
            ]
        );
    }

    // Test Settings: LAZY_QUOTES = FALSE, then TRUE.
    // Scenario: A bare quote inside an unquoted field.
    // Expected Outcome: Strict mode rejects the row; lazy mode keeps the quote as text.
    #[traced_test]
    #[test]
    fn tc11() {
        let csv = "1,6\" ruler,2.5\n";

        let strict = SqliteAdapter::open_in_memory().unwrap();
        let err = load_into(&strict, &Reading::record_type(), csv.as_bytes(), &Default::default())
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::File(FileError::BareQuote { line: 1, field: 2 })
        ));
        assert_row_count(&strict, "Reading", 0);

        let options = CsvFormatOptions::default().with_lazy_quotes(true);
        let adapter = load_new(&Reading::record_type(), csv.as_bytes(), &options).unwrap();
        let rows = fetch_rows(&adapter, "SELECT Name FROM Reading;");
        assert_eq!(rows, vec![vec![text("6\" ruler")]]);
    }

    // Test Settings: Default.
    // Scenario: Two primaryKey annotations.
    // Expected Outcome: DuplicateConstraint before any table is created.
    #[traced_test]
    #[test]
    fn tc12() {
        let record = RecordType::builder("Twice")
            .annotated::<i64>("A", "primaryKey")
            .annotated::<i64>("B", "primaryKey")
            .build();
        let adapter = SqliteAdapter::open_in_memory().unwrap();

        let err = load_into(&adapter, &record, "1,2\n".as_bytes(), &Default::default()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Schema(SchemaError::DuplicateConstraint { .. })
        ));
        assert_table_exists(&adapter, "Twice", false);
    }

    // Test Settings: Default.
    // Scenario: Two record types loaded into the same database, one through the `Record` helper.
    // Expected Outcome: Both tables exist independently.
    #[traced_test]
    #[test]
    fn tc13() {
        let adapter = load_record_new::<Reading, _>(READINGS_CSV.as_bytes(), &Default::default())
            .unwrap();
        let copy = Reading::record_type().with_table_name("ReadingCopy");

        let summary =
            load_into(&adapter, &copy, "9,nine,9.9\n".as_bytes(), &Default::default()).unwrap();
        assert_eq!(summary.rows_inserted, 1);
        assert_eq!(summary.table, "ReadingCopy");

        assert_row_count(&adapter, "Reading", 5);
        assert_row_count(&adapter, "ReadingCopy", 1);
    }

    // Test Settings: Default.
    // Scenario: A record with a Boolean field.
    // Expected Outcome:
    // - The column is declared INTEGER with the quoted-name CHECK clause.
    // - An empty source loads; the CHECK compares a string literal, so a row is refused by the engine.
    #[traced_test]
    #[test]
    fn tc14() {
        let record = RecordType::builder("Flag")
            .field::<i64>("Id")
            .field::<bool>("Active")
            .build();

        let adapter = load_new(&record, "".as_bytes(), &Default::default()).unwrap();
        let table_sql = get_schema_sql(&adapter, "Flag").unwrap();
        assert!(table_sql.contains("'Active' INTEGER NOT NULL CHECK('Active' IN (0,1))"));
        assert_row_count(&adapter, "Flag", 0);

        let other = SqliteAdapter::open_in_memory().unwrap();
        let err = load_into(&other, &record, "1,true\n".as_bytes(), &Default::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::Database(_)));
        assert_row_count(&other, "Flag", 0);
    }

    // Test Settings: Default.
    // Scenario: A nullable Boolean column fed "", "null" and "NULL", then the mixed-case "Null".
    // Expected Outcome:
    // - The sentinels coerce to null and reach the engine, which refuses the row through the CHECK clause.
    // - "Null" is not a sentinel and fails conversion to Boolean on row 1.
    #[traced_test]
    #[test]
    fn tc15() {
        let record = RecordType::builder("Survey")
            .field::<i64>("Id")
            .field::<Option<bool>>("Answered")
            .build();

        let adapter = SqliteAdapter::open_in_memory().unwrap();
        let err = load_into(&adapter, &record, "1,\n2,null\n3,NULL\n".as_bytes(), &Default::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::Database(DbError::Sql(_))));
        let table_sql = get_schema_sql(&adapter, "Survey").unwrap();
        assert!(table_sql.contains("'Answered' INTEGER NULL CHECK('Answered' IN (0,1))"));
        assert_row_count(&adapter, "Survey", 0);

        let other = SqliteAdapter::open_in_memory().unwrap();
        let err = load_into(&other, &record, "1,Null\n".as_bytes(), &Default::default())
            .unwrap_err();
        match err {
            LoadError::TypeConversion { row, column, raw_value, target } => {
                assert_eq!(row, 1);
                assert_eq!(column, "Answered");
                assert_eq!(raw_value, "Null");
                assert_eq!(target, DataType::Boolean);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_row_count(&other, "Survey", 0);
    }

    // Test Settings: TRIM_LEADING_SPACE = TRUE, LAZY_QUOTES = FALSE.
    // Scenario: Quoted fields preceded by spaces and tabs, one holding the delimiter.
    // Expected Outcome:
    // - With trimming the quotes open the fields, so the embedded comma stays in the value.
    // - Without trimming the same file is rejected with a bare quote.
    #[traced_test]
    #[test]
    fn tc16() {
        let csv = "1, \"a, b\", 2.5\n2,\t\"c\",3.5\n";
        let options = CsvFormatOptions::default().with_trim_leading_space(true);

        let adapter = load_new(&Reading::record_type(), csv.as_bytes(), &options).unwrap();
        let rows = fetch_rows(&adapter, "SELECT Id, Name, Value FROM Reading ORDER BY Id;");
        assert_eq!(
            rows,
            vec![
                vec![Value::Int(1), text("a, b"), Value::Float(2.5)],
                vec![Value::Int(2), text("c"), Value::Float(3.5)],
            ]
        );

        let strict = SqliteAdapter::open_in_memory().unwrap();
        let err = load_into(&strict, &Reading::record_type(), csv.as_bytes(), &Default::default())
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::File(FileError::BareQuote { line: 1, field: 2 })
        ));
    }

    // Test Settings: Default.
    // Scenario: Two tables whose generated index names collide (Sales_Region.Code vs Sales.Region_Code).
    // Expected Outcome:
    // - The second CREATE INDEX fails with a database error, not TableAlreadyExists.
    // - The table created just before it is rolled back with it.
    #[traced_test]
    #[test]
    fn tc17() {
        let region = RecordType::builder("Sales_Region")
            .field::<i64>("Id")
            .annotated::<String>("Code", "index")
            .build();
        let sales = RecordType::builder("Sales")
            .field::<i64>("Id")
            .annotated::<String>("Region_Code", "index")
            .build();

        let adapter = load_new(&region, "1,EU\n".as_bytes(), &Default::default()).unwrap();
        assert!(get_schema_sql(&adapter, "NonClustered_Sales_Region_Code").is_some());

        let err = load_into(&adapter, &sales, "1,EU\n".as_bytes(), &Default::default())
            .unwrap_err();
        assert!(matches!(err, LoadError::Database(DbError::Sql(_))));
        assert_table_exists(&adapter, "Sales", false);
        assert_row_count(&adapter, "Sales_Region", 1);
        assert!(logs_contain("DDL failed, rolling back"));
    }

    // Test Settings: HEADER = TRUE.
    // Scenario: Load a `Record` type into an already open database, twice.
    // Expected Outcome: The first load inserts three rows; the second fails with TableAlreadyExists.
    #[traced_test]
    #[test]
    fn tc18() {
        let adapter = SqliteAdapter::open_in_memory().unwrap();
        let options = CsvFormatOptions::default().with_header(true);

        let summary =
            load_record_into::<Customer, _, _>(&adapter, CUSTOMERS_CSV.as_bytes(), &options)
                .unwrap();
        assert_eq!(summary.table, "Customer");
        assert_eq!(summary.rows_inserted, 3);
        assert_row_count(&adapter, "Customer", 3);

        let err = load_record_into::<Customer, _, _>(&adapter, CUSTOMERS_CSV.as_bytes(), &options)
            .unwrap_err();
        assert!(matches!(err, LoadError::TableAlreadyExists(ref t) if t == "Customer"));
        assert_row_count(&adapter, "Customer", 3);
    }
}
