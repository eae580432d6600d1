#![allow(dead_code)]

use connectors::sql::base::adapter::SqlAdapter;
use model::{
    core::value::Value,
    records::record::{Record, RecordType},
};

/// Five sensor readings, no header, comma-delimited.
pub const READINGS_CSV: &str = "1,hi,2.8\n2,hello,3.4\n3,yo,90.3\n4,happy,100.5\n5,yay,8.1";

/// Customers with a header row. `Index` is the primary key, `CustomerId` is
/// unique and `Email` is indexed.
pub const CUSTOMERS_CSV: &str = "\
Index,CustomerId,FirstName,Email
1,DD37Cf93aecA6Dc,Sheryl,zunigavanessa@smith.info
2,1Ef7b82A4CAAD10,Preston,vmata@colon.com
3,6F94879bDAfE5a6,Roy,
";

pub struct Reading;

impl Record for Reading {
    fn record_type() -> RecordType {
        RecordType::builder("Reading")
            .field::<i64>("Id")
            .field::<String>("Name")
            .field::<f64>("Value")
            .build()
    }
}

pub struct Customer;

impl Record for Customer {
    fn record_type() -> RecordType {
        RecordType::builder("Customer")
            .annotated::<i64>("Index", "primaryKey")
            .annotated::<String>("CustomerId", "unique")
            .field::<String>("FirstName")
            .annotated::<Option<String>>("Email", "index")
            .build()
    }
}

/// Fetches all rows of a query with no parameters.
pub fn fetch_rows(adapter: &impl SqlAdapter, sql: &str) -> Vec<Vec<Value>> {
    adapter.query_rows(sql, &[]).expect("query rows")
}

pub fn get_row_count(adapter: &impl SqlAdapter, table: &str) -> i64 {
    let rows = fetch_rows(adapter, &format!("SELECT COUNT(*) FROM '{table}';"));
    rows[0][0].as_i64().expect("count is an integer")
}

pub fn assert_row_count(adapter: &impl SqlAdapter, table: &str, expected: i64) {
    let actual = get_row_count(adapter, table);
    assert_eq!(
        actual, expected,
        "expected row count for table '{table}' to be {expected} but got {actual}"
    );
}

pub fn assert_table_exists(adapter: &impl SqlAdapter, table: &str, should: bool) {
    let exists = adapter.table_exists(table).expect("check table");
    assert_eq!(
        exists, should,
        "expected table '{table}' existence to be {should} but got {exists}"
    );
}

/// Column names of `table`, in declaration order.
pub fn get_column_names(adapter: &impl SqlAdapter, table: &str) -> Vec<String> {
    fetch_rows(adapter, &format!("PRAGMA table_info('{table}');"))
        .into_iter()
        .filter_map(|row| row[1].as_str().map(String::from))
        .collect()
}

/// The stored CREATE statement of a table or index.
pub fn get_schema_sql(adapter: &impl SqlAdapter, name: &str) -> Option<String> {
    adapter
        .query_rows(
            "SELECT sql FROM sqlite_master WHERE name = ?;",
            &[Value::Text(name.to_string())],
        )
        .expect("query sqlite_master")
        .into_iter()
        .next()
        .and_then(|row| row[0].as_str().map(String::from))
}
