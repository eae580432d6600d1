pub mod base;
pub mod sqlite;
