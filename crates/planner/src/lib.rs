pub mod error;
pub mod generator;
pub mod query;
pub mod resolver;
