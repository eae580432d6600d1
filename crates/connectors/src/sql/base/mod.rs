pub mod adapter;
pub mod coercion;
pub mod error;
