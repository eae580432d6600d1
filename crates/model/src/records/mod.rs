pub mod field;
pub mod record;
