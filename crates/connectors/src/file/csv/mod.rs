pub mod error;
pub(crate) mod quotes;
pub mod settings;
pub mod source;
