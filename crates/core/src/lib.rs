#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::LanguageCatalog;
pub use error::Error;
