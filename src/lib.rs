pub mod blog;
pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod session;

pub use error::{AtlasError, Result};
