//! Error types for the data-loader crate.

use crate::types::CocktailId;
use thiserror::Error;

/// Errors that can occur while loading and validating cocktail data
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Document in a data file couldn't be parsed
    #[error("Parse error at line {line}, column {column} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        column: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two cocktails share an id
    #[error("Duplicate cocktail id {id}")]
    DuplicateCocktail { id: CocktailId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
