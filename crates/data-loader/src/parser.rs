//! Parser for cocktail data files.
//!
//! Data files are JSON documents. The cocktail file is an array of cocktail
//! objects:
//!
//! ```text
//! [{"id": 1, "name": "Mojito", "glass": "highball", "category": "classic",
//!   "ingredients": [{"ingredient": "rum"}, {"ingredient": "lime"}]}]
//! ```

use crate::error::{DataLoadError, Result};
use crate::types::Cocktail;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a file into a string, mapping a missing file to `FileNotFound`
fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(err),
    })
}

/// Deserialize a JSON document, labelling errors with `file`
pub fn parse_json_str<T: DeserializeOwned>(source: &str, file: &str) -> Result<T> {
    serde_json::from_str(source).map_err(|err| DataLoadError::ParseError {
        file: file.to_string(),
        line: err.line(),
        column: err.column(),
        reason: err.to_string(),
    })
}

/// Read and deserialize any JSON document from disk
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let source = read_to_string(path)?;
    parse_json_str(&source, &path.display().to_string())
}

/// Parse a cocktail array from a string
pub fn parse_cocktails_str(source: &str, file: &str) -> Result<Vec<Cocktail>> {
    parse_json_str(source, file)
}

/// Parse a cocktail array file
pub fn parse_cocktails(path: &Path) -> Result<Vec<Cocktail>> {
    let cocktails: Vec<Cocktail> = read_json(path)?;
    tracing::debug!("Parsed {} cocktails from {}", cocktails.len(), path.display());
    Ok(cocktails)
}
