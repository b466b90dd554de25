//! # Data Loader Crate
//!
//! This crate handles loading and indexing cocktail data.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Cocktail, IngredientRef, CocktailIndex)
//! - **parser**: Parse JSON data files into Rust structs
//! - **index**: Build and validate the CocktailIndex
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::CocktailIndex;
//! use std::path::Path;
//!
//! let index = CocktailIndex::load_from_file(Path::new("data/cocktails.json"))?;
//! let mojito = index.get_cocktail(1).unwrap();
//! println!("{} is served in a {}", mojito.name, mojito.glass);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    CocktailId,
    // Core types
    Cocktail,
    IngredientRef,
    CocktailIndex,
};
