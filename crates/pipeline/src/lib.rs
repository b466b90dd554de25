//! Filtering and aggregation of cocktail lists.
//!
//! This crate provides:
//! - Rule predicates, one per filter kind (`rules`)
//! - The `Filter` type and its JSON form
//! - `apply_filter`, `apply_filters` and `FilterPipeline` for narrowing lists
//! - `filters_from_user_options` for turning user settings into filters
//! - `count_ingredients` for ingredient frequency
//!
//! ## Architecture
//! Lists are processed in stages:
//! 1. User options are turned into an ordered list of filters
//! 2. Each filter narrows the list left by the one before it
//! 3. The final list can be summarised by ingredient
//!
//! Nothing here mutates its input or keeps state between calls.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{apply_filters, count_ingredients, filters_from_user_options};
//!
//! let filters = filters_from_user_options(&options, &bar, &non_vegan, &favourites);
//! let filtered = apply_filters(index.cocktails(), &filters);
//! let counts = count_ingredients(&filtered);
//! ```

pub mod rules;
pub mod filter;
pub mod filter_pipeline;
pub mod user_options;
pub mod ingredient_count;

// Re-export main types
pub use filter::{Filter, FilterList};
pub use filter_pipeline::{apply_filter, apply_filters, FilterPipeline};
pub use user_options::{
    filters_from_user_options, FilterToggle, IngredientsRule, UserFilterOptions,
};
pub use ingredient_count::{count_ingredients, IngredientCount};
