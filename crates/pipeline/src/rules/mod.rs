//! Rule predicates used to decide whether a cocktail passes a filter.
//!
//! Every function here is pure: it looks at a cocktail (or the compacted set
//! of its ingredient names) and the filter's parameters, and answers yes or
//! no. Dispatch from a [`Filter`](crate::Filter) to these predicates lives in
//! `filter.rs`.
//!
//! ## Matching policy
//! - Names match case-insensitively.
//! - Ingredient, glass and category names match exactly.
//! - An empty glass or category set matches every cocktail, as does an
//!   empty name filter.

pub mod ingredients;
pub mod membership;
pub mod name;

// Re-export for convenience
pub use ingredients::{can_include, makeable_from, must_include, must_not_include};
pub use membership::{in_category, in_glass, is_favourite};
pub use name::name_includes;
