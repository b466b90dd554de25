//! Ingredient set rules.
//!
//! `filter` is the ingredient set carried by the filter, `cocktail` is the
//! compacted ingredient-name set of the cocktail under test (see
//! [`Cocktail::ingredient_names`](data_loader::Cocktail::ingredient_names)).

use std::collections::HashSet;

/// The cocktail contains at least every listed ingredient.
///
/// Empty names in `filter` are ignored, so an empty filter set matches
/// every cocktail.
pub fn must_include(filter: &HashSet<String>, cocktail: &HashSet<&str>) -> bool {
    filter
        .iter()
        .filter(|ingredient| !ingredient.is_empty())
        .all(|ingredient| cocktail.contains(ingredient.as_str()))
}

/// The cocktail contains none of the listed ingredients.
pub fn must_not_include(filter: &HashSet<String>, cocktail: &HashSet<&str>) -> bool {
    !filter
        .iter()
        .any(|ingredient| cocktail.contains(ingredient.as_str()))
}

/// Every ingredient of the cocktail is among the allowed ones.
pub fn can_include(filter: &HashSet<String>, cocktail: &HashSet<&str>) -> bool {
    is_subset_of(cocktail, filter)
}

/// The cocktail can be made using only what is in `bar`.
pub fn makeable_from(bar: &HashSet<String>, cocktail: &HashSet<&str>) -> bool {
    is_subset_of(cocktail, bar)
}

fn is_subset_of(cocktail: &HashSet<&str>, allowed: &HashSet<String>) -> bool {
    cocktail.iter().all(|&ingredient| allowed.contains(ingredient))
}
