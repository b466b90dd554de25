//! Ingredient frequency across a cocktail list.

use data_loader::Cocktail;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How many ingredient entries carry `name`.
///
/// `name` is `None` for the bucket of entries whose ingredient is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientCount {
    pub name: Option<String>,
    pub count: usize,
}

/// Count ingredient entries over all cocktails, most used first.
///
/// Every entry is counted as written, so a cocktail listing the same
/// ingredient twice counts it twice, and entries with a missing name are
/// counted together under `name: None`. Ingredients with equal counts keep
/// the order in which they were first seen.
pub fn count_ingredients(cocktails: &[Cocktail]) -> Vec<IngredientCount> {
    let mut counts: Vec<IngredientCount> = Vec::new();
    let mut positions: HashMap<Option<&str>, usize> = HashMap::new();

    for ingredient in cocktails.iter().flat_map(|c| &c.ingredients) {
        let name = ingredient.ingredient.as_deref();
        match positions.get(&name) {
            Some(&pos) => counts[pos].count += 1,
            None => {
                positions.insert(name, counts.len());
                counts.push(IngredientCount {
                    name: name.map(str::to_string),
                    count: 1,
                });
            }
        }
    }

    // Stable, so ties stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
