//! Turning the user's filter settings into an ordered filter list.
//!
//! The options layer hands over a [`UserFilterOptions`] plus the user's bar,
//! the list of non-vegan ingredients and the favourites set. From these
//! [`filters_from_user_options`] builds the filters in a fixed order:
//!
//! 1. name (when a name filter is set)
//! 2. ingredient rule (`byIngredient`)
//! 3. makeable from bar (`barOnly`)
//! 4. vegan (`veganOnly`)
//! 5. category (`byCategory`, only with at least one category)
//! 6. favourites (`favouritesOnly`)
//! 7. glass (`byGlass`, only with at least one glass)

use crate::filter::Filter;
use data_loader::CocktailId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A filter switch the user can turn on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterToggle {
    ByIngredient,
    BarOnly,
    VeganOnly,
    ByCategory,
    FavouritesOnly,
    ByGlass,
    /// A switch this version does not know about; ignored
    #[serde(untagged)]
    Other(String),
}

/// Which ingredient rule the `byIngredient` switch applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IngredientsRule {
    #[default]
    MustInclude,
    CanInclude,
    MustNotInclude,
    MakeableFrom,
}

impl IngredientsRule {
    /// Build the filter for this rule over `ingredients`
    pub fn to_filter(self, ingredients: HashSet<String>) -> Filter {
        match self {
            IngredientsRule::MustInclude => Filter::MustInclude { ingredients },
            IngredientsRule::CanInclude => Filter::CanInclude { ingredients },
            IngredientsRule::MustNotInclude => Filter::MustNotInclude { ingredients },
            IngredientsRule::MakeableFrom => Filter::MakeableFrom { ingredients },
        }
    }
}

/// The user's current filter settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFilterOptions {
    pub name_filter: Option<String>,
    pub active_filters: Vec<FilterToggle>,
    pub ingredients_rule: IngredientsRule,
    pub ingredients: HashSet<String>,
    pub categories: HashSet<String>,
    pub glasses: HashSet<String>,
}

impl UserFilterOptions {
    /// Is `toggle` switched on?
    pub fn is_active(&self, toggle: &FilterToggle) -> bool {
        self.active_filters.contains(toggle)
    }
}

/// Build the filters the user's options ask for, in the fixed order above.
pub fn filters_from_user_options(
    options: &UserFilterOptions,
    bar: &HashSet<String>,
    non_vegan_ingredients: &HashSet<String>,
    favourites: &HashSet<CocktailId>,
) -> Vec<Filter> {
    let mut filters = Vec::new();

    if let Some(text) = options.name_filter.as_deref().filter(|t| !t.is_empty()) {
        filters.push(Filter::NameIncludes {
            text: Some(text.to_string()),
        });
    }

    if options.is_active(&FilterToggle::ByIngredient) {
        filters.push(options.ingredients_rule.to_filter(options.ingredients.clone()));
    }

    if options.is_active(&FilterToggle::BarOnly) {
        filters.push(Filter::MakeableFrom {
            ingredients: bar.clone(),
        });
    }

    if options.is_active(&FilterToggle::VeganOnly) {
        filters.push(Filter::MustNotInclude {
            ingredients: non_vegan_ingredients.clone(),
        });
    }

    if options.is_active(&FilterToggle::ByCategory) && !options.categories.is_empty() {
        filters.push(Filter::InCategory {
            categories: options.categories.clone(),
        });
    }

    if options.is_active(&FilterToggle::FavouritesOnly) {
        filters.push(Filter::IsFavourite {
            favourites: favourites.clone(),
        });
    }

    if options.is_active(&FilterToggle::ByGlass) && !options.glasses.is_empty() {
        filters.push(Filter::InGlass {
            glasses: options.glasses.clone(),
        });
    }

    tracing::debug!(
        "Built {} filters from user options: [{}]",
        filters.len(),
        filters.iter().map(Filter::name).collect::<Vec<_>>().join(", ")
    );
    filters
}
