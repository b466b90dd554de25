//! The Filter type: one rule plus its parameters.
//!
//! Filters travel as JSON objects tagged by a `rule` field:
//!
//! ```text
//! {"rule": "nameIncludes", "text": "sour"}
//! {"rule": "mustInclude", "ingredients": ["gin", "lime"]}
//! {"rule": "inGlass", "glasses": ["coupe"]}
//! {"rule": "isFavourite", "favourites": [1, 7]}
//! ```
//!
//! An object whose `rule` is missing, is not a string, or names none of the
//! known rules deserializes to [`Filter::Unrecognized`], which keeps every
//! cocktail. Parameters of an unrecognized rule are not read.

use crate::rules;
use data_loader::{Cocktail, CocktailId};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// A single filtering rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum Filter {
    /// Cocktail name contains `text` (case-insensitive)
    NameIncludes { text: Option<String> },
    /// Cocktail has at least these ingredients
    MustInclude { ingredients: HashSet<String> },
    /// Cocktail has none of these ingredients
    MustNotInclude { ingredients: HashSet<String> },
    /// Cocktail uses only ingredients from this set
    CanInclude { ingredients: HashSet<String> },
    /// Cocktail can be made from these ingredients alone
    MakeableFrom { ingredients: HashSet<String> },
    InGlass { glasses: HashSet<String> },
    InCategory { categories: HashSet<String> },
    IsFavourite { favourites: HashSet<CocktailId> },
    /// Anything without a known rule. Matches every cocktail.
    Unrecognized,
}

/// Take `key` out of a filter object; missing and `null` give the default
fn take_param<T: DeserializeOwned + Default>(
    object: &mut Value,
    key: &str,
) -> serde_json::Result<T> {
    match object.get_mut(key).map(Value::take) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value),
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = Value::deserialize(deserializer)?;
        if !object.is_object() {
            return Err(D::Error::custom("expected a filter object"));
        }
        let rule = match object.get("rule").and_then(Value::as_str) {
            Some(rule) => rule.to_string(),
            None => return Ok(Filter::Unrecognized),
        };

        let object = &mut object;
        let filter = match rule.as_str() {
            "nameIncludes" => take_param(object, "text").map(|text| Filter::NameIncludes { text }),
            "mustInclude" => take_param(object, "ingredients")
                .map(|ingredients| Filter::MustInclude { ingredients }),
            "mustNotInclude" => take_param(object, "ingredients")
                .map(|ingredients| Filter::MustNotInclude { ingredients }),
            "canInclude" => take_param(object, "ingredients")
                .map(|ingredients| Filter::CanInclude { ingredients }),
            "makeableFrom" => take_param(object, "ingredients")
                .map(|ingredients| Filter::MakeableFrom { ingredients }),
            "inGlass" => take_param(object, "glasses").map(|glasses| Filter::InGlass { glasses }),
            "inCategory" => take_param(object, "categories")
                .map(|categories| Filter::InCategory { categories }),
            "isFavourite" => take_param(object, "favourites")
                .map(|favourites| Filter::IsFavourite { favourites }),
            _ => Ok(Filter::Unrecognized),
        };
        filter.map_err(|err| D::Error::custom(format!("invalid {} filter: {}", rule, err)))
    }
}

impl Filter {
    /// The rule name as it appears in the `rule` field
    pub fn name(&self) -> &'static str {
        match self {
            Filter::NameIncludes { .. } => "nameIncludes",
            Filter::MustInclude { .. } => "mustInclude",
            Filter::MustNotInclude { .. } => "mustNotInclude",
            Filter::CanInclude { .. } => "canInclude",
            Filter::MakeableFrom { .. } => "makeableFrom",
            Filter::InGlass { .. } => "inGlass",
            Filter::InCategory { .. } => "inCategory",
            Filter::IsFavourite { .. } => "isFavourite",
            Filter::Unrecognized => "unrecognized",
        }
    }

    /// Does `cocktail` pass this filter?
    pub fn matches(&self, cocktail: &Cocktail) -> bool {
        match self {
            Filter::NameIncludes { text } => rules::name_includes(&cocktail.name, text.as_deref()),
            Filter::MustInclude { ingredients } => {
                rules::must_include(ingredients, &cocktail.ingredient_names())
            }
            Filter::MustNotInclude { ingredients } => {
                rules::must_not_include(ingredients, &cocktail.ingredient_names())
            }
            Filter::CanInclude { ingredients } => {
                rules::can_include(ingredients, &cocktail.ingredient_names())
            }
            Filter::MakeableFrom { ingredients } => {
                rules::makeable_from(ingredients, &cocktail.ingredient_names())
            }
            Filter::InGlass { glasses } => rules::in_glass(glasses, cocktail),
            Filter::InCategory { categories } => rules::in_category(categories, cocktail),
            Filter::IsFavourite { favourites } => rules::is_favourite(favourites, cocktail),
            Filter::Unrecognized => true,
        }
    }
}

/// Filters as they arrive from outside: one filter, or a list that may
/// contain `null` entries.
///
/// Deserialize as `Option<FilterList>` to also accept a missing document;
/// `None` and `FilterList::default()` both mean "no filtering".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterList {
    Many(Vec<Option<Filter>>),
    One(Filter),
}

impl FilterList {
    /// The filters in order, with `null` entries dropped
    pub fn into_filters(self) -> Vec<Filter> {
        match self {
            FilterList::Many(filters) => filters.into_iter().flatten().collect(),
            FilterList::One(filter) => vec![filter],
        }
    }
}

impl Default for FilterList {
    fn default() -> Self {
        FilterList::Many(Vec::new())
    }
}
