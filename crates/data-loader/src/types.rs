//! Core domain types for the cocktail dataset.
//!
//! This module defines the fundamental data structures shared by the
//! loader and the filtering pipeline:
//! - Type alias for cocktail identifiers
//! - Cocktail and ingredient records
//! - CocktailIndex, the in-memory catalogue built by the loader

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a cocktail
pub type CocktailId = u32;

// =============================================================================
// Cocktail-related Types
// =============================================================================

/// One entry of a cocktail's ingredient list.
///
/// The name may be missing in upstream data. Such entries are kept as they
/// are so the ingredient counter can see them, but they never take part in
/// rule matching (see [`Cocktail::ingredient_names`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRef {
    #[serde(default)]
    pub ingredient: Option<String>,
}

impl IngredientRef {
    /// An entry naming an ingredient
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            ingredient: Some(name.into()),
        }
    }

    /// An entry whose ingredient name is missing
    pub fn absent() -> Self {
        Self { ingredient: None }
    }
}

/// Represents a cocktail recipe.
///
/// Cocktails are treated as immutable by the pipeline: filters borrow them
/// and hand back clones of the ones that match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cocktail {
    pub id: CocktailId,
    pub name: String,
    /// Ingredients in recipe order
    #[serde(default)]
    pub ingredients: Vec<IngredientRef>,
    pub glass: String,
    pub category: String,
}

impl Cocktail {
    /// The compacted set of ingredient names used for rule matching.
    ///
    /// Missing and empty names are dropped.
    pub fn ingredient_names(&self) -> HashSet<&str> {
        self.ingredients
            .iter()
            .filter_map(|i| i.ingredient.as_deref())
            .filter(|name| !name.is_empty())
            .collect()
    }
}

// =============================================================================
// CocktailIndex - The In-Memory Catalogue
// =============================================================================

/// Holds every loaded cocktail in source order plus an id lookup.
#[derive(Debug, Clone)]
pub struct CocktailIndex {
    pub(crate) cocktails: Vec<Cocktail>,
    /// Position in `cocktails` of the first cocktail seen with each id
    pub(crate) by_id: HashMap<CocktailId, usize>,
}

impl CocktailIndex {
    /// Creates a new, empty CocktailIndex
    pub fn new() -> Self {
        Self {
            cocktails: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Build an index from cocktails, keeping their order
    pub fn from_cocktails(cocktails: impl IntoIterator<Item = Cocktail>) -> Self {
        let mut index = Self::new();
        for cocktail in cocktails {
            index.insert_cocktail(cocktail);
        }
        index
    }

    /// Get a cocktail by ID
    pub fn get_cocktail(&self, id: CocktailId) -> Option<&Cocktail> {
        self.by_id.get(&id).map(|&pos| &self.cocktails[pos])
    }

    /// All cocktails, in the order they were inserted
    pub fn cocktails(&self) -> &[Cocktail] {
        &self.cocktails
    }

    pub fn len(&self) -> usize {
        self.cocktails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cocktails.is_empty()
    }

    /// Append a cocktail.
    ///
    /// Duplicate ids are accepted here and reported by `validate`.
    pub fn insert_cocktail(&mut self, cocktail: Cocktail) {
        let pos = self.cocktails.len();
        self.by_id.entry(cocktail.id).or_insert(pos);
        self.cocktails.push(cocktail);
    }
}

impl Default for CocktailIndex {
    fn default() -> Self {
        Self::new()
    }
}
