//! Glass, category and favourite rules.

use data_loader::{Cocktail, CocktailId};
use std::collections::HashSet;

/// The cocktail is served in one of `glasses`; an empty set matches all.
pub fn in_glass(glasses: &HashSet<String>, cocktail: &Cocktail) -> bool {
    glasses.is_empty() || glasses.contains(&cocktail.glass)
}

/// The cocktail belongs to one of `categories`; an empty set matches all.
pub fn in_category(categories: &HashSet<String>, cocktail: &Cocktail) -> bool {
    categories.is_empty() || categories.contains(&cocktail.category)
}

/// The cocktail is one of the user's favourites.
///
/// Unlike glass and category, an empty favourites set matches nothing.
pub fn is_favourite(favourites: &HashSet<CocktailId>, cocktail: &Cocktail) -> bool {
    favourites.contains(&cocktail.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::IngredientRef;

    fn daiquiri() -> Cocktail {
        Cocktail {
            id: 2,
            name: "Daiquiri".to_string(),
            ingredients: vec![IngredientRef::new("rum"), IngredientRef::new("lime")],
            glass: "coupe".to_string(),
            category: "classic".to_string(),
        }
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_in_glass() {
        let cocktail = daiquiri();

        assert!(in_glass(&set(&["coupe", "martini"]), &cocktail));
        assert!(!in_glass(&set(&["highball"]), &cocktail));
        assert!(!in_glass(&set(&["Coupe"]), &cocktail));
    }

    #[test]
    fn test_in_category() {
        let cocktail = daiquiri();

        assert!(in_category(&set(&["classic"]), &cocktail));
        assert!(!in_category(&set(&["tiki"]), &cocktail));
        assert!(!in_category(&set(&["Classic"]), &cocktail));
    }

    #[test]
    fn test_empty_glass_and_category_match_everything() {
        let cocktail = daiquiri();

        assert!(in_glass(&HashSet::new(), &cocktail));
        assert!(in_category(&HashSet::new(), &cocktail));
    }

    #[test]
    fn test_is_favourite() {
        let cocktail = daiquiri();

        assert!(is_favourite(&HashSet::from([1, 2]), &cocktail));
        assert!(!is_favourite(&HashSet::from([1]), &cocktail));
        assert!(!is_favourite(&HashSet::new(), &cocktail));
    }
}
