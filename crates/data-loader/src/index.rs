//! CocktailIndex loading and validation logic.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;

impl CocktailIndex {
    /// Load a cocktail file into a validated index.
    ///
    /// Steps:
    /// 1. Parse the JSON array
    /// 2. Insert cocktails in file order
    /// 3. Validate data integrity
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading cocktails from {}", path.display());

        let cocktails = parser::parse_cocktails(path)?;
        let index = CocktailIndex::from_cocktails(cocktails);
        index.validate()?;

        tracing::info!("Loaded {} cocktails", index.len());
        Ok(index)
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - Every cocktail id is unique
    /// - Every cocktail has a non-blank name
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<CocktailId> = HashSet::with_capacity(self.cocktails.len());
        for cocktail in &self.cocktails {
            if !seen.insert(cocktail.id) {
                return Err(DataLoadError::DuplicateCocktail { id: cocktail.id });
            }
            if cocktail.name.trim().is_empty() {
                return Err(DataLoadError::InvalidValue {
                    field: "name".to_string(),
                    value: format!("{:?} (cocktail {})", cocktail.name, cocktail.id),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cocktail(id: CocktailId, name: &str) -> Cocktail {
        Cocktail {
            id,
            name: name.to_string(),
            ingredients: vec![IngredientRef::new("gin")],
            glass: "coupe".to_string(),
            category: "classic".to_string(),
        }
    }

    #[test]
    fn test_validate_ok() {
        let index =
            CocktailIndex::from_cocktails(vec![cocktail(1, "Gimlet"), cocktail(2, "Martini")]);
        assert!(index.validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_id() {
        let index =
            CocktailIndex::from_cocktails(vec![cocktail(1, "Gimlet"), cocktail(1, "Martini")]);

        let err = index.validate().unwrap_err();
        assert!(matches!(err, DataLoadError::DuplicateCocktail { id: 1 }));
    }

    #[test]
    fn test_validate_blank_name() {
        let index = CocktailIndex::from_cocktails(vec![cocktail(4, "  ")]);

        let err = index.validate().unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { ref field, .. } if field == "name"));
    }

    #[test]
    fn test_load_demo_dataset() {
        // Shipped at the workspace root
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/cocktails.json");
        assert!(path.exists(), "demo dataset missing at {}", path.display());

        let index = CocktailIndex::load_from_file(&path).unwrap();
        assert!(!index.is_empty());
        assert!(index.get_cocktail(1).is_some());
    }
}
