use crate::error::CatalogError;
use crate::favorites::FavoritesStore;
use crate::model::Recipe;
use crate::search::filter_recipes;
use log::debug;
use std::collections::HashSet;
use std::path::Path;

const BUNDLED_RECIPES: &str = include_str!("../data/recipes.json");

/// The fixed, ordered set of recipes shipped with the app
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate recipe ids
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if !seen.insert(recipe.id.as_str()) {
                return Err(CatalogError::DuplicateId(recipe.id.clone()));
            }
        }
        Ok(Self { recipes })
    }

    /// Parse a JSON array of recipes
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        debug!("Parsed catalog with {} recipes", recipes.len());
        Self::new(recipes)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Catalog compiled into the crate
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_RECIPES)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        filter_recipes(query, &self.recipes)
    }

    /// Saved recipes in catalog order. Saved ids unknown to the catalog are skipped.
    pub fn saved(&self, favorites: &dyn FavoritesStore) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| favorites.is_saved(&r.id))
            .collect()
    }
}
