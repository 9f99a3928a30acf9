//! UniFFI bindings for recipe-box
//!
//! This module provides FFI-compatible types and an object wrapping the catalog
//! and the saved-recipes store for use with iOS and Android. Storage calls are
//! async in Rust; the object owns a tokio runtime and blocks on them.

use std::fmt;
use std::sync::Arc;

use crate::{
    Catalog, CatalogError, Difficulty, FavoritesStore, FileStore, Ingredient, Recipe,
    SavedRecipes, ShareContent, StorageError, SAVED_RECIPES_KEY,
};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiDifficulty {
    Easy,
    Medium,
    Hard,
}

impl From<Difficulty> for FfiDifficulty {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => FfiDifficulty::Easy,
            Difficulty::Medium => FfiDifficulty::Medium,
            Difficulty::Hard => FfiDifficulty::Hard,
        }
    }
}

/// FFI-compatible ingredient line
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub name: String,
    pub amount: String,
    pub unit: String,
    /// Amount and unit, ready for display
    pub quantity: String,
}

impl From<&Ingredient> for FfiIngredient {
    fn from(ingredient: &Ingredient) -> Self {
        FfiIngredient {
            name: ingredient.name.clone(),
            amount: ingredient.amount.clone(),
            unit: ingredient.unit.clone(),
            quantity: ingredient.quantity(),
        }
    }
}

/// FFI-compatible recipe structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Image URI
    pub image: String,
    pub prep_time: u32,
    pub cook_time: u32,
    /// Prep plus cook time in minutes
    pub total_time: u32,
    pub servings: u32,
    pub difficulty: FfiDifficulty,
    /// Capitalized difficulty for display
    pub difficulty_label: String,
    pub ingredients: Vec<FfiIngredient>,
    pub steps: Vec<String>,
    pub tags: Vec<String>,
    /// Saved state at the time the record was built
    pub is_saved: bool,
}

impl FfiRecipe {
    fn new(recipe: &Recipe, is_saved: bool) -> Self {
        FfiRecipe {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            image: recipe.image.clone(),
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            total_time: recipe.total_time(),
            servings: recipe.servings,
            difficulty: recipe.difficulty.into(),
            difficulty_label: recipe.difficulty.label().to_string(),
            ingredients: recipe.ingredients.iter().map(FfiIngredient::from).collect(),
            steps: recipe.steps.clone(),
            tags: recipe.tags.clone(),
            is_saved,
        }
    }
}

/// Content for the native share sheet
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiShareContent {
    pub title: String,
    pub message: String,
}

impl From<ShareContent> for FfiShareContent {
    fn from(share: ShareContent) -> Self {
        FfiShareContent {
            title: share.title,
            message: share.message,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiRecipeBoxError {
    /// Catalog data could not be loaded
    CatalogError { message: String },
    /// Storage could not be set up
    StorageError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiRecipeBoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiRecipeBoxError::CatalogError { message } => write!(f, "Catalog error: {}", message),
            FfiRecipeBoxError::StorageError { message } => write!(f, "Storage error: {}", message),
            FfiRecipeBoxError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiRecipeBoxError {}

impl From<CatalogError> for FfiRecipeBoxError {
    fn from(err: CatalogError) -> Self {
        FfiRecipeBoxError::CatalogError {
            message: err.to_string(),
        }
    }
}

impl From<StorageError> for FfiRecipeBoxError {
    fn from(err: StorageError) -> Self {
        FfiRecipeBoxError::StorageError {
            message: err.to_string(),
        }
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiRecipeBoxError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiRecipeBoxError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Catalog plus saved recipes, persisted under the app's storage directory
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct RecipeBox {
    catalog: Catalog,
    saved: SavedRecipes<FileStore>,
    runtime: tokio::runtime::Runtime,
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl RecipeBox {
    /// Open the recipe box and load saved recipes
    ///
    /// # Arguments
    /// * `storage_dir` - Writable app directory for persisted data
    /// * `saved_key` - Storage key for saved recipes; `saved_recipes` when `None`
    /// * `catalog_json` - Catalog JSON; the bundled catalog when `None`
    #[cfg_attr(feature = "uniffi", uniffi::constructor)]
    pub fn new(
        storage_dir: String,
        saved_key: Option<String>,
        catalog_json: Option<String>,
    ) -> Result<Arc<Self>, FfiRecipeBoxError> {
        let saved_key = saved_key.unwrap_or_else(|| SAVED_RECIPES_KEY.to_string());
        FileStore::validate_key(&saved_key)?;

        let catalog = match catalog_json {
            Some(json) => Catalog::from_json(&json)?,
            None => Catalog::bundled()?,
        };
        let runtime = create_runtime()?;
        let saved = SavedRecipes::with_key(FileStore::new(storage_dir), saved_key);
        runtime.block_on(saved.load());

        Ok(Arc::new(RecipeBox {
            catalog,
            saved,
            runtime,
        }))
    }

    /// All recipes in catalog order
    pub fn recipes(&self) -> Vec<FfiRecipe> {
        self.to_ffi(self.catalog.recipes().iter())
    }

    /// Recipes matching `query` by title, description or tag
    pub fn search(&self, query: String) -> Vec<FfiRecipe> {
        self.to_ffi(self.catalog.search(&query).into_iter())
    }

    /// A single recipe, or `None` when the id is unknown
    pub fn recipe(&self, id: String) -> Option<FfiRecipe> {
        self.catalog
            .get(&id)
            .map(|r| FfiRecipe::new(r, self.saved.is_saved(&r.id)))
    }

    pub fn is_saved(&self, id: String) -> bool {
        self.saved.is_saved(&id)
    }

    /// Flip the saved state; returns `true` when the recipe is now saved
    pub fn toggle_saved(&self, id: String) -> bool {
        self.runtime.block_on(self.saved.toggle(&id))
    }

    /// Saved recipes in catalog order
    pub fn saved_recipes(&self) -> Vec<FfiRecipe> {
        self.to_ffi(self.catalog.saved(&self.saved).into_iter())
    }

    pub fn saved_count(&self) -> u32 {
        u32::try_from(self.catalog.saved(&self.saved).len()).unwrap_or(u32::MAX)
    }

    pub fn share_content(&self, id: String) -> Option<FfiShareContent> {
        self.catalog
            .get(&id)
            .map(|r| ShareContent::for_recipe(r).into())
    }
}

impl RecipeBox {
    fn to_ffi<'a>(&self, recipes: impl Iterator<Item = &'a Recipe>) -> Vec<FfiRecipe> {
        recipes
            .map(|r| FfiRecipe::new(r, self.saved.is_saved(&r.id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open(dir: &TempDir) -> Arc<RecipeBox> {
        RecipeBox::new(dir.path().to_string_lossy().into_owned(), None, None).unwrap()
    }

    #[test]
    fn test_toggle_persists_across_instances() {
        let dir = TempDir::new().unwrap();

        let first = open(&dir);
        assert!(first.toggle_saved("3".to_string()));
        assert!(first.toggle_saved("1".to_string()));
        drop(first);

        let second = open(&dir);
        let saved: Vec<String> = second.saved_recipes().into_iter().map(|r| r.id).collect();
        // Catalog order, not save order
        assert_eq!(saved, vec!["1", "3"]);
        assert_eq!(second.saved_count(), 2);
    }

    #[test]
    fn test_recipe_record_fields() {
        let dir = TempDir::new().unwrap();
        let recipe_box = open(&dir);

        let recipe = recipe_box.recipe("3".to_string()).unwrap();
        assert_eq!(recipe.total_time, 210);
        assert_eq!(recipe.difficulty, FfiDifficulty::Hard);
        assert_eq!(recipe.difficulty_label, "Hard");
        assert!(!recipe.is_saved);
        assert_eq!(recipe.ingredients[1].quantity, "750 ml");

        assert!(recipe_box.recipe("missing".to_string()).is_none());
    }

    #[test]
    fn test_search_and_share() {
        let dir = TempDir::new().unwrap();
        let recipe_box = open(&dir);

        let results = recipe_box.search("QUICK".to_string());
        let ids: Vec<String> = results.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["2", "4"]);

        let share = recipe_box.share_content("4".to_string()).unwrap();
        assert_eq!(share.title, "Greek Salad");
        assert!(share.message.starts_with("Check out this recipe: Greek Salad\n\n"));
    }

    #[test]
    fn test_invalid_catalog_json() {
        let dir = TempDir::new().unwrap();
        let result = RecipeBox::new(
            dir.path().to_string_lossy().into_owned(),
            None,
            Some("[{]".to_string()),
        );
        assert!(matches!(
            result,
            Err(FfiRecipeBoxError::CatalogError { .. })
        ));
    }

    #[test]
    fn test_invalid_saved_key() {
        let dir = TempDir::new().unwrap();
        let result = RecipeBox::new(
            dir.path().to_string_lossy().into_owned(),
            Some("../outside".to_string()),
            None,
        );
        match result {
            Err(e @ FfiRecipeBoxError::StorageError { .. }) => {
                assert!(e.to_string().contains("Invalid storage key"))
            }
            _ => panic!("Expected storage error"),
        }
    }

    #[test]
    fn test_custom_saved_key() {
        let dir = TempDir::new().unwrap();
        let storage_dir = dir.path().to_string_lossy().into_owned();

        let recipe_box =
            RecipeBox::new(storage_dir.clone(), Some("favorites".to_string()), None).unwrap();
        recipe_box.toggle_saved("5".to_string());
        drop(recipe_box);

        assert!(dir.path().join("favorites.json").exists());
        let reopened = RecipeBox::new(storage_dir, Some("favorites".to_string()), None).unwrap();
        assert!(reopened.is_saved("5".to_string()));
        assert_eq!(reopened.saved_count(), 1);
    }
}
