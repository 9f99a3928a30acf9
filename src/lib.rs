//! Recipe catalog, search and persisted saved recipes for a mobile recipe browser.
//!
//! The catalog is a fixed, bundled list of [`Recipe`]s. Favorites are tracked
//! by a [`FavoritesStore`]; [`SavedRecipes`] keeps them in memory and persists
//! the whole set through any [`KeyValueStore`] after every change.
//!
//! ```no_run
//! # use recipe_box::{Catalog, FavoritesStore, FileStore, SavedRecipes};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::bundled()?;
//! let saved = SavedRecipes::new(FileStore::new("/path/to/app/storage"));
//! saved.load().await;
//!
//! for recipe in catalog.search("chicken") {
//!     println!("{} ({} min)", recipe.title, recipe.total_time());
//! }
//! saved.toggle("1").await;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod model;
pub mod search;
pub mod share;
pub mod storage;

// UniFFI bindings for mobile platforms
pub mod uniffi_bindings;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{AppError, CatalogError, StorageError, StoreError};
pub use favorites::{FavoritesStore, SavedRecipes, SAVED_RECIPES_KEY};
pub use model::{Difficulty, Ingredient, Recipe};
pub use search::filter_recipes;
pub use share::ShareContent;
pub use storage::{FileStore, KeyValueStore, MemoryStore};

/// Open the catalog and the file-backed saved recipes described by `config`.
/// Saved recipes are loaded before returning; an unusable `saved_key` is an error.
pub async fn open(config: &AppConfig) -> Result<(Catalog, SavedRecipes<FileStore>), AppError> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::bundled()?,
    };

    FileStore::validate_key(&config.saved_key)?;
    let saved = SavedRecipes::with_key(
        FileStore::new(config.storage_dir.clone()),
        config.saved_key.clone(),
    );
    saved.load().await;

    Ok((catalog, saved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_with_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            storage_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };

        let (catalog, saved) = open(&config).await.unwrap();
        assert!(!catalog.is_empty());
        assert!(saved.is_ready());
    }

    #[tokio::test]
    async fn test_open_rejects_invalid_saved_key() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            storage_dir: dir.path().to_path_buf(),
            saved_key: "nested/key".to_string(),
            catalog_path: None,
        };

        assert!(matches!(
            open(&config).await,
            Err(AppError::Storage(StorageError::InvalidKey(_)))
        ));
    }
}
