//! Saved ("favorited") recipes, persisted across sessions.
//!
//! The saved-set lives in memory for instant reads and is written back as a
//! whole to a [`KeyValueStore`] after every change. Persistence is best
//! effort: storage failures are logged and never surface to the caller.
//! Overlapping writes are ordered so the newest in-memory set is the one
//! left in storage.

use crate::error::StoreError;
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};
use tokio::sync::Mutex;

/// Storage key holding the JSON array of saved recipe ids
pub const SAVED_RECIPES_KEY: &str = "saved_recipes";

/// Interface the UI layer uses to track favorites
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Populate the saved-set from storage and mark the store ready.
    /// Missing or unreadable data leaves the set empty.
    async fn load(&self);

    /// Whether [`FavoritesStore::load`] has completed
    fn is_ready(&self) -> bool;

    fn is_saved(&self, recipe_id: &str) -> bool;

    /// Flip the saved state of `recipe_id` and persist the new set.
    /// Returns `true` when the recipe is saved afterwards.
    async fn toggle(&self, recipe_id: &str) -> bool;

    /// Saved ids, oldest first
    fn saved_ids(&self) -> Vec<String>;
}

#[derive(Debug, Default)]
struct SavedSet {
    ids: Vec<String>,
    /// Bumped on every toggle
    generation: u64,
}

/// [`FavoritesStore`] persisted through a [`KeyValueStore`]
pub struct SavedRecipes<S> {
    storage: S,
    key: String,
    saved: RwLock<SavedSet>,
    /// Generation of the last snapshot written to storage
    written: Mutex<u64>,
    ready: AtomicBool,
}

impl<S: KeyValueStore> SavedRecipes<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, SAVED_RECIPES_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            saved: RwLock::new(SavedSet::default()),
            written: Mutex::new(0),
            ready: AtomicBool::new(false),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted saved-set without touching in-memory state
    pub async fn read_saved_ids(&self) -> Result<Vec<String>, StoreError> {
        let raw = self
            .storage
            .get(&self.key)
            .await
            .map_err(|e| StoreError::StorageRead(e.to_string()))?;

        let raw = match raw {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(Vec::new()),
        };

        let ids: Vec<String> =
            serde_json::from_str(&raw).map_err(|e| StoreError::StorageRead(e.to_string()))?;

        let mut unique = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Ok(unique)
    }

    async fn persist(&self, snapshot: &[String]) -> Result<(), StoreError> {
        let value =
            serde_json::to_string(snapshot).map_err(|e| StoreError::StorageWrite(e.to_string()))?;
        self.storage
            .set(&self.key, &value)
            .await
            .map_err(|e| StoreError::StorageWrite(e.to_string()))
    }

    /// Write the current in-memory set unless a newer one was already written.
    /// Returns the number of ids written, or `None` when there was nothing new.
    async fn persist_latest(&self) -> Result<Option<usize>, StoreError> {
        let mut written = self.written.lock().await;

        let (generation, snapshot) = {
            let saved = self.saved.read().unwrap_or_else(PoisonError::into_inner);
            (saved.generation, saved.ids.clone())
        };
        if generation <= *written {
            return Ok(None);
        }

        self.persist(&snapshot).await?;
        *written = generation;
        Ok(Some(snapshot.len()))
    }
}

#[async_trait]
impl<S: KeyValueStore> FavoritesStore for SavedRecipes<S> {
    async fn load(&self) {
        let ids = match self.read_saved_ids().await {
            Ok(ids) => {
                info!("Loaded {} saved recipes", ids.len());
                ids
            }
            Err(e) => {
                warn!("{}; starting with no saved recipes", e);
                Vec::new()
            }
        };

        self.saved.write().unwrap_or_else(PoisonError::into_inner).ids = ids;
        self.ready.store(true, Ordering::Release);
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    fn is_saved(&self, recipe_id: &str) -> bool {
        self.saved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .ids
            .iter()
            .any(|id| id == recipe_id)
    }

    async fn toggle(&self, recipe_id: &str) -> bool {
        if !self.is_ready() {
            debug!("Toggling '{}' before saved recipes were loaded", recipe_id);
        }

        // Lock is released before the write is awaited
        let now_saved = {
            let mut saved = self.saved.write().unwrap_or_else(PoisonError::into_inner);
            let now_saved = match saved.ids.iter().position(|id| id == recipe_id) {
                Some(index) => {
                    saved.ids.remove(index);
                    false
                }
                None => {
                    saved.ids.push(recipe_id.to_string());
                    true
                }
            };
            saved.generation += 1;
            now_saved
        };

        match self.persist_latest().await {
            Ok(Some(count)) => debug!(
                "Persisted {} saved recipes after toggling '{}'",
                count, recipe_id
            ),
            Ok(None) => debug!("Toggle of '{}' already covered by a newer write", recipe_id),
            Err(e) => warn!("{}; keeping in-memory change for '{}'", e, recipe_id),
        }

        now_saved
    }

    fn saved_ids(&self) -> Vec<String> {
        self.saved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .ids
            .clone()
    }
}
