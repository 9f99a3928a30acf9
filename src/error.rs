use thiserror::Error;

/// Errors raised by key-value storage backends
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key cannot be mapped onto the backend
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Failures of the saved-recipes store.
///
/// Both kinds are recovered inside the store and only logged; they are
/// exposed so callers reading storage directly can report them.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Persisted saved-set is malformed or could not be read
    #[error("Failed to read saved recipes: {0}")]
    StorageRead(String),

    /// Saved-set could not be written back
    #[error("Failed to write saved recipes: {0}")]
    StorageWrite(String),
}

/// Errors that can occur while loading the recipe catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog data is not valid recipe JSON
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two recipes share an identifier
    #[error("Duplicate recipe id in catalog: {0}")]
    DuplicateId(String),

    /// Catalog file could not be read
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error for application setup
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Invalid command-line usage
    #[error("{0}")]
    Usage(String),
}
