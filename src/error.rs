use thiserror::Error;

/// Errors that can occur while loading a catalog or running a search
#[derive(Error, Debug)]
pub enum FinderError {
    /// Two recipes in the same catalog share an id
    #[error("Duplicate recipe id in catalog: {0}")]
    DuplicateRecipeId(String),

    /// A recipe breaks a catalog constraint
    #[error("Invalid recipe {id}: {reason}")]
    InvalidRecipe { id: String, reason: String },

    /// Failed to read a catalog file
    #[error("Failed to read catalog: {0}")]
    CatalogIo(#[from] std::io::Error),

    /// Catalog file is not a valid JSON recipe list
    #[error("Invalid catalog format: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    /// Difficulty label is not one of the known levels
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// Search was submitted without any query text
    #[error("Search query cannot be empty")]
    EmptyQuery,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// A recipe generator failed to produce results
    #[error("Recipe generation failed: {0}")]
    Generation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
