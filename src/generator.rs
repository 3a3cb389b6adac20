use async_trait::async_trait;

use crate::filters::SearchFilters;
use crate::model::Recipe;
use crate::FinderError;

/// Anything that can turn a query and filters into recipe suggestions
#[async_trait]
pub trait RecipeGenerator: Send + Sync {
    /// Get the generator name (e.g., "catalog")
    fn generator_name(&self) -> &str;

    /// Produce recipes for a search submission
    async fn generate(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Recipe>, FinderError>;
}
