use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::filters::SearchFilters;
use crate::generator::RecipeGenerator;
use crate::latency::{Latency, SimulatedLatency};
use crate::model::Recipe;
use crate::FinderError;

/// Most recipes returned by a single search
pub const MAX_RESULTS: usize = 3;

/// Recipes substituted from the head of the catalog when nothing matches
pub const FALLBACK_COUNT: usize = 2;

/// Apply the filter pipeline to a catalog.
///
/// Filters run in a fixed order (dietary, time, difficulty), each on the
/// output of the previous one. An empty outcome is replaced by the first
/// [`FALLBACK_COUNT`] catalog entries, and the result is capped at
/// [`MAX_RESULTS`].
pub fn select(catalog: &Catalog, filters: &SearchFilters) -> Vec<Recipe> {
    let mut selected: Vec<&Recipe> = catalog.iter().collect();

    if !filters.dietary.is_empty() {
        selected.retain(|r| filters.matches_dietary(r));
    }
    if filters.time_limit().is_some() {
        selected.retain(|r| filters.matches_time(r));
    }
    if filters.difficulty.is_some() {
        selected.retain(|r| filters.matches_difficulty(r));
    }

    if selected.is_empty() {
        debug!("No recipe matched {:?}, using fallback selection", filters);
        selected = catalog.iter().take(FALLBACK_COUNT).collect();
    }

    selected.into_iter().take(MAX_RESULTS).cloned().collect()
}

/// Finds recipes in an injected catalog, after a simulated response delay
pub struct RecipeMatcher {
    catalog: Arc<Catalog>,
    latency: Box<dyn Latency>,
}

impl RecipeMatcher {
    pub fn new(catalog: Arc<Catalog>, latency: impl Latency + 'static) -> Self {
        Self {
            catalog,
            latency: Box::new(latency),
        }
    }

    /// Matcher over the built-in catalog with the default one second delay
    pub fn with_reference_catalog() -> Self {
        Self::new(Arc::new(Catalog::reference()), SimulatedLatency::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Find recipes for a search.
    ///
    /// The query is not used for selection; it only labels the results.
    pub async fn find(&self, query: &str, filters: &SearchFilters) -> Vec<Recipe> {
        self.latency.wait().await;
        let recipes = select(&self.catalog, filters);
        info!("Found {} recipes for query {:?}", recipes.len(), query);
        recipes
    }
}

#[async_trait]
impl RecipeGenerator for RecipeMatcher {
    fn generator_name(&self) -> &str {
        "catalog"
    }

    async fn generate(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Recipe>, FinderError> {
        Ok(self.find(query, filters).await)
    }
}
