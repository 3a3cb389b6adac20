use std::sync::Arc;

use crate::{
    session::results_label, Catalog, Difficulty, FinderConfig, FinderError, Latency, NoLatency,
    Recipe, RecipeMatcher, SearchFilters,
};

/// Result of a one-off search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The query as typed, kept for display
    pub query: String,
    pub recipes: Vec<Recipe>,
}

impl SearchResult {
    /// Caption shown above the results
    pub fn label(&self) -> String {
        results_label(&self.query)
    }
}

/// Builder for configuring and running a recipe search
#[derive(Default)]
pub struct RecipeSearchBuilder {
    query: Option<String>,
    filters: SearchFilters,
    catalog: Option<Arc<Catalog>>,
    latency: Option<Box<dyn Latency>>,
}

impl RecipeSearchBuilder {
    /// Set the free-text query
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .query("Propose-moi une recette avec du poulet");
    /// ```
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Require any of the given dietary tags
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{RecipeSearch, VEGAN, GLUTEN_FREE};
    ///
    /// let builder = RecipeSearch::builder()
    ///     .query("curry")
    ///     .dietary([VEGAN, GLUTEN_FREE]);
    /// ```
    pub fn dietary<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters.dietary = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Limit prep + cook time, in minutes
    pub fn max_time(mut self, minutes: u32) -> Self {
        self.filters.max_time = Some(minutes);
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.filters.difficulty = Some(difficulty);
        self
    }

    /// Replace all filters at once
    pub fn filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Search a custom catalog instead of the configured one
    pub fn catalog(mut self, catalog: impl Into<Arc<Catalog>>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    /// Override the simulated response delay
    pub fn latency(mut self, latency: impl Latency + 'static) -> Self {
        self.latency = Some(Box::new(latency));
        self
    }

    /// Resolve immediately, without any simulated delay
    pub fn no_latency(self) -> Self {
        self.latency(NoLatency)
    }

    /// Run the search
    ///
    /// Catalog and latency not set on the builder come from
    /// [`FinderConfig::load`].
    ///
    /// # Errors
    /// Returns `FinderError` if:
    /// - No query was specified
    /// - Configuration or the configured catalog cannot be loaded
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_finder::RecipeSearch;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = RecipeSearch::builder()
    ///     .query("salade")
    ///     .max_time(40)
    ///     .search()
    ///     .await?;
    /// println!("{}", result.label());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(self) -> Result<SearchResult, FinderError> {
        let query = self.query.ok_or_else(|| {
            FinderError::BuilderError("No query specified. Use .query()".to_string())
        })?;

        let (catalog, latency) = match (self.catalog, self.latency) {
            (Some(catalog), Some(latency)) => (catalog, latency),
            (catalog, latency) => {
                let config = FinderConfig::load()?;
                let catalog = match catalog {
                    Some(catalog) => catalog,
                    None => Arc::new(config.catalog()?),
                };
                (catalog, latency.unwrap_or_else(|| config.latency()))
            }
        };

        let matcher = RecipeMatcher::new(catalog, latency);
        let recipes = matcher.find(&query, &self.filters).await;

        Ok(SearchResult { query, recipes })
    }
}

/// Main entry point for the builder API
pub struct RecipeSearch;

impl RecipeSearch {
    /// Creates a new builder for a recipe search
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder();
    /// ```
    pub fn builder() -> RecipeSearchBuilder {
        RecipeSearchBuilder::default()
    }
}
