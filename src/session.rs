use log::{error, warn};
use std::collections::HashSet;

use crate::filters::SearchFilters;
use crate::generator::RecipeGenerator;
use crate::model::Recipe;
use crate::FinderError;

/// Caller-side search state: the last submission, its results and the
/// recipes the user saved during this session.
///
/// Saved ids live only here; the generator never sees them.
pub struct SearchSession<G> {
    generator: G,
    last_query: String,
    last_filters: SearchFilters,
    results: Vec<Recipe>,
    has_searched: bool,
    saved: HashSet<String>,
}

impl<G: RecipeGenerator> SearchSession<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            last_query: String::new(),
            last_filters: SearchFilters::default(),
            results: Vec::new(),
            has_searched: false,
            saved: HashSet::new(),
        }
    }

    /// Run a search and replace the current results.
    ///
    /// A generator failure is logged and leaves the session with no
    /// results so the user can retry.
    pub async fn search(
        &mut self,
        query: &str,
        filters: SearchFilters,
    ) -> Result<&[Recipe], FinderError> {
        if query.trim().is_empty() {
            return Err(FinderError::EmptyQuery);
        }

        self.has_searched = true;
        self.last_query = query.to_string();
        self.last_filters = filters;

        self.results = match self.generator.generate(query, &self.last_filters).await {
            Ok(recipes) => recipes,
            Err(e) => {
                error!(
                    "{} failed to generate recipes: {}",
                    self.generator.generator_name(),
                    e
                );
                Vec::new()
            }
        };

        Ok(&self.results)
    }

    /// Repeat the last search with the same query and filters
    pub async fn regenerate(&mut self) -> Result<&[Recipe], FinderError> {
        if self.last_query.is_empty() {
            warn!("Nothing to regenerate, no search has been run");
            return Ok(&[]);
        }
        let query = self.last_query.clone();
        let filters = self.last_filters.clone();
        self.search(&query, filters).await
    }

    /// Flip the saved state of a recipe. Returns true if it is now saved.
    pub fn toggle_saved(&mut self, recipe_id: &str) -> bool {
        if self.saved.remove(recipe_id) {
            false
        } else {
            self.saved.insert(recipe_id.to_string());
            true
        }
    }

    pub fn is_saved(&self, recipe_id: &str) -> bool {
        self.saved.contains(recipe_id)
    }

    pub fn saved_count(&self) -> usize {
        self.saved.len()
    }

    /// Saved recipes among the current results, in result order
    pub fn saved_recipes(&self) -> Vec<&Recipe> {
        self.results
            .iter()
            .filter(|r| self.saved.contains(&r.id))
            .collect()
    }

    pub fn results(&self) -> &[Recipe] {
        &self.results
    }

    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    pub fn last_filters(&self) -> &SearchFilters {
        &self.last_filters
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn results_label(&self) -> String {
        results_label(&self.last_query)
    }
}

pub(crate) fn results_label(query: &str) -> String {
    format!("Basées sur votre recherche: \"{}\"", query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::latency::NoLatency;
    use crate::matcher::RecipeMatcher;
    use std::sync::Arc;

    fn session() -> SearchSession<RecipeMatcher> {
        SearchSession::new(RecipeMatcher::new(Arc::new(Catalog::reference()), NoLatency))
    }

    #[tokio::test]
    async fn test_blank_query_rejected() {
        let mut session = session();
        let result = session.search("   ", SearchFilters::new()).await;
        assert!(matches!(result, Err(FinderError::EmptyQuery)));
        assert!(!session.has_searched());
    }

    #[tokio::test]
    async fn test_search_records_state() {
        let mut session = session();
        let filters = SearchFilters::new().with_max_time(40);
        let count = session.search("salade", filters.clone()).await.unwrap().len();

        assert_eq!(count, 2);
        assert!(session.has_searched());
        assert_eq!(session.last_query(), "salade");
        assert_eq!(session.last_filters(), &filters);
        assert_eq!(
            session.results_label(),
            "Basées sur votre recherche: \"salade\""
        );
    }

    #[tokio::test]
    async fn test_regenerate_without_search_is_noop() {
        let mut session = session();
        assert!(session.regenerate().await.unwrap().is_empty());
        assert!(!session.has_searched());
    }

    #[test]
    fn test_toggle_saved() {
        let mut session = session();
        assert!(session.toggle_saved("2"));
        assert!(session.is_saved("2"));
        assert_eq!(session.saved_count(), 1);
        assert!(!session.toggle_saved("2"));
        assert!(!session.is_saved("2"));
        assert_eq!(session.saved_count(), 0);
    }
}
