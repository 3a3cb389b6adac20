pub mod builder;
pub mod card;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod generator;
pub mod latency;
pub mod matcher;
pub mod model;
pub mod session;

pub use builder::{RecipeSearch, RecipeSearchBuilder, SearchResult};
pub use card::RecipeCard;
pub use catalog::Catalog;
pub use config::FinderConfig;
pub use error::FinderError;
pub use filters::SearchFilters;
pub use generator::RecipeGenerator;
pub use latency::{Latency, NoLatency, SimulatedLatency};
pub use matcher::{select, RecipeMatcher, FALLBACK_COUNT, MAX_RESULTS};
pub use model::{
    Difficulty, Recipe, DAIRY_FREE, DIETARY_TAGS, GLUTEN_FREE, KETO, VEGAN, VEGETARIAN,
};
pub use session::SearchSession;

/// Find recipes in the built-in catalog with the default simulated delay
///
/// # Example
/// ```no_run
/// # use recipe_finder::{find_recipes, SearchFilters, VEGETARIAN};
/// # #[tokio::main]
/// # async fn main() {
/// let filters = SearchFilters::new().with_dietary([VEGETARIAN]).with_max_time(40);
/// let recipes = find_recipes("une salade fraîche", &filters).await;
/// assert_eq!(recipes[0].name, "Salade de Quinoa Méditerranéenne");
/// # }
/// ```
pub async fn find_recipes(query: &str, filters: &SearchFilters) -> Vec<Recipe> {
    RecipeMatcher::with_reference_catalog()
        .find(query, filters)
        .await
}
