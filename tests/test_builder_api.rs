use recipe_finder::{
    find_recipes, Catalog, Difficulty, FinderError, RecipeSearch, SearchFilters,
    SimulatedLatency, KETO, VEGETARIAN,
};
use std::time::Duration;

#[tokio::test]
async fn test_builder_requires_query() {
    let result = RecipeSearch::builder()
        .catalog(Catalog::reference())
        .no_latency()
        .search()
        .await;

    match result {
        Err(FinderError::BuilderError(msg)) => assert!(msg.contains("No query")),
        other => panic!("Expected builder error, got {:?}", other.map(|r| r.recipes)),
    }
}

#[tokio::test]
async fn test_builder_applies_filters() {
    let result = RecipeSearch::builder()
        .query("une salade fraîche")
        .dietary([VEGETARIAN])
        .max_time(40)
        .catalog(Catalog::reference())
        .no_latency()
        .search()
        .await
        .unwrap();

    assert_eq!(result.query, "une salade fraîche");
    assert_eq!(result.recipes.len(), 1);
    assert_eq!(result.recipes[0].id, "2");
    assert_eq!(
        result.label(),
        "Basées sur votre recherche: \"une salade fraîche\""
    );
}

#[tokio::test]
async fn test_builder_filters_replace_individual_settings() {
    let result = RecipeSearch::builder()
        .query("curry")
        .difficulty(Difficulty::Easy)
        .filters(SearchFilters::new().with_difficulty(Difficulty::Medium))
        .catalog(Catalog::reference())
        .no_latency()
        .search()
        .await
        .unwrap();

    assert_eq!(result.recipes.len(), 1);
    assert_eq!(result.recipes[0].difficulty, Difficulty::Medium);
}

#[tokio::test]
async fn test_builder_fallback() {
    let result = RecipeSearch::builder()
        .query("keto")
        .dietary([KETO])
        .catalog(Catalog::reference())
        .no_latency()
        .search()
        .await
        .unwrap();

    let ids: Vec<&str> = result.recipes.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[tokio::test(start_paused = true)]
async fn test_builder_custom_latency() {
    let start = tokio::time::Instant::now();
    let result = RecipeSearch::builder()
        .query("poulet")
        .catalog(Catalog::reference())
        .latency(SimulatedLatency::from_millis(250))
        .search()
        .await
        .unwrap();

    assert!(start.elapsed() >= Duration::from_millis(250));
    assert_eq!(result.recipes.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_find_recipes_convenience() {
    let filters = SearchFilters::new().with_dietary([VEGETARIAN]).with_max_time(40);
    let recipes = find_recipes("une salade", &filters).await;
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "Salade de Quinoa Méditerranéenne");
}
