use clap::Parser;
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

use recipe_finder::{
    Catalog, Difficulty, FinderConfig, Latency, NoLatency, RecipeCard, RecipeMatcher,
    SearchFilters, SearchSession,
};

/// Find recipes matching your cravings and dietary needs
#[derive(Parser, Debug)]
#[command(name = "recipe-finder", version)]
struct Cli {
    /// What you feel like eating
    query: String,

    /// Dietary tag to accept (repeatable, any one matches)
    #[arg(short, long = "diet")]
    diet: Vec<String>,

    /// Maximum prep + cook time in minutes
    #[arg(short, long)]
    max_time: Option<u32>,

    /// Facile, Moyen or Difficile (English names accepted)
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// JSON catalog to search instead of the configured one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Skip the simulated response delay
    #[arg(long)]
    no_delay: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = FinderConfig::load()?;
    debug!("{:?}", config);

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => config.catalog()?,
    };
    let latency: Box<dyn Latency> = if cli.no_delay {
        Box::new(NoLatency)
    } else {
        config.latency()
    };

    let filters = SearchFilters {
        dietary: cli.diet,
        max_time: cli.max_time,
        difficulty: cli.difficulty,
    };

    let mut session = SearchSession::new(RecipeMatcher::new(Arc::new(catalog), latency));
    session.search(&cli.query, filters).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(session.results())?);
        return Ok(());
    }

    println!("Recettes générées ({})", session.results().len());
    println!("{}\n", session.results_label());
    for recipe in session.results() {
        println!("{}", RecipeCard::new(recipe, session.is_saved(&recipe.id)));
    }

    Ok(())
}
