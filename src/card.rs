use std::fmt;

use crate::model::Recipe;

const INGREDIENT_PREVIEW: usize = 4;
const STEP_PREVIEW: usize = 3;

/// Plain-text rendering of a recipe summary
pub struct RecipeCard<'a> {
    recipe: &'a Recipe,
    saved: bool,
}

impl<'a> RecipeCard<'a> {
    pub fn new(recipe: &'a Recipe, saved: bool) -> Self {
        Self { recipe, saved }
    }

    pub fn render(recipe: &Recipe, saved: bool) -> String {
        RecipeCard::new(recipe, saved).to_string()
    }
}

impl fmt::Display for RecipeCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.recipe;
        let marker = if self.saved { "♥" } else { "♡" };

        writeln!(f, "{} {} [{}]", marker, recipe.name, recipe.difficulty)?;
        writeln!(
            f,
            "  {} min · {} pers. · Prép: {}min",
            recipe.total_time(),
            recipe.servings,
            recipe.prep_time
        )?;
        if !recipe.dietary_tags.is_empty() {
            writeln!(f, "  {}", recipe.dietary_tags.join(", "))?;
        }
        writeln!(f, "  {}", recipe.description)?;

        writeln!(f, "  Ingrédients ({})", recipe.ingredients.len())?;
        for ingredient in recipe.ingredients.iter().take(INGREDIENT_PREVIEW) {
            writeln!(f, "    - {}", ingredient)?;
        }
        if recipe.ingredients.len() > INGREDIENT_PREVIEW {
            writeln!(
                f,
                "    +{} autres ingrédients...",
                recipe.ingredients.len() - INGREDIENT_PREVIEW
            )?;
        }

        writeln!(f, "  Instructions")?;
        for (i, step) in recipe.instructions.iter().take(STEP_PREVIEW).enumerate() {
            writeln!(f, "    {}. {}", i + 1, step)?;
        }
        if recipe.instructions.len() > STEP_PREVIEW {
            writeln!(
                f,
                "    +{} autres étapes...",
                recipe.instructions.len() - STEP_PREVIEW
            )?;
        }

        Ok(())
    }
}
