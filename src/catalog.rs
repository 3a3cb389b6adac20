use log::debug;
use std::collections::HashSet;
use std::path::Path;

use crate::model::{Difficulty, Recipe, GLUTEN_FREE, VEGAN, VEGETARIAN};
use crate::FinderError;

/// Read-only collection of every recipe the finder knows about.
///
/// Declaration order is significant: results and the fallback subset
/// are always returned in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Create a catalog, rejecting duplicate recipe ids and recipes serving nobody
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, FinderError> {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            if !seen.insert(recipe.id.as_str()) {
                return Err(FinderError::DuplicateRecipeId(recipe.id.clone()));
            }
            if recipe.servings == 0 {
                return Err(FinderError::InvalidRecipe {
                    id: recipe.id.clone(),
                    reason: "servings must be positive".to_string(),
                });
            }
        }
        Ok(Self { recipes })
    }

    /// Parse a JSON array of recipes
    pub fn from_json_str(json: &str) -> Result<Self, FinderError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    /// Load a JSON catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FinderError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        debug!("Loaded {} recipes from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The built-in catalog
    pub fn reference() -> Self {
        Self {
            recipes: vec![
                creamy_chicken_pasta(),
                mediterranean_quinoa_salad(),
                vegan_vegetable_curry(),
            ],
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pexels(photo: &str) -> String {
    format!("https://images.pexels.com/photos/{}", photo)
}

fn creamy_chicken_pasta() -> Recipe {
    Recipe {
        id: "1".to_string(),
        name: "Pasta au Poulet Crémeux".to_string(),
        description: "Des pâtes onctueuses avec du poulet tendre dans une sauce crémeuse aux herbes."
            .to_string(),
        ingredients: lines(&[
            "400g de pâtes (penne ou fusilli)",
            "2 blancs de poulet",
            "200ml de crème fraîche",
            "1 oignon",
            "3 gousses d'ail",
            "100g de champignons",
            "Herbes de Provence",
            "Sel et poivre",
            "Huile d'olive",
        ]),
        instructions: lines(&[
            "Faire cuire les pâtes selon les instructions du paquet.",
            "Couper le poulet en dés et le faire revenir dans une poêle avec l'huile d'olive.",
            "Ajouter l'oignon émincé et l'ail haché, faire revenir 3 minutes.",
            "Incorporer les champignons et cuire 5 minutes.",
            "Verser la crème fraîche, assaisonner avec les herbes, sel et poivre.",
            "Mélanger avec les pâtes égouttées et servir immédiatement.",
        ]),
        prep_time: 15,
        cook_time: 25,
        servings: 4,
        difficulty: Difficulty::Easy,
        dietary_tags: vec![],
        image: Some(pexels("1279330/pexels-photo-1279330.jpeg")),
    }
}

fn mediterranean_quinoa_salad() -> Recipe {
    Recipe {
        id: "2".to_string(),
        name: "Salade de Quinoa Méditerranéenne".to_string(),
        description: "Une salade fraîche et nutritive avec du quinoa, légumes et feta.".to_string(),
        ingredients: lines(&[
            "200g de quinoa",
            "1 concombre",
            "200g de tomates cerises",
            "100g de feta",
            "1/2 oignon rouge",
            "50g d'olives noires",
            "Menthe fraîche",
            "Huile d'olive",
            "Jus de citron",
            "Sel et poivre",
        ]),
        instructions: lines(&[
            "Rincer le quinoa et le cuire dans l'eau bouillante salée pendant 15 minutes.",
            "Laisser refroidir le quinoa cuit.",
            "Couper le concombre en dés, les tomates cerises en deux.",
            "Émincer l'oignon rouge finement.",
            "Mélanger tous les légumes avec le quinoa refroidi.",
            "Ajouter la feta émiettée, les olives et la menthe.",
            "Assaisonner avec l'huile d'olive, le jus de citron, sel et poivre.",
        ]),
        prep_time: 20,
        cook_time: 15,
        servings: 4,
        difficulty: Difficulty::Easy,
        dietary_tags: lines(&[VEGETARIAN, GLUTEN_FREE]),
        image: Some(pexels("1640777/pexels-photo-1640777.jpeg")),
    }
}

fn vegan_vegetable_curry() -> Recipe {
    Recipe {
        id: "3".to_string(),
        name: "Curry de Légumes Végan".to_string(),
        description: "Un curry épicé et savoureux avec des légumes de saison et lait de coco."
            .to_string(),
        ingredients: lines(&[
            "1 aubergine",
            "2 courgettes",
            "1 poivron rouge",
            "400ml de lait de coco",
            "2 cuillères à soupe de pâte de curry",
            "1 oignon",
            "3 gousses d'ail",
            "1 morceau de gingembre",
            "400g de tomates concassées",
            "Épinards frais",
            "Coriandre fraîche",
            "Riz basmati",
        ]),
        instructions: lines(&[
            "Couper tous les légumes en cubes.",
            "Faire revenir l'oignon, l'ail et le gingembre dans une poêle.",
            "Ajouter la pâte de curry et cuire 1 minute.",
            "Incorporer les légumes et les tomates concassées.",
            "Verser le lait de coco et laisser mijoter 20 minutes.",
            "Ajouter les épinards en fin de cuisson.",
            "Servir avec du riz basmati et de la coriandre fraîche.",
        ]),
        prep_time: 20,
        cook_time: 30,
        servings: 4,
        difficulty: Difficulty::Medium,
        dietary_tags: lines(&[VEGAN, GLUTEN_FREE]),
        image: Some(pexels("2474661/pexels-photo-2474661.jpeg")),
    }
}
