use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::FinderError;

pub const VEGETARIAN: &str = "Végétarien";
pub const VEGAN: &str = "Végan";
pub const GLUTEN_FREE: &str = "Sans gluten";
pub const DAIRY_FREE: &str = "Sans lactose";
pub const KETO: &str = "Keto";

/// Dietary tags offered to the user, in display order
pub const DIETARY_TAGS: [&str; 5] = [VEGETARIAN, VEGAN, GLUTEN_FREE, DAIRY_FREE, KETO];

/// How hard a recipe is to prepare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "Facile", alias = "Easy")]
    Easy,
    #[serde(rename = "Moyen", alias = "Medium")]
    Medium,
    #[serde(rename = "Difficile", alias = "Hard")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Label shown on cards and used in catalog files
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Facile",
            Difficulty::Medium => "Moyen",
            Difficulty::Hard => "Difficile",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = FinderError;

    /// Accepts the catalog labels and the English names, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "facile" | "easy" => Ok(Difficulty::Easy),
            "moyen" | "medium" => Ok(Difficulty::Medium),
            "difficile" | "hard" => Ok(Difficulty::Hard),
            _ => Err(FinderError::UnknownDifficulty(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    /// Steps in cooking order
    pub instructions: Vec<String>,
    /// Minutes
    pub prep_time: u32,
    /// Minutes
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Recipe {
    /// Prep plus cook minutes, saturating at `u32::MAX`
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.dietary_tags.iter().any(|t| t == tag)
    }
}
