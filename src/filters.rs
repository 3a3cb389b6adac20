use serde::{Deserialize, Serialize};

use crate::model::{Difficulty, Recipe};

/// Constraints attached to a single search submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Requested dietary tags; a recipe needs any one of them
    #[serde(default)]
    pub dietary: Vec<String>,
    /// Upper bound on prep + cook time in minutes. Zero means no limit.
    #[serde(default)]
    pub max_time: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dietary<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_time(mut self, minutes: u32) -> Self {
        self.max_time = Some(minutes);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Adds the tag if absent, removes it otherwise. Returns whether it is now selected.
    pub fn toggle_dietary(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.dietary.iter().position(|t| t == tag) {
            self.dietary.remove(pos);
            false
        } else {
            self.dietary.push(tag.to_string());
            true
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dietary.is_empty() && self.time_limit().is_none() && self.difficulty.is_none()
    }

    /// Effective time bound, with zero treated as unset
    pub fn time_limit(&self) -> Option<u32> {
        self.max_time.filter(|&minutes| minutes > 0)
    }

    pub(crate) fn matches_dietary(&self, recipe: &Recipe) -> bool {
        self.dietary.is_empty() || self.dietary.iter().any(|tag| recipe.has_tag(tag))
    }

    pub(crate) fn matches_time(&self, recipe: &Recipe) -> bool {
        self.time_limit()
            .map_or(true, |limit| recipe.total_time() <= limit)
    }

    pub(crate) fn matches_difficulty(&self, recipe: &Recipe) -> bool {
        self.difficulty.map_or(true, |d| recipe.difficulty == d)
    }
}
