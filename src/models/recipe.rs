//! Recipe model
//!
//! A recipe with its per-ingredient amounts, as handed over by the recipe store.

use serde::{Deserialize, Serialize};

use super::Ingredient;

/// A recipe and the servings its amounts are written for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

/// One ingredient line of a recipe, with its raw human-entered unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub ingredient: Ingredient,
    pub amount: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
}

pub(crate) fn default_servings() -> u32 {
    4
}

fn default_unit() -> String {
    "piece".to_string()
}

impl Recipe {
    /// Factor that rescales this recipe's amounts to `servings`.
    ///
    /// A recipe with zero servings is used as written.
    pub fn scale_for(&self, servings: u32) -> f64 {
        if self.servings == 0 {
            1.0
        } else {
            f64::from(servings) / f64::from(self.servings)
        }
    }
}
