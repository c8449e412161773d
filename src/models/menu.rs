//! Weekly menu model
//!
//! A menu is a set of slots, each cooking one recipe for some number of servings.

use serde::{Deserialize, Serialize};

use super::recipe::default_servings;
use super::Recipe;
use crate::units::IngredientQuantity;

/// A weekly menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: i64,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub slots: Vec<MenuSlot>,
}

/// One meal in the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSlot {
    pub day: u8,
    pub meal: String,
    /// Replaces the menu-wide servings for this slot only
    #[serde(default)]
    pub servings_override: Option<u32>,
    pub recipe: Recipe,
}

impl MenuSlot {
    pub fn effective_servings(&self, menu_servings: u32) -> u32 {
        self.servings_override.unwrap_or(menu_servings)
    }

    /// Scale factor from the recipe's servings to this slot's servings
    pub fn scale(&self, menu_servings: u32) -> f64 {
        self.recipe.scale_for(self.effective_servings(menu_servings))
    }
}

impl Menu {
    /// Every recipe ingredient of every slot, scaled to the slot's servings.
    ///
    /// Order follows slots, then recipe ingredient order.
    pub fn ingredient_quantities(&self) -> Vec<IngredientQuantity> {
        self.slots
            .iter()
            .flat_map(|slot| {
                let scale = slot.scale(self.servings);
                slot.recipe.ingredients.iter().map(move |ri| {
                    IngredientQuantity::new(ri.ingredient.id, ri.amount * scale, ri.unit.clone())
                })
            })
            .collect()
    }
}
