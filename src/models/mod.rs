//! Data models
//!
//! Records supplied by the recipe, catalog and menu collaborators. Nothing here
//! is persisted; callers own where the data comes from.

mod ingredient;
mod menu;
mod recipe;
mod shopping;

pub use ingredient::Ingredient;
pub use menu::{Menu, MenuSlot};
pub use recipe::{Recipe, RecipeIngredient};
pub use shopping::{CategorySection, ShoppingItem, ShoppingList};
