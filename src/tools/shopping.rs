//! Shopping List Tools
//!
//! Builds a display-ready shopping list for a menu.

use serde::Serialize;

use crate::models::{Menu, ShoppingList};
use crate::units::{DisplaySystem, Quantity};

/// A shopping-list line ready for display
#[derive(Debug, Serialize)]
pub struct ShoppingLine {
    pub ingredient_id: i64,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub display: String,
}

/// Lines under one category heading
#[derive(Debug, Serialize)]
pub struct ShoppingSection {
    pub category: String,
    pub lines: Vec<ShoppingLine>,
}

/// Response for build_shopping_list
#[derive(Debug, Serialize)]
pub struct ShoppingListResponse {
    pub menu_id: i64,
    pub unit_system: DisplaySystem,
    pub item_count: usize,
    pub sections: Vec<ShoppingSection>,
}

/// Build the shopping list for a menu in the given display system
pub fn build_shopping_list(
    menu: &Menu,
    system: DisplaySystem,
) -> Result<ShoppingListResponse, String> {
    let list = ShoppingList::assemble(menu, system).map_err(|e| {
        tracing::warn!(menu_id = menu.id, "Shopping list rejected: {}", e);
        format!("Failed to build shopping list for menu {}: {}", menu.id, e)
    })?;

    let sections = list
        .by_category()
        .into_iter()
        .map(|section| ShoppingSection {
            category: section.category.to_string(),
            lines: section
                .items
                .into_iter()
                .map(|item| ShoppingLine {
                    ingredient_id: item.ingredient.id,
                    name: item.ingredient.name.clone(),
                    amount: item.total_amount,
                    unit: item.unit.clone(),
                    display: format!(
                        "{} {}",
                        Quantity::new(item.total_amount, item.unit.as_str()),
                        item.ingredient.name
                    ),
                })
                .collect(),
        })
        .collect();

    Ok(ShoppingListResponse {
        menu_id: list.menu_id,
        unit_system: list.unit_system,
        item_count: list.items.len(),
        sections,
    })
}
