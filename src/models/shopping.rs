//! Shopping list model
//!
//! Aggregated lines for a whole menu, joined back to their catalog entries and
//! ordered for display.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Ingredient, Menu};
use crate::units::{aggregate, DisplaySystem, UnitResult};

/// One line of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub ingredient: Ingredient,
    pub total_amount: f64,
    pub unit: String,
}

/// The shopping list for a menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub menu_id: i64,
    pub unit_system: DisplaySystem,
    pub items: Vec<ShoppingItem>,
}

/// Consecutive items sharing a category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySection<'a> {
    pub category: &'a str,
    pub items: Vec<&'a ShoppingItem>,
}

impl ShoppingList {
    /// Build the list for `menu`, with amounts rendered in `system`.
    ///
    /// Items are sorted by category, then name. Lines of one ingredient in
    /// several unit families keep their first-seen order.
    pub fn assemble(menu: &Menu, system: DisplaySystem) -> UnitResult<Self> {
        let quantities = menu.ingredient_quantities();
        let lines = aggregate(&quantities, system)?;

        // First record seen for an id wins
        let mut catalog: HashMap<i64, &Ingredient> = HashMap::new();
        for slot in &menu.slots {
            for ri in &slot.recipe.ingredients {
                catalog.entry(ri.ingredient.id).or_insert(&ri.ingredient);
            }
        }

        let mut items: Vec<ShoppingItem> = lines
            .into_iter()
            .filter_map(|line| {
                catalog.get(&line.ingredient_id).map(|ingredient| ShoppingItem {
                    ingredient: (*ingredient).clone(),
                    total_amount: line.amount,
                    unit: line.unit,
                })
            })
            .collect();

        items.sort_by(|a, b| {
            a.ingredient
                .category
                .cmp(&b.ingredient.category)
                .then_with(|| a.ingredient.name.cmp(&b.ingredient.name))
        });

        tracing::debug!(
            menu_id = menu.id,
            slots = menu.slots.len(),
            items = items.len(),
            "Assembled shopping list"
        );

        Ok(Self {
            menu_id: menu.id,
            unit_system: system,
            items,
        })
    }

    /// Group the (already sorted) items into category sections
    pub fn by_category(&self) -> Vec<CategorySection<'_>> {
        let mut sections: Vec<CategorySection<'_>> = Vec::new();
        for item in &self.items {
            match sections.last_mut() {
                Some(section) if section.category == item.ingredient.category => {
                    section.items.push(item);
                }
                _ => sections.push(CategorySection {
                    category: &item.ingredient.category,
                    items: vec![item],
                }),
            }
        }
        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MenuSlot, Recipe, RecipeIngredient};
    use crate::units::UnitError;

    fn ri(id: i64, name: &str, category: &str, amount: f64, unit: &str) -> RecipeIngredient {
        RecipeIngredient {
            ingredient: Ingredient::new(id, name, category),
            amount,
            unit: unit.to_string(),
        }
    }

    fn slot(recipe_id: i64, servings: u32, ingredients: Vec<RecipeIngredient>) -> MenuSlot {
        MenuSlot {
            day: 0,
            meal: "dinner".to_string(),
            servings_override: None,
            recipe: Recipe {
                id: recipe_id,
                name: format!("Recipe {}", recipe_id),
                servings,
                ingredients,
            },
        }
    }

    fn sample_menu() -> Menu {
        Menu {
            id: 42,
            servings: 4,
            slots: vec![
                slot(
                    1,
                    4,
                    vec![
                        ri(1, "flour", "pantry", 500.0, "g"),
                        ri(2, "milk", "dairy", 1.0, "cup"),
                        ri(3, "garlic", "produce", 2.0, "clove"),
                    ],
                ),
                slot(
                    2,
                    2,
                    vec![
                        ri(1, "flour", "pantry", 0.25, "kg"),
                        ri(3, "garlic", "produce", 1.0, "piece"),
                        ri(4, "butter", "dairy", 50.0, "g"),
                    ],
                ),
            ],
        }
    }

    #[test]
    fn test_assemble_scales_merges_and_sorts() {
        let list = ShoppingList::assemble(&sample_menu(), DisplaySystem::Metric).unwrap();
        assert_eq!(list.menu_id, 42);
        assert_eq!(list.unit_system, DisplaySystem::Metric);

        let lines: Vec<(&str, f64, &str)> = list
            .items
            .iter()
            .map(|i| (i.ingredient.name.as_str(), i.total_amount, i.unit.as_str()))
            .collect();
        assert_eq!(
            lines,
            vec![
                ("butter", 100.0, "g"),
                ("milk", 236.6, "ml"),
                ("flour", 1.0, "kg"),
                ("garlic", 2.0, "clove"),
                ("garlic", 2.0, "piece"),
            ]
        );
    }

    #[test]
    fn test_servings_override_applies_per_slot() {
        let mut menu = sample_menu();
        menu.slots[1].servings_override = Some(1);
        let list = ShoppingList::assemble(&menu, DisplaySystem::Metric).unwrap();
        let flour = list
            .items
            .iter()
            .find(|i| i.ingredient.name == "flour")
            .unwrap();
        // 500 g + 0.25 kg * (1 / 2)
        assert_eq!((flour.total_amount, flour.unit.as_str()), (625.0, "g"));
    }

    #[test]
    fn test_by_category() {
        let list = ShoppingList::assemble(&sample_menu(), DisplaySystem::Imperial).unwrap();
        let sections = list.by_category();
        let summary: Vec<(&str, usize)> = sections
            .iter()
            .map(|s| (s.category, s.items.len()))
            .collect();
        assert_eq!(summary, vec![("dairy", 2), ("pantry", 1), ("produce", 2)]);
    }

    #[test]
    fn test_empty_menu() {
        let menu = Menu {
            id: 1,
            servings: 4,
            slots: Vec::new(),
        };
        let list = ShoppingList::assemble(&menu, DisplaySystem::Metric).unwrap();
        assert!(list.items.is_empty());
        assert!(list.by_category().is_empty());
    }

    #[test]
    fn test_non_finite_amount_fails_whole_list() {
        let mut menu = sample_menu();
        menu.slots[0].recipe.ingredients[1].amount = f64::NAN;
        let result = ShoppingList::assemble(&menu, DisplaySystem::Metric);
        assert!(matches!(
            result,
            Err(UnitError::InvalidIngredientQuantity { ingredient_id: 2, .. })
        ));
    }
}
