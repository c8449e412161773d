//! Quantity aggregation
//!
//! Folds many (ingredient, amount, unit) entries into one line per ingredient
//! and unit family. Sums happen in canonical space and are rounded exactly once.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::aliases::{opaque_label, resolve, CanonicalUnit};
use super::convert::{display_opaque, to_display, DisplaySystem};
use super::error::{UnitError, UnitResult};

/// One ingredient amount as supplied by a recipe, or one aggregated line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    pub ingredient_id: i64,
    pub amount: f64,
    pub unit: String,
}

impl IngredientQuantity {
    pub fn new(ingredient_id: i64, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            ingredient_id,
            amount,
            unit: unit.into(),
        }
    }
}

/// The unit family an entry is summed under
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupUnit {
    Canonical(CanonicalUnit),
    /// Unresolvable label, trimmed with its case kept
    Opaque(String),
}

/// Identifies one shopping-list line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregationKey {
    pub ingredient_id: i64,
    pub unit: GroupUnit,
}

/// Compute the grouping key and the amount in that group's unit.
///
/// Under `Original` nothing resolves, so every label is its own group.
pub fn group_entry(item: &IngredientQuantity, system: DisplaySystem) -> (AggregationKey, f64) {
    let alias = match system {
        DisplaySystem::Original => None,
        DisplaySystem::Metric | DisplaySystem::Imperial => resolve(&item.unit),
    };

    let (unit, amount) = match alias {
        Some(alias) => (GroupUnit::Canonical(alias.canonical), alias.to_canonical(item.amount)),
        None => (GroupUnit::Opaque(opaque_label(&item.unit).to_string()), item.amount),
    };

    let key = AggregationKey {
        ingredient_id: item.ingredient_id,
        unit,
    };
    (key, amount)
}

/// Consolidate entries per ingredient and unit family.
///
/// Output order is first-seen order of each group. Zero and negative amounts go
/// through the same arithmetic; any non-finite amount or total is rejected.
pub fn aggregate(
    items: &[IngredientQuantity],
    system: DisplaySystem,
) -> UnitResult<Vec<IngredientQuantity>> {
    if let Some(bad) = items.iter().find(|item| !item.amount.is_finite()) {
        return Err(UnitError::InvalidIngredientQuantity {
            ingredient_id: bad.ingredient_id,
            amount: bad.amount,
        });
    }

    let mut index: HashMap<AggregationKey, usize> = HashMap::new();
    let mut groups: Vec<(AggregationKey, f64)> = Vec::new();

    for item in items {
        let (key, amount) = group_entry(item, system);
        match index.get(&key) {
            Some(&i) => groups[i].1 += amount,
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, amount));
            }
        }
    }

    let lines = groups
        .into_iter()
        .map(|(key, total)| {
            if !total.is_finite() {
                return Err(UnitError::InvalidIngredientQuantity {
                    ingredient_id: key.ingredient_id,
                    amount: total,
                });
            }
            let quantity = match (&key.unit, system) {
                (GroupUnit::Opaque(label), DisplaySystem::Original) => {
                    IngredientQuantity::new(key.ingredient_id, total, label.as_str())
                }
                (GroupUnit::Opaque(label), _) => {
                    let shown = display_opaque(total, label);
                    IngredientQuantity::new(key.ingredient_id, shown.amount, shown.unit)
                }
                (GroupUnit::Canonical(canonical), _) => {
                    let shown = to_display(total, *canonical, system);
                    IngredientQuantity::new(key.ingredient_id, shown.amount, shown.unit)
                }
            };
            Ok(quantity)
        })
        .collect::<UnitResult<Vec<_>>>()?;

    tracing::debug!(
        entries = items.len(),
        lines = lines.len(),
        system = %system,
        "Aggregated ingredient quantities"
    );

    Ok(lines)
}
