//! Quantity Tools
//!
//! Rendering, aggregation and alias listing for callers outside the library.

use serde::Serialize;

use crate::units::{
    aggregate, is_convertible, render, CanonicalUnit, DisplaySystem, IngredientQuantity,
    Quantity, UnitError, UNIT_ALIASES,
};

/// Response for render_quantity
#[derive(Debug, Serialize)]
pub struct RenderQuantityResponse {
    pub input: Quantity,
    pub system: DisplaySystem,
    pub result: Quantity,
    pub convertible: bool,
    pub display: String,
}

/// Response for aggregate_quantities
#[derive(Debug, Serialize)]
pub struct AggregateQuantitiesResponse {
    pub system: DisplaySystem,
    pub entry_count: usize,
    pub lines: Vec<IngredientQuantity>,
}

/// One row of the alias table
#[derive(Debug, Serialize)]
pub struct UnitAliasEntry {
    pub label: &'static str,
    pub canonical: CanonicalUnit,
    pub multiplier: f64,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub units: Vec<UnitAliasEntry>,
    pub count: usize,
}

fn reject(err: UnitError) -> String {
    if err.is_invalid_quantity() {
        tracing::warn!("Rejected quantity: {}", err);
    } else {
        tracing::debug!("Rejected request: {}", err);
    }
    err.to_string()
}

/// Render one amount and unit in the requested display system
pub fn render_quantity(
    amount: f64,
    unit: &str,
    system: DisplaySystem,
) -> Result<RenderQuantityResponse, String> {
    let result = render(amount, unit, system).map_err(reject)?;

    Ok(RenderQuantityResponse {
        input: Quantity::new(amount, unit),
        system,
        display: result.to_string(),
        convertible: is_convertible(unit),
        result,
    })
}

/// Aggregate ingredient quantities into shopping-list lines
pub fn aggregate_quantities(
    items: &[IngredientQuantity],
    system: DisplaySystem,
) -> Result<AggregateQuantitiesResponse, String> {
    let lines = aggregate(items, system).map_err(reject)?;

    Ok(AggregateQuantitiesResponse {
        system,
        entry_count: items.len(),
        lines,
    })
}

/// List every recognized unit label
pub fn list_units() -> ListUnitsResponse {
    let units: Vec<UnitAliasEntry> = UNIT_ALIASES
        .iter()
        .map(|(label, alias)| UnitAliasEntry {
            label: *label,
            canonical: alias.canonical,
            multiplier: alias.multiplier,
        })
        .collect();

    ListUnitsResponse {
        count: units.len(),
        units,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_quantity() {
        let response = render_quantity(2.0, "cup", DisplaySystem::Metric).unwrap();
        assert_eq!(response.result, Quantity::new(473.2, "ml"));
        assert_eq!(response.display, "473.2 ml");
        assert!(response.convertible);
        assert_eq!(response.input, Quantity::new(2.0, "cup"));
    }

    #[test]
    fn test_render_quantity_opaque() {
        let response = render_quantity(3.0, "clove", DisplaySystem::Imperial).unwrap();
        assert_eq!(response.result, Quantity::new(3.0, "clove"));
        assert!(!response.convertible);
    }

    #[test]
    fn test_render_quantity_rejects_nan() {
        let err = render_quantity(f64::NAN, "g", DisplaySystem::Metric).unwrap_err();
        assert!(err.starts_with("Invalid quantity"));
    }

    #[test]
    fn test_aggregate_quantities() {
        let items = vec![
            IngredientQuantity::new(1, 500.0, "g"),
            IngredientQuantity::new(1, 0.5, "kg"),
            IngredientQuantity::new(2, 1.0, "piece"),
        ];
        let response = aggregate_quantities(&items, DisplaySystem::Metric).unwrap();
        assert_eq!(response.entry_count, 3);
        assert_eq!(
            response.lines,
            vec![
                IngredientQuantity::new(1, 1.0, "kg"),
                IngredientQuantity::new(2, 1.0, "piece"),
            ]
        );
    }

    #[test]
    fn test_aggregate_quantities_rejects_infinity() {
        let items = vec![IngredientQuantity::new(5, f64::INFINITY, "g")];
        let err = aggregate_quantities(&items, DisplaySystem::Metric).unwrap_err();
        assert!(err.contains("ingredient 5"));
    }

    #[test]
    fn test_reject_keeps_error_message() {
        let err = UnitError::InvalidQuantity { amount: f64::INFINITY };
        assert!(err.is_invalid_quantity());
        assert_eq!(reject(err.clone()), err.to_string());

        let err = UnitError::UnknownSystem("cubits".to_string());
        assert!(!err.is_invalid_quantity());
        assert!(reject(err).contains("cubits"));
    }

    #[test]
    fn test_list_units() {
        let response = list_units();
        assert_eq!(response.count, UNIT_ALIASES.len());
        assert_eq!(response.units[0].label, "g");
        assert!(response
            .units
            .iter()
            .any(|u| u.label == "fl oz" && u.canonical == CanonicalUnit::Milliliters));
    }
}
