//! Unit alias table and resolution
//!
//! Maps free-text unit labels onto the two canonical bases, grams for mass and
//! milliliters for volume. Labels outside the table are opaque and never guessed.

use serde::{Deserialize, Serialize};

/// Canonical base unit that convertible labels resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalUnit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "ml")]
    Milliliters,
}

impl CanonicalUnit {
    /// Get the canonical unit string
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalUnit::Grams => "g",
            CanonicalUnit::Milliliters => "ml",
        }
    }
}

impl std::fmt::Display for CanonicalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved unit: its canonical base and the factor that converts into it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitAlias {
    pub canonical: CanonicalUnit,
    pub multiplier: f64,
}

impl UnitAlias {
    const fn new(canonical: CanonicalUnit, multiplier: f64) -> Self {
        Self {
            canonical,
            multiplier,
        }
    }

    /// Convert an amount in this unit into the canonical base
    pub fn to_canonical(&self, amount: f64) -> f64 {
        amount * self.multiplier
    }
}

// ============================================================================
// Mass Conversion Constants (to grams)
// ============================================================================

pub const G_PER_KG: f64 = 1000.0;
pub const G_PER_OZ: f64 = 28.35;
pub const G_PER_LB: f64 = 453.592;

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

pub const ML_PER_LITER: f64 = 1000.0;
pub const ML_PER_CUP: f64 = 236.588;
pub const ML_PER_TBSP: f64 = 14.787;
pub const ML_PER_TSP: f64 = 4.929;
pub const ML_PER_FL_OZ: f64 = 29.574;

const GRAMS: UnitAlias = UnitAlias::new(CanonicalUnit::Grams, 1.0);
const KILOGRAMS: UnitAlias = UnitAlias::new(CanonicalUnit::Grams, G_PER_KG);
const OUNCES: UnitAlias = UnitAlias::new(CanonicalUnit::Grams, G_PER_OZ);
const POUNDS: UnitAlias = UnitAlias::new(CanonicalUnit::Grams, G_PER_LB);
const MILLILITERS: UnitAlias = UnitAlias::new(CanonicalUnit::Milliliters, 1.0);
const LITERS: UnitAlias = UnitAlias::new(CanonicalUnit::Milliliters, ML_PER_LITER);
const CUPS: UnitAlias = UnitAlias::new(CanonicalUnit::Milliliters, ML_PER_CUP);
const TABLESPOONS: UnitAlias = UnitAlias::new(CanonicalUnit::Milliliters, ML_PER_TBSP);
const TEASPOONS: UnitAlias = UnitAlias::new(CanonicalUnit::Milliliters, ML_PER_TSP);
const FLUID_OUNCES: UnitAlias = UnitAlias::new(CanonicalUnit::Milliliters, ML_PER_FL_OZ);

/// Every recognized label, in table order
pub const UNIT_ALIASES: &[(&str, UnitAlias)] = &[
    // Mass
    ("g", GRAMS),
    ("gram", GRAMS),
    ("grams", GRAMS),
    ("kg", KILOGRAMS),
    ("kilogram", KILOGRAMS),
    ("kilograms", KILOGRAMS),
    ("oz", OUNCES),
    ("ounce", OUNCES),
    ("ounces", OUNCES),
    ("lb", POUNDS),
    ("lbs", POUNDS),
    ("pound", POUNDS),
    ("pounds", POUNDS),
    // Volume
    ("ml", MILLILITERS),
    ("milliliter", MILLILITERS),
    ("milliliters", MILLILITERS),
    ("l", LITERS),
    ("liter", LITERS),
    ("liters", LITERS),
    ("litre", LITERS),
    ("litres", LITERS),
    ("cup", CUPS),
    ("cups", CUPS),
    ("tbsp", TABLESPOONS),
    ("tablespoon", TABLESPOONS),
    ("tablespoons", TABLESPOONS),
    ("tsp", TEASPOONS),
    ("teaspoon", TEASPOONS),
    ("teaspoons", TEASPOONS),
    ("fl oz", FLUID_OUNCES),
    ("fluid ounce", FLUID_OUNCES),
    ("fluid ounces", FLUID_OUNCES),
];

/// Normalize a raw unit label for table lookup
pub fn normalize_label(raw_unit: &str) -> String {
    raw_unit.trim().to_lowercase()
}

/// The label an unresolvable unit is known by: trimmed, case preserved
pub fn opaque_label(raw_unit: &str) -> &str {
    raw_unit.trim()
}

/// Resolve a raw unit label to its canonical base and multiplier.
///
/// Returns `None` for labels outside the alias table (including empty or
/// whitespace-only input); callers treat those as opaque units.
pub fn resolve(raw_unit: &str) -> Option<UnitAlias> {
    let key = normalize_label(raw_unit);
    UNIT_ALIASES
        .iter()
        .find(|(label, _)| *label == key)
        .map(|(_, alias)| *alias)
}

/// Whether a raw label converts to grams or milliliters
pub fn is_convertible(raw_unit: &str) -> bool {
    resolve(raw_unit).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_mass_units() {
        assert_eq!(resolve("g"), Some(GRAMS));
        assert_eq!(resolve("grams"), Some(GRAMS));
        assert_eq!(resolve("kg").map(|a| a.multiplier), Some(1000.0));
        assert_eq!(resolve("ounces").map(|a| a.multiplier), Some(28.35));
        assert_eq!(resolve("lbs").map(|a| a.multiplier), Some(453.592));
        assert_eq!(
            resolve("pound").map(|a| a.canonical),
            Some(CanonicalUnit::Grams)
        );
    }

    #[test]
    fn test_resolve_volume_units() {
        assert_eq!(resolve("ml"), Some(MILLILITERS));
        assert_eq!(resolve("litre").map(|a| a.multiplier), Some(1000.0));
        assert_eq!(resolve("cups").map(|a| a.multiplier), Some(236.588));
        assert_eq!(resolve("tbsp").map(|a| a.multiplier), Some(14.787));
        assert_eq!(resolve("teaspoon").map(|a| a.multiplier), Some(4.929));
        assert_eq!(resolve("fl oz").map(|a| a.multiplier), Some(29.574));
        assert_eq!(
            resolve("fluid ounces").map(|a| a.canonical),
            Some(CanonicalUnit::Milliliters)
        );
    }

    #[test]
    fn test_resolve_is_trimmed_and_case_insensitive() {
        assert_eq!(resolve("  KG "), resolve("kg"));
        assert_eq!(resolve("Fl Oz"), Some(FLUID_OUNCES));
        assert_eq!(resolve("\tTBSP\n"), Some(TABLESPOONS));
    }

    #[test]
    fn test_unknown_units_are_not_guessed() {
        assert_eq!(resolve("clove"), None);
        assert_eq!(resolve("piece"), None);
        assert_eq!(resolve("can"), None);
        // No pluralization inference beyond the table
        assert_eq!(resolve("tbsps"), None);
        assert_eq!(resolve("floz"), None);
        assert_eq!(resolve("kilo"), None);
    }

    #[test]
    fn test_empty_unit_is_unresolved() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("   "), None);
        assert_eq!(opaque_label("   "), "");
    }

    #[test]
    fn test_opaque_label_keeps_case() {
        assert_eq!(opaque_label("  Cloves "), "Cloves");
    }

    #[test]
    fn test_alias_labels_are_normalized_and_unique() {
        for (i, (label, _)) in UNIT_ALIASES.iter().enumerate() {
            assert_eq!(*label, normalize_label(label));
            assert!(
                UNIT_ALIASES[i + 1..].iter().all(|(other, _)| other != label),
                "duplicate alias {}",
                label
            );
        }
    }

    #[test]
    fn test_to_canonical() {
        assert_eq!(KILOGRAMS.to_canonical(1.5), 1500.0);
        assert_eq!(MILLILITERS.to_canonical(-3.0), -3.0);
    }
}
