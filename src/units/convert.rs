//! Quantity rendering
//!
//! Converts a single (amount, unit) pair into the requested display system,
//! picking the display magnitude and applying fixed-precision rounding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::aliases::{resolve, CanonicalUnit, G_PER_KG, G_PER_OZ, ML_PER_FL_OZ, ML_PER_LITER};
use super::error::{ensure_finite, UnitError, UnitResult};

/// Ounces per pound for the imperial mass display
const OZ_PER_LB: f64 = 16.0;
/// Fluid ounces per cup for the imperial volume display
const FL_OZ_PER_CUP: f64 = 8.0;

/// User-facing unit convention
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplaySystem {
    /// Echo the raw pair, no resolution
    Original,
    #[default]
    Metric,
    Imperial,
}

impl DisplaySystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplaySystem::Original => "original",
            DisplaySystem::Metric => "metric",
            DisplaySystem::Imperial => "imperial",
        }
    }
}

impl FromStr for DisplaySystem {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "original" => Ok(DisplaySystem::Original),
            "metric" => Ok(DisplaySystem::Metric),
            "imperial" => Ok(DisplaySystem::Imperial),
            _ => Err(UnitError::UnknownSystem(s.to_string())),
        }
    }
}

impl fmt::Display for DisplaySystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An amount paired with a unit label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub amount: f64,
    pub unit: String,
}

impl Quantity {
    pub fn new(amount: f64, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.trim().is_empty() {
            write!(f, "{}", self.amount)
        } else {
            write!(f, "{} {}", self.amount, self.unit.trim())
        }
    }
}

/// Round to a fixed number of decimals, ties going away from zero.
///
/// Values too large to scale carry no fractional digits and are returned as-is.
pub fn round_half_away_from_zero(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

fn round2(value: f64) -> f64 {
    round_half_away_from_zero(value, 2)
}

fn round1(value: f64) -> f64 {
    round_half_away_from_zero(value, 1)
}

/// Render a canonical amount in the display system's preferred magnitude.
///
/// - Mass, metric: kg (2 decimals) from 1000 g up, otherwise g (1 decimal)
/// - Mass, imperial: lb (2 decimals) from 16 oz up, otherwise oz (2 decimals)
/// - Volume, metric: l (2 decimals) from 1000 ml up, otherwise ml (1 decimal)
/// - Volume, imperial: cup (2 decimals) from 8 fl oz up, otherwise fl oz (2 decimals)
///
/// `Original` returns the canonical amount as-is.
pub fn to_display(amount: f64, canonical: CanonicalUnit, system: DisplaySystem) -> Quantity {
    match (canonical, system) {
        (_, DisplaySystem::Original) => Quantity::new(amount, canonical.as_str()),
        (CanonicalUnit::Grams, DisplaySystem::Metric) => {
            if amount >= G_PER_KG {
                Quantity::new(round2(amount / G_PER_KG), "kg")
            } else {
                Quantity::new(round1(amount), "g")
            }
        }
        (CanonicalUnit::Grams, DisplaySystem::Imperial) => {
            let oz = amount / G_PER_OZ;
            if oz >= OZ_PER_LB {
                Quantity::new(round2(oz / OZ_PER_LB), "lb")
            } else {
                Quantity::new(round2(oz), "oz")
            }
        }
        (CanonicalUnit::Milliliters, DisplaySystem::Metric) => {
            if amount >= ML_PER_LITER {
                Quantity::new(round2(amount / ML_PER_LITER), "l")
            } else {
                Quantity::new(round1(amount), "ml")
            }
        }
        (CanonicalUnit::Milliliters, DisplaySystem::Imperial) => {
            let fl_oz = amount / ML_PER_FL_OZ;
            if fl_oz >= FL_OZ_PER_CUP {
                Quantity::new(round2(fl_oz / FL_OZ_PER_CUP), "cup")
            } else {
                Quantity::new(round2(fl_oz), "fl oz")
            }
        }
    }
}

/// Display form of a total in an opaque unit: 2 decimals, label unchanged
pub fn display_opaque(amount: f64, label: &str) -> Quantity {
    Quantity::new(round2(amount), label)
}

/// Render one raw (amount, unit) pair for display.
///
/// `Original` and unresolvable units echo the input exactly, without rounding.
/// Non-finite amounts are rejected before any arithmetic.
pub fn render(amount: f64, raw_unit: &str, system: DisplaySystem) -> UnitResult<Quantity> {
    let amount = ensure_finite(amount)?;

    if system == DisplaySystem::Original {
        return Ok(Quantity::new(amount, raw_unit));
    }

    match resolve(raw_unit) {
        Some(alias) => {
            let canonical_amount = ensure_finite(alias.to_canonical(amount))?;
            Ok(to_display(canonical_amount, alias.canonical, system))
        }
        None => Ok(Quantity::new(amount, raw_unit)),
    }
}
