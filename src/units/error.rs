//! Error types for quantity arithmetic

use thiserror::Error;

/// Errors raised by the unit engine
///
/// Unknown units are never an error; they pass through as opaque labels.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("Invalid quantity: amount {amount} is not a finite number")]
    InvalidQuantity { amount: f64 },

    #[error("Invalid quantity for ingredient {ingredient_id}: amount {amount} is not a finite number")]
    InvalidIngredientQuantity { ingredient_id: i64, amount: f64 },

    #[error("Unknown display system: '{0}' (expected original, metric or imperial)")]
    UnknownSystem(String),
}

/// Result type for unit operations
pub type UnitResult<T> = Result<T, UnitError>;

/// Reject NaN and infinities before they reach any arithmetic
pub(crate) fn ensure_finite(amount: f64) -> UnitResult<f64> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(UnitError::InvalidQuantity { amount })
    }
}

impl UnitError {
    /// True for either flavor of non-finite amount
    pub fn is_invalid_quantity(&self) -> bool {
        matches!(
            self,
            UnitError::InvalidQuantity { .. } | UnitError::InvalidIngredientQuantity { .. }
        )
    }
}
