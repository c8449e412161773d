//! Unit normalization module
//!
//! Resolves free-text unit labels, renders quantities in a display system and
//! aggregates ingredient quantities into shopping-list lines. Everything here is
//! pure: no I/O and no state shared between calls.

pub mod aggregate;
pub mod aliases;
pub mod convert;
pub mod error;

pub use aggregate::{aggregate, group_entry, AggregationKey, GroupUnit, IngredientQuantity};
pub use aliases::{
    is_convertible, normalize_label, opaque_label, resolve, CanonicalUnit, UnitAlias,
    UNIT_ALIASES,
};
pub use convert::{
    display_opaque, render, round_half_away_from_zero, to_display, DisplaySystem, Quantity,
};
pub use error::{UnitError, UnitResult};
