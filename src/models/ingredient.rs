//! Ingredient catalog entry
//!
//! Identity and category come from the external catalog; quantity math only
//! ever looks at the id.

use serde::{Deserialize, Serialize};

/// An ingredient as known to the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "other".to_string()
}

impl Ingredient {
    pub fn new(id: i64, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
        }
    }
}
