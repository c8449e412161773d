//! Menu Planner Library
//!
//! Unit normalization and quantity aggregation for recipes, menus and
//! shopping lists.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod tools;
pub mod units;

pub use units::{aggregate, render, resolve, DisplaySystem, IngredientQuantity, Quantity, UnitError};
