//! Menu Planner MCP Server Implementation
//!
//! Exposes the unit engine and shopping-list assembly as MCP tools over stdio.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::models::{Ingredient, Menu, MenuSlot, Recipe, RecipeIngredient};
use crate::tools::quantities;
use crate::tools::shopping;
use crate::tools::status::StatusTracker;
use crate::units::{DisplaySystem, IngredientQuantity};

/// Menu Planner MCP Service
#[derive(Clone)]
pub struct MenuplanService {
    config: Config,
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<MenuplanService>,
}

impl MenuplanService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config.default_system))),
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// Parse an optional system name, falling back to the configured default
    fn display_system(&self, system: Option<&str>) -> Result<DisplaySystem, McpError> {
        match system {
            Some(s) => s
                .parse::<DisplaySystem>()
                .map_err(|e| McpError::invalid_params(e.to_string(), None)),
            None => Ok(self.config.default_system),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Quantity Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RenderQuantityParams {
    pub amount: f64,
    pub unit: String,
    /// original, metric or imperial
    pub system: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct QuantityEntryParams {
    pub ingredient_id: i64,
    pub amount: f64,
    pub unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AggregateQuantitiesParams {
    pub items: Vec<QuantityEntryParams>,
    pub system: Option<String>,
}

// ============================================================================
// Shopping List Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngredientParams {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "other".to_string()
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecipeIngredientParams {
    pub ingredient: IngredientParams,
    pub amount: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "piece".to_string()
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecipeParams {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientParams>,
}

fn default_servings() -> u32 {
    4
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MenuSlotParams {
    pub day: u8,
    pub meal: String,
    pub servings_override: Option<u32>,
    pub recipe: RecipeParams,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BuildShoppingListParams {
    pub menu_id: i64,
    #[serde(default = "default_servings")]
    pub servings: u32,
    pub slots: Vec<MenuSlotParams>,
    pub system: Option<String>,
}

impl From<RecipeParams> for Recipe {
    fn from(p: RecipeParams) -> Self {
        Recipe {
            id: p.id,
            name: p.name,
            servings: p.servings,
            ingredients: p
                .ingredients
                .into_iter()
                .map(|ri| RecipeIngredient {
                    ingredient: Ingredient::new(ri.ingredient.id, ri.ingredient.name, ri.ingredient.category),
                    amount: ri.amount,
                    unit: ri.unit,
                })
                .collect(),
        }
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl MenuplanService {
    // --- Status ---

    #[tool(description = "Get the current status of the Menu Planner service including build info, configured unit system and process information")]
    async fn menuplan_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for rendering quantities and building shopping lists. Call this when unsure how the unit tools behave.")]
    fn unit_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::UNIT_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(UNIT_INSTRUCTIONS)]))
    }

    // --- Quantities ---

    #[tool(description = "List every recognized unit label with its canonical unit (g or ml) and multiplier")]
    fn list_units(&self) -> Result<CallToolResult, McpError> {
        to_json(&quantities::list_units())
    }

    #[tool(description = "Render an amount and unit in a display system (original, metric or imperial). Unknown units pass through unchanged.")]
    fn render_quantity(&self, Parameters(p): Parameters<RenderQuantityParams>) -> Result<CallToolResult, McpError> {
        let system = self.display_system(p.system.as_deref())?;
        let result = quantities::render_quantity(p.amount, &p.unit, system)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Merge ingredient quantities into one line per ingredient and unit family, summing before rounding")]
    fn aggregate_quantities(&self, Parameters(p): Parameters<AggregateQuantitiesParams>) -> Result<CallToolResult, McpError> {
        let system = self.display_system(p.system.as_deref())?;
        let items: Vec<IngredientQuantity> = p
            .items
            .into_iter()
            .map(|i| IngredientQuantity::new(i.ingredient_id, i.amount, i.unit))
            .collect();
        let result = quantities::aggregate_quantities(&items, system)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    // --- Shopping ---

    #[tool(description = "Build a shopping list for a menu: scales each recipe to its slot's servings, merges quantities and groups lines by category")]
    fn build_shopping_list(&self, Parameters(p): Parameters<BuildShoppingListParams>) -> Result<CallToolResult, McpError> {
        let system = self.display_system(p.system.as_deref())?;
        let menu = Menu {
            id: p.menu_id,
            servings: p.servings,
            slots: p
                .slots
                .into_iter()
                .map(|s| MenuSlot {
                    day: s.day,
                    meal: s.meal,
                    servings_override: s.servings_override,
                    recipe: s.recipe.into(),
                })
                .collect(),
        };
        let result = shopping::build_shopping_list(&menu, system)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }
}

#[tool_handler]
impl ServerHandler for MenuplanService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "menuplan".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Menu Planner".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Menu Planner - ingredient unit conversion and shopping lists. \
                 Call unit_instructions first if unsure. \
                 Units: list_units, render_quantity. \
                 Shopping: aggregate_quantities, build_shopping_list. \
                 Every tool takes an optional system (original, metric, imperial). \
                 Status: menuplan_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_system_falls_back_to_config() {
        let service = MenuplanService::new(Config {
            default_system: DisplaySystem::Imperial,
        });
        assert_eq!(service.display_system(None).unwrap(), DisplaySystem::Imperial);
        assert_eq!(service.display_system(Some("metric")).unwrap(), DisplaySystem::Metric);
        assert!(service.display_system(Some("nautical")).is_err());
    }

    #[test]
    fn test_shopping_params_deserialize_with_defaults() {
        let json = r#"{
            "menu_id": 5,
            "slots": [{
                "day": 2,
                "meal": "dinner",
                "recipe": {
                    "id": 1,
                    "name": "Stew",
                    "ingredients": [{"ingredient": {"id": 4, "name": "beef"}, "amount": 1.5, "unit": "lb"}]
                }
            }]
        }"#;
        let params: BuildShoppingListParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.servings, 4);
        assert!(params.system.is_none());

        let recipe: Recipe = params.slots.into_iter().next().unwrap().recipe.into();
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.ingredients[0].ingredient.category, "other");
        assert_eq!(recipe.ingredients[0].unit, "lb");
    }
}
