//! Menu Planner Tools module
//!
//! Tool implementations shared by the MCP server and other callers.

pub mod quantities;
pub mod shopping;
pub mod status;
