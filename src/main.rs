//! Menu Planner
//!
//! An MCP server for ingredient unit conversion and shopping-list aggregation.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use menuplan::build_info;
use menuplan::config::Config;
use menuplan::mcp::MenuplanService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the MCP stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("menuplan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    build_info::print_startup_banner(config.default_system);
    tracing::info!(default_system = %config.default_system, "Loaded configuration");

    eprintln!("Starting MCP server on stdio...");
    let service = MenuplanService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
