//! Tekton MCP Server
//!
//! Exposes the Tekton design system to AI coding agents via MCP protocol.
//!
//! ## Tools
//!
//! - `validate-screen-definition` - Validate a screen definition JSON document
//! - `get-screen-generation-context` - Full context for generating a screen
//! - `list-components` - Browse the UI component catalog
//! - `list-screen-templates` - Browse the screen template registry
//! - `list-themes` - List available themes
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "tekton": {
//!       "command": "tekton-mcp"
//!     }
//!   }
//! }
//! ```
//!
//! Set `TEKTON_THEME_DIR` to load themes from a directory of `<id>.json`
//! files in addition to the built-ins.

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use tekton_catalog::ThemeStore;

mod tools;

use tools::TektonService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting Tekton MCP server");

    let store = match std::env::var_os("TEKTON_THEME_DIR") {
        Some(dir) => ThemeStore::with_dir(dir),
        None => ThemeStore::new(),
    };

    let service = TektonService::with_theme_store(store);
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Tekton MCP server stopped");
    Ok(())
}
