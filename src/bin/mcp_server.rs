//! Pokedex Engine MCP Server
//!
//! A Model Context Protocol server using the official Rust SDK (rmcp)
//! that exposes creature lookups and evolution chains for LLM interaction.

use std::sync::Arc;

use pokedex_engine::mcp_interface::*;
use pokedex_engine::{Aggregator, EngineConfig, PaginationCursor};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone)]
pub struct PokedexService {
    tool_router: ToolRouter<PokedexService>,
    aggregator: Aggregator,
    /// Position of the "load more" listing, shared across tool calls
    cursor: Arc<Mutex<PaginationCursor>>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    #[schemars(description = "Comma-separated Pokémon numbers or names, e.g. '1, 4, pikachu'")]
    pub query: String,
    #[schemars(description = "Optional comma-separated game versions to show numbers for, e.g. 'red, gold'")]
    #[serde(default)]
    pub versions: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LoadMoreRequest {
    #[schemars(description = "Optional comma-separated game versions to show numbers for")]
    #[serde(default)]
    pub versions: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupPokemonRequest {
    #[schemars(description = "Name or number of the Pokémon to look up")]
    pub pokemon: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EvolutionRequest {
    #[schemars(description = "Name or number of the species whose evolution chain to show")]
    pub species: String,
}

#[tool_router]
impl PokedexService {
    pub fn new(aggregator: Aggregator, cursor: PaginationCursor) -> Self {
        Self {
            tool_router: Self::tool_router(),
            aggregator,
            cursor: Arc::new(Mutex::new(cursor)),
        }
    }

    #[tool(description = "Look up a list of Pokémon by number or name")]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = handle_search_command(&self.aggregator, &request.query, &request.versions).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "List the next window of Pokémon in number order")]
    async fn load_more(
        &self,
        Parameters(request): Parameters<LoadMoreRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut cursor = self.cursor.lock().await;
        let text = handle_load_more_command(&self.aggregator, &mut cursor, &request.versions).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Restart the 'load_more' listing from the first Pokémon")]
    async fn reset_pagination(&self) -> Result<CallToolResult, McpError> {
        let mut cursor = self.cursor.lock().await;
        cursor.reset();
        let text = format!("Listing will restart at #{}.", cursor.next_identifier());
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Look up detailed information about a Pokémon, including its evolution chain")]
    async fn lookup_pokemon(
        &self,
        Parameters(request): Parameters<LookupPokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = handle_lookup_pokemon_command(&self.aggregator, &request.pokemon).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Show the evolution chain of a Pokémon species")]
    async fn evolution_chain(
        &self,
        Parameters(request): Parameters<EvolutionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = handle_evolution_command(&self.aggregator, &request.species).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for PokedexService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the protocol, so logs must go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::from_env()?;
    info!(base_url = %config.base_url, language = %config.language, "Pokedex MCP server starting");

    let aggregator = Aggregator::with_http(config)?;
    let cursor = aggregator.cursor()?;
    let service = PokedexService::new(aggregator, cursor);
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    info!("Server running, waiting for shutdown");

    let quit_reason = server.waiting().await?;
    info!(reason = ?quit_reason, "Pokedex MCP server exiting");
    Ok(())
}
