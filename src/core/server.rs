//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. The handler exposes exactly two inbound operations to the
//! transport layer: listing the available tools and calling one of them.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (core logic)
//! - `create_route()` method (registration in the ToolRouter)
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::build_tool_router;
use crate::domains::tools::definitions::flights::{AviationStackClient, FlightApi};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes tool
/// calls to the flight data tool definitions. The upstream client is built
/// once at construction and shared read-only across sequential calls.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let client: Arc<dyn FlightApi> = Arc::new(AviationStackClient::new(
            config.upstream.base_url.clone(),
            config.credentials.aviationstack_api_key.clone(),
        ));

        Self {
            tool_router: build_tool_router::<Self>(client),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Flight data MCP server. Look up a specific flight, search flights by \
                 airline or route, or get a readable status report for a flight."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
