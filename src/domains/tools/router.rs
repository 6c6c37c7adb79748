//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only wires them
//! together with the shared upstream client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::flights::FlightApi;
use super::definitions::{GetFlightDataTool, GetFlightStatusTool, SearchFlightsTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<dyn FlightApi>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetFlightDataTool::create_route(client.clone()))
        .with_route(SearchFlightsTool::create_route(client.clone()))
        .with_route(GetFlightStatusTool::create_route(client))
}
