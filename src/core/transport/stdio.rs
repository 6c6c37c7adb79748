//! STDIO transport for the flight data server.
//!
//! MCP clients launch the server as a child process and speak the protocol
//! over stdin/stdout, which is why all logging goes to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// Serves the flight tools over stdin/stdout.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the server on the stdio transport, blocking until the client
    /// disconnects or the service fails.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!(
            "{} v{} ready - serving flight tools via stdin/stdout",
            server.name(),
            server.version()
        );

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::Startup(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::Terminated(e.to_string()))?;

        info!("Client disconnected - stdio transport closed");
        Ok(())
    }
}
