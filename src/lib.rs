//! Flight Data MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! real-time flight data tools backed by the AviationStack API.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, the main server
//!   handler, and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools for flight lookup, search, and status
//!
//! # Example
//!
//! ```rust,no_run
//! use flight_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, McpServer};
