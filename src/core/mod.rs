//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! configuration, the main server handler, and the stdio transport.

pub mod config;
pub mod server;
pub mod transport;

pub use config::Config;
pub use server::McpServer;
