//! Common utilities shared across flight tools.
//!
//! This module provides shared functionality like result construction,
//! parameter validation, limit clamping, and timestamp formatting.

use chrono::DateTime;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use tracing::warn;

use crate::domains::tools::ToolError;

/// Default number of results for search queries.
pub const DEFAULT_LIMIT: i64 = 10;

/// Maximum number of results the upstream API returns per page.
pub const MAX_LIMIT: i64 = 100;

/// Fixed message returned by every tool when no API key is configured.
pub const MISSING_API_KEY_MESSAGE: &str =
    "AviationStack API key is not configured. Set the AVIATIONSTACK_API_KEY \
     environment variable to enable flight data tools.";

/// Default limit for search results.
pub fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Clamp a requested limit to the upstream maximum.
///
/// Only the upper bound is enforced; zero and negative values pass through
/// unchanged. This mirrors the upstream contract, which owns the lower bound.
pub fn clamp_limit(limit: i64) -> i64 {
    limit.min(MAX_LIMIT)
}

/// Require at least one of the flight identifiers to be present and non-empty.
pub fn require_flight_identifier(
    flight_iata: &Option<String>,
    flight_icao: &Option<String>,
) -> Result<(), ToolError> {
    let missing = |value: &Option<String>| value.as_deref().is_none_or(str::is_empty);

    if missing(flight_iata) && missing(flight_icao) {
        return Err(ToolError::invalid_arguments(
            "Either flight_iata or flight_icao must be provided",
        ));
    }
    Ok(())
}

/// Normalize an optional caller argument: empty strings count as absent.
pub fn present(value: &Option<String>) -> Option<String> {
    value.clone().filter(|s| !s.is_empty())
}

/// Render an ISO-8601 timestamp as "YYYY-MM-DD HH:MM" in its original offset.
///
/// Unparseable values are returned as received.
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Convert a tool error into a protocol-level error for the rmcp boundary.
pub fn to_mcp_error(err: ToolError) -> McpError {
    match err {
        ToolError::InvalidArguments(msg) => McpError::invalid_params(msg, None),
        other => McpError::internal_error(other.to_string(), None),
    }
}

/// Collect the text content of a tool result (test helper).
#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult) -> String {
    use rmcp::model::RawContent;

    result
        .content
        .iter()
        .filter_map(|c| match &c.raw {
            RawContent::Text(text) => Some(text.text.clone()),
            _ => None,
        })
        .collect()
}
