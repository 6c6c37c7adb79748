//! Flight search tool.
//!
//! Searches flights by airline, route, or status and returns a compact
//! summary list plus the upstream total.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::domains::tools::ToolError;

use super::api::{FlightApi, FlightQuery};
use super::common::{
    MISSING_API_KEY_MESSAGE, clamp_limit, default_limit, error_result, present, success_result,
    to_mcp_error,
};
use super::types::FlightRecord;

/// Parameters for the flight search tool. All filters are optional.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchFlightsParams {
    /// Airline IATA code filter.
    #[schemars(description = "Airline IATA code (e.g., 'AA')")]
    #[serde(default)]
    pub airline_iata: Option<String>,

    /// Airline ICAO code filter.
    #[schemars(description = "Airline ICAO code (e.g., 'AAL')")]
    #[serde(default)]
    pub airline_icao: Option<String>,

    /// Departure airport filter.
    #[schemars(description = "Departure airport IATA code (e.g., 'JFK')")]
    #[serde(default)]
    pub dep_iata: Option<String>,

    /// Arrival airport filter.
    #[schemars(description = "Arrival airport IATA code (e.g., 'LHR')")]
    #[serde(default)]
    pub arr_iata: Option<String>,

    /// Flight status filter.
    #[schemars(
        description = "Flight status: scheduled, active, landed, cancelled, incident, or diverted"
    )]
    #[serde(default)]
    pub flight_status: Option<String>,

    /// Maximum number of results to return (default: 10, max: 100).
    #[schemars(description = "Maximum number of results (default: 10, max: 100)")]
    #[serde(default = "default_limit")]
    pub limit: i64,
}

// ============================================================================
// Projection
// ============================================================================

/// Search output: upstream total plus one summary per returned flight.
#[derive(Debug, Clone, Serialize)]
pub struct FlightSearchResult {
    pub total_results: u64,
    pub flights: Vec<FlightSummary>,
}

/// Compact per-flight summary.
#[derive(Debug, Clone, Serialize)]
pub struct FlightSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_iata: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<RoutePoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival: Option<RoutePoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoutePoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airport: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iata: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<String>,
}

impl FlightSummary {
    /// Project an upstream record onto the summary field set.
    pub fn from_record(record: &FlightRecord) -> Self {
        let route_point = |ep: &super::types::FlightEndpoint| RoutePoint {
            airport: ep.airport.clone(),
            iata: ep.iata.clone(),
            scheduled: ep.scheduled.clone(),
        };

        Self {
            flight_number: record.flight.as_ref().and_then(|f| f.number.clone()),
            flight_iata: record.flight.as_ref().and_then(|f| f.iata.clone()),
            airline: record.airline.as_ref().and_then(|a| a.name.clone()),
            departure: record.departure.as_ref().map(route_point),
            arrival: record.arrival.as_ref().map(route_point),
            status: record.flight_status.clone(),
        }
    }
}

// ============================================================================
// Tool Implementation
// ============================================================================

/// Flight search tool implementation.
#[derive(Debug, Clone)]
pub struct SearchFlightsTool;

impl SearchFlightsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_flights";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search real-time flights filtered by airline, departure airport, arrival airport, or flight status. All filters are optional. Returns the total number of matches and a compact summary (flight number, airline, route, schedule, status) for each returned flight.";

    /// Execute the tool logic.
    pub async fn execute(
        params: &SearchFlightsParams,
        client: &dyn FlightApi,
    ) -> Result<CallToolResult, ToolError> {
        if !client.is_configured() {
            return Ok(error_result(MISSING_API_KEY_MESSAGE));
        }

        info!(
            "Searching flights (airline: {:?}/{:?}, route: {:?} -> {:?}, status: {:?}, limit: {})",
            params.airline_iata,
            params.airline_icao,
            params.dep_iata,
            params.arr_iata,
            params.flight_status,
            params.limit
        );

        let query = FlightQuery {
            airline_iata: present(&params.airline_iata),
            airline_icao: present(&params.airline_icao),
            dep_iata: present(&params.dep_iata),
            arr_iata: present(&params.arr_iata),
            flight_status: present(&params.flight_status),
            limit: Some(clamp_limit(params.limit)),
            ..Default::default()
        };

        match client.flights(&query).await {
            Ok(response) => {
                if response.data.is_empty() {
                    return Ok(success_result(
                        "No flights found matching the search criteria.".to_string(),
                    ));
                }

                let projected = FlightSearchResult {
                    total_results: response.pagination.total,
                    flights: response.data.iter().map(FlightSummary::from_record).collect(),
                };
                let text = serde_json::to_string_pretty(&projected)
                    .map_err(|e| ToolError::internal(e.to_string()))?;
                Ok(success_result(text))
            }
            Err(e) => Ok(error_result(&e.to_string())),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchFlightsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(client: Arc<dyn FlightApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let client = client.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: SearchFlightsParams =
                    serde_json::from_value(serde_json::Value::Object(args)).map_err(|e| {
                        rmcp::ErrorData::invalid_params(e.to_string(), None)
                    })?;

                Self::execute(&params, client.as_ref())
                    .await
                    .map_err(to_mcp_error)
            }
            .boxed()
        })
    }
}
