//! Flight lookup tool.
//!
//! Returns the full detail record for a single flight, identified by its IATA
//! or ICAO code, as indented JSON.

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
    MISSING_API_KEY_MESSAGE, error_result, present, require_flight_identifier, success_result,
    to_mcp_error,
};
use super::types::FlightRecord;

/// Parameters for the flight lookup tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFlightDataParams {
    /// Flight IATA code.
    #[schemars(description = "Flight IATA code (e.g., 'AA100'). Provide this or flight_icao.")]
    #[serde(default)]
    pub flight_iata: Option<String>,

    /// Flight ICAO code.
    #[schemars(description = "Flight ICAO code (e.g., 'AAL100'). Provide this or flight_iata.")]
    #[serde(default)]
    pub flight_icao: Option<String>,
}

// ============================================================================
// Projection
// ============================================================================

/// Projected detail record: the exact field set returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct FlightDataResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight: Option<FlightCodes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<AirlineDetail>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<EndpointDetail>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival: Option<EndpointDetail>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<LiveDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlightCodes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icao: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AirlineDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icao: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LiveDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_horizontal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl FlightDataResult {
    /// Project an upstream record onto the documented field set.
    pub fn from_record(record: &FlightRecord) -> Self {
        Self {
            flight: record.flight.as_ref().map(|f| FlightCodes {
                number: f.number.clone(),
                iata: f.iata.clone(),
                icao: f.icao.clone(),
            }),
            airline: record.airline.as_ref().map(|a| AirlineDetail {
                name: a.name.clone(),
                iata: a.iata.clone(),
                icao: a.icao.clone(),
            }),
            departure: record.departure.as_ref().map(EndpointDetail::from_endpoint),
            arrival: record.arrival.as_ref().map(EndpointDetail::from_endpoint),
            flight_status: record.flight_status.clone(),
            aircraft: record.aircraft.clone(),
            live: record.live.as_ref().map(|l| LiveDetail {
                altitude: l.altitude,
                speed_horizontal: l.speed_horizontal,
                heading: l.heading,
                latitude: l.latitude,
                longitude: l.longitude,
            }),
        }
    }
}

impl EndpointDetail {
    fn from_endpoint(ep: &super::types::FlightEndpoint) -> Self {
        Self {
            airport: ep.airport.clone(),
            iata: ep.iata.clone(),
            icao: ep.icao.clone(),
            terminal: ep.terminal.clone(),
            gate: ep.gate.clone(),
            scheduled: ep.scheduled.clone(),
            estimated: ep.estimated.clone(),
            actual: ep.actual.clone(),
            delay: ep.delay,
        }
    }
}

// ============================================================================
// Tool Implementation
// ============================================================================

/// Flight lookup tool implementation.
#[derive(Debug, Clone)]
pub struct GetFlightDataTool;

impl GetFlightDataTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_flight_data";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get complete real-time data for a specific flight by its IATA or ICAO code. Returns flight identification, airline, departure and arrival details (airport, terminal, gate, schedule, delays), current status, aircraft, and live position when airborne.";

    /// Execute the tool logic.
    pub async fn execute(
        params: &GetFlightDataParams,
        client: &dyn FlightApi,
    ) -> Result<CallToolResult, ToolError> {
        if !client.is_configured() {
            return Ok(error_result(MISSING_API_KEY_MESSAGE));
        }

        require_flight_identifier(&params.flight_iata, &params.flight_icao)?;

        info!(
            "Looking up flight data (iata: {:?}, icao: {:?})",
            params.flight_iata, params.flight_icao
        );

        let query = FlightQuery {
            flight_iata: present(&params.flight_iata),
            flight_icao: present(&params.flight_icao),
            ..Default::default()
        };

        match client.flights(&query).await {
            Ok(response) => match response.data.first() {
                None => Ok(success_result(
                    "No flight data found for the specified flight.".to_string(),
                )),
                Some(record) => {
                    let projected = FlightDataResult::from_record(record);
                    let text = serde_json::to_string_pretty(&projected)
                        .map_err(|e| ToolError::internal(e.to_string()))?;
                    Ok(success_result(text))
                }
            },
            Err(e) => Ok(error_result(&e.to_string())),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetFlightDataParams>(),
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
                let params: GetFlightDataParams =
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::flights::api::FlightApiError;
    use crate::domains::tools::definitions::flights::api::mock::MockFlightApi;
    use crate::domains::tools::definitions::flights::common::result_text;
    use crate::domains::tools::definitions::flights::types::FlightsResponse;

    fn single_record_response() -> FlightsResponse {
        serde_json::from_str(
            r#"{
                "data": [{
                    "flight_status": "active",
                    "flight": {"number": "100", "iata": "AA100", "icao": "AAL100",
                               "codeshared": {"airline_name": "partner"}},
                    "airline": {"name": "American Airlines", "iata": "AA", "icao": "AAL"},
                    "departure": {"airport": "John F Kennedy Intl", "iata": "JFK",
                                  "terminal": "8", "gate": "14",
                                  "scheduled": "2024-03-01T18:00:00+00:00", "delay": 10},
                    "arrival": {"airport": "Heathrow", "iata": "LHR",
                                "scheduled": "2024-03-02T06:10:00+00:00"},
                    "aircraft": {"registration": "N160AN"}
                }],
                "pagination": {"total": 1}
            }"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_missing_identifiers_is_invalid_params_without_network() {
        let client = MockFlightApi::new(Ok(FlightsResponse::default()));
        let params = GetFlightDataParams {
            flight_iata: None,
            flight_icao: None,
        };

        let result = GetFlightDataTool::execute(&params, &client).await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_is_soft_error_without_network() {
        let client = MockFlightApi::unconfigured();
        let params = GetFlightDataParams {
            flight_iata: Some("AA100".to_string()),
            flight_icao: None,
        };

        let result = GetFlightDataTool::execute(&params, &client).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), MISSING_API_KEY_MESSAGE);
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_data_returns_fixed_message() {
        let client = MockFlightApi::new(Ok(FlightsResponse::default()));
        let params = GetFlightDataParams {
            flight_iata: Some("AA100".to_string()),
            flight_icao: None,
        };

        let result = GetFlightDataTool::execute(&params, &client).await.unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result_text(&result),
            "No flight data found for the specified flight."
        );
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_projection_keeps_only_documented_fields() {
        let client = MockFlightApi::new(Ok(single_record_response()));
        let params = GetFlightDataParams {
            flight_iata: Some("AA100".to_string()),
            flight_icao: None,
        };

        let result = GetFlightDataTool::execute(&params, &client).await.unwrap();
        assert_eq!(result.is_error, Some(false));

        let payload: serde_json::Value = serde_json::from_str(&result_text(&result)).unwrap();
        let mut keys: Vec<_> = payload.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "aircraft",
                "airline",
                "arrival",
                "departure",
                "flight",
                "flight_status"
            ]
        );

        // codeshared never survives the typed projection
        assert!(payload["flight"].get("codeshared").is_none());
        assert_eq!(payload["departure"]["delay"], 10);
        // no live block upstream, none in the output
        assert!(payload.get("live").is_none());
    }

    #[tokio::test]
    async fn test_upstream_api_error_text() {
        let client =
            MockFlightApi::new(Err(FlightApiError::Api("Invalid API key".to_string())));
        let params = GetFlightDataParams {
            flight_iata: Some("AA100".to_string()),
            flight_icao: None,
        };

        let result = GetFlightDataTool::execute(&params, &client).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), "API Error: Invalid API key");
    }

    #[tokio::test]
    async fn test_query_forwards_only_identifiers() {
        let client = MockFlightApi::new(Ok(single_record_response()));
        let params = GetFlightDataParams {
            flight_iata: Some("AA100".to_string()),
            flight_icao: None,
        };

        GetFlightDataTool::execute(&params, &client).await.unwrap();
        let query = client.last_query().unwrap();
        assert_eq!(query.flight_iata.as_deref(), Some("AA100"));
        assert!(query.flight_icao.is_none());
        assert!(query.limit.is_none());
    }

    #[test]
    fn test_params_accept_either_identifier() {
        let params: GetFlightDataParams =
            serde_json::from_str(r#"{"flight_icao": "AAL100"}"#).unwrap();
        assert!(params.flight_iata.is_none());
        assert_eq!(params.flight_icao.as_deref(), Some("AAL100"));
    }
}
