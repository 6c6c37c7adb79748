//! Flight status tool.
//!
//! Produces a human-readable status report for a single flight: current
//! status, departure and arrival details, and live position when available.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::domains::tools::ToolError;

use super::api::{FlightApi, FlightQuery};
use super::common::{
    MISSING_API_KEY_MESSAGE, error_result, format_timestamp, present, require_flight_identifier,
    success_result, to_mcp_error,
};
use super::types::{FlightEndpoint, FlightRecord};

/// Parameters for the flight status tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFlightStatusParams {
    /// Flight IATA code.
    #[schemars(description = "Flight IATA code (e.g., 'AA100'). Provide this or flight_icao.")]
    #[serde(default)]
    pub flight_iata: Option<String>,

    /// Flight ICAO code.
    #[schemars(description = "Flight ICAO code (e.g., 'AAL100'). Provide this or flight_iata.")]
    #[serde(default)]
    pub flight_icao: Option<String>,
}

/// Flight status tool implementation.
#[derive(Debug, Clone)]
pub struct GetFlightStatusTool;

impl GetFlightStatusTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_flight_status";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a readable status report for a specific flight by its IATA or ICAO code. Includes current status, departure and arrival times (scheduled, estimated, actual), terminals, gates, delays, and live tracking data when the flight is airborne.";

    /// Execute the tool logic.
    pub async fn execute(
        params: &GetFlightStatusParams,
        client: &dyn FlightApi,
    ) -> Result<CallToolResult, ToolError> {
        if !client.is_configured() {
            return Ok(error_result(MISSING_API_KEY_MESSAGE));
        }

        require_flight_identifier(&params.flight_iata, &params.flight_icao)?;

        info!(
            "Looking up flight status (iata: {:?}, icao: {:?})",
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
                    "No flight status found for the specified flight.".to_string(),
                )),
                Some(record) => Ok(success_result(Self::format_report(record))),
            },
            Err(e) => Ok(error_result(&e.to_string())),
        }
    }

    /// Build the prose status report from an upstream record.
    pub fn format_report(record: &FlightRecord) -> String {
        let iata = record
            .flight
            .as_ref()
            .and_then(|f| f.iata.as_deref())
            .unwrap_or("unknown");
        let airline = record
            .airline
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .unwrap_or("unknown airline");
        let status = record.flight_status.as_deref().unwrap_or("unknown");

        let mut report = format!("Flight {} ({}) is currently {}.\n", iata, airline, status);

        report.push_str("\nDeparture:\n");
        Self::append_endpoint(&mut report, record.departure.as_ref());

        report.push_str("\nArrival:\n");
        Self::append_endpoint(&mut report, record.arrival.as_ref());

        if let Some(live) = &record.live {
            report.push_str("\nLive Tracking:\n");
            if let Some(altitude) = live.altitude {
                report.push_str(&format!("  Altitude: {}\n", altitude));
            }
            if let Some(speed) = live.speed_horizontal {
                report.push_str(&format!("  Speed: {}\n", speed));
            }
            if let Some(heading) = live.heading {
                report.push_str(&format!("  Heading: {}\n", heading));
            }
            if let Some(latitude) = live.latitude {
                report.push_str(&format!("  Latitude: {}\n", latitude));
            }
            if let Some(longitude) = live.longitude {
                report.push_str(&format!("  Longitude: {}\n", longitude));
            }
        }

        report
    }

    fn append_endpoint(report: &mut String, endpoint: Option<&FlightEndpoint>) {
        let Some(ep) = endpoint else {
            return;
        };

        match (&ep.airport, &ep.iata) {
            (Some(airport), Some(iata)) => {
                report.push_str(&format!("  Airport: {} ({})\n", airport, iata));
            }
            (Some(airport), None) => report.push_str(&format!("  Airport: {}\n", airport)),
            (None, Some(iata)) => report.push_str(&format!("  Airport: {}\n", iata)),
            (None, None) => {}
        }
        if let Some(terminal) = &ep.terminal {
            report.push_str(&format!("  Terminal: {}\n", terminal));
        }
        if let Some(gate) = &ep.gate {
            report.push_str(&format!("  Gate: {}\n", gate));
        }
        if let Some(scheduled) = &ep.scheduled {
            report.push_str(&format!("  Scheduled: {}\n", format_timestamp(scheduled)));
        }
        if let Some(estimated) = &ep.estimated {
            report.push_str(&format!("  Estimated: {}\n", format_timestamp(estimated)));
        }
        if let Some(actual) = &ep.actual {
            report.push_str(&format!("  Actual: {}\n", format_timestamp(actual)));
        }
        if let Some(delay) = ep.delay {
            report.push_str(&format!("  Delay: {} minutes\n", delay));
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetFlightStatusParams>(),
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
                let params: GetFlightStatusParams =
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
