//! Flight data tools module.
//!
//! This module provides the tools backed by the AviationStack `/flights`
//! endpoint:
//! - `get_flight_data`: full detail record for one flight
//! - `search_flights`: filtered search with compact per-flight summaries
//! - `get_flight_status`: human-readable status report for one flight
//!
//! Shared infrastructure lives alongside the tools: the upstream client and
//! its trait seam (`api`), typed response structures (`types`), and result
//! helpers (`common`).

pub mod api;
pub mod common;
pub mod get_flight_data;
pub mod get_flight_status;
pub mod search_flights;
pub mod types;

pub use api::{AviationStackClient, FlightApi, FlightApiError, FlightQuery};
pub use get_flight_data::{GetFlightDataParams, GetFlightDataTool};
pub use get_flight_status::{GetFlightStatusParams, GetFlightStatusTool};
pub use search_flights::{SearchFlightsParams, SearchFlightsTool};
