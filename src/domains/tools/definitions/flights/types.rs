//! Typed upstream response structures for the `/flights` endpoint.
//!
//! Only the fields the tools actually project are modeled; everything else in
//! the upstream payload (codeshare data, flight date, vertical speed, ...) is
//! ignored during deserialization and therefore can never leak into results.

use serde::Deserialize;

/// Top-level response envelope: a page of records plus pagination metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightsResponse {
    #[serde(default)]
    pub data: Vec<FlightRecord>,

    #[serde(default)]
    pub pagination: Pagination,
}

/// Pagination metadata. `total` may exceed the number of returned records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
}

/// A single flight record as returned by the upstream API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightRecord {
    pub flight_status: Option<String>,
    pub departure: Option<FlightEndpoint>,
    pub arrival: Option<FlightEndpoint>,
    pub airline: Option<AirlineInfo>,
    pub flight: Option<FlightIdent>,
    /// Opaque aircraft details, passed through without interpretation.
    pub aircraft: Option<serde_json::Value>,
    /// Live tracking data, present only for airborne flights.
    pub live: Option<LiveTracking>,
}

/// Departure or arrival details for a flight.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightEndpoint {
    pub airport: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
    pub terminal: Option<String>,
    pub gate: Option<String>,
    pub scheduled: Option<String>,
    pub estimated: Option<String>,
    pub actual: Option<String>,
    /// Delay in minutes.
    pub delay: Option<i64>,
}

/// Operating airline identification.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirlineInfo {
    pub name: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
}

/// Flight number and codes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightIdent {
    pub number: Option<String>,
    pub iata: Option<String>,
    pub icao: Option<String>,
}

/// Live position data, reported verbatim without unit conversion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveTracking {
    pub altitude: Option<f64>,
    pub speed_horizontal: Option<f64>,
    pub heading: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_upstream_fields_are_dropped() {
        let json = r#"{
            "data": [{
                "flight_date": "2024-03-01",
                "flight_status": "active",
                "flight": {"number": "100", "iata": "AA100", "icao": "AAL100", "codeshared": null},
                "airline": {"name": "American Airlines", "iata": "AA", "icao": "AAL"},
                "departure": {"airport": "JFK Intl", "iata": "JFK", "delay": 15, "baggage": "4"},
                "arrival": {"airport": "Heathrow", "iata": "LHR"},
                "aircraft": {"registration": "N160AN"},
                "live": {"latitude": 51.1, "longitude": -1.2, "altitude": 11000.0,
                         "speed_horizontal": 850.5, "heading": 270.0, "is_ground": false}
            }],
            "pagination": {"limit": 100, "offset": 0, "count": 1, "total": 1}
        }"#;

        let response: FlightsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.pagination.total, 1);

        let record = &response.data[0];
        assert_eq!(record.flight_status.as_deref(), Some("active"));
        assert_eq!(record.departure.as_ref().unwrap().delay, Some(15));
        assert_eq!(record.live.as_ref().unwrap().heading, Some(270.0));
    }

    #[test]
    fn test_empty_response_defaults() {
        let response: FlightsResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(response.data.is_empty());
        assert_eq!(response.pagination.total, 0);
    }

    #[test]
    fn test_sparse_record_deserializes() {
        let response: FlightsResponse =
            serde_json::from_str(r#"{"data": [{"flight_status": "scheduled"}]}"#).unwrap();
        let record = &response.data[0];
        assert!(record.departure.is_none());
        assert!(record.live.is_none());
        assert!(record.aircraft.is_none());
    }
}
