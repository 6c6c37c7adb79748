//! AviationStack API client.
//!
//! This module provides the upstream client used by all flight tools. The
//! client is constructed once at server startup and shared read-only across
//! calls; each tool invocation issues at most one GET request against the
//! `/flights` endpoint, with no retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use super::types::FlightsResponse;

/// Errors returned by the upstream flight API.
#[derive(Debug, Clone, Error)]
pub enum FlightApiError {
    /// The upstream service returned a structured error body.
    #[error("API Error: {0}")]
    Api(String),

    /// Network-level or decoding failure with no structured upstream message.
    #[error("{0}")]
    Transport(String),
}

/// Query parameters for the `/flights` endpoint.
///
/// Only fields that were explicitly supplied by the caller are serialized;
/// arbitrary extra arguments are never forwarded upstream.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FlightQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_iata: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_icao: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_iata: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_icao: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dep_iata: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arr_iata: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// Structured error body returned by the upstream on failed requests.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Upstream flight data source.
///
/// Tools depend on this trait rather than the concrete client so that tests
/// can substitute a counting mock.
#[async_trait]
pub trait FlightApi: Send + Sync {
    /// Whether an access credential is configured.
    fn is_configured(&self) -> bool;

    /// Fetch flights matching the given query. Exactly one upstream request.
    async fn flights(&self, query: &FlightQuery) -> Result<FlightsResponse, FlightApiError>;
}

/// Production client for the AviationStack REST API.
pub struct AviationStackClient {
    http: reqwest::Client,
    base_url: String,
    access_key: Option<String>,
}

impl AviationStackClient {
    /// Create a new client for the given base URL and optional access key.
    pub fn new(base_url: String, access_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            access_key,
        }
    }
}

#[async_trait]
impl FlightApi for AviationStackClient {
    fn is_configured(&self) -> bool {
        self.access_key.is_some()
    }

    async fn flights(&self, query: &FlightQuery) -> Result<FlightsResponse, FlightApiError> {
        let url = format!("{}/flights", self.base_url);
        let access_key = self.access_key.as_deref().unwrap_or_default();

        debug!("GET {} with query {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(&[("access_key", access_key)])
            .query(query)
            .send()
            .await
            .map_err(|e| FlightApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(&body) {
                if let Some(message) = parsed.error.and_then(|e| e.message) {
                    error!("Upstream API error: {}", message);
                    return Err(FlightApiError::Api(message));
                }
            }
            error!("Upstream request failed with status {}", status);
            return Err(FlightApiError::Transport(format!(
                "Request failed with status {}",
                status
            )));
        }

        response
            .json::<FlightsResponse>()
            .await
            .map_err(|e| FlightApiError::Transport(e.to_string()))
    }
}

/// Counting mock used by the tool tests.
#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub struct MockFlightApi {
        configured: bool,
        response: Result<FlightsResponse, FlightApiError>,
        calls: AtomicUsize,
        last_query: Mutex<Option<FlightQuery>>,
    }

    impl MockFlightApi {
        pub fn new(response: Result<FlightsResponse, FlightApiError>) -> Self {
            Self {
                configured: true,
                response,
                calls: AtomicUsize::new(0),
                last_query: Mutex::new(None),
            }
        }

        pub fn unconfigured() -> Self {
            Self {
                configured: false,
                response: Ok(FlightsResponse::default()),
                calls: AtomicUsize::new(0),
                last_query: Mutex::new(None),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_query(&self) -> Option<FlightQuery> {
            self.last_query.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FlightApi for MockFlightApi {
        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn flights(&self, query: &FlightQuery) -> Result<FlightsResponse, FlightApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_query.lock().unwrap() = Some(query.clone());
            self.response.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_prefix() {
        let err = FlightApiError::Api("Invalid API key".to_string());
        assert_eq!(err.to_string(), "API Error: Invalid API key");
    }

    #[test]
    fn test_transport_error_display_is_raw() {
        let err = FlightApiError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_query_skips_absent_fields() {
        let query = FlightQuery {
            dep_iata: Some("JFK".to_string()),
            limit: Some(10),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&query).unwrap();
        let keys: Vec<_> = encoded.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["dep_iata", "limit"]);
    }

    #[test]
    fn test_client_configured_iff_key_present() {
        let with_key =
            AviationStackClient::new("http://localhost".to_string(), Some("k".to_string()));
        assert!(with_key.is_configured());

        let without_key = AviationStackClient::new("http://localhost".to_string(), None);
        assert!(!without_key.is_configured());
    }
}
