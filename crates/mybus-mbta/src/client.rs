//! HTTP client for the MBTA `/predictions` resource.

use crate::document::{predictions_from_document, PredictionsDocument};
use crate::error::MbtaError;
use chrono::Utc;
use mybus_types::PredictionSet;
use tracing::debug;

/// Stop served by the skill.
pub const STOP_ID: &str = "12649";

/// Route served by the skill (the 87 bus).
pub const ROUTE_ID: &str = "87";

/// Production MBTA v3 API endpoint.
pub const MBTA_BASE_URL: &str = "https://api-v3.mbta.com";

/// Client for the MBTA predictions resource, fixed to one stop+route pair.
///
/// Holds no mutable state; cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PredictionsClient {
    http: reqwest::Client,
    base_url: String,
}

impl PredictionsClient {
    /// Client against the production MBTA endpoint.
    pub fn new() -> Self {
        Self::with_base_url(MBTA_BASE_URL)
    }

    /// Points the client at a different host. Tests use this to stub the API.
    ///
    /// No request timeout is configured: the platform's invocation deadline
    /// is the only bound on an in-flight fetch.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches the upcoming arrivals for the configured stop and route,
    /// sorted soonest-first.
    ///
    /// Performs exactly one GET; any failure is returned to the caller
    /// without retry.
    pub async fn next_arrivals(&self) -> Result<PredictionSet, MbtaError> {
        let url = format!("{}/predictions", self.base_url);
        debug!(%url, stop = STOP_ID, route = ROUTE_ID, "fetching predictions");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("filter[stop]", STOP_ID),
                ("filter[route]", ROUTE_ID),
                ("sort", "arrival_time"),
                ("include", "vehicle"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MbtaError::UpstreamStatus(status));
        }

        // Accumulate the full body before parsing; predictions are never
        // consumed as a stream.
        let body = response.bytes().await?;
        let document: PredictionsDocument = serde_json::from_slice(&body)?;

        let predictions = predictions_from_document(&document, Utc::now())?;
        debug!(count = predictions.len(), "parsed predictions");
        Ok(PredictionSet::from_unsorted(predictions))
    }
}

impl Default for PredictionsClient {
    fn default() -> Self {
        Self::new()
    }
}
