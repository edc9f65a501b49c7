//! Error types for the MBTA predictions client.

/// Errors that can occur while fetching or parsing predictions.
#[derive(Debug, thiserror::Error)]
pub enum MbtaError {
    /// Network or connection failure reaching the MBTA API.
    #[error("MBTA transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("MBTA upstream returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    /// The response body was not the expected JSON:API document.
    #[error("MBTA parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A prediction record carried no arrival time.
    #[error("MBTA prediction for trip {trip_id} has no arrival time")]
    MissingArrivalTime { trip_id: String },

    /// An arrival time could not be parsed as an RFC-3339 timestamp.
    #[error("MBTA arrival time for trip {trip_id} is malformed: {source}")]
    MalformedArrivalTime {
        trip_id: String,
        source: chrono::ParseError,
    },
}
