//! Error types for skill dispatch.

use mybus_mbta::MbtaError;

/// Errors that can occur while routing and handling a request.
///
/// None of these reach the voice platform as an error: the skill's outer
/// handler converts them into the fixed apology response after logging.
#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    /// Fetching or parsing upstream predictions failed.
    #[error("prediction fetch failed: {0}")]
    Fetch(#[from] MbtaError),

    /// No handler matches the inbound request type.
    #[error("unrecognized request type: {0}")]
    UnrecognizedRequest(String),

    /// No handler matches the intent name.
    #[error("unrecognized intent: {0}")]
    UnrecognizedIntent(String),
}
