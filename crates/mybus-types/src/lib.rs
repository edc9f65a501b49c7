//! Shared types for the My Bus skill backend.
//!
//! This crate provides the foundational types used across all My Bus crates:
//! the arrival-prediction data model produced by the MBTA fetcher and the
//! speech/envelope types exchanged with the voice platform.
//!
//! No crate in the workspace depends on anything *except* `mybus-types` for
//! cross-cutting type definitions. This keeps the dependency graph clean and
//! prevents circular dependencies.

pub mod envelope;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single upstream arrival estimate for the configured stop.
///
/// Derived entirely from one record of the MBTA predictions response and
/// never mutated afterwards; its lifetime is one request cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalPrediction {
    /// Trip identifier from `relationships.trip.data.id`.
    pub trip_id: String,
    /// Route identifier from `relationships.route.data.id`.
    pub route_id: String,
    /// Predicted arrival time at the stop.
    pub arrival_time: DateTime<Utc>,
    /// Whole seconds from "now" until the predicted arrival.
    ///
    /// Negative when the bus is already due or has passed; overdue
    /// predictions still participate in speech rendering.
    pub seconds_until_arrival: i64,
}

/// Arrival predictions ordered soonest-first.
///
/// Invariant: if non-empty, index 0 has the smallest
/// `seconds_until_arrival` (possibly negative).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictionSet(Vec<ArrivalPrediction>);

impl PredictionSet {
    /// Builds a set from predictions in any order.
    ///
    /// The sort is stable: predictions with equal `seconds_until_arrival`
    /// keep their input order.
    pub fn from_unsorted(mut predictions: Vec<ArrivalPrediction>) -> Self {
        predictions.sort_by_key(|p| p.seconds_until_arrival);
        Self(predictions)
    }

    pub fn as_slice(&self) -> &[ArrivalPrediction] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What a handler wants the platform to say, before envelope wrapping.
///
/// Produced once per request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechResponse {
    /// The sentence to speak. Empty means no `outputSpeech` element at all
    /// (session-ended acknowledgements).
    pub spoken_text: String,
    /// Re-prompt spoken if the user stays silent. `None` omits the element.
    pub reprompt_text: Option<String>,
    /// Title for the companion-app card. `None` omits the card.
    pub card_title: Option<String>,
    /// Whether the platform should close the session after speaking.
    pub end_session: bool,
}
