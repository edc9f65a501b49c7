//! Wire types for the MBTA JSON:API predictions document.
//!
//! Only the fields the skill reads are modeled; the rest of the document
//! (vehicle includes, links, pagination) is ignored by serde.

use crate::error::MbtaError;
use chrono::{DateTime, Utc};
use mybus_types::ArrivalPrediction;
use serde::Deserialize;

/// Top-level `/predictions` response document.
#[derive(Debug, Deserialize)]
pub struct PredictionsDocument {
    #[serde(default)]
    pub data: Vec<PredictionResource>,
}

/// One element of the `data` array.
#[derive(Debug, Deserialize)]
pub struct PredictionResource {
    pub attributes: PredictionAttributes,
    pub relationships: PredictionRelationships,
}

#[derive(Debug, Deserialize)]
pub struct PredictionAttributes {
    /// RFC-3339 arrival timestamp. The API sends `null` for predictions
    /// that only carry a departure time.
    #[serde(default)]
    pub arrival_time: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PredictionRelationships {
    pub trip: Relationship,
    pub route: Relationship,
}

#[derive(Debug, Deserialize)]
pub struct Relationship {
    pub data: ResourceIdentifier,
}

#[derive(Debug, Deserialize)]
pub struct ResourceIdentifier {
    pub id: String,
}

/// Maps a parsed predictions document into arrival predictions, deriving
/// seconds-until-arrival against `now`.
///
/// Fails on the first record whose arrival time is missing or not a valid
/// timestamp; a document the API half-populated is treated as malformed
/// rather than silently thinned out.
pub fn predictions_from_document(
    document: &PredictionsDocument,
    now: DateTime<Utc>,
) -> Result<Vec<ArrivalPrediction>, MbtaError> {
    document
        .data
        .iter()
        .map(|resource| prediction_from_resource(resource, now))
        .collect()
}

fn prediction_from_resource(
    resource: &PredictionResource,
    now: DateTime<Utc>,
) -> Result<ArrivalPrediction, MbtaError> {
    let trip_id = resource.relationships.trip.data.id.clone();

    let raw = resource
        .attributes
        .arrival_time
        .as_deref()
        .ok_or_else(|| MbtaError::MissingArrivalTime {
            trip_id: trip_id.clone(),
        })?;

    let arrival_time = DateTime::parse_from_rfc3339(raw)
        .map_err(|source| MbtaError::MalformedArrivalTime {
            trip_id: trip_id.clone(),
            source,
        })?
        .with_timezone(&Utc);

    Ok(ArrivalPrediction {
        trip_id,
        route_id: resource.relationships.route.data.id.clone(),
        arrival_time,
        seconds_until_arrival: (arrival_time - now).num_seconds(),
    })
}
