//! MBTA real-time predictions client.
//!
//! Fetches upcoming arrivals for one fixed stop+route pair from the MBTA v3
//! API (`/predictions`) and maps the JSON:API response into
//! [`mybus_types::ArrivalPrediction`] records. One GET per call, no retry,
//! no caching; every failure is surfaced to the caller as an [`MbtaError`].

pub mod client;
pub mod document;
pub mod error;

pub use client::{PredictionsClient, MBTA_BASE_URL, ROUTE_ID, STOP_ID};
pub use document::{predictions_from_document, PredictionsDocument};
pub use error::MbtaError;
