//! Speech rendering for prediction sets.

use mybus_types::PredictionSet;

/// Spoken when no predictions are available.
pub const NO_BUS_SPEECH: &str = "There is no bus in the near future.";

/// Renders a prediction set into one spoken sentence.
///
/// Phrasing, in index order over the soonest-first set:
/// - first entry: "The next bus is in {m} minutes. ", plus "Another bus in "
///   when more arrivals follow;
/// - last entry of a set of three or more: "and {m} minutes. ";
/// - everything else: "{m} minutes, ".
///
/// With exactly two predictions the second entry stays in the comma form
/// ("... Another bus in 12 minutes, ") — the "and" form requires three or
/// more. Callers depend on the exact text, so the threshold stays as-is.
///
/// Overdue predictions participate like any other; their minute counts come
/// out negative or zero.
pub fn next_bus_speech(predictions: &PredictionSet) -> String {
    let predictions = predictions.as_slice();
    if predictions.is_empty() {
        return NO_BUS_SPEECH.to_string();
    }

    let last = predictions.len() - 1;
    let mut speech = String::new();

    for (idx, prediction) in predictions.iter().enumerate() {
        // Floor division, not truncation: -30 seconds reads as -1 minutes.
        let minutes = prediction.seconds_until_arrival.div_euclid(60);

        if idx == 0 {
            speech.push_str(&format!("The next bus is in {minutes} minutes. "));
            if predictions.len() > 1 {
                speech.push_str("Another bus in ");
            }
        } else if idx == last && idx > 1 {
            speech.push_str(&format!("and {minutes} minutes. "));
        } else {
            speech.push_str(&format!("{minutes} minutes, "));
        }
    }

    speech
}
