//! Prompt construction for the generative-AI upstream.
//!
//! The prompt is assembled from a [`TripRequest`] in a fixed clause
//! order with lowercase normalization, so equal requests always yield
//! byte-identical prompts.

use crate::models::TripRequest;

/// Fixed closing instruction appended to every prompt.
const CLOSING_INSTRUCTION: &str =
    "Please generate a personalized itinerary, provide tips for the trip, and forecast the weather.";

/// Render a trip request into the single natural-language instruction
/// string sent upstream. Pure and total: empty fields become empty
/// segments rather than errors.
#[must_use]
pub fn build_prompt(request: &TripRequest) -> String {
    let mut prompt = format!(
        "Plan a trip to {} from {} to {}. ",
        request.destination,
        request.start_date.format("%Y-%m-%d"),
        request.end_date.format("%Y-%m-%d"),
    );
    prompt.push_str(&format!(
        "The budget for the trip is {} and the trip type is {}. ",
        request.budget, request.trip_type,
    ));
    prompt.push_str(&format!(
        "The main activities you'd like to include are {}. ",
        request.activities.join(", "),
    ));
    prompt.push_str(CLOSING_INSTRUCTION);
    prompt
}
