//! `TripPlanner` - AI-assisted travel itinerary planning
//!
//! This library provides the core functionality for building trip
//! prompts, calling the generative-AI upstream, and exporting the
//! returned itinerary text as a paginated PDF.

pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod gemini;
pub mod models;
pub mod pdf;
pub mod prompt;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use config::PlannerConfig;
pub use error::PlannerError;
pub use gemini::{GeminiClient, ItineraryGenerator};
pub use models::{ACTIVITY_CHOICES, Budget, TripForm, TripRequest, TripType};
pub use pdf::render_document;
pub use prompt::build_prompt;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
