//! HTTP API: the single request cycle (form -> prompt -> generative AI
//! -> itinerary text -> PDF export) plus the static content endpoints.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    PlannerError,
    content::{self, AboutContent, FeedbackForm},
    gemini::ItineraryGenerator,
    models::{ACTIVITY_CHOICES, TripForm},
    pdf, prompt,
};

/// Shared per-process state. The generator is constructed once at
/// startup and handed to the router; handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn ItineraryGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn ItineraryGenerator>) -> Self {
        Self { generator }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/activities", get(get_activities))
        .route("/content/about", get(get_about))
        .route("/content/feedback", get(get_feedback_form))
        .route("/itinerary", post(create_itinerary))
        .route("/itinerary/pdf", post(export_itinerary_pdf))
        .with_state(state)
}

/// Response body of `POST /itinerary`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItineraryResponse {
    /// The exact prompt sent upstream, for transparency
    pub prompt: String,
    /// Free text returned by the generative-AI collaborator
    pub itinerary: String,
}

/// Request body of `POST /itinerary/pdf`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportRequest {
    pub text: String,
}

async fn get_activities() -> Json<Vec<&'static str>> {
    Json(ACTIVITY_CHOICES.to_vec())
}

async fn get_about() -> Json<AboutContent> {
    Json(content::about_content())
}

async fn get_feedback_form() -> Json<FeedbackForm> {
    Json(content::feedback_form())
}

async fn create_itinerary(
    State(state): State<AppState>,
    Json(form): Json<TripForm>,
) -> Result<Json<ItineraryResponse>, ApiError> {
    let request = form.parse()?;
    let prompt = prompt::build_prompt(&request);
    tracing::info!(destination = %request.destination, "Generating itinerary");
    let itinerary = state.generator.generate(&prompt).await?;
    Ok(Json(ItineraryResponse { prompt, itinerary }))
}

async fn export_itinerary_pdf(Json(body): Json<ExportRequest>) -> Result<Response, ApiError> {
    let bytes = pdf::render_document(&body.text)?;
    let headers = [
        (header::CONTENT_TYPE, pdf::EXPORT_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", pdf::EXPORT_FILE_NAME),
        ),
    ];
    Ok((headers, bytes).into_response())
}

/// Error wrapper mapping the error taxonomy onto HTTP statuses. Every
/// failure is reported to the caller synchronously as a JSON body.
pub struct ApiError(PlannerError);

impl From<PlannerError> for ApiError {
    fn from(err: PlannerError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            PlannerError::Validation { .. } | PlannerError::Encoding { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            PlannerError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "Request failed");
        let body = Json(serde_json::json!({ "error": self.0.user_message() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError(PlannerError::validation("bad")).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError(PlannerError::Encoding {
                character: '東',
                line: 1,
                column: 1
            })
            .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError(PlannerError::upstream("down")).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError(PlannerError::general("oops")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
