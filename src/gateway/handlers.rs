use super::AppState;
use super::pages::{DASHBOARD_HTML, INDEX_HTML};
use crate::completion::CompletionResult;
use crate::prompts::{CampaignRequest, GenerationRequest, LeadScoreRequest, PitchRequest};
use axum::{
    extract::{State, rejection::JsonRejection},
    response::{Html, IntoResponse, Json},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// GET /: landing page
pub(super) async fn handle_index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /dashboard: usage dashboard page
pub(super) async fn handle_dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// GET /health: always public
pub(super) async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "credential_configured": state.service.client().has_credential(),
    }))
}

/// GET /dashboard_stats: totals, per-kind counts and recent activity
pub(super) async fn handle_dashboard_stats(State(state): State<AppState>) -> impl IntoResponse {
    match state.service.activity().stats(state.recent_limit).await {
        Ok(stats) => Json(
            serde_json::to_value(stats)
                .unwrap_or_else(|error| serde_json::json!({"error": error.to_string()})),
        ),
        Err(error) => {
            tracing::warn!(error = %error, "dashboard stats unavailable");
            Json(serde_json::json!({"error": error.to_string()}))
        }
    }
}

/// POST /generate_campaign
pub(super) async fn handle_campaign(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Json<CompletionResult> {
    Json(generate::<CampaignRequest>(&state, body).await)
}

/// POST /generate_pitch
pub(super) async fn handle_pitch(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Json<CompletionResult> {
    Json(generate::<PitchRequest>(&state, body).await)
}

/// POST /lead_score
pub(super) async fn handle_lead_score(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Json<CompletionResult> {
    Json(generate::<LeadScoreRequest>(&state, body).await)
}

async fn generate<T>(state: &AppState, body: Result<Json<Value>, JsonRejection>) -> CompletionResult
where
    T: DeserializeOwned + Into<GenerationRequest>,
{
    match parse_request::<T>(body) {
        Ok(request) => state.service.handle(&request).await,
        Err(message) => {
            tracing::debug!(error = %message, "rejected generation request body");
            CompletionResult::error(message)
        }
    }
}

/// Accept only a JSON object. Field-level leniency lives in the request
/// types themselves.
pub(super) fn parse_request<T>(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<GenerationRequest, String>
where
    T: DeserializeOwned + Into<GenerationRequest>,
{
    let Json(value) =
        body.map_err(|rejection| format!("Invalid JSON body: {}", rejection.body_text()))?;
    if !value.is_object() {
        return Err("Request body must be a JSON object".into());
    }
    serde_json::from_value::<T>(value)
        .map(Into::into)
        .map_err(|error| format!("Invalid request fields: {error}"))
}
