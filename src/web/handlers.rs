// src/web/handlers.rs
// Route handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use std::borrow::Cow;
use tracing::{info, warn};
use uuid::Uuid;

use super::error::ApiError;
use super::state::AppState;
use super::types::{GeneratePersonaRequest, GeneratePersonaResponse};
use crate::error::HeroError;
use crate::persona::{PersonaRecord, resolve_persona, resolve_persona_described};
use crate::photo::PhotoUpload;

/// POST /api/generate-persona
///
/// Validation happens before any provider is contacted: a missing photo
/// or missing answers never reach the image API.
pub async fn generate_persona(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePersonaRequest>, JsonRejection>,
) -> Result<Json<GeneratePersonaResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let Json(request) = payload?;

    let Some(raw_photo) = request.photo.as_deref().filter(|p| !p.trim().is_empty()) else {
        info!(%request_id, "Rejected request without photo");
        return Err(ApiError::bad_request("Photo is required"));
    };
    let Some(answers) = request.answers.as_ref() else {
        info!(%request_id, "Rejected request without answers");
        return Err(ApiError::bad_request("Answers are required"));
    };
    let photo = PhotoUpload::parse(raw_photo)
        .map_err(|e| ApiError::bad_request("Invalid photo").with_details(e.to_string()))?;

    let persona: Cow<'static, PersonaRecord> = if state.describe_fallback {
        Cow::Owned(resolve_persona_described(answers))
    } else {
        Cow::Borrowed(resolve_persona(answers))
    };
    let key = answers.composite_key();
    info!(
        %request_id,
        key = key.as_deref().unwrap_or("-"),
        persona = persona.title,
        provider = state.avatars.provider_name(),
        "Generating superhero"
    );

    let subject = match &state.analyzer {
        Some(analyzer) => match analyzer.describe(&photo).await {
            Ok(description) => Some(description),
            Err(e) => {
                warn!(%request_id, analyzer = analyzer.name(), error = %e, "Photo description failed, continuing without it");
                None
            }
        },
        None => None,
    };

    let cancel = state.shutdown.child_token();
    let avatar_url = state
        .avatars
        .request(&persona, Some(&photo), subject.as_ref(), &cancel)
        .await
        .map_err(|e| {
            warn!(%request_id, upstream = e.is_upstream(), error = %e, "Superhero generation failed");
            generation_error(e)
        })?;

    info!(%request_id, "Superhero ready");
    Ok(Json(GeneratePersonaResponse::new(&persona, avatar_url)))
}

fn generation_error(err: HeroError) -> ApiError {
    match err {
        HeroError::Cancelled => {
            ApiError::custom(StatusCode::SERVICE_UNAVAILABLE, "Server is shutting down").with_details(err.to_string())
        }
        other if other.is_client_error() => ApiError::bad_request("Invalid request").with_details(other.to_string()),
        other => ApiError::internal("Superhero generation failed").with_details(other.to_string()),
    }
}

/// Any method other than POST on the generate route
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
