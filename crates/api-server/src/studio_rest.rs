//! REST handlers for the AI Campaign Studio chat.
//!
//! The front-end drives the conversation through three verbs: start a
//! session from a prompt, poll its snapshot, and answer the pending
//! choice. Reset rewinds a session without discarding it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use studio_conversation::SessionSnapshot;
use studio_core::error::StudioError;

use crate::rest::{AppState, ErrorResponse};

const MAX_PROMPT_LEN: usize = 2_000;

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceRequest {
    pub value: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn studio_error(err: StudioError) -> ApiError {
    let (status, code) = match &err {
        StudioError::SessionNotFound(_) => (StatusCode::NOT_FOUND, "session_not_found"),
        StudioError::NotAwaitingChoice => (StatusCode::CONFLICT, "not_awaiting_choice"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
    };
    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
        }),
    )
}

/// POST /api/v1/studio/sessions — start a conversation from a prompt.
pub async fn start_session(
    State(state): State<AppState>,
    Json(req): Json<StartSessionRequest>,
) -> Result<(StatusCode, Json<SessionSnapshot>), ApiError> {
    let prompt = req.prompt.trim();
    if prompt.is_empty() || prompt.len() > MAX_PROMPT_LEN {
        warn!(len = req.prompt.len(), "Rejected studio prompt");
        metrics::counter!("studio.validation_errors").increment(1);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "invalid_prompt".to_string(),
                message: format!("prompt must be 1..={MAX_PROMPT_LEN} characters"),
            }),
        ));
    }

    let snapshot = state.engine.start_session(prompt);
    metrics::counter!("studio.sessions.started").increment(1);
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// GET /api/v1/studio/sessions/:id — poll the transcript and typing state.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    state.engine.snapshot(id).map(Json).map_err(studio_error)
}

/// POST /api/v1/studio/sessions/:id/choice — answer the pending choice.
pub async fn resolve_choice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChoiceRequest>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let snapshot = state
        .engine
        .resolve_choice(id, &req.value)
        .map_err(studio_error)?;
    metrics::counter!("studio.choices.resolved").increment(1);
    Ok(Json(snapshot))
}

/// POST /api/v1/studio/sessions/:id/reset — rewind to the idle state.
pub async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.engine.reset(id).map_err(studio_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/studio/sessions/:id — drop the session entirely.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.engine.remove(id).map_err(studio_error)?;
    metrics::counter!("studio.sessions.deleted").increment(1);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Instant;
    use studio_analytics::AnalyticsService;
    use studio_conversation::StudioEngine;
    use studio_core::config::{AnalyticsConfig, StudioConfig};
    use studio_management::ManagementStore;

    fn state() -> AppState {
        AppState {
            engine: Arc::new(StudioEngine::new(StudioConfig {
                max_sessions: 8,
                delay_scale: 1.0,
            })),
            store: Arc::new(ManagementStore::new("test")),
            analytics: Arc::new(AnalyticsService::new(AnalyticsConfig {
                trend_days: 7,
                avg_order_value: 85.0,
            })),
            start_time: Instant::now(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn start_echoes_the_prompt_immediately() {
        let state = state();
        let (status, Json(snapshot)) = start_session(
            State(state.clone()),
            Json(StartSessionRequest {
                prompt: "Create a campaign for our Hillwalker 2.0 jacket".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(snapshot.transcript.len(), 1);
        assert!(!snapshot.finished);

        let Json(polled) = get_session(State(state), Path(snapshot.session_id))
            .await
            .unwrap();
        assert_eq!(polled.session_id, snapshot.session_id);
    }

    #[tokio::test(start_paused = true)]
    async fn blank_prompts_are_rejected() {
        let (status, _) = start_session(
            State(state()),
            Json(StartSessionRequest {
                prompt: "   ".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_session_is_not_found() {
        let (status, _) = get_session(State(state()), Path(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = reset_session(State(state()), Path(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test(start_paused = true)]
    async fn choice_before_any_pause_conflicts() {
        let state = state();
        let (_, Json(snapshot)) = start_session(
            State(state.clone()),
            Json(StartSessionRequest {
                prompt: "Promote the Extrem range".to_string(),
            }),
        )
        .await
        .unwrap();

        let (status, _) = resolve_choice(
            State(state),
            Path(snapshot.session_id),
            Json(ChoiceRequest {
                value: "conversions".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
