//! Axum REST handlers for the management API.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use uuid::Uuid;

use studio_core::error::StudioError;

use crate::models::*;
use crate::store::{CampaignAction, ManagementStore};

/// Shared management state.
#[derive(Clone)]
pub struct ManagementState {
    pub store: Arc<ManagementStore>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(err: StudioError) -> ApiError {
    let (status, code) = match &err {
        StudioError::NotFound(_) | StudioError::SessionNotFound(_) => {
            (StatusCode::NOT_FOUND, "not_found")
        }
        StudioError::Validation(_) => (StatusCode::CONFLICT, "invalid_transition"),
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

// ─── Campaigns ─────────────────────────────────────────────────────────────

pub async fn list_campaigns(State(state): State<ManagementState>) -> Json<Vec<Campaign>> {
    Json(state.store.list_campaigns())
}

pub async fn get_campaign(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CampaignDetail>, StatusCode> {
    state
        .store
        .campaign_detail(id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn create_campaign(
    State(state): State<ManagementState>,
    Json(req): Json<CreateCampaignRequest>,
) -> (StatusCode, Json<Campaign>) {
    let campaign = state.store.create_campaign(req);
    metrics::counter!("management.campaigns.created").increment(1);
    (StatusCode::CREATED, Json(campaign))
}

pub async fn update_campaign(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCampaignRequest>,
) -> Result<Json<Campaign>, StatusCode> {
    state
        .store
        .update_campaign(id, req)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn delete_campaign(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    if state.store.delete_campaign(id) {
        metrics::counter!("management.campaigns.deleted").increment(1);
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn transition(
    state: ManagementState,
    id: Uuid,
    action: CampaignAction,
) -> Result<Json<Campaign>, ApiError> {
    let campaign = state
        .store
        .transition_campaign(id, action)
        .map_err(error_response)?;
    metrics::counter!("management.campaigns.transitioned").increment(1);
    Ok(Json(campaign))
}

pub async fn submit_campaign(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, ApiError> {
    transition(state, id, CampaignAction::Submit).await
}

pub async fn approve_campaign(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, ApiError> {
    transition(state, id, CampaignAction::Approve).await
}

pub async fn launch_campaign(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, ApiError> {
    transition(state, id, CampaignAction::Launch).await
}

pub async fn pause_campaign(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, ApiError> {
    transition(state, id, CampaignAction::Pause).await
}

pub async fn duplicate_campaign(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<CampaignDuplicateResult>), StatusCode> {
    let result = state
        .store
        .duplicate_campaign(id)
        .ok_or(StatusCode::NOT_FOUND)?;
    metrics::counter!("management.campaigns.duplicated").increment(1);
    Ok((StatusCode::CREATED, Json(result)))
}

pub async fn push_campaign(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CampaignPushResult>, StatusCode> {
    state
        .store
        .push_campaign(id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn sync_campaign(
    State(state): State<ManagementState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CampaignSyncResult>, StatusCode> {
    state
        .store
        .sync_campaign(id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

// ─── Content ───────────────────────────────────────────────────────────────

pub async fn list_content(State(state): State<ManagementState>) -> Json<Vec<Content>> {
    Json(state.store.list_content())
}

pub async fn generate_content(
    State(state): State<ManagementState>,
    Json(req): Json<GenerateContentRequest>,
) -> (StatusCode, Json<GenerateContentResponse>) {
    let resp = state.store.generate_content(req);
    metrics::counter!("management.content.generated").increment(1);
    (StatusCode::CREATED, Json(resp))
}

pub async fn list_templates(State(state): State<ManagementState>) -> Json<Vec<ContentTemplate>> {
    Json(state.store.list_templates())
}

pub async fn content_calendar(State(state): State<ManagementState>) -> Json<Vec<CalendarItem>> {
    Json(state.store.calendar())
}

// ─── Brands / audiences / connections / settings ───────────────────────────

pub async fn list_brands(State(state): State<ManagementState>) -> Json<Vec<Brand>> {
    Json(state.store.list_brands())
}

pub async fn list_audiences(State(state): State<ManagementState>) -> Json<Vec<Audience>> {
    Json(state.store.list_audiences())
}

pub async fn list_connections(
    State(state): State<ManagementState>,
) -> Json<Vec<PlatformConnection>> {
    Json(state.store.list_connections())
}

pub async fn get_settings(State(state): State<ManagementState>) -> Json<OrgSettings> {
    Json(state.store.settings())
}
