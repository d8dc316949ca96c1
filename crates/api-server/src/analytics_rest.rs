//! REST handlers for analytics reports and CSV export.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use studio_analytics::{
    AnalyticsOverview, CampaignAnalytics, ComparisonReport, InsightsReport, TopCampaignsReport,
};

use crate::rest::AppState;

/// GET /api/v1/analytics/overview
pub async fn overview(State(state): State<AppState>) -> Json<AnalyticsOverview> {
    Json(state.analytics.overview())
}

/// GET /api/v1/analytics/compare — current vs previous period.
pub async fn compare(State(state): State<AppState>) -> Json<ComparisonReport> {
    Json(state.analytics.compare())
}

/// GET /api/v1/analytics/top-campaigns
pub async fn top_campaigns(State(state): State<AppState>) -> Json<TopCampaignsReport> {
    Json(state.analytics.top_campaigns())
}

/// GET /api/v1/analytics/campaigns/:id
pub async fn campaign_analytics(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CampaignAnalytics>, StatusCode> {
    let campaign = state.store.get_campaign(id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(state.analytics.campaign_analytics(id, &campaign.name)))
}

/// GET /api/v1/analytics/insights
pub async fn insights(State(state): State<AppState>) -> Json<InsightsReport> {
    Json(state.analytics.insights())
}

/// POST /api/v1/analytics/export — daily per-platform metrics as CSV.
pub async fn export(State(state): State<AppState>) -> impl IntoResponse {
    metrics::counter!("analytics.exports").increment(1);
    (
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"analytics.csv\"",
            ),
        ],
        state.analytics.export_csv(),
    )
}
