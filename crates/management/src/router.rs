//! Management API router — mounts campaign, content, brand, audience,
//! platform-connection, and settings endpoints under /api/v1.

use crate::handlers::{self, ManagementState};
use crate::store::ManagementStore;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Build the management router with all endpoints.
/// Returns a Router that should be merged into the main app.
pub fn management_router(store: Arc<ManagementStore>) -> Router {
    let state = ManagementState { store };

    Router::new()
        // Campaigns
        .route("/api/v1/campaigns", get(handlers::list_campaigns).post(handlers::create_campaign))
        .route("/api/v1/campaigns/:id", get(handlers::get_campaign).put(handlers::update_campaign).delete(handlers::delete_campaign))
        .route("/api/v1/campaigns/:id/submit", post(handlers::submit_campaign))
        .route("/api/v1/campaigns/:id/approve", post(handlers::approve_campaign))
        .route("/api/v1/campaigns/:id/launch", post(handlers::launch_campaign))
        .route("/api/v1/campaigns/:id/pause", post(handlers::pause_campaign))
        .route("/api/v1/campaigns/:id/duplicate", post(handlers::duplicate_campaign))
        .route("/api/v1/campaigns/:id/push", post(handlers::push_campaign))
        .route("/api/v1/campaigns/:id/sync", post(handlers::sync_campaign))
        // Content library
        .route("/api/v1/content", get(handlers::list_content))
        .route("/api/v1/content/generate", post(handlers::generate_content))
        .route("/api/v1/content/templates", get(handlers::list_templates))
        .route("/api/v1/content/calendar", get(handlers::content_calendar))
        // Brands, audiences, platform connections, settings
        .route("/api/v1/brands", get(handlers::list_brands))
        .route("/api/v1/audiences", get(handlers::list_audiences))
        .route("/api/v1/platforms", get(handlers::list_connections))
        .route("/api/v1/settings", get(handlers::get_settings))
        .with_state(state)
}
