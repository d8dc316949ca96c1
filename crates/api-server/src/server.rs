//! HTTP server wiring the studio, management, and analytics routers.

use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use studio_analytics::AnalyticsService;
use studio_conversation::StudioEngine;
use studio_core::config::AppConfig;
use studio_management::{management_router, ManagementStore};

use crate::rest::{self, AppState};
use crate::{analytics_rest, studio_rest};

/// Main API server for the campaign studio.
pub struct ApiServer {
    config: AppConfig,
    engine: Arc<StudioEngine>,
    store: Arc<ManagementStore>,
    analytics: Arc<AnalyticsService>,
}

impl ApiServer {
    pub fn new(config: AppConfig) -> Self {
        let engine = Arc::new(StudioEngine::new(config.studio.clone()));
        let store = Arc::new(ManagementStore::new(&config.org_name));
        let analytics = Arc::new(AnalyticsService::new(config.analytics.clone()));
        Self {
            config,
            engine,
            store,
            analytics,
        }
    }

    pub fn router(&self) -> Router {
        let state = AppState {
            engine: self.engine.clone(),
            store: self.store.clone(),
            analytics: self.analytics.clone(),
            start_time: Instant::now(),
        };

        Router::new()
            // AI Campaign Studio chat
            .route("/api/v1/studio/sessions", post(studio_rest::start_session))
            .route(
                "/api/v1/studio/sessions/:id",
                get(studio_rest::get_session).delete(studio_rest::delete_session),
            )
            .route(
                "/api/v1/studio/sessions/:id/choice",
                post(studio_rest::resolve_choice),
            )
            .route(
                "/api/v1/studio/sessions/:id/reset",
                post(studio_rest::reset_session),
            )
            // Analytics
            .route("/api/v1/analytics/overview", get(analytics_rest::overview))
            .route("/api/v1/analytics/compare", get(analytics_rest::compare))
            .route(
                "/api/v1/analytics/top-campaigns",
                get(analytics_rest::top_campaigns),
            )
            .route(
                "/api/v1/analytics/campaigns/:id",
                get(analytics_rest::campaign_analytics),
            )
            .route("/api/v1/analytics/insights", get(analytics_rest::insights))
            .route("/api/v1/analytics/export", post(analytics_rest::export))
            // Operational endpoints
            .route("/health", get(rest::health_check))
            .route("/ready", get(rest::readiness))
            .route("/live", get(rest::liveness))
            .with_state(state)
            // Campaign management
            .merge(management_router(self.store.clone()))
            // Middleware
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    /// Start the HTTP REST server.
    pub async fn start_http(&self) -> anyhow::Result<()> {
        let addr = SocketAddr::new(self.config.api.host.parse()?, self.config.api.http_port);
        info!(addr = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}
