//! Stub routes
//!
//! Mounts a `StarHttpService` on the star endpoints so a test process can
//! serve it. Handlers only build the context and delegate.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use super::{ApiResponse, ReqContext, SharedStarHttpService};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/user/stars
async fn get_stars(State(service): State<SharedStarHttpService>, ctx: ReqContext) -> ApiResponse {
    service.get_stars(&ctx).await
}

/// POST /api/user/stars/dashboard/:id
async fn star_dashboard(
    State(service): State<SharedStarHttpService>,
    Path(dashboard_id): Path<i64>,
    ctx: ReqContext,
) -> ApiResponse {
    let ctx = ctx.with_dashboard(dashboard_id);
    service.star_dashboard(&ctx).await
}

/// DELETE /api/user/stars/dashboard/:id
async fn unstar_dashboard(
    State(service): State<SharedStarHttpService>,
    Path(dashboard_id): Path<i64>,
    ctx: ReqContext,
) -> ApiResponse {
    let ctx = ctx.with_dashboard(dashboard_id);
    service.unstar_dashboard(&ctx).await
}

pub fn router(service: SharedStarHttpService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/user/stars", get(get_stars))
        .route(
            "/api/user/stars/dashboard/:id",
            post(star_dashboard).delete(unstar_dashboard),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
