//! HTTP API
//!
//! Admin surface under `/api/templates` and `/api/certificates`; public
//! verification surface under `/api/verify`. Successes return the payload
//! directly; failures go through `AppError`, which renders the unified
//! `ApiResponse` envelope.

mod certificates;
mod templates;
mod verify;

use crate::state::AppState;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use shared::error::AppError;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

type ApiResult<T> = Result<Json<T>, AppError>;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/templates",
            get(templates::list_templates).post(templates::create_template),
        )
        .route(
            "/api/templates/{id}",
            get(templates::get_template)
                .put(templates::update_template)
                .delete(templates::archive_template),
        )
        .route(
            "/api/templates/{id}/layout",
            patch(templates::patch_template_layout),
        )
        .route(
            "/api/certificates",
            get(certificates::list_certificates).post(certificates::issue_certificate),
        )
        .route(
            "/api/certificates/{id}/revoke",
            post(certificates::revoke_certificate),
        )
        .route("/api/verify/{id}", get(verify::verify_certificate))
        .route("/api/verify/{id}/qr", get(verify::verify_qr))
        .route("/health", get(health))
        // Verification pages are served cross-origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(
    axum::extract::State(state): axum::extract::State<Arc<AppState>>,
) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "templates": state.templates.len(),
        "certificates": state.certificates.len(),
    }))
}
