//! # pnrgov-api — Axum API Service
//!
//! HTTP surface over the PNRGOV stack: an in-memory reservation store,
//! EDIFACT generation and download, flight manifests, sample data
//! generation, and bulk file generation.
//!
//! ## Routes
//!
//! - `POST /api/edifact/generate` — encode a fresh random reservation
//! - `GET  /api/edifact/generate/{id}` — encode a stored reservation
//! - `GET  /api/edifact/download/{id}` — same, as an `.edi` attachment
//! - `POST /api/edifact/manifest/generate` — flight manifest batch
//! - `POST /api/edifact/manifest/download` — manifest as an attachment
//! - `POST /api/edifact/bulk/generate` — many files, randomized options
//! - `POST /api/sample-data/generate` — generate + store one reservation
//! - `POST /api/sample-data/generate-multiple` — generate + store many
//! - `GET/POST /api/reservations`, `GET/DELETE /api/reservations/{id}`,
//!   `GET /api/reservations/by-locator/{locator}` — store access
//! - `GET /health`, `GET /openapi.json`
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers — they delegate to the domain
//!   crates and translate errors via `AppError`.
//! - Storage is in-memory (DashMap); data is lost on restart.

pub mod dto;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use utoipa::OpenApi;

pub use error::AppError;
pub use state::AppState;

/// Build the complete application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json))
        .route("/api/edifact/generate", post(routes::edifact::generate_random))
        .route(
            "/api/edifact/generate/{id}",
            get(routes::edifact::generate_by_id),
        )
        .route(
            "/api/edifact/download/{id}",
            get(routes::edifact::download_by_id),
        )
        .route(
            "/api/edifact/manifest/generate",
            post(routes::edifact::generate_manifest),
        )
        .route(
            "/api/edifact/manifest/download",
            post(routes::edifact::download_manifest),
        )
        .route(
            "/api/edifact/bulk/generate",
            post(routes::edifact::generate_bulk),
        )
        .route("/api/sample-data/generate", post(routes::sample::generate))
        .route(
            "/api/sample-data/generate-multiple",
            post(routes::sample::generate_multiple),
        )
        .route(
            "/api/reservations",
            get(routes::reservations::list).post(routes::reservations::create),
        )
        .route(
            "/api/reservations/{id}",
            get(routes::reservations::get).delete(routes::reservations::delete),
        )
        .route(
            "/api/reservations/by-locator/{locator}",
            get(routes::reservations::get_by_locator),
        )
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::ApiDoc::openapi())
}
