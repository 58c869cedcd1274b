//! # Reservation Endpoints
//!
//! Store-backed CRUD plus lookup by record locator. Posted reservations
//! are validated at this boundary; the encoder downstream assumes clean
//! graphs.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use pnrgov_core::Reservation;

use crate::error::AppError;
use crate::state::AppState;

/// List every stored reservation.
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = "reservations",
    responses((status = 200, description = "All stored reservations"))
)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Reservation>> {
    Json(state.list())
}

/// Store a reservation after validating the graph.
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = "reservations",
    responses(
        (status = 201, description = "Reservation stored"),
        (status = 422, description = "Graph failed validation")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(reservation): Json<Reservation>,
) -> Result<(StatusCode, Json<Reservation>), AppError> {
    reservation.validate()?;
    state.insert(reservation.clone());
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// Fetch one reservation by storage id.
#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    tag = "reservations",
    params(("id" = Uuid, Path, description = "Reservation storage id")),
    responses(
        (status = 200, description = "The reservation"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Reservation>, AppError> {
    state
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("reservation {id}")))
}

/// Fetch one reservation by record locator.
#[utoipa::path(
    get,
    path = "/api/reservations/by-locator/{locator}",
    tag = "reservations",
    params(("locator" = String, Path, description = "Six-character record locator")),
    responses(
        (status = 200, description = "The reservation"),
        (status = 404, description = "No reservation with that locator")
    )
)]
pub async fn get_by_locator(
    State(state): State<AppState>,
    Path(locator): Path<String>,
) -> Result<Json<Reservation>, AppError> {
    state
        .get_by_locator(&locator)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("record locator {locator}")))
}

/// Delete a reservation.
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = "reservations",
    params(("id" = Uuid, Path, description = "Reservation storage id")),
    responses(
        (status = 200, description = "Reservation removed"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .remove(&id)
        .map(|_| StatusCode::OK)
        .ok_or_else(|| AppError::NotFound(format!("reservation {id}")))
}
