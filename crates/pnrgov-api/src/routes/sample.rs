//! # Sample Data Endpoints
//!
//! Generate random reservations into the store, singly or in batches.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use pnrgov_sample::generate_reservation;

use crate::dto::{
    MultipleSampleDataRequest, MultipleSampleDataResponse, SampleDataRequest, SampleDataResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Generate one random reservation and store it.
#[utoipa::path(
    post,
    path = "/api/sample-data/generate",
    tag = "sample-data",
    request_body = SampleDataRequest,
    responses((status = 200, description = "Stored reservation summary", body = SampleDataResponse))
)]
pub async fn generate(
    State(state): State<AppState>,
    request: Option<Json<SampleDataRequest>>,
) -> Result<Json<SampleDataResponse>, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let now = Utc::now().naive_utc();
    let mut rng = StdRng::from_entropy();

    let reservation = generate_reservation(&request.to_options(), now, &mut rng);
    let summary = SampleDataResponse {
        reservation_id: reservation.id.0,
        record_locator: reservation.record_locator.to_string(),
        passenger_count: reservation.passengers.len(),
        flight_count: reservation.flights.len(),
        message: Some("Sample reservation created successfully".to_string()),
    };
    state.insert(reservation);

    Ok(Json(summary))
}

/// Generate several random reservations and store them all.
#[utoipa::path(
    post,
    path = "/api/sample-data/generate-multiple",
    tag = "sample-data",
    request_body = MultipleSampleDataRequest,
    responses((status = 200, description = "Stored reservation summaries", body = MultipleSampleDataResponse))
)]
pub async fn generate_multiple(
    State(state): State<AppState>,
    request: Option<Json<MultipleSampleDataRequest>>,
) -> Result<Json<MultipleSampleDataResponse>, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let count = if request.count > 0 { request.count } else { 5 };
    let now = Utc::now().naive_utc();
    let mut rng = StdRng::from_entropy();
    let options = request.sample.to_options();

    let mut reservations = Vec::with_capacity(count);
    for _ in 0..count {
        let reservation = generate_reservation(&options, now, &mut rng);
        reservations.push(SampleDataResponse {
            reservation_id: reservation.id.0,
            record_locator: reservation.record_locator.to_string(),
            passenger_count: reservation.passengers.len(),
            flight_count: reservation.flights.len(),
            message: None,
        });
        state.insert(reservation);
    }

    tracing::info!(total = reservations.len(), "generated sample reservations");

    Ok(Json(MultipleSampleDataResponse {
        total_generated: reservations.len(),
        message: format!(
            "Successfully generated {} sample reservations",
            reservations.len()
        ),
        reservations,
    }))
}
