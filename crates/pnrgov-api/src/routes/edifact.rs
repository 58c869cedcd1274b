//! # EDIFACT Endpoints
//!
//! Single-reservation generation (from the store or from a fresh random
//! reservation), manifest generation, and bulk file generation, each with
//! a download variant that serves the text as an `.edi` attachment.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use pnrgov_edifact::{encode_manifest, encode_reservation, ManifestOptions};
use pnrgov_sample::{generate_reservation, SampleOptions};

use crate::dto::{
    BulkGenerationRequest, BulkGenerationResponse, EdifactResponse, FileOptions, GeneratedFile,
    ManifestRequest, ManifestResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Generate an interchange for a fresh random reservation.
#[utoipa::path(
    post,
    path = "/api/edifact/generate",
    tag = "edifact",
    responses((status = 200, description = "Generated interchange", body = EdifactResponse))
)]
pub async fn generate_random(State(_state): State<AppState>) -> Result<Json<EdifactResponse>, AppError> {
    let now = Utc::now().naive_utc();
    let mut rng = StdRng::from_entropy();
    let reservation = generate_reservation(&SampleOptions::default(), now, &mut rng);
    let content = encode_reservation(&reservation, None, now, &mut rng)?;
    Ok(Json(EdifactResponse {
        reservation_id: None,
        record_locator: reservation.record_locator.to_string(),
        edifact_content: content,
        generated_at: now,
    }))
}

/// Generate an interchange for a stored reservation.
#[utoipa::path(
    get,
    path = "/api/edifact/generate/{id}",
    tag = "edifact",
    params(("id" = Uuid, Path, description = "Reservation storage id")),
    responses(
        (status = 200, description = "Generated interchange", body = EdifactResponse),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn generate_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EdifactResponse>, AppError> {
    let reservation = state
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("reservation {id}")))?;
    let now = Utc::now().naive_utc();
    let mut rng = StdRng::from_entropy();
    let content = encode_reservation(&reservation, None, now, &mut rng)?;
    Ok(Json(EdifactResponse {
        reservation_id: Some(id),
        record_locator: reservation.record_locator.to_string(),
        edifact_content: content,
        generated_at: now,
    }))
}

/// Download a stored reservation's interchange as an `.edi` attachment.
#[utoipa::path(
    get,
    path = "/api/edifact/download/{id}",
    tag = "edifact",
    params(("id" = Uuid, Path, description = "Reservation storage id")),
    responses(
        (status = 200, description = "Interchange file", body = String, content_type = "text/plain"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn download_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let reservation = state
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("reservation {id}")))?;
    let now = Utc::now().naive_utc();
    let mut rng = StdRng::from_entropy();
    let content = encode_reservation(&reservation, None, now, &mut rng)?;
    Ok(attachment(
        format!("{}.edi", reservation.record_locator),
        content,
    ))
}

/// Generate a flight manifest interchange.
#[utoipa::path(
    post,
    path = "/api/edifact/manifest/generate",
    tag = "edifact",
    request_body = ManifestRequest,
    responses((status = 200, description = "Generated manifest", body = ManifestResponse))
)]
pub async fn generate_manifest(
    State(_state): State<AppState>,
    request: Option<Json<ManifestRequest>>,
) -> Result<Json<ManifestResponse>, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let now = Utc::now().naive_utc();
    let mut rng = StdRng::from_entropy();
    let content = encode_manifest(&manifest_options(&request), now, &mut rng)?;
    Ok(Json(ManifestResponse {
        edifact_content: content,
        passenger_count: request.passenger_count,
        generated_at: now,
    }))
}

/// Download a flight manifest as an `.edi` attachment.
#[utoipa::path(
    post,
    path = "/api/edifact/manifest/download",
    tag = "edifact",
    request_body = ManifestRequest,
    responses((status = 200, description = "Manifest file", body = String, content_type = "text/plain"))
)]
pub async fn download_manifest(
    State(_state): State<AppState>,
    request: Option<Json<ManifestRequest>>,
) -> Result<Response, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let now = Utc::now().naive_utc();
    let mut rng = StdRng::from_entropy();
    let content = encode_manifest(&manifest_options(&request), now, &mut rng)?;

    let airline = request.airline.as_deref().unwrap_or("XX");
    let flight_number = request.flight_number.as_deref().unwrap_or("0000");
    let file_name = format!(
        "PNRGOV_Manifest_{}{}_{}.edi",
        airline,
        flight_number,
        now.format("%Y%m%d%H%M%S")
    );
    Ok(attachment(file_name, content))
}

/// Generate a batch of interchange files with randomized options.
#[utoipa::path(
    post,
    path = "/api/edifact/bulk/generate",
    tag = "edifact",
    request_body = BulkGenerationRequest,
    responses(
        (status = 200, description = "Generated files", body = BulkGenerationResponse),
        (status = 422, description = "Out-of-range generation parameters")
    )
)]
pub async fn generate_bulk(
    State(_state): State<AppState>,
    request: Option<Json<BulkGenerationRequest>>,
) -> Result<Json<BulkGenerationResponse>, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    validate_bulk(&request)?;

    let now = Utc::now().naive_utc();
    let mut rng = StdRng::from_entropy();
    let receiver = request.receiver.as_deref();

    let mut files = Vec::with_capacity(request.file_count);
    for _ in 0..request.file_count {
        let include_payment = rng.gen_bool(0.5);
        let options = SampleOptions {
            passenger_count: rng.gen_range(request.min_passengers..=request.max_passengers),
            flight_count: rng.gen_range(request.min_flights..=request.max_flights),
            include_bags: rng.gen_bool(0.5),
            include_seats: rng.gen_bool(0.5),
            include_documents: rng.gen_bool(0.5),
            include_payment,
            include_codeshare: rng.gen_range(0..3) == 0,
            include_thru_flight: rng.gen_range(0..3) == 0,
            include_phone_numbers: rng.gen_bool(0.5),
            include_agency_info: rng.gen_bool(0.5),
            include_credit_card: include_payment && rng.gen_bool(0.5),
        };

        let reservation = generate_reservation(&options, now, &mut rng);
        let content = encode_reservation(&reservation, receiver, now, &mut rng)?;
        files.push(GeneratedFile {
            file_name: format!("{}.edi", reservation.record_locator),
            record_locator: reservation.record_locator.to_string(),
            content,
            passenger_count: reservation.passengers.len(),
            flight_count: reservation.flights.len(),
            options: FileOptions {
                has_bags: options.include_bags,
                has_seats: options.include_seats,
                has_documents: options.include_documents,
                has_payment: options.include_payment,
                is_codeshare: options.include_codeshare,
                is_thru_flight: options.include_thru_flight,
                has_phones: options.include_phone_numbers,
                has_agency: options.include_agency_info,
                has_credit_card: options.include_credit_card,
            },
        });
    }

    tracing::info!(total = files.len(), "generated bulk EDIFACT files");

    Ok(Json(BulkGenerationResponse {
        total_files: files.len(),
        files,
        generated_at: now,
    }))
}

fn manifest_options(request: &ManifestRequest) -> ManifestOptions {
    ManifestOptions {
        pnr_count: request.passenger_count,
        airline: request.airline.clone(),
        flight_number: request.flight_number.clone(),
        receiver: request.receiver.clone(),
    }
}

fn validate_bulk(request: &BulkGenerationRequest) -> Result<(), AppError> {
    if request.file_count < 1 || request.file_count > 1000 {
        return Err(AppError::Validation(
            "file count must be between 1 and 1000".into(),
        ));
    }
    if request.min_passengers < 1 || request.max_passengers > 20 {
        return Err(AppError::Validation(
            "passenger range must be between 1 and 20".into(),
        ));
    }
    if request.min_flights < 1 || request.max_flights > 10 {
        return Err(AppError::Validation(
            "flight range must be between 1 and 10".into(),
        ));
    }
    if request.min_passengers > request.max_passengers {
        return Err(AppError::Validation(
            "minPassengers cannot be greater than maxPassengers".into(),
        ));
    }
    if request.min_flights > request.max_flights {
        return Err(AppError::Validation(
            "minFlights cannot be greater than maxFlights".into(),
        ));
    }
    Ok(())
}

fn attachment(file_name: String, content: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/plain".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        content,
    )
        .into_response()
}
