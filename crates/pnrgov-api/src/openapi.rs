//! # OpenAPI Specification Assembly
//!
//! Assembles all documented routes into a single OpenAPI spec, served at
//! `/openapi.json`.

use utoipa::OpenApi;

use crate::dto::{
    BulkGenerationRequest, BulkGenerationResponse, EdifactResponse, FileOptions, GeneratedFile,
    ManifestRequest, ManifestResponse, MultipleSampleDataRequest, MultipleSampleDataResponse,
    SampleDataRequest, SampleDataResponse,
};

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PNRGOV API",
        version = "0.1.0",
        description = "Generates IATA PNRGOV EDIFACT interchanges: single-reservation reports, flight manifests, bulk files, and the sample reservation data behind them."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        crate::routes::edifact::generate_random,
        crate::routes::edifact::generate_by_id,
        crate::routes::edifact::download_by_id,
        crate::routes::edifact::generate_manifest,
        crate::routes::edifact::download_manifest,
        crate::routes::edifact::generate_bulk,
        crate::routes::sample::generate,
        crate::routes::sample::generate_multiple,
        crate::routes::reservations::list,
        crate::routes::reservations::create,
        crate::routes::reservations::get,
        crate::routes::reservations::get_by_locator,
        crate::routes::reservations::delete,
    ),
    components(schemas(
        EdifactResponse,
        ManifestRequest,
        ManifestResponse,
        SampleDataRequest,
        SampleDataResponse,
        MultipleSampleDataRequest,
        MultipleSampleDataResponse,
        BulkGenerationRequest,
        BulkGenerationResponse,
        GeneratedFile,
        FileOptions,
    )),
    tags(
        (name = "edifact", description = "PNRGOV interchange generation"),
        (name = "sample-data", description = "Random reservation generation"),
        (name = "reservations", description = "Reservation store"),
    )
)]
pub struct ApiDoc;
