//! # Request/Response Types
//!
//! Wire contracts for every endpoint, camelCase on the wire. Request
//! types carry the same defaults the service applies when a field is
//! omitted.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Response for single-reservation EDIFACT generation.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EdifactResponse {
    /// Storage id, when the reservation came from the store.
    pub reservation_id: Option<Uuid>,
    /// Record locator of the encoded reservation.
    pub record_locator: String,
    /// The complete interchange text.
    pub edifact_content: String,
    /// Server time of generation.
    pub generated_at: NaiveDateTime,
}

/// Parameters for flight manifest generation.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ManifestRequest {
    /// Number of PNRs to pack into the manifest.
    pub passenger_count: usize,
    /// Reported airline; random when omitted.
    pub airline: Option<String>,
    /// Reported flight number; random when omitted.
    pub flight_number: Option<String>,
    /// Receiving authority.
    pub receiver: Option<String>,
}

impl Default for ManifestRequest {
    fn default() -> Self {
        Self {
            passenger_count: 5,
            airline: None,
            flight_number: None,
            receiver: None,
        }
    }
}

/// Response for flight manifest generation.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManifestResponse {
    /// The complete interchange text.
    pub edifact_content: String,
    /// Number of PNRs packed into the manifest.
    pub passenger_count: usize,
    /// Server time of generation.
    pub generated_at: NaiveDateTime,
}

/// Parameters for sample reservation generation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SampleDataRequest {
    pub passenger_count: usize,
    pub flight_count: usize,
    pub include_bags: bool,
    pub include_seats: bool,
    pub include_documents: bool,
    pub include_payment: bool,
    pub include_codeshare: bool,
    pub include_thru_flight: bool,
    pub include_phone_numbers: bool,
    pub include_agency_info: bool,
    pub include_credit_card: bool,
}

impl Default for SampleDataRequest {
    fn default() -> Self {
        Self {
            passenger_count: 2,
            flight_count: 2,
            include_bags: true,
            include_seats: true,
            include_documents: true,
            include_payment: true,
            include_codeshare: false,
            include_thru_flight: false,
            include_phone_numbers: true,
            include_agency_info: true,
            include_credit_card: true,
        }
    }
}

impl SampleDataRequest {
    /// Translate into generator options.
    pub fn to_options(&self) -> pnrgov_sample::SampleOptions {
        pnrgov_sample::SampleOptions {
            passenger_count: self.passenger_count,
            flight_count: self.flight_count,
            include_bags: self.include_bags,
            include_seats: self.include_seats,
            include_documents: self.include_documents,
            include_payment: self.include_payment,
            include_codeshare: self.include_codeshare,
            include_thru_flight: self.include_thru_flight,
            include_phone_numbers: self.include_phone_numbers,
            include_agency_info: self.include_agency_info,
            include_credit_card: self.include_credit_card,
        }
    }
}

/// Summary of one generated and stored reservation.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SampleDataResponse {
    pub reservation_id: Uuid,
    pub record_locator: String,
    pub passenger_count: usize,
    pub flight_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Parameters for generating several sample reservations at once.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MultipleSampleDataRequest {
    /// How many reservations to generate.
    pub count: usize,
    #[serde(flatten)]
    pub sample: SampleDataRequest,
}

impl Default for MultipleSampleDataRequest {
    fn default() -> Self {
        Self {
            count: 5,
            sample: SampleDataRequest::default(),
        }
    }
}

/// Response listing every generated reservation.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MultipleSampleDataResponse {
    pub total_generated: usize,
    pub reservations: Vec<SampleDataResponse>,
    pub message: String,
}

/// Parameters for bulk EDIFACT file generation.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkGenerationRequest {
    pub file_count: usize,
    pub min_passengers: usize,
    pub max_passengers: usize,
    pub min_flights: usize,
    pub max_flights: usize,
    pub receiver: Option<String>,
}

impl Default for BulkGenerationRequest {
    fn default() -> Self {
        Self {
            file_count: 10,
            min_passengers: 1,
            max_passengers: 5,
            min_flights: 1,
            max_flights: 3,
            receiver: None,
        }
    }
}

/// Option flags one bulk file was generated with.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileOptions {
    pub has_bags: bool,
    pub has_seats: bool,
    pub has_documents: bool,
    pub has_payment: bool,
    pub is_codeshare: bool,
    pub is_thru_flight: bool,
    pub has_phones: bool,
    pub has_agency: bool,
    pub has_credit_card: bool,
}

/// One generated bulk file.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFile {
    pub file_name: String,
    pub record_locator: String,
    pub content: String,
    pub passenger_count: usize,
    pub flight_count: usize,
    pub options: FileOptions,
}

/// Response for bulk generation.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkGenerationResponse {
    pub files: Vec<GeneratedFile>,
    pub total_files: usize,
    pub generated_at: NaiveDateTime,
}
