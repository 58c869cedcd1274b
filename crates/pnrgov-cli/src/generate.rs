//! # `pnrgov generate` — Single-Reservation Interchange
//!
//! Generates one random reservation and encodes it as a PNRGOV
//! interchange, written to stdout or an `.edi` file.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use pnrgov_edifact::encode_reservation;
use pnrgov_sample::{generate_reservation, SampleOptions};

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of passengers on the reservation.
    #[arg(long, default_value_t = 2)]
    pub passengers: usize,

    /// Number of flight legs.
    #[arg(long, default_value_t = 2)]
    pub flights: usize,

    /// Make one leg a codeshare.
    #[arg(long)]
    pub codeshare: bool,

    /// Start the itinerary with a two-leg thru-flight.
    #[arg(long)]
    pub thru_flight: bool,

    /// Skip seat assignments.
    #[arg(long)]
    pub no_seats: bool,

    /// Skip checked bags.
    #[arg(long)]
    pub no_bags: bool,

    /// Skip travel documents.
    #[arg(long)]
    pub no_documents: bool,

    /// Receiving authority (defaults to USCBP).
    #[arg(long)]
    pub receiver: Option<String>,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the `generate` subcommand.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<u8> {
    let options = SampleOptions {
        passenger_count: args.passengers,
        flight_count: args.flights,
        include_codeshare: args.codeshare,
        include_thru_flight: args.thru_flight,
        include_seats: !args.no_seats,
        include_bags: !args.no_bags,
        include_documents: !args.no_documents,
        ..SampleOptions::default()
    };

    let now = Utc::now().naive_utc();
    let mut rng = crate::rng_from_seed(args.seed);
    let reservation = generate_reservation(&options, now, &mut rng);
    tracing::info!(record_locator = %reservation.record_locator, "generated reservation");

    let content = encode_reservation(&reservation, args.receiver.as_deref(), now, &mut rng)?;
    crate::write_output(args.output.as_ref(), &content)?;
    Ok(0)
}
