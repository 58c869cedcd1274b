//! # `pnrgov sample` — Sample Reservation Data
//!
//! Emits generated reservation graphs as JSON, for feeding other tools or
//! the API's reservation store.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use pnrgov_core::Reservation;
use pnrgov_sample::{generate_reservation, SampleOptions};

/// Arguments for the `sample` subcommand.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Number of reservations to generate.
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// Number of passengers per reservation.
    #[arg(long, default_value_t = 2)]
    pub passengers: usize,

    /// Number of flight legs per reservation.
    #[arg(long, default_value_t = 2)]
    pub flights: usize,

    /// Make one leg a codeshare.
    #[arg(long)]
    pub codeshare: bool,

    /// Start each itinerary with a two-leg thru-flight.
    #[arg(long)]
    pub thru_flight: bool,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the `sample` subcommand.
pub fn run_sample(args: &SampleArgs) -> anyhow::Result<u8> {
    let options = SampleOptions {
        passenger_count: args.passengers,
        flight_count: args.flights,
        include_codeshare: args.codeshare,
        include_thru_flight: args.thru_flight,
        ..SampleOptions::default()
    };

    let now = Utc::now().naive_utc();
    let mut rng = crate::rng_from_seed(args.seed);
    let reservations: Vec<Reservation> = (0..args.count)
        .map(|_| generate_reservation(&options, now, &mut rng))
        .collect();

    let mut content = serde_json::to_string_pretty(&reservations)?;
    content.push('\n');
    crate::write_output(args.output.as_ref(), &content)?;
    Ok(0)
}
