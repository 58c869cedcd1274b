//! # `pnrgov manifest` — Flight Manifest Interchange
//!
//! Packs a number of generated reservations onto one reported flight and
//! writes the batch interchange.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use pnrgov_edifact::{encode_manifest, ManifestOptions};

/// Arguments for the `manifest` subcommand.
#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Number of PNRs to pack into the manifest.
    #[arg(long, default_value_t = 5)]
    pub pnrs: usize,

    /// Reported airline designator; random when omitted.
    #[arg(long)]
    pub airline: Option<String>,

    /// Reported flight number; random when omitted.
    #[arg(long)]
    pub flight_number: Option<String>,

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

/// Run the `manifest` subcommand.
pub fn run_manifest(args: &ManifestArgs) -> anyhow::Result<u8> {
    let options = ManifestOptions {
        pnr_count: args.pnrs,
        airline: args.airline.clone(),
        flight_number: args.flight_number.clone(),
        receiver: args.receiver.clone(),
    };

    let now = Utc::now().naive_utc();
    let mut rng = crate::rng_from_seed(args.seed);
    let content = encode_manifest(&options, now, &mut rng)?;
    crate::write_output(args.output.as_ref(), &content)?;
    Ok(0)
}
