//! # pnrgov-cli — Command-Line Front End
//!
//! Subcommand handlers for the `pnrgov` binary: single-reservation
//! interchange generation, flight manifests, and sample reservation data
//! as JSON. Each handler returns a process exit code.

pub mod generate;
pub mod manifest;
pub mod sample;

use std::io::Write;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded or entropy-backed generator, depending on whether the user
/// asked for reproducible output.
pub(crate) fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Write output to the given path, or stdout when no path was given.
pub(crate) fn write_output(output: Option<&PathBuf>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => {
            std::io::stdout().write_all(content.as_bytes())?;
        }
    }
    Ok(())
}
