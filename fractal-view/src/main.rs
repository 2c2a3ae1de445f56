//! Application entry point for the fractal tree viewer.
//!
//! This binary sets up logging and eframe/egui, picks the genome seed,
//! and delegates all per-frame work to [`Viewer`] from the `viewer`
//! module.

mod viewer;

use log::{error, info, warn};
use rand::{Rng, rng};
use viewer::Viewer;

/// Environment variable holding an optional `u64` genome seed.
const SEED_VAR: &str = "FRACTAL_TREE_SEED";

/// Parses a seed value, ignoring surrounding whitespace.
fn parse_seed(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// Reads the seed from [`SEED_VAR`], falling back to a random one.
fn seed_from_env() -> u64 {
    match std::env::var(SEED_VAR) {
        Ok(raw) => parse_seed(&raw).unwrap_or_else(|| {
            warn!("ignoring {SEED_VAR}={raw:?}: not a u64");
            rng().random()
        }),
        Err(_) => rng().random(),
    }
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if the viewer cannot be built or eframe fails to create the
///   native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let seed = seed_from_env();
    info!("starting fractal tree viewer with seed {seed}");

    let viewer = match Viewer::new(seed) {
        Ok(viewer) => viewer,
        Err(err) => {
            error!("failed to build genomes: {err}");
            return Err(eframe::Error::AppCreation(Box::new(err)));
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1300.0, 1000.0])
            .with_title("Fractal Tree"),
        ..Default::default()
    };

    eframe::run_native(
        "Fractal Tree",
        options,
        Box::new(move |_cc| Ok(Box::new(viewer))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_seed_accepts_trimmed_integers() {
        assert_eq!(parse_seed("42"), Some(42));
        assert_eq!(parse_seed("  7\n"), Some(7));
    }

    #[test]
    fn parse_seed_rejects_garbage() {
        assert_eq!(parse_seed("seven"), None);
        assert_eq!(parse_seed("-1"), None);
        assert_eq!(parse_seed(""), None);
    }
}
