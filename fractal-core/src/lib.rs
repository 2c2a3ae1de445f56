//! Core of a recursive, genome-driven 2-D fractal tree.
//!
//! Main components:
//! - [`genome`] — randomized parameters of one generation level.
//! - [`genome_set`] — the ordered genomes of a tree, youngest first.
//! - [`profile`] — per-branch segment profiles and interpolation helpers.
//! - [`renderer`] — the recursive branch walk and the draw sink seam.
//! - [`scene`] — per-frame driver applying the regenerate trigger.
//! - [`sampler`] — the randomness seam genomes draw from.
//! - [`config`] — tree constants and root placement.
//! - [`error`] — construction errors.
//! - [`types`] — shared type aliases.

pub mod config;
pub mod error;
pub mod genome;
pub mod genome_set;
pub mod profile;
pub mod renderer;
pub mod sampler;
pub mod scene;
pub mod types;
