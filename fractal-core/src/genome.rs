//! Per-generation parameter sets.
//!
//! A [`Genome`] holds every randomized value that shapes one generation
//! level of the tree. Values are drawn by [`Genome::regenerate`] and stay
//! fixed until the next regeneration, so every profile fetch in between
//! produces bit-identical results.

use crate::{
    config::{
        GENERATION_FALLOFF, GENERATIONS, MAX_BRANCH_ANGLE_DEG, MAX_DEVIATION, MAX_GRAVITY,
        MAX_LEN, MAX_SIZE, MAX_TURN_DEG, MIN_TURN_DEG, STEP_SCALE_DRIFT,
    },
    error::{GenomeError, Result},
    profile::{SegmentProfile, lerp, lerp_rgb},
    sampler::Sampler,
    types::Rgb,
};
use log::debug;
use rand::{SeedableRng, rngs::StdRng};

/// Randomized shape and color parameters of one generation level.
///
/// ### Fields
/// - `generation` - Generation number, `1` for leaves up to
///   [`GENERATIONS`] for the trunk. Fixed for the genome's lifetime.
/// - `sampler` - Private random source used by [`Genome::regenerate`].
/// - `*_deviation` - Relative perturbations applied on every fetch.
/// - `size_from_ancestor` / `color_from_ancestor` - Weights pulling a
///   child profile toward its parent's decayed size and color.
#[derive(Debug, Clone)]
pub struct Genome<S = StdRng> {
    generation: u32,
    sampler: S,

    length: f32,
    length_deviation: f32,

    size: f32,
    size_deviation: f32,
    size_from_ancestor: f32,
    size_step_scale: f32,

    turn_step: f32,
    turn_step_deviation: f32,
    gravity: f32,

    branch_count: u32,
    branch_angle: f32,
    branch_angle_deviation: f32,

    color: Rgb,
    color_step_scale: Rgb,
    color_from_ancestor: f32,
    color_deviation: f32,
}

impl Genome<StdRng> {
    /// Creates a genome backed by a [`StdRng`] seeded from `seed`.
    pub fn with_seed(generation: u32, seed: u64) -> Result<Self> {
        Self::new(generation, StdRng::seed_from_u64(seed))
    }
}

impl<S: Sampler> Genome<S> {
    /// Creates a genome for `generation` and draws its initial values.
    ///
    /// ### Errors
    /// Returns [`GenomeError::InvalidGeneration`] for generation `0`, whose
    /// length and size falloff would be infinite.
    pub fn new(generation: u32, sampler: S) -> Result<Self> {
        if generation == 0 {
            return Err(GenomeError::InvalidGeneration(generation));
        }

        let mut genome = Self {
            generation,
            sampler,
            length: 0.0,
            length_deviation: 0.0,
            size: 0.0,
            size_deviation: 0.0,
            size_from_ancestor: 0.0,
            size_step_scale: 1.0,
            turn_step: 0.0,
            turn_step_deviation: 0.0,
            gravity: 0.0,
            branch_count: 2,
            branch_angle: 0.0,
            branch_angle_deviation: 0.0,
            color: Rgb::ZERO,
            color_step_scale: Rgb::ONE,
            color_from_ancestor: 0.0,
            color_deviation: 0.0,
        };
        genome.regenerate();
        Ok(genome)
    }

    /// Redraws every randomized value.
    ///
    /// Draws happen in a fixed order, so a sampler in a given state always
    /// yields the same genome. Profiles fetched before this call are stale.
    pub fn regenerate(&mut self) {
        let age = self.generation as f32 / GENERATIONS as f32;
        let falloff = GENERATION_FALLOFF.powf(GENERATIONS as f32 / self.generation as f32);

        self.length = MAX_LEN * falloff;
        self.length_deviation = self.deviation();

        self.size = MAX_SIZE * falloff;
        self.size_deviation = self.deviation();
        self.size_from_ancestor = 0.6 + 0.4 * self.sampler.unit();
        self.size_step_scale = 1.0 + self.sampler.sign() * self.sampler.unit() * STEP_SCALE_DRIFT;

        let max_turn = lerp(MIN_TURN_DEG, MAX_TURN_DEG, 1.0 - age).to_radians();
        self.turn_step = self.sampler.unit() * max_turn * self.sampler.sign();
        self.turn_step_deviation = self.deviation();

        self.gravity = self.sampler.unit() * MAX_GRAVITY;

        self.branch_count = self.sampler.index(2..4);
        self.branch_angle = (0.8 + 0.2 * self.sampler.unit()) * MAX_BRANCH_ANGLE_DEG.to_radians();
        self.branch_angle_deviation = self.deviation();

        let r = 0.5 + 0.5 * self.sampler.unit();
        let g = 0.5 + 0.5 * self.sampler.unit();
        let b = 0.5 + 0.5 * self.sampler.unit();
        self.color = Rgb::new(r, g, b);

        let r_scale = 1.0 - self.sampler.unit() * STEP_SCALE_DRIFT;
        let g_scale = 1.0 - self.sampler.unit() * STEP_SCALE_DRIFT;
        let b_scale = 1.0 - self.sampler.unit() * STEP_SCALE_DRIFT;
        self.color_step_scale = Rgb::new(r_scale, g_scale, b_scale);

        self.color_from_ancestor = 0.8 + 0.2 * self.sampler.unit();
        self.color_deviation = self.deviation();

        debug!(
            "regenerated generation {}: length={:.2} size={:.3} branches={}",
            self.generation, self.length, self.size, self.branch_count
        );
    }

    /// Signed relative perturbation in `[-MAX_DEVIATION, MAX_DEVIATION]`.
    fn deviation(&mut self) -> f32 {
        self.sampler.sign() * self.sampler.unit() * MAX_DEVIATION
    }
}

impl<S> Genome<S> {
    /// Root profile: every base value perturbed by its own deviation.
    pub fn profile(&self) -> SegmentProfile {
        SegmentProfile {
            length: self.length * (1.0 + self.length_deviation),
            size: self.deviated_size(),
            size_step_scale: self.size_step_scale,
            turn_step: self.turn_step * (1.0 + self.turn_step_deviation),
            gravity: self.gravity,
            branch_count: self.branch_count,
            branch_angle: self.branch_angle * (1.0 + self.branch_angle_deviation),
            color: self.deviated_color(),
            color_step_scale: self.color_step_scale,
        }
    }

    /// Child profile: as [`Genome::profile`], with size and color pulled
    /// toward `parent`, which should be the parent's decayed end-of-walk
    /// profile.
    pub fn profile_from(&self, parent: &SegmentProfile) -> SegmentProfile {
        SegmentProfile {
            size: lerp(self.deviated_size(), parent.size, self.size_from_ancestor),
            color: lerp_rgb(self.deviated_color(), parent.color, self.color_from_ancestor),
            ..self.profile()
        }
    }

    #[inline]
    fn deviated_size(&self) -> f32 {
        self.size * (1.0 + self.size_deviation)
    }

    /// The shared color deviation scales all three channels alike.
    #[inline]
    fn deviated_color(&self) -> Rgb {
        self.color * (1.0 + self.color_deviation)
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn branch_count(&self) -> u32 {
        self.branch_count
    }

    pub fn size_from_ancestor(&self) -> f32 {
        self.size_from_ancestor
    }

    pub fn color_from_ancestor(&self) -> f32 {
        self.color_from_ancestor
    }
}
