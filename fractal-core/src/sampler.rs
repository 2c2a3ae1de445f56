//! Randomness seam used by [`crate::genome::Genome`].
//!
//! Every genome owns its own [`Sampler`]. Any [`rand::Rng`] is a sampler,
//! so production code hands each genome a seeded
//! [`rand::rngs::StdRng`], while tests can plug in a fixed stub.

use rand::Rng;
use std::ops::Range;

pub trait Sampler {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// `1.0` or `-1.0` with equal probability.
    fn sign(&mut self) -> f32;

    /// Uniform integer in the half-open `range`.
    ///
    /// ### Panics
    /// May panic if `range` is empty.
    fn index(&mut self, range: Range<u32>) -> u32;
}

impl<R: Rng> Sampler for R {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.random::<f32>()
    }

    #[inline]
    fn sign(&mut self) -> f32 {
        if self.random_bool(0.5) { 1.0 } else { -1.0 }
    }

    #[inline]
    fn index(&mut self, range: Range<u32>) -> u32 {
        self.random_range(range)
    }
}
