use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

/// Number of generation levels in a tree.
pub const GENERATIONS: usize = 8;
/// Distance advanced along a branch between two circle triples.
pub const STEP_LEN: f32 = 5.0;
/// Trunk length before the per-generation falloff.
pub const MAX_LEN: f32 = 120.0;
/// Trunk radius before the per-generation falloff.
pub const MAX_SIZE: f32 = 6.0;
/// Base of the `falloff^(GENERATIONS / generation)` length/size factor.
pub const GENERATION_FALLOFF: f32 = 0.9;
/// Largest relative perturbation applied on a profile fetch.
pub const MAX_DEVIATION: f32 = 0.05;
/// Largest per-step drift of a size or color step-scale away from `1`.
pub const STEP_SCALE_DRIFT: f32 = 0.01;
/// Turn-step bound for the oldest generation, in degrees.
pub const MIN_TURN_DEG: f32 = 1.0;
/// Turn-step bound approached by the youngest generations, in degrees.
pub const MAX_TURN_DEG: f32 = 3.0;
/// Upper bound of the branch spread angle, in degrees.
pub const MAX_BRANCH_ANGLE_DEG: f32 = 45.0;
/// Upper bound of the gravity coefficient.
pub const MAX_GRAVITY: f32 = 0.02;

/// Placement of the tree in world space (y up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub root_anchor: Vec2,
    pub root_heading: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_anchor: Vec2::new(0.0, -300.0),
            root_heading: FRAC_PI_2,
        }
    }
}
