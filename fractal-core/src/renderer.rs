//! Recursive branch walk.
//!
//! A branch is drawn as a run of overlapping circle triples spaced
//! [`STEP_LEN`] apart. At its end the next-younger genome blends its own
//! values with the branch's decayed size and color, and the resulting
//! profile is fanned out into `branch_count` children.

use crate::{
    config::STEP_LEN,
    genome_set::GenomeSet,
    profile::SegmentProfile,
    types::{GenerationIndex, Rgba},
};
use glam::Vec2;

/// Translucent white circle drawn up-right of each step.
pub const HIGHLIGHT: Rgba = Rgba::new(1.0, 1.0, 1.0, 0.1);
/// Translucent black circle drawn down-left of each step.
pub const SHADOW: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.1);
/// Offset of the highlight (added) and shadow (subtracted) circles.
pub const HIGHLIGHT_OFFSET: Vec2 = Vec2::ONE;

/// Receiver of the primitives emitted by a [`TreeRenderer`].
pub trait DrawSink {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Called once before each branch is walked.
    fn begin_branch(
        &mut self,
        _generation: GenerationIndex,
        _anchor: Vec2,
        _heading: f32,
        _profile: &SegmentProfile,
    ) {
    }
}

/// State of a branch after its walk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BranchEnd {
    pub pos: Vec2,
    pub heading: f32,
    /// Profile with size and color decayed by every step taken.
    pub profile: SegmentProfile,
}

/// Bends `heading` toward `-Y`, more strongly the farther the branch has grown.
#[inline]
fn apply_gravity(heading: f32, gravity: f32, traveled: f32) -> f32 {
    let pull = Vec2::new(0.0, -gravity * traveled);
    (Vec2::from_angle(heading) * STEP_LEN + pull).to_angle()
}

/// Walks a single branch, emitting one circle triple per step.
///
/// Steps are taken while the traveled distance is below
/// `profile.length`, so a branch has `ceil(length / STEP_LEN)` triples.
/// After each triple the heading is bent by gravity, the position
/// advances by [`STEP_LEN`], the turn-step is added, and size and color
/// are multiplied by their step-scales.
///
/// ### Returns
/// The final position, heading and decayed profile.
pub fn walk_branch(
    anchor: Vec2,
    heading: f32,
    profile: SegmentProfile,
    sink: &mut impl DrawSink,
) -> BranchEnd {
    let mut pos = anchor;
    let mut heading = heading;
    let mut working = profile;
    let mut traveled = 0.0;

    while traveled < profile.length {
        sink.fill_circle(pos + HIGHLIGHT_OFFSET, working.size, HIGHLIGHT);
        sink.fill_circle(pos - HIGHLIGHT_OFFSET, working.size, SHADOW);
        sink.fill_circle(pos, working.size, working.color.extend(1.0));

        heading = apply_gravity(heading, working.gravity, traveled);
        pos += Vec2::from_angle(heading) * STEP_LEN;
        heading += working.turn_step;
        working = working.stepped();

        traveled += STEP_LEN;
    }

    BranchEnd {
        pos,
        heading,
        profile: working,
    }
}

/// Draws a tree from a [`GenomeSet`].
///
/// Drawing reads the genomes but never changes them and draws no
/// randomness, so the same set always yields the same primitives.
pub struct TreeRenderer<'a, S> {
    genomes: &'a GenomeSet<S>,
}

impl<'a, S> TreeRenderer<'a, S> {
    pub fn new(genomes: &'a GenomeSet<S>) -> Self {
        Self { genomes }
    }

    /// Draws the whole tree, starting from the oldest genome's root profile.
    pub fn draw_tree(&self, anchor: Vec2, heading: f32, sink: &mut impl DrawSink) {
        if self.genomes.is_empty() {
            return;
        }
        let profile = self.genomes.root_profile();
        self.draw(self.genomes.oldest_index(), anchor, heading, profile, sink);
    }

    /// Draws one branch at `generation` and, unless it is a leaf, all of
    /// its descendants.
    ///
    /// Children share the end position and a single child profile; they
    /// differ only in heading, `end + bias + i * branch_angle`.
    ///
    /// ### Parameters
    /// - `generation` - Index into the genome set; `0` is a leaf.
    /// - `anchor` - Start position of the branch.
    /// - `heading` - Start heading in radians, `0` along `+X`.
    /// - `profile` - Branch parameters, typically fetched from the genome set.
    /// - `sink` - Receiver of the emitted circles.
    ///
    /// ### Panics
    /// Panics if `generation` is not below the number of genomes.
    pub fn draw(
        &self,
        generation: GenerationIndex,
        anchor: Vec2,
        heading: f32,
        profile: SegmentProfile,
        sink: &mut impl DrawSink,
    ) {
        sink.begin_branch(generation, anchor, heading, &profile);
        let end = walk_branch(anchor, heading, profile, sink);

        if generation == 0 {
            return;
        }

        let child = self.genomes.child_profile(generation - 1, &end.profile);
        for child_heading in profile.child_headings(end.heading) {
            self.draw(generation - 1, end.pos, child_heading, child, sink);
        }
    }
}
