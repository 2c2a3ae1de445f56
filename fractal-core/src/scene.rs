//! Per-frame driver.
//!
//! Each frame the host samples its regenerate trigger and calls
//! [`Scene::render_frame`], which applies the trigger (if set) and then
//! walks the whole tree into the host's [`DrawSink`].

use crate::{
    config::Config,
    error::Result,
    genome_set::GenomeSet,
    profile::SegmentProfile,
    renderer::{DrawSink, TreeRenderer},
    sampler::Sampler,
    types::{GenerationIndex, Rgba},
};
use glam::Vec2;
use log::info;
use rand::rngs::StdRng;

/// Primitive counts of a rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub branches: usize,
    pub circles: usize,
}

/// Forwards to the host sink while counting what passes through.
struct Counting<'a, D> {
    inner: &'a mut D,
    stats: FrameStats,
}

impl<D: DrawSink> DrawSink for Counting<'_, D> {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.stats.circles += 1;
        self.inner.fill_circle(center, radius, color);
    }

    fn begin_branch(
        &mut self,
        generation: GenerationIndex,
        anchor: Vec2,
        heading: f32,
        profile: &SegmentProfile,
    ) {
        self.stats.branches += 1;
        self.inner.begin_branch(generation, anchor, heading, profile);
    }
}

pub struct Scene<S = StdRng> {
    genomes: GenomeSet<S>,
    cfg: Config,
}

impl Scene<StdRng> {
    /// Creates a scene whose genomes are seeded from `seed`.
    pub fn seeded(seed: u64, cfg: Config) -> Result<Self> {
        Ok(Self::new(GenomeSet::seeded(seed)?, cfg))
    }
}

impl<S: Sampler> Scene<S> {
    pub fn new(genomes: GenomeSet<S>, cfg: Config) -> Self {
        Self { genomes, cfg }
    }

    /// Renders one frame.
    ///
    /// When `regenerate` is `true`, every genome is regenerated before
    /// drawing; otherwise the frame reproduces the previous one exactly.
    pub fn render_frame(&mut self, regenerate: bool, sink: &mut impl DrawSink) -> FrameStats {
        if regenerate {
            self.genomes.regenerate_all();
            info!("regenerated {} genomes", self.genomes.len());
        }

        let mut counting = Counting {
            inner: sink,
            stats: FrameStats::default(),
        };
        TreeRenderer::new(&self.genomes).draw_tree(
            self.cfg.root_anchor,
            self.cfg.root_heading,
            &mut counting,
        );
        counting.stats
    }

    pub fn genomes(&self) -> &GenomeSet<S> {
        &self.genomes
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GENERATIONS;

    #[derive(Default)]
    struct Bodies {
        circles: Vec<(Vec2, f32, Rgba)>,
    }

    impl DrawSink for Bodies {
        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
            self.circles.push((center, radius, color));
        }
    }

    #[test]
    fn idle_frames_repeat_exactly() {
        let mut scene = Scene::seeded(10, Config::default()).unwrap();

        let mut first = Bodies::default();
        let mut second = Bodies::default();
        let a = scene.render_frame(false, &mut first);
        let b = scene.render_frame(false, &mut second);

        assert_eq!(a, b);
        assert_eq!(first.circles, second.circles);
        assert_eq!(a.circles, first.circles.len());
    }

    #[test]
    fn regenerate_frame_changes_the_tree() {
        let mut scene = Scene::seeded(10, Config::default()).unwrap();

        let mut before = Bodies::default();
        scene.render_frame(false, &mut before);
        let mut after = Bodies::default();
        scene.render_frame(true, &mut after);

        assert_ne!(before.circles, after.circles);

        // The new tree is stable until the next trigger.
        let mut again = Bodies::default();
        scene.render_frame(false, &mut again);
        assert_eq!(after.circles, again.circles);
    }

    #[test]
    fn frame_starts_at_the_configured_anchor() {
        let cfg = Config {
            root_anchor: Vec2::new(12.0, -40.0),
            ..Config::default()
        };
        let mut scene = Scene::seeded(2, cfg).unwrap();

        let mut bodies = Bodies::default();
        let stats = scene.render_frame(false, &mut bodies);

        // Third circle of the first triple is the unshifted body.
        assert_eq!(bodies.circles[2].0, cfg.root_anchor);
        assert!(stats.branches >= (1 << GENERATIONS) - 1);
        assert_eq!(stats.circles % 3, 0);
    }
}
