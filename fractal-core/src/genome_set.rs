use crate::{
    config::GENERATIONS,
    error::Result,
    genome::Genome,
    profile::SegmentProfile,
    sampler::Sampler,
    types::GenerationIndex,
};
use rand::{SeedableRng, rngs::StdRng};

/// Ordered genomes of one tree, youngest first.
///
/// Index `i` holds the genome of generation `i + 1`, so index `0` is the
/// leaf level and [`GenomeSet::oldest_index`] the trunk.
#[derive(Debug, Clone)]
pub struct GenomeSet<S = StdRng> {
    genomes: Vec<Genome<S>>,
}

impl GenomeSet<StdRng> {
    /// Builds a set where each genome owns a [`StdRng`] derived from `seed`.
    pub fn seeded(seed: u64) -> Result<Self> {
        Self::from_samplers(|generation| StdRng::seed_from_u64(seed.wrapping_add(generation as u64)))
    }
}

impl<S: Sampler> GenomeSet<S> {
    /// Builds [`GENERATIONS`] genomes, asking `make` for the sampler of
    /// each generation number in increasing order.
    pub fn from_samplers(mut make: impl FnMut(u32) -> S) -> Result<Self> {
        let genomes = (1..=GENERATIONS as u32)
            .map(|generation| Genome::new(generation, make(generation)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { genomes })
    }

    /// Regenerates every genome independently.
    pub fn regenerate_all(&mut self) {
        for genome in &mut self.genomes {
            genome.regenerate();
        }
    }
}

impl<S> GenomeSet<S> {
    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    pub fn get(&self, index: GenerationIndex) -> Option<&Genome<S>> {
        self.genomes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Genome<S>> {
        self.genomes.iter()
    }

    /// Index of the trunk generation.
    pub fn oldest_index(&self) -> GenerationIndex {
        self.genomes.len().saturating_sub(1)
    }

    /// Profile of the trunk branch.
    ///
    /// ### Panics
    /// Panics if the set is empty.
    pub fn root_profile(&self) -> SegmentProfile {
        self.genomes[self.oldest_index()].profile()
    }

    /// Profile for a branch at `index` spawned from the decayed `parent`.
    ///
    /// ### Panics
    /// Panics if `index` is out of bounds.
    pub fn child_profile(&self, index: GenerationIndex, parent: &SegmentProfile) -> SegmentProfile {
        self.genomes[index].profile_from(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_set_is_ordered_youngest_first() {
        let set = GenomeSet::seeded(1).unwrap();

        assert_eq!(set.len(), GENERATIONS);
        assert_eq!(set.oldest_index(), GENERATIONS - 1);
        for (i, genome) in set.iter().enumerate() {
            assert_eq!(genome.generation(), i as u32 + 1);
        }

        // Younger generations are shorter.
        let lengths: Vec<f32> = set.iter().map(|g| g.length()).collect();
        assert!(lengths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn root_profile_comes_from_the_oldest_genome() {
        let set = GenomeSet::seeded(3).unwrap();
        let oldest = set.get(set.oldest_index()).unwrap();
        assert_eq!(set.root_profile(), oldest.profile());
    }

    #[test]
    fn same_seed_builds_identical_sets() {
        let a = GenomeSet::seeded(77).unwrap();
        let b = GenomeSet::seeded(77).unwrap();

        for (ga, gb) in a.iter().zip(b.iter()) {
            assert_eq!(ga.profile(), gb.profile());
        }
    }

    #[test]
    fn regenerate_all_touches_every_genome() {
        let mut set = GenomeSet::seeded(5).unwrap();
        let before: Vec<SegmentProfile> = set.iter().map(|g| g.profile()).collect();

        set.regenerate_all();

        for (old, genome) in before.iter().zip(set.iter()) {
            assert_ne!(*old, genome.profile());
        }
    }

    #[test]
    fn child_profile_blends_with_the_given_parent() {
        let set = GenomeSet::seeded(9).unwrap();
        let parent = set.root_profile().stepped();
        let child = set.child_profile(0, &parent);

        assert_eq!(child, set.get(0).unwrap().profile_from(&parent));
    }
}
