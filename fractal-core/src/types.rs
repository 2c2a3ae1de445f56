use glam::{Vec3, Vec4};

/// Index of a generation level inside a [`crate::genome_set::GenomeSet`].
///
/// Index `0` is the youngest (leaf) level and
/// [`crate::config::GENERATIONS`]` - 1` is the trunk. The genome stored
/// at index `i` has generation number `i + 1`.
pub type GenerationIndex = usize;

/// RGB color, one channel per component, nominally in `[0, 1]`.
pub type Rgb = Vec3;

/// RGBA color handed to a [`crate::renderer::DrawSink`].
pub type Rgba = Vec4;
