use crate::types::Rgb;

/// Evolving parameters of a single branch walk.
///
/// A profile is produced fresh by every [`crate::genome::Genome`] fetch
/// and is never shared between branches: the renderer walks its own
/// copy and hands the decayed result down to the next generation.
///
/// ### Fields
/// - `length` - Distance budget of the branch.
/// - `size` - Current circle radius.
/// - `size_step_scale` - Factor applied to `size` after each step.
/// - `turn_step` - Heading increment per step (radians, signed).
/// - `gravity` - Downward heading pull per unit of traveled distance.
/// - `branch_count` - Number of children fanned out at the branch end.
/// - `branch_angle` - Angle between neighbouring children (radians).
/// - `color` - Current RGB color.
/// - `color_step_scale` - Per-channel factor applied to `color` after each step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentProfile {
    pub length: f32,
    pub size: f32,
    pub size_step_scale: f32,
    pub turn_step: f32,
    pub gravity: f32,
    pub branch_count: u32,
    pub branch_angle: f32,
    pub color: Rgb,
    pub color_step_scale: Rgb,
}

impl SegmentProfile {
    /// Returns this profile after one step of size and color decay.
    #[inline]
    #[must_use]
    pub fn stepped(self) -> Self {
        Self {
            size: self.size * self.size_step_scale,
            color: self.color * self.color_step_scale,
            ..self
        }
    }

    /// Heading offset of the first child relative to the parent's end heading.
    ///
    /// Two children are centered on the parent heading; any other count
    /// starts one full spread to the right.
    #[inline]
    pub fn child_bias(&self) -> f32 {
        let factor = if self.branch_count == 2 { -0.5 } else { -1.0 };
        factor * self.branch_angle
    }

    /// Headings of the children spawned at a branch ending at `heading`.
    pub fn child_headings(&self, heading: f32) -> impl Iterator<Item = f32> + '_ {
        let bias = self.child_bias();
        (0..self.branch_count).map(move |i| heading + bias + i as f32 * self.branch_angle)
    }
}

/// Linear interpolation that returns `a` at `t = 0` and `b` at `t = 1` exactly.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Channel-wise [`lerp`].
#[inline]
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn profile(branch_count: u32) -> SegmentProfile {
        SegmentProfile {
            length: 20.0,
            size: 4.0,
            size_step_scale: 0.99,
            turn_step: 0.01,
            gravity: 0.0,
            branch_count,
            branch_angle: 0.5,
            color: Vec3::new(0.8, 0.6, 0.4),
            color_step_scale: Vec3::new(0.995, 0.99, 1.0),
        }
    }

    #[test]
    fn stepped_decays_size_and_color_only() {
        let p = profile(2);
        let s = p.stepped();

        assert_eq!(s.size, p.size * p.size_step_scale);
        assert_eq!(s.color.x, p.color.x * p.color_step_scale.x);
        assert_eq!(s.color.y, p.color.y * p.color_step_scale.y);
        assert_eq!(s.color.z, p.color.z);

        assert_eq!(s.length, p.length);
        assert_eq!(s.turn_step, p.turn_step);
        assert_eq!(s.branch_count, p.branch_count);
        assert_eq!(s.branch_angle, p.branch_angle);
    }

    #[test]
    fn child_bias_is_half_spread_for_two_and_full_spread_otherwise() {
        assert_eq!(profile(2).child_bias(), -0.25);
        assert_eq!(profile(3).child_bias(), -0.5);
    }

    #[test]
    fn child_headings_fan_out_from_bias() {
        let headings: Vec<f32> = profile(3).child_headings(1.0).collect();
        assert_eq!(headings, vec![1.0 - 0.5, 1.0 - 0.5 + 0.5, 1.0 - 0.5 + 1.0]);

        let headings: Vec<f32> = profile(2).child_headings(0.0).collect();
        assert_eq!(headings, vec![-0.25, 0.25]);
    }

    #[test]
    fn lerp_hits_both_endpoints_exactly() {
        let (a, b) = (0.1_f32, 0.3_f32);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert!((lerp(a, b, 0.5) - 0.2).abs() < 1e-6);

        let (ca, cb) = (Vec3::new(0.1, 0.7, 0.9), Vec3::new(0.3, 0.2, 0.55));
        assert_eq!(lerp_rgb(ca, cb, 0.0), ca);
        assert_eq!(lerp_rgb(ca, cb, 1.0), cb);
    }
}
