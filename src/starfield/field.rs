//! Particle field state and per-frame update step.
//!
//! All mutable state lives in one owned [`ParticleField`]; the frame loop
//! calls [`ParticleField::advance`] once per repaint, and tests drive
//! frames by calling it directly.

use tracing::debug;

use super::palette;

/// Distribution variant for the initial particle layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldVariant {
    /// Uniform inside a cube, single white color, slow drift.
    #[default]
    Cube,
    /// Spherical shell with per-particle colors and floating motion.
    Sphere,
}

/// Fixed parameters of a particle field. Chosen once, immutable afterwards.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub variant: FieldVariant,
    /// Number of particles. The position buffer holds `3 * count` floats.
    pub count: usize,
    /// Half-extent of the cube distribution (world units).
    pub half_extent: f32,
    /// Shell radius range for the sphere distribution.
    pub radius_min: f32,
    pub radius_max: f32,
    /// Per-frame rotation increments around the x and y axes.
    pub increment_x: f32,
    pub increment_y: f32,
    /// Scale applied to the normalized pointer offset before it is added
    /// to the rotation accumulators.
    pub pointer_damping: f32,
    /// Amplitude of the per-frame float applied to every third particle.
    /// Zero disables the perturbation entirely.
    pub float_amplitude: f32,
    /// Camera distance from the origin along +z.
    pub camera_distance: f32,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Base point radius in pixels at the near plane.
    pub point_size: f32,
}

impl FieldConfig {
    /// The cube variant: 5000 white particles in a 2000-unit cube.
    pub fn cube() -> Self {
        Self {
            variant: FieldVariant::Cube,
            count: 5000,
            half_extent: 1000.0,
            radius_min: 200.0,
            radius_max: 1000.0,
            increment_x: 0.0001,
            increment_y: 0.0002,
            pointer_damping: 0.0005,
            float_amplitude: 0.0,
            camera_distance: 5.0,
            fov_y_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            point_size: 1.4,
        }
    }

    /// The sphere variant: 800 colored particles on a shell, with the
    /// sinusoidal float on every third particle.
    pub fn sphere() -> Self {
        Self {
            variant: FieldVariant::Sphere,
            count: 800,
            half_extent: 1000.0,
            radius_min: 200.0,
            radius_max: 1000.0,
            increment_x: 0.001,
            increment_y: 0.002,
            pointer_damping: 0.0005,
            float_amplitude: 0.15,
            camera_distance: 1500.0,
            fov_y_deg: 75.0,
            near: 0.1,
            far: 4000.0,
            point_size: 2.2,
        }
    }

    pub fn for_variant(variant: FieldVariant) -> Self {
        match variant {
            FieldVariant::Cube => Self::cube(),
            FieldVariant::Sphere => Self::sphere(),
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::cube()
    }
}

/// Latest normalized pointer offset from viewport center, `[-1, 1]` per
/// axis. A single slot: pointer-move overwrites, the next frame reads.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    /// Normalize a pixel position against a viewport. The exact center
    /// maps to `(0, 0)`, the viewport edges to `±1`.
    pub fn from_screen(px: f32, py: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: (px - width * 0.5) / (width * 0.5),
            y: (py - height * 0.5) / (height * 0.5),
        }
    }
}

/// Small xorshift32 generator seeded from the OS entropy source.
/// Tests construct it from a fixed seed for deterministic layouts.
pub struct FieldRng {
    state: u32,
}

impl FieldRng {
    pub fn from_entropy() -> Self {
        let mut seed = [0u8; 4];
        // A zero seed would lock xorshift at zero; fall back to a fixed
        // word if the entropy source is unavailable.
        let seed = match getrandom::getrandom(&mut seed) {
            Ok(()) => u32::from_le_bytes(seed),
            Err(_) => 0,
        };
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() & 0x7F_FFFF) as f32 / 0x80_0000 as f32
    }

    /// Uniform in `[lo, hi)`.
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }
}

/// The particle field: flat position/color buffers plus two rotation
/// accumulators and the pointer slot.
pub struct ParticleField {
    config: FieldConfig,
    /// `3 * count` floats, consecutive `(x, y, z)` triples. Never resized.
    positions: Vec<f32>,
    /// `3 * count` RGB floats, assigned once. `None` for the cube variant.
    colors: Option<Vec<f32>>,
    rotation_x: f32,
    rotation_y: f32,
    pointer: PointerOffset,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        Self::with_rng(config, FieldRng::from_entropy())
    }

    pub fn with_rng(config: FieldConfig, mut rng: FieldRng) -> Self {
        let mut positions = Vec::with_capacity(config.count * 3);
        match config.variant {
            FieldVariant::Cube => {
                for _ in 0..config.count * 3 {
                    positions.push(rng.range(-config.half_extent, config.half_extent));
                }
            }
            FieldVariant::Sphere => {
                for _ in 0..config.count {
                    // acos keeps the shell uniform instead of clustering
                    // samples at the poles.
                    let radius = rng.range(config.radius_min, config.radius_max);
                    let theta = rng.range(0.0, std::f32::consts::TAU);
                    let phi = (2.0 * rng.next_f32() - 1.0).acos();
                    positions.push(radius * phi.sin() * theta.cos());
                    positions.push(radius * phi.sin() * theta.sin());
                    positions.push(radius * phi.cos());
                }
            }
        }

        let colors = match config.variant {
            FieldVariant::Cube => None,
            FieldVariant::Sphere => {
                let mut colors = Vec::with_capacity(config.count * 3);
                for _ in 0..config.count {
                    let [r, g, b] = palette::STAR_COLORS
                        [(rng.next_u32() as usize) % palette::STAR_COLORS.len()];
                    colors.extend_from_slice(&[r, g, b]);
                }
                Some(colors)
            }
        };

        debug!(
            variant = ?config.variant,
            count = config.count,
            "particle field initialized"
        );

        Self {
            config,
            positions,
            colors,
            rotation_x: 0.0,
            rotation_y: 0.0,
            pointer: PointerOffset::default(),
        }
    }

    /// One frame step. Advances the rotation accumulators by the fixed
    /// increments plus the pointer parallax term, then applies the float
    /// perturbation (sphere variant only).
    pub fn advance(&mut self, now: f64) {
        self.rotation_x += self.config.increment_x + self.pointer.y * self.config.pointer_damping;
        self.rotation_y += self.config.increment_y + self.pointer.x * self.config.pointer_damping;

        if self.config.float_amplitude > 0.0 {
            let t = now as f32;
            let amp = self.config.float_amplitude;
            // Touch every third particle, not all of them, to bound the
            // per-frame cost at high particle counts.
            for i in (0..self.config.count).step_by(3) {
                let base = i * 3;
                let x = self.positions[base];
                let y = self.positions[base + 1];
                self.positions[base] = x + (t + y * 0.02).sin() * amp;
                self.positions[base + 1] = y + (t + x * 0.02).cos() * amp;
            }
        }
    }

    /// Record the latest pointer offset. Last write between two frames
    /// wins; there is no queue.
    pub fn set_pointer(&mut self, pointer: PointerOffset) {
        self.pointer = pointer;
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn count(&self) -> usize {
        self.config.count
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> Option<&[f32]> {
        self.colors.as_deref()
    }

    pub fn rotation(&self) -> (f32, f32) {
        (self.rotation_x, self.rotation_y)
    }
}

/// Rotate a point around the y axis, then the x axis.
pub fn rotate_point(p: [f32; 3], rx: f32, ry: f32) -> [f32; 3] {
    let (sy, cy) = ry.sin_cos();
    let (sx, cx) = rx.sin_cos();

    let x1 = p[0] * cy + p[2] * sy;
    let z1 = -p[0] * sy + p[2] * cy;

    let y2 = p[1] * cx - z1 * sx;
    let z2 = p[1] * sx + z1 * cx;

    [x1, y2, z2]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(config: FieldConfig) -> ParticleField {
        ParticleField::with_rng(config, FieldRng::from_seed(42))
    }

    #[test]
    fn position_buffer_has_three_floats_per_particle() {
        for config in [FieldConfig::cube(), FieldConfig::sphere()] {
            let expected = config.count * 3;
            let mut f = field(config);
            assert_eq!(f.positions().len(), expected);
            for frame in 0..10 {
                f.advance(frame as f64 / 60.0);
                assert_eq!(f.positions().len(), expected);
            }
        }
    }

    #[test]
    fn sphere_sampling_stays_inside_the_shell() {
        let config = FieldConfig::sphere();
        let (r_min, r_max) = (config.radius_min, config.radius_max);
        let f = field(config);
        for chunk in f.positions().chunks_exact(3) {
            let r = (chunk[0] * chunk[0] + chunk[1] * chunk[1] + chunk[2] * chunk[2]).sqrt();
            assert!(
                r >= r_min - 1e-3 && r <= r_max + 1e-3,
                "radius {} outside [{}, {}]",
                r,
                r_min,
                r_max
            );
        }
    }

    #[test]
    fn cube_sampling_stays_inside_the_cube() {
        let config = FieldConfig::cube();
        let half = config.half_extent;
        let f = field(config);
        for &v in f.positions() {
            assert!(v >= -half && v <= half);
        }
    }

    #[test]
    fn sphere_variant_assigns_a_palette_color_per_particle() {
        let f = field(FieldConfig::sphere());
        let colors = f.colors().expect("sphere variant has colors");
        assert_eq!(colors.len(), f.count() * 3);
        for rgb in colors.chunks_exact(3) {
            assert!(palette::STAR_COLORS.contains(&[rgb[0], rgb[1], rgb[2]]));
        }
    }

    #[test]
    fn cube_variant_has_no_color_buffer() {
        assert!(field(FieldConfig::cube()).colors().is_none());
    }

    #[test]
    fn rotation_advances_by_exactly_the_increment_without_pointer() {
        let config = FieldConfig::sphere();
        let (inc_x, inc_y) = (config.increment_x, config.increment_y);
        let mut f = field(config);

        f.advance(0.0);
        assert_eq!(f.rotation(), (inc_x, inc_y));

        f.advance(1.0 / 60.0);
        assert_eq!(f.rotation(), (inc_x + inc_x, inc_y + inc_y));
    }

    #[test]
    fn pointer_at_center_adds_nothing() {
        let offset = PointerOffset::from_screen(640.0, 360.0, 1280.0, 720.0);
        assert_eq!(offset, PointerOffset { x: 0.0, y: 0.0 });

        let config = FieldConfig::cube();
        let (inc_x, inc_y) = (config.increment_x, config.increment_y);
        let mut f = field(config);
        f.set_pointer(offset);
        f.advance(0.0);
        assert_eq!(f.rotation(), (inc_x, inc_y));
    }

    #[test]
    fn pointer_at_edge_adds_the_full_damping_constant() {
        let offset = PointerOffset::from_screen(1280.0, 720.0, 1280.0, 720.0);
        assert_eq!(offset, PointerOffset { x: 1.0, y: 1.0 });

        let config = FieldConfig::cube();
        let (inc_x, inc_y, damp) = (config.increment_x, config.increment_y, config.pointer_damping);
        let mut f = field(config);
        f.set_pointer(offset);
        f.advance(0.0);
        assert_eq!(f.rotation(), (inc_x + damp, inc_y + damp));
    }

    #[test]
    fn pointer_slot_is_last_write_wins() {
        let mut f = field(FieldConfig::cube());
        // Two pointer events between frames; only the second is consumed.
        f.set_pointer(PointerOffset { x: -1.0, y: -1.0 });
        f.set_pointer(PointerOffset { x: 0.5, y: 0.0 });
        f.advance(0.0);

        let config = FieldConfig::cube();
        let expected_y = config.increment_y + 0.5 * config.pointer_damping;
        assert_eq!(f.rotation().1, expected_y);
    }

    #[test]
    fn cube_positions_never_move() {
        let mut f = field(FieldConfig::cube());
        let before = f.positions().to_vec();
        for frame in 0..5 {
            f.advance(frame as f64 / 60.0);
        }
        assert_eq!(f.positions(), &before[..]);
    }

    #[test]
    fn sphere_float_touches_only_every_third_particle() {
        let mut f = field(FieldConfig::sphere());
        let before = f.positions().to_vec();
        f.advance(0.37);

        for i in 0..f.count() {
            let base = i * 3;
            // z never moves; x/y only move for every third particle.
            assert_eq!(f.positions()[base + 2], before[base + 2]);
            if i % 3 != 0 {
                assert_eq!(f.positions()[base], before[base]);
                assert_eq!(f.positions()[base + 1], before[base + 1]);
            }
        }

        let moved = (0..f.count())
            .step_by(3)
            .filter(|i| f.positions()[i * 3] != before[i * 3])
            .count();
        assert!(moved > 0, "the float should displace the touched subset");
    }

    #[test]
    fn rotate_point_is_identity_at_zero_angles() {
        let p = [1.0, 2.0, 3.0];
        assert_eq!(rotate_point(p, 0.0, 0.0), p);
    }

    #[test]
    fn rotate_point_preserves_length() {
        let p = [3.0, -4.0, 12.0];
        let q = rotate_point(p, 0.7, -1.3);
        let len = |v: [f32; 3]| (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!((len(p) - len(q)).abs() < 1e-3);
    }

    #[test]
    fn one_frame_end_to_end_without_perturbation() {
        // 800 particles, cube layout (no colors, no float): after one
        // frame with the pointer untouched, the rotation has advanced by
        // exactly the increments and not a single position moved.
        let config = FieldConfig {
            count: 800,
            ..FieldConfig::cube()
        };
        let (inc_x, inc_y) = (config.increment_x, config.increment_y);
        let mut f = ParticleField::with_rng(config, FieldRng::from_seed(3));
        let before = f.positions().to_vec();

        f.advance(0.0);

        assert_eq!(f.rotation(), (inc_x, inc_y));
        assert_eq!(f.positions(), &before[..]);
        assert_eq!(f.positions().len(), 800 * 3);
    }

    #[test]
    fn deterministic_seed_gives_deterministic_layout() {
        let a = ParticleField::with_rng(FieldConfig::sphere(), FieldRng::from_seed(7));
        let b = ParticleField::with_rng(FieldConfig::sphere(), FieldRng::from_seed(7));
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.colors(), b.colors());
    }
}
