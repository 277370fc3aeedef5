//! Decorative starfield backdrop.
//!
//! A point cloud rotating slowly behind the page content, with a parallax
//! nudge from the pointer. Two layouts exist: particles uniform in a cube
//! and particles on a colored spherical shell.

mod camera;
mod field;
mod renderer;

pub use camera::Camera;
pub use field::{FieldConfig, FieldRng, FieldVariant, ParticleField, PointerOffset};
pub use renderer::paint;

/// Fixed palette the sphere variant samples per-particle colors from,
/// linear RGB in `[0, 1]`.
pub(crate) mod palette {
    pub const STAR_COLORS: [[f32; 3]; 5] = [
        [1.0, 1.0, 1.0],
        [0.75, 0.84, 1.0],
        [1.0, 0.85, 0.63],
        [1.0, 0.62, 0.62],
        [0.63, 1.0, 0.88],
    ];
}
