//! CPU point renderer: rotate, project, paint.
//!
//! One filled circle per visible particle, radius and alpha attenuated by
//! depth, painted into the layer the caller provides (the app uses egui's
//! background layer so widgets composite on top).

use eframe::egui;

use super::camera::Camera;
use super::field::{rotate_point, ParticleField};

/// Alpha of the nearest particles; fades toward zero at the far plane.
const BASE_ALPHA: f32 = 0.8;

pub fn paint(field: &ParticleField, camera: &Camera, painter: &egui::Painter, rect: egui::Rect) {
    let (rx, ry) = field.rotation();
    let point_size = field.config().point_size;
    let colors = field.colors();

    for (i, chunk) in field.positions().chunks_exact(3).enumerate() {
        let rotated = rotate_point([chunk[0], chunk[1], chunk[2]], rx, ry);
        let Some(p) = camera.project(rotated) else {
            continue;
        };

        let attenuation = 1.0 - p.depth;
        let alpha = (BASE_ALPHA * attenuation * 255.0) as u8;
        if alpha == 0 {
            continue;
        }

        let color = match colors {
            Some(rgb) => egui::Color32::from_rgba_unmultiplied(
                (rgb[i * 3] * 255.0) as u8,
                (rgb[i * 3 + 1] * 255.0) as u8,
                (rgb[i * 3 + 2] * 255.0) as u8,
                alpha,
            ),
            None => egui::Color32::from_rgba_unmultiplied(255, 255, 255, alpha),
        };

        let radius = (point_size * (0.3 + 0.7 * attenuation)).max(0.5);
        painter.circle_filled(
            rect.min + egui::vec2(p.x, p.y),
            radius,
            color,
        );
    }
}
