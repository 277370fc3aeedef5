//! Toast notifications, shown for a few seconds in the bottom-right
//! corner.

use eframe::egui;
use tracing::debug;

use crate::theme::colors;

/// How long a toast stays on screen.
pub(crate) const TOAST_SECONDS: f64 = 3.0;

pub(crate) struct Toast {
    pub message: String,
    pub born: f64,
}

#[derive(Default)]
pub(crate) struct Notifications {
    toasts: Vec<Toast>,
}

impl Notifications {
    pub fn push(&mut self, message: impl Into<String>, now: f64) {
        let message = message.into();
        debug!(%message, "toast");
        self.toasts.push(Toast { message, born: now });
    }

    /// Drop toasts older than [`TOAST_SECONDS`].
    pub fn prune(&mut self, now: f64) {
        self.toasts.retain(|t| now - t.born < TOAST_SECONDS);
    }

    #[allow(dead_code)]
    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn ui(&mut self, ctx: &egui::Context, now: f64) {
        self.prune(now);
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    egui::Frame::new()
                        .fill(colors::BG_ELEVATED)
                        .stroke(egui::Stroke::new(1.0, colors::ACCENT_DIM))
                        .corner_radius(6.0)
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&toast.message)
                                    .color(colors::TEXT_PRIMARY)
                                    .size(13.0),
                            );
                        });
                    ui.add_space(6.0);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_three_seconds() {
        let mut n = Notifications::default();
        n.push("copied", 0.0);
        n.prune(2.9);
        assert_eq!(n.active().len(), 1);
        n.prune(3.0);
        assert!(n.active().is_empty());
    }

    #[test]
    fn newer_toasts_outlive_older_ones() {
        let mut n = Notifications::default();
        n.push("first", 0.0);
        n.push("second", 2.0);
        n.prune(4.0);
        assert_eq!(n.active().len(), 1);
        assert_eq!(n.active()[0].message, "second");
    }

    #[test]
    fn toasts_keep_insertion_order() {
        let mut n = Notifications::default();
        n.push("a", 0.0);
        n.push("b", 0.1);
        let messages: Vec<_> = n.active().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["a", "b"]);
    }
}
