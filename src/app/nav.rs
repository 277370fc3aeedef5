//! Navigation bar: brand, section links, hamburger menu, active-link
//! highlight driven by the scroll position.

use eframe::egui;

use crate::theme::colors;
use super::{PortfolioApp, MOBILE_BREAKPOINT, SCROLL_PROBE_OFFSET, SECTIONS};

/// Resolve which section contains the given scroll position. The probe
/// offset makes a section current slightly before its top reaches the
/// top of the viewport.
pub(crate) fn active_section(tops: &[f32], scroll_offset: f32) -> usize {
    let probe = scroll_offset + SCROLL_PROBE_OFFSET;
    let mut active = 0;
    for (i, &top) in tops.iter().enumerate() {
        if probe >= top {
            active = i;
        }
    }
    active
}

impl PortfolioApp {
    pub(crate) fn render_nav(&mut self, ui: &mut egui::Ui) {
        self.active_section = active_section(&self.section_tops, self.scroll_offset);

        let compact = ui.ctx().screen_rect().width() < MOBILE_BREAKPOINT;

        ui.horizontal_centered(|ui| {
            // Brand scrolls back to the top.
            let brand = ui.add(
                egui::Label::new(
                    egui::RichText::new(&self.content.owner_name)
                        .size(18.0)
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                )
                .sense(egui::Sense::click()),
            );
            if brand.clicked() {
                self.scroll_to_section(0);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if compact {
                    let icon = if self.menu_open { "✕" } else { "☰" };
                    if ui
                        .button(egui::RichText::new(icon).size(18.0))
                        .clicked()
                    {
                        self.menu_open = !self.menu_open;
                    }
                } else {
                    // Right-to-left layout, so iterate reversed to keep
                    // the visual scroll order.
                    for (i, name) in SECTIONS.iter().enumerate().rev() {
                        self.nav_link(ui, i, name);
                        ui.add_space(8.0);
                    }
                }
            });
        });
    }

    fn nav_link(&mut self, ui: &mut egui::Ui, index: usize, name: &str) {
        let is_active = index == self.active_section;
        let color = if is_active {
            colors::ACCENT
        } else {
            colors::TEXT_SECONDARY
        };

        let response = ui.add(
            egui::Label::new(egui::RichText::new(name).size(14.0).color(color))
                .sense(egui::Sense::click()),
        );

        if is_active {
            let rect = response.rect;
            ui.painter().hline(
                rect.x_range(),
                rect.bottom() + 3.0,
                egui::Stroke::new(2.0, colors::ACCENT),
            );
        }

        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        if response.clicked() {
            self.scroll_to_section(index);
        }
    }

    /// Full-screen overlay menu for narrow viewports. Page scrolling is
    /// disabled while it is open.
    pub(crate) fn render_mobile_menu(&mut self, ctx: &egui::Context) {
        egui::Area::new(egui::Id::new("mobile_menu"))
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let screen = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen,
                    0.0,
                    colors::BG_PRIMARY.gamma_multiply(0.97),
                );

                ui.allocate_ui(screen.size() * egui::vec2(0.8, 0.0), |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(24.0);
                        for (i, name) in SECTIONS.iter().enumerate() {
                            let color = if i == self.active_section {
                                colors::ACCENT
                            } else {
                                colors::TEXT_PRIMARY
                            };
                            let response = ui.add(
                                egui::Label::new(
                                    egui::RichText::new(*name).size(26.0).color(color),
                                )
                                .sense(egui::Sense::click()),
                            );
                            if response.clicked() {
                                self.scroll_to_section(i);
                            }
                            ui.add_space(18.0);
                        }
                    });
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPS: [f32; 5] = [0.0, 600.0, 1400.0, 2200.0, 3000.0];

    #[test]
    fn top_of_page_highlights_the_first_section() {
        assert_eq!(active_section(&TOPS, 0.0), 0);
    }

    #[test]
    fn probe_offset_activates_a_section_early() {
        // 520 + 100 probe crosses the 600 boundary.
        assert_eq!(active_section(&TOPS, 480.0), 0);
        assert_eq!(active_section(&TOPS, 520.0), 1);
    }

    #[test]
    fn scrolled_to_bottom_highlights_the_last_section() {
        assert_eq!(active_section(&TOPS, 5000.0), TOPS.len() - 1);
    }

    #[test]
    fn exact_boundary_belongs_to_the_entered_section() {
        assert_eq!(active_section(&TOPS, 1300.0), 2);
    }

    #[test]
    fn empty_tops_defaults_to_zero() {
        assert_eq!(active_section(&[], 123.0), 0);
    }
}
