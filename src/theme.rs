//! Dark space theme: deep navy background, white text, violet accent.

use egui::Color32;

pub mod colors {
    use super::Color32;

    // === Backgrounds (deep navy, matches the starfield clear color) ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(10, 10, 20);      // #0A0A14
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(18, 18, 32);     // #121220 - cards
    pub const BG_HOVER: Color32 = Color32::from_rgb(28, 28, 48);        // #1C1C30

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(245, 245, 250);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 166, 184);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(90, 96, 122);

    // === Accent (links, active nav item, buttons, skill bars) ===
    pub const ACCENT: Color32 = Color32::from_rgb(108, 99, 255);        // #6C63FF
    pub const ACCENT_DIM: Color32 = Color32::from_rgb(64, 60, 140);

    // === Lines & Borders ===
    pub const BORDER: Color32 = Color32::from_rgb(40, 42, 60);
}

/// egui Visuals for the portfolio page.
pub fn portfolio_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_ELEVATED;
    visuals.extreme_bg_color = BG_ELEVATED;
    visuals.faint_bg_color = BG_ELEVATED;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_PRIMARY;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    visuals.widgets.inactive.bg_fill = BG_ELEVATED;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals.widgets.inactive.weak_bg_fill = BG_ELEVATED;

    visuals.widgets.hovered.bg_fill = BG_HOVER;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACCENT_DIM);
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;

    visuals.widgets.active.bg_fill = BG_HOVER;
    visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, ACCENT);
    visuals.widgets.active.weak_bg_fill = BG_HOVER;

    visuals.selection.bg_fill = ACCENT_DIM;
    visuals.selection.stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.hyperlink_color = ACCENT;

    // Flat design - the starfield provides the depth.
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
