//! Scroll-triggered reveal animations.
//!
//! A block plays its reveal when its top rises above a threshold line in
//! the viewport and reverses when it drops back below, like a scroll
//! trigger with play/reverse toggle actions. Easing and timing belong to
//! egui's animation manager; this module only decides the target state.

use eframe::egui;

/// Fraction of the viewport height where the trigger line sits. A block
/// starts revealing once its top is above `top + height * 0.8`.
pub(crate) const REVEAL_START_FRACTION: f32 = 0.8;

/// Seconds for the fade/slide to complete.
pub(crate) const REVEAL_SECONDS: f32 = 0.8;

/// Pixels a block slides up while revealing.
pub(crate) const REVEAL_SLIDE: f32 = 40.0;

/// Whether a block whose top is at `block_top` (screen coords) should be
/// in the revealed state for the given viewport.
pub(crate) fn should_play(block_top: f32, viewport_top: f32, viewport_height: f32) -> bool {
    block_top < viewport_top + viewport_height * REVEAL_START_FRACTION
}

/// Animate a block's reveal: returns the current opacity in `[0, 1]`.
/// Call once per frame per block; `id` keys the animation.
pub(crate) fn opacity(ctx: &egui::Context, id: egui::Id, play: bool) -> f32 {
    ctx.animate_bool_with_time(id, play, REVEAL_SECONDS)
}

/// Render `add_contents` as a revealable block: fades in and slides up
/// as its top crosses the trigger line. Each block keys its own
/// animation, so grids stagger naturally as rows cross the line.
pub(crate) fn block(
    ui: &mut egui::Ui,
    id: egui::Id,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    let screen = ui.ctx().screen_rect();
    let play = should_play(ui.cursor().top(), screen.top(), screen.height());
    let t = opacity(ui.ctx(), id, play);

    ui.add_space((1.0 - t) * REVEAL_SLIDE);
    ui.scope(|ui| {
        ui.set_opacity(t);
        add_contents(ui);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_below_the_trigger_line_stays_hidden() {
        // Viewport 0..720; trigger line at 576.
        assert!(!should_play(600.0, 0.0, 720.0));
    }

    #[test]
    fn block_above_the_trigger_line_plays() {
        assert!(should_play(500.0, 0.0, 720.0));
    }

    #[test]
    fn leaving_the_viewport_again_reverses() {
        // The same predicate drives both directions: once the block's top
        // is pushed back under the line, the reveal target flips off.
        let (top, height) = (0.0, 720.0);
        assert!(should_play(575.0, top, height));
        assert!(!should_play(577.0, top, height));
    }

    #[test]
    fn trigger_respects_viewport_origin() {
        // Same block position, viewport starting lower on screen.
        assert!(should_play(600.0, 100.0, 720.0));
    }
}
