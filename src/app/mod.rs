//! The portfolio page: starfield backdrop, navigation, content sections,
//! contact form, toasts. Runs on both native and WASM.

mod contact;
mod nav;
mod notify;
mod reveal;
mod sections;

use eframe::egui;
use tracing::info;

use crate::content::SiteContent;
use crate::starfield::{Camera, FieldConfig, FieldVariant, ParticleField, PointerOffset};
use crate::theme::colors;
use crate::theme::portfolio_visuals;
use crate::time::now_seconds;

/// Height of the fixed navigation bar.
pub(crate) const NAV_HEIGHT: f32 = 56.0;
/// Below this viewport width the nav collapses behind the hamburger.
pub(crate) const MOBILE_BREAKPOINT: f32 = 700.0;
/// Probe offset the active-link highlighter adds to the scroll position,
/// so a section counts as current slightly before it reaches the top.
pub(crate) const SCROLL_PROBE_OFFSET: f32 = 100.0;

/// Page sections, in scroll order.
pub(crate) const SECTIONS: &[&str] = &["Home", "About", "Projects", "Skills", "Contact"];

pub struct PortfolioApp {
    pub(crate) content: SiteContent,

    // Starfield backdrop
    field: ParticleField,
    camera: Camera,

    // Navigation + scrolling
    pub(crate) menu_open: bool,
    pub(crate) scroll_offset: f32,
    pub(crate) scroll_target: Option<f32>,
    /// Content-space y of each section's top, recorded during layout of
    /// the previous frame.
    pub(crate) section_tops: Vec<f32>,
    pub(crate) active_section: usize,

    pub(crate) contact_form: contact::ContactForm,
    pub(crate) notifications: notify::Notifications,
    /// External profile link queued behind its "Redirecting..." toast.
    pub(crate) pending_redirect: Option<(String, f64)>,

    /// Eased trailing position of the decorative cursor ring.
    cursor_follower: Option<egui::Pos2>,
}

/// Pick the starfield variant for this run. Native reads the
/// `STARFIELD_VARIANT` env var; the browser build reads
/// `window.__starfield_variant`. Anything unrecognized means the default.
fn resolve_variant() -> FieldVariant {
    #[cfg(not(target_arch = "wasm32"))]
    let requested = std::env::var("STARFIELD_VARIANT").ok();
    #[cfg(target_arch = "wasm32")]
    let requested = js_sys::eval("window.__starfield_variant")
        .ok()
        .and_then(|v| v.as_string());

    match requested.as_deref() {
        Some("sphere") => FieldVariant::Sphere,
        Some("cube") => FieldVariant::Cube,
        _ => FieldVariant::default(),
    }
}

impl PortfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(portfolio_visuals());

        let content = SiteContent::load();
        let config = FieldConfig::for_variant(resolve_variant());
        info!(variant = ?config.variant, count = config.count, "starting portfolio app");

        let camera = Camera::new(
            config.fov_y_deg,
            config.near,
            config.far,
            config.camera_distance,
        );
        let field = ParticleField::new(config);

        Self {
            content,
            field,
            camera,
            menu_open: false,
            scroll_offset: 0.0,
            scroll_target: None,
            section_tops: vec![0.0; SECTIONS.len()],
            active_section: 0,
            contact_form: contact::ContactForm::default(),
            notifications: notify::Notifications::default(),
            pending_redirect: None,
            cursor_follower: None,
        }
    }

    /// Queue a smooth scroll to a section. Also closes the mobile menu,
    /// matching the tap-to-navigate flow.
    pub(crate) fn scroll_to_section(&mut self, index: usize) {
        let top = self.section_tops.get(index).copied().unwrap_or(0.0);
        self.scroll_target = Some((top - NAV_HEIGHT * 0.5).max(0.0));
        self.menu_open = false;
    }

    /// Paint the starfield into the background layer, beneath the
    /// transparent panels.
    fn paint_backdrop(&mut self, ctx: &egui::Context, now: f64) {
        let screen = ctx.screen_rect();
        self.camera.set_viewport(screen.width(), screen.height());

        if let Some(pos) = ctx.input(|i| i.pointer.latest_pos()) {
            self.field.set_pointer(PointerOffset::from_screen(
                pos.x,
                pos.y,
                screen.width(),
                screen.height(),
            ));
        }

        self.field.advance(now);

        let painter = ctx.layer_painter(egui::LayerId::background());
        painter.rect_filled(screen, 0.0, colors::BG_PRIMARY);
        crate::starfield::paint(&self.field, &self.camera, &painter, screen);
    }

    /// Decorative cursor ring trailing the pointer.
    fn paint_cursor_follower(&mut self, ctx: &egui::Context) {
        let Some(pos) = ctx.input(|i| i.pointer.latest_pos()) else {
            return;
        };
        let follower = self.cursor_follower.get_or_insert(pos);
        *follower = follower.lerp(pos, 0.15);

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("cursor_follower"),
        ));
        painter.circle_stroke(*follower, 14.0, egui::Stroke::new(1.5, colors::ACCENT));
        painter.circle_filled(pos, 2.5, colors::ACCENT);
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The starfield runs for the lifetime of the page.
        ctx.request_repaint();

        let now = now_seconds();

        self.paint_backdrop(ctx, now);

        // Pending contact submission (the short "Sending..." delay).
        self.contact_tick(ctx, now);

        egui::TopBottomPanel::top("nav")
            .exact_height(NAV_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(colors::BG_PRIMARY.gamma_multiply(0.92))
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                self.render_nav(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                self.render_page(ui, now);
            });

        if self.menu_open {
            self.render_mobile_menu(ctx);
        }

        self.notifications.ui(ctx, now);
        self.paint_cursor_follower(ctx);
    }
}
