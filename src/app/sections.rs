//! Page body: hero, about, projects, skills, contact, footer, plus the
//! smooth-scroll plumbing that feeds the active-link highlighter.

use eframe::egui;

use crate::content::{Project, SkillCategory};
use crate::theme::colors;
use crate::time::now_seconds;
use super::{reveal, PortfolioApp, NAV_HEIGHT};

/// Content column max width on wide viewports.
const CONTENT_MAX_WIDTH: f32 = 960.0;

/// Seconds a "Redirecting..." toast shows before the profile link opens.
const REDIRECT_DELAY_SECONDS: f64 = 1.0;

/// Seconds for a queued smooth scroll to settle.
const SCROLL_SECONDS: f32 = 0.5;

impl PortfolioApp {
    pub(crate) fn render_page(&mut self, ui: &mut egui::Ui, now: f64) {
        self.redirect_tick(ui.ctx(), now);

        let scroll_id = egui::Id::new("page_scroll");
        let mut area = egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .enable_scrolling(!self.menu_open);

        match self.scroll_target {
            Some(target) => {
                let eased = ui
                    .ctx()
                    .animate_value_with_time(scroll_id, target, SCROLL_SECONDS);
                area = area.vertical_scroll_offset(eased);
                if (eased - target).abs() < 1.0 {
                    self.scroll_target = None;
                }
            }
            None => {
                // Keep the animation value pinned to the live offset so
                // the next queued jump starts from the current position.
                ui.ctx()
                    .animate_value_with_time(scroll_id, self.scroll_offset, 0.0);
            }
        }

        let output = area.show(ui, |ui| {
            let origin = ui.cursor().top();

            self.record_section_top(ui, 0, origin);
            self.render_hero(ui);

            self.record_section_top(ui, 1, origin);
            self.render_about(ui);

            self.record_section_top(ui, 2, origin);
            self.render_projects(ui);

            self.record_section_top(ui, 3, origin);
            self.render_skills(ui);

            self.record_section_top(ui, 4, origin);
            self.render_contact(ui);

            self.render_footer(ui);
        });

        self.scroll_offset = output.state.offset.y;
    }

    /// Content-space y of the section about to be laid out, for the
    /// active-link highlighter and smooth-scroll targets.
    fn record_section_top(&mut self, ui: &egui::Ui, index: usize, origin: f32) {
        self.section_tops[index] = ui.cursor().top() - origin;
    }

    /// Centered content column.
    fn content_column(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        ui.vertical_centered(|ui| {
            ui.set_max_width(CONTENT_MAX_WIDTH.min((ui.available_width() - 32.0).max(200.0)));
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), add_contents);
        });
    }

    fn section_title(ui: &mut egui::Ui, title: &str, subtitle: &str) {
        reveal::block(ui, egui::Id::new(("section_title", title)), |ui| {
            ui.label(
                egui::RichText::new(title)
                    .size(30.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(subtitle)
                    .size(14.0)
                    .color(colors::TEXT_MUTED),
            );
        });
        ui.add_space(24.0);
    }

    fn render_hero(&mut self, ui: &mut egui::Ui) {
        let screen_height = ui.ctx().screen_rect().height();
        ui.add_space(((screen_height - NAV_HEIGHT) * 0.28).max(40.0));

        let mut scroll_to = None;
        Self::content_column(ui, |ui| {
            reveal::block(ui, egui::Id::new("hero"), |ui| {
                ui.label(
                    egui::RichText::new(&self.content.owner_name)
                        .size(48.0)
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(&self.content.tagline)
                        .size(18.0)
                        .color(colors::TEXT_SECONDARY),
                );
                ui.add_space(24.0);

                ui.horizontal(|ui| {
                    let view_work = egui::Button::new(
                        egui::RichText::new("View Projects").color(colors::TEXT_PRIMARY),
                    )
                    .fill(colors::ACCENT_DIM)
                    .corner_radius(6.0);
                    if ui.add(view_work).clicked() {
                        scroll_to = Some(2);
                    }

                    let get_in_touch = egui::Button::new(
                        egui::RichText::new("Get in Touch").color(colors::TEXT_SECONDARY),
                    )
                    .stroke(egui::Stroke::new(1.0, colors::BORDER))
                    .corner_radius(6.0);
                    if ui.add(get_in_touch).clicked() {
                        scroll_to = Some(4);
                    }
                });
            });
        });
        if let Some(index) = scroll_to {
            self.scroll_to_section(index);
        }

        ui.add_space((screen_height * 0.30).max(40.0));
    }

    fn render_about(&mut self, ui: &mut egui::Ui) {
        Self::content_column(ui, |ui| {
            Self::section_title(ui, "About", "Who I am and what I do");
            reveal::block(ui, egui::Id::new("about_body"), |ui| {
                ui.label(
                    egui::RichText::new(&self.content.about)
                        .size(15.0)
                        .color(colors::TEXT_SECONDARY),
                );
            });
        });
        ui.add_space(96.0);
    }

    fn render_projects(&mut self, ui: &mut egui::Ui) {
        let mut redirect = None;
        let projects = self.content.projects.clone();

        Self::content_column(ui, |ui| {
            Self::section_title(ui, "Projects", "Selected work");

            let columns = if ui.available_width() > 760.0 { 3 } else { 1 };
            for (row_index, row) in projects.chunks(columns).enumerate() {
                ui.columns(columns, |cols| {
                    for (col_index, project) in row.iter().enumerate() {
                        let id = egui::Id::new(("project", row_index, col_index));
                        reveal::block(&mut cols[col_index], id, |ui| {
                            if let Some(url) = project_card(ui, project) {
                                redirect = Some(url);
                            }
                        });
                    }
                });
                ui.add_space(12.0);
            }
        });
        ui.add_space(96.0);

        if let Some(url) = redirect {
            self.queue_redirect(url, "Opening project...");
        }
    }

    fn render_skills(&mut self, ui: &mut egui::Ui) {
        let skills = self.content.skills.clone();

        Self::content_column(ui, |ui| {
            Self::section_title(ui, "Skills", "Tools I reach for");

            let columns = if ui.available_width() > 760.0 {
                skills.len().clamp(1, 3)
            } else {
                1
            };
            for (row_index, row) in skills.chunks(columns).enumerate() {
                ui.columns(columns, |cols| {
                    for (col_index, category) in row.iter().enumerate() {
                        let id = egui::Id::new(("skills", row_index, col_index));
                        let t = {
                            let ui = &mut cols[col_index];
                            let screen = ui.ctx().screen_rect();
                            let play = reveal::should_play(
                                ui.cursor().top(),
                                screen.top(),
                                screen.height(),
                            );
                            reveal::opacity(ui.ctx(), id, play)
                        };
                        skill_category_card(&mut cols[col_index], category, t);
                    }
                });
                ui.add_space(12.0);
            }
        });
        ui.add_space(96.0);
    }

    fn render_contact(&mut self, ui: &mut egui::Ui) {
        let email = self.content.email.clone();
        let github = self.content.github_url.clone();
        let linkedin = self.content.linkedin_url.clone();

        enum Action {
            CopyEmail,
            OpenGithub,
            OpenLinkedin,
        }
        let mut action = None;

        Self::content_column(ui, |ui| {
            Self::section_title(ui, "Contact", "Say hello");

            let stacked = ui.available_width() < 700.0;
            let columns = if stacked { 1 } else { 2 };
            ui.columns(columns, |cols| {
                {
                    let ui = &mut cols[0];
                    reveal::block(ui, egui::Id::new("contact_methods"), |ui| {
                        if contact_method(ui, "Email", &email, "copy").clicked() {
                            action = Some(Action::CopyEmail);
                        }
                        ui.add_space(8.0);
                        if contact_method(ui, "GitHub", &github, "open").clicked() {
                            action = Some(Action::OpenGithub);
                        }
                        ui.add_space(8.0);
                        if contact_method(ui, "LinkedIn", &linkedin, "open").clicked() {
                            action = Some(Action::OpenLinkedin);
                        }
                    });
                }

                let form_col = if stacked { 0 } else { 1 };
                if stacked {
                    cols[0].add_space(16.0);
                }
                let ui = &mut cols[form_col];
                reveal::block(ui, egui::Id::new("contact_form"), |ui| {
                    egui::Frame::new()
                        .fill(colors::BG_ELEVATED.gamma_multiply(0.9))
                        .stroke(egui::Stroke::new(1.0, colors::BORDER))
                        .corner_radius(8.0)
                        .inner_margin(16.0)
                        .show(ui, |ui| {
                            self.render_contact_form(ui);
                        });
                });
            });
        });
        ui.add_space(64.0);

        match action {
            Some(Action::CopyEmail) => {
                ui.ctx().copy_text(email);
                self.notifications
                    .push("Email copied to clipboard!", now_seconds());
            }
            Some(Action::OpenGithub) => self.queue_redirect(github, "Redirecting to GitHub..."),
            Some(Action::OpenLinkedin) => {
                self.queue_redirect(linkedin, "Redirecting to LinkedIn...")
            }
            None => {}
        }
    }

    fn render_footer(&mut self, ui: &mut egui::Ui) {
        ui.separator();
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "© {} — built with Rust and a lot of tiny circles",
                    self.content.owner_name
                ))
                .size(12.0)
                .color(colors::TEXT_MUTED),
            );
        });
        ui.add_space(16.0);
    }

    /// Toast first, open the URL shortly after.
    pub(crate) fn queue_redirect(&mut self, url: String, toast: &str) {
        let now = now_seconds();
        self.notifications.push(toast, now);
        self.pending_redirect = Some((url, now));
    }

    pub(crate) fn redirect_tick(&mut self, ctx: &egui::Context, now: f64) {
        let Some((_, queued_at)) = &self.pending_redirect else {
            return;
        };
        if now - queued_at < REDIRECT_DELAY_SECONDS {
            return;
        }
        if let Some((url, _)) = self.pending_redirect.take() {
            ctx.open_url(egui::OpenUrl::new_tab(url));
        }
    }
}

/// One project card. Returns the link URL when the visit button was
/// clicked.
fn project_card(ui: &mut egui::Ui, project: &Project) -> Option<String> {
    let mut clicked_url = None;
    egui::Frame::new()
        .fill(colors::BG_ELEVATED.gamma_multiply(0.9))
        .stroke(egui::Stroke::new(1.0, colors::BORDER))
        .corner_radius(8.0)
        .inner_margin(14.0)
        .show(ui, |ui| {
            ui.set_min_height(130.0);
            ui.label(
                egui::RichText::new(&project.title)
                    .size(17.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(&project.description)
                    .size(13.0)
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(8.0);

            ui.horizontal_wrapped(|ui| {
                for tech in &project.tech {
                    egui::Frame::new()
                        .stroke(egui::Stroke::new(1.0, colors::ACCENT_DIM))
                        .corner_radius(10.0)
                        .inner_margin(egui::Margin::symmetric(8, 2))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(tech)
                                    .size(11.0)
                                    .color(colors::TEXT_SECONDARY),
                            );
                        });
                }
            });

            if let Some(link) = &project.link {
                ui.add_space(8.0);
                if ui
                    .link(egui::RichText::new("Visit ↗").size(13.0).color(colors::ACCENT))
                    .clicked()
                {
                    clicked_url = Some(link.clone());
                }
            }
        });
    clicked_url
}

/// One skills category with its animated level bars; `t` is the reveal
/// progress that scales every bar's fill.
fn skill_category_card(ui: &mut egui::Ui, category: &SkillCategory, t: f32) {
    ui.scope(|ui| {
        ui.set_opacity(t);
        egui::Frame::new()
            .fill(colors::BG_ELEVATED.gamma_multiply(0.9))
            .stroke(egui::Stroke::new(1.0, colors::BORDER))
            .corner_radius(8.0)
            .inner_margin(14.0)
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(&category.name)
                        .size(15.0)
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.add_space(8.0);

                for skill in &category.skills {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&skill.name)
                                .size(13.0)
                                .color(colors::TEXT_SECONDARY),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(format!("{}%", skill.level))
                                        .size(11.0)
                                        .color(colors::TEXT_MUTED),
                                );
                            },
                        );
                    });
                    skill_bar(ui, skill.level, t);
                    ui.add_space(6.0);
                }
            });
    });
}

/// The animated fill bar: width grows with the reveal progress.
fn skill_bar(ui: &mut egui::Ui, level: u8, t: f32) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 6.0),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(rect, 3.0, colors::BORDER);

    let fill = rect.width() * (level as f32 / 100.0) * t.clamp(0.0, 1.0);
    if fill > 0.5 {
        painter.rect_filled(
            egui::Rect::from_min_size(rect.min, egui::vec2(fill, rect.height())),
            3.0,
            colors::ACCENT,
        );
    }
}

/// A clickable contact method row (email / profile link).
fn contact_method(ui: &mut egui::Ui, label: &str, value: &str, hint: &str) -> egui::Response {
    let response = egui::Frame::new()
        .fill(colors::BG_ELEVATED.gamma_multiply(0.9))
        .stroke(egui::Stroke::new(1.0, colors::BORDER))
        .corner_radius(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(
                egui::RichText::new(label)
                    .size(12.0)
                    .color(colors::TEXT_MUTED),
            );
            ui.label(
                egui::RichText::new(value)
                    .size(14.0)
                    .color(colors::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(hint)
                    .size(11.0)
                    .color(colors::ACCENT_DIM),
            );
        })
        .response;

    let response = response.interact(egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}
