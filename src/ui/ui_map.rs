use eframe::egui::{
    Align2, Button, CentralPanel, Color32, Context, CornerRadius, Frame, Margin, Rect, RichText,
    Sense, Shadow, Stroke, Window, pos2, vec2,
};

use crate::domain::{Candidate, Interest};
use crate::ui::app::SparkApp;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{FilterEvent, FilterPanel, Panel};
use crate::ui::utils::draw_avatar;

impl SparkApp {
    pub(super) fn render_map_tab(&mut self, ctx: &Context) {
        let frame = Frame::new().fill(UI_CONFIG.colors.map_fill);
        CentralPanel::default().frame(frame).show(ctx, |ui| {
            let rect = ui.max_rect();
            let painter = ui.painter_at(rect);

            // Simplified map background: streets and park blobs
            let street = Stroke::new(2.0, UI_CONFIG.colors.map_street);
            for frac in [0.30, 0.60] {
                let y = rect.top() + rect.height() * frac;
                painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], street);
            }
            for frac in [0.40, 0.70] {
                let x = rect.left() + rect.width() * frac;
                painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], street);
            }
            painter.circle_filled(
                pos2(
                    rect.left() + rect.width() * 0.18,
                    rect.top() + rect.height() * 0.20,
                ),
                56.0,
                UI_CONFIG.colors.map_park,
            );
            painter.circle_filled(
                pos2(
                    rect.left() + rect.width() * 0.80,
                    rect.top() + rect.height() * 0.75,
                ),
                72.0,
                UI_CONFIG.colors.map_park,
            );

            // Viewer marker at the center with two pulsing radius rings
            let t = ui.input(|i| i.time) as f32;
            let center = rect.center();
            let base = rect.width().min(rect.height());
            for (frac, speed, phase) in [(0.28, 1.0, 0.0), (0.21, 1.2, 0.5)] {
                let scale = 1.0 + 0.06 * (t * speed + phase).sin();
                painter.circle(
                    center,
                    base * frac * scale,
                    Color32::from_rgba_premultiplied(155, 143, 230, 10),
                    Stroke::new(2.0, Color32::from_rgba_premultiplied(155, 143, 230, 70)),
                );
            }
            painter.circle_filled(center, 9.0, UI_CONFIG.colors.primary);
            painter.circle_stroke(center, 9.0, Stroke::new(3.0, Color32::WHITE));

            // Candidate markers, re-filtered every frame
            let visible: Vec<Candidate> = self
                .query
                .visible(&self.candidates)
                .into_iter()
                .cloned()
                .collect();
            for candidate in &visible {
                let pos = pos2(
                    rect.left() + rect.width() * candidate.map_pos.x / 100.0,
                    rect.top() + rect.height() * candidate.map_pos.y / 100.0,
                );
                let pulse = 3.0 * (t * 1.6 + candidate.id.0 as f32).sin().max(0.0);
                painter.circle_filled(
                    pos,
                    UI_CONFIG.marker_radius + 4.0 + pulse,
                    Color32::from_rgba_premultiplied(230, 127, 185, 28),
                );
                draw_avatar(
                    &painter,
                    pos,
                    UI_CONFIG.marker_radius,
                    &candidate.avatar_seed,
                    candidate.first_initial(),
                );

                let hit = Rect::from_center_size(pos, vec2(48.0, 48.0));
                let response = ui.interact(hit, ui.id().with(("marker", candidate.id.0)), Sense::click());
                if response.clicked() {
                    self.selected_candidate = Some(candidate.id);
                }
            }

            // Pulse animation never settles, so keep painting
            ctx.request_repaint();

            // Floating controls
            let bell_rect = Rect::from_center_size(
                pos2(rect.right() - 44.0, rect.top() + 40.0),
                vec2(44.0, 40.0),
            );
            let pending = self.ping_inbox.count();
            let bell_label = if pending > 0 {
                format!("🔔 {pending}")
            } else {
                "🔔".to_string()
            };
            if ui
                .put(
                    bell_rect,
                    Button::new(bell_label)
                        .fill(UI_CONFIG.colors.panel)
                        .corner_radius(CornerRadius::same(20)),
                )
                .clicked()
            {
                self.show_ping_requests = true;
            }

            let filter_rect = Rect::from_center_size(
                pos2(rect.left() + 46.0, rect.bottom() - 46.0),
                vec2(48.0, 48.0),
            );
            if ui
                .put(
                    filter_rect,
                    Button::new("🎚")
                        .fill(UI_CONFIG.colors.panel)
                        .corner_radius(CornerRadius::same(24)),
                )
                .clicked()
            {
                self.filter_open = true;
            }

            // GPS recenter is a mock: the viewer is always centered
            let gps_rect = Rect::from_center_size(
                pos2(rect.right() - 46.0, rect.bottom() - 46.0),
                vec2(48.0, 48.0),
            );
            let _ = ui.put(
                gps_rect,
                Button::new("🧭")
                    .fill(UI_CONFIG.colors.panel)
                    .corner_radius(CornerRadius::same(24)),
            );
        });

        self.render_user_card(ctx);
        self.render_filter_sheet(ctx);
    }

    /// Bottom card for the tapped candidate.
    fn render_user_card(&mut self, ctx: &Context) {
        let Some(selected) = self.selected_candidate else {
            return;
        };
        let Some(candidate) = self
            .candidates
            .iter()
            .find(|c| c.id == selected)
            .cloned()
        else {
            self.selected_candidate = None;
            return;
        };

        let frame = Frame::new()
            .fill(UI_CONFIG.colors.panel)
            .corner_radius(CornerRadius::same(18))
            .inner_margin(Margin::symmetric(18, 14))
            .shadow(Shadow {
                offset: [0, -2],
                blur: 16,
                spread: 0,
                color: Color32::from_black_alpha(50),
            });
        Window::new("user_card")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(Align2::CENTER_BOTTOM, vec2(0.0, -12.0))
            .default_width(340.0)
            .frame(frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(vec2(52.0, 52.0), Sense::hover());
                    draw_avatar(
                        ui.painter(),
                        rect.center(),
                        26.0,
                        &candidate.avatar_seed,
                        candidate.first_initial(),
                    );
                    ui.vertical(|ui| {
                        ui.label_header(format!("{}, {}", candidate.name, candidate.age));
                        ui.label_subdued(format!(
                            "📍 {}{}",
                            candidate.distance_ft, UI_TEXT.card_feet_away_suffix
                        ));
                    });
                    ui.with_layout(
                        eframe::egui::Layout::right_to_left(eframe::egui::Align::Min),
                        |ui| {
                            if ui.button("✕").clicked() {
                                self.selected_candidate = None;
                            }
                        },
                    );
                });

                if !candidate.interests.is_empty() {
                    ui.add_space(8.0);
                    ui.label_subheader(UI_TEXT.card_interests_label);
                    ui.horizontal_wrapped(|ui| {
                        for interest in &candidate.interests {
                            let _ = ui.chip(&interest.to_string(), false);
                        }
                    });
                }

                ui.add_space(10.0);
                let label = if self.is_pinging() {
                    UI_TEXT.card_sending_ping
                } else {
                    UI_TEXT.card_send_ping
                };
                let clicked = ui
                    .add_enabled(
                        !self.is_pinging(),
                        Button::new(RichText::new(format!("✨ {label}")).color(Color32::WHITE))
                            .fill(UI_CONFIG.colors.accent)
                            .corner_radius(CornerRadius::same(22))
                            .min_size(vec2(ui.available_width(), 42.0)),
                    )
                    .clicked();
                if clicked {
                    self.start_ping(candidate.id);
                    self.selected_candidate = None;
                }
            });
    }

    /// The bottom filter sheet. Edits apply immediately; Apply just closes.
    fn render_filter_sheet(&mut self, ctx: &Context) {
        if !self.filter_open {
            return;
        }
        let viewer_interests: Vec<Interest> = self.profile.interests.iter().copied().collect();

        let frame = Frame::new()
            .fill(UI_CONFIG.colors.panel)
            .corner_radius(CornerRadius::same(18))
            .inner_margin(Margin::symmetric(18, 14));
        Window::new("filter_sheet")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(Align2::CENTER_BOTTOM, vec2(0.0, -12.0))
            .default_width(340.0)
            .frame(frame)
            .show(ctx, |ui| {
                let mut panel = FilterPanel::new(&self.query, viewer_interests);
                for event in panel.render(ui) {
                    match event {
                        FilterEvent::Radius(radius_ft) => self.query.set_radius(radius_ft),
                        FilterEvent::Toggled(interest) => self.query.toggle_interest(interest),
                        FilterEvent::Cleared => self.query.clear_interests(),
                        FilterEvent::Applied => self.filter_open = false,
                    }
                }
            });
    }
}
