use eframe::egui::{Button, CentralPanel, Color32, Context, CornerRadius, Frame, RichText};

use crate::ui::app::{Screen, SparkApp};
use crate::ui::config::{UI_CONFIG, UI_TEXT};

impl SparkApp {
    pub(super) fn render_landing(&mut self, ctx: &Context) {
        let frame = Frame::new().fill(UI_CONFIG.colors.primary);
        CentralPanel::default().frame(frame).show(ctx, |ui| {
            let full_width = (ui.available_width() - 48.0).min(360.0);
            let top_space = (ui.available_height() * 0.28).max(40.0);

            ui.vertical_centered(|ui| {
                ui.add_space(top_space);

                // Brand badge
                ui.label(
                    RichText::new(format!("✨ {}", UI_TEXT.app_name))
                        .italics()
                        .size(44.0)
                        .color(Color32::WHITE),
                );
                ui.add_space(18.0);
                ui.label(
                    RichText::new(UI_TEXT.landing_tagline)
                        .size(20.0)
                        .color(Color32::WHITE),
                );

                ui.add_space(40.0);

                if ui
                    .add_sized(
                        [full_width, 44.0],
                        Button::new(
                            RichText::new(UI_TEXT.landing_get_started)
                                .color(UI_CONFIG.colors.primary),
                        )
                        .fill(Color32::WHITE)
                        .corner_radius(CornerRadius::same(22)),
                    )
                    .clicked()
                {
                    self.goto(Screen::Register);
                }
                ui.add_space(8.0);
                if ui
                    .add_sized(
                        [full_width, 44.0],
                        Button::new(RichText::new(UI_TEXT.landing_login).color(Color32::WHITE))
                            .fill(Color32::from_white_alpha(26))
                            .corner_radius(CornerRadius::same(22)),
                    )
                    .clicked()
                {
                    self.goto(Screen::Login);
                }
            });

            // Feature row pinned near the bottom
            ui.with_layout(
                eframe::egui::Layout::bottom_up(eframe::egui::Align::Center),
                |ui| {
                    ui.add_space(24.0);
                    ui.columns(3, |cols| {
                        let features = [
                            ("📍", UI_TEXT.feature_nearby),
                            ("👥", UI_TEXT.feature_match),
                            ("💬", UI_TEXT.feature_chat),
                        ];
                        for (idx, (icon, label)) in features.iter().enumerate() {
                            cols[idx].vertical_centered(|ui| {
                                ui.label(RichText::new(*icon).size(24.0).color(Color32::WHITE));
                                ui.label(
                                    RichText::new(*label)
                                        .small()
                                        .color(Color32::from_white_alpha(200)),
                                );
                            });
                        }
                    });
                },
            );
        });
    }
}
