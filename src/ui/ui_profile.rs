use eframe::egui::{
    Button, CentralPanel, Color32, Context, CornerRadius, Frame, Margin, RichText, ScrollArea,
    Sense, TextEdit, Ui, Window, vec2,
};
use strum::IntoEnumIterator;

use crate::domain::Interest;
use crate::models::ProfileEdit;
use crate::ui::app::SparkApp;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::draw_avatar;

impl SparkApp {
    pub(super) fn render_profile_tab(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().id_salt("profile_scroll").show(ui, |ui| {
                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    ui.label_header(UI_TEXT.profile_heading);
                    ui.with_layout(
                        eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                        |ui| {
                            if ui.button(format!("✏ {}", UI_TEXT.profile_edit)).clicked() {
                                self.profile_edit = Some(ProfileEdit::from_profile(&self.profile));
                            }
                        },
                    );
                });
                ui.add_space(10.0);

                // Profile card
                Frame::new()
                    .fill(UI_CONFIG.colors.panel)
                    .corner_radius(CornerRadius::same(18))
                    .inner_margin(Margin::symmetric(18, 16))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width().min(360.0));
                        ui.vertical_centered(|ui| {
                            let (rect, _) =
                                ui.allocate_exact_size(vec2(88.0, 88.0), Sense::hover());
                            draw_avatar(
                                ui.painter(),
                                rect.center(),
                                44.0,
                                &self.profile.avatar_seed,
                                self.profile.first_initial(),
                            );
                            ui.painter().circle_filled(
                                rect.right_bottom() - vec2(12.0, 12.0),
                                8.0,
                                UI_CONFIG.colors.mint,
                            );
                            ui.add_space(6.0);
                            ui.label_header(&self.profile.name);
                            ui.label_subdued(&self.profile.bio);
                        });

                        ui.add_space(12.0);

                        // Stats
                        ui.columns(3, |cols| {
                            let stats = [
                                ("✉", UI_TEXT.profile_stat_sent, self.profile.stats.pings_sent),
                                (
                                    "💬",
                                    UI_TEXT.profile_stat_received,
                                    self.profile.stats.pings_received,
                                ),
                                (
                                    "🤝",
                                    UI_TEXT.profile_stat_friends,
                                    self.profile.stats.connections,
                                ),
                            ];
                            for (idx, (icon, label, value)) in stats.iter().enumerate() {
                                cols[idx].vertical_centered(|ui| {
                                    ui.label(
                                        RichText::new(*icon).color(UI_CONFIG.colors.primary),
                                    );
                                    ui.label(
                                        RichText::new(value.to_string())
                                            .strong()
                                            .color(UI_CONFIG.colors.heading),
                                    );
                                    ui.label_subdued(*label);
                                });
                            }
                        });

                        if !self.profile.interests.is_empty() {
                            ui.add_space(12.0);
                            ui.label_subheader(format!("♥ {}", UI_TEXT.profile_interests_label));
                            ui.horizontal_wrapped(|ui| {
                                for interest in self.profile.interests.clone() {
                                    let _ = ui.chip(&interest.to_string(), false);
                                }
                            });
                        }
                    });

                ui.add_space(14.0);

                // Option rows
                let _ = option_row(
                    ui,
                    UI_TEXT.profile_privacy_title,
                    UI_TEXT.profile_privacy_sub,
                    UI_CONFIG.colors.heading,
                );
                let _ = option_row(
                    ui,
                    UI_TEXT.profile_notifications_title,
                    UI_TEXT.profile_notifications_sub,
                    UI_CONFIG.colors.heading,
                );
                let _ = option_row(
                    ui,
                    UI_TEXT.profile_help_title,
                    UI_TEXT.profile_help_sub,
                    UI_CONFIG.colors.heading,
                );
                if option_row(
                    ui,
                    UI_TEXT.profile_logout_title,
                    UI_TEXT.profile_logout_sub,
                    UI_CONFIG.colors.danger,
                ) {
                    self.logout();
                }
                ui.add_space(16.0);
            });
        });

        self.render_edit_dialog(ctx);
    }

    fn render_edit_dialog(&mut self, ctx: &Context) {
        let Some(mut edit) = self.profile_edit.take() else {
            return;
        };
        let mut keep_open = true;
        let mut save = false;

        Window::new(UI_TEXT.edit_dialog_title)
            .resizable(false)
            .collapsible(false)
            .anchor(eframe::egui::Align2::CENTER_CENTER, vec2(0.0, 0.0))
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.label_subdued(UI_TEXT.edit_dialog_sub);
                ui.add_space(10.0);

                ui.label_subheader(UI_TEXT.edit_name_label);
                ui.add(TextEdit::singleline(&mut edit.name).desired_width(f32::INFINITY));
                ui.add_space(8.0);

                ui.label_subheader(UI_TEXT.edit_bio_label);
                ui.add(
                    TextEdit::multiline(&mut edit.bio)
                        .hint_text(UI_TEXT.edit_bio_placeholder)
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(8.0);

                ui.label_subheader(format!("♥ {}", UI_TEXT.edit_interests_label));
                ui.horizontal_wrapped(|ui| {
                    for interest in Interest::iter() {
                        let selected = edit.interests.contains(&interest);
                        if ui.chip(&interest.to_string(), selected).clicked() {
                            edit.toggle_interest(interest);
                        }
                    }
                });

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    let half = (ui.available_width() - 8.0) / 2.0;
                    if ui
                        .add_sized([half, 32.0], Button::new(UI_TEXT.edit_cancel))
                        .clicked()
                    {
                        keep_open = false;
                    }
                    if ui
                        .add_sized(
                            [half, 32.0],
                            Button::new(RichText::new(UI_TEXT.edit_save).color(Color32::WHITE))
                                .fill(UI_CONFIG.colors.accent),
                        )
                        .clicked()
                    {
                        save = true;
                        keep_open = false;
                    }
                });
            });

        if save {
            self.profile.apply_edit(edit);
        } else if keep_open {
            self.profile_edit = Some(edit);
        }
    }
}

/// A full-width clickable settings row with a title and a caption.
fn option_row(ui: &mut Ui, title: &str, subtitle: &str, title_color: Color32) -> bool {
    let response = Frame::new()
        .fill(UI_CONFIG.colors.panel)
        .corner_radius(CornerRadius::same(14))
        .inner_margin(Margin::symmetric(14, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width().min(360.0));
            ui.label(RichText::new(title).color(title_color));
            ui.label_subdued(subtitle);
        })
        .response;
    ui.add_space(6.0);
    ui.interact(response.rect, ui.id().with(("option_row", title)), Sense::click())
        .clicked()
}
