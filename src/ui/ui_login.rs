use eframe::egui::{Button, CentralPanel, Color32, Context, CornerRadius, RichText, TextEdit};

use crate::ui::app::{Screen, SparkApp};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::colored_subsection_heading;

impl SparkApp {
    pub(super) fn render_login(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.add_space(16.0);
            if ui.button("←").clicked() {
                self.goto(Screen::Landing);
            }
            ui.add_space(16.0);

            ui.label_header(UI_TEXT.login_heading);
            ui.label_subdued(UI_TEXT.login_sub);
            ui.add_space(20.0);

            let field_width = (ui.available_width() - 8.0).min(360.0);

            ui.label(colored_subsection_heading(UI_TEXT.login_email_label));
            ui.add(
                TextEdit::singleline(&mut self.login.email)
                    .hint_text(UI_TEXT.login_email_placeholder)
                    .desired_width(field_width),
            );
            ui.add_space(10.0);

            ui.label(colored_subsection_heading(UI_TEXT.login_password_label));
            ui.add(
                TextEdit::singleline(&mut self.login.password)
                    .password(true)
                    .hint_text(UI_TEXT.login_password_placeholder)
                    .desired_width(field_width),
            );

            ui.add_space(6.0);
            ui.with_layout(
                eframe::egui::Layout::right_to_left(eframe::egui::Align::Min),
                |ui| {
                    if ui
                        .link(RichText::new(UI_TEXT.login_forgot_link).color(UI_CONFIG.colors.primary))
                        .clicked()
                    {
                        self.goto(Screen::ForgotPassword);
                    }
                },
            );

            ui.add_space(16.0);
            let label = if self.is_authenticating() {
                UI_TEXT.login_pending
            } else {
                UI_TEXT.login_submit
            };
            let submit = ui.add_enabled(
                !self.is_authenticating(),
                Button::new(RichText::new(label).color(Color32::WHITE))
                    .fill(UI_CONFIG.colors.accent)
                    .corner_radius(CornerRadius::same(22))
                    .min_size(eframe::egui::vec2(field_width, 40.0)),
            );
            if submit.clicked() {
                self.start_login();
            }
            // Enter submits from either field
            if !self.is_authenticating() && ui.input(|i| i.key_pressed(eframe::egui::Key::Enter)) {
                self.start_login();
            }

            ui.add_space(24.0);
            ui.horizontal(|ui| {
                ui.label_subdued(UI_TEXT.login_no_account);
                if ui
                    .link(RichText::new(UI_TEXT.login_register_link).color(UI_CONFIG.colors.primary))
                    .clicked()
                {
                    self.goto(Screen::Register);
                }
            });
        });
    }
}
