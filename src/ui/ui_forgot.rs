use eframe::egui::{
    Button, CentralPanel, Color32, Context, CornerRadius, FontId, RichText, TextEdit,
};

use crate::config::REGISTRATION;
use crate::domain::reset::{ResetAction, ResetPhase};
use crate::ui::app::{Screen, SparkApp};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::colored_subsection_heading;

impl SparkApp {
    pub(super) fn render_forgot(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.add_space(16.0);

            if self.reset.phase != ResetPhase::Done {
                if ui.button("←").clicked() {
                    if !self.reset.back() {
                        self.reset = Default::default();
                        self.goto(Screen::Login);
                        return;
                    }
                }
            }
            ui.add_space(16.0);

            let field_width = (ui.available_width() - 8.0).min(360.0);
            match self.reset.phase {
                ResetPhase::Email => self.render_reset_email(ui, field_width),
                ResetPhase::Otp => self.render_reset_otp(ui, field_width),
                ResetPhase::NewPassword => self.render_reset_password(ui, field_width),
                ResetPhase::Done => {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("✅").size(64.0));
                        ui.add_space(12.0);
                        ui.label_header(UI_TEXT.forgot_success_heading);
                        ui.label_subdued(UI_TEXT.forgot_success_sub);
                    });
                    // tick_timers sends us back to the login screen shortly
                }
            }
        });
    }

    fn render_reset_email(&mut self, ui: &mut eframe::egui::Ui, field_width: f32) {
        ui.label_header(UI_TEXT.forgot_email_heading);
        ui.label_subdued(UI_TEXT.forgot_email_sub);
        ui.add_space(20.0);

        ui.label(colored_subsection_heading(UI_TEXT.login_email_label));
        ui.add(
            TextEdit::singleline(&mut self.reset.email)
                .hint_text(UI_TEXT.wizard_email_placeholder)
                .desired_width(field_width),
        );

        ui.add_space(16.0);
        let label = if self.is_resetting() {
            UI_TEXT.forgot_sending
        } else {
            UI_TEXT.forgot_send_code
        };
        if self.submit_button(ui, field_width, label) {
            if let Some(action) = self.reset.submit() {
                self.start_reset_action(action);
            }
        }
    }

    fn render_reset_otp(&mut self, ui: &mut eframe::egui::Ui, field_width: f32) {
        ui.label_header(UI_TEXT.forgot_otp_heading);
        ui.label_subdued(format!(
            "{}{}",
            UI_TEXT.forgot_otp_sub_prefix, self.reset.email
        ));
        ui.add_space(20.0);

        ui.label(colored_subsection_heading(UI_TEXT.forgot_otp_label));
        let response = ui.add(
            TextEdit::singleline(&mut self.reset.otp)
                .font(FontId::monospace(28.0))
                .char_limit(REGISTRATION.otp_len)
                .hint_text("••••••")
                .desired_width(field_width),
        );
        if response.changed() {
            self.reset.otp.retain(|c| c.is_ascii_digit());
            self.reset.otp.truncate(REGISTRATION.otp_len);
        }

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            let resend = ui.add_enabled(
                !self.is_resetting(),
                eframe::egui::Link::new(
                    RichText::new(UI_TEXT.forgot_resend).color(UI_CONFIG.colors.primary),
                ),
            );
            if resend.clicked() {
                self.start_reset_action(ResetAction::ResendCode);
            }
        });

        ui.add_space(12.0);
        let label = if self.is_resetting() {
            UI_TEXT.forgot_verifying
        } else {
            UI_TEXT.forgot_verify
        };
        if self.submit_button(ui, field_width, label) {
            if let Some(action) = self.reset.submit() {
                self.start_reset_action(action);
            }
        }
    }

    fn render_reset_password(&mut self, ui: &mut eframe::egui::Ui, field_width: f32) {
        ui.label_header(UI_TEXT.forgot_reset_heading);
        ui.label_subdued(UI_TEXT.forgot_reset_sub);
        ui.add_space(20.0);

        ui.label(colored_subsection_heading(UI_TEXT.forgot_new_password_label));
        ui.add(
            TextEdit::singleline(&mut self.reset.new_password)
                .password(true)
                .hint_text(UI_TEXT.forgot_new_password_placeholder)
                .desired_width(field_width),
        );
        ui.add_space(10.0);

        ui.label(colored_subsection_heading(UI_TEXT.forgot_confirm_label));
        ui.add(
            TextEdit::singleline(&mut self.reset.confirm_password)
                .password(true)
                .hint_text(UI_TEXT.forgot_confirm_placeholder)
                .desired_width(field_width),
        );
        // This flow DOES block on mismatch (the submit button below stays
        // disabled), unlike the registration wizard
        if self.reset.password_mismatch() {
            ui.add_space(4.0);
            ui.label_error(UI_TEXT.wizard_mismatch_warning);
        }

        ui.add_space(16.0);
        let label = if self.is_resetting() {
            UI_TEXT.forgot_resetting
        } else {
            UI_TEXT.forgot_reset_submit
        };
        if self.submit_button(ui, field_width, label) {
            if let Some(action) = self.reset.submit() {
                self.start_reset_action(action);
            }
        }
    }

    /// The full-width accent submit button shared by all three phases.
    /// Disabled while a round trip is in flight or the phase can't submit.
    fn submit_button(&mut self, ui: &mut eframe::egui::Ui, field_width: f32, label: &str) -> bool {
        ui.add_enabled(
            !self.is_resetting() && self.reset.can_submit(),
            Button::new(RichText::new(label).color(Color32::WHITE))
                .fill(UI_CONFIG.colors.accent)
                .corner_radius(CornerRadius::same(22))
                .min_size(eframe::egui::vec2(field_width, 40.0)),
        )
        .clicked()
    }
}
