use eframe::egui::{
    Button, CentralPanel, Color32, ComboBox, Context, CornerRadius, ProgressBar, RichText,
    ScrollArea, TextEdit,
};
use strum::IntoEnumIterator;

use crate::config::REGISTRATION;
use crate::domain::wizard::{WizardOutcome, WizardRetreat, WizardStep, ETHNICITIES};
use crate::domain::Interest;
use crate::ui::app::{Screen, SparkApp};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl SparkApp {
    pub(super) fn render_register(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.add_space(16.0);
            if ui.button("←").clicked() {
                match self.wizard.retreat() {
                    WizardRetreat::ExitedFlow => {
                        self.wizard = Default::default();
                        self.expanded_category = None;
                        self.goto(Screen::Landing);
                        return;
                    }
                    WizardRetreat::SteppedBack => {
                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_wizard_transitions {
                            log::info!("Wizard back to {:?}", self.wizard.step);
                        }
                    }
                }
            }

            let position = self.wizard.step.position();
            let count = WizardStep::count();
            ui.add_space(8.0);
            ui.label_subdued(format!("{} {} of {}", UI_TEXT.wizard_step_prefix, position, count));
            ui.add(
                ProgressBar::new(position as f32 / count as f32)
                    .desired_height(4.0)
                    .fill(UI_CONFIG.colors.accent),
            );
            ui.add_space(24.0);

            let field_width = (ui.available_width() - 8.0).min(360.0);
            match self.wizard.step {
                WizardStep::Name => {
                    ui.label_header(UI_TEXT.wizard_name_heading);
                    ui.label_subdued(UI_TEXT.wizard_name_sub);
                    ui.add_space(16.0);
                    ui.add(
                        TextEdit::singleline(&mut self.wizard.name)
                            .hint_text(UI_TEXT.wizard_name_placeholder)
                            .desired_width(field_width),
                    );
                }
                WizardStep::Email => {
                    ui.label_header(UI_TEXT.wizard_email_heading);
                    ui.label_subdued(UI_TEXT.wizard_email_sub);
                    ui.add_space(16.0);
                    ui.add(
                        TextEdit::singleline(&mut self.wizard.email)
                            .hint_text(UI_TEXT.wizard_email_placeholder)
                            .desired_width(field_width),
                    );
                }
                WizardStep::Password => {
                    ui.label_header(UI_TEXT.wizard_password_heading);
                    ui.label_subdued(UI_TEXT.wizard_password_sub);
                    ui.add_space(16.0);
                    ui.add(
                        TextEdit::singleline(&mut self.wizard.password)
                            .password(true)
                            .hint_text(UI_TEXT.wizard_password_placeholder)
                            .desired_width(field_width),
                    );
                }
                WizardStep::ConfirmPassword => {
                    ui.label_header(UI_TEXT.wizard_confirm_heading);
                    ui.label_subdued(UI_TEXT.wizard_confirm_sub);
                    ui.add_space(16.0);
                    ui.add(
                        TextEdit::singleline(&mut self.wizard.confirm_password)
                            .password(true)
                            .hint_text(UI_TEXT.wizard_confirm_placeholder)
                            .desired_width(field_width),
                    );
                    // Warns only; Continue stays enabled as long as the field
                    // is non-empty
                    if self.wizard.password_mismatch() {
                        ui.add_space(4.0);
                        ui.label_error(UI_TEXT.wizard_mismatch_warning);
                    }
                }
                WizardStep::Age => {
                    ui.label_header(UI_TEXT.wizard_age_heading);
                    ui.label_subdued(UI_TEXT.wizard_age_sub);
                    ui.add_space(16.0);
                    let response = ui.add(
                        TextEdit::singleline(&mut self.wizard.age)
                            .hint_text(UI_TEXT.wizard_age_placeholder)
                            .desired_width(field_width),
                    );
                    if response.changed() {
                        self.wizard.age.retain(|c| c.is_ascii_digit());
                        self.wizard.age.truncate(3);
                    }
                }
                WizardStep::Ethnicity => {
                    ui.label_header(UI_TEXT.wizard_ethnicity_heading);
                    ui.label_subdued(UI_TEXT.wizard_ethnicity_sub);
                    ui.add_space(16.0);
                    let selected = self
                        .wizard
                        .ethnicity
                        .clone()
                        .unwrap_or_else(|| UI_TEXT.wizard_ethnicity_placeholder.to_string());
                    ComboBox::from_id_salt("ethnicity_select")
                        .width(field_width)
                        .selected_text(selected)
                        .show_ui(ui, |ui| {
                            for option in ETHNICITIES {
                                let checked = self.wizard.ethnicity.as_deref() == Some(*option);
                                if ui.selectable_label(checked, *option).clicked() {
                                    self.wizard.ethnicity = Some(option.to_string());
                                }
                            }
                        });
                }
                WizardStep::Bio => {
                    ui.label_header(UI_TEXT.wizard_bio_heading);
                    ui.label_subdued(UI_TEXT.wizard_bio_sub);
                    ui.add_space(16.0);
                    ui.add(
                        TextEdit::multiline(&mut self.wizard.bio)
                            .hint_text(UI_TEXT.wizard_bio_placeholder)
                            .char_limit(REGISTRATION.bio_max_len)
                            .desired_rows(5)
                            .desired_width(field_width),
                    );
                    ui.label_subdued(format!(
                        "{}/{}",
                        self.wizard.bio.chars().count(),
                        REGISTRATION.bio_max_len
                    ));
                }
                WizardStep::Interests => {
                    ui.label_header(UI_TEXT.wizard_interests_heading);
                    ui.label_subdued(UI_TEXT.wizard_interests_sub);
                    ui.add_space(12.0);
                    self.render_interest_picker(ui);
                }
            }

            // Bottom continue button
            ui.with_layout(
                eframe::egui::Layout::bottom_up(eframe::egui::Align::Center),
                |ui| {
                    ui.add_space(16.0);
                    let last = self.wizard.step == WizardStep::Interests;
                    let label = if last {
                        UI_TEXT.wizard_complete
                    } else {
                        UI_TEXT.wizard_continue
                    };
                    let clicked = ui
                        .add_enabled(
                            self.wizard.can_proceed(),
                            Button::new(RichText::new(label).color(Color32::WHITE))
                                .fill(UI_CONFIG.colors.accent)
                                .corner_radius(CornerRadius::same(22))
                                .min_size(eframe::egui::vec2(field_width, 44.0)),
                        )
                        .clicked();
                    if clicked {
                        match self.wizard.advance() {
                            WizardOutcome::Completed => self.complete_registration(),
                            WizardOutcome::Advanced => {
                                #[cfg(debug_assertions)]
                                if DEBUG_FLAGS.print_wizard_transitions {
                                    log::info!("Wizard advanced to {:?}", self.wizard.step);
                                }
                            }
                            WizardOutcome::Blocked => {}
                        }
                    }
                },
            );
        });
    }

    /// Category bubbles, or one category's sub-interest bubbles when expanded.
    fn render_interest_picker(&mut self, ui: &mut eframe::egui::Ui) {
        match self.expanded_category {
            None => {
                ScrollArea::vertical()
                    .id_salt("interest_categories")
                    .max_height(320.0)
                    .show(ui, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            for category in Interest::iter() {
                                let chosen = category
                                    .sub_interests()
                                    .iter()
                                    .filter(|s| self.wizard.interests.contains(**s))
                                    .count();
                                let label = if chosen > 0 {
                                    format!("{category} ({chosen})")
                                } else {
                                    category.to_string()
                                };
                                if ui.chip(&label, chosen > 0).clicked() {
                                    self.expanded_category = Some(category);
                                }
                            }
                        });
                    });
            }
            Some(category) => {
                if ui
                    .button(RichText::new(UI_TEXT.wizard_interests_back).color(UI_CONFIG.colors.subdued))
                    .clicked()
                {
                    self.expanded_category = None;
                    return;
                }
                ui.add_space(8.0);
                ui.label_subheader(category.to_string());
                ScrollArea::vertical()
                    .id_salt("interest_subs")
                    .max_height(300.0)
                    .show(ui, |ui| {
                        ui.horizontal_wrapped(|ui| {
                            for sub in category.sub_interests() {
                                let selected = self.wizard.interests.contains(*sub);
                                if ui.chip(sub, selected).clicked() {
                                    self.wizard.toggle_interest(sub);
                                }
                            }
                        });
                    });
            }
        }
    }
}
