use std::collections::BTreeSet;

use eframe::egui::{RichText, Sense, Slider, Ui, vec2};

use crate::config::DISCOVERY;
use crate::domain::{DiscoveryQuery, Interest};
use crate::models::PingRequest;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{colored_subsection_heading, draw_avatar, format_distance};

use itertools::Itertools;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Events emitted by the filter sheet
#[derive(Debug, Clone, Copy)]
pub enum FilterEvent {
    Radius(u32),
    Toggled(Interest),
    Cleared,
    Applied,
}

/// The map filter sheet: radius slider + shared-interest checkboxes.
///
/// Renders against a copy of the live query; every edit is reported as an
/// event and applied by the app, so the panel itself never owns state
/// across frames.
pub struct FilterPanel {
    radius_ft: u32,
    selected: BTreeSet<Interest>,
    viewer_interests: Vec<Interest>,
}

impl FilterPanel {
    pub fn new(query: &DiscoveryQuery, viewer_interests: Vec<Interest>) -> Self {
        Self {
            radius_ft: query.radius_ft,
            selected: query.interests.clone(),
            viewer_interests,
        }
    }
}

impl Panel for FilterPanel {
    type Event = FilterEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.label_header(UI_TEXT.filters_title);
        ui.label_subdued(UI_TEXT.filters_sub);
        ui.add_space(12.0);

        // Radius
        ui.horizontal(|ui| {
            ui.label(colored_subsection_heading(UI_TEXT.filters_radius_label));
            ui.with_layout(
                eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                |ui| {
                    ui.label(
                        RichText::new(format_distance(self.radius_ft))
                            .small()
                            .color(UI_CONFIG.colors.primary),
                    );
                },
            );
        });
        let mut radius = self.radius_ft as f64;
        let response = ui.add(
            Slider::new(
                &mut radius,
                DISCOVERY.radius_min_ft as f64..=DISCOVERY.radius_max_ft as f64,
            )
            .step_by(DISCOVERY.radius_step_ft as f64)
            .integer()
            .show_value(false),
        );
        if response.changed() {
            self.radius_ft = radius.round() as u32;
            events.push(FilterEvent::Radius(self.radius_ft));
        }
        ui.horizontal(|ui| {
            ui.label_subdued(format_distance(DISCOVERY.radius_min_ft));
            ui.with_layout(
                eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                |ui| {
                    ui.label_subdued(format_distance(DISCOVERY.radius_max_ft));
                },
            );
        });

        ui.add_space(14.0);

        // Shared interests
        ui.horizontal(|ui| {
            ui.label(colored_subsection_heading(UI_TEXT.filters_interests_label));
            if !self.selected.is_empty() {
                ui.with_layout(
                    eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                    |ui| {
                        if ui
                            .small_button(
                                RichText::new(UI_TEXT.filters_clear_all)
                                    .color(UI_CONFIG.colors.primary),
                            )
                            .clicked()
                        {
                            self.selected.clear();
                            events.push(FilterEvent::Cleared);
                        }
                    },
                );
            }
        });
        ui.label_subdued(format!(
            "{}{}",
            UI_TEXT.filters_your_interests_prefix,
            self.viewer_interests.iter().join(", ")
        ));
        ui.add_space(6.0);

        for interest in self.viewer_interests.clone() {
            let mut checked = self.selected.contains(&interest);
            if ui.checkbox(&mut checked, interest.to_string()).changed() {
                if checked {
                    self.selected.insert(interest);
                } else {
                    self.selected.remove(&interest);
                }
                events.push(FilterEvent::Toggled(interest));
            }
        }

        ui.add_space(14.0);
        if ui
            .add_sized(
                [ui.available_width(), 36.0],
                eframe::egui::Button::new(
                    RichText::new(UI_TEXT.filters_apply).color(eframe::egui::Color32::WHITE),
                )
                .fill(UI_CONFIG.colors.accent),
            )
            .clicked()
        {
            events.push(FilterEvent::Applied);
        }

        events
    }
}

/// Events emitted by the ping requests list
#[derive(Debug, Clone, Copy)]
pub enum PingEvent {
    Accepted(u32),
    Ignored(u32),
}

/// The list inside the "Incoming Pings" modal.
pub struct PingRequestsPanel<'a> {
    requests: &'a [PingRequest],
}

impl<'a> PingRequestsPanel<'a> {
    pub fn new(requests: &'a [PingRequest]) -> Self {
        Self { requests }
    }
}

impl<'a> Panel for PingRequestsPanel<'a> {
    type Event = PingEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        if self.requests.is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label_subheader(UI_TEXT.pings_empty_heading);
                ui.label_subdued(UI_TEXT.pings_empty_sub);
            });
            ui.add_space(24.0);
            return events;
        }

        for request in self.requests {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(vec2(44.0, 44.0), Sense::hover());
                    draw_avatar(
                        ui.painter(),
                        rect.center(),
                        22.0,
                        &request.avatar_seed,
                        request.first_initial(),
                    );

                    ui.vertical(|ui| {
                        ui.label_subheader(format!("{}, {}", request.name, request.age));
                        ui.label_subdued(format!(
                            "📍 {}{}",
                            request.distance_ft, UI_TEXT.card_feet_away_suffix
                        ));
                        ui.horizontal_wrapped(|ui| {
                            for interest in &request.interests {
                                let _ = ui.chip(&interest.to_string(), false);
                            }
                        });
                    });
                });

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    let half = (ui.available_width() - 8.0) / 2.0;
                    if ui
                        .add_sized([half, 30.0], eframe::egui::Button::new(UI_TEXT.pings_ignore))
                        .clicked()
                    {
                        events.push(PingEvent::Ignored(request.id));
                    }
                    if ui
                        .add_sized(
                            [half, 30.0],
                            eframe::egui::Button::new(
                                RichText::new(UI_TEXT.pings_accept)
                                    .color(eframe::egui::Color32::WHITE),
                            )
                            .fill(UI_CONFIG.colors.accent),
                        )
                        .clicked()
                    {
                        events.push(PingEvent::Accepted(request.id));
                    }
                });
            });
            ui.add_space(6.0);
        }

        events
    }
}
