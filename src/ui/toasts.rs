use eframe::egui::{Align2, Color32, Context, CornerRadius, Frame, Id, Margin, RichText, Shadow};

use crate::ui::app::SparkApp;
use crate::ui::config::UI_CONFIG;
use crate::utils::app_time::{AppInstant, now, seconds_since};

/// A transient top-center notification.
pub struct Toast {
    pub title: String,
    pub detail: Option<String>,
    created: AppInstant,
}

impl Toast {
    pub fn new(title: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            title: title.into(),
            detail,
            created: now(),
        }
    }

    fn expired(&self) -> bool {
        seconds_since(self.created) > UI_CONFIG.toast_secs
    }
}

impl SparkApp {
    pub(super) fn push_toast(&mut self, title: impl Into<String>, detail: Option<String>) {
        self.toasts.push(Toast::new(title, detail));
    }

    pub(super) fn prune_toasts(&mut self) {
        self.toasts.retain(|t| !t.expired());
    }

    pub(super) fn render_toasts(&mut self, ctx: &Context) {
        if self.toasts.is_empty() {
            return;
        }
        // Keep repainting so expiry happens without further input
        ctx.request_repaint();

        eframe::egui::Area::new(Id::new("toast_stack"))
            .anchor(Align2::CENTER_TOP, [0.0, 16.0])
            .show(ctx, |ui| {
                for toast in &self.toasts {
                    Frame::new()
                        .fill(UI_CONFIG.colors.panel)
                        .corner_radius(CornerRadius::same(12))
                        .inner_margin(Margin::symmetric(14, 10))
                        .shadow(Shadow {
                            offset: [0, 2],
                            blur: 8,
                            spread: 0,
                            color: Color32::from_black_alpha(40),
                        })
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(&toast.title)
                                    .strong()
                                    .color(UI_CONFIG.colors.heading),
                            );
                            if let Some(detail) = &toast.detail {
                                ui.label(
                                    RichText::new(detail)
                                        .small()
                                        .color(UI_CONFIG.colors.subdued),
                                );
                            }
                        });
                    ui.add_space(6.0);
                }
            });
    }
}
