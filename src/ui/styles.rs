use eframe::egui::{Color32, CornerRadius, Response, RichText, Stroke, Ui};

use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (good for helper lines and captions).
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a "Label: Value" pair with consistent spacing and styling.
    /// The label is subdued, the value is colored.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Renders a screen heading in the heading color.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders a sub-heading / form label.
    fn label_subheader(&mut self, text: impl Into<String>);

    /// Renders an error message (red).
    fn label_error(&mut self, text: impl Into<String>);

    /// Renders a warning message (orange).
    fn label_warning(&mut self, text: impl Into<String>);

    /// A rounded interest chip; filled when selected, outlined otherwise.
    fn chip(&mut self, text: &str, selected: bool) -> Response;
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_header(&mut self, text: impl Into<String>) {
        self.heading(RichText::new(text).color(UI_CONFIG.colors.heading).strong());
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.label));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.danger));
    }

    fn label_warning(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.warning));
    }

    fn chip(&mut self, text: &str, selected: bool) -> Response {
        let (fill, text_color, stroke) = if selected {
            (UI_CONFIG.colors.accent, Color32::WHITE, Stroke::NONE)
        } else {
            (
                UI_CONFIG.colors.panel,
                UI_CONFIG.colors.label,
                Stroke::new(1.0, Color32::from_gray(209)),
            )
        };
        self.add(
            eframe::egui::Button::new(RichText::new(text).color(text_color))
                .fill(fill)
                .stroke(stroke)
                .corner_radius(CornerRadius::same(14)),
        )
    }
}
