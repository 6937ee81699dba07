use eframe::egui::{
    Align2, Area, Color32, Context, CornerRadius, Frame, Id, Margin, RichText, ScrollArea, Sense,
    Window, vec2,
};

use crate::ui::app::SparkApp;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{Panel, PingEvent, PingRequestsPanel};

impl SparkApp {
    /// The "Incoming Pings" modal, layered over whichever tab is active.
    pub(super) fn render_ping_requests(&mut self, ctx: &Context) {
        if !self.show_ping_requests {
            return;
        }

        let mut open = self.show_ping_requests;
        let mut events = Vec::new();
        Window::new(UI_TEXT.pings_title)
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
            .default_width(340.0)
            .show(ctx, |ui| {
                ui.label_subdued(UI_TEXT.pings_sub);
                ui.add_space(8.0);
                ScrollArea::vertical()
                    .id_salt("ping_requests")
                    .max_height(380.0)
                    .show(ui, |ui| {
                        let mut panel = PingRequestsPanel::new(self.ping_inbox.pending());
                        events = panel.render(ui);
                    });
            });
        self.show_ping_requests = open;

        for event in events {
            match event {
                PingEvent::Accepted(id) => self.accept_ping(id),
                PingEvent::Ignored(id) => self.ignore_ping(id),
            }
        }
    }

    /// Full-screen overlay after accepting a ping. Click anywhere dismisses;
    /// otherwise it expires on its own.
    pub(super) fn render_celebration(&mut self, ctx: &Context) {
        let Some(celebration) = &self.celebration else {
            return;
        };
        let name = celebration.name.clone();

        let screen = ctx.screen_rect();
        let mut dismissed = false;
        Area::new(Id::new("celebration_overlay"))
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let backdrop = ui.allocate_rect(screen, Sense::click());
                ui.painter()
                    .rect_filled(screen, CornerRadius::ZERO, Color32::from_black_alpha(110));
                if backdrop.clicked() {
                    dismissed = true;
                }
            });

        Area::new(Id::new("celebration_card"))
            .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
            .show(ctx, |ui| {
                Frame::new()
                    .fill(UI_CONFIG.colors.panel)
                    .corner_radius(CornerRadius::same(20))
                    .inner_margin(Margin::symmetric(28, 22))
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new("🎉").size(48.0));
                            ui.add_space(6.0);
                            ui.label_header(UI_TEXT.connected_heading);
                            ui.label_subdued(format!(
                                "{}{}{}",
                                UI_TEXT.connected_detail_prefix, name, UI_TEXT.connected_detail_suffix
                            ));
                        });
                    });
            });

        if dismissed {
            self.celebration = None;
        }
    }
}
