use eframe::egui::{Button, Context, Frame, Key, Margin, RichText, TopBottomPanel};
use strum::IntoEnumIterator;

use crate::ui::app::{HomeTab, Screen, SparkApp};
use crate::ui::config::UI_CONFIG;

impl SparkApp {
    pub(super) fn render_current_screen(&mut self, ctx: &Context) {
        match self.screen {
            Screen::Landing => self.render_landing(ctx),
            Screen::Login => self.render_login(ctx),
            Screen::Register => self.render_register(ctx),
            Screen::ForgotPassword => self.render_forgot(ctx),
            Screen::Home => self.render_home(ctx),
        }
    }

    fn render_home(&mut self, ctx: &Context) {
        // Bottom bar first so the central panel gets the remaining space
        self.render_tab_bar(ctx);
        match self.home_tab {
            HomeTab::Map => self.render_map_tab(ctx),
            HomeTab::Messages => self.render_messages_tab(ctx),
            HomeTab::Profile => self.render_profile_tab(ctx),
        }

        // Layered above whichever tab is active
        self.render_ping_requests(ctx);
        self.render_celebration(ctx);
    }

    fn render_tab_bar(&mut self, ctx: &Context) {
        let unread_total: u32 = self.conversations.iter().map(|c| c.unread).sum();

        let frame = Frame::new()
            .fill(UI_CONFIG.colors.panel)
            .inner_margin(Margin::symmetric(0, 6));
        TopBottomPanel::bottom("tab_bar").frame(frame).show(ctx, |ui| {
            ui.columns(3, |cols| {
                for (idx, tab) in HomeTab::iter().enumerate() {
                    let active = self.home_tab == tab;
                    let color = if active {
                        UI_CONFIG.colors.primary
                    } else {
                        UI_CONFIG.colors.subdued
                    };

                    let icon = match tab {
                        HomeTab::Map => "🗺",
                        HomeTab::Messages => "💬",
                        HomeTab::Profile => "👤",
                    };
                    let label = if tab == HomeTab::Messages && unread_total > 0 {
                        format!("{icon}\n{tab} ({unread_total})")
                    } else {
                        format!("{icon}\n{tab}")
                    };

                    let mut clicked = false;
                    cols[idx].vertical_centered(|ui| {
                        clicked = ui
                            .add(Button::new(RichText::new(label).color(color)).frame(false))
                            .clicked();
                    });
                    if clicked {
                        self.select_tab(tab);
                    }
                }
            });
        });
    }

    /// Escape unwinds the topmost layer, like the back gesture would.
    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if !ctx.input(|i| i.key_pressed(Key::Escape)) {
            return;
        }

        if self.celebration.is_some() {
            self.celebration = None;
        } else if self.confirm_delete.is_some() {
            self.confirm_delete = None;
        } else if self.profile_edit.is_some() {
            self.profile_edit = None;
        } else if self.show_ping_requests {
            self.show_ping_requests = false;
        } else if self.filter_open {
            self.filter_open = false;
        } else if self.selected_candidate.is_some() {
            self.selected_candidate = None;
        } else if self.screen == Screen::Home && self.active_conversation.is_some() {
            self.close_conversation();
        }
    }
}
