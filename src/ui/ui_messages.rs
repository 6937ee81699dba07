use eframe::egui::{
    Align, Button, CentralPanel, Color32, Context, CornerRadius, Frame, Layout, Margin, RichText,
    ScrollArea, Sense, TextEdit, TopBottomPanel, Window, vec2,
};

use crate::models::{ConversationId, MessageSender};
use crate::ui::app::SparkApp;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::draw_avatar;

/// Row snapshot so the list can render while the app is borrowed mutably.
struct ConversationRow {
    id: ConversationId,
    name: String,
    avatar_seed: String,
    initial: char,
    online: bool,
    unread: u32,
    recency: String,
    preview: String,
}

impl SparkApp {
    pub(super) fn render_messages_tab(&mut self, ctx: &Context) {
        if self.active_conversation.is_some() {
            self.render_chat_view(ctx);
            self.render_delete_confirm(ctx);
            return;
        }

        CentralPanel::default().show(ctx, |ui| {
            ui.add_space(16.0);
            ui.label_header(UI_TEXT.messages_heading);
            ui.label_subdued(UI_TEXT.messages_sub);
            ui.add_space(12.0);

            ui.add(
                TextEdit::singleline(&mut self.conversation_search)
                    .hint_text(format!("🔍 {}", UI_TEXT.messages_search_placeholder))
                    .desired_width(ui.available_width().min(360.0)),
            );
            ui.add_space(12.0);

            let rows: Vec<ConversationRow> =
                crate::models::filter_by_name(&self.conversations, &self.conversation_search)
                    .into_iter()
                    .map(|c| ConversationRow {
                        id: c.id,
                        name: c.name.clone(),
                        avatar_seed: c.avatar_seed.clone(),
                        initial: c.first_initial(),
                        online: c.online,
                        unread: c.unread,
                        recency: c.recency.clone(),
                        preview: c.preview().to_string(),
                    })
                    .collect();

            if rows.is_empty() {
                ui.add_space(48.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("💬").size(48.0).color(Color32::from_gray(200)));
                    ui.add_space(8.0);
                    ui.label_subheader(UI_TEXT.messages_empty_heading);
                    ui.label_subdued(UI_TEXT.messages_empty_sub);
                });
                return;
            }

            ScrollArea::vertical().id_salt("conversation_list").show(ui, |ui| {
                for row in rows {
                    let response = Frame::new()
                        .fill(UI_CONFIG.colors.panel)
                        .corner_radius(CornerRadius::same(14))
                        .inner_margin(Margin::symmetric(12, 10))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width().min(360.0));
                            ui.horizontal(|ui| {
                                let (rect, _) =
                                    ui.allocate_exact_size(vec2(44.0, 44.0), Sense::hover());
                                draw_avatar(
                                    ui.painter(),
                                    rect.center(),
                                    22.0,
                                    &row.avatar_seed,
                                    row.initial,
                                );
                                if row.online {
                                    ui.painter().circle_filled(
                                        rect.right_bottom() - vec2(6.0, 6.0),
                                        5.0,
                                        UI_CONFIG.colors.online,
                                    );
                                }

                                ui.vertical(|ui| {
                                    ui.horizontal(|ui| {
                                        ui.label_subheader(&row.name);
                                        ui.with_layout(
                                            Layout::right_to_left(Align::Center),
                                            |ui| {
                                                ui.label_subdued(&row.recency);
                                            },
                                        );
                                    });
                                    ui.horizontal(|ui| {
                                        ui.label_subdued(&row.preview);
                                        if row.unread > 0 {
                                            ui.with_layout(
                                                Layout::right_to_left(Align::Center),
                                                |ui| {
                                                    ui.label(
                                                        RichText::new(format!(" {} ", row.unread))
                                                            .small()
                                                            .color(Color32::WHITE)
                                                            .background_color(
                                                                UI_CONFIG.colors.accent,
                                                            ),
                                                    );
                                                },
                                            );
                                        }
                                    });
                                });
                            });
                        })
                        .response;

                    let clicked = ui
                        .interact(
                            response.rect,
                            ui.id().with(("conversation", row.id.0)),
                            Sense::click(),
                        )
                        .clicked();
                    if clicked {
                        self.open_conversation(row.id);
                    }
                    ui.add_space(6.0);
                }
            });
        });
    }

    fn render_chat_view(&mut self, ctx: &Context) {
        let Some(active) = self.active_conversation else {
            return;
        };
        let Some(conv) = self.conversations.iter().find(|c| c.id == active) else {
            self.close_conversation();
            return;
        };
        let name = conv.name.clone();
        let avatar_seed = conv.avatar_seed.clone();
        let initial = conv.first_initial();
        let online = conv.online;
        let muted = conv.muted;
        let messages = conv.messages.clone();

        // Header
        TopBottomPanel::top("chat_header")
            .frame(Frame::new().fill(UI_CONFIG.colors.panel).inner_margin(Margin::symmetric(10, 8)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("←").clicked() {
                        self.close_conversation();
                        return;
                    }
                    let (rect, _) = ui.allocate_exact_size(vec2(38.0, 38.0), Sense::hover());
                    draw_avatar(ui.painter(), rect.center(), 19.0, &avatar_seed, initial);
                    ui.vertical(|ui| {
                        ui.label_subheader(&name);
                        let status = if online {
                            UI_TEXT.chat_active_now
                        } else {
                            UI_TEXT.chat_offline
                        };
                        ui.label_subdued(status);
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.menu_button("⋮", |ui| {
                            let mute_label = if muted {
                                UI_TEXT.chat_menu_unmute
                            } else {
                                UI_TEXT.chat_menu_mute
                            };
                            if ui.button(mute_label).clicked() {
                                if let Some(conv) =
                                    self.conversations.iter_mut().find(|c| c.id == active)
                                {
                                    conv.muted = !conv.muted;
                                }
                                ui.close();
                            }
                            ui.separator();
                            if ui
                                .button(
                                    RichText::new(UI_TEXT.chat_menu_block)
                                        .color(UI_CONFIG.colors.warning),
                                )
                                .clicked()
                            {
                                self.block_conversation(active);
                                ui.close();
                            }
                            if ui
                                .button(
                                    RichText::new(UI_TEXT.chat_menu_delete)
                                        .color(UI_CONFIG.colors.danger),
                                )
                                .clicked()
                            {
                                self.confirm_delete = Some(active);
                                ui.close();
                            }
                        });
                    });
                });
            });

        // Input row
        TopBottomPanel::bottom("chat_input")
            .frame(Frame::new().fill(UI_CONFIG.colors.panel).inner_margin(Margin::symmetric(10, 8)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let send_size = 36.0;
                    let edit = ui.add(
                        TextEdit::singleline(&mut self.chat_draft)
                            .hint_text(UI_TEXT.chat_input_placeholder)
                            .desired_width(ui.available_width() - send_size - 12.0),
                    );

                    let can_send = !self.chat_draft.trim().is_empty();
                    let send_clicked = ui
                        .add_enabled(
                            can_send,
                            Button::new(RichText::new("➤").color(Color32::WHITE))
                                .fill(UI_CONFIG.colors.accent)
                                .corner_radius(CornerRadius::same(18))
                                .min_size(vec2(send_size, send_size)),
                        )
                        .clicked();
                    let enter_sent = edit.lost_focus()
                        && ui.input(|i| i.key_pressed(eframe::egui::Key::Enter));

                    if (send_clicked || enter_sent) && can_send {
                        let draft = std::mem::take(&mut self.chat_draft);
                        if let Some(conv) = self.conversations.iter_mut().find(|c| c.id == active) {
                            conv.send(&draft);
                        }
                        edit.request_focus();
                    }
                });
            });

        // Bubbles
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .id_salt("chat_scroll")
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    for message in &messages {
                        let from_me = message.sender == MessageSender::Me;
                        let layout = if from_me {
                            Layout::right_to_left(Align::Min)
                        } else {
                            Layout::left_to_right(Align::Min)
                        };
                        ui.with_layout(layout, |ui| {
                            let (fill, text_color, time_color) = if from_me {
                                (
                                    UI_CONFIG.colors.bubble_me,
                                    Color32::WHITE,
                                    Color32::from_white_alpha(180),
                                )
                            } else {
                                (
                                    UI_CONFIG.colors.bubble_them,
                                    UI_CONFIG.colors.heading,
                                    UI_CONFIG.colors.subdued,
                                )
                            };
                            Frame::new()
                                .fill(fill)
                                .corner_radius(CornerRadius::same(14))
                                .inner_margin(Margin::symmetric(12, 8))
                                .show(ui, |ui| {
                                    ui.set_max_width(240.0);
                                    ui.vertical(|ui| {
                                        ui.label(RichText::new(&message.text).color(text_color));
                                        ui.label(
                                            RichText::new(&message.sent_at)
                                                .small()
                                                .color(time_color),
                                        );
                                    });
                                });
                        });
                        ui.add_space(6.0);
                    }
                });
        });
    }

    fn render_delete_confirm(&mut self, ctx: &Context) {
        let Some(pending) = self.confirm_delete else {
            return;
        };
        Window::new(UI_TEXT.chat_delete_confirm_title)
            .resizable(false)
            .collapsible(false)
            .anchor(eframe::egui::Align2::CENTER_CENTER, vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label_subdued(UI_TEXT.chat_delete_confirm_body);
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button(UI_TEXT.chat_delete_cancel).clicked() {
                        self.confirm_delete = None;
                    }
                    if ui
                        .button(
                            RichText::new(UI_TEXT.chat_delete_confirm)
                                .color(UI_CONFIG.colors.danger),
                        )
                        .clicked()
                    {
                        self.confirm_delete = None;
                        self.delete_conversation(pending);
                    }
                });
            });
    }
}
