use eframe::egui;

use crate::config::BACKEND;
use crate::domain::reset::ResetAction;
use crate::ui::app::{LoginForm, Screen, SparkApp};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::utils::app_time::seconds_since;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl SparkApp {
    /// Resolve completed mock round trips. Runs once per frame, before
    /// rendering, so outcomes appear the same frame they land.
    pub(super) fn poll_backend(&mut self, ctx: &egui::Context) {
        // Login
        let login_outcome = self
            .login_pending
            .as_ref()
            .and_then(|p| p.ready().cloned());
        if let Some(result) = login_outcome {
            self.login_pending = None;
            match result {
                Ok(session) => {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_backend_requests {
                        log::info!("[backend] login completed for {}", session.display_name);
                    }
                    self.push_toast(
                        format!("{}{}!", UI_TEXT.login_welcome_prefix, session.display_name),
                        None,
                    );
                    self.login = LoginForm::default();
                    self.goto(Screen::Home);
                }
                Err(error) => {
                    log::error!("Login failed: {}", error);
                    self.push_toast(error.to_string(), None);
                }
            }
        }

        // Outgoing ping
        let ping_outcome = self.ping_pending.as_ref().and_then(|p| p.ready().cloned());
        if let Some(result) = ping_outcome {
            self.ping_pending = None;
            match result {
                Ok(receipt) => {
                    self.profile.record_ping_sent();
                    self.push_toast(
                        UI_TEXT.toast_ping_sent,
                        Some(format!(
                            "{}{}",
                            UI_TEXT.toast_ping_sent_detail_prefix, receipt.candidate_name
                        )),
                    );
                }
                Err(error) => {
                    log::error!("Ping failed: {}", error);
                    self.push_toast(error.to_string(), None);
                }
            }
        }

        // Password reset steps
        let reset_outcome = self.reset_pending.as_ref().and_then(|p| p.ready().cloned());
        if let Some(result) = reset_outcome {
            self.reset_pending = None;
            match result {
                Ok(action) => {
                    self.reset.on_action_complete(action);
                    if action == ResetAction::ApplyNewPassword {
                        self.reset_done_at = Some(crate::utils::app_time::now());
                    }
                }
                Err(error) => {
                    log::error!("Reset step failed: {}", error);
                    self.push_toast(error.to_string(), None);
                }
            }
        }

        // Keep painting while anything is still in flight so the promises
        // are observed promptly
        if self.login_pending.is_some() || self.ping_pending.is_some() || self.reset_pending.is_some()
        {
            ctx.request_repaint();
        }
    }

    /// Wall-clock driven transitions: the reset-success auto-redirect and
    /// the celebration overlay expiry.
    pub(super) fn tick_timers(&mut self, ctx: &egui::Context) {
        if let Some(done_at) = self.reset_done_at {
            if seconds_since(done_at) >= BACKEND.reset_redirect_secs {
                self.reset_done_at = None;
                self.reset = Default::default();
                if self.screen == Screen::ForgotPassword {
                    self.goto(Screen::Login);
                }
            } else {
                ctx.request_repaint();
            }
        }

        if let Some(celebration) = &self.celebration {
            if seconds_since(celebration.since) > UI_CONFIG.celebration_secs {
                self.celebration = None;
            } else {
                ctx.request_repaint();
            }
        }
    }
}
