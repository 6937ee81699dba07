use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};

use crate::backend::{BackendError, MockBackend, PingReceipt, Session};
use crate::data::SeedData;
use crate::domain::reset::ResetAction;
use crate::domain::{
    Candidate, CandidateId, DiscoveryQuery, Interest, PasswordResetFlow, RegistrationWizard,
};
use crate::models::{Conversation, ConversationId, PingInbox, Profile, ProfileEdit};
use crate::ui::config::UI_TEXT;
use crate::ui::toasts::Toast;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::AppInstant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Top-level screen, exactly one active at a time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Landing,
    Login,
    Register,
    ForgotPassword,
    Home,
}

/// Bottom tabs on the Home screen.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum HomeTab {
    #[default]
    Map,
    Messages,
    Profile,
}

/// Transient login form state.
#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// The "You're now connected!" overlay after accepting a ping.
pub struct Celebration {
    pub name: String,
    pub since: AppInstant,
}

#[derive(Deserialize, Serialize)]
pub struct SparkApp {
    // Persisted UI state
    #[serde(default)]
    pub(super) profile: Profile,
    #[serde(default)]
    pub(super) query: DiscoveryQuery,

    // Seeded world - runtime only
    #[serde(skip)]
    pub(super) candidates: Vec<Candidate>,
    #[serde(skip)]
    pub(super) conversations: Vec<Conversation>,
    #[serde(skip)]
    pub(super) ping_inbox: PingInbox,

    // Navigation
    #[serde(skip)]
    pub(super) screen: Screen,
    #[serde(skip)]
    pub(super) home_tab: HomeTab,

    // Auth flows
    #[serde(skip)]
    pub(super) login: LoginForm,
    #[serde(skip)]
    pub(super) wizard: RegistrationWizard,
    #[serde(skip)]
    pub(super) expanded_category: Option<Interest>,
    #[serde(skip)]
    pub(super) reset: PasswordResetFlow,
    #[serde(skip)]
    pub(super) reset_done_at: Option<AppInstant>,

    // Map tab
    #[serde(skip)]
    pub(super) selected_candidate: Option<CandidateId>,
    #[serde(skip)]
    pub(super) filter_open: bool,

    // Messages tab
    #[serde(skip)]
    pub(super) conversation_search: String,
    #[serde(skip)]
    pub(super) active_conversation: Option<ConversationId>,
    #[serde(skip)]
    pub(super) chat_draft: String,
    #[serde(skip)]
    pub(super) confirm_delete: Option<ConversationId>,

    // Profile tab
    #[serde(skip)]
    pub(super) profile_edit: Option<ProfileEdit>,

    // Ping requests
    #[serde(skip)]
    pub(super) show_ping_requests: bool,
    #[serde(skip)]
    pub(super) celebration: Option<Celebration>,

    // Backend boundary
    #[serde(skip)]
    pub(super) backend: MockBackend,
    #[serde(skip)]
    pub(super) login_pending: Option<Promise<Result<Session, BackendError>>>,
    #[serde(skip)]
    pub(super) ping_pending: Option<Promise<Result<PingReceipt, BackendError>>>,
    #[serde(skip)]
    pub(super) reset_pending: Option<Promise<Result<ResetAction, BackendError>>>,

    // Feedback
    #[serde(skip)]
    pub(super) toasts: Vec<Toast>,
}

impl SparkApp {
    pub fn new(cc: &eframe::CreationContext<'_>, seed: SeedData, skip_auth: bool) -> Self {
        let mut app: SparkApp;

        // Attempt to load the persisted state (profile + filter prefs)
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Successfully loaded persisted state");
                }
                app = value;
            } else {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No persisted Spark state found. Creating anew.");
                }
                app = SparkApp::new_with_initial_state();
            }
        } else {
            app = SparkApp::new_with_initial_state();
        }

        app.apply_seed(seed);

        if skip_auth {
            app.screen = Screen::Home;
        }

        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            profile: Profile::default(),
            query: DiscoveryQuery::default(),
            candidates: Vec::new(),
            conversations: Vec::new(),
            ping_inbox: PingInbox::default(),
            screen: Screen::default(),
            home_tab: HomeTab::default(),
            login: LoginForm::default(),
            wizard: RegistrationWizard::default(),
            expanded_category: None,
            reset: PasswordResetFlow::default(),
            reset_done_at: None,
            selected_candidate: None,
            filter_open: false,
            conversation_search: String::new(),
            active_conversation: None,
            chat_draft: String::new(),
            confirm_delete: None,
            profile_edit: None,
            show_ping_requests: false,
            celebration: None,
            backend: MockBackend::default(),
            login_pending: None,
            ping_pending: None,
            reset_pending: None,
            toasts: Vec::new(),
        }
    }

    /// Install the seeded world. A persisted profile survives restarts; an
    /// empty one adopts the seed profile.
    pub fn apply_seed(&mut self, seed: SeedData) {
        self.candidates = seed.candidates;
        self.conversations = seed.conversations;
        self.ping_inbox = PingInbox::new(seed.ping_requests);
        if self.profile.name.trim().is_empty() {
            self.profile = seed.profile;
        }
    }

    // ----- Navigation ---------------------------------------------------

    pub(super) fn goto(&mut self, screen: Screen) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Screen: {:?} -> {:?}", self.screen, screen);
        }
        self.screen = screen;
    }

    pub(super) fn select_tab(&mut self, tab: HomeTab) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            if self.home_tab != tab {
                log::info!("Tab: {} -> {}", self.home_tab, tab);
            }
        }
        self.home_tab = tab;
    }

    /// Back to Landing, dropping everything session-scoped. The seeded world
    /// and the (persisted) profile stay.
    pub(super) fn logout(&mut self) {
        self.login = LoginForm::default();
        self.wizard = RegistrationWizard::default();
        self.expanded_category = None;
        self.reset = PasswordResetFlow::default();
        self.reset_done_at = None;
        self.selected_candidate = None;
        self.filter_open = false;
        self.active_conversation = None;
        self.chat_draft = String::new();
        self.confirm_delete = None;
        self.profile_edit = None;
        self.show_ping_requests = false;
        self.celebration = None;
        self.login_pending = None;
        self.ping_pending = None;
        self.reset_pending = None;
        self.goto(Screen::Landing);
    }

    // ----- Registration -------------------------------------------------

    /// Called when the wizard reports Completed: the collected identity
    /// becomes the viewer profile and the app lands on Home.
    pub(super) fn complete_registration(&mut self) {
        let name = self.wizard.name.clone();
        let bio = self.wizard.bio.clone();
        let categories = self.wizard.derived_categories();
        self.profile.adopt_registration(name, bio, categories);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_wizard_transitions {
            log::info!("Registration complete for {}", self.profile.name);
        }

        self.wizard = RegistrationWizard::default();
        self.expanded_category = None;
        self.push_toast(UI_TEXT.wizard_welcome_toast, None);
        self.goto(Screen::Home);
    }

    // ----- Backend round trips ------------------------------------------

    pub(super) fn start_login(&mut self) {
        if self.login_pending.is_some() {
            return;
        }
        let credentials = crate::backend::Credentials {
            email: self.login.email.clone(),
            password: self.login.password.clone(),
        };
        self.login_pending = Some(self.backend.authenticate(credentials));
    }

    pub(super) fn start_ping(&mut self, candidate_id: CandidateId) {
        if self.ping_pending.is_some() {
            return;
        }
        let Some(candidate) = self.candidates.iter().find(|c| c.id == candidate_id) else {
            return;
        };
        self.ping_pending = Some(self.backend.send_ping(candidate_id, candidate.name.clone()));
    }

    pub(super) fn start_reset_action(&mut self, action: ResetAction) {
        if self.reset_pending.is_some() {
            return;
        }
        self.reset_pending = Some(self.backend.run_reset_action(action));
    }

    pub(super) fn is_authenticating(&self) -> bool {
        self.login_pending.is_some()
    }

    pub(super) fn is_pinging(&self) -> bool {
        self.ping_pending.is_some()
    }

    pub(super) fn is_resetting(&self) -> bool {
        self.reset_pending.is_some()
    }

    // ----- Ping inbox ---------------------------------------------------

    pub(super) fn accept_ping(&mut self, id: u32) {
        if let Some(request) = self.ping_inbox.accept(id) {
            self.profile.record_connection();
            self.celebration = Some(Celebration {
                name: request.name,
                since: crate::utils::app_time::now(),
            });
        }
    }

    pub(super) fn ignore_ping(&mut self, id: u32) {
        self.ping_inbox.ignore(id);
    }

    // ----- Conversations ------------------------------------------------

    pub(super) fn open_conversation(&mut self, id: ConversationId) {
        if let Some(conv) = self.conversations.iter_mut().find(|c| c.id == id) {
            conv.mark_read();
            self.active_conversation = Some(id);
            self.chat_draft.clear();
        }
    }

    pub(super) fn close_conversation(&mut self) {
        self.active_conversation = None;
        self.chat_draft.clear();
        self.confirm_delete = None;
    }

    pub(super) fn delete_conversation(&mut self, id: ConversationId) {
        self.conversations.retain(|c| c.id != id);
        if self.active_conversation == Some(id) {
            self.close_conversation();
        }
        self.push_toast(UI_TEXT.toast_deleted, None);
    }

    pub(super) fn block_conversation(&mut self, id: ConversationId) {
        // Blocking in the mock just drops the thread like the service would
        self.conversations.retain(|c| c.id != id);
        if self.active_conversation == Some(id) {
            self.close_conversation();
        }
        self.push_toast(UI_TEXT.toast_blocked, None);
    }
}

impl eframe::App for SparkApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop any in-flight mock round trips
        self.login_pending = None;
        self.ping_pending = None;
        self.reset_pending = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Resolve any completed backend round trips first so this frame
        // renders their outcome
        self.poll_backend(ctx);
        self.tick_timers(ctx);

        self.handle_global_shortcuts(ctx);
        self.prune_toasts();

        self.render_current_screen(ctx);
        self.render_toasts(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_seed;

    fn seeded_app() -> SparkApp {
        let mut app = SparkApp::new_with_initial_state();
        app.apply_seed(load_seed().unwrap());
        app
    }

    #[test]
    fn seed_populates_the_world_and_profile() {
        let app = seeded_app();
        assert_eq!(app.candidates.len(), 5);
        assert_eq!(app.profile.name, "Jordan Taylor");
        assert_eq!(app.ping_inbox.count(), 3);
    }

    #[test]
    fn persisted_profile_survives_reseeding() {
        let mut app = SparkApp::new_with_initial_state();
        app.profile.name = "Returning User".into();
        app.apply_seed(load_seed().unwrap());
        assert_eq!(app.profile.name, "Returning User");
    }

    #[test]
    fn logout_returns_to_landing_and_clears_session_state() {
        let mut app = seeded_app();
        app.screen = Screen::Home;
        app.home_tab = HomeTab::Messages;
        app.active_conversation = Some(ConversationId(1));
        app.chat_draft = "draft".into();
        app.show_ping_requests = true;

        app.logout();
        assert_eq!(app.screen, Screen::Landing);
        assert!(app.active_conversation.is_none());
        assert!(app.chat_draft.is_empty());
        assert!(!app.show_ping_requests);
        // Seeded world is untouched
        assert_eq!(app.conversations.len(), 4);
    }

    #[test]
    fn accepting_a_ping_records_the_connection_and_celebrates() {
        let mut app = seeded_app();
        let before = app.profile.stats.connections;
        app.accept_ping(1);
        assert_eq!(app.ping_inbox.count(), 2);
        assert_eq!(app.profile.stats.connections, before + 1);
        let celebration = app.celebration.as_ref().expect("celebration raised");
        assert_eq!(celebration.name, "Olivia Martinez");
    }

    #[test]
    fn ignoring_a_ping_neither_connects_nor_celebrates() {
        let mut app = seeded_app();
        let before = app.profile.stats.connections;
        app.ignore_ping(2);
        assert_eq!(app.ping_inbox.count(), 2);
        assert_eq!(app.profile.stats.connections, before);
        assert!(app.celebration.is_none());
    }

    #[test]
    fn opening_a_conversation_clears_its_unread_count() {
        let mut app = seeded_app();
        assert!(app.conversations[0].unread > 0);
        app.open_conversation(ConversationId(1));
        assert_eq!(app.conversations[0].unread, 0);
        assert_eq!(app.active_conversation, Some(ConversationId(1)));
    }

    #[test]
    fn deleting_the_active_conversation_closes_the_chat_view() {
        let mut app = seeded_app();
        app.open_conversation(ConversationId(2));
        app.delete_conversation(ConversationId(2));
        assert!(app.active_conversation.is_none());
        assert_eq!(app.conversations.len(), 3);
    }

    #[test]
    fn completing_the_wizard_adopts_the_collected_identity() {
        let mut app = seeded_app();
        app.wizard.name = "Riley Nguyen".into();
        app.wizard.bio = "Hello!".into();
        app.wizard.toggle_interest("Jazz");
        app.complete_registration();

        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.profile.name, "Riley Nguyen");
        assert_eq!(app.profile.bio, "Hello!");
        assert!(app.profile.interests.contains(&Interest::Music));
        // The wizard is ready for a fresh run
        assert!(app.wizard.name.is_empty());
    }
}
