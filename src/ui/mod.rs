// User interface components
pub mod app;
pub mod app_async;
pub mod config;
pub mod styles;
pub mod toasts;
pub mod ui_forgot;
pub mod ui_landing;
pub mod ui_login;
pub mod ui_map;
pub mod ui_messages;
pub mod ui_panels;
pub mod ui_pings;
pub mod ui_profile;
pub mod ui_register;
pub mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::SparkApp;
pub use config::UI_CONFIG;
