#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod backend;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use backend::MockBackend;
pub use data::{SeedData, load_seed};
pub use domain::{Candidate, DiscoveryQuery, Interest, RegistrationWizard};
pub use models::{Conversation, PingInbox, Profile};
pub use ui::SparkApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Skip the landing/login flow and start on the Home screen
    #[arg(long, default_value_t = false)]
    pub skip_auth: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    seed: data::SeedData,
    skip_auth: bool,
) -> Box<dyn eframe::App> {
    let app = ui::SparkApp::new(cc, seed, skip_auth);
    Box::new(app)
}
