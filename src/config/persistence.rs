//! Where eframe stores persisted UI state on native builds.

pub const APP_STATE_PATH: &str = "spark_state.json";
