//! Configuration module for the spark application.

pub mod backend;
pub mod discovery;
pub mod persistence;
pub mod registration;

mod debug; // Can be private now because we have a public re-export. Forces files to use crate::config::DEBUG_FLAGS not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use backend::BACKEND;
pub use discovery::{DISCOVERY, MILE_FT};
pub use persistence::APP_STATE_PATH;
pub use registration::REGISTRATION;
