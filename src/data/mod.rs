// Seed world loading and validation
pub mod seed;

// Re-export commonly used types
pub use seed::{SeedData, load_seed};
