// src/utils/app_time.rs
//
// `std::time::Instant` is unavailable on wasm32-unknown-unknown, so every
// timer in the app (toasts, the celebration overlay, the reset auto-redirect)
// goes through this alias instead.

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> AppInstant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> AppInstant {
    web_time::Instant::now()
}

/// Seconds elapsed since `since`, as f32 (egui animation math wants f32).
pub fn seconds_since(since: AppInstant) -> f32 {
    since.elapsed().as_secs_f32()
}
