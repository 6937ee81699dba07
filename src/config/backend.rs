//! Mock backend timing knobs.
//!
//! Every simulated round trip resolves after the same fixed latency; there is
//! no retry, cancellation, or failure path until a real backend replaces the
//! mock behind the same promise boundary.

pub struct BackendConfig {
    /// Fixed latency applied to every mock call (milliseconds)
    pub simulated_latency_ms: u64,
    /// How long the reset-success panel lingers before returning to login (seconds)
    pub reset_redirect_secs: f32,
}

pub const BACKEND: BackendConfig = BackendConfig {
    simulated_latency_ms: 1_000,
    reset_redirect_secs: 2.0,
};
