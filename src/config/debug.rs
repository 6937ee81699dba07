//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` so debug
//! builds stay readable.

pub struct DebugFlags {
    /// Emit UI interaction logs (screen switches, tab switches, filter edits).
    pub print_ui_interactions: bool,
    /// Emit a line for every mock backend request and completion.
    pub print_backend_requests: bool,
    /// Emit wizard and reset-flow step transitions.
    pub print_wizard_transitions: bool,
    /// Emit state save/restore diagnostics on startup and shutdown.
    pub print_state_serde: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_backend_requests: false,
    print_wizard_transitions: false,
    print_state_serde: false,
};
