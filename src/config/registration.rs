//! Registration wizard and password-reset configuration

pub struct RegistrationConfig {
    // Age bounds shown on the age step
    pub min_age: u32,
    pub max_age: u32,
    // Hinted on the password step (the wizard only checks non-empty)
    pub password_hint_len: usize,
    // Enforced by the reset flow's new-password phase
    pub reset_password_min_len: usize,
    pub bio_max_len: usize,
    // Length of the one-time code in the reset flow
    pub otp_len: usize,
}

pub const REGISTRATION: RegistrationConfig = RegistrationConfig {
    min_age: 18,
    max_age: 100,
    password_hint_len: 6,
    reset_password_min_len: 8,
    bio_max_len: 150,
    otp_len: 6,
};
