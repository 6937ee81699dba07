use serde::{Deserialize, Serialize};

use crate::config::REGISTRATION;

/// Phases of the forgot-password flow, in order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetPhase {
    #[default]
    Email,
    Otp,
    NewPassword,
    Done,
}

/// A backend round trip requested by the flow. The caller runs it through
/// the mock backend and reports completion via `on_action_complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetAction {
    SendCode,
    /// Re-request the code from the Otp phase; completion clears the entry
    ResendCode,
    VerifyCode,
    ApplyNewPassword,
}

/// The password-reset state machine.
///
/// Unlike the registration wizard, the new-password phase here DOES block on
/// a password/confirmation mismatch.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PasswordResetFlow {
    pub phase: ResetPhase,
    pub email: String,
    /// Digits only; the UI strips everything else on input
    pub otp: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordResetFlow {
    pub fn can_submit(&self) -> bool {
        match self.phase {
            ResetPhase::Email => !self.email.trim().is_empty(),
            ResetPhase::Otp => self.otp.len() == REGISTRATION.otp_len,
            ResetPhase::NewPassword => {
                !self.new_password.is_empty()
                    && self.new_password.len() >= REGISTRATION.reset_password_min_len
                    && self.new_password == self.confirm_password
            }
            ResetPhase::Done => false,
        }
    }

    /// Inline warning on the new-password phase.
    pub fn password_mismatch(&self) -> bool {
        !self.confirm_password.is_empty() && self.new_password != self.confirm_password
    }

    /// The backend call the current phase's submit button triggers, or None
    /// when the phase is not submittable.
    pub fn submit(&self) -> Option<ResetAction> {
        if !self.can_submit() {
            return None;
        }
        match self.phase {
            ResetPhase::Email => Some(ResetAction::SendCode),
            ResetPhase::Otp => Some(ResetAction::VerifyCode),
            ResetPhase::NewPassword => Some(ResetAction::ApplyNewPassword),
            ResetPhase::Done => None,
        }
    }

    /// Advance the flow after the corresponding backend promise resolved.
    pub fn on_action_complete(&mut self, action: ResetAction) {
        match action {
            ResetAction::SendCode => self.phase = ResetPhase::Otp,
            ResetAction::ResendCode => self.otp.clear(),
            ResetAction::VerifyCode => self.phase = ResetPhase::NewPassword,
            ResetAction::ApplyNewPassword => self.phase = ResetPhase::Done,
        }
    }

    /// Backward navigation. Returns false when the flow should be exited
    /// entirely (back from the first phase).
    pub fn back(&mut self) -> bool {
        match self.phase {
            ResetPhase::Email => false,
            // Any later phase returns to the email entry, keeping the address
            ResetPhase::Otp | ResetPhase::NewPassword | ResetPhase::Done => {
                self.otp.clear();
                self.new_password.clear();
                self.confirm_password.clear();
                self.phase = ResetPhase::Email;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_phase_requires_exactly_six_digits() {
        let mut flow = PasswordResetFlow {
            phase: ResetPhase::Otp,
            otp: "12345".into(),
            ..Default::default()
        };
        assert!(!flow.can_submit());
        flow.otp.push('6');
        assert!(flow.can_submit());
        assert_eq!(flow.submit(), Some(ResetAction::VerifyCode));
    }

    #[test]
    fn mismatch_blocks_the_new_password_phase() {
        let flow = PasswordResetFlow {
            phase: ResetPhase::NewPassword,
            new_password: "correcthorse".into(),
            confirm_password: "correcthors".into(),
            ..Default::default()
        };
        assert!(flow.password_mismatch());
        assert!(!flow.can_submit());
        assert_eq!(flow.submit(), None);
    }

    #[test]
    fn short_passwords_are_rejected_even_when_matching() {
        let flow = PasswordResetFlow {
            phase: ResetPhase::NewPassword,
            new_password: "short".into(),
            confirm_password: "short".into(),
            ..Default::default()
        };
        assert!(!flow.can_submit());
    }

    #[test]
    fn completed_actions_drive_the_phase_forward() {
        let mut flow = PasswordResetFlow {
            email: "a@b.c".into(),
            ..Default::default()
        };
        assert_eq!(flow.submit(), Some(ResetAction::SendCode));
        flow.on_action_complete(ResetAction::SendCode);
        assert_eq!(flow.phase, ResetPhase::Otp);

        flow.otp = "123456".into();
        flow.on_action_complete(ResetAction::VerifyCode);
        assert_eq!(flow.phase, ResetPhase::NewPassword);

        flow.on_action_complete(ResetAction::ApplyNewPassword);
        assert_eq!(flow.phase, ResetPhase::Done);
    }

    #[test]
    fn resend_clears_the_code_but_stays_put() {
        let mut flow = PasswordResetFlow {
            phase: ResetPhase::Otp,
            otp: "987654".into(),
            ..Default::default()
        };
        flow.on_action_complete(ResetAction::ResendCode);
        assert_eq!(flow.phase, ResetPhase::Otp);
        assert!(flow.otp.is_empty());
    }

    #[test]
    fn back_returns_to_email_then_exits() {
        let mut flow = PasswordResetFlow {
            phase: ResetPhase::Otp,
            email: "a@b.c".into(),
            otp: "123".into(),
            ..Default::default()
        };
        assert!(flow.back());
        assert_eq!(flow.phase, ResetPhase::Email);
        assert_eq!(flow.email, "a@b.c");
        assert!(flow.otp.is_empty());
        assert!(!flow.back());
    }
}
