use std::time::Duration;

use poll_promise::Promise;

use crate::backend::messages::{BackendError, Credentials, PingReceipt, Session};
use crate::config::BACKEND;
use crate::domain::reset::ResetAction;
use crate::domain::CandidateId;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Stand-in for the identity/location/messaging services.
///
/// Every call resolves successfully after a fixed latency. On native the
/// delay runs on a spawned thread; on wasm there is no blocking thread to
/// spawn, so calls resolve immediately.
#[derive(Debug, Clone)]
pub struct MockBackend {
    latency: Duration,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(BACKEND.simulated_latency_ms),
        }
    }
}

impl MockBackend {
    #[cfg(test)]
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    pub fn authenticate(&self, credentials: Credentials) -> Promise<Result<Session, BackendError>> {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_backend_requests {
            log::info!("[backend] authenticate {}", credentials.email);
        }

        self.resolve(move || {
            let local_part = credentials.email.split('@').next().unwrap_or("").trim();
            let display_name = if local_part.is_empty() {
                "there".to_string()
            } else {
                local_part.to_string()
            };
            Ok(Session { display_name })
        })
    }

    pub fn send_ping(
        &self,
        candidate_id: CandidateId,
        candidate_name: String,
    ) -> Promise<Result<PingReceipt, BackendError>> {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_backend_requests {
            log::info!("[backend] send_ping -> {}", candidate_name);
        }

        self.resolve(move || {
            Ok(PingReceipt {
                candidate_id,
                candidate_name,
            })
        })
    }

    /// Run one step of the password-reset flow. The resolved value echoes the
    /// action so the caller can feed it back into the flow state machine.
    pub fn run_reset_action(&self, action: ResetAction) -> Promise<Result<ResetAction, BackendError>> {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_backend_requests {
            log::info!("[backend] reset action {:?}", action);
        }

        self.resolve(move || Ok(action))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn resolve<T: Send + 'static>(
        &self,
        produce: impl FnOnce() -> T + Send + 'static,
    ) -> Promise<T> {
        let latency = self.latency;
        Promise::spawn_thread("mock_backend", move || {
            if !latency.is_zero() {
                std::thread::sleep(latency);
            }
            produce()
        })
    }

    #[cfg(target_arch = "wasm32")]
    fn resolve<T: Send + 'static>(
        &self,
        produce: impl FnOnce() -> T + Send + 'static,
    ) -> Promise<T> {
        Promise::from_ready(produce())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticate_always_succeeds_with_a_display_name() {
        let backend = MockBackend::instant();
        let promise = backend.authenticate(Credentials {
            email: "jordan@example.com".into(),
            password: "pw".into(),
        });
        let session = promise.block_until_ready().as_ref().expect("mock never fails");
        assert_eq!(session.display_name, "jordan");
    }

    #[test]
    fn empty_email_still_authenticates() {
        let backend = MockBackend::instant();
        let promise = backend.authenticate(Credentials {
            email: String::new(),
            password: String::new(),
        });
        let session = promise.block_until_ready().as_ref().unwrap();
        assert_eq!(session.display_name, "there");
    }

    #[test]
    fn ping_receipt_echoes_the_candidate() {
        let backend = MockBackend::instant();
        let promise = backend.send_ping(CandidateId(3), "Emma Rodriguez".into());
        let receipt = promise.block_until_ready().as_ref().unwrap();
        assert_eq!(receipt.candidate_id, CandidateId(3));
        assert_eq!(receipt.candidate_name, "Emma Rodriguez");
    }

    #[test]
    fn reset_actions_echo_back() {
        let backend = MockBackend::instant();
        let promise = backend.run_reset_action(ResetAction::SendCode);
        assert_eq!(
            *promise.block_until_ready().as_ref().unwrap(),
            ResetAction::SendCode
        );
    }
}
