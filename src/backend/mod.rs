// The asynchronous boundary toward the (future) real services.
//
// Everything UI-side talks to these types only; swapping the mock for a real
// client must not change any caller.

pub mod messages;
pub mod mock;

// Re-export key components
pub use messages::{BackendError, Credentials, PingReceipt, Session};
pub use mock::MockBackend;
