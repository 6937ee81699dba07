// Session models for the mock world
// These modules contain mutable state owned by the running app, independent of UI

pub mod conversation;
pub mod ping;
pub mod profile;

// Re-export key types for convenience
pub use conversation::{Conversation, ConversationId, Message, MessageSender, filter_by_name};
pub use ping::{PingInbox, PingRequest};
pub use profile::{Profile, ProfileEdit, ProfileStats};
