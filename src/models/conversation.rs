use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageSender {
    Me,
    Them,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: MessageSender,
    /// Display label, e.g. "10:31 AM". Seeded messages carry their label
    /// verbatim; outgoing messages are stamped from the local clock.
    pub sent_at: String,
}

/// One chat thread with a connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub name: String,
    pub avatar_seed: String,
    pub online: bool,
    pub unread: u32,
    /// Display label for the list view, e.g. "2m ago"
    pub recency: String,
    #[serde(default)]
    pub muted: bool,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn first_initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// Last message text for the list preview, empty if no history yet.
    pub fn preview(&self) -> &str {
        self.messages.last().map(|m| m.text.as_str()).unwrap_or("")
    }

    /// Append an outgoing message. Whitespace-only drafts are dropped;
    /// returns whether anything was sent.
    pub fn send(&mut self, draft: &str) -> bool {
        let text = draft.trim();
        if text.is_empty() {
            return false;
        }
        let id = self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        self.messages.push(Message {
            id,
            text: text.to_string(),
            sender: MessageSender::Me,
            sent_at: Local::now().format("%-I:%M %p").to_string(),
        });
        self.recency = "now".to_string();
        true
    }

    pub fn mark_read(&mut self) {
        self.unread = 0;
    }
}

/// Case-insensitive substring filter on the peer name.
pub fn filter_by_name<'a>(conversations: &'a [Conversation], query: &str) -> Vec<&'a Conversation> {
    let needle = query.trim().to_lowercase();
    conversations
        .iter()
        .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversation(name: &str) -> Conversation {
        Conversation {
            id: ConversationId(1),
            name: name.to_string(),
            avatar_seed: name.to_string(),
            online: true,
            unread: 2,
            recency: "1h ago".to_string(),
            muted: false,
            messages: vec![Message {
                id: 1,
                text: "hello".to_string(),
                sender: MessageSender::Them,
                sent_at: "10:30 AM".to_string(),
            }],
        }
    }

    #[test]
    fn whitespace_only_drafts_are_not_sent() {
        let mut conv = conversation("Sarah Chen");
        assert!(!conv.send("   \n"));
        assert_eq!(conv.messages.len(), 1);
    }

    #[test]
    fn send_trims_and_appends_with_a_fresh_id() {
        let mut conv = conversation("Sarah Chen");
        assert!(conv.send("  see you there  "));
        let last = conv.messages.last().unwrap();
        assert_eq!(last.text, "see you there");
        assert_eq!(last.sender, MessageSender::Me);
        assert_eq!(last.id, 2);
        assert_eq!(conv.recency, "now");
    }

    #[test]
    fn search_is_case_insensitive() {
        let convs = vec![conversation("Sarah Chen"), conversation("Marcus Johnson")];
        let hits = filter_by_name(&convs, "sArAh");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Sarah Chen");
    }

    #[test]
    fn empty_query_matches_everything() {
        let convs = vec![conversation("Sarah Chen"), conversation("Marcus Johnson")];
        assert_eq!(filter_by_name(&convs, "  ").len(), 2);
    }

    #[test]
    fn mark_read_clears_unread() {
        let mut conv = conversation("Sarah Chen");
        conv.mark_read();
        assert_eq!(conv.unread, 0);
    }
}
