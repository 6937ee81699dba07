use serde::{Deserialize, Serialize};

use crate::domain::Interest;

/// An incoming connection request from a nearby user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingRequest {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub distance_ft: u32,
    pub interests: Vec<Interest>,
    pub avatar_seed: String,
}

impl PingRequest {
    pub fn first_initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// Pending ping requests, newest first as seeded.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PingInbox {
    requests: Vec<PingRequest>,
}

impl PingInbox {
    pub fn new(requests: Vec<PingRequest>) -> Self {
        Self { requests }
    }

    pub fn pending(&self) -> &[PingRequest] {
        &self.requests
    }

    pub fn count(&self) -> usize {
        self.requests.len()
    }

    /// Remove and return the accepted request so the caller can record the
    /// new connection.
    pub fn accept(&mut self, id: u32) -> Option<PingRequest> {
        let idx = self.requests.iter().position(|r| r.id == id)?;
        Some(self.requests.remove(idx))
    }

    pub fn ignore(&mut self, id: u32) -> bool {
        let before = self.requests.len();
        self.requests.retain(|r| r.id != id);
        self.requests.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inbox() -> PingInbox {
        PingInbox::new(vec![
            PingRequest {
                id: 1,
                name: "Olivia Martinez".into(),
                age: 25,
                distance_ft: 15,
                interests: vec![Interest::Music, Interest::Travel],
                avatar_seed: "Olivia".into(),
            },
            PingRequest {
                id: 2,
                name: "James Wilson".into(),
                age: 28,
                distance_ft: 22,
                interests: vec![Interest::Fitness, Interest::Food],
                avatar_seed: "James".into(),
            },
        ])
    }

    #[test]
    fn accept_removes_and_returns_the_request() {
        let mut inbox = inbox();
        let accepted = inbox.accept(1).expect("request 1 is pending");
        assert_eq!(accepted.name, "Olivia Martinez");
        assert_eq!(inbox.count(), 1);
        assert!(inbox.accept(1).is_none());
    }

    #[test]
    fn ignore_removes_silently() {
        let mut inbox = inbox();
        assert!(inbox.ignore(2));
        assert!(!inbox.ignore(2));
        assert_eq!(inbox.count(), 1);
    }
}
