use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::Interest;

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct ProfileStats {
    pub pings_sent: u32,
    pub pings_received: u32,
    pub connections: u32,
}

/// The viewer's own profile.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub bio: String,
    pub interests: BTreeSet<Interest>,
    pub avatar_seed: String,
    pub stats: ProfileStats,
}

/// Draft state for the edit dialog; applied atomically on Save.
#[derive(Debug, Clone)]
pub struct ProfileEdit {
    pub name: String,
    pub bio: String,
    pub interests: BTreeSet<Interest>,
}

impl ProfileEdit {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            bio: profile.bio.clone(),
            interests: profile.interests.clone(),
        }
    }

    pub fn toggle_interest(&mut self, interest: Interest) {
        if !self.interests.remove(&interest) {
            self.interests.insert(interest);
        }
    }
}

impl Profile {
    pub fn first_initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    pub fn apply_edit(&mut self, edit: ProfileEdit) {
        self.name = edit.name;
        self.bio = edit.bio;
        self.interests = edit.interests;
    }

    /// Adopt the identity collected by the registration wizard.
    pub fn adopt_registration(&mut self, name: String, bio: String, interests: BTreeSet<Interest>) {
        if !name.trim().is_empty() {
            self.name = name.trim().to_string();
        }
        self.bio = bio;
        if !interests.is_empty() {
            self.interests = interests;
        }
    }

    pub fn record_ping_sent(&mut self) {
        self.stats.pings_sent += 1;
    }

    /// An accepted incoming ping counts both as a received ping and a new
    /// connection.
    pub fn record_connection(&mut self) {
        self.stats.pings_received += 1;
        self.stats.connections += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_applies_atomically() {
        let mut profile = Profile {
            name: "Jordan Taylor".into(),
            bio: "old bio".into(),
            interests: BTreeSet::from([Interest::Music]),
            avatar_seed: "Jordan".into(),
            stats: ProfileStats::default(),
        };
        let mut edit = ProfileEdit::from_profile(&profile);
        edit.name = "Jordan T.".into();
        edit.bio = "new bio".into();
        edit.toggle_interest(Interest::Food);

        profile.apply_edit(edit);
        assert_eq!(profile.name, "Jordan T.");
        assert_eq!(profile.bio, "new bio");
        assert!(profile.interests.contains(&Interest::Food));
        assert!(profile.interests.contains(&Interest::Music));
    }

    #[test]
    fn counters_increment() {
        let mut profile = Profile::default();
        profile.record_ping_sent();
        profile.record_connection();
        assert_eq!(profile.stats.pings_sent, 1);
        assert_eq!(profile.stats.pings_received, 1);
        assert_eq!(profile.stats.connections, 1);
    }

    #[test]
    fn registration_does_not_blank_the_name() {
        let mut profile = Profile {
            name: "Guest".into(),
            ..Default::default()
        };
        profile.adopt_registration("  ".into(), String::new(), BTreeSet::new());
        assert_eq!(profile.name, "Guest");
    }
}
