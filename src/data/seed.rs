//! The embedded mock world.
//!
//! A real deployment would replace this module with calls to the identity,
//! location and messaging services behind `backend::MockBackend`; until then
//! the whole world ships as one JSON asset compiled into the binary, so the
//! native and wasm builds see identical data.

use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::config::DISCOVERY;
use crate::domain::Candidate;
use crate::models::{Conversation, PingRequest, Profile};

const SEED_JSON: &str = include_str!("seed.json");

/// Everything the app needs to boot: the candidate set, seeded chat threads,
/// pending pings and the viewer profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    pub candidates: Vec<Candidate>,
    pub conversations: Vec<Conversation>,
    pub ping_requests: Vec<PingRequest>,
    pub profile: Profile,
}

impl SeedData {
    /// Structural checks the UI relies on. Run at boot and by `make_seed`.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for candidate in &self.candidates {
            if !seen.insert(candidate.id) {
                bail!("duplicate candidate id {:?}", candidate.id);
            }
            if !candidate.map_pos.in_bounds() {
                bail!(
                    "candidate {} has out-of-bounds map position {:?}",
                    candidate.name,
                    candidate.map_pos
                );
            }
            if candidate.distance_ft > DISCOVERY.radius_max_ft {
                bail!(
                    "candidate {} is {} ft away, beyond the {} ft slider maximum and thus never visible",
                    candidate.name,
                    candidate.distance_ft,
                    DISCOVERY.radius_max_ft
                );
            }
        }

        let mut conv_ids = HashSet::new();
        for conv in &self.conversations {
            if !conv_ids.insert(conv.id) {
                bail!("duplicate conversation id {:?}", conv.id);
            }
        }

        let mut ping_ids = HashSet::new();
        for ping in &self.ping_requests {
            if !ping_ids.insert(ping.id) {
                bail!("duplicate ping request id {}", ping.id);
            }
        }

        if self.profile.name.trim().is_empty() {
            bail!("seed profile has no name");
        }

        Ok(())
    }
}

/// Parse and validate the embedded seed.
pub fn load_seed() -> Result<SeedData> {
    let seed: SeedData =
        serde_json::from_str(SEED_JSON).context("failed to parse embedded seed.json")?;
    seed.validate().context("embedded seed.json is invalid")?;
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_seed_parses_and_validates() {
        let seed = load_seed().expect("embedded seed must be valid");
        assert_eq!(seed.candidates.len(), 5);
        assert_eq!(seed.conversations.len(), 4);
        assert_eq!(seed.ping_requests.len(), 3);
        assert_eq!(seed.profile.name, "Jordan Taylor");
    }

    #[test]
    fn every_seeded_candidate_is_visible_at_the_default_radius() {
        let seed = load_seed().unwrap();
        let query = crate::domain::DiscoveryQuery::default();
        assert_eq!(query.visible(&seed.candidates).len(), seed.candidates.len());
    }

    #[test]
    fn duplicate_candidate_ids_are_rejected() {
        let mut seed = load_seed().unwrap();
        let dup = seed.candidates[0].clone();
        seed.candidates.push(dup);
        assert!(seed.validate().is_err());
    }
}
