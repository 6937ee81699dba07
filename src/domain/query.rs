use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::DISCOVERY;
use crate::domain::candidate::Candidate;
use crate::domain::interest::Interest;

/// The user-configurable radius + interest filter applied to the candidate
/// set on every frame.
///
/// An empty interest selection disables interest filtering entirely; it does
/// not mean "match nothing".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryQuery {
    /// Radius threshold in feet, clamped to the slider bounds
    pub radius_ft: u32,
    pub interests: BTreeSet<Interest>,
}

impl Default for DiscoveryQuery {
    fn default() -> Self {
        Self {
            radius_ft: DISCOVERY.default_radius_ft,
            interests: BTreeSet::new(),
        }
    }
}

impl DiscoveryQuery {
    pub fn set_radius(&mut self, radius_ft: u32) {
        self.radius_ft = radius_ft.clamp(DISCOVERY.radius_min_ft, DISCOVERY.radius_max_ft);
    }

    pub fn toggle_interest(&mut self, interest: Interest) {
        if !self.interests.remove(&interest) {
            self.interests.insert(interest);
        }
    }

    pub fn clear_interests(&mut self) {
        self.interests.clear();
    }

    /// Whether a single candidate passes the filter.
    pub fn matches(&self, candidate: &Candidate) -> bool {
        if candidate.distance_ft > self.radius_ft {
            return false;
        }
        if self.interests.is_empty() {
            return true;
        }
        candidate
            .interests
            .iter()
            .any(|interest| self.interests.contains(interest))
    }

    /// Single pass over the fixed candidate list. Cheap enough to run every
    /// frame because the set is small and static.
    pub fn visible<'a>(&self, candidates: &'a [Candidate]) -> Vec<&'a Candidate> {
        candidates.iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::candidate::{CandidateId, MapPoint};

    fn candidate(id: u32, distance_ft: u32, interests: &[Interest]) -> Candidate {
        Candidate {
            id: CandidateId(id),
            name: format!("c{id}"),
            age: 25,
            distance_ft,
            interests: interests.to_vec(),
            avatar_seed: format!("seed{id}"),
            map_pos: MapPoint { x: 50.0, y: 50.0 },
        }
    }

    #[test]
    fn radius_alone_gates_by_distance() {
        let candidates = vec![
            candidate(1, 12, &[Interest::Music]),
            candidate(2, 31, &[Interest::Art]),
            candidate(3, 42, &[Interest::Food]),
        ];
        let mut query = DiscoveryQuery::default();
        query.set_radius(31);

        let visible = query.visible(&candidates);
        let ids: Vec<u32> = visible.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn zero_radius_keeps_only_co_located_candidates() {
        let candidates = vec![
            candidate(1, 0, &[Interest::Music]),
            candidate(2, 1, &[Interest::Music]),
        ];
        let mut query = DiscoveryQuery::default();
        query.set_radius(0);

        let visible = query.visible(&candidates);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, CandidateId(1));
    }

    #[test]
    fn interest_filter_requires_a_shared_category() {
        let candidates = vec![
            candidate(1, 10, &[Interest::Music, Interest::Travel]),
            candidate(2, 10, &[Interest::Gaming]),
        ];
        let mut query = DiscoveryQuery::default();
        query.toggle_interest(Interest::Travel);

        let visible = query.visible(&candidates);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, CandidateId(1));
    }

    #[test]
    fn clearing_interests_restores_the_radius_only_set() {
        let candidates = vec![
            candidate(1, 10, &[Interest::Music]),
            candidate(2, 10, &[Interest::Gaming]),
        ];
        let mut query = DiscoveryQuery::default();
        query.toggle_interest(Interest::Music);
        assert_eq!(query.visible(&candidates).len(), 1);

        query.clear_interests();
        assert_eq!(query.visible(&candidates).len(), 2);
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut query = DiscoveryQuery::default();
        query.toggle_interest(Interest::Tech);
        assert!(query.interests.contains(&Interest::Tech));
        query.toggle_interest(Interest::Tech);
        assert!(query.interests.is_empty());
    }

    #[test]
    fn radius_is_clamped_to_slider_bounds() {
        let mut query = DiscoveryQuery::default();
        query.set_radius(99_999);
        assert_eq!(query.radius_ft, DISCOVERY.radius_max_ft);
    }
}
