use serde::{Deserialize, Serialize};

use crate::domain::interest::Interest;

/// Stable identifier for a nearby user. Seed data assigns these once; they
/// are never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub u32);

/// Normalized map position, both axes in percent of the visible map area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f32,
    pub y: f32,
}

impl MapPoint {
    pub fn in_bounds(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

/// A nearby user shown on the discovery map.
///
/// Immutable for the session: the seed defines the full candidate set and
/// nothing creates or destroys candidates at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub age: u32,
    /// Distance from the viewer, in feet
    pub distance_ft: u32,
    pub interests: Vec<Interest>,
    /// Seed string for the deterministic avatar color/initial
    pub avatar_seed: String,
    pub map_pos: MapPoint,
}

impl Candidate {
    pub fn first_initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_point_bounds() {
        assert!(MapPoint { x: 0.0, y: 100.0 }.in_bounds());
        assert!(!MapPoint { x: -1.0, y: 50.0 }.in_bounds());
        assert!(!MapPoint { x: 50.0, y: 100.5 }.in_bounds());
    }
}
