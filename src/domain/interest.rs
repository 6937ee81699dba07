use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The ten top-level interest categories.
///
/// Candidates on the map carry these, and the proximity filter intersects
/// against them. The registration wizard additionally offers the
/// sub-interest labels below each category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Interest {
    Music,
    Fitness,
    Travel,
    Food,
    Art,
    Tech,
    Photography,
    Gaming,
    Reading,
    Sports,
}

impl Interest {
    /// Sub-interest labels shown when a category bubble is expanded on the
    /// final wizard step.
    pub fn sub_interests(self) -> &'static [&'static str] {
        match self {
            Interest::Music => &[
                "Hip Hop",
                "Jazz",
                "Rock",
                "Pop",
                "Classical",
                "Electronic",
                "R&B",
                "Country",
                "Indie",
                "Metal",
            ],
            Interest::Fitness => &[
                "Gym", "Yoga", "Running", "Cycling", "Swimming", "CrossFit", "Pilates", "Hiking",
                "Boxing", "Dance",
            ],
            Interest::Travel => &[
                "Beach",
                "Mountains",
                "Cities",
                "Road Trips",
                "Backpacking",
                "Luxury",
                "Adventure",
                "Camping",
                "Cruises",
                "International",
            ],
            Interest::Food => &[
                "Cooking",
                "Baking",
                "Italian",
                "Japanese",
                "Mexican",
                "Vegan",
                "BBQ",
                "Fine Dining",
                "Street Food",
                "Desserts",
            ],
            Interest::Art => &[
                "Painting",
                "Drawing",
                "Sculpture",
                "Digital Art",
                "Photography",
                "Crafts",
                "Street Art",
                "Museums",
                "Design",
                "Animation",
            ],
            Interest::Tech => &[
                "Coding",
                "AI",
                "Gadgets",
                "Gaming Tech",
                "Web Dev",
                "Apps",
                "Crypto",
                "VR/AR",
                "Robotics",
                "Cybersecurity",
            ],
            Interest::Photography => &[
                "Portrait",
                "Landscape",
                "Street",
                "Wildlife",
                "Fashion",
                "Macro",
                "Astrophotography",
                "Film",
                "Drone",
                "Event",
            ],
            Interest::Gaming => &[
                "PC Gaming",
                "Console",
                "Mobile",
                "RPG",
                "FPS",
                "Strategy",
                "Indie Games",
                "Retro",
                "MMO",
                "E-Sports",
            ],
            Interest::Reading => &[
                "Fiction",
                "Non-Fiction",
                "Sci-Fi",
                "Fantasy",
                "Mystery",
                "Romance",
                "Biography",
                "Self-Help",
                "Poetry",
                "Comics",
            ],
            Interest::Sports => &[
                "Football",
                "Basketball",
                "Soccer",
                "Tennis",
                "Baseball",
                "Golf",
                "Hockey",
                "Cricket",
                "Volleyball",
                "Martial Arts",
            ],
        }
    }

    /// Reverse lookup: which category does a sub-interest label belong to?
    ///
    /// Sub-interest labels are unique across categories except that a category
    /// name can reappear as a label ("Photography" under Art); the first
    /// category in declaration order wins, which matches the wizard's display
    /// order.
    pub fn category_of(sub: &str) -> Option<Interest> {
        use strum::IntoEnumIterator;
        Interest::iter().find(|cat| cat.sub_interests().contains(&sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_category_offers_sub_interests() {
        for cat in Interest::iter() {
            assert!(!cat.sub_interests().is_empty(), "{cat} has no sub-interests");
        }
    }

    #[test]
    fn category_lookup_round_trips() {
        assert_eq!(Interest::category_of("Hip Hop"), Some(Interest::Music));
        assert_eq!(Interest::category_of("Martial Arts"), Some(Interest::Sports));
        assert_eq!(Interest::category_of("Knitting"), None);
    }

    #[test]
    fn ambiguous_label_resolves_to_first_category() {
        // "Photography" is both a category and a sub-interest under Art;
        // lookup walks declaration order, so Art wins over the Photography
        // category's own subs (which do not contain the literal label).
        assert_eq!(Interest::category_of("Photography"), Some(Interest::Art));
    }
}
