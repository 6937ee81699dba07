//! Discovery (map) configuration

/// One mile, in feet. The radius slider tops out here.
pub const MILE_FT: u32 = 5280;

/// Configuration for the map tab's proximity filter
pub struct DiscoveryConfig {
    // Radius slider bounds and step (feet)
    pub radius_min_ft: u32,
    pub radius_max_ft: u32,
    pub radius_step_ft: u32,
    // Radius applied before the user ever touches the filter sheet
    pub default_radius_ft: u32,
}

pub const DISCOVERY: DiscoveryConfig = DiscoveryConfig {
    radius_min_ft: 0,
    radius_max_ft: MILE_FT,
    radius_step_ft: 50,
    default_radius_ft: MILE_FT,
};
