use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    /// Brand purple, used for primary actions and the viewer marker
    pub primary: Color32,
    /// Brand pink, used for accents, selected chips and outgoing bubbles
    pub accent: Color32,
    /// Status-dot mint on the profile card
    pub mint: Color32,
    pub background: Color32,
    pub panel: Color32,
    /// Pale blue map backdrop
    pub map_fill: Color32,
    pub map_street: Color32,
    pub map_park: Color32,
    pub bubble_me: Color32,
    pub bubble_them: Color32,
    pub heading: Color32,
    pub label: Color32,
    pub subdued: Color32,
    /// Online indicator dot (the accent pink, per the design)
    pub online: Color32,
    pub danger: Color32,
    pub warning: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Seconds a toast stays on screen
    pub toast_secs: f32,
    /// Seconds the connection celebration overlay lingers
    pub celebration_secs: f32,
    /// Avatar marker radius on the map, in points
    pub marker_radius: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        primary: Color32::from_rgb(155, 143, 230),  // #9B8FE6
        accent: Color32::from_rgb(230, 127, 185),   // #E67FB9
        mint: Color32::from_rgb(0, 198, 174),       // #00C6AE
        background: Color32::from_rgb(247, 249, 250), // #F7F9FA
        panel: Color32::WHITE,
        map_fill: Color32::from_rgb(232, 244, 248), // #E8F4F8
        map_street: Color32::from_rgba_premultiplied(156, 163, 175, 60),
        map_park: Color32::from_rgba_premultiplied(74, 160, 100, 40),
        bubble_me: Color32::from_rgb(214, 135, 208), // midpoint of the brand gradient
        bubble_them: Color32::WHITE,
        heading: Color32::from_rgb(17, 24, 39),
        label: Color32::from_rgb(55, 65, 81),
        subdued: Color32::from_rgb(107, 114, 128),
        online: Color32::from_rgb(230, 127, 185),
        danger: Color32::from_rgb(220, 38, 38),
        warning: Color32::from_rgb(234, 88, 12),
    },
    toast_secs: 3.0,
    celebration_secs: 3.0,
    marker_radius: 22.0,
};
